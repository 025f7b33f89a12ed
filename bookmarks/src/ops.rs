//! Mutate-then-refresh flows.
//!
//! Every mutation issues exactly one host call and then re-fetches the
//! whole tree; the caller replaces its snapshot with the returned forest.
//! Nothing is patched locally, so the panel always shows what the host
//! reports. Concurrent flows are not coordinated: the last refresh to
//! complete wins.

#[cfg(test)]
#[path = "ops_test.rs"]
mod ops_test;

use crate::host::{BookmarkHost, HostError};
use crate::node::BookmarkNode;

/// Error returned by the mutation flows.
#[derive(Debug, thiserror::Error)]
pub enum OpsError {
    /// Folder names must contain a non-whitespace character.
    #[error("folder name must not be blank")]
    BlankFolderName,
    /// Only folders without children expose a delete action.
    #[error("folder {0} is not empty")]
    FolderNotEmpty(String),
    #[error(transparent)]
    Host(#[from] HostError),
}

/// Request to re-parent a bookmark.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRequest {
    pub id: String,
    pub parent_id: String,
}

/// Validated request to create a folder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateFolder {
    parent_id: String,
    title: String,
}

impl CreateFolder {
    /// Validate a folder draft. The title is kept as typed.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::BlankFolderName`] when `title` is empty or only
    /// whitespace.
    pub fn new(parent_id: &str, title: &str) -> Result<Self, OpsError> {
        if title.trim().is_empty() {
            return Err(OpsError::BlankFolderName);
        }
        Ok(Self {
            parent_id: parent_id.to_owned(),
            title: title.to_owned(),
        })
    }

    #[must_use]
    pub fn parent_id(&self) -> &str {
        &self.parent_id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Confirmation text shown before deleting a bookmark.
#[must_use]
pub fn delete_prompt(title: &str) -> String {
    format!("Delete \"{title}\"?")
}

/// Fetch the whole tree.
///
/// # Errors
///
/// Propagates the host error.
pub async fn refresh<H: BookmarkHost>(host: &H) -> Result<Vec<BookmarkNode>, HostError> {
    host.fetch_tree().await
}

/// Remove `id`, then refresh.
///
/// # Errors
///
/// Propagates the first host error; no refresh runs after a failed removal.
pub async fn remove_and_refresh<H: BookmarkHost>(host: &H, id: &str) -> Result<Vec<BookmarkNode>, HostError> {
    host.remove(id).await?;
    host.fetch_tree().await
}

/// Move a bookmark, then refresh.
///
/// # Errors
///
/// Propagates the first host error.
pub async fn move_and_refresh<H: BookmarkHost>(host: &H, request: &MoveRequest) -> Result<Vec<BookmarkNode>, HostError> {
    host.move_node(&request.id, &request.parent_id).await?;
    host.fetch_tree().await
}

/// Create a folder, then refresh.
///
/// # Errors
///
/// Propagates the first host error.
pub async fn create_folder_and_refresh<H: BookmarkHost>(
    host: &H,
    request: &CreateFolder,
) -> Result<Vec<BookmarkNode>, HostError> {
    host.create_folder(request.parent_id(), request.title()).await?;
    host.fetch_tree().await
}

/// Ask `confirm` with [`delete_prompt`], then remove and refresh.
///
/// Returns `Ok(None)` without touching the host when the user declines.
///
/// # Errors
///
/// Propagates the first host error.
pub async fn delete_bookmark<H, F>(host: &H, node: &BookmarkNode, confirm: F) -> Result<Option<Vec<BookmarkNode>>, HostError>
where
    H: BookmarkHost,
    F: FnOnce(&str) -> bool,
{
    if !confirm(&delete_prompt(&node.title)) {
        return Ok(None);
    }
    remove_and_refresh(host, &node.id).await.map(Some)
}

/// Remove an empty folder without confirmation, then refresh.
///
/// # Errors
///
/// Returns [`OpsError::FolderNotEmpty`] for anything but an empty folder,
/// otherwise propagates the first host error.
pub async fn delete_empty_folder<H: BookmarkHost>(host: &H, node: &BookmarkNode) -> Result<Vec<BookmarkNode>, OpsError> {
    if !node.is_empty_folder() {
        return Err(OpsError::FolderNotEmpty(node.id.clone()));
    }
    Ok(remove_and_refresh(host, &node.id).await?)
}
