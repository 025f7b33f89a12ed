//! Host seams: the bookmark manager and the toggle key-value store.
//!
//! The panel never owns bookmark data. Every read and write goes through
//! [`BookmarkHost`], whose calls are treated as atomic and authoritative.
//! Folder expansion flags live in a separate key-value store behind
//! [`ToggleStore`], stored as one id → bool map.

use std::collections::HashMap;

use crate::node::{BookmarkNode, NodeError};

/// Persisted expansion flags keyed by node id.
pub type ToggleMap = HashMap<String, bool>;

/// Error returned by host calls.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The host rejected or failed the call.
    #[error("{call} failed: {message}")]
    Call { call: &'static str, message: String },
    /// No node with this id exists.
    #[error("no bookmark node with id {0}")]
    NotFound(String),
    /// A folder was required but the id names a bookmark.
    #[error("node {0} is not a folder")]
    NotAFolder(String),
    /// The host returned a payload that does not describe valid nodes.
    #[error(transparent)]
    Payload(#[from] NodeError),
}

impl HostError {
    /// Shorthand for [`HostError::Call`].
    pub fn call(call: &'static str, message: impl Into<String>) -> Self {
        Self::Call {
            call,
            message: message.into(),
        }
    }
}

/// Host bookmark manager.
#[allow(async_fn_in_trait)]
pub trait BookmarkHost {
    /// Fetch the whole tree and return the root's children.
    async fn fetch_tree(&self) -> Result<Vec<BookmarkNode>, HostError>;

    /// Create an empty folder titled `title` under `parent_id`.
    async fn create_folder(&self, parent_id: &str, title: &str) -> Result<BookmarkNode, HostError>;

    /// Remove a bookmark or an empty folder.
    async fn remove(&self, id: &str) -> Result<(), HostError>;

    /// Re-parent `id` under `parent_id`.
    async fn move_node(&self, id: &str, parent_id: &str) -> Result<(), HostError>;
}

/// Key-value store holding expansion flags.
#[allow(async_fn_in_trait)]
pub trait ToggleStore {
    async fn load_toggles(&self) -> Result<ToggleMap, HostError>;

    async fn save_toggles(&self, toggles: &ToggleMap) -> Result<(), HostError>;
}

/// Persisted expansion flag for `id`, if one was ever written.
///
/// # Errors
///
/// Propagates the store's read error.
pub async fn stored_toggle<S: ToggleStore>(store: &S, id: &str) -> Result<Option<bool>, HostError> {
    let toggles = store.load_toggles().await?;
    Ok(toggles.get(id).copied())
}

/// Write the expansion flag for `id`, keeping every other entry.
///
/// # Errors
///
/// Propagates the store's read or write error.
pub async fn persist_toggle<S: ToggleStore>(store: &S, id: &str, expanded: bool) -> Result<(), HostError> {
    let mut toggles = store.load_toggles().await?;
    toggles.insert(id.to_owned(), expanded);
    store.save_toggles(&toggles).await
}
