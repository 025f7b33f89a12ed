//! Folder flattening for the move menu and the create-folder dialog.
//!
//! Both dialogs present every folder of the tree as one flat list. The move
//! menu can additionally float folders matching the active search query to
//! the top, so filing a bookmark found by search lands next to its likely
//! destination.

#[cfg(test)]
#[path = "folders_test.rs"]
mod folders_test;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::node::BookmarkNode;
use crate::search::SearchQuery;

/// One folder in a flattened listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FolderEntry {
    pub id: String,
    pub title: String,
    /// Nesting level below the rendered forest; top-level folders are 0.
    pub depth: usize,
}

/// How the move menu orders its folders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveTargetOrder {
    /// Query matches first, alphabetical within each group.
    #[default]
    SearchRanked,
    /// Pre-order flatten order.
    Natural,
}

/// Collect every folder in pre-order: a folder, then its descendant folders.
#[must_use]
pub fn flatten_folders(nodes: &[BookmarkNode]) -> Vec<FolderEntry> {
    let mut out = Vec::new();
    collect_folders(nodes, 0, &mut out);
    out
}

fn collect_folders(nodes: &[BookmarkNode], depth: usize, out: &mut Vec<FolderEntry>) {
    for node in nodes {
        let Some(children) = node.children() else {
            continue;
        };
        out.push(FolderEntry {
            id: node.id.clone(),
            title: node.title.clone(),
            depth,
        });
        collect_folders(children, depth + 1, out);
    }
}

/// Folders offered as destinations when moving `bookmark_id`.
#[must_use]
pub fn move_targets(nodes: &[BookmarkNode], bookmark_id: &str, query: &str, order: MoveTargetOrder) -> Vec<FolderEntry> {
    let mut folders: Vec<FolderEntry> = flatten_folders(nodes)
        .into_iter()
        .filter(|folder| folder.id != bookmark_id)
        .collect();
    if order == MoveTargetOrder::SearchRanked {
        let query = SearchQuery::new(query);
        folders.sort_by(|a, b| rank_by_query(a, b, &query));
    }
    folders
}

/// Folders offered as parents in the create-folder dialog.
#[must_use]
pub fn creation_targets(nodes: &[BookmarkNode]) -> Vec<FolderEntry> {
    flatten_folders(nodes)
}

fn rank_by_query(a: &FolderEntry, b: &FolderEntry, query: &SearchQuery) -> Ordering {
    let a_hit = query.matches(&a.title);
    let b_hit = query.matches(&b.title);
    match (a_hit, b_hit) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => alphabetical(&a.title, &b.title),
    }
}

fn alphabetical(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}
