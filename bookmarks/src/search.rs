//! Search visibility over the bookmark tree.
//!
//! A query is matched case-insensitively as a substring. Folders stay
//! visible while any descendant matches, so a hit deep in the tree keeps its
//! whole ancestor chain on screen. Filtering is applied one level at a time:
//! each rendered folder filters its own children again with the same query.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::node::{BookmarkNode, NodeKind};

/// Lower-cased search text. Empty means no filter is active.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.to_lowercase(),
        }
    }

    /// Lower-cased text, as handed to folder ranking.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.needle.is_empty()
    }

    /// Case-insensitive substring test against `text`.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.needle)
    }
}

/// Whether `node` should be shown under `query`.
#[must_use]
pub fn is_visible(node: &BookmarkNode, query: &SearchQuery) -> bool {
    if !query.is_active() {
        return true;
    }
    if query.matches(&node.title) {
        return true;
    }
    match &node.kind {
        NodeKind::Bookmark { url } => query.matches(url),
        NodeKind::Folder { children } => children.iter().any(|child| is_visible(child, query)),
    }
}

/// Result of filtering one tree level.
#[derive(Debug, PartialEq)]
pub enum TreeView<'a> {
    /// Nodes to render, in source order.
    Nodes(Vec<&'a BookmarkNode>),
    /// A query is active and nothing at this level matched.
    NoResults,
}

/// Filter one level of the tree for rendering.
///
/// With no active query every node is returned, including for an empty
/// level. With an active query an empty result becomes
/// [`TreeView::NoResults`].
#[must_use]
pub fn filter_level<'a>(nodes: &'a [BookmarkNode], query: &SearchQuery) -> TreeView<'a> {
    let visible: Vec<&BookmarkNode> = nodes.iter().filter(|node| is_visible(node, query)).collect();
    if query.is_active() && visible.is_empty() {
        TreeView::NoResults
    } else {
        TreeView::Nodes(visible)
    }
}
