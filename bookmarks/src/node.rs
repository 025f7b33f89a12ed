//! Bookmark node model and host payload conversion.
//!
//! The host describes folders and bookmarks with one shape whose `url` and
//! `children` fields are each optional. [`BookmarkNode`] replaces that with
//! an explicit [`NodeKind`] so the "exactly one of url/children" rule holds
//! by construction. A single node that breaks the rule is rejected with a
//! [`NodeError`]; inside a full tree the offending node is skipped and
//! reported in [`ParsedTree::skipped`] so one odd entry cannot blank the
//! whole panel.

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;

use serde::{Deserialize, Serialize};

/// Error returned when a host payload cannot be turned into nodes.
#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    /// The payload was not valid JSON for the expected shape.
    #[error("invalid bookmark payload: {0}")]
    Json(#[from] serde_json::Error),
    /// A node carried both a `url` and a `children` list.
    #[error("node {id} has both url and children")]
    BothUrlAndChildren { id: String },
    /// A node carried neither a `url` nor a `children` list.
    #[error("node {id} has neither url nor children")]
    NeitherUrlNorChildren { id: String },
}

/// Node as delivered by the host bookmarks API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBookmarkNode {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RawBookmarkNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// Folder or bookmark payload.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    /// A folder with its ordered children (possibly none).
    Folder { children: Vec<BookmarkNode> },
    /// A leaf bookmark. The url may be empty if the host stored it so.
    Bookmark { url: String },
}

/// One entry of the bookmark tree.
#[derive(Clone, Debug, PartialEq)]
pub struct BookmarkNode {
    pub id: String,
    pub title: String,
    /// Containing folder; `None` only for the host root.
    pub parent_id: Option<String>,
    pub kind: NodeKind,
}

impl BookmarkNode {
    /// Build a folder node.
    #[must_use]
    pub fn folder(id: &str, title: &str, parent_id: Option<&str>, children: Vec<BookmarkNode>) -> Self {
        Self {
            id: id.to_owned(),
            title: title.to_owned(),
            parent_id: parent_id.map(str::to_owned),
            kind: NodeKind::Folder { children },
        }
    }

    /// Build a bookmark node.
    #[must_use]
    pub fn bookmark(id: &str, title: &str, parent_id: Option<&str>, url: &str) -> Self {
        Self {
            id: id.to_owned(),
            title: title.to_owned(),
            parent_id: parent_id.map(str::to_owned),
            kind: NodeKind::Bookmark { url: url.to_owned() },
        }
    }

    #[must_use]
    pub fn is_folder(&self) -> bool {
        matches!(self.kind, NodeKind::Folder { .. })
    }

    /// Children of a folder, `None` for bookmarks.
    #[must_use]
    pub fn children(&self) -> Option<&[BookmarkNode]> {
        match &self.kind {
            NodeKind::Folder { children } => Some(children),
            NodeKind::Bookmark { .. } => None,
        }
    }

    /// URL of a bookmark, `None` for folders.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Bookmark { url } => Some(url),
            NodeKind::Folder { .. } => None,
        }
    }

    /// True for bookmarks whose url is non-empty.
    #[must_use]
    pub fn has_url(&self) -> bool {
        self.url().is_some_and(|u| !u.is_empty())
    }

    #[must_use]
    pub fn is_empty_folder(&self) -> bool {
        self.children().is_some_and(<[BookmarkNode]>::is_empty)
    }

    /// Depth-first lookup of `id` in this node and its descendants.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&BookmarkNode> {
        if self.id == id {
            return Some(self);
        }
        self.children().and_then(|children| find_in(children, id))
    }
}

/// Depth-first lookup of `id` across a forest.
#[must_use]
pub fn find_in<'a>(nodes: &'a [BookmarkNode], id: &str) -> Option<&'a BookmarkNode> {
    nodes.iter().find_map(|node| node.find(id))
}

impl TryFrom<RawBookmarkNode> for BookmarkNode {
    type Error = NodeError;

    fn try_from(raw: RawBookmarkNode) -> Result<Self, Self::Error> {
        let kind = match (raw.url, raw.children) {
            (Some(_), Some(_)) => return Err(NodeError::BothUrlAndChildren { id: raw.id }),
            (None, None) => return Err(NodeError::NeitherUrlNorChildren { id: raw.id }),
            (Some(url), None) => NodeKind::Bookmark { url },
            (None, Some(children)) => NodeKind::Folder {
                children: children
                    .into_iter()
                    .map(BookmarkNode::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
            },
        };
        Ok(Self {
            id: raw.id,
            title: raw.title,
            parent_id: raw.parent_id,
            kind,
        })
    }
}

/// Forest parsed from a full-tree payload.
#[derive(Debug, Default)]
pub struct ParsedTree {
    /// The root's children, minus skipped nodes.
    pub nodes: Vec<BookmarkNode>,
    /// Nodes dropped for breaking the url/children rule, with their subtrees.
    pub skipped: Vec<NodeError>,
}

/// Parse the host's full-tree payload (`[root]`) into the root's children.
///
/// An empty payload yields an empty forest. Nodes with both or neither of
/// `url`/`children` are left out and listed in [`ParsedTree::skipped`];
/// their siblings are kept.
///
/// # Errors
///
/// Returns [`NodeError::Json`] for malformed JSON.
pub fn parse_tree(json: &str) -> Result<ParsedTree, NodeError> {
    let roots: Vec<RawBookmarkNode> = serde_json::from_str(json)?;
    let mut tree = ParsedTree::default();
    let Some(root) = roots.into_iter().next() else {
        return Ok(tree);
    };
    tree.nodes = convert_level(root.children.unwrap_or_default(), &mut tree.skipped);
    Ok(tree)
}

fn convert_level(raw: Vec<RawBookmarkNode>, skipped: &mut Vec<NodeError>) -> Vec<BookmarkNode> {
    raw.into_iter()
        .filter_map(|node| convert_lenient(node, skipped))
        .collect()
}

fn convert_lenient(raw: RawBookmarkNode, skipped: &mut Vec<NodeError>) -> Option<BookmarkNode> {
    let kind = match (raw.url, raw.children) {
        (Some(_), Some(_)) => {
            skipped.push(NodeError::BothUrlAndChildren { id: raw.id });
            return None;
        }
        (None, None) => {
            skipped.push(NodeError::NeitherUrlNorChildren { id: raw.id });
            return None;
        }
        (Some(url), None) => NodeKind::Bookmark { url },
        (None, Some(children)) => NodeKind::Folder {
            children: convert_level(children, skipped),
        },
    };
    Some(BookmarkNode {
        id: raw.id,
        title: raw.title,
        parent_id: raw.parent_id,
        kind,
    })
}

/// Parse a single node payload, such as the result of a create call.
///
/// # Errors
///
/// Returns [`NodeError::Json`] for malformed JSON and the variant-specific
/// errors when the node or any descendant breaks the url/children rule.
pub fn parse_node(json: &str) -> Result<BookmarkNode, NodeError> {
    let raw: RawBookmarkNode = serde_json::from_str(json)?;
    BookmarkNode::try_from(raw)
}
