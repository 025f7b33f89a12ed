//! In-memory bookmark host.
//!
//! [`MemoryHost`] mirrors the host manager's rules closely enough for the
//! panel's flows: the root and its two permanent folders cannot be removed
//! or moved, only empty folders can be removed, and a folder cannot be moved
//! into its own subtree. Every trait call is counted so tests can assert
//! "exactly one mutation, then exactly one refresh".

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::consts::{BOOKMARKS_BAR_ID, OTHER_BOOKMARKS_ID, ROOT_ID};
use crate::host::{BookmarkHost, HostError, ToggleMap, ToggleStore};
use crate::node::BookmarkNode;

/// Number of calls made through each host method.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub fetch_tree: usize,
    pub create_folder: usize,
    pub remove: usize,
    pub move_node: usize,
    pub load_toggles: usize,
    pub save_toggles: usize,
}

#[derive(Clone, Debug)]
enum Entry {
    Folder(Vec<String>),
    Bookmark(String),
}

#[derive(Clone, Debug)]
struct Stored {
    title: String,
    parent_id: Option<String>,
    entry: Entry,
}

/// Single-threaded in-memory implementation of both host traits.
#[derive(Debug)]
pub struct MemoryHost {
    nodes: RefCell<HashMap<String, Stored>>,
    toggles: RefCell<ToggleMap>,
    next_id: Cell<u64>,
    calls: Cell<CallCounts>,
    failing: Cell<Option<&'static str>>,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHost {
    /// Empty store with the root, "Bookmarks bar" and "Other bookmarks".
    #[must_use]
    pub fn new() -> Self {
        let mut nodes = HashMap::new();
        nodes.insert(
            ROOT_ID.to_owned(),
            Stored {
                title: String::new(),
                parent_id: None,
                entry: Entry::Folder(vec![BOOKMARKS_BAR_ID.to_owned(), OTHER_BOOKMARKS_ID.to_owned()]),
            },
        );
        for (id, title) in [(BOOKMARKS_BAR_ID, "Bookmarks bar"), (OTHER_BOOKMARKS_ID, "Other bookmarks")] {
            nodes.insert(
                id.to_owned(),
                Stored {
                    title: title.to_owned(),
                    parent_id: Some(ROOT_ID.to_owned()),
                    entry: Entry::Folder(Vec::new()),
                },
            );
        }
        Self {
            nodes: RefCell::new(nodes),
            toggles: RefCell::new(ToggleMap::new()),
            next_id: Cell::new(100),
            calls: Cell::new(CallCounts::default()),
            failing: Cell::new(None),
        }
    }

    /// Calls made so far.
    #[must_use]
    pub fn calls(&self) -> CallCounts {
        self.calls.get()
    }

    /// Make every call named `call` (e.g. `"remove"`) fail until cleared.
    pub fn set_failing(&self, call: Option<&'static str>) {
        self.failing.set(call);
    }

    /// Add a folder without counting a host call.
    ///
    /// # Errors
    ///
    /// Fails when `parent_id` is missing or is a bookmark.
    pub fn add_folder(&self, parent_id: &str, title: &str) -> Result<String, HostError> {
        self.insert(parent_id, title, Entry::Folder(Vec::new()))
    }

    /// Add a bookmark without counting a host call.
    ///
    /// # Errors
    ///
    /// Fails when `parent_id` is missing or is a bookmark.
    pub fn add_bookmark(&self, parent_id: &str, title: &str, url: &str) -> Result<String, HostError> {
        self.insert(parent_id, title, Entry::Bookmark(url.to_owned()))
    }

    /// Current forest below the root, without counting a host call.
    #[must_use]
    pub fn snapshot(&self) -> Vec<BookmarkNode> {
        let nodes = self.nodes.borrow();
        match nodes.get(ROOT_ID).map(|root| &root.entry) {
            Some(Entry::Folder(children)) => children.iter().filter_map(|id| build(&nodes, id)).collect(),
            _ => Vec::new(),
        }
    }

    /// Toggle map as currently stored.
    #[must_use]
    pub fn toggles(&self) -> ToggleMap {
        self.toggles.borrow().clone()
    }

    fn insert(&self, parent_id: &str, title: &str, entry: Entry) -> Result<String, HostError> {
        let mut nodes = self.nodes.borrow_mut();
        let parent = nodes
            .get_mut(parent_id)
            .ok_or_else(|| HostError::NotFound(parent_id.to_owned()))?;
        let Entry::Folder(children) = &mut parent.entry else {
            return Err(HostError::NotAFolder(parent_id.to_owned()));
        };
        let id = self.next_id.get().to_string();
        self.next_id.set(self.next_id.get() + 1);
        children.push(id.clone());
        nodes.insert(
            id.clone(),
            Stored {
                title: title.to_owned(),
                parent_id: Some(parent_id.to_owned()),
                entry,
            },
        );
        Ok(id)
    }

    fn record(&self, call: &'static str) -> Result<(), HostError> {
        let mut counts = self.calls.get();
        match call {
            "fetch_tree" => counts.fetch_tree += 1,
            "create_folder" => counts.create_folder += 1,
            "remove" => counts.remove += 1,
            "move_node" => counts.move_node += 1,
            "load_toggles" => counts.load_toggles += 1,
            "save_toggles" => counts.save_toggles += 1,
            _ => {}
        }
        self.calls.set(counts);
        if self.failing.get() == Some(call) {
            return Err(HostError::call(call, "injected failure"));
        }
        Ok(())
    }

    fn is_permanent(id: &str) -> bool {
        matches!(id, ROOT_ID | BOOKMARKS_BAR_ID | OTHER_BOOKMARKS_ID)
    }

    fn is_within(nodes: &HashMap<String, Stored>, id: &str, ancestor: &str) -> bool {
        let mut cursor = Some(id.to_owned());
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = nodes.get(&current).and_then(|n| n.parent_id.clone());
        }
        false
    }
}

fn build(nodes: &HashMap<String, Stored>, id: &str) -> Option<BookmarkNode> {
    let stored = nodes.get(id)?;
    let parent = stored.parent_id.as_deref();
    Some(match &stored.entry {
        Entry::Folder(children) => BookmarkNode::folder(
            id,
            &stored.title,
            parent,
            children.iter().filter_map(|child| build(nodes, child)).collect(),
        ),
        Entry::Bookmark(url) => BookmarkNode::bookmark(id, &stored.title, parent, url),
    })
}

fn detach(nodes: &mut HashMap<String, Stored>, id: &str, parent_id: &str) {
    if let Some(Stored {
        entry: Entry::Folder(children),
        ..
    }) = nodes.get_mut(parent_id)
    {
        children.retain(|child| child != id);
    }
}

impl BookmarkHost for MemoryHost {
    async fn fetch_tree(&self) -> Result<Vec<BookmarkNode>, HostError> {
        self.record("fetch_tree")?;
        Ok(self.snapshot())
    }

    async fn create_folder(&self, parent_id: &str, title: &str) -> Result<BookmarkNode, HostError> {
        self.record("create_folder")?;
        let id = self.add_folder(parent_id, title)?;
        Ok(BookmarkNode::folder(&id, title, Some(parent_id), Vec::new()))
    }

    async fn remove(&self, id: &str) -> Result<(), HostError> {
        self.record("remove")?;
        if Self::is_permanent(id) {
            return Err(HostError::call("remove", format!("can't modify the root bookmark folders ({id})")));
        }
        let mut nodes = self.nodes.borrow_mut();
        let stored = nodes.get(id).ok_or_else(|| HostError::NotFound(id.to_owned()))?;
        if matches!(&stored.entry, Entry::Folder(children) if !children.is_empty()) {
            return Err(HostError::call("remove", format!("can't remove non-empty folder {id}")));
        }
        let parent_id = stored.parent_id.clone();
        nodes.remove(id);
        if let Some(parent_id) = parent_id {
            detach(&mut nodes, id, &parent_id);
        }
        Ok(())
    }

    async fn move_node(&self, id: &str, parent_id: &str) -> Result<(), HostError> {
        self.record("move_node")?;
        if Self::is_permanent(id) {
            return Err(HostError::call("move_node", format!("can't modify the root bookmark folders ({id})")));
        }
        let mut nodes = self.nodes.borrow_mut();
        let old_parent = nodes
            .get(id)
            .ok_or_else(|| HostError::NotFound(id.to_owned()))?
            .parent_id
            .clone();
        match nodes.get(parent_id).map(|n| &n.entry) {
            None => return Err(HostError::NotFound(parent_id.to_owned())),
            Some(Entry::Bookmark(_)) => return Err(HostError::NotAFolder(parent_id.to_owned())),
            Some(Entry::Folder(_)) => {}
        }
        if Self::is_within(&nodes, parent_id, id) {
            return Err(HostError::call("move_node", format!("can't move {id} into its own subtree")));
        }
        if let Some(old_parent) = old_parent {
            detach(&mut nodes, id, &old_parent);
        }
        if let Some(Stored {
            entry: Entry::Folder(children),
            ..
        }) = nodes.get_mut(parent_id)
        {
            children.push(id.to_owned());
        }
        if let Some(node) = nodes.get_mut(id) {
            node.parent_id = Some(parent_id.to_owned());
        }
        Ok(())
    }
}

impl ToggleStore for MemoryHost {
    async fn load_toggles(&self) -> Result<ToggleMap, HostError> {
        self.record("load_toggles")?;
        Ok(self.toggles.borrow().clone())
    }

    async fn save_toggles(&self, toggles: &ToggleMap) -> Result<(), HostError> {
        self.record("save_toggles")?;
        self.toggles.replace(toggles.clone());
        Ok(())
    }
}
