//! Bookmark tree model and panel logic for the bookmarks extension.
//!
//! This crate holds everything about the panel that does not need a browser:
//! the folder/bookmark node model, search visibility, favicon candidate
//! chains, folder flattening for the move and create dialogs, title
//! segmentation, and context-menu placement. The host bookmark manager is
//! reached only through the [`host::BookmarkHost`] and [`host::ToggleStore`]
//! traits, so every mutation flow can be exercised against
//! [`memory::MemoryHost`] in native tests.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`node`] | Folder/bookmark sum type and host payload conversion |
//! | [`search`] | Case-insensitive visibility filter over a tree level |
//! | [`favicon`] | Favicon candidate list and load/fallback cursor |
//! | [`folders`] | Folder flattening and move/create target ordering |
//! | [`title`] | Title segmentation and folder label cleanup |
//! | [`placement`] | Viewport clamping for the move menu |
//! | [`host`] | Host bookmark and toggle-store traits |
//! | [`memory`] | In-memory host used by tests and demos |
//! | [`ops`] | Mutate-then-refresh flows |
//! | [`consts`] | Well-known ids and default sizes |

pub mod consts;
pub mod favicon;
pub mod folders;
pub mod host;
pub mod memory;
pub mod node;
pub mod ops;
pub mod placement;
pub mod search;
pub mod title;
