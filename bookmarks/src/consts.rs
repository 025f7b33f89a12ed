//! Shared constants for the bookmarks crate.

// ── Host ids ────────────────────────────────────────────────────

/// Id of the invisible root node returned by the host's `getTree`.
pub const ROOT_ID: &str = "0";

/// Id of the bookmarks bar folder; default target for new folders and the
/// assumed parent of nodes that report none.
pub const BOOKMARKS_BAR_ID: &str = "1";

/// Id of the "Other bookmarks" folder.
pub const OTHER_BOOKMARKS_ID: &str = "2";

// ── Favicons ────────────────────────────────────────────────────

/// Third-party favicon service; `{host}` and `{size}` are substituted.
pub const FAVICON_SERVICE_URL: &str = "https://www.google.com/s2/favicons?domain={host}&sz={size}";

/// Icon edge length requested from the favicon service, in pixels.
pub const FAVICON_SIZE_PX: u32 = 32;

// ── Move menu ───────────────────────────────────────────────────

/// Width of the move menu box used for viewport clamping.
pub const MENU_WIDTH_PX: f64 = 500.0;

/// Height of the move menu box used for viewport clamping.
pub const MENU_HEIGHT_PX: f64 = 400.0;

/// Gap kept between a clamped menu and the viewport edge.
pub const MENU_EDGE_MARGIN_PX: f64 = 5.0;

// ── Storage ─────────────────────────────────────────────────────

/// `chrome.storage.local` key holding the id → expanded map.
pub const TOGGLES_STORAGE_KEY: &str = "bookmarkToggles";
