//! Display helpers for node titles.

#[cfg(test)]
#[path = "title_test.rs"]
mod title_test;

/// Characters that split a bookmark title into label and description parts.
const TITLE_DELIMITERS: [char; 3] = [':', '-', '|'];

/// A bookmark title split for display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TitleSegments {
    /// Text before the first delimiter.
    pub primary: String,
    /// Remaining pieces, rendered as secondary text.
    pub details: Vec<String>,
}

/// Split a page title like `"Crate docs - Rust | docs.rs"` on `:`, `-` and `|`.
///
/// Segments are kept verbatim, including surrounding spaces and empty
/// pieces between adjacent delimiters.
#[must_use]
pub fn segment_title(title: &str) -> TitleSegments {
    let mut parts = title.split(&TITLE_DELIMITERS[..]).map(str::to_owned);
    TitleSegments {
        primary: parts.next().unwrap_or_default(),
        details: parts.collect(),
    }
}

/// Folder title with its first underscore shown as a space.
#[must_use]
pub fn folder_label(title: &str) -> String {
    title.replacen('_', " ", 1)
}
