//! Favicon candidate chain for bookmark entries.
//!
//! Each bookmark tries a short ordered list of icon URLs: a third-party
//! favicon service first, then the conventional `/favicon.ico` and
//! `/favicon.png` paths on the bookmark's host, then `/favicon.ico` on the
//! `www.` host. [`FaviconChain`] walks that list on load errors and settles
//! on a generic glyph once every candidate has failed.

#[cfg(test)]
#[path = "favicon_test.rs"]
mod favicon_test;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::consts::{FAVICON_SERVICE_URL, FAVICON_SIZE_PX};

/// Where the first candidate comes from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaviconSource {
    /// Service URL template with `{host}` and `{size}` placeholders.
    pub service_url: String,
    /// Requested icon size in pixels.
    pub size: u32,
}

impl Default for FaviconSource {
    fn default() -> Self {
        Self {
            service_url: FAVICON_SERVICE_URL.to_owned(),
            size: FAVICON_SIZE_PX,
        }
    }
}

/// Build the ordered favicon candidate list for a bookmark URL.
///
/// Returns an empty list when the URL does not parse or has no host.
#[must_use]
pub fn favicon_candidates(url: &str, source: &FaviconSource) -> Vec<String> {
    let Ok(parsed) = Url::parse(url) else {
        return Vec::new();
    };
    let Some(host) = parsed.host_str() else {
        return Vec::new();
    };
    if host.is_empty() {
        return Vec::new();
    }
    let scheme = parsed.scheme();
    vec![
        source
            .service_url
            .replace("{host}", host)
            .replace("{size}", &source.size.to_string()),
        format!("{scheme}://{host}/favicon.ico"),
        format!("{scheme}://{host}/favicon.png"),
        format!("{scheme}://www.{host}/favicon.ico"),
    ]
}

/// Position in the candidate chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaviconCursor {
    /// Waiting on candidate `index`.
    Loading { index: usize },
    /// Candidate `index` rendered successfully.
    Loaded { index: usize },
    /// Every candidate failed, or there were none. Terminal.
    Fallback,
}

/// Candidate list plus the cursor walking it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaviconChain {
    candidates: Vec<String>,
    cursor: FaviconCursor,
}

impl FaviconChain {
    #[must_use]
    pub fn new(candidates: Vec<String>) -> Self {
        let cursor = if candidates.is_empty() {
            FaviconCursor::Fallback
        } else {
            FaviconCursor::Loading { index: 0 }
        };
        Self { candidates, cursor }
    }

    /// Chain for a bookmark URL using `source` for the service entry.
    #[must_use]
    pub fn for_url(url: &str, source: &FaviconSource) -> Self {
        Self::new(favicon_candidates(url, source))
    }

    #[must_use]
    pub fn cursor(&self) -> FaviconCursor {
        self.cursor
    }

    /// Image source to render, `None` once the chain is in fallback.
    #[must_use]
    pub fn current_src(&self) -> Option<&str> {
        match self.cursor {
            FaviconCursor::Loading { index } | FaviconCursor::Loaded { index } => {
                self.candidates.get(index).map(String::as_str)
            }
            FaviconCursor::Fallback => None,
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.cursor == FaviconCursor::Fallback
    }

    /// Advance past the current candidate after a load error.
    pub fn on_error(&mut self) {
        self.cursor = match self.cursor {
            FaviconCursor::Loading { index } | FaviconCursor::Loaded { index } if index + 1 < self.candidates.len() => {
                FaviconCursor::Loading { index: index + 1 }
            }
            _ => FaviconCursor::Fallback,
        };
    }

    /// Record a successful load of the current candidate.
    pub fn on_load(&mut self) {
        if let FaviconCursor::Loading { index } = self.cursor {
            self.cursor = FaviconCursor::Loaded { index };
        }
    }
}
