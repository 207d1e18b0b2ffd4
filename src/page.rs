use serde::{Deserialize, Serialize};
use std::fmt;

/// Context about the page being scraped, threaded through for link correction and diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// URL of the page (used as the base for relative links)
    pub url: String,
}

impl PageMeta {
    /// Create page metadata for the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl fmt::Display for PageMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.url.is_empty() {
            f.write_str("<unknown page>")
        } else {
            f.write_str(&self.url)
        }
    }
}
