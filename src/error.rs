use crate::page::PageMeta;
use thiserror::Error;

/// Everything that can abort a page scrape
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// An expected structural element was not found
    #[error("{message} @ {page}")]
    MissingElement { message: String, page: PageMeta },

    /// A signature did not have the shape its classification promised
    #[error("malformed signature: {message} @ {page}")]
    MalformedSignature { message: String, page: PageMeta },

    /// Two heuristics disagreed about the same member
    #[error("invariant violated: {message} @ {page}")]
    Invariant { message: String, page: PageMeta },

    /// A CSS selector failed to compile
    #[error("invalid selector `{0}`")]
    Selector(String),
}

impl ScrapeError {
    pub fn missing(message: impl Into<String>, page: &PageMeta) -> Self {
        Self::MissingElement {
            message: message.into(),
            page: page.clone(),
        }
    }

    pub fn malformed(message: impl Into<String>, page: &PageMeta) -> Self {
        Self::MalformedSignature {
            message: message.into(),
            page: page.clone(),
        }
    }

    pub fn invariant(message: impl Into<String>, page: &PageMeta) -> Self {
        Self::Invariant {
            message: message.into(),
            page: page.clone(),
        }
    }
}

pub type ScrapeResult<T> = Result<T, ScrapeError>;
