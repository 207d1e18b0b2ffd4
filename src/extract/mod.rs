//! HTML-to-schema extraction for Lua API class pages.
//!
//! Data flows one way: the page scraper finds class listing blocks, the class extractor
//! turns each into a class schema, and every member row is handed to the member extractor,
//! which resolves methods or attributes and parses their free-text signatures.

pub mod class;
pub mod member;
pub mod method;
pub mod page;
pub mod signature;

#[cfg(test)]
mod tests;

pub use class::scrape_class;
pub use member::{MemberKind, parse_member_row};
pub use page::scrape_class_page;
pub use signature::{parse_param, parse_signature_text};

use crate::error::ScrapeError;
use crate::lua_types::TypeMapper;
use crate::page::PageMeta;
use crate::schema::Schema;
use scraper::Html;

/// Everything an extractor reads; shared by reference, never mutated
#[derive(Clone, Copy)]
pub struct ScrapeContext<'a> {
    pub document: &'a Html,
    pub page: &'a PageMeta,
    pub types: &'a dyn TypeMapper,
}

impl<'a> ScrapeContext<'a> {
    pub fn new(document: &'a Html, page: &'a PageMeta, types: &'a dyn TypeMapper) -> Self {
        Self {
            document,
            page,
            types,
        }
    }

    pub fn lua_type(&self, lua_type: &str) -> Schema {
        self.types.from_lua_type(lua_type)
    }

    pub(crate) fn missing(&self, message: impl Into<String>) -> ScrapeError {
        ScrapeError::missing(message, self.page)
    }
}
