pub mod config;
pub mod dom;
pub mod error;
pub mod extract;
pub mod lua_types;
pub mod markdown;
pub mod page;
pub mod schema;
pub mod typescript;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::ScraperConfig;
pub use error::{ScrapeError, ScrapeResult};
pub use extract::{ScrapeContext, scrape_class_page};
pub use lua_types::{LuaTypes, TypeMapper};
pub use page::PageMeta;
pub use schema::{Items, Schema, SchemaType};

use scraper::Html;

/// Builder for scraping one Lua API class page into class schemas
pub struct ClassPage {
    html: String,
    page: Option<PageMeta>,
    config: ScraperConfig,
}

impl ClassPage {
    /// Create a new ClassPage from the page's HTML source
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            page: None,
            config: ScraperConfig::default(),
        }
    }

    /// Set the page metadata (its URL is the base for relative links)
    pub fn with_page_meta(mut self, page: PageMeta) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the configuration
    pub fn with_config(mut self, config: ScraperConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a file
    pub fn with_config_file(
        self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let config = ScraperConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a string
    pub fn with_config_str(self, config_str: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config = ScraperConfig::from_json(config_str)?;
        Ok(self.with_config(config))
    }

    /// Page metadata in effect: explicit metadata wins over the configured base URL
    pub fn page_meta(&self) -> PageMeta {
        match (&self.page, &self.config.base_url) {
            (Some(page), _) => page.clone(),
            (None, Some(base_url)) => PageMeta::new(base_url.clone()),
            (None, None) => PageMeta::default(),
        }
    }

    /// Parse the page and extract every class schema on it
    pub fn scrape(&self) -> ScrapeResult<Vec<Schema>> {
        let document = Html::parse_document(&self.html);
        let page = self.page_meta();
        let types = LuaTypes::new(self.config.definitions_prefix.clone());

        let ctx = ScrapeContext::new(&document, &page, &types);
        scrape_class_page(&ctx)
    }
}
