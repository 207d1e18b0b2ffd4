use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Prefix used for `$ref`s to named API types unless configured otherwise
pub const DEFAULT_DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Configuration for scraping a class page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Base URL for correcting relative links when the page URL is not known
    #[serde(default)]
    pub base_url: Option<String>,

    /// Prefix of `$ref`s emitted for named API types
    #[serde(default = "default_definitions_prefix")]
    pub definitions_prefix: String,

    /// Whether to pretty-print JSON output
    #[serde(default)]
    pub pretty: bool,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            definitions_prefix: default_definitions_prefix(),
            pretty: false,
        }
    }
}

impl ScraperConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}

/// Default value for definitions_prefix
fn default_definitions_prefix() -> String {
    DEFAULT_DEFINITIONS_PREFIX.to_string()
}
