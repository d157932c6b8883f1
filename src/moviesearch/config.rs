//! # Configuration
//!
//! Stored as `config.json` in the config directory. A missing file means
//! defaults. The directory is `$MOVIESEARCH_HOME` when set, otherwise the
//! platform config directory (resolved by the binary).
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `page-size` | `10` | Rows per results page |
//! | `more-filters` | `false` | Start with the extra filters expanded |
//! | `year-options` | `전체,2025..2021` | Choices offered by the year selects |

use crate::commands::paginate::DEFAULT_PAGE_SIZE;
use crate::error::{MovieSearchError, Result};
use crate::filters::ALL;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const KEYS: &[&str] = &["page-size", "more-filters", "year-options"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieSearchConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default)]
    pub more_filters: bool,

    #[serde(default = "default_year_options")]
    pub year_options: Vec<String>,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_year_options() -> Vec<String> {
    let mut options = vec![ALL.to_string()];
    options.extend((2021..=2025).rev().map(|y| y.to_string()));
    options
}

impl Default for MovieSearchConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            more_filters: false,
            year_options: default_year_options(),
        }
    }
}

impl MovieSearchConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: MovieSearchConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(MovieSearchError::Config(
                "page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "page-size" => Some(self.page_size.to_string()),
            "more-filters" => Some(self.more_filters.to_string()),
            "year-options" => Some(self.year_options.join(",")),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "page-size" => {
                let size: usize = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("Invalid page size: {}", value))?;
                if size == 0 {
                    return Err("Page size must be at least 1".to_string());
                }
                self.page_size = size;
            }
            "more-filters" => {
                self.more_filters = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("Expected true or false, got: {}", value))?;
            }
            "year-options" => {
                let options: Vec<String> = value
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
                if options.is_empty() {
                    return Err("At least one year option is required".to_string());
                }
                self.year_options = options;
            }
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(())
    }
}
