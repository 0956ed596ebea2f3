use crate::commands::initialize::DEFAULT_PAGE_SIZE;
use crate::commands::reveal::DEFAULT_BATCH_SIZE;
use crate::error::{BlogdexError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for blogdex, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BlogdexConfig {
    /// Items shown before the first "load more"
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Items disclosed by each "load more"
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

impl Default for BlogdexConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl BlogdexConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BlogdexError::Io)?;
        let config: BlogdexConfig =
            serde_json::from_str(&content).map_err(BlogdexError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(BlogdexError::Config("page_size must be at least 1".into()));
        }
        if self.batch_size == 0 {
            return Err(BlogdexError::Config("batch_size must be at least 1".into()));
        }
        Ok(())
    }
}
