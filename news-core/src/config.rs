use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsConfig {
    pub fetch: FetchConfig,
    pub parse: ParseConfig,
}

/// Network-side knobs for the fetcher.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FetchConfig {
    pub connect_timeout_ms: u64,
    pub read_timeout_ms: u64,
}

/// Parser-side knobs: the optional-tags field name and the display label
/// strings, passed in explicitly instead of read from ambient state. Deployments
/// targeting another API dialect or locale override these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseConfig {
    pub tags_field: String,
    pub author_prefix: String,
    pub unknown_author: String,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            parse: ParseConfig::default(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout_ms: 15_000,
            read_timeout_ms: 10_000,
        }
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            tags_field: "tags".to_string(),
            author_prefix: "by ".to_string(),
            unknown_author: "author unknown".to_string(),
        }
    }
}

impl NewsConfig {
    /// Load from a JSON file; callers decide what a missing file means.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl FetchConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }
}
