//! Run configuration
//!
//! [`Configuration`] carries the resolved filter and sort settings. It is
//! built once from command-line input and passed by reference afterwards.
//!
//! [`SourceConfig`] controls where the feed comes from. Fields may be
//! overridden from a JSON file:
//!
//! ```json
//! {"url": "https://fangbreaker.zone/api/bonuses/today", "timeout_seconds": 10}
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, warn};

use crate::error::FetchError;

/// Default feed location
pub const DEFAULT_URL: &str = "https://fangbreaker.zone/api/bonuses/today";

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Default level bounds
pub const DEFAULT_MIN_LEVEL: u8 = 1;
pub const DEFAULT_MAX_LEVEL: u8 = u8::MAX;

/// Single-value category filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum Filter {
    /// Match every value
    #[default]
    Any,
    /// Match one value, compared case-insensitively
    Exactly(String),
}

impl Filter {
    /// Filter from optional user input; missing or blank input matches all
    pub fn from_input(input: Option<&str>) -> Self {
        match input.map(str::trim) {
            None | Some("") => Filter::Any,
            Some(value) => Filter::Exactly(value.to_lowercase()),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Filter::Any)
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Filter::Any => None,
            Filter::Exactly(value) => Some(value),
        }
    }
}

/// Order of zones within a bonus group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!("Invalid sort direction: {other} (expected asc or desc)")),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("asc"),
            SortDirection::Desc => f.write_str("desc"),
        }
    }
}

/// Filter and sort settings for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    pub min_level: u8,
    pub max_level: u8,
    pub sort: SortDirection,
    pub bonus: Filter,
    pub expansion: Filter,
    pub zone_type: Filter,
    /// Suppress progress and footer output
    pub quiet: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            min_level: DEFAULT_MIN_LEVEL,
            max_level: DEFAULT_MAX_LEVEL,
            sort: SortDirection::default(),
            bonus: Filter::Any,
            expansion: Filter::Any,
            zone_type: Filter::Any,
            quiet: false,
        }
    }
}

impl Configuration {
    /// An inverted level range matches nothing; flag it so the empty report
    /// is not a surprise.
    pub fn warn_on_suspicious(&self) {
        if self.min_level > self.max_level {
            warn!(
                min_level = self.min_level,
                max_level = self.max_level,
                "Minimum level is above maximum level; no zones can match"
            );
        }
        if self.bonus.value() == Some(crate::intern::BONUS_UNCONFIRMED) {
            warn!("Unconfirmed bonuses are never reported; --bonus unconfirmed will show nothing");
        }
    }
}

/// Where the zone payload comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// The live bonus API
    Remote,
    /// Built-in sample payload
    Mock,
    /// A JSON payload on disk
    File(PathBuf),
}

/// Remote source settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_url")]
    pub url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl SourceConfig {
    const MIN_TIMEOUT_SECONDS: u64 = 1;

    /// Load overrides from `path`, or defaults when no path is given
    pub async fn load(path: Option<&Path>) -> Result<Self, FetchError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| FetchError::SourceConfig {
                path: path.to_path_buf(),
                source: Box::new(e),
            })?;
        let config: SourceConfig =
            serde_json::from_str(&content).map_err(|e| FetchError::SourceConfig {
                path: path.to_path_buf(),
                source: Box::new(e),
            })?;

        debug!("Loaded source config from {:?}: {:?}", path, config);
        Ok(config)
    }

    /// Timeout clamped to the one-second minimum
    pub fn effective_timeout_seconds(&self) -> u64 {
        if self.timeout_seconds < Self::MIN_TIMEOUT_SECONDS {
            warn!(
                "Configured timeout_seconds={} is too low; using minimum of {} seconds",
                self.timeout_seconds,
                Self::MIN_TIMEOUT_SECONDS
            );
            Self::MIN_TIMEOUT_SECONDS
        } else {
            self.timeout_seconds
        }
    }
}
