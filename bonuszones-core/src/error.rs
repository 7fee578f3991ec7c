//! Error types for fetching and decoding the zone feed

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while obtaining the zone list
///
/// Every variant is fatal to the caller: there is no retry and no partial
/// processing of a payload that failed to decode.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The remote source could not be reached or read
    #[error("Failed to fetch zones from {url}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The remote source answered with a non-success status
    #[error("Bonus API at {url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    /// A local payload file could not be read
    #[error("Failed to read zone payload from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The payload is not a JSON array of zone objects
    #[error("Failed to decode zone payload (expected a JSON array of zones)")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// The payload decoded to zero zones
    #[error("Something went wrong, no zones were decoded.")]
    NoZones,

    /// Remote fetching was requested but this build has no HTTP client
    #[error("This build was compiled without remote fetching.\n\nUse --mock or --input <file> instead, or rebuild with the `remote` feature.")]
    RemoteDisabled,

    /// The source configuration file is unreadable or malformed
    #[error("Failed to load source configuration from {path}")]
    SourceConfig {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl FetchError {
    /// Whether the failure happened before any bytes were received
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            FetchError::Transport { .. } | FetchError::Status { .. } | FetchError::RemoteDisabled
        )
    }
}
