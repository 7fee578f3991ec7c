//! Zone payload sources
//!
//! A [`ZoneSource`] produces the raw bytes of the zone feed. Decoding and
//! interning happen afterwards in [`load_zones`], so every source yields the
//! same [`Zone`] values for the same payload.
//!
//! - [`HttpSource`] — the live bonus API (feature `remote`)
//! - [`MockSource`] — a small built-in sample
//! - [`FileSource`] — a payload saved to disk

use async_trait::async_trait;
use tracing::info;

use crate::config::{DataSource, SourceConfig};
use crate::error::FetchError;
use crate::intern::Lookups;
use crate::zone::{decode_zones, Zone};

mod file;
#[cfg(feature = "remote")]
mod http;
mod mock;

pub use file::FileSource;
#[cfg(feature = "remote")]
pub use http::HttpSource;
pub use mock::{MockSource, MOCK_PAYLOAD};

/// Something that can hand over the zone feed
#[async_trait]
pub trait ZoneSource: Send + Sync {
    /// Fetch the raw payload
    async fn fetch(&self) -> Result<Vec<u8>, FetchError>;

    /// Human-readable location, used in progress output
    fn describe(&self) -> String;
}

/// Pick the source implementation for `source`
pub fn build_source(
    source: &DataSource,
    config: &SourceConfig,
) -> Result<Box<dyn ZoneSource>, FetchError> {
    match source {
        #[cfg(feature = "remote")]
        DataSource::Remote => Ok(Box::new(HttpSource::new(config)?)),
        #[cfg(not(feature = "remote"))]
        DataSource::Remote => {
            let _ = config;
            Err(FetchError::RemoteDisabled)
        }
        DataSource::Mock => Ok(Box::new(MockSource::new())),
        DataSource::File(path) => Ok(Box::new(FileSource::new(path.clone()))),
    }
}

/// Fetch from `source` and decode into zones, interning into `lookups`
pub async fn load_zones(
    source: &dyn ZoneSource,
    lookups: &mut Lookups,
) -> Result<Vec<Zone>, FetchError> {
    info!("Fetching zones from {}", source.describe());
    let payload = source.fetch().await?;
    info!("Received {} bytes", payload.len());
    decode_zones(&payload, lookups)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticSource(&'static str);

    #[async_trait]
    impl ZoneSource for StaticSource {
        async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
            Ok(self.0.as_bytes().to_vec())
        }

        fn describe(&self) -> String {
            "static".to_string()
        }
    }

    #[tokio::test]
    async fn test_load_zones_decodes_payload() {
        let source = StaticSource(
            r#"[{"name": "Pizza", "expansion": "green", "zoneType": "indoor", "bonus": "respawn", "minLevel": 1, "maxLevel": 50}]"#,
        );
        let mut lookups = Lookups::seeded();
        let zones = load_zones(&source, &mut lookups).await.unwrap();

        assert_eq!(zones.len(), 1);
        assert_eq!(lookups.expansions.len(), 1);
    }

    #[tokio::test]
    async fn test_load_zones_empty_payload_is_fatal() {
        let mut lookups = Lookups::seeded();
        let err = load_zones(&StaticSource("[]"), &mut lookups)
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::NoZones));
    }

    #[test]
    fn test_build_source_mock_and_file() {
        let config = SourceConfig::default();
        let mock = build_source(&DataSource::Mock, &config).unwrap();
        assert_eq!(mock.describe(), "built-in sample data");

        let file = build_source(&DataSource::File("zones.json".into()), &config).unwrap();
        assert_eq!(file.describe(), "zones.json");
    }

    #[cfg(not(feature = "remote"))]
    #[test]
    fn test_remote_source_unavailable_without_http_client() {
        let err = build_source(&DataSource::Remote, &SourceConfig::default())
            .err()
            .expect("remote source should be rejected");
        assert!(matches!(err, FetchError::RemoteDisabled));
        assert!(err.is_transport());
    }

    #[cfg(feature = "remote")]
    #[test]
    fn test_remote_source_uses_configured_url() {
        let config = SourceConfig {
            url: "http://127.0.0.1:9/zones".to_string(),
            timeout_seconds: 1,
        };
        let remote = build_source(&DataSource::Remote, &config).unwrap();
        assert_eq!(remote.describe(), "http://127.0.0.1:9/zones");
    }
}
