//! Built-in sample feed

use async_trait::async_trait;

use super::ZoneSource;
use crate::error::FetchError;

/// Five zones covering every reporting path: shared and distinct minimum
/// levels, both zone types, two expansions and one `none` bonus.
pub const MOCK_PAYLOAD: &str = r#"[
  {"name": "Pizza", "expansion": "green", "zoneType": "Indoor", "bonus": "respawn", "minLevel": 1, "maxLevel": 50},
  {"name": "Chicken", "expansion": "blue", "zoneType": "Indoor", "bonus": "coin", "minLevel": 1, "maxLevel": 20},
  {"name": "Corn", "expansion": "blue", "zoneType": "Outdoor", "bonus": "respawn", "minLevel": 20, "maxLevel": 45},
  {"name": "Burger", "expansion": "blue", "zoneType": "Indoor", "bonus": "respawn", "minLevel": 1, "maxLevel": 25},
  {"name": "Hotdog", "expansion": "green", "zoneType": "Outdoor", "bonus": "none", "minLevel": 1, "maxLevel": 50}
]"#;

#[derive(Debug, Clone, Default)]
pub struct MockSource;

impl MockSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ZoneSource for MockSource {
    async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        Ok(MOCK_PAYLOAD.as_bytes().to_vec())
    }

    fn describe(&self) -> String {
        "built-in sample data".to_string()
    }
}
