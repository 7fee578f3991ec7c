//! Zone records and payload decoding

use serde::Deserialize;
use tracing::debug;

use crate::error::FetchError;
use crate::intern::{CategoryCode, Lookups};

/// One zone object as it appears on the wire
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawZone {
    pub name: String,
    pub expansion: String,
    #[serde(rename = "zoneType")]
    pub zone_type: String,
    pub bonus: String,
    #[serde(rename = "minLevel")]
    pub min_level: u8,
    #[serde(rename = "maxLevel")]
    pub max_level: u8,
}

impl RawZone {
    pub fn new(
        name: impl Into<String>,
        expansion: impl Into<String>,
        min_level: u8,
        max_level: u8,
        zone_type: impl Into<String>,
        bonus: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            expansion: expansion.into(),
            zone_type: zone_type.into(),
            bonus: bonus.into(),
            min_level,
            max_level,
        }
    }
}

/// A decoded zone with interned categories
///
/// `min_level <= max_level` is not checked; levels pass through from the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    pub name: String,
    pub expansion: CategoryCode,
    pub zone_type: CategoryCode,
    pub bonus: CategoryCode,
    pub min_level: u8,
    pub max_level: u8,
}

impl Zone {
    /// Intern the categorical fields of `raw` into `lookups`
    pub fn from_raw(raw: RawZone, lookups: &mut Lookups) -> Self {
        Self {
            expansion: lookups.expansions.intern(&raw.expansion),
            zone_type: lookups.zone_types.intern(&raw.zone_type),
            bonus: lookups.bonuses.intern(&raw.bonus),
            name: raw.name,
            min_level: raw.min_level,
            max_level: raw.max_level,
        }
    }
}

/// Decode a JSON array of zone objects, interning as we go
///
/// A `null` or empty array is an error: there is nothing to report on.
pub fn decode_zones(payload: &[u8], lookups: &mut Lookups) -> Result<Vec<Zone>, FetchError> {
    let raw: Option<Vec<RawZone>> =
        serde_json::from_slice(payload).map_err(|source| FetchError::Decode { source })?;

    let raw = match raw {
        Some(zones) if !zones.is_empty() => zones,
        _ => return Err(FetchError::NoZones),
    };

    let zones: Vec<Zone> = raw
        .into_iter()
        .map(|z| Zone::from_raw(z, lookups))
        .collect();

    debug!(
        zones = zones.len(),
        expansions = lookups.expansions.len(),
        bonuses = lookups.bonuses.len(),
        "Decoded zone payload"
    );
    Ok(zones)
}
