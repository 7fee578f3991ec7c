//! Report assembly
//!
//! Turns [`BonusGroups`] into display-ready sections. Only two categories are
//! suppressed here, `none` and `unconfirmed`; user filters were already
//! applied by the engine.

use serde::Serialize;
use std::io::{self, Write};

use crate::engine::BonusGroups;
use crate::intern::Lookups;

/// Printed when nothing survives
pub const NO_RESULTS: &str = "No zones found. Check your filters.";

/// One zone as it appears in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneLine {
    pub name: String,
    pub expansion: String,
    pub min_level: u8,
    pub max_level: u8,
}

/// Zones sharing one bonus category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSection {
    pub bonus: String,
    pub zones: Vec<ZoneLine>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub sections: Vec<ReportSection>,
}

impl Report {
    /// Build the visible sections, ordered by bonus name
    pub fn build(groups: &BonusGroups, lookups: &Lookups) -> Self {
        let hidden = [lookups.bonus_none(), lookups.bonus_unconfirmed()];

        let mut sections: Vec<ReportSection> = groups
            .iter()
            .filter(|(code, _)| !hidden.contains(&Some(*code)))
            .map(|(code, zones)| ReportSection {
                bonus: lookups.bonus_name(code).to_string(),
                zones: zones
                    .iter()
                    .map(|zone| ZoneLine {
                        name: zone.name.clone(),
                        expansion: lookups.expansion_name(zone.expansion).to_string(),
                        min_level: zone.min_level,
                        max_level: zone.max_level,
                    })
                    .collect(),
            })
            .filter(|section| !section.zones.is_empty())
            .collect();

        sections.sort_by(|a, b| a.bonus.cmp(&b.bonus));
        Self { sections }
    }

    /// True when no zone line would be printed
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn zone_count(&self) -> usize {
        self.sections.iter().map(|s| s.zones.len()).sum()
    }

    /// Plain text rendering: a `--- BONUS ---` header per section, then one
    /// `name expansion min max` line per zone.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.is_empty() {
            writeln!(out, "\n{NO_RESULTS}")?;
            return Ok(());
        }

        for section in &self.sections {
            writeln!(out, "\n--- {} ---", section.bonus.to_uppercase())?;
            for zone in &section.zones {
                writeln!(
                    out,
                    "{} {} {} {}",
                    zone.name, zone.expansion, zone.min_level, zone.max_level
                )?;
            }
        }
        Ok(())
    }
}
