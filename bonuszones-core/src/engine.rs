//! Filter, group and sort
//!
//! [`process`] turns the decoded zone list into [`BonusGroups`]:
//!
//! 1. zones whose bonus is `none` are dropped before any filter runs
//! 2. the level, expansion, zone-type and bonus predicates must all hold
//! 3. survivors are grouped by bonus in input order
//! 4. each group is stably sorted on `min_level`
//!
//! The level predicate bounds only the zone's minimum level:
//! `config.min_level <= zone.min_level <= config.max_level`.

use std::collections::HashMap;
use tracing::{debug, trace};

use crate::config::{Configuration, Filter, SortDirection};
use crate::intern::{CategoryCode, CategoryTable, Lookups};
use crate::zone::Zone;

/// Zones grouped by bonus code, each group in report order
///
/// Groups are never empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BonusGroups {
    groups: HashMap<CategoryCode, Vec<Zone>>,
}

impl BonusGroups {
    pub fn get(&self, bonus: CategoryCode) -> Option<&[Zone]> {
        self.groups.get(&bonus).map(Vec::as_slice)
    }

    /// Group for a bonus name, resolved through `lookups`
    pub fn get_named(&self, lookups: &Lookups, bonus: &str) -> Option<&[Zone]> {
        lookups.bonuses.lookup(bonus).and_then(|code| self.get(code))
    }

    pub fn iter(&self) -> impl Iterator<Item = (CategoryCode, &[Zone])> {
        self.groups.iter().map(|(code, zones)| (*code, zones.as_slice()))
    }

    pub fn contains(&self, bonus: CategoryCode) -> bool {
        self.groups.contains_key(&bonus)
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of zones across all groups
    pub fn zone_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    fn push(&mut self, zone: Zone) {
        self.groups.entry(zone.bonus).or_default().push(zone);
    }

    fn sort(&mut self, direction: SortDirection) {
        for zones in self.groups.values_mut() {
            sort_by_level(zones, direction);
        }
    }
}

/// Stable sort on `min_level`; equal levels keep their relative order in
/// both directions.
pub fn sort_by_level(zones: &mut [Zone], direction: SortDirection) {
    match direction {
        SortDirection::Asc => zones.sort_by(|a, b| a.min_level.cmp(&b.min_level)),
        SortDirection::Desc => zones.sort_by(|a, b| b.min_level.cmp(&a.min_level)),
    }
}

/// A [`Filter`] resolved against a category table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CodeMatch {
    Any,
    Code(CategoryCode),
    /// The filter names a value absent from the data
    Nothing,
}

impl CodeMatch {
    fn resolve(filter: &Filter, table: &CategoryTable) -> Self {
        match filter {
            Filter::Any => CodeMatch::Any,
            Filter::Exactly(value) => table
                .lookup(value)
                .map_or(CodeMatch::Nothing, CodeMatch::Code),
        }
    }

    fn matches(self, code: CategoryCode) -> bool {
        match self {
            CodeMatch::Any => true,
            CodeMatch::Code(wanted) => wanted == code,
            CodeMatch::Nothing => false,
        }
    }
}

/// Group and sort the zones that pass `config`
pub fn process(config: &Configuration, lookups: &Lookups, zones: &[Zone]) -> BonusGroups {
    let none = lookups.bonus_none();
    let expansion = CodeMatch::resolve(&config.expansion, &lookups.expansions);
    let zone_type = CodeMatch::resolve(&config.zone_type, &lookups.zone_types);
    let bonus = CodeMatch::resolve(&config.bonus, &lookups.bonuses);

    for (name, resolved) in [
        ("expansion", expansion),
        ("zone type", zone_type),
        ("bonus", bonus),
    ] {
        if resolved == CodeMatch::Nothing {
            debug!("{} filter matches no value in the feed", name);
        }
    }

    let mut groups = BonusGroups::default();
    for zone in zones {
        if Some(zone.bonus) == none {
            continue;
        }

        let level_ok = zone.min_level >= config.min_level && zone.min_level <= config.max_level;
        let keep = level_ok
            && expansion.matches(zone.expansion)
            && zone_type.matches(zone.zone_type)
            && bonus.matches(zone.bonus);

        trace!(zone = %zone.name, keep, "Filtered zone");
        if keep {
            groups.push(zone.clone());
        }
    }

    groups.sort(config.sort);

    debug!(
        input = zones.len(),
        kept = groups.zone_count(),
        groups = groups.len(),
        sort = %config.sort,
        "Processed zones"
    );
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::RawZone;

    fn zones(lookups: &mut Lookups) -> Vec<Zone> {
        [
            RawZone::new("Low", "a", 5, 10, "indoor", "loot"),
            RawZone::new("High", "a", 60, 70, "indoor", "loot"),
            RawZone::new("Mid", "b", 30, 45, "outdoor", "loot"),
        ]
        .into_iter()
        .map(|r| Zone::from_raw(r, lookups))
        .collect()
    }

    fn names(zones: &[Zone]) -> Vec<&str> {
        zones.iter().map(|z| z.name.as_str()).collect()
    }

    #[test]
    fn test_level_bounds_are_inclusive_on_min_level() {
        let mut lookups = Lookups::seeded();
        let zones = zones(&mut lookups);
        let config = Configuration {
            min_level: 5,
            max_level: 30,
            ..Default::default()
        };

        let groups = process(&config, &lookups, &zones);
        assert_eq!(
            names(groups.get_named(&lookups, "loot").unwrap()),
            vec!["Low", "Mid"]
        );
    }

    #[test]
    fn test_max_level_of_zone_is_not_bounded() {
        let mut lookups = Lookups::seeded();
        let zones = zones(&mut lookups);
        let config = Configuration {
            max_level: 60,
            ..Default::default()
        };

        let groups = process(&config, &lookups, &zones);
        assert_eq!(groups.zone_count(), 3);
    }

    #[test]
    fn test_unknown_filter_value_matches_nothing() {
        let mut lookups = Lookups::seeded();
        let zones = zones(&mut lookups);
        let config = Configuration {
            expansion: Filter::Exactly("purple".to_string()),
            ..Default::default()
        };

        assert!(process(&config, &lookups, &zones).is_empty());
    }

    #[test]
    fn test_bonus_filter_restricts_groups() {
        let mut lookups = Lookups::seeded();
        let mut zones = zones(&mut lookups);
        zones.push(Zone::from_raw(
            RawZone::new("Shiny", "a", 10, 20, "indoor", "rare"),
            &mut lookups,
        ));
        let config = Configuration {
            bonus: Filter::from_input(Some("RARE")),
            ..Default::default()
        };

        let groups = process(&config, &lookups, &zones);
        assert_eq!(groups.len(), 1);
        assert_eq!(names(groups.get_named(&lookups, "rare").unwrap()), vec!["Shiny"]);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let mut lookups = Lookups::seeded();
        let zones = zones(&mut lookups);
        let config = Configuration {
            min_level: 50,
            max_level: 10,
            ..Default::default()
        };

        assert!(process(&config, &lookups, &zones).is_empty());
    }

    #[test]
    fn test_sort_by_level_desc_is_stable() {
        let mut lookups = Lookups::seeded();
        let mut zones: Vec<Zone> = [
            RawZone::new("A", "x", 1, 1, "indoor", "coin"),
            RawZone::new("B", "x", 9, 9, "indoor", "coin"),
            RawZone::new("C", "x", 1, 1, "indoor", "coin"),
        ]
        .into_iter()
        .map(|r| Zone::from_raw(r, &mut lookups))
        .collect();

        sort_by_level(&mut zones, SortDirection::Desc);
        assert_eq!(names(&zones), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let mut lookups = Lookups::seeded();
        let zones = zones(&mut lookups);
        let before = zones.clone();
        let config = Configuration {
            sort: SortDirection::Desc,
            ..Default::default()
        };

        let _ = process(&config, &lookups, &zones);
        assert_eq!(zones, before);
    }
}
