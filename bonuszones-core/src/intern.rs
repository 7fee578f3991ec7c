//! Categorical interning
//!
//! Expansion, zone type and bonus are stored on each [`Zone`](crate::Zone) as
//! small integer codes. A [`CategoryTable`] assigns a code the first time a
//! case-folded value is seen and reuses it afterwards; the same table maps
//! codes back to display strings for the report.
//!
//! Tables are owned by a [`Lookups`] value built once at startup. Decoding is
//! the only phase that mutates it; filtering and reporting borrow it shared.

use serde::Serialize;
use std::fmt;

/// Zone types known ahead of any data
pub const ZONE_TYPES: &[&str] = &["indoor", "outdoor"];

/// Closed bonus vocabulary, in code order
pub const BONUS_TYPES: &[&str] = &[
    "aa",
    "coin",
    "experience",
    "faction",
    "loot",
    "none",
    "rare",
    "respawn",
    "skill",
    "unconfirmed",
];

/// Bonus meaning "no active bonus"
pub const BONUS_NONE: &str = "none";

/// Provisional bonus that is never reported
pub const BONUS_UNCONFIRMED: &str = "unconfirmed";

/// Index into a [`CategoryTable`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CategoryCode(u32);

impl CategoryCode {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CategoryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ordered, append-only list of case-folded category values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTable {
    values: Vec<String>,
}

impl CategoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table pre-populated with a fixed vocabulary
    pub fn seeded(values: &[&str]) -> Self {
        let mut table = Self::new();
        for value in values {
            table.intern(value);
        }
        table
    }

    /// Code for `raw`, appending it if this is the first sighting
    pub fn intern(&mut self, raw: &str) -> CategoryCode {
        let folded = raw.to_lowercase();
        if let Some(code) = self.position(&folded) {
            return code;
        }
        self.values.push(folded);
        CategoryCode((self.values.len() - 1) as u32)
    }

    /// Code for `raw` if it has already been interned
    pub fn lookup(&self, raw: &str) -> Option<CategoryCode> {
        self.position(&raw.to_lowercase())
    }

    /// Case-folded value behind `code`
    pub fn resolve(&self, code: CategoryCode) -> Option<&str> {
        self.values.get(code.index()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    fn position(&self, folded: &str) -> Option<CategoryCode> {
        self.values
            .iter()
            .position(|v| v == folded)
            .map(|i| CategoryCode(i as u32))
    }
}

/// The three category tables used by decode, engine and report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookups {
    pub expansions: CategoryTable,
    pub zone_types: CategoryTable,
    pub bonuses: CategoryTable,
}

impl Lookups {
    /// Zone types and bonuses pre-seeded; expansions start empty and come
    /// entirely from the data.
    pub fn seeded() -> Self {
        Self {
            expansions: CategoryTable::new(),
            zone_types: CategoryTable::seeded(ZONE_TYPES),
            bonuses: CategoryTable::seeded(BONUS_TYPES),
        }
    }

    /// Code of the `none` bonus, if present
    pub fn bonus_none(&self) -> Option<CategoryCode> {
        self.bonuses.lookup(BONUS_NONE)
    }

    /// Code of the `unconfirmed` bonus, if present
    pub fn bonus_unconfirmed(&self) -> Option<CategoryCode> {
        self.bonuses.lookup(BONUS_UNCONFIRMED)
    }

    /// Display string for an expansion code ("?" if the code is foreign)
    pub fn expansion_name(&self, code: CategoryCode) -> &str {
        self.expansions.resolve(code).unwrap_or("?")
    }

    /// Display string for a bonus code ("?" if the code is foreign)
    pub fn bonus_name(&self, code: CategoryCode) -> &str {
        self.bonuses.resolve(code).unwrap_or("?")
    }
}

impl Default for Lookups {
    fn default() -> Self {
        Self::seeded()
    }
}
