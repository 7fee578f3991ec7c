//! bonuszones core library
//!
//! Decodes the daily bonus-zone feed, interns its categorical fields, and
//! runs the filter/group/sort pipeline that feeds the report.

pub mod config;
pub mod engine;
pub mod error;
pub mod intern;
pub mod report;
pub mod source;
pub mod zone;

pub use config::{Configuration, DataSource, Filter, SortDirection, SourceConfig};
pub use engine::{process, BonusGroups};
pub use error::FetchError;
pub use intern::{CategoryCode, CategoryTable, Lookups};
pub use report::Report;
pub use zone::Zone;
