//! Table and JSON renderings of the report

use anyhow::Result;
use std::io::Write;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use bonuszones_core::{config::Configuration, report::Report};

// Table row structure for zone display
#[derive(Tabled)]
struct ZoneTableRow {
    #[tabled(rename = "Bonus")]
    bonus: String,
    #[tabled(rename = "Zone")]
    name: String,
    #[tabled(rename = "Expansion")]
    expansion: String,
    #[tabled(rename = "Min")]
    min_level: u8,
    #[tabled(rename = "Max")]
    max_level: u8,
}

fn table_rows(report: &Report) -> Vec<ZoneTableRow> {
    report
        .sections
        .iter()
        .flat_map(|section| {
            section.zones.iter().map(|zone| ZoneTableRow {
                bonus: section.bonus.to_uppercase(),
                name: zone.name.clone(),
                expansion: zone.expansion.clone(),
                min_level: zone.min_level,
                max_level: zone.max_level,
            })
        })
        .collect()
}

pub fn write_table<W: Write>(report: &Report, out: &mut W) -> Result<()> {
    let rows = table_rows(report);
    if rows.is_empty() {
        writeln!(out, "\n{}", bonuszones_core::report::NO_RESULTS)?;
        return Ok(());
    }

    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string();

    writeln!(out, "Found {} zones\n", rows.len())?;
    writeln!(out, "{table}")?;
    Ok(())
}

pub fn write_json<W: Write>(config: &Configuration, report: &Report, out: &mut W) -> Result<()> {
    let output = serde_json::json!({
        "filters": config,
        "count": report.zone_count(),
        "sections": report.sections,
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}
