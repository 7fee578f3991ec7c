//! bonuszones - list today's bonus zones
//!
//! Fetches the bonus feed, filters and groups it, and prints the report.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;

use bonuszones_core::{
    config::{Configuration, DataSource, Filter, SortDirection, SourceConfig},
    engine,
    intern::Lookups,
    report::Report,
    source,
};

mod render;

const FOOTER: &str =
    "This app is not affiliated with the site but please support it at https://fangbreaker.zone";

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Report rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[clap(
    name = "bonuszones",
    about = "List zones with an active bonus today, grouped by bonus type",
    version
)]
struct Cli {
    /// What type of bonus to filter on (experience, loot etc). Empty for all
    #[clap(long)]
    bonus: Option<String>,

    /// Minimum level
    #[clap(long = "minlevel", default_value_t = 1)]
    min_level: u8,

    /// Maximum level
    #[clap(long = "maxlevel", default_value_t = 255)]
    max_level: u8,

    /// Sort by minimum level (asc or desc)
    #[clap(long = "sortbylevel", default_value = "asc")]
    sort: SortDirection,

    /// Expansion name
    #[clap(long)]
    expansion: Option<String>,

    /// Indoor or outdoor
    #[clap(long = "zonetype")]
    zone_type: Option<String>,

    /// Only print the report
    #[clap(long)]
    quiet: bool,

    /// Use built-in sample data instead of the live API
    #[clap(long, conflicts_with = "input")]
    mock: bool,

    /// Read the zone payload from a JSON file
    #[clap(long)]
    input: Option<PathBuf>,

    /// Output format
    #[clap(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// JSON file overriding the API url and timeout
    #[clap(long)]
    source_config: Option<PathBuf>,

    /// Set log level
    #[clap(long, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

impl Cli {
    fn configuration(&self) -> Configuration {
        Configuration {
            min_level: self.min_level,
            max_level: self.max_level,
            sort: self.sort,
            bonus: Filter::from_input(self.bonus.as_deref()),
            expansion: Filter::from_input(self.expansion.as_deref()),
            zone_type: Filter::from_input(self.zone_type.as_deref()),
            quiet: self.quiet,
        }
    }

    fn data_source(&self) -> DataSource {
        if self.mock {
            DataSource::Mock
        } else if let Some(path) = &self.input {
            DataSource::File(path.clone())
        } else {
            DataSource::Remote
        }
    }

    /// Progress and footer lines only decorate the text report
    fn chatty(&self, config: &Configuration) -> bool {
        !config.quiet && self.format == OutputFormat::Text
    }
}

/// Initialize tracing from --log-level; logs go to stderr so stdout carries
/// only the report.
fn initialize_tracing(log_level: &LogLevel) {
    let filter = EnvFilter::new(log_level.to_filter_directive());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(&cli.log_level);

    let config = cli.configuration();
    config.warn_on_suspicious();
    debug!("Resolved configuration: {:?}", config);

    if let Err(e) = run(&cli, &config).await {
        error!("Fatal: {:#}", e);
        eprintln!("\nError: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run(cli: &Cli, config: &Configuration) -> Result<()> {
    let chatty = cli.chatty(config);
    let source_config = SourceConfig::load(cli.source_config.as_deref())
        .await
        .context("Could not load source configuration")?;
    let zone_source = source::build_source(&cli.data_source(), &source_config)?;

    let mut lookups = Lookups::seeded();
    if chatty {
        print!("Fetching from {}...", zone_source.describe());
        io::stdout().flush()?;
    }
    let zones = match source::load_zones(zone_source.as_ref(), &mut lookups).await {
        Ok(zones) => zones,
        Err(e) => {
            if chatty {
                println!(" Error.");
            }
            if e.is_transport() {
                warn!("The bonus feed is unreachable; --mock or --input <file> work offline");
            }
            return Err(e)
                .with_context(|| format!("Could not load zones from {}", zone_source.describe()));
        }
    };
    if chatty {
        println!(" Done!");
    }

    let groups = engine::process(config, &lookups, &zones);
    let report = Report::build(&groups, &lookups);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => report.write_text(&mut out)?,
        OutputFormat::Table => render::write_table(&report, &mut out)?,
        OutputFormat::Json => render::write_json(config, &report, &mut out)?,
    }

    if chatty {
        writeln!(out, "\n{FOOTER}")?;
    }
    Ok(())
}
