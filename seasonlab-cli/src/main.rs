//! SeasonLab CLI — chart lookup and TP/SL table commands.
//!
//! Commands:
//! - `locate` — print the local path and mirror URL for one chart
//! - `show` — resolve charts for a view (monthly/daily) and report
//!   origin, dimensions, and size; optionally export the bytes
//! - `entries` — load the TP/SL table and print it, filtered by
//!   month and/or pair
//! - `config init` — write the default config TOML

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use seasonlab_core::charts::{
    ChartCatalog, ChartError, ChartKind, ChartResolver,
};
use seasonlab_core::config::ViewerConfig;
use seasonlab_core::dataset::{EntryFilter, EntryLoader};
use seasonlab_core::domain::{CurrencyPair, EntryTable, Month};

#[derive(Parser)]
#[command(
    name = "seasonlab",
    about = "SeasonLab CLI — seasonality chart and TP/SL table viewer"
)]
struct Cli {
    /// Path to a config TOML. Defaults to the built-in deployment config.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the local path and mirror URL for one chart.
    Locate {
        /// Currency pair (e.g. EURUSD).
        pair: String,

        /// Chart kind: monthly or daily.
        #[arg(long, default_value = "monthly")]
        kind: String,

        /// Month 1-12 (required for daily).
        #[arg(long)]
        month: Option<u32>,
    },
    /// Resolve charts for a view and report what was found.
    Show {
        /// Currency pair. Omit for all pairs (monthly view, or daily
        /// view-by-month with --month).
        #[arg(long)]
        pair: Option<String>,

        /// Chart kind: monthly or daily.
        #[arg(long, default_value = "monthly")]
        kind: String,

        /// Month 1-12. With daily and no --pair, shows all pairs for
        /// this month.
        #[arg(long)]
        month: Option<u32>,

        /// Export resolved chart bytes into this directory.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Load the TP/SL table and print it.
    Entries {
        /// Keep only rows whose date falls in this month (1-12).
        #[arg(long)]
        month: Option<u32>,

        /// Keep only rows for this pair.
        #[arg(long)]
        pair: Option<String>,
    },
    /// Config management.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write the default config TOML.
    Init {
        /// Output path.
        #[arg(long, default_value = "seasonlab.toml")]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Locate { pair, kind, month } => run_locate(&config, &pair, &kind, month),
        Commands::Show {
            pair,
            kind,
            month,
            out,
        } => run_show(&config, pair.as_deref(), &kind, month, out.as_deref()),
        Commands::Entries { month, pair } => run_entries(&config, month, pair.as_deref()),
        Commands::Config { action } => match action {
            ConfigAction::Init { path } => run_config_init(&path),
        },
    }
}

fn load_config(path: Option<&Path>) -> Result<ViewerConfig> {
    match path {
        Some(path) => Ok(ViewerConfig::from_file(path)?),
        None => Ok(ViewerConfig::default()),
    }
}

fn parse_kind(kind: &str) -> Result<ChartKind> {
    match kind {
        "monthly" => Ok(ChartKind::MonthlyOverview),
        "daily" => Ok(ChartKind::DailyProbability),
        other => bail!("unknown chart kind '{other}'. Valid: monthly, daily"),
    }
}

fn parse_month(month: Option<u32>) -> Result<Option<Month>> {
    Ok(month.map(Month::new).transpose()?)
}

fn run_locate(config: &ViewerConfig, pair: &str, kind: &str, month: Option<u32>) -> Result<()> {
    let catalog = ChartCatalog::from_config(config);
    let pair: CurrencyPair = pair.parse()?;
    let location = catalog.locate(pair, parse_kind(kind)?, parse_month(month)?)?;

    println!("local:  {}", location.local_path.display());
    println!("remote: {}", location.remote_url);
    Ok(())
}

fn run_show(
    config: &ViewerConfig,
    pair: Option<&str>,
    kind: &str,
    month: Option<u32>,
    out: Option<&Path>,
) -> Result<()> {
    let catalog = ChartCatalog::from_config(config);
    let resolver = ChartResolver::with_default_sources();
    let kind = parse_kind(kind)?;

    // The (pair, month) grid for the selected view, mirroring the
    // dashboard's modes: monthly overview, daily per pair, daily
    // view-by-month across pairs.
    let requests: Vec<(CurrencyPair, Option<Month>)> = match kind {
        ChartKind::MonthlyOverview => selected_pairs(pair)?
            .into_iter()
            .map(|p| (p, None))
            .collect(),
        ChartKind::DailyProbability => match (pair, parse_month(month)?) {
            (Some(p), Some(m)) => vec![(p.parse()?, Some(m))],
            (Some(p), None) => {
                let p: CurrencyPair = p.parse()?;
                Month::ALL.iter().map(|&m| (p, Some(m))).collect()
            }
            (None, Some(m)) => CurrencyPair::ALL.iter().map(|&p| (p, Some(m))).collect(),
            (None, None) => {
                bail!("daily view needs --pair (all months) or --month (all pairs)")
            }
        },
    };

    let mut missing = 0usize;
    for (p, m) in requests {
        let location = catalog.locate(p, kind, m)?;
        let label = match m {
            Some(m) => format!("{p} / {m}"),
            None => p.to_string(),
        };

        match resolver.resolve(&location) {
            Ok(chart) => {
                println!(
                    "{label:<22} {:>9}  {}x{}  via {}",
                    format_size(chart.bytes.len() as u64),
                    chart.width,
                    chart.height,
                    chart.origin.label()
                );
                if let Some(out) = out {
                    std::fs::create_dir_all(out)?;
                    let file_name = location
                        .local_path
                        .file_name()
                        .expect("chart paths always carry a file name");
                    std::fs::write(out.join(file_name), &chart.bytes)?;
                }
            }
            Err(ChartError::NotFound) => {
                println!("{label:<22} MISSING    ({})", location.remote_url);
                missing += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    if missing > 0 {
        println!();
        println!("{missing} chart(s) not found locally or on the mirror.");
    }
    Ok(())
}

fn selected_pairs(pair: Option<&str>) -> Result<Vec<CurrencyPair>> {
    match pair {
        Some(p) => Ok(vec![p.parse()?]),
        None => Ok(CurrencyPair::ALL.to_vec()),
    }
}

fn run_entries(config: &ViewerConfig, month: Option<u32>, pair: Option<&str>) -> Result<()> {
    let loader = EntryLoader::new(config.dataset.clone());
    let table = loader.load();

    let filter = EntryFilter::new(
        parse_month(month)?,
        pair.map(|p| p.parse::<CurrencyPair>()).transpose()?,
    );
    let result = filter.apply(&table);

    let cols = EntryTable::columns();
    println!(
        "{:<12} {:<8} {:<16} {:<16} {:<10}",
        cols[0], cols[1], cols[2], cols[3], cols[4]
    );
    println!("{}", "-".repeat(66));
    for entry in &result.entries {
        println!(
            "{:<12} {:<8} {:<16} {:<16} {:<10}",
            entry.date.to_string(),
            entry.pair,
            entry.prob_up,
            entry.prob_down,
            entry.entry_type
        );
    }

    println!();
    println!("{} of {} entries shown", result.len(), table.len());
    if table.dropped_rows > 0 {
        println!("({} malformed row(s) dropped at load)", table.dropped_rows);
    }
    Ok(())
}

fn run_config_init(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("refusing to overwrite existing config: {}", path.display());
    }
    let config = ViewerConfig::default();
    std::fs::write(path, config.to_toml()?)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
