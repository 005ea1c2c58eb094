//! CLI argument definitions for `insights`.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `catalog` | List instrument definitions |
//! | `overview` | Index summaries plus top gainers and losers |
//! | `movers` | Top-N gainers or losers |
//! | `search` | Ticker substring search |
//! | `show` | Full series for one instrument |
//! | `export` | Write generated series to a file |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, ndjson, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--days` | `30` | History length; series hold `days + 1` points |
//! | `--top` | `5` | Length of gainers/losers lists |
//! | `--seed` | none | Base seed for reproducible output |
//! | `--verbose` | `false` | Debug logging on stderr |
//!
//! `--days`, `--top` and `--seed` fall back to `INSIGHTS_DAYS`,
//! `INSIGHTS_TOP_N` and `INSIGHTS_SEED`.
//!
//! # Examples
//!
//! ```bash
//! insights overview --format table
//! insights movers --direction losers --limit 3 --seed 42
//! insights search aapl --pretty
//! insights export --output series.json --ticker BTC
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use insights_core::{Category, Direction};

/// Simulated market insights: synthetic series, movers and ticker search.
///
/// All prices are generated for educational purposes and do not represent
/// real market data.
#[derive(Debug, Parser)]
#[command(name = "insights", author, version, about = "Simulated market insights CLI")]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Days of history to generate (overrides INSIGHTS_DAYS).
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub days: Option<i64>,

    /// Number of gainers/losers to list (overrides INSIGHTS_TOP_N).
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub top: Option<i64>,

    /// Base seed for reproducible series (overrides INSIGHTS_SEED).
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Log generation details to stderr.
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text table.
    Table,
    /// Single JSON report.
    Json,
    /// One JSON object per record.
    Ndjson,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Index,
    Equity,
    Crypto,
}

impl From<CategoryArg> for Category {
    fn from(value: CategoryArg) -> Self {
        match value {
            CategoryArg::Index => Category::Index,
            CategoryArg::Equity => Category::Equity,
            CategoryArg::Crypto => Category::Crypto,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    Gainers,
    Losers,
}

impl From<DirectionArg> for Direction {
    fn from(value: DirectionArg) -> Self {
        match value {
            DirectionArg::Gainers => Direction::Gainers,
            DirectionArg::Losers => Direction::Losers,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Ndjson,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List instrument definitions.
    ///
    ///   insights catalog --category crypto
    Catalog(CatalogArgs),

    /// Market indices plus top gainers and losers.
    ///
    ///   insights overview --top 3 --format table
    Overview,

    /// Rank instruments by percent change.
    ///
    ///   insights movers --direction losers --limit 3
    Movers(MoversArgs),

    /// Case-insensitive ticker substring search.
    ///
    /// The first match becomes the focused instrument.
    ///
    ///   insights search aapl
    Search(SearchArgs),

    /// Full generated series for one instrument.
    ///
    ///   insights show TSLA --format table
    Show(ShowArgs),

    /// Write generated series to a file.
    ///
    ///   insights export --output universe.json
    ///   insights export --output btc.ndjson --ticker BTC --export-format ndjson
    Export(ExportArgs),
}

#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Only list instruments of this category.
    #[arg(long, value_enum)]
    pub category: Option<CategoryArg>,
}

#[derive(Debug, Args)]
pub struct MoversArgs {
    #[arg(long, value_enum, default_value_t = DirectionArg::Gainers)]
    pub direction: DirectionArg,

    /// How many instruments to list (defaults to --top).
    #[arg(long, allow_negative_numbers = true)]
    pub limit: Option<i64>,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Ticker fragment, e.g. `aapl` or `500`.
    pub query: String,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Exact ticker, case-insensitive.
    pub ticker: String,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Destination file.
    #[arg(long)]
    pub output: String,

    /// Export a single instrument instead of the whole universe.
    #[arg(long)]
    pub ticker: Option<String>,

    #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
    pub export_format: ExportFormat,
}
