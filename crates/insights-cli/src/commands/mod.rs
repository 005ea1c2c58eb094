mod catalog;
mod export;
mod movers;
mod overview;
mod search;
mod show;

use insights_core::config::{ENV_DAYS, ENV_SEED, ENV_TOP_N};
use insights_core::{Category, InsightsBoard, InsightsConfig, InstrumentCatalog, SeriesResult};
use serde::Serialize;
use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::metadata::{Report, ReportMeta};
use crate::output::{self, TableSection};

/// What a command hands back for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    /// Payload of the JSON report.
    pub data: Value,
    /// One object per line in NDJSON mode.
    pub records: Vec<Value>,
    pub table: Vec<TableSection>,
    pub warnings: Vec<String>,
}

impl CommandOutput {
    pub fn new(data: Value, records: Vec<Value>, table: Vec<TableSection>) -> Self {
        Self {
            data,
            records,
            table,
            warnings: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }
}

/// Summary row without the point series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSummary<'a> {
    pub ticker: &'a str,
    pub category: Category,
    pub current_price: f64,
    pub change: f64,
    pub percent_change: f64,
}

impl<'a> From<&'a SeriesResult> for SeriesSummary<'a> {
    fn from(series: &'a SeriesResult) -> Self {
        Self {
            ticker: series.ticker().as_str(),
            category: series.category(),
            current_price: series.current_price(),
            change: series.change(),
            percent_change: series.percent_change(),
        }
    }
}

pub fn summaries<'a>(series: impl IntoIterator<Item = &'a SeriesResult>) -> Vec<SeriesSummary<'a>> {
    series.into_iter().map(SeriesSummary::from).collect()
}

/// `TICKER PRICE CHANGE %CHANGE` table over `series`.
pub fn summary_table<'a>(
    title: impl Into<String>,
    series: impl IntoIterator<Item = &'a SeriesResult>,
) -> TableSection {
    let mut section =
        TableSection::new(&["TICKER", "PRICE", "CHANGE", "%CHANGE"]).titled(title);
    for series in series {
        section.push_row(vec![
            series.ticker().to_string(),
            output::price(series.current_price()),
            format!("{:+.2}", series.change()),
            output::signed_percent(series.percent_change()),
        ]);
    }
    section
}

pub fn run(cli: &Cli) -> Result<Report<CommandOutput>, CliError> {
    let config = resolve_config(cli)?;

    let output = match &cli.command {
        Command::Catalog(args) => catalog::run(args, &InstrumentCatalog::standard()?)?,
        Command::Overview => overview::run(&build_board(config)?)?,
        Command::Movers(args) => movers::run(args, &build_board(config)?)?,
        Command::Search(args) => search::run(args, &mut build_board(config)?)?,
        Command::Show(args) => show::run(args, &mut build_board(config)?)?,
        Command::Export(args) => export::run(args, &build_board(config)?)?,
    };

    let mut meta = ReportMeta::new(config.days, config.seed);
    if config.seed.is_none() && !matches!(cli.command, Command::Catalog(_)) {
        meta.push_warning("series are randomly generated; pass --seed for reproducible output");
    }
    for warning in &output.warnings {
        meta.push_warning(warning.clone());
    }

    Ok(Report::new(meta, output))
}

/// Defaults, then `INSIGHTS_*` environment variables, then global flags.
fn resolve_config(cli: &Cli) -> Result<InsightsConfig, CliError> {
    resolve_config_with(cli, |key| std::env::var(key).ok())
}

/// Flags shadow their variables before anything is parsed, so a flag wins
/// even over a malformed or out-of-range variable.
fn resolve_config_with<F>(cli: &Cli, env: F) -> Result<InsightsConfig, CliError>
where
    F: Fn(&str) -> Option<String>,
{
    let flag = |key: &str| match key {
        ENV_DAYS => cli.days.map(|days| days.to_string()),
        ENV_TOP_N => cli.top.map(|top| top.to_string()),
        ENV_SEED => cli.seed.map(|seed| seed.to_string()),
        _ => None,
    };
    Ok(InsightsConfig::from_lookup(|key| flag(key).or_else(|| env(key)))?)
}

fn build_board(config: InsightsConfig) -> Result<InsightsBoard, CliError> {
    Ok(InsightsBoard::new(InstrumentCatalog::standard()?, config)?)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use insights_core::{
        InsightsBoard, InsightsConfig, InstrumentCatalog, SeriesDate, SeriesGenerator,
    };

    pub fn board() -> InsightsBoard {
        let generator =
            SeriesGenerator::new().with_end_date(SeriesDate::parse("2025-10-18").expect("date"));
        InsightsBoard::with_generator(
            InstrumentCatalog::standard().expect("catalog"),
            InsightsConfig::default().with_seed(Some(17)),
            generator,
        )
        .expect("board")
    }
}
