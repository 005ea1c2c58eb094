use insights_core::InsightsBoard;
use serde::Serialize;

use crate::cli::SearchArgs;
use crate::error::CliError;

use super::{summaries, summary_table, CommandOutput, SeriesSummary};

#[derive(Debug, Serialize)]
struct SearchResponseData<'a> {
    query: &'a str,
    count: usize,
    results: Vec<SeriesSummary<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    selected: Option<&'a str>,
}

pub fn run(args: &SearchArgs, board: &mut InsightsBoard) -> Result<CommandOutput, CliError> {
    // The board focuses the first match, so it is the selection.
    let results = board.search(&args.query);
    let selected = results.first().map(|series| series.ticker().as_str());

    let records = results
        .iter()
        .map(|series| serde_json::to_value(SeriesSummary::from(*series)))
        .collect::<Result<Vec<_>, _>>()?;
    let table = vec![summary_table(
        format!("Results for \"{}\"", args.query),
        results.iter().copied(),
    )];
    let data = serde_json::to_value(SearchResponseData {
        query: &args.query,
        count: results.len(),
        results: summaries(results.iter().copied()),
        selected,
    })?;

    let output = CommandOutput::new(data, records, table);
    if output.records.is_empty() {
        return Ok(output.with_warning(format!("no results found for \"{}\"", args.query)));
    }
    Ok(output)
}
