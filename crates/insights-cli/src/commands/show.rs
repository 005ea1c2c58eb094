use insights_core::{format_volume, InsightsBoard};

use crate::cli::ShowArgs;
use crate::error::CliError;
use crate::output::{self, TableSection};

use super::CommandOutput;

/// Full series for one instrument; unknown tickers fail with `NotFound`.
pub fn run(args: &ShowArgs, board: &mut InsightsBoard) -> Result<CommandOutput, CliError> {
    let series = board.select(&args.ticker)?;

    let mut summary =
        TableSection::new(&["TICKER", "CATEGORY", "START", "PRICE", "CHANGE", "%CHANGE"])
            .titled(series.ticker().to_string());
    summary.push_row(vec![
        series.ticker().to_string(),
        series.category().label().to_owned(),
        output::price(series.initial_price()),
        output::price(series.current_price()),
        format!("{:+.2}", series.change()),
        output::signed_percent(series.percent_change()),
    ]);

    let mut history = TableSection::new(&["DATE", "LABEL", "PRICE", "VOLUME"]).titled("History");
    for point in series.points() {
        history.push_row(vec![
            point.date.to_string(),
            point.label(),
            output::price(point.price),
            format_volume(point.volume),
        ]);
    }

    let records = series
        .points()
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()?;
    let data = serde_json::to_value(series)?;

    Ok(CommandOutput::new(data, records, vec![summary, history]))
}
