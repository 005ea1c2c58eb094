use insights_core::{Direction, InsightsBoard};
use serde::Serialize;

use crate::cli::MoversArgs;
use crate::error::CliError;

use super::{summaries, summary_table, CommandOutput, SeriesSummary};

#[derive(Debug, Serialize)]
struct MoversResponseData<'a> {
    direction: Direction,
    limit: i64,
    movers: Vec<SeriesSummary<'a>>,
}

pub fn run(args: &MoversArgs, board: &InsightsBoard) -> Result<CommandOutput, CliError> {
    let direction = Direction::from(args.direction);
    let limit = args.limit.unwrap_or(board.config().top_n);
    let movers = board.top_movers(direction, limit)?;

    let title = match direction {
        Direction::Gainers => "Top Gainers",
        Direction::Losers => "Top Losers",
    };
    let table = vec![summary_table(title, movers.iter().copied())];
    let records = movers
        .iter()
        .map(|series| serde_json::to_value(SeriesSummary::from(*series)))
        .collect::<Result<Vec<_>, _>>()?;
    let data = serde_json::to_value(MoversResponseData {
        direction,
        limit,
        movers: summaries(movers.iter().copied()),
    })?;

    Ok(CommandOutput::new(data, records, table))
}
