use insights_core::{Category, InsightsBoard, SeriesResult};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::CliError;

use super::{summaries, summary_table, CommandOutput, SeriesSummary};

#[derive(Debug, Serialize)]
struct OverviewResponseData<'a> {
    top_n: i64,
    indices: Vec<SeriesSummary<'a>>,
    gainers: Vec<SeriesSummary<'a>>,
    losers: Vec<SeriesSummary<'a>>,
}

/// Index strip, then top gainers and losers across the whole universe.
pub fn run(board: &InsightsBoard) -> Result<CommandOutput, CliError> {
    let indices: Vec<&SeriesResult> = board.by_category(Category::Index).collect();
    let gainers = board.top_gainers()?;
    let losers = board.top_losers()?;
    debug!(
        indices = indices.len(),
        gainers = gainers.len(),
        losers = losers.len(),
        "built overview"
    );

    let mut records = Vec::new();
    for (section, list) in [("index", &indices), ("gainer", &gainers), ("loser", &losers)] {
        for series in list.iter() {
            let mut record = serde_json::to_value(SeriesSummary::from(*series))?;
            if let Value::Object(fields) = &mut record {
                fields.insert("section".to_owned(), Value::from(section));
            }
            records.push(record);
        }
    }

    let table = vec![
        summary_table(Category::Index.label(), indices.iter().copied()),
        summary_table("Top Gainers", gainers.iter().copied()),
        summary_table("Top Losers", losers.iter().copied()),
    ];

    let data = serde_json::to_value(OverviewResponseData {
        top_n: board.config().top_n,
        indices: summaries(indices.iter().copied()),
        gainers: summaries(gainers.iter().copied()),
        losers: summaries(losers.iter().copied()),
    })?;

    Ok(CommandOutput::new(data, records, table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;

    #[test]
    fn lists_indices_and_both_mover_lists() {
        let board = fixtures::board();
        let output = run(&board).expect("runs");

        assert_eq!(output.data["top_n"], 5);
        assert_eq!(output.data["indices"].as_array().map(Vec::len), Some(3));
        assert_eq!(output.data["gainers"].as_array().map(Vec::len), Some(5));
        assert_eq!(output.data["losers"].as_array().map(Vec::len), Some(5));
        assert_eq!(output.records.len(), 13);
        assert_eq!(output.records[0]["section"], "index");
        assert_eq!(output.records[12]["section"], "loser");
    }

    #[test]
    fn gainers_are_sorted_descending() {
        let board = fixtures::board();
        let output = run(&board).expect("runs");
        let changes: Vec<f64> = output.data["gainers"]
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|g| g["percent_change"].as_f64())
            .collect();
        assert!(changes.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn table_has_three_titled_sections() {
        let board = fixtures::board();
        let output = run(&board).expect("runs");
        let titles: Vec<Option<&str>> =
            output.table.iter().map(|s| s.title.as_deref()).collect();
        assert_eq!(
            titles,
            vec![Some("Market Indices"), Some("Top Gainers"), Some("Top Losers")]
        );
    }
}
