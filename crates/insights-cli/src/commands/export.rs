use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use insights_core::{InsightsBoard, SelectionState, SeriesResult};
use serde::Serialize;
use tracing::info;

use crate::cli::{ExportArgs, ExportFormat};
use crate::error::CliError;
use crate::output::TableSection;

use super::CommandOutput;

#[derive(Debug, Serialize)]
struct ExportResponseData<'a> {
    output: &'a str,
    format: &'static str,
    series: usize,
    points: usize,
}

pub fn run(args: &ExportArgs, board: &InsightsBoard) -> Result<CommandOutput, CliError> {
    let series: Vec<&SeriesResult> = match &args.ticker {
        Some(ticker) => {
            let mut selection = SelectionState::new();
            vec![selection.select(board.universe(), ticker)?]
        }
        None => board.universe().iter().collect(),
    };

    write_series(Path::new(&args.output), &series, args.export_format)?;

    let points: usize = series.iter().map(|s| s.points().len()).sum();
    let format = match args.export_format {
        ExportFormat::Json => "json",
        ExportFormat::Ndjson => "ndjson",
    };
    info!(output = %args.output, format, series = series.len(), points, "exported series");

    let mut table = TableSection::new(&["OUTPUT", "FORMAT", "SERIES", "POINTS"]).titled("Export");
    table.push_row(vec![
        args.output.clone(),
        format.to_owned(),
        series.len().to_string(),
        points.to_string(),
    ]);

    let summary = ExportResponseData {
        output: &args.output,
        format,
        series: series.len(),
        points,
    };
    let data = serde_json::to_value(&summary)?;
    Ok(CommandOutput::new(data.clone(), vec![data], vec![table]))
}

/// JSON writes one array of series; NDJSON writes one series per line.
fn write_series(
    path: &Path,
    series: &[&SeriesResult],
    format: ExportFormat,
) -> Result<(), CliError> {
    let mut writer = BufWriter::new(File::create(path)?);
    match format {
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, series)?;
            writeln!(writer)?;
        }
        ExportFormat::Ndjson => {
            for item in series {
                serde_json::to_writer(&mut writer, item)?;
                writeln!(writer)?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}
