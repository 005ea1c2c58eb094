use std::io::{self, Write};

use crate::cli::OutputFormat;
use crate::commands::CommandOutput;
use crate::error::CliError;
use crate::metadata::Report;

/// Titled block of aligned columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSection {
    pub title: Option<String>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableSection {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            title: None,
            headers: headers.iter().map(|h| (*h).to_owned()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (index, cell) in row.iter().enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(index) {
                    Some(width) => *width = (*width).max(len),
                    None => widths.push(len),
                }
            }
        }
        widths
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if let Some(title) = &self.title {
            writeln!(out, "{title}")?;
        }
        let widths = self.column_widths();
        write_row(out, &self.headers, &widths)?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        write_row(out, &rule, &widths)?;
        for row in &self.rows {
            write_row(out, row, &widths)?;
        }
        if self.rows.is_empty() {
            writeln!(out, "(no rows)")?;
        }
        Ok(())
    }
}

fn write_row<W: Write>(out: &mut W, cells: &[String], widths: &[usize]) -> io::Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{}", line.trim_end())
}

pub fn render(
    report: &Report<CommandOutput>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_to(&mut out, report, format, pretty)?;
    out.flush()?;
    Ok(())
}

pub fn render_to<W: Write>(
    out: &mut W,
    report: &Report<CommandOutput>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let envelope = Report::new(report.meta.clone(), &report.data.data);
            let payload = if pretty {
                serde_json::to_string_pretty(&envelope)?
            } else {
                serde_json::to_string(&envelope)?
            };
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Ndjson => {
            let meta = serde_json::json!({ "meta": report.meta });
            writeln!(out, "{}", serde_json::to_string(&meta)?)?;
            for record in &report.data.records {
                writeln!(out, "{}", serde_json::to_string(record)?)?;
            }
        }
        OutputFormat::Table => render_table(out, report)?,
    }
    Ok(())
}

fn render_table<W: Write>(out: &mut W, report: &Report<CommandOutput>) -> Result<(), CliError> {
    writeln!(out, "request_id  : {}", report.meta.request_id)?;
    writeln!(out, "generated_at: {}", report.meta.generated_at)?;
    writeln!(out, "days        : {}", report.meta.days)?;
    if let Some(seed) = report.meta.seed {
        writeln!(out, "seed        : {seed}")?;
    }
    if !report.meta.warnings.is_empty() {
        writeln!(out, "warnings:")?;
        for warning in &report.meta.warnings {
            writeln!(out, "  - {warning}")?;
        }
    }

    for section in &report.data.table {
        writeln!(out)?;
        section.write_to(out)?;
    }
    Ok(())
}

/// `+1.23%` / `-4.56%`.
pub fn signed_percent(value: f64) -> String {
    format!("{value:+.2}%")
}

pub fn price(value: f64) -> String {
    format!("${value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::ReportMeta;
    use serde_json::Value;

    fn sample() -> Report<CommandOutput> {
        let mut section = TableSection::new(&["TICKER", "CHANGE"]).titled("Top Gainers");
        section.push_row(vec!["NVDA".into(), signed_percent(12.5)]);
        section.push_row(vec!["S&P 500".into(), signed_percent(-0.4)]);

        let output = CommandOutput {
            data: serde_json::json!({ "count": 2 }),
            records: vec![
                serde_json::json!({ "ticker": "NVDA" }),
                serde_json::json!({ "ticker": "S&P 500" }),
            ],
            table: vec![section],
            warnings: Vec::new(),
        };
        Report::new(ReportMeta::new(30, Some(1)), output)
    }

    fn rendered(format: OutputFormat) -> String {
        let mut buffer = Vec::new();
        render_to(&mut buffer, &sample(), format, false).expect("renders");
        String::from_utf8(buffer).expect("utf8")
    }

    #[test]
    fn json_wraps_data_in_report() {
        let text = rendered(OutputFormat::Json);
        let value: Value = serde_json::from_str(text.trim()).expect("json");
        assert_eq!(value["data"]["count"], 2);
        assert_eq!(value["meta"]["days"], 30);
    }

    #[test]
    fn ndjson_emits_meta_then_one_line_per_record() {
        let text = rendered(OutputFormat::Ndjson);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("\"meta\""));
        assert!(lines[2].contains("S&P 500"));
    }

    #[test]
    fn table_aligns_columns() {
        let text = rendered(OutputFormat::Table);
        assert!(text.contains("Top Gainers"));
        assert!(text.contains("NVDA     +12.50%"));
        assert!(text.contains("S&P 500  -0.40%"));
    }

    #[test]
    fn formats_signed_percent() {
        assert_eq!(signed_percent(0.0), "+0.00%");
        assert_eq!(signed_percent(-3.333), "-3.33%");
        assert_eq!(price(229.1), "$229.10");
    }
}
