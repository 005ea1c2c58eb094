use insights_core::{Category, InstrumentCatalog, InstrumentSpec};
use serde::Serialize;

use crate::cli::CatalogArgs;
use crate::error::CliError;
use crate::output::TableSection;

use super::CommandOutput;

#[derive(Debug, Serialize)]
struct CatalogResponseData<'a> {
    count: usize,
    instruments: Vec<&'a InstrumentSpec>,
}

pub fn run(args: &CatalogArgs, catalog: &InstrumentCatalog) -> Result<CommandOutput, CliError> {
    let categories: Vec<Category> = match args.category {
        Some(category) => vec![category.into()],
        None => Category::ALL.to_vec(),
    };

    let mut instruments = Vec::new();
    let mut table = Vec::new();
    for category in categories {
        let mut section = TableSection::new(&["TICKER", "CATEGORY", "START", "VOLATILITY"])
            .titled(category.label());
        for spec in catalog.by_category(category) {
            section.push_row(vec![
                spec.ticker.to_string(),
                category.to_string(),
                format!("{:.2}", spec.initial_price),
                format!("{:.3}", spec.volatility),
            ]);
            instruments.push(spec);
        }
        table.push(section);
    }

    let records = instruments
        .iter()
        .map(|spec| serde_json::to_value(spec))
        .collect::<Result<Vec<_>, _>>()?;
    let data = serde_json::to_value(CatalogResponseData {
        count: instruments.len(),
        instruments,
    })?;

    let output = CommandOutput::new(data, records, table);
    if output.records.is_empty() {
        return Ok(output.with_warning("catalog has no instruments in that category"));
    }
    Ok(output)
}
