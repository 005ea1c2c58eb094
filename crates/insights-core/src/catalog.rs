//! Immutable, caller-owned list of instrument definitions.

use std::collections::HashSet;

use serde::Serialize;

use crate::{Category, InsightsError, InstrumentSpec, Ticker};

/// Validated instrument list. Tickers are unique; order is preserved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct InstrumentCatalog {
    specs: Vec<InstrumentSpec>,
}

impl InstrumentCatalog {
    pub fn new(specs: Vec<InstrumentSpec>) -> Result<Self, InsightsError> {
        let mut seen = HashSet::with_capacity(specs.len());
        for spec in &specs {
            spec.validate()?;
            if !seen.insert(spec.ticker.as_str()) {
                return Err(InsightsError::invalid(
                    "ticker",
                    format!("duplicate ticker '{}' in catalog", spec.ticker),
                ));
            }
        }
        Ok(Self { specs })
    }

    /// Indices, popular equities and crypto shown on the insights dashboard.
    pub fn standard() -> Result<Self, InsightsError> {
        const PRESETS: [(&str, Category, f64, f64); 14] = [
            ("S&P 500", Category::Index, 4300.0, 0.01),
            ("NASDAQ", Category::Index, 14200.0, 0.015),
            ("DOW", Category::Index, 34100.0, 0.008),
            ("AAPL", Category::Equity, 170.0, 0.015),
            ("MSFT", Category::Equity, 325.0, 0.012),
            ("AMZN", Category::Equity, 140.0, 0.02),
            ("GOOGL", Category::Equity, 135.0, 0.018),
            ("META", Category::Equity, 290.0, 0.025),
            ("TSLA", Category::Equity, 215.0, 0.03),
            ("NVDA", Category::Equity, 430.0, 0.035),
            ("BRK.B", Category::Equity, 345.0, 0.007),
            ("BTC", Category::Crypto, 50000.0, 0.035),
            ("ETH", Category::Crypto, 3000.0, 0.04),
            ("SOL", Category::Crypto, 125.0, 0.06),
        ];

        let specs = PRESETS
            .into_iter()
            .map(|(ticker, category, price, volatility)| {
                InstrumentSpec::new(Ticker::parse(ticker)?, category, price, volatility)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(specs)
    }

    pub fn get(&self, ticker: &Ticker) -> Option<&InstrumentSpec> {
        self.specs.iter().find(|spec| &spec.ticker == ticker)
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &InstrumentSpec> {
        self.specs
            .iter()
            .filter(move |spec| spec.category == category)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InstrumentSpec> {
        self.specs.iter()
    }

    pub fn as_slice(&self) -> &[InstrumentSpec] {
        &self.specs
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<'a> IntoIterator for &'a InstrumentCatalog {
    type Item = &'a InstrumentSpec;
    type IntoIter = std::slice::Iter<'a, InstrumentSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
