//! Generated series for every instrument of a catalog.

use serde::Serialize;
use tracing::debug;

use crate::random::Seeding;
use crate::{Category, InsightsError, InstrumentCatalog, SeriesGenerator, SeriesResult, Ticker};

/// One [`SeriesResult`] per catalog entry, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Universe {
    series: Vec<SeriesResult>,
}

impl Universe {
    /// Generate every instrument with its own random source.
    ///
    /// Under [`Seeding::Fixed`] each instrument's draws depend only on the base
    /// seed and its ticker, so the result is the same whatever order (or
    /// thread) the instruments are generated in.
    pub fn generate(
        catalog: &InstrumentCatalog,
        generator: &SeriesGenerator,
        days: i64,
        seeding: Seeding,
    ) -> Result<Self, InsightsError> {
        let series = catalog
            .iter()
            .map(|spec| {
                let mut rng = seeding.source_for(&spec.ticker);
                generator.generate(spec, days, &mut rng)
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(instruments = series.len(), days, ?seeding, "generated universe");
        Ok(Self { series })
    }

    /// Wrap already-generated series, e.g. from a custom random source.
    pub fn from_series(series: Vec<SeriesResult>) -> Self {
        Self { series }
    }

    pub fn get(&self, ticker: &Ticker) -> Option<&SeriesResult> {
        self.series.iter().find(|series| series.ticker() == ticker)
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &SeriesResult> {
        self.series
            .iter()
            .filter(move |series| series.category() == category)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SeriesResult> {
        self.series.iter()
    }

    pub fn as_slice(&self) -> &[SeriesResult] {
        &self.series
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SeriesDate;

    fn generator() -> SeriesGenerator {
        SeriesGenerator::new().with_end_date(SeriesDate::parse("2025-06-30").expect("date"))
    }

    #[test]
    fn covers_catalog_in_order() {
        let catalog = InstrumentCatalog::standard().expect("catalog");
        let universe =
            Universe::generate(&catalog, &generator(), 30, Seeding::Fixed(7)).expect("valid");

        assert_eq!(universe.len(), catalog.len());
        for (spec, series) in catalog.iter().zip(universe.iter()) {
            assert_eq!(&spec.ticker, series.ticker());
            assert_eq!(series.points().len(), 31);
        }
    }

    #[test]
    fn fixed_seed_is_order_independent() {
        let catalog = InstrumentCatalog::standard().expect("catalog");
        let reversed = InstrumentCatalog::new(catalog.iter().rev().cloned().collect())
            .expect("same specs");

        let forward =
            Universe::generate(&catalog, &generator(), 20, Seeding::Fixed(11)).expect("valid");
        let backward =
            Universe::generate(&reversed, &generator(), 20, Seeding::Fixed(11)).expect("valid");

        for series in forward.iter() {
            assert_eq!(Some(series), backward.get(series.ticker()));
        }
    }

    #[test]
    fn instruments_draw_independent_sequences() {
        let catalog = InstrumentCatalog::standard().expect("catalog");
        let universe =
            Universe::generate(&catalog, &generator(), 10, Seeding::Fixed(3)).expect("valid");

        let aapl = universe.get(&Ticker::parse("AAPL").expect("t")).expect("present");
        let msft = universe.get(&Ticker::parse("MSFT").expect("t")).expect("present");
        let volumes = |s: &SeriesResult| s.points().iter().map(|p| p.volume).collect::<Vec<_>>();
        assert_ne!(volumes(aapl), volumes(msft));
    }

    #[test]
    fn propagates_generation_errors() {
        let catalog = InstrumentCatalog::standard().expect("catalog");
        let err = Universe::generate(&catalog, &generator(), -3, Seeding::Entropy)
            .expect_err("negative days");
        assert!(matches!(err, InsightsError::InvalidParameter { field: "days", .. }));
    }
}
