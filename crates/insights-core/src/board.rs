//! State behind the insights view: catalog, current universe and selection.

use tracing::debug;

use crate::ranking::{self, Direction};
use crate::{
    search, Category, InsightsConfig, InsightsError, InstrumentCatalog, SelectionState,
    SeriesGenerator, SeriesResult, Universe,
};

/// Owns everything the insights view renders from.
#[derive(Debug, Clone)]
pub struct InsightsBoard {
    catalog: InstrumentCatalog,
    config: InsightsConfig,
    generator: SeriesGenerator,
    universe: Universe,
    selection: SelectionState,
}

impl InsightsBoard {
    /// Validate `config` and generate the initial universe.
    pub fn new(catalog: InstrumentCatalog, config: InsightsConfig) -> Result<Self, InsightsError> {
        let generator = SeriesGenerator::new().with_drift_bias(config.drift_bias);
        Self::with_generator(catalog, config, generator)
    }

    /// Like [`InsightsBoard::new`] with a caller-built generator, e.g. one
    /// pinned to a fixed end date. `config.drift_bias` is not applied.
    pub fn with_generator(
        catalog: InstrumentCatalog,
        config: InsightsConfig,
        generator: SeriesGenerator,
    ) -> Result<Self, InsightsError> {
        config.validate()?;
        let universe = Universe::generate(&catalog, &generator, config.days, config.seeding())?;
        Ok(Self {
            catalog,
            config,
            generator,
            universe,
            selection: SelectionState::new(),
        })
    }

    /// Regenerate every series, discarding the previous universe.
    ///
    /// With a fixed seed the regenerated universe is identical to the old one.
    pub fn refresh(&mut self) -> Result<(), InsightsError> {
        self.universe = Universe::generate(
            &self.catalog,
            &self.generator,
            self.config.days,
            self.config.seeding(),
        )?;
        debug!(selected = ?self.selection.ticker(), "refreshed universe");
        Ok(())
    }

    pub fn catalog(&self) -> &InstrumentCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &InsightsConfig {
        &self.config
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &SeriesResult> {
        self.universe.by_category(category)
    }

    pub fn top_movers(
        &self,
        direction: Direction,
        n: i64,
    ) -> Result<Vec<&SeriesResult>, InsightsError> {
        ranking::top_movers(self.universe.as_slice(), direction, n)
    }

    pub fn top_gainers(&self) -> Result<Vec<&SeriesResult>, InsightsError> {
        self.top_movers(Direction::Gainers, self.config.top_n)
    }

    pub fn top_losers(&self) -> Result<Vec<&SeriesResult>, InsightsError> {
        self.top_movers(Direction::Losers, self.config.top_n)
    }

    /// Search tickers; a non-empty result focuses its first match.
    pub fn search(&mut self, query: &str) -> Vec<&SeriesResult> {
        let results = search::search(self.universe.as_slice(), query);
        if let Some(first) = results.first() {
            debug!(
                query,
                matches = results.len(),
                ticker = %first.ticker(),
                "search focused first match"
            );
            self.selection.focus(first.ticker().clone());
        }
        results
    }

    pub fn select(&mut self, ticker: &str) -> Result<&SeriesResult, InsightsError> {
        self.selection.select(&self.universe, ticker)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selected(&self) -> Option<&SeriesResult> {
        self.selection.current(&self.universe)
    }
}
