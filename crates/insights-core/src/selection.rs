//! The single instrument currently focused for detail display.

use tracing::debug;

use crate::{InsightsError, SeriesResult, Ticker, Universe};

/// Holds at most one ticker, validated against a universe on assignment.
///
/// Only the ticker is stored, so a selection survives regenerating the
/// universe from the same catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    current: Option<Ticker>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Focus `ticker`, replacing any previous selection.
    ///
    /// Fails with `NotFound` (leaving the previous selection in place) when no
    /// instrument in `universe` carries that ticker.
    pub fn select<'u>(
        &mut self,
        universe: &'u Universe,
        ticker: &str,
    ) -> Result<&'u SeriesResult, InsightsError> {
        let series = Ticker::parse(ticker)
            .ok()
            .and_then(|parsed| universe.get(&parsed))
            .ok_or_else(|| InsightsError::not_found(ticker.trim()))?;

        debug!(ticker = %series.ticker(), "selected instrument");
        self.current = Some(series.ticker().clone());
        Ok(series)
    }

    /// Focus a ticker already known to be in the current universe.
    pub(crate) fn focus(&mut self, ticker: Ticker) {
        debug!(ticker = %ticker, "selected instrument");
        self.current = Some(ticker);
    }

    pub fn clear(&mut self) {
        if let Some(previous) = self.current.take() {
            debug!(ticker = %previous, "cleared selection");
        }
    }

    pub fn ticker(&self) -> Option<&Ticker> {
        self.current.as_ref()
    }

    /// Resolve the current selection in `universe`.
    pub fn current<'u>(&self, universe: &'u Universe) -> Option<&'u SeriesResult> {
        self.current.as_ref().and_then(|ticker| universe.get(ticker))
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}
