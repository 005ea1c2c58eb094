use serde::{Deserialize, Serialize};

use crate::analytics::{self, SeriesAnalytics};
use crate::{Category, InsightsError, InstrumentSpec, SeriesDate, Ticker};

/// One generated trading day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: SeriesDate,
    /// Positive, rounded to cents.
    pub price: f64,
    pub volume: u64,
}

impl PricePoint {
    /// Chart axis label, e.g. `Oct 18`.
    pub fn label(&self) -> String {
        self.date.label()
    }
}

/// Generated series for one instrument together with its derived metrics.
///
/// The metrics are computed once from the series endpoints when the value is
/// built and cannot be changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesResult {
    ticker: Ticker,
    category: Category,
    initial_price: f64,
    current_price: f64,
    change: f64,
    percent_change: f64,
    points: Vec<PricePoint>,
}

impl SeriesResult {
    /// Wrap `points` (oldest first) and derive the summary metrics.
    pub fn from_points(
        spec: &InstrumentSpec,
        points: Vec<PricePoint>,
    ) -> Result<Self, InsightsError> {
        let SeriesAnalytics {
            current_price,
            change,
            percent_change,
        } = analytics::analyze(&points, spec.initial_price)?;

        Ok(Self {
            ticker: spec.ticker.clone(),
            category: spec.category,
            initial_price: spec.initial_price,
            current_price,
            change,
            percent_change,
            points,
        })
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn initial_price(&self) -> f64 {
        self.initial_price
    }

    pub fn current_price(&self) -> f64 {
        self.current_price
    }

    pub fn change(&self) -> f64 {
        self.change
    }

    pub fn percent_change(&self) -> f64 {
        self.percent_change
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn analytics(&self) -> SeriesAnalytics {
        SeriesAnalytics {
            current_price: self.current_price,
            change: self.change,
            percent_change: self.percent_change,
        }
    }

    pub fn is_gaining(&self) -> bool {
        self.percent_change >= 0.0
    }
}
