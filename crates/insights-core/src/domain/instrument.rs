use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{InsightsError, Ticker};

/// Display grouping for an instrument. Has no effect on generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Index,
    Equity,
    Crypto,
}

impl Category {
    pub const ALL: [Category; 3] = [Self::Index, Self::Equity, Self::Crypto];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Equity => "equity",
            Self::Crypto => "crypto",
        }
    }

    /// Section heading used by the dashboard.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Index => "Market Indices",
            Self::Equity => "Popular Stocks",
            Self::Crypto => "Crypto",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Definition of one synthetic instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentSpec {
    pub ticker: Ticker,
    pub category: Category,
    pub initial_price: f64,
    /// Per-step perturbation magnitude, strictly inside `(0, 1)`.
    pub volatility: f64,
}

impl InstrumentSpec {
    pub fn new(
        ticker: Ticker,
        category: Category,
        initial_price: f64,
        volatility: f64,
    ) -> Result<Self, InsightsError> {
        let spec = Self {
            ticker,
            category,
            initial_price,
            volatility,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Re-check the numeric invariants; fields are public so a spec can be
    /// built or mutated without going through [`InstrumentSpec::new`].
    pub fn validate(&self) -> Result<(), InsightsError> {
        validate_positive("initial_price", self.initial_price)?;
        validate_open_unit("volatility", self.volatility)?;
        Ok(())
    }
}

fn validate_positive(field: &'static str, value: f64) -> Result<(), InsightsError> {
    if !value.is_finite() {
        return Err(InsightsError::invalid(field, "must be finite"));
    }
    if value <= 0.0 {
        return Err(InsightsError::invalid(
            field,
            format!("must be greater than zero, got {value}"),
        ));
    }
    Ok(())
}

fn validate_open_unit(field: &'static str, value: f64) -> Result<(), InsightsError> {
    if !value.is_finite() || value <= 0.0 || value >= 1.0 {
        return Err(InsightsError::invalid(
            field,
            format!("must be within (0, 1), got {value}"),
        ));
    }
    Ok(())
}
