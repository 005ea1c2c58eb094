//! Runtime configuration for the insights board.

use std::str::FromStr;

use crate::generator::DRIFT_BIAS;
use crate::random::Seeding;
use crate::InsightsError;

pub const ENV_DAYS: &str = "INSIGHTS_DAYS";
pub const ENV_TOP_N: &str = "INSIGHTS_TOP_N";
pub const ENV_SEED: &str = "INSIGHTS_SEED";

/// Knobs for generating and ranking a universe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsightsConfig {
    /// Days of history before today; each series holds `days + 1` points.
    pub days: i64,
    /// Length of the gainers/losers lists.
    pub top_n: i64,
    /// Base seed for reproducible universes; `None` draws from entropy.
    pub seed: Option<u64>,
    pub drift_bias: f64,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            days: 30,
            top_n: 5,
            seed: None,
            drift_bias: DRIFT_BIAS,
        }
    }
}

impl InsightsConfig {
    /// Defaults overlaid with `INSIGHTS_DAYS`, `INSIGHTS_TOP_N` and
    /// `INSIGHTS_SEED` when set.
    pub fn from_env() -> Result<Self, InsightsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`InsightsConfig::from_env`] with an injectable variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, InsightsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(days) = parse_var(&lookup, ENV_DAYS, "days")? {
            config.days = days;
        }
        if let Some(top_n) = parse_var(&lookup, ENV_TOP_N, "top_n")? {
            config.top_n = top_n;
        }
        if let Some(seed) = parse_var(&lookup, ENV_SEED, "seed")? {
            config.seed = Some(seed);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn with_days(mut self, days: i64) -> Self {
        self.days = days;
        self
    }

    pub fn with_top_n(mut self, top_n: i64) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_drift_bias(mut self, drift_bias: f64) -> Self {
        self.drift_bias = drift_bias;
        self
    }

    pub fn seeding(&self) -> Seeding {
        self.seed.map_or(Seeding::Entropy, Seeding::Fixed)
    }

    pub fn validate(&self) -> Result<(), InsightsError> {
        if self.days < 0 {
            return Err(InsightsError::invalid(
                "days",
                format!("must be >= 0, got {}", self.days),
            ));
        }
        if self.top_n < 0 {
            return Err(InsightsError::invalid(
                "n",
                format!("must be >= 0, got {}", self.top_n),
            ));
        }
        if !self.drift_bias.is_finite() {
            return Err(InsightsError::invalid("drift_bias", "must be finite"));
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, field: &'static str) -> Result<Option<T>, InsightsError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<T>()
        .map(Some)
        .map_err(|_| InsightsError::invalid(field, format!("{key}='{raw}' is not a valid number")))
}
