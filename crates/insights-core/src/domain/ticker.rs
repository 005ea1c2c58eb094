use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::InsightsError;

const MAX_TICKER_LEN: usize = 16;

/// Normalized instrument ticker.
///
/// Index names such as `S&P 500` are tickers too, so spaces and `&` are
/// accepted alongside the usual `BRK.B` style punctuation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Parse and normalize a ticker to uppercase.
    pub fn parse(input: &str) -> Result<Self, InsightsError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(InsightsError::invalid("ticker", "ticker cannot be empty"));
        }

        let normalized = trimmed.to_ascii_uppercase();
        let len = normalized.chars().count();
        if len > MAX_TICKER_LEN {
            return Err(InsightsError::invalid(
                "ticker",
                format!("length {len} exceeds max {MAX_TICKER_LEN}"),
            ));
        }

        for (index, ch) in normalized.chars().enumerate() {
            let valid = ch.is_ascii_alphanumeric() || matches!(ch, ' ' | '.' | '-' | '&' | '/');
            if !valid {
                return Err(InsightsError::invalid(
                    "ticker",
                    format!("invalid character '{ch}' at index {index}"),
                ));
            }
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Ticker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Ticker {
    type Error = InsightsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Ticker {
    type Error = InsightsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Ticker> for String {
    fn from(value: Ticker) -> Self {
        value.0
    }
}
