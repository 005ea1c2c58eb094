use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Errors exposed by `insights-core`.
///
/// Every variant is a local, recoverable condition reported back to the
/// caller; nothing here is fatal to the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InsightsError {
    #[error("invalid parameter '{field}': {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    #[error("no instrument with ticker '{ticker}' in the universe")]
    NotFound { ticker: String },
}

/// Coarse error category, stable across payload changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidParameter,
    NotFound,
}

impl ErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidParameter => "invalid_parameter",
            Self::NotFound => "not_found",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl InsightsError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }

    pub fn not_found(ticker: impl Into<String>) -> Self {
        Self::NotFound {
            ticker: ticker.into(),
        }
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidParameter { .. } => ErrorKind::InvalidParameter,
            Self::NotFound { .. } => ErrorKind::NotFound,
        }
    }
}

pub type Result<T> = std::result::Result<T, InsightsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(
            InsightsError::invalid("days", "must be >= 0").kind(),
            ErrorKind::InvalidParameter
        );
        assert_eq!(InsightsError::not_found("NOPE").kind(), ErrorKind::NotFound);
    }

    #[test]
    fn messages_name_the_offending_input() {
        let err = InsightsError::invalid("volatility", "must be within (0, 1)");
        assert_eq!(
            err.to_string(),
            "invalid parameter 'volatility': must be within (0, 1)"
        );

        let err = InsightsError::not_found("NOPE");
        assert!(err.to_string().contains("'NOPE'"));
    }
}
