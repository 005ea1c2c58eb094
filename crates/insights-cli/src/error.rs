use insights_core::{ErrorKind, InsightsError};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Insights(#[from] InsightsError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Insights(error) => match error.kind() {
                ErrorKind::InvalidParameter => 2,
                ErrorKind::NotFound => 3,
            },
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_has_its_own_exit_code() {
        assert_eq!(CliError::from(InsightsError::not_found("NOPE")).exit_code(), 3);
        assert_eq!(
            CliError::from(InsightsError::invalid("days", "must be >= 0")).exit_code(),
            2
        );
    }
}
