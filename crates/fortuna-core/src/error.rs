//! Error type shared by every fortuna-core operation.
//!
//! Sampling errors are input-validation failures: they are raised before any
//! random draw happens and are never retried.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FortunaError>;

/// Errors produced by sampling, the draw pipeline and evaluation.
#[derive(Debug, Error)]
pub enum FortunaError {
    /// Malformed range (`max < min`) or a zero count.
    #[error("invalid bounds: cannot draw {count} numbers from [{min}, {max}]")]
    InvalidBounds { count: usize, min: i64, max: i64 },

    /// More unique numbers requested than the range holds.
    #[error("cannot draw {count} unique numbers from [{min}, {max}] ({span} available)")]
    InvalidRange {
        count: usize,
        min: i64,
        max: i64,
        span: u64,
    },

    /// Lottery identifier not present in the configuration table.
    #[error("unknown lottery type: {0}")]
    UnknownLottery(String),

    /// Not enough historical draws for the requested operation.
    #[error("insufficient history: need at least {needed} draws, got {got}")]
    InsufficientHistory { needed: usize, got: usize },

    /// An evaluation was asked to run zero trials.
    #[error("evaluation needs at least one trial")]
    NoTrials,

    /// Attempted to write a draw file with no draws in it.
    #[error("no draws to save")]
    EmptyDataset,

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FortunaError {
    /// True for the two sampler validation errors.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidBounds { .. } | Self::InvalidRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_message_names_span() {
        let err = FortunaError::InvalidRange {
            count: 8,
            min: 1,
            max: 6,
            span: 6,
        };
        let msg = err.to_string();
        assert!(msg.contains("8 unique"));
        assert!(msg.contains("6 available"));
    }

    #[test]
    fn test_is_validation() {
        assert!(
            FortunaError::InvalidBounds {
                count: 0,
                min: 1,
                max: 2
            }
            .is_validation()
        );
        assert!(!FortunaError::NoTrials.is_validation());
        assert!(!FortunaError::UnknownLottery("bingo".into()).is_validation());
    }

    #[test]
    fn test_io_error_converts() {
        fn fails() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))?;
            Ok(())
        }
        assert!(matches!(fails(), Err(FortunaError::Io(_))));
    }
}
