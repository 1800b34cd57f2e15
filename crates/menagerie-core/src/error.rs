//! Unified error types for Menagerie

use thiserror::Error;

/// Unified error type for all Menagerie operations
#[derive(Error, Debug)]
pub enum MenagerieError {
    // Record invariants
    #[error("Validation failed: {0}")]
    Validation(String),

    // Registry / component lookups
    #[error("Index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    // Account illustration
    #[error("Authorization failed: {0}")]
    Authorization(String),

    #[error("Insufficient funds: requested {requested:.2}, available {available:.2}")]
    InsufficientFunds { requested: f64, available: f64 },

    // Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Generic
    #[error("{0}")]
    Other(String),
}

impl MenagerieError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type alias using MenagerieError
pub type Result<T> = std::result::Result<T, MenagerieError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_error_message() {
        let err = MenagerieError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(err.to_string(), "Index 4 out of range (len 2)");
    }

    #[test]
    fn test_insufficient_funds_message() {
        let err = MenagerieError::InsufficientFunds {
            requested: 150.0,
            available: 100.5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: requested 150.00, available 100.50"
        );
    }
}
