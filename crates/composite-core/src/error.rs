//! Error types for the compositing workspace
//!
//! Provides a unified error type for all composite-* crates.

use thiserror::Error;

/// Core error type for compositing operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} observations, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for an inverted date window
    pub fn inverted_window(lower: i32, upper: i32) -> Self {
        Self::InvalidParameter(format!(
            "Window lower bound {lower} exceeds upper bound {upper}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("threshold must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid parameter: threshold must be positive"
        );

        let err = Error::InsufficientData {
            expected: 5,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 5 observations, got 2"
        );
    }

    #[test]
    fn test_error_helpers() {
        match Error::empty_input() {
            Error::InsufficientData { expected, actual } => {
                assert_eq!(expected, 1);
                assert_eq!(actual, 0);
            }
            _ => panic!("Wrong error type"),
        }

        let err = Error::size_mismatch(4, 3, "output row");
        assert_eq!(
            err.to_string(),
            "Invalid input: Size mismatch in output row: expected 4, got 3"
        );

        let err = Error::inverted_window(200, 100);
        assert!(err.to_string().contains("200"));
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: Error = anyhow::anyhow!("decoder gave up").into();
        assert!(err.to_string().contains("decoder gave up"));
    }
}
