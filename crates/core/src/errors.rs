//! Core error types for the Liftoff quest engine.
//!
//! This module defines storage-agnostic error types. Whatever layer backs the
//! repositories converts its own failures into these variants.

use thiserror::Error;

use crate::quests::QuestError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the quest engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Quest evaluation failed: {0}")]
    Quest(#[from] QuestError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

/// Errors raised while validating caller-supplied values.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("{field} must be a finite, non-negative number, got {value}")]
    InvalidNumber { field: &'static str, value: f64 },

    #[error("{fields} must sum to {expected}, got {actual}")]
    InvalidSum {
        fields: &'static str,
        expected: f64,
        actual: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quest_error_converts() {
        let err: Error = QuestError::MissingProgressSnapshot("q1".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Quest evaluation failed: No progress snapshot supplied for quest 'q1'"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::InvalidNumber {
            field: "boostWeight",
            value: -0.5,
        };
        assert_eq!(
            err.to_string(),
            "boostWeight must be a finite, non-negative number, got -0.5"
        );

        let err: Error = ValidationError::InvalidSum {
            fields: "progress weights",
            expected: 1.0,
            actual: 1.2,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Input validation failed: progress weights must sum to 1, got 1.2"
        );
    }
}
