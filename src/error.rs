//! Error types for coneform.

use thiserror::Error;

/// Error type for coneform operations.
#[derive(Debug, Error)]
pub enum ConeError {
    /// Incompatible shapes for stacking, reshaping, or multiplication.
    #[error("Shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: String, got: String },

    /// Invalid spacing-matrix contract: the offset must lie in `0..spacing`.
    #[error("Invalid spacing: offset {offset} with spacing {spacing}")]
    InvalidSpacing { spacing: usize, offset: usize },

    /// Malformed constraint group (e.g. an empty cone group).
    #[error("Invalid constraint: {0}")]
    InvalidConstraint(String),

    /// A variable had no value bound during evaluation.
    #[error("Unbound variable: {0}")]
    UnboundVariable(u64),
}

/// Result type for coneform operations.
pub type Result<T> = std::result::Result<T, ConeError>;
