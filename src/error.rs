//! Error types for fuzzy-lp.
//!
//! The arithmetic and synthesis paths are total and never produce these;
//! they come from the opt-in validation and scenario loading helpers.

use thiserror::Error;

/// Error type for fuzzy-lp operations.
#[derive(Debug, Error)]
pub enum FuzzyLpError {
    /// Triangle points are not ordered `a <= m <= b`.
    #[error("Invalid fuzzy number: expected a <= m <= b, got ({a}, {m}, {b})")]
    InvalidFuzzyNumber { a: f64, m: f64, b: f64 },

    /// Alpha level outside `[0, 1]` or not finite.
    #[error("Invalid alpha level {0}: must lie in [0, 1]")]
    InvalidAlpha(f64),

    /// A numeric input is NaN or infinite.
    #[error("Non-finite value in {field}")]
    NonFinite { field: String },

    /// Active count outside the range the planning form allows.
    #[error("Invalid {what} count {got}: expected {min}..={max}")]
    InvalidCount {
        what: &'static str,
        got: usize,
        min: usize,
        max: usize,
    },

    /// Active count exceeds the number of supplied entries.
    #[error("{what} count {requested} exceeds the {available} available")]
    NotEnoughEntries {
        what: &'static str,
        requested: usize,
        available: usize,
    },

    /// Scenario file could not be parsed.
    #[error("Scenario parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Scenario file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for fuzzy-lp operations.
pub type Result<T> = std::result::Result<T, FuzzyLpError>;
