// ============================================================================
// Conversion Errors
// Error types for parsing, range checking and configuration
// ============================================================================

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while converting an amount to words.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Input is not a valid (optionally comma-grouped) decimal number
    #[error("malformed amount {input:?}: {reason}")]
    MalformedInput { input: String, reason: String },

    /// Input parsed cleanly but lies outside the accepted bounds
    #[error("amount {value} is out of range [{min}, {max}]")]
    OutOfRange {
        value: String,
        min: Decimal,
        max: Decimal,
    },
}

impl ConversionError {
    pub(crate) fn malformed(input: &str, reason: impl Into<String>) -> Self {
        ConversionError::MalformedInput {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns true for `MalformedInput`.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ConversionError::MalformedInput { .. })
    }

    /// Returns true for `OutOfRange`.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, ConversionError::OutOfRange { .. })
    }
}

/// Errors raised when a converter configuration is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("minimum {min} is greater than maximum {max}")]
    InvertedBounds { min: Decimal, max: Decimal },

    #[error("bound {0} cannot be named with the available scale words")]
    UnnameableBound(Decimal),

    #[error("float limit {0} exceeds the exactly representable range of f64")]
    FloatLimitTooLarge(u64),

    #[error("invalid configuration document: {0}")]
    Document(String),
}

/// Result type alias for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
