// ============================================================================
// Numeric Module
// Exact monetary amounts and the errors raised while producing them
// ============================================================================
//
// This module provides:
// - CheckAmount: sign / dollars / cents triple, rounded to two places
// - ConversionError: malformed input vs. out-of-range amounts
// - ConfigError: rejected converter configurations
//
// Design principles:
// - No floating-point arithmetic on amounts
// - All fallible construction returns Option/Result (no panics)

mod amount;
mod errors;

pub use amount::{CheckAmount, Sign, CENTS_PER_DOLLAR, MAX_NAMEABLE_DOLLARS};
pub use errors::{ConfigError, ConversionError, ConversionResult};
