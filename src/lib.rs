// ============================================================================
// Check Writer Library
// Exact-decimal conversion of monetary amounts into check words
// ============================================================================

//! # Check Writer
//!
//! Converts a monetary amount into the English words written on a check.
//!
//! ## Features
//!
//! - **String and float input** with optional sign, fraction and `,` grouping
//! - **Exact decimal rounding** to cents (half away from zero), no binary drift
//! - **Bounded range** with distinct malformed / out-of-range errors
//! - **Short-scale naming** up to the quintillions
//!
//! ## Example
//!
//! ```rust
//! use check_writer::convert;
//!
//! assert_eq!(
//!     convert("7,456,123.46").unwrap(),
//!     "seven million four hundred fifty six thousand one hundred twenty three dollars \
//!      and forty six cents"
//! );
//! assert_eq!(convert(0.995).unwrap(), "one dollar");
//! assert_eq!(convert("  ").unwrap(), "");
//! assert!(convert("74,56,123").unwrap_err().is_malformed());
//! assert!(convert("1000000000000000001").unwrap_err().is_out_of_range());
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod parser;
pub mod render;
pub mod utils;

use engine::CheckWriter;
use interfaces::AmountInput;
use numeric::ConversionResult;

/// Convert an amount with the standard configuration.
///
/// Accepts `&str`, `String`, `f64`, `f32` and `Option`s of those; absent or
/// blank input yields an empty string.
pub fn convert<I: AmountInput>(input: I) -> ConversionResult<String> {
    CheckWriter::default().convert(input)
}

// Re-exports for convenience
pub mod prelude {
    pub use crate::convert;
    pub use crate::domain::{ConverterConfig, GroupingPolicy};
    pub use crate::engine::{CheckWriter, CheckWriterBuilder};
    pub use crate::interfaces::AmountInput;
    pub use crate::numeric::{
        CheckAmount, ConfigError, ConversionError, ConversionResult, Sign,
    };
    pub use crate::render::render;
}
