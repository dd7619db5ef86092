// ============================================================================
// Parser Module
// Validation, comma handling and rounding of raw amounts
// ============================================================================

mod grouping;
mod validator;

pub use grouping::strip_separators;
pub use validator::{parse_f64, parse_str, PRECISION};
