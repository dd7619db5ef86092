// ============================================================================
// Utilities Module
// Optional helpers outside the conversion path
// ============================================================================

#[cfg(feature = "logging")]
pub mod logging;
