// ============================================================================
// Domain Module
// Converter configuration and its presets
// ============================================================================

pub mod config;

pub use config::{
    ConverterConfig, GroupingPolicy, DEFAULT_FLOAT_LIMIT, DEFAULT_MAX_DOLLARS,
    F64_EXACT_INTEGER_LIMIT,
};
