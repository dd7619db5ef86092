// ============================================================================
// Check Writer
// Parse -> round -> range check -> render, under one configuration
// ============================================================================

use crate::domain::{ConverterConfig, GroupingPolicy};
use crate::interfaces::AmountInput;
use crate::numeric::{CheckAmount, ConfigError, ConversionResult};
use crate::render::render;
use rust_decimal::Decimal;

/// Converts amounts into check words.
///
/// A `CheckWriter` owns an immutable, validated configuration and holds no
/// other state, so one instance can be shared across threads.
///
/// # Example
/// ```
/// use check_writer::engine::CheckWriter;
///
/// let writer = CheckWriter::default();
/// assert_eq!(writer.convert("-45").unwrap(), "minus forty five dollars");
/// assert_eq!(writer.convert(None::<&str>).unwrap(), "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CheckWriter {
    config: ConverterConfig,
}

impl CheckWriter {
    /// Create a writer from a configuration, validating it first.
    pub fn new(config: ConverterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        tracing::debug!(
            "check writer configured: range [{}, {}], float limit {}, grouping {:?}",
            config.min,
            config.max,
            config.float_limit,
            config.grouping
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Validate and round an input without rendering it.
    ///
    /// `Ok(None)` is returned for absent, empty or whitespace-only input.
    pub fn parse<I: AmountInput>(&self, input: I) -> ConversionResult<Option<CheckAmount>> {
        input.parse_amount(&self.config)
    }

    /// Convert an input to check words.
    ///
    /// Absent, empty or whitespace-only input yields an empty string.
    ///
    /// # Errors
    /// - `MalformedInput` if the input is not a valid grouped decimal number
    /// - `OutOfRange` if the rounded amount (or a float's raw magnitude) is
    ///   outside the configured bounds
    pub fn convert<I: AmountInput>(&self, input: I) -> ConversionResult<String> {
        Ok(self
            .parse(input)?
            .map(|amount| render(&amount))
            .unwrap_or_default())
    }
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating check writers with fluent API
///
/// # Example
/// ```
/// use check_writer::engine::CheckWriterBuilder;
/// use rust_decimal::Decimal;
///
/// let writer = CheckWriterBuilder::new()
///     .with_bounds(Decimal::ZERO, Decimal::from(10_000))
///     .comma_free()
///     .build()
///     .unwrap();
///
/// assert!(writer.convert("10,000").unwrap_err().is_malformed());
/// assert!(writer.convert("10000.01").unwrap_err().is_out_of_range());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CheckWriterBuilder {
    config: ConverterConfig,
}

impl CheckWriterBuilder {
    /// Start from the standard configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: ConverterConfig) -> Self {
        Self { config }
    }

    pub fn with_bounds(mut self, min: Decimal, max: Decimal) -> Self {
        self.config = self.config.with_bounds(min, max);
        self
    }

    pub fn with_float_limit(mut self, limit: u64) -> Self {
        self.config = self.config.with_float_limit(limit);
        self
    }

    /// Accept commas between groups of three digits (default)
    pub fn strict_grouping(mut self) -> Self {
        self.config = self.config.with_grouping(GroupingPolicy::Strict);
        self
    }

    /// Reject any comma
    pub fn comma_free(mut self) -> Self {
        self.config = self.config.with_grouping(GroupingPolicy::Forbidden);
        self
    }

    /// Build the writer
    pub fn build(self) -> Result<CheckWriter, ConfigError> {
        CheckWriter::new(self.config)
    }
}
