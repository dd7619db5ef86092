// ============================================================================
// Converter Configuration
// Accepted range, float safety limit and comma-grouping policy
// ============================================================================

use crate::numeric::{ConfigError, MAX_NAMEABLE_DOLLARS};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest integer magnitude an `f64` represents exactly (2^53).
pub const F64_EXACT_INTEGER_LIMIT: u64 = 1 << 53;

/// Default float safety limit, the order of 2^53.
pub const DEFAULT_FLOAT_LIMIT: u64 = 9_000_000_000_000_000;

/// Default upper bound: one quintillion dollars.
pub const DEFAULT_MAX_DOLLARS: i64 = 1_000_000_000_000_000_000;

// ============================================================================
// Grouping Policy
// ============================================================================

/// How thousands separators (`,`) in string input are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GroupingPolicy {
    /// Commas are accepted only between groups of three integer digits
    /// - "7,456,123.46" is accepted
    /// - "74,56,123", ",456" and "1.2,3" are malformed
    #[default]
    Strict,

    /// Any comma makes the input malformed
    Forbidden,
}

// ============================================================================
// Converter Configuration
// ============================================================================

/// Configuration for a [`CheckWriter`](crate::engine::CheckWriter)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConverterConfig {
    /// Smallest accepted amount (inclusive, after rounding to cents)
    pub min: Decimal,

    /// Largest accepted amount (inclusive, after rounding to cents)
    pub max: Decimal,

    /// Magnitude above which `f64` input is refused before parsing
    pub float_limit: u64,

    /// Treatment of thousands separators
    pub grouping: GroupingPolicy,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl ConverterConfig {
    /// Create a configuration with explicit bounds and default float/grouping settings
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self {
            min,
            max,
            float_limit: DEFAULT_FLOAT_LIMIT,
            grouping: GroupingPolicy::Strict,
        }
    }

    /// Builder method: Set accepted bounds
    pub fn with_bounds(mut self, min: Decimal, max: Decimal) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Builder method: Set float safety limit
    pub fn with_float_limit(mut self, limit: u64) -> Self {
        self.float_limit = limit;
        self
    }

    /// Builder method: Set grouping policy
    pub fn with_grouping(mut self, grouping: GroupingPolicy) -> Self {
        self.grouping = grouping;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvertedBounds {
                min: self.min,
                max: self.max,
            });
        }

        // Every accepted amount must have a dollar part the scale table can name
        let limit = Decimal::from_i128_with_scale(MAX_NAMEABLE_DOLLARS as i128 + 1, 0);
        for bound in [self.min, self.max] {
            if bound.abs() >= limit {
                return Err(ConfigError::UnnameableBound(bound));
            }
        }

        if self.float_limit > F64_EXACT_INTEGER_LIMIT {
            return Err(ConfigError::FloatLimitTooLarge(self.float_limit));
        }

        Ok(())
    }

    /// Float limit as an exact decimal, for diagnostics
    pub(crate) fn float_bounds(&self) -> (Decimal, Decimal) {
        let limit = Decimal::from(self.float_limit);
        (-limit, limit)
    }

    /// Load and validate a configuration from a JSON document
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Document(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ConverterConfig {
    /// Check-writing defaults
    /// - Range: [-1 quintillion, 1 quintillion]
    /// - Float limit: 9e15
    /// - Strict comma grouping
    pub fn standard() -> Self {
        let max = Decimal::from(DEFAULT_MAX_DOLLARS);
        Self::new(-max, max)
    }

    /// Same range as `standard`, but commas are never accepted
    pub fn comma_free() -> Self {
        Self::standard().with_grouping(GroupingPolicy::Forbidden)
    }
}
