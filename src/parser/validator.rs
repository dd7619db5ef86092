// ============================================================================
// Amount Validator
// Turns raw string / float input into a rounded CheckAmount
// ============================================================================

use super::grouping::strip_separators;
use crate::domain::ConverterConfig;
use crate::numeric::{CheckAmount, ConversionError, ConversionResult, Sign};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Number of fractional digits kept for cents
pub const PRECISION: u32 = 2;

/// Fractional digits that can influence half-away-from-zero rounding at
/// [`PRECISION`] places. Everything past the third digit is irrelevant.
const SIGNIFICANT_FRACTION_DIGITS: usize = PRECISION as usize + 1;

/// Integer digits of the largest nameable dollar amount
const MAX_INTEGER_DIGITS: usize = 21;

/// Lexical pieces of a comma-free decimal string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DecimalText<'a> {
    negative: bool,
    integer: &'a str,
    fraction: &'a str,
}

impl<'a> DecimalText<'a> {
    /// Split `-?[0-9]+(\.[0-9]+)?` into sign, integer and fraction digits.
    fn scan(text: &'a str) -> Option<Self> {
        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let (integer, fraction) = match body.split_once('.') {
            Some((integer, fraction)) if !fraction.is_empty() => (integer, fraction),
            Some(_) => return None,
            None => (body, ""),
        };

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if integer.is_empty() || !all_digits(integer) || !all_digits(fraction) {
            return None;
        }

        Some(Self {
            negative,
            integer: integer.trim_start_matches('0'),
            fraction,
        })
    }

    /// Exact decimal value, truncated past the digits that matter for rounding.
    fn to_decimal(self) -> Result<Decimal, rust_decimal::Error> {
        let sign = if self.negative { "-" } else { "" };
        let integer = if self.integer.is_empty() { "0" } else { self.integer };
        let fraction = &self.fraction[..self.fraction.len().min(SIGNIFICANT_FRACTION_DIGITS)];

        if fraction.is_empty() {
            Decimal::from_str(&format!("{sign}{integer}"))
        } else {
            Decimal::from_str(&format!("{sign}{integer}.{fraction}"))
        }
    }
}

/// Parse a human-written amount.
///
/// Returns `Ok(None)` for empty or whitespace-only input.
///
/// # Errors
/// - `MalformedInput` for a leading `.`, misplaced commas, stray characters,
///   multiple decimal points or an empty numeric body
/// - `OutOfRange` if the amount, rounded to cents, lies outside
///   `[config.min, config.max]`
///
/// # Example
/// ```
/// use check_writer::domain::ConverterConfig;
/// use check_writer::parser::parse_str;
///
/// let amount = parse_str(" 7,456,123.456 ", &ConverterConfig::default())
///     .unwrap()
///     .unwrap();
/// assert_eq!(amount.dollars(), 7_456_123);
/// assert_eq!(amount.cents(), 46);
/// ```
pub fn parse_str(raw: &str, config: &ConverterConfig) -> ConversionResult<Option<CheckAmount>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    if trimmed.starts_with('.') {
        tracing::debug!("rejecting {:?}: leading decimal point", trimmed);
        return Err(ConversionError::malformed(trimmed, "leading decimal point"));
    }

    let cleaned = strip_separators(trimmed, config.grouping).inspect_err(|e| {
        tracing::debug!("rejecting {:?}: {}", trimmed, e);
    })?;

    let text = DecimalText::scan(&cleaned).ok_or_else(|| {
        tracing::debug!("rejecting {:?}: not a decimal number", trimmed);
        ConversionError::malformed(trimmed, "not a decimal number")
    })?;

    let out_of_range = || {
        tracing::debug!(
            "amount {} is outside [{}, {}]",
            cleaned,
            config.min,
            config.max
        );
        ConversionError::OutOfRange {
            value: cleaned.to_string(),
            min: config.min,
            max: config.max,
        }
    };

    // Too long for any nameable bound
    if text.integer.len() > MAX_INTEGER_DIGITS {
        return Err(out_of_range());
    }

    let value = text
        .to_decimal()
        .map_err(|e| ConversionError::malformed(trimmed, e.to_string()))?;
    let rounded = value.round_dp_with_strategy(PRECISION, RoundingStrategy::MidpointAwayFromZero);

    if rounded < config.min || rounded > config.max {
        return Err(out_of_range());
    }

    let sign = if rounded < Decimal::ZERO {
        Sign::Negative
    } else {
        Sign::Positive
    };

    let mut magnitude = rounded.abs();
    magnitude.rescale(PRECISION);
    let total_cents = magnitude.mantissa().unsigned_abs();

    let amount = CheckAmount::new(sign, total_cents / 100, (total_cents % 100) as u8)
        .ok_or_else(out_of_range)?;

    tracing::trace!(
        "parsed {:?}: sign={:?} dollars={} cents={}",
        trimmed,
        amount.sign(),
        amount.dollars(),
        amount.cents()
    );

    Ok(Some(amount))
}

/// Parse a floating-point amount.
///
/// The float must not exceed `config.float_limit` in magnitude; otherwise its
/// shortest round-trip decimal text is parsed like string input.
///
/// # Errors
/// - `MalformedInput` for NaN
/// - `OutOfRange` above the float limit (including infinities) or outside
///   `[config.min, config.max]`
pub fn parse_f64(raw: f64, config: &ConverterConfig) -> ConversionResult<Option<CheckAmount>> {
    if raw.is_nan() {
        tracing::debug!("rejecting NaN amount");
        return Err(ConversionError::malformed("NaN", "not a number"));
    }

    if raw.abs() > config.float_limit as f64 {
        let (min, max) = config.float_bounds();
        tracing::debug!("float {} exceeds the exact limit {}", raw, config.float_limit);
        return Err(ConversionError::OutOfRange {
            value: raw.to_string(),
            min,
            max,
        });
    }

    // `Display` for f64 never switches to exponent notation
    parse_str(&raw.to_string(), config)
}
