// ============================================================================
// Check Amount
// Exact sign / dollars / cents triple handed from the parser to the renderer
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest dollar magnitude that the short-scale table can name
/// (seven groups of three digits, up to the quintillions).
pub const MAX_NAMEABLE_DOLLARS: u128 = 999_999_999_999_999_999_999;

/// Number of cents in one dollar (fractional precision of 2)
pub const CENTS_PER_DOLLAR: u8 = 100;

/// Sign of a check amount. Zero is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

/// A validated, rounded monetary amount.
///
/// # Invariants
/// - `cents` is in `0..=99`
/// - `dollars` is at most [`MAX_NAMEABLE_DOLLARS`]
/// - a zero amount carries `Sign::Positive`
///
/// # Example
/// ```
/// use check_writer::numeric::{CheckAmount, Sign};
///
/// let amount = CheckAmount::new(Sign::Negative, 123, 46).unwrap();
/// assert_eq!(amount.dollar_digits(), "123");
/// assert_eq!(amount.to_string(), "-123.46");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CheckAmount {
    sign: Sign,
    dollars: u128,
    cents: u8,
}

impl CheckAmount {
    /// Zero dollars
    pub const ZERO: Self = Self {
        sign: Sign::Positive,
        dollars: 0,
        cents: 0,
    };

    /// Create a checked amount.
    ///
    /// Returns `None` if `cents > 99` or `dollars` exceeds [`MAX_NAMEABLE_DOLLARS`].
    /// A negative zero is normalized to positive.
    pub fn new(sign: Sign, dollars: u128, cents: u8) -> Option<Self> {
        if cents >= CENTS_PER_DOLLAR || dollars > MAX_NAMEABLE_DOLLARS {
            return None;
        }

        let sign = if dollars == 0 && cents == 0 {
            Sign::Positive
        } else {
            sign
        };

        Some(Self {
            sign,
            dollars,
            cents,
        })
    }

    #[inline]
    pub const fn sign(&self) -> Sign {
        self.sign
    }

    /// Integer (major unit) magnitude.
    #[inline]
    pub const fn dollars(&self) -> u128 {
        self.dollars
    }

    /// Fractional (minor unit) magnitude, `0..=99`.
    #[inline]
    pub const fn cents(&self) -> u8 {
        self.cents
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.dollars == 0 && self.cents == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        matches!(self.sign, Sign::Negative)
    }

    /// Canonical decimal digits of the dollar magnitude (no leading zeros).
    pub fn dollar_digits(&self) -> String {
        self.dollars.to_string()
    }
}

impl Default for CheckAmount {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for CheckAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        write!(f, "{}.{:02}", self.dollars, self.cents)
    }
}
