// ============================================================================
// Thousands Separators
// Validates comma placement and strips valid separators
// ============================================================================

use crate::domain::GroupingPolicy;
use crate::numeric::{ConversionError, ConversionResult};
use std::borrow::Cow;

/// Distance between a comma and the decimal point (or the next comma):
/// three digits plus the comma itself.
const COMMA_DISTANCE: usize = 4;

/// Remove thousands separators from `input`, rejecting misplaced ones.
///
/// With [`GroupingPolicy::Strict`] a comma is valid only if
/// - it is not the first character and directly follows a digit
/// - it lies before the decimal point (or the end, when there is none)
/// - its distance to the decimal point is a multiple of [`COMMA_DISTANCE`]
///
/// Removing a comma shifts the comma and the decimal point by the same amount,
/// so every distance can be measured on the unmodified input.
pub fn strip_separators(input: &str, policy: GroupingPolicy) -> ConversionResult<Cow<'_, str>> {
    if !input.contains(',') {
        return Ok(Cow::Borrowed(input));
    }

    if policy == GroupingPolicy::Forbidden {
        return Err(ConversionError::malformed(
            input,
            "thousands separators are not accepted",
        ));
    }

    let bytes = input.as_bytes();
    let dot = input.find('.').unwrap_or(bytes.len());

    for (pos, _) in input.match_indices(',') {
        if pos == 0 {
            return Err(ConversionError::malformed(input, "leading comma"));
        }
        if pos > dot {
            return Err(ConversionError::malformed(
                input,
                "comma after the decimal point",
            ));
        }
        if !bytes[pos - 1].is_ascii_digit() || (dot - pos) % COMMA_DISTANCE != 0 {
            return Err(ConversionError::malformed(
                input,
                format!("comma at position {pos} does not separate a group of three digits"),
            ));
        }
    }

    tracing::trace!("stripping thousands separators from {:?}", input);
    Ok(Cow::Owned(input.replace(',', "")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict(input: &str) -> ConversionResult<Cow<'_, str>> {
        strip_separators(input, GroupingPolicy::Strict)
    }

    #[test]
    fn test_no_commas_borrows() {
        let out = strict("7456123.46").unwrap();
        assert!(matches!(out, Cow::Borrowed("7456123.46")));
    }

    #[test]
    fn test_valid_grouping() {
        assert_eq!(strict("7,456,123").unwrap(), "7456123");
        assert_eq!(strict("7,456,123.46").unwrap(), "7456123.46");
        assert_eq!(strict("-1,000").unwrap(), "-1000");
        assert_eq!(strict("001,001,001.01").unwrap(), "001001001.01");
    }

    #[test]
    fn test_leading_group_may_exceed_three_digits() {
        // Only the distance to the decimal point is checked
        assert_eq!(strict("1234,567").unwrap(), "1234567");
    }

    #[test]
    fn test_invalid_grouping() {
        for input in [
            ",456,123",
            "74,56,123",
            "7,456,123.2,",
            "1.234,5",
            "1,,234",
            "-,456",
            "12,34",
        ] {
            let err = strict(input).unwrap_err();
            assert!(err.is_malformed(), "{input} should be malformed");
        }
    }

    #[test]
    fn test_forbidden_policy() {
        let err = strip_separators("7,456,123", GroupingPolicy::Forbidden).unwrap_err();
        assert!(err.is_malformed());
        assert_eq!(
            strip_separators("7456123", GroupingPolicy::Forbidden).unwrap(),
            "7456123"
        );
    }
}
