// ============================================================================
// Amount Input Interface
// Every accepted input shape (string, float, absent) funnels through here
// ============================================================================

use crate::domain::ConverterConfig;
use crate::numeric::{CheckAmount, ConversionResult};
use crate::parser::{parse_f64, parse_str};

/// A raw amount that can be validated into a [`CheckAmount`].
///
/// `Ok(None)` means "no amount entered" and renders as an empty string.
pub trait AmountInput {
    fn parse_amount(&self, config: &ConverterConfig) -> ConversionResult<Option<CheckAmount>>;
}

impl AmountInput for str {
    fn parse_amount(&self, config: &ConverterConfig) -> ConversionResult<Option<CheckAmount>> {
        parse_str(self, config)
    }
}

impl AmountInput for String {
    fn parse_amount(&self, config: &ConverterConfig) -> ConversionResult<Option<CheckAmount>> {
        parse_str(self, config)
    }
}

impl AmountInput for f64 {
    fn parse_amount(&self, config: &ConverterConfig) -> ConversionResult<Option<CheckAmount>> {
        parse_f64(*self, config)
    }
}

impl AmountInput for f32 {
    fn parse_amount(&self, config: &ConverterConfig) -> ConversionResult<Option<CheckAmount>> {
        parse_f64(f64::from(*self), config)
    }
}

impl<T: AmountInput + ?Sized> AmountInput for &T {
    fn parse_amount(&self, config: &ConverterConfig) -> ConversionResult<Option<CheckAmount>> {
        (**self).parse_amount(config)
    }
}

/// `None` is the absent ("null") amount
impl<T: AmountInput> AmountInput for Option<T> {
    fn parse_amount(&self, config: &ConverterConfig) -> ConversionResult<Option<CheckAmount>> {
        match self {
            Some(input) => input.parse_amount(config),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse<I: AmountInput>(input: I) -> ConversionResult<Option<CheckAmount>> {
        input.parse_amount(&ConverterConfig::default())
    }

    #[test]
    fn test_string_shapes_agree() {
        let owned = String::from("123.46");
        let expected = parse("123.46").unwrap();
        assert!(expected.is_some());
        assert_eq!(parse(&owned).unwrap(), expected);
        assert_eq!(parse(owned.clone()).unwrap(), expected);
        assert_eq!(parse(Some("123.46")).unwrap(), expected);
    }

    #[test]
    fn test_absent_input() {
        assert_eq!(parse(None::<&str>), Ok(None));
        assert_eq!(parse(None::<f64>), Ok(None));
    }

    #[test]
    fn test_float_shapes() {
        let amount = parse(-102234.0f64).unwrap().unwrap();
        assert_eq!(amount.dollars(), 102_234);
        assert!(amount.is_negative());

        let amount = parse(999.99f32).unwrap().unwrap();
        assert_eq!((amount.dollars(), amount.cents()), (999, 99));
    }
}
