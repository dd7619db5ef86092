// ============================================================================
// Check Words Renderer
// Spells a CheckAmount out the way it is written on a check
// ============================================================================

use super::words::{AND, CENT, DOLLAR, HUNDRED, MINUS, ONES, PLURAL_SUFFIX, SCALES, TENS, ZERO};
use crate::numeric::CheckAmount;
use arrayvec::ArrayVec;

/// Spell out a three-digit group (0-999).
///
/// Zero renders as an empty string. Words are separated by single spaces.
///
/// # Example
/// ```
/// use check_writer::render::render_group;
///
/// assert_eq!(render_group(456), "four hundred fifty six");
/// assert_eq!(render_group(10), "ten");
/// assert_eq!(render_group(0), "");
/// ```
pub fn render_group(value: u16) -> String {
    debug_assert!(value < 1000, "group {value} has more than three digits");

    let mut words: ArrayVec<&str, 4> = ArrayVec::new();
    let hundreds = usize::from(value / 100 % 10);
    let rest = usize::from(value % 100);

    if hundreds > 0 {
        words.push(ONES[hundreds]);
        words.push(HUNDRED);
    }

    if rest >= 20 {
        words.push(TENS[rest / 10]);
        if rest % 10 != 0 {
            words.push(ONES[rest % 10]);
        }
    } else if rest > 0 {
        words.push(ONES[rest]);
    }

    words.join(" ")
}

/// Split a dollar magnitude into three-digit groups, lowest group first.
fn groups(mut dollars: u128) -> ArrayVec<u16, { SCALES.len() }> {
    let mut groups = ArrayVec::new();

    // CheckAmount keeps dollars within the scale table, so the loop bound
    // never drops a non-zero group.
    for _ in 0..SCALES.len() {
        if dollars == 0 {
            break;
        }
        groups.push((dollars % 1000) as u16);
        dollars /= 1000;
    }

    debug_assert_eq!(dollars, 0, "dollar amount exceeds the scale table");
    groups
}

/// Currency word, pluralized unless the magnitude is exactly one
fn unit(word: &str, magnitude: u128) -> String {
    if magnitude == 1 {
        word.to_string()
    } else {
        format!("{word}{PLURAL_SUFFIX}")
    }
}

fn render_dollars(dollars: u128) -> String {
    let groups = groups(dollars);
    let mut phrases: Vec<String> = Vec::with_capacity(groups.len() + 1);

    // Highest-order group first; zero groups contribute nothing
    for (index, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }

        let mut phrase = render_group(group);
        if !SCALES[index].is_empty() {
            phrase.push(' ');
            phrase.push_str(SCALES[index]);
        }
        tracing::trace!("group {} ({}) -> {:?}", index, group, phrase);
        phrases.push(phrase);
    }

    phrases.push(unit(DOLLAR, dollars));
    phrases.join(" ")
}

fn render_cents(cents: u8) -> String {
    format!(
        "{} {}",
        render_group(u16::from(cents)),
        unit(CENT, u128::from(cents))
    )
}

/// Spell out a check amount.
///
/// - Exact zero is `"zero dollar"` whatever its origin
/// - A zero dollar or cent part drops its whole clause
/// - `"and"` joins dollars and cents only when both are present
/// - Negative amounts start with `"minus"`
///
/// # Example
/// ```
/// use check_writer::numeric::{CheckAmount, Sign};
/// use check_writer::render::render;
///
/// let amount = CheckAmount::new(Sign::Positive, 123, 46).unwrap();
/// assert_eq!(
///     render(&amount),
///     "one hundred twenty three dollars and forty six cents"
/// );
/// ```
pub fn render(amount: &CheckAmount) -> String {
    if amount.is_zero() {
        return format!("{ZERO} {DOLLAR}");
    }

    let mut clauses: ArrayVec<String, 4> = ArrayVec::new();

    if amount.is_negative() {
        clauses.push(MINUS.to_string());
    }

    if amount.dollars() > 0 {
        clauses.push(render_dollars(amount.dollars()));
    }

    if amount.cents() > 0 {
        if amount.dollars() > 0 {
            clauses.push(AND.to_string());
        }
        clauses.push(render_cents(amount.cents()));
    }

    clauses.join(" ")
}

impl CheckAmount {
    /// Shorthand for [`render`]
    pub fn to_words(&self) -> String {
        render(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Sign, MAX_NAMEABLE_DOLLARS};

    fn words(sign: Sign, dollars: u128, cents: u8) -> String {
        render(&CheckAmount::new(sign, dollars, cents).unwrap())
    }

    fn dollars(n: u128) -> String {
        words(Sign::Positive, n, 0)
    }

    #[test]
    fn test_render_group() {
        assert_eq!(render_group(0), "");
        assert_eq!(render_group(7), "seven");
        assert_eq!(render_group(19), "nineteen");
        assert_eq!(render_group(20), "twenty");
        assert_eq!(render_group(45), "forty five");
        assert_eq!(render_group(100), "one hundred");
        assert_eq!(render_group(101), "one hundred one");
        assert_eq!(render_group(110), "one hundred ten");
        assert_eq!(render_group(999), "nine hundred ninety nine");
    }

    #[test]
    fn test_groups() {
        assert_eq!(groups(0).as_slice(), &[] as &[u16]);
        assert_eq!(groups(7_456_123).as_slice(), &[123, 456, 7]);
        assert_eq!(groups(1_000_000).as_slice(), &[0, 0, 1]);
        assert_eq!(groups(MAX_NAMEABLE_DOLLARS).len(), SCALES.len());
    }

    #[test]
    fn test_zero() {
        assert_eq!(render(&CheckAmount::ZERO), "zero dollar");
        assert_eq!(words(Sign::Negative, 0, 0), "zero dollar");
    }

    #[test]
    fn test_digits_and_teens() {
        assert_eq!(dollars(1), "one dollar");
        assert_eq!(dollars(2), "two dollars");
        assert_eq!(dollars(13), "thirteen dollars");
        assert_eq!(dollars(19), "nineteen dollars");
    }

    #[test]
    fn test_tens() {
        let expected = [
            "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
        ];
        for (i, word) in expected.iter().enumerate() {
            let n = (i as u128 + 2) * 10;
            assert_eq!(dollars(n), format!("{word} dollars"));
        }
    }

    #[test]
    fn test_scales_are_not_pluralized() {
        assert_eq!(dollars(1_000_000), "one million dollars");
        assert_eq!(dollars(2_000_000_000), "two billion dollars");
        assert_eq!(
            dollars(1_000_000_000_000_000_000),
            "one quintillion dollars"
        );
    }

    #[test]
    fn test_zero_groups_are_skipped() {
        assert_eq!(dollars(1001), "one thousand one dollars");
        assert_eq!(
            dollars(1_000_001_000),
            "one billion one thousand dollars"
        );
        assert_eq!(
            words(Sign::Positive, 1_001_001_001_001_001, 1),
            "one quadrillion one trillion one billion one million one thousand one dollars and one cent"
        );
    }

    #[test]
    fn test_cents_only() {
        assert_eq!(words(Sign::Positive, 0, 1), "one cent");
        assert_eq!(words(Sign::Positive, 0, 35), "thirty five cents");
        assert_eq!(words(Sign::Negative, 0, 99), "minus ninety nine cents");
    }

    #[test]
    fn test_dollars_and_cents() {
        assert_eq!(
            words(Sign::Positive, 123, 46),
            "one hundred twenty three dollars and forty six cents"
        );
        assert_eq!(words(Sign::Positive, 1, 1), "one dollar and one cent");
        assert_eq!(
            words(Sign::Positive, 999, 99),
            "nine hundred ninety nine dollars and ninety nine cents"
        );
    }

    #[test]
    fn test_negative() {
        assert_eq!(words(Sign::Negative, 45, 0), "minus forty five dollars");
        assert_eq!(words(Sign::Negative, 1, 0), "minus one dollar");
    }

    #[test]
    fn test_full_cascade() {
        assert_eq!(
            dollars(999_999_999_999_999_999),
            "nine hundred ninety nine quadrillion nine hundred ninety nine trillion \
             nine hundred ninety nine billion nine hundred ninety nine million \
             nine hundred ninety nine thousand nine hundred ninety nine dollars"
        );
    }

    #[test]
    fn test_largest_nameable_amount() {
        let text = words(Sign::Positive, MAX_NAMEABLE_DOLLARS, 99);
        assert!(text.starts_with("nine hundred ninety nine quintillion"));
        assert!(text.ends_with("dollars and ninety nine cents"));
    }

    #[test]
    fn test_to_words() {
        let amount = CheckAmount::new(Sign::Positive, 7, 0).unwrap();
        assert_eq!(amount.to_words(), "seven dollars");
    }

    #[test]
    fn quickcheck_rendering_is_total() {
        fn prop(dollars: u64, cents: u8, negative: bool) -> bool {
            let sign = if negative { Sign::Negative } else { Sign::Positive };
            let amount = CheckAmount::new(sign, u128::from(dollars), cents % 100).unwrap();
            let text = render(&amount);
            !text.is_empty()
                && !text.contains("  ")
                && !text.starts_with(' ')
                && !text.ends_with(' ')
        }
        quickcheck::quickcheck(prop as fn(u64, u8, bool) -> bool);
    }
}
