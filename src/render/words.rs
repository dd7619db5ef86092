// ============================================================================
// Word Tables
// US-English number words, short-scale suffixes and currency names
// ============================================================================

/// Words for 0-19; zero renders as nothing inside a group
pub const ONES: [&str; 20] = [
    "",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Words for multiples of ten; 0 and 10 are covered by `ONES`
pub const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

pub const HUNDRED: &str = "hundred";

/// Short-scale suffixes indexed by three-digit group, lowest group first
pub const SCALES: [&str; 7] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
];

pub const ZERO: &str = "zero";
pub const MINUS: &str = "minus";
pub const AND: &str = "and";
pub const PLURAL_SUFFIX: &str = "s";

/// Major unit
pub const DOLLAR: &str = "dollar";

/// Minor unit
pub const CENT: &str = "cent";
