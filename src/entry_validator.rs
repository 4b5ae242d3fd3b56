//! Structural checks for a parsed candidate.
//!
//! Checks run in a fixed order and stop at the first failure, so every line
//! produces at most one validation diagnostic:
//! 1. address and amount present
//! 2. address prefix (`0x`)
//! 3. address length (42 characters, prefix included)
//! 4. the amount ends in digits
//! 5. the amount is a number
//!
//! Nothing here checks checksums or talks to a node.

use crate::config::Config;
use crate::types::{Candidate, DiagnosticKind, ValidationOutcome};

/// Validate with the built-in rules.
pub fn validate(candidate: &Candidate, line_number: usize) -> ValidationOutcome {
    validate_with(candidate, line_number, &Config::builtin())
}

pub fn validate_with(candidate: &Candidate, line_number: usize, config: &Config) -> ValidationOutcome {
    match check(candidate, config) {
        Ok(()) => ValidationOutcome::Valid,
        Err(kind) => ValidationOutcome::Invalid(kind, line_number),
    }
}

fn check(candidate: &Candidate, config: &Config) -> Result<(), DiagnosticKind> {
    let Candidate { address, amount } = candidate;

    if address.is_empty() || amount.is_empty() {
        return Err(DiagnosticKind::MissingField);
    }
    if !address.starts_with(config.address_prefix.as_str()) {
        return Err(DiagnosticKind::BadPrefix);
    }
    if address.chars().count() != config.address_length {
        return Err(DiagnosticKind::BadLength);
    }
    if !ends_in_digits(amount) {
        return Err(DiagnosticKind::TrailingChars);
    }
    if !is_numeric_literal(amount) {
        return Err(DiagnosticKind::BadAmount);
    }
    Ok(())
}

/// True when the last two characters (or the only one) are ASCII digits.
fn ends_in_digits(amount: &str) -> bool {
    let tail: Vec<char> = amount.chars().rev().take(2).collect();
    !tail.is_empty() && tail.iter().all(|c| c.is_ascii_digit())
}

/// Whether `input` reads as a number under the lenient rules users expect
/// from a browser form: surrounding whitespace is ignored, decimals may carry
/// a sign, a fraction and an exponent, and unsigned `0x`/`0o`/`0b` integer
/// literals are accepted.
pub fn is_numeric_literal(input: &str) -> bool {
    let s = input.trim_matches(is_form_whitespace);
    if s.is_empty() {
        return true;
    }

    if let Some(radix) = radix_prefix(s) {
        let digits = &s[2..];
        return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
    }

    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    unsigned == "Infinity" || is_decimal_literal(unsigned)
}

/// Whitespace and line terminators a browser strips around a numeric string.
///
/// Narrower than `char::is_whitespace`: U+0085 (NEL) is not included.
fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn radix_prefix(s: &str) -> Option<u32> {
    let mut chars = s.chars();
    if chars.next() != Some('0') {
        return None;
    }
    match chars.next() {
        Some('x' | 'X') => Some(16),
        Some('o' | 'O') => Some(8),
        Some('b' | 'B') => Some(2),
        _ => None,
    }
}

/// `digits [. digits] [e|E [+|-] digits]` or `. digits [exponent]`,
/// with at least one mantissa digit.
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut pos = 0;

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let mut mantissa_digits = pos - int_start;

    if pos < bytes.len() && bytes[pos] == b'.' {
        pos += 1;
        let frac_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        mantissa_digits += pos - frac_start;
    }
    if mantissa_digits == 0 {
        return false;
    }

    if pos < bytes.len() && matches!(bytes[pos], b'e' | b'E') {
        pos += 1;
        if pos < bytes.len() && matches!(bytes[pos], b'+' | b'-') {
            pos += 1;
        }
        let exp_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos == exp_start {
            return false;
        }
    }

    pos == bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x1111111111111111111111111111111111111111";

    fn outcome(address: &str, amount: &str) -> ValidationOutcome {
        validate(&Candidate::new(address, amount), 3)
    }

    fn invalid(kind: DiagnosticKind) -> ValidationOutcome {
        ValidationOutcome::Invalid(kind, 3)
    }

    // ==================== ordered checks ====================

    #[test]
    fn test_validate_well_formed_entries() {
        assert_eq!(outcome(ADDR, "123"), ValidationOutcome::Valid);
        assert_eq!(outcome(ADDR, "5"), ValidationOutcome::Valid);
        assert_eq!(outcome(ADDR, "0.25"), ValidationOutcome::Valid);
        assert_eq!(
            outcome("0xAbCdEf0123456789aBcDeF0123456789AbCdEf01", "10"),
            ValidationOutcome::Valid
        );
    }

    #[test]
    fn test_validate_missing_field() {
        assert_eq!(outcome("", ""), invalid(DiagnosticKind::MissingField));
        assert_eq!(outcome(ADDR, ""), invalid(DiagnosticKind::MissingField));
        assert_eq!(outcome("", "5"), invalid(DiagnosticKind::MissingField));
    }

    #[test]
    fn test_validate_bad_prefix_regardless_of_length() {
        assert_eq!(outcome("badaddr", "5"), invalid(DiagnosticKind::BadPrefix));
        assert_eq!(
            outcome("1x1111111111111111111111111111111111111111", "5"),
            invalid(DiagnosticKind::BadPrefix)
        );
        // Prefix is case-sensitive.
        assert_eq!(
            outcome("0X1111111111111111111111111111111111111111", "5"),
            invalid(DiagnosticKind::BadPrefix)
        );
    }

    #[test]
    fn test_validate_bad_length() {
        assert_eq!(outcome("0x1234", "5"), invalid(DiagnosticKind::BadLength));
        assert_eq!(outcome(&format!("{}1", ADDR), "5"), invalid(DiagnosticKind::BadLength));
        assert_eq!(outcome("0x", "5"), invalid(DiagnosticKind::BadLength));
    }

    #[test]
    fn test_validate_length_counts_characters_not_bytes() {
        // 'é' is two bytes but one character.
        let accented = format!("0x{}é", "1".repeat(39));
        assert_eq!(accented.chars().count(), 42);
        assert_eq!(outcome(&accented, "5"), ValidationOutcome::Valid);

        // An astral character also counts once.
        let crab = format!("0x{}🦀", "1".repeat(39));
        assert_eq!(outcome(&crab, "5"), ValidationOutcome::Valid);
        assert_eq!(
            outcome(&format!("0x{}🦀", "1".repeat(40)), "5"),
            invalid(DiagnosticKind::BadLength)
        );
    }

    #[test]
    fn test_validate_length_checked_before_amount() {
        assert_eq!(outcome("0x12", "abc"), invalid(DiagnosticKind::BadLength));
    }

    #[test]
    fn test_validate_trailing_chars_inspects_amount() {
        assert_eq!(outcome(ADDR, "12a"), invalid(DiagnosticKind::TrailingChars));
        assert_eq!(outcome(ADDR, "1x"), invalid(DiagnosticKind::TrailingChars));
        assert_eq!(outcome(ADDR, "1."), invalid(DiagnosticKind::TrailingChars));
        assert_eq!(outcome(ADDR, "x"), invalid(DiagnosticKind::TrailingChars));
        assert_eq!(outcome(ADDR, "1e"), invalid(DiagnosticKind::TrailingChars));
    }

    #[test]
    fn test_validate_bad_amount() {
        assert_eq!(outcome(ADDR, "1.2.33"), invalid(DiagnosticKind::BadAmount));
        assert_eq!(outcome(ADDR, "abc12"), invalid(DiagnosticKind::BadAmount));
        assert_eq!(outcome(ADDR, "1_000"), invalid(DiagnosticKind::BadAmount));
        assert_eq!(outcome(ADDR, "--12"), invalid(DiagnosticKind::BadAmount));
    }

    #[test]
    fn test_validate_reports_line_number() {
        let result = validate(&Candidate::new("nope", "1"), 17);
        assert_eq!(result, ValidationOutcome::Invalid(DiagnosticKind::BadPrefix, 17));
    }

    #[test]
    fn test_validate_with_custom_rules() {
        let mut config = Config::builtin();
        config.address_prefix = "T".to_string();
        config.address_length = 5;
        let result = validate_with(&Candidate::new("Tabcd", "10"), 1, &config);
        assert!(result.is_valid());
    }

    // ==================== is_numeric_literal tests ====================

    #[test]
    fn test_numeric_literal_decimals() {
        for s in ["0", "12", "-12", "+12", "1.5", ".5", "5.", "1e18", "1E-3", "2.5e+10", " 7 ", "\t42"] {
            assert!(is_numeric_literal(s), "{s:?} should be numeric");
        }
    }

    #[test]
    fn test_numeric_literal_radix_prefixes() {
        assert!(is_numeric_literal("0x12"));
        assert!(is_numeric_literal("0XfF"));
        assert!(is_numeric_literal("0o17"));
        assert!(is_numeric_literal("0b101"));
        assert!(!is_numeric_literal("0x"));
        assert!(!is_numeric_literal("0b12"));
        assert!(!is_numeric_literal("-0x12"));
    }

    #[test]
    fn test_numeric_literal_infinity() {
        assert!(is_numeric_literal("Infinity"));
        assert!(is_numeric_literal("-Infinity"));
        assert!(!is_numeric_literal("infinity"));
        assert!(!is_numeric_literal("inf"));
        assert!(!is_numeric_literal("NaN"));
    }

    #[test]
    fn test_numeric_literal_form_whitespace() {
        assert!(is_numeric_literal("\u{a0}12\u{3000}"));
        assert!(is_numeric_literal("\u{feff}12"));
        assert!(is_numeric_literal("\u{2028}12\u{2029}"));
        // NEL is Unicode whitespace but not stripped by number parsing.
        assert!(!is_numeric_literal("\u{85}12"));
    }

    #[test]
    fn test_validate_nel_padded_amount_is_bad_amount() {
        assert_eq!(outcome(ADDR, "\u{85}12"), invalid(DiagnosticKind::BadAmount));
    }

    #[test]
    fn test_numeric_literal_rejects_garbage() {
        for s in [".", "e5", "1e", "1e+", "1.2.3", "1,5", "12abc", "+-1", "1 2"] {
            assert!(!is_numeric_literal(s), "{s:?} should not be numeric");
        }
    }
}
