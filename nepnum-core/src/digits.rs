//! Digit-group formatting
//!
//! South Asian comma placement: a separator after the 3rd digit from the
//! right, then after every 2 digits. Works on the textual rendering so the
//! fractional side passes through verbatim, with no re-rounding.

use crate::amount::Amount;
use crate::error::{NepNumError, NepNumResult};

/// Inserts South-Asian-style separators into a decimal string.
pub struct DigitGrouper;

impl DigitGrouper {
    /// Format a textual number with separators.
    ///
    /// Accepts an optional leading `-`, ASCII digits, and an optional
    /// fractional part after `.` which is appended unchanged.
    pub fn format(input: &str) -> NepNumResult<String> {
        let text = input.trim();
        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let (int_digits, frac_digits) = match unsigned.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (unsigned, None),
        };

        let int_ok = !int_digits.is_empty() && int_digits.bytes().all(|b| b.is_ascii_digit());
        let frac_ok = frac_digits
            .map_or(true, |digits| {
                !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
            });
        if !int_ok || !frac_ok {
            return Err(NepNumError::InvalidNumber(input.to_string()));
        }

        let mut result = String::new();
        if negative {
            result.push('-');
        }
        result.push_str(&Self::group_integer(int_digits));
        if let Some(digits) = frac_digits {
            result.push('.');
            result.push_str(digits);
        }
        Ok(result)
    }

    /// Insert separators at offsets 3, 5, 7, ... from the right.
    fn group_integer(digits: &str) -> String {
        let mut reversed = String::with_capacity(digits.len() + digits.len() / 2);
        for (i, ch) in digits.chars().rev().enumerate() {
            if i >= 3 && (i - 3) % 2 == 0 {
                reversed.push(',');
            }
            reversed.push(ch);
        }
        reversed.chars().rev().collect()
    }
}

/// Format a textual number with South-Asian digit grouping.
///
/// # Examples
/// ```
/// use nepnum_core::grouped_digits;
///
/// assert_eq!(grouped_digits("1000000").unwrap(), "10,00,000");
/// assert_eq!(grouped_digits("-120000").unwrap(), "-1,20,000");
/// ```
pub fn grouped_digits(input: &str) -> NepNumResult<String> {
    DigitGrouper::format(input)
}

/// Format a numeric value with South-Asian digit grouping.
pub fn grouped_digits_of(value: impl Into<Amount>) -> String {
    let amount = value.into();
    let text = amount.to_string();
    // Display of an Amount is a plain decimal rendering; non-finite values
    // fall through ungrouped
    DigitGrouper::format(&text).unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_integers_untouched() {
        assert_eq!(grouped_digits("0").unwrap(), "0");
        assert_eq!(grouped_digits("7").unwrap(), "7");
        assert_eq!(grouped_digits("42").unwrap(), "42");
        assert_eq!(grouped_digits("999").unwrap(), "999");
    }

    #[test]
    fn test_three_then_two_rule() {
        assert_eq!(grouped_digits("1000").unwrap(), "1,000");
        assert_eq!(grouped_digits("120000").unwrap(), "1,20,000");
        assert_eq!(grouped_digits("1000000").unwrap(), "10,00,000");
        assert_eq!(grouped_digits("10000000").unwrap(), "1,00,00,000");
        assert_eq!(grouped_digits("123456789").unwrap(), "12,34,56,789");
    }

    #[test]
    fn test_negative_keeps_sign() {
        assert_eq!(grouped_digits("-120000").unwrap(), "-1,20,000");
        assert_eq!(grouped_digits("-7").unwrap(), "-7");
    }

    #[test]
    fn test_fraction_passes_through_verbatim() {
        assert_eq!(grouped_digits("123.45").unwrap(), "123.45");
        assert_eq!(grouped_digits("1234567.8900").unwrap(), "12,34,567.8900");
        assert_eq!(grouped_digits("-1000.05").unwrap(), "-1,000.05");
    }

    #[test]
    fn test_invalid_input() {
        assert!(grouped_digits("abc").is_err());
        assert!(grouped_digits("12a").is_err());
        assert!(grouped_digits("1.2.3").is_err());
        assert!(grouped_digits("1.").is_err());
        assert!(grouped_digits(".5").is_err());
        assert!(grouped_digits("-").is_err());
        assert!(grouped_digits("").is_err());
    }

    #[test]
    fn test_idempotent_over_stripped_output() {
        for input in ["1000000", "-120000", "123456789", "1234567.8900"] {
            let formatted = grouped_digits(input).unwrap();
            let stripped: String = formatted.chars().filter(|&c| c != ',').collect();
            assert_eq!(stripped, input);
            assert_eq!(grouped_digits(&stripped).unwrap(), formatted);
        }
    }

    #[test]
    fn test_grouped_digits_of_values() {
        assert_eq!(grouped_digits_of(1000000), "10,00,000");
        assert_eq!(grouped_digits_of(-120000), "-1,20,000");
        assert_eq!(grouped_digits_of(123.45), "123.45");
        assert_eq!(grouped_digits_of(0), "0");
    }
}
