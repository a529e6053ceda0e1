//! Currency and sign composer
//!
//! Top-level entry for word conversion: sign prefix, rupee/paisa split with
//! two-digit rounding, singular/plural selection and the language
//! conjunction.

use super::converter::GroupingConverter;
use super::Language;
use crate::amount::Amount;

/// Composes the full word phrase for an [`Amount`].
pub struct WordComposer {
    language: Language,
}

impl WordComposer {
    /// Create a composer for the given language.
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Render the amount as words.
    ///
    /// Integers render plain; decimals render as rupees and paise. A
    /// negative value gets a `-` prefix with no space.
    pub fn render(&self, amount: Amount) -> String {
        match amount {
            Amount::Int(value) => {
                let words = GroupingConverter::convert(value.unsigned_abs(), self.language);
                if value < 0 {
                    format!("-{}", words)
                } else {
                    words
                }
            }
            Amount::Decimal(value) => {
                if value < 0.0 {
                    format!("-{}", self.render_currency(-value))
                } else {
                    self.render_currency(value)
                }
            }
        }
    }

    fn render_currency(&self, value: f64) -> String {
        let (rupees, paise) = split_paise(value);

        if rupees == 0 && paise == 0 {
            return GroupingConverter::convert(0, self.language);
        }

        let mut parts = Vec::new();

        if rupees > 0 {
            parts.push(format!(
                "{} {}",
                GroupingConverter::convert(rupees, self.language),
                self.language.rupee(rupees)
            ));
        }

        if paise > 0 {
            parts.push(format!(
                "{} {}",
                GroupingConverter::convert(paise, self.language),
                self.language.paisa(paise)
            ));
        }

        parts.join(&format!(" {} ", self.language.conjunction()))
    }
}

/// Split a non-negative decimal into whole rupees and two-digit paise.
///
/// Paise round half-up (ties away from zero); 100 rounded paise carry into
/// the rupee count.
fn split_paise(value: f64) -> (u64, u64) {
    let rupees = value.trunc() as u64;
    let paise = ((value - value.trunc()) * 100.0).round() as u64;
    if paise >= 100 {
        (rupees + 1, 0)
    } else {
        (rupees, paise)
    }
}
