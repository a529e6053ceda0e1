//! Grouping converter
//!
//! Decomposes a non-negative integer into crore/lakh/thousand/hundred
//! groups and renders each through the language lexicon.

use super::Language;

/// Scale unit of the South Asian numbering system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    /// 100
    Hundred,
    /// 1,000
    Thousand,
    /// 100,000
    Lakh,
    /// 10,000,000
    Crore,
}

impl Scale {
    /// Numeric value of the scale unit.
    pub const fn value(self) -> u64 {
        match self {
            Self::Hundred => 100,
            Self::Thousand => 1_000,
            Self::Lakh => 100_000,
            Self::Crore => 10_000_000,
        }
    }
}

/// Descending-scale peeling converter.
pub struct GroupingConverter;

impl GroupingConverter {
    /// Render a non-negative integer as words.
    ///
    /// Segments are emitted in descending scale order; a 1-99 remainder
    /// comes last with no scale word.
    pub fn convert(number: u64, language: Language) -> String {
        if number == 0 {
            return language.basic(0);
        }

        let mut parts = Vec::new();
        let mut remainder = number;

        // A crore quotient of 100 or more is grouped again, so every
        // lexicon lookup stays inside [0, 99] over the whole u64 range.
        let crores = remainder / Scale::Crore.value();
        if crores > 0 {
            let word = if crores < 100 {
                language.basic(crores as u8)
            } else {
                Self::convert(crores, language)
            };
            parts.push(format!("{} {}", word, language.scale(Scale::Crore)));
            remainder %= Scale::Crore.value();
        }

        for scale in [Scale::Lakh, Scale::Thousand, Scale::Hundred] {
            let quotient = remainder / scale.value();
            if quotient > 0 {
                parts.push(format!(
                    "{} {}",
                    language.basic(quotient as u8),
                    language.scale(scale)
                ));
                remainder %= scale.value();
            }
        }

        if remainder > 0 {
            parts.push(language.basic(remainder as u8));
        }

        parts.join(" ")
    }
}
