//! Number-to-words conversion
//!
//! South Asian grouping (crore, lakh, thousand, hundred) rendered through
//! per-language lexicons.

pub mod composer;
pub mod converter;
pub mod english;
pub mod nepali;

// Export core types
pub use composer::WordComposer;
pub use converter::{GroupingConverter, Scale};

use std::str::FromStr;

use crate::amount::Amount;
use crate::error::{NepNumError, NepNumResult};
use english::EnglishLexicon;
use nepali::NepaliLexicon;

/// Supported output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// English
    En,
    /// Nepali (Devanagari script)
    Np,
}

impl Language {
    /// Resolve a language tag.
    ///
    /// Unknown tags are rejected; there is no silent fallback to English.
    pub fn from_tag(tag: &str) -> NepNumResult<Self> {
        match tag {
            "en" => Ok(Self::En),
            "np" => Ok(Self::Np),
            _ => Err(NepNumError::UnsupportedLanguage(tag.to_string())),
        }
    }

    /// The language tag.
    pub fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Np => "np",
        }
    }

    /// Word for a value in [0, 99].
    pub(crate) fn basic(self, n: u8) -> String {
        match self {
            Self::En => EnglishLexicon::basic(n),
            Self::Np => NepaliLexicon::basic(n),
        }
    }

    /// Word for a scale unit.
    pub(crate) fn scale(self, scale: Scale) -> &'static str {
        match self {
            Self::En => EnglishLexicon::scale(scale),
            Self::Np => NepaliLexicon::scale(scale),
        }
    }

    /// Rupee unit word, singular when `count == 1`.
    pub(crate) fn rupee(self, count: u64) -> &'static str {
        match self {
            Self::En => EnglishLexicon::rupee(count),
            Self::Np => NepaliLexicon::rupee(count),
        }
    }

    /// Paisa unit word, singular when `count == 1`.
    pub(crate) fn paisa(self, count: u64) -> &'static str {
        match self {
            Self::En => EnglishLexicon::paisa(count),
            Self::Np => NepaliLexicon::paisa(count),
        }
    }

    /// Conjunction joining the rupee and paisa phrases.
    pub(crate) fn conjunction(self) -> &'static str {
        match self {
            Self::En => EnglishLexicon::conjunction(),
            Self::Np => NepaliLexicon::conjunction(),
        }
    }
}

impl FromStr for Language {
    type Err = NepNumError;

    fn from_str(s: &str) -> NepNumResult<Self> {
        Self::from_tag(s)
    }
}

/// Convert a numeric value to its spoken-word representation.
///
/// # Examples
/// ```
/// use nepnum_core::{words_of, Language};
///
/// assert_eq!(words_of(120000, Language::En), "one lakh twenty thousand");
/// assert_eq!(
///     words_of(123.45, Language::En),
///     "one hundred twenty-three rupees and forty-five paise"
/// );
/// ```
pub fn words_of(value: impl Into<Amount>, language: Language) -> String {
    WordComposer::new(language).render(value.into())
}
