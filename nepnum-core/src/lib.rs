//! nepnum core engine
//!
//! Number-to-words conversion with South Asian grouping (crore, lakh,
//! thousand, hundred) in English and Nepali, plus South-Asian-style digit
//! grouping (3-then-2 comma placement).

#![warn(rust_2018_idioms)]

pub mod amount;
pub mod config;
pub mod digits;
pub mod error;
pub mod words;

// Re-export key types
pub use amount::Amount;
pub use config::NepNumConfig;
pub use digits::{grouped_digits, grouped_digits_of, DigitGrouper};
pub use error::{NepNumError, NepNumResult};
pub use words::{words_of, GroupingConverter, Language, WordComposer};

/// Initialize the logging system.
///
/// Production builds stay silent. With `--features debug-logs` the filter
/// is read from `NEPNUM_LOG` (default `warn`).
///
/// Note: safe to call more than once.
pub fn init_logging() {
    #[cfg(feature = "debug-logs")]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter =
            EnvFilter::try_from_env("NEPNUM_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

        // try_init() instead of init() so a second call does not panic
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(false))
            .with(filter)
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_surface_smoke() {
        assert_eq!(words_of(120000, Language::En), "one lakh twenty thousand");
        assert_eq!(grouped_digits("1000000").unwrap(), "10,00,000");
    }
}
