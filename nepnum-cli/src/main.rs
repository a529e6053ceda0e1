//! nepnum command line
//!
//! Converts one numeric argument to South-Asian-style words, or to grouped
//! digits with `--grouped`. Parse and validation failures exit nonzero.

use std::process::ExitCode;

use clap::Parser;

use nepnum_core::{
    grouped_digits, words_of, Amount, Language, NepNumConfig, NepNumError, NepNumResult,
};

/// Convert numbers to words in Nepali style (crore, lakh, thousand).
#[derive(Parser, Debug)]
#[command(name = "nepnum", version, about)]
struct Args {
    /// Number to convert (integer or decimal)
    #[arg(required_unless_present = "set_default_lang")]
    number: Option<String>,

    /// Output language tag: en or np (default from config)
    #[arg(short, long)]
    lang: Option<String>,

    /// Print comma-grouped digits instead of words
    #[arg(short, long)]
    grouped: bool,

    /// Persist a default language tag and exit
    #[arg(long, value_name = "TAG")]
    set_default_lang: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    match run(&args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> NepNumResult<String> {
    if let Some(tag) = &args.set_default_lang {
        let language = Language::from_tag(tag)?;
        let config = NepNumConfig {
            language: language.tag().to_string(),
        };
        config.save()?;
        return Ok(format!("default language set to {}", language.tag()));
    }

    let Some(number) = args.number.as_deref() else {
        return Err(NepNumError::InvalidNumber("no number given".to_string()));
    };

    if args.grouped {
        return grouped_digits(number);
    }

    let language = match &args.lang {
        Some(tag) => Language::from_tag(tag)?,
        None => Language::from_tag(&NepNumConfig::load()?.language)?,
    };

    let amount: Amount = number.parse()?;
    Ok(words_of(amount, language))
}
