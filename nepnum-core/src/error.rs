use thiserror::Error;

#[derive(Error, Debug)]
pub enum NepNumError {
    // Conversion errors
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Unsupported language tag: {0} (expected \"en\" or \"np\")")]
    UnsupportedLanguage(String),

    // Config errors
    #[error("Config parse error: {path} - {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("Config directory not found: {0}")]
    ConfigNotFound(String),

    // Other errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NepNumResult<T> = Result<T, NepNumError>;
