use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TitoKeyError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid token boundary pattern: {0}")]
    InvalidPattern(String),
}
