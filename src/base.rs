use crate::{error::TitoKeyError, types::TitoKeyConfig};

/// Encodes, splits and parses index keys for one separator configuration.
///
/// The encoder holds no state besides its configuration, so it is `Copy` and
/// can be shared freely across threads. The free functions at the crate root
/// all go through [`TitoKeyEncoder::DEFAULT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitoKeyEncoder {
    config: TitoKeyConfig,
}

impl TitoKeyEncoder {
    pub const DEFAULT: TitoKeyEncoder = TitoKeyEncoder {
        config: TitoKeyConfig::DEFAULT,
    };

    pub fn new(config: TitoKeyConfig) -> Result<Self, TitoKeyError> {
        config.validate()?;

        Ok(Self { config })
    }

    pub fn config(&self) -> &TitoKeyConfig {
        &self.config
    }

    pub fn escape_char(&self) -> char {
        self.config.escape_char
    }

    pub fn token_separator(&self) -> char {
        self.config.token_separator
    }

    pub fn key_separator(&self) -> char {
        self.config.key_separator
    }
}

impl Default for TitoKeyEncoder {
    fn default() -> Self {
        Self::DEFAULT
    }
}
