use crate::TitoKeyError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde::Serialize;
use typed_builder::TypedBuilder;

pub const DEFAULT_ESCAPE_CHAR: char = '\\';

/// Joins tokens inside a single encoded key component.
pub const TOKEN_SEP: char = '\u{E000}';

/// Joins the components of a composite key.
pub const KEY_SEP: char = '\u{E001}';

/// Whitespace (newlines included), common punctuation, pipe, comma and hyphen.
/// Never matches the escape character, so escaped pairs survive a split.
pub const DEFAULT_TOKEN_BOUNDARY: &str = r"[\s.,;:!?|\-]+";

pub(crate) static DEFAULT_TOKEN_BOUNDARY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_TOKEN_BOUNDARY).expect("Invalid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
pub struct TitoKeyConfig {
    #[builder(default = DEFAULT_ESCAPE_CHAR)]
    pub escape_char: char,
    #[builder(default = TOKEN_SEP)]
    pub token_separator: char,
    #[builder(default = KEY_SEP)]
    pub key_separator: char,
}

impl TitoKeyConfig {
    pub const DEFAULT: TitoKeyConfig = TitoKeyConfig {
        escape_char: DEFAULT_ESCAPE_CHAR,
        token_separator: TOKEN_SEP,
        key_separator: KEY_SEP,
    };

    pub fn validate(&self) -> Result<(), TitoKeyError> {
        if self.token_separator == self.key_separator {
            return Err(TitoKeyError::Configuration(format!(
                "token separator and key separator must differ, both are {:?}",
                self.token_separator
            )));
        }

        if self.escape_char == self.token_separator || self.escape_char == self.key_separator {
            return Err(TitoKeyError::Configuration(format!(
                "escape character {:?} collides with a separator",
                self.escape_char
            )));
        }

        Ok(())
    }
}

impl Default for TitoKeyConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TitoKeyFamily {
    TermFrequency,
    ReverseIndex,
    FieldInfo,
}

impl TitoKeyFamily {
    pub fn prefix(&self) -> &'static str {
        match self {
            TitoKeyFamily::TermFrequency => "TF",
            TitoKeyFamily::ReverseIndex => "RI",
            TitoKeyFamily::FieldInfo => "FI",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<TitoKeyFamily> {
        match prefix {
            "TF" => Some(TitoKeyFamily::TermFrequency),
            "RI" => Some(TitoKeyFamily::ReverseIndex),
            "FI" => Some(TitoKeyFamily::FieldInfo),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitoParsedKey {
    pub prefix: String,
    pub parts: Vec<String>,
}

/// A search key broken into its five named slots.
///
/// Slots after `prefix` are `None` when the key is too short to reach them, and
/// anything past the fifth component lands in `trailing`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitoSearchKey {
    pub prefix: String,
    pub field: Option<String>,
    pub value: Option<String>,
    pub filter: Option<String>,
    pub filter_key: Option<String>,
    pub trailing: Vec<String>,
}

impl TitoSearchKey {
    pub fn family(&self) -> Option<TitoKeyFamily> {
        let family = TitoKeyFamily::from_prefix(&self.prefix);
        if family.is_none() {
            log::debug!("Search key prefix {:?} is not a reserved family", self.prefix);
        }
        family
    }
}

/// Where to cut free text into tokens.
#[derive(Debug, Clone, Default)]
pub enum TitoTokenBoundary {
    #[default]
    Default,
    Whole,
    Pattern(Regex),
}

impl TitoTokenBoundary {
    pub fn pattern(pattern: &str) -> Result<TitoTokenBoundary, TitoKeyError> {
        if pattern.is_empty() {
            return Ok(TitoTokenBoundary::Whole);
        }

        Regex::new(pattern)
            .map(TitoTokenBoundary::Pattern)
            .map_err(|e| TitoKeyError::InvalidPattern(format!("{}: {}", pattern, e)))
    }

    pub(crate) fn regex(&self) -> Option<&Regex> {
        match self {
            TitoTokenBoundary::Default => Some(&*DEFAULT_TOKEN_BOUNDARY_REGEX),
            TitoTokenBoundary::Whole => None,
            TitoTokenBoundary::Pattern(regex) if regex.as_str().is_empty() => None,
            TitoTokenBoundary::Pattern(regex) => Some(regex),
        }
    }
}

/// Scan bounds for an ordered store: `start` inclusive, `end` exclusive.
/// `end` is `None` when no finite upper bound exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitoKeyRange {
    pub start: String,
    pub end: Option<String>,
}
