//! Composite index keys for Tito search indexes.
//!
//! Raw strings are escaped so the private token and key separators never show
//! up unescaped, then joined into keys the store can scan by prefix and split
//! back into the exact original components.
//!
//! ```
//! use tito_keys::{build_term_frequency_key, parse_search_key};
//!
//! let key = build_term_frequency_key("title", "rust", None, None);
//! let parsed = parse_search_key(&key);
//!
//! assert_eq!(parsed.prefix, "TF");
//! assert_eq!(parsed.value.as_deref(), Some("rust"));
//! ```

mod error;
pub use error::TitoKeyError;

pub mod types;
pub use types::{
    TitoKeyConfig, TitoKeyFamily, TitoKeyRange, TitoParsedKey, TitoSearchKey, TitoTokenBoundary,
    KEY_SEP, TOKEN_SEP,
};

mod base;
pub use base::TitoKeyEncoder;

mod index;
mod key_encoder;
mod split;
mod tokenizer;
mod utils;

pub use index::{
    break_key, build_field_info_key, build_key, build_key_prefix, build_reverse_index_key,
    build_search_key, build_term_frequency_key, key_has_prefix, parse_key, parse_search_key,
};
pub use key_encoder::{escape, unescape};
pub use split::split_unescaped;
pub use tokenizer::{decode_tokens, encode, tokenize};
pub use utils::{next_string_lexicographically, previous_string_lexicographically, prefix_range};
