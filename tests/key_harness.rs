//! Key encoding integration harness.
//!
//! # What this covers
//!
//! - **Escape round-trip**: `unescape(escape(s)) == s` for arbitrary strings,
//!   including ones dense in backslashes and both separators.
//! - **Separator safety**: escaped text never holds an unescaped separator.
//! - **Key round-trip**: `break_key(build_key(c)) == c` for arbitrary component
//!   lists, and the five search slots survive `parse_search_key`.
//! - **Prefix checks and scan ranges** agree with how keys are built.
//! - **Tokenizer invariant**: decoding an encoded stream gives the same tokens
//!   as splitting the escaped text directly.
//! - **Custom configuration**: a non-default encoder keeps every property,
//!   including separators that the token boundary also matches.
//!
//! # Running
//!
//! ```sh
//! cargo test --test key_harness
//! ```

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tito_keys::{
    break_key, build_field_info_key, build_key, build_search_key, build_term_frequency_key,
    decode_tokens, encode, escape, key_has_prefix, parse_key, parse_search_key, prefix_range,
    split_unescaped, tito_key, tokenize, unescape, TitoKeyConfig, TitoKeyEncoder,
    TitoKeyFamily, TitoSearchKey, TitoTokenBoundary, KEY_SEP, TOKEN_SEP,
};

/// Strings biased toward the reserved characters.
fn tricky_string() -> impl Strategy<Value = String> {
    let pieces = prop_oneof![
        Just("\\".to_string()),
        Just(TOKEN_SEP.to_string()),
        Just(KEY_SEP.to_string()),
        Just(" ".to_string()),
        Just(",".to_string()),
        "[a-z]{1,3}",
        any::<char>().prop_map(|c| c.to_string()),
    ];

    prop::collection::vec(pieces, 0..12).prop_map(|parts| parts.concat())
}

/// True when `text` has a `separator` preceded by an even run of backslashes.
fn has_unescaped(text: &str, separator: char) -> bool {
    let mut run = 0;

    for ch in text.chars() {
        if ch == separator && run % 2 == 0 {
            return true;
        }
        run = if ch == '\\' { run + 1 } else { 0 };
    }

    false
}

/// Configs whose separators collide with common boundary characters.
fn any_encoder() -> impl Strategy<Value = TitoKeyEncoder> {
    prop_oneof![
        Just(TitoKeyConfig::default()),
        Just(TitoKeyConfig::builder().key_separator(':').build()),
        Just(
            TitoKeyConfig::builder()
                .token_separator(',')
                .key_separator(':')
                .build()
        ),
        Just(
            TitoKeyConfig::builder()
                .escape_char('~')
                .token_separator(' ')
                .key_separator('/')
                .build()
        ),
    ]
    .prop_map(|config| TitoKeyEncoder::new(config).unwrap())
}

fn any_boundary() -> impl Strategy<Value = TitoTokenBoundary> {
    prop_oneof![
        Just(TitoTokenBoundary::Default),
        Just(TitoTokenBoundary::Whole),
        Just(TitoTokenBoundary::pattern("[,;/ ]+").unwrap()),
        Just(TitoTokenBoundary::pattern(":").unwrap()),
    ]
}

/// Text dense in the characters the configs above reserve.
fn config_text() -> impl Strategy<Value = String> {
    let pieces = prop_oneof![
        Just("\\".to_string()),
        Just("~".to_string()),
        Just(":".to_string()),
        Just(",".to_string()),
        Just("/".to_string()),
        Just(" ".to_string()),
        Just(TOKEN_SEP.to_string()),
        Just(KEY_SEP.to_string()),
        "[a-z]{1,3}",
    ];

    prop::collection::vec(pieces, 0..12).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn configured_tokens_survive_encoding(
        encoder in any_encoder(),
        boundary in any_boundary(),
        text in config_text(),
    ) {
        let encoded = encoder.encode(&text, &boundary);
        let direct = encoder.tokenize(&encoder.escape(&text), false, &boundary);

        prop_assert_eq!(encoder.tokenize(&encoded, true, &boundary), direct.clone());
        prop_assert_eq!(
            encoder.decode_tokens(&encoded),
            direct.iter().map(|token| encoder.unescape(token)).collect::<Vec<_>>()
        );
        prop_assert!(encoder.decode_tokens(&encoded).concat().len() <= text.len());
    }

    #[test]
    fn escape_round_trips(s in tricky_string()) {
        prop_assert_eq!(unescape(&escape(&s)), s);
    }

    #[test]
    fn escape_round_trips_any_unicode(s in any::<String>()) {
        prop_assert_eq!(unescape(&escape(&s)), s);
    }

    #[test]
    fn escaped_text_has_no_bare_separators(s in tricky_string()) {
        let escaped = escape(&s);
        prop_assert!(!has_unescaped(&escaped, TOKEN_SEP));
        prop_assert!(!has_unescaped(&escaped, KEY_SEP));
    }

    #[test]
    fn key_round_trips(components in prop::collection::vec(tricky_string(), 1..8)) {
        prop_assert_eq!(break_key(&build_key(&components)), components);
    }

    #[test]
    fn split_recovers_escaped_components(components in prop::collection::vec(tricky_string(), 1..8)) {
        let escaped: Vec<String> = components.iter().map(|c| escape(c)).collect();
        let joined = escaped.join(&KEY_SEP.to_string());
        prop_assert_eq!(split_unescaped(&joined, KEY_SEP), escaped);
    }

    #[test]
    fn search_key_round_trips(
        prefix in tricky_string(),
        field in tricky_string(),
        value in tricky_string(),
        filter in tricky_string(),
        filter_key in tricky_string(),
    ) {
        let key = build_search_key(&prefix, &field, &value, Some(&filter), Some(&filter_key));
        let parsed = parse_search_key(&key);

        prop_assert_eq!(parsed, TitoSearchKey {
            prefix: prefix.clone(),
            field: Some(field),
            value: Some(value),
            filter: Some(filter),
            filter_key: Some(filter_key),
            trailing: vec![],
        });
        prop_assert!(key_has_prefix(&key, &prefix));
    }

    #[test]
    fn parsing_never_panics(key in any::<String>()) {
        let parsed = parse_search_key(&key);
        let generic = parse_key(&key);
        prop_assert_eq!(parsed.prefix, generic.prefix);
    }

    #[test]
    fn encoded_tokens_match_escaped_split(text in tricky_string()) {
        let boundary = TitoTokenBoundary::Default;
        let encoded = encode(&text, &boundary);

        prop_assert_eq!(
            tokenize(&encoded, true, &boundary),
            tokenize(&escape(&text), false, &boundary)
        );
        prop_assert!(!has_unescaped(&encoded, KEY_SEP));
    }

    #[test]
    fn prefix_range_contains_built_keys(
        field in tricky_string(),
        value in tricky_string(),
        other in tricky_string(),
    ) {
        let range = prefix_range(["TF", field.as_str()]);
        let inside = build_term_frequency_key(&field, &value, None, None);
        prop_assert!(inside >= range.start);
        if let Some(end) = &range.end {
            prop_assert!(&inside < end);
        }

        prop_assume!(other != field);
        let outside = build_term_frequency_key(&other, &value, None, None);
        let within = outside >= range.start
            && range.end.as_ref().map_or(true, |end| &outside < end);
        prop_assert!(!within);
    }
}

#[test]
fn prefix_check_is_not_a_substring_test() {
    assert!(key_has_prefix(&build_key(["TF", "x"]), "TF"));
    assert!(!key_has_prefix(&build_key(["TFX", "x"]), "TF"));
}

#[test]
fn default_boundary_splits_punctuation() {
    assert_eq!(
        tokenize("a, b.c-d", false, &TitoTokenBoundary::Default),
        vec!["a", "b", "c", "d"]
    );
}

#[test]
fn hello_world_encodes_to_same_tokens() {
    let boundary = TitoTokenBoundary::Default;
    assert_eq!(
        tokenize(&encode("hello, world", &boundary), true, &boundary),
        tokenize(&escape("hello, world"), false, &boundary)
    );
    assert_eq!(
        decode_tokens(&encode("hello, world", &boundary)),
        vec!["hello", "world"]
    );
}

#[test]
fn term_frequency_key_shape() {
    let key = build_term_frequency_key("f", "v", None, None);
    assert!(key.starts_with(&format!("TF{}", KEY_SEP)));

    let parsed = parse_search_key(&key);
    assert_eq!(parsed.prefix, "TF");
    assert_eq!(parsed.field.as_deref(), Some("f"));
    assert_eq!(parsed.value.as_deref(), Some("v"));
    assert_eq!(parsed.filter.as_deref(), Some(""));
    assert_eq!(parsed.filter_key.as_deref(), Some(""));
    assert_eq!(parsed.family(), Some(TitoKeyFamily::TermFrequency));
}

#[test]
fn seven_components_spill_into_trailing() {
    let key = tito_key!("TF", "f", "v", "a", "b", "c", "d");
    let parsed = parse_search_key(&key);

    assert_eq!(parsed.prefix, "TF");
    assert_eq!(parsed.filter.as_deref(), Some("a"));
    assert_eq!(parsed.filter_key.as_deref(), Some("b"));
    assert_eq!(parsed.trailing, vec!["c", "d"]);
}

#[test]
fn parsed_search_key_serializes_by_slot() {
    let parsed = parse_search_key(&build_field_info_key("lang", "en", None, None));
    let json = serde_json::to_value(&parsed).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "prefix": "FI",
            "field": "lang",
            "value": "en",
            "filter": "",
            "filter_key": "",
            "trailing": [],
        })
    );
    assert_eq!(serde_json::from_value::<TitoSearchKey>(json).unwrap(), parsed);
}

#[test]
fn custom_encoder_round_trips() {
    let config = TitoKeyConfig::builder()
        .escape_char('~')
        .token_separator(' ')
        .key_separator('/')
        .build();
    let encoder = TitoKeyEncoder::new(config).unwrap();

    let components = ["users", "a/b", "c~", "d e"];
    let key = encoder.build_key(components);
    assert_eq!(key, "users/a~/b/c~~/d~ e");
    assert_eq!(encoder.break_key(&key), components);
    assert!(encoder.key_has_prefix(&key, "users"));

    let encoded = encoder.encode("x~y, z", &TitoTokenBoundary::pattern(",").unwrap());
    assert_eq!(encoded, "x~~y ~ z");
    assert_eq!(encoder.decode_tokens(&encoded), vec!["x~y", " z"]);
}
