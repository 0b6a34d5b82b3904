use crate::{types::TitoTokenBoundary, TitoKeyEncoder};
use regex::Regex;

impl TitoKeyEncoder {
    /// Cuts `text` into tokens.
    ///
    /// With `is_encoded` the text is taken to be the output of
    /// [`TitoKeyEncoder::encode`] and is split on unescaped token separators;
    /// `boundary` is ignored and tokens stay escaped. Otherwise the text is split
    /// on `boundary`, never cutting an escape pair apart. Empty fragments are
    /// kept.
    pub fn tokenize(
        &self,
        text: &str,
        is_encoded: bool,
        boundary: &TitoTokenBoundary,
    ) -> Vec<String> {
        if is_encoded {
            return self
                .split_unescaped(text, self.token_separator())
                .into_iter()
                .map(str::to_string)
                .collect();
        }

        match boundary.regex() {
            Some(regex) => self.split_on_boundary(text, regex),
            None => vec![text.to_string()],
        }
    }

    /// Like `Regex::split`, except that a match starting on an escaped
    /// character is skipped so the pair stays in one token. Empty matches
    /// never cut.
    fn split_on_boundary(&self, text: &str, regex: &Regex) -> Vec<String> {
        let mut tokens = vec![];
        let mut last = 0;
        let mut at = 0;

        while let Some(found) = regex.find_at(text, at) {
            if found.is_empty() || self.is_escaped_at(text, found.start()) {
                match text[found.start()..].chars().next() {
                    Some(ch) => at = found.start() + ch.len_utf8(),
                    None => break,
                }
                continue;
            }

            tokens.push(text[last..found.start()].to_string());
            last = found.end();
            at = found.end();
        }

        tokens.push(text[last..].to_string());

        tokens
    }

    /// Escapes `text`, splits it on `boundary` and joins the tokens with the
    /// token separator, giving one key component that still splits back into
    /// the same tokens.
    pub fn encode(&self, text: &str, boundary: &TitoTokenBoundary) -> String {
        let escaped = self.escape(text);
        let tokens = self.tokenize(&escaped, false, boundary);

        tokens.join(&self.token_separator().to_string())
    }

    /// Splits an encoded token stream and unescapes each token.
    pub fn decode_tokens(&self, encoded: &str) -> Vec<String> {
        self.split_unescaped(encoded, self.token_separator())
            .into_iter()
            .map(|token| self.unescape(token))
            .collect()
    }
}

pub fn tokenize(text: &str, is_encoded: bool, boundary: &TitoTokenBoundary) -> Vec<String> {
    TitoKeyEncoder::DEFAULT.tokenize(text, is_encoded, boundary)
}

pub fn encode(text: &str, boundary: &TitoTokenBoundary) -> String {
    TitoKeyEncoder::DEFAULT.encode(text, boundary)
}

pub fn decode_tokens(encoded: &str) -> Vec<String> {
    TitoKeyEncoder::DEFAULT.decode_tokens(encoded)
}
