use crate::TitoKeyEncoder;

impl TitoKeyEncoder {
    fn is_reserved(&self, ch: char) -> bool {
        ch == self.escape_char() || ch == self.token_separator() || ch == self.key_separator()
    }

    /// Prefixes every escape character and both separators with the escape
    /// character. Escape characters are doubled too, so text that already
    /// contains them still round-trips.
    pub fn escape(&self, raw: &str) -> String {
        let mut result = String::with_capacity(raw.len() * 2);

        for ch in raw.chars() {
            if self.is_reserved(ch) {
                result.push(self.escape_char());
            }
            result.push(ch);
        }

        result
    }

    /// Exact inverse of [`TitoKeyEncoder::escape`].
    ///
    /// An escape character in front of anything but a reserved character, or
    /// a dangling one at the end, is kept as is.
    pub fn unescape(&self, escaped: &str) -> String {
        let mut result = String::with_capacity(escaped.len());
        let mut chars = escaped.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch == self.escape_char() {
                if let Some(&next) = chars.peek() {
                    if self.is_reserved(next) {
                        result.push(next);
                        chars.next();
                        continue;
                    }
                }
            }
            result.push(ch);
        }

        result
    }
}

pub fn escape(raw: &str) -> String {
    TitoKeyEncoder::DEFAULT.escape(raw)
}

pub fn unescape(escaped: &str) -> String {
    TitoKeyEncoder::DEFAULT.unescape(escaped)
}
