use crate::TitoKeyEncoder;

impl TitoKeyEncoder {
    /// Splits `text` on every `separator` that is not escaped.
    ///
    /// A separator is escaped when the run of escape characters right before it
    /// has odd length; an even run cancels out pairwise. Always returns at least
    /// one fragment, and fragments keep their escape characters.
    pub fn split_unescaped<'a>(&self, text: &'a str, separator: char) -> Vec<&'a str> {
        let escape_char = self.escape_char();

        // An escape character used as its own separator cannot be escaped.
        if separator == escape_char || !contains_pair(text, escape_char, separator) {
            return text.split(separator).collect();
        }

        log::trace!("Escape-aware split on {:?} over {} bytes", separator, text.len());

        scan_unescaped(text, escape_char, separator)
    }

    /// True when the character starting at byte `index` follows an odd run of
    /// escape characters.
    pub(crate) fn is_escaped_at(&self, text: &str, index: usize) -> bool {
        let run = text[..index]
            .chars()
            .rev()
            .take_while(|&ch| ch == self.escape_char())
            .count();

        run % 2 == 1
    }
}

fn scan_unescaped(text: &str, escape_char: char, separator: char) -> Vec<&str> {
    let mut fragments = vec![];
    let mut start = 0;
    let mut escaped = false;

    for (i, ch) in text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }

        if ch == escape_char {
            escaped = true;
        } else if ch == separator {
            fragments.push(&text[start..i]);
            start = i + ch.len_utf8();
        }
    }

    fragments.push(&text[start..]);

    fragments
}

fn contains_pair(text: &str, first: char, second: char) -> bool {
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == first && chars.peek() == Some(&second) {
            return true;
        }
    }

    false
}

pub fn split_unescaped(text: &str, separator: char) -> Vec<&str> {
    TitoKeyEncoder::DEFAULT.split_unescaped(text, separator)
}
