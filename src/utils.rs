use crate::{types::TitoKeyRange, TitoKeyEncoder};

fn next_char(ch: char) -> Option<char> {
    match ch {
        '\u{D7FF}' => Some('\u{E000}'),
        char::MAX => None,
        _ => char::from_u32(ch as u32 + 1),
    }
}

fn previous_char(ch: char) -> Option<char> {
    match ch {
        '\u{E000}' => Some('\u{D7FF}'),
        '\0' => None,
        _ => char::from_u32(ch as u32 - 1),
    }
}

/// Smallest string sorting after every string that starts with `payload`.
/// `None` when `payload` is empty or made only of `char::MAX`.
pub fn next_string_lexicographically(payload: &str) -> Option<String> {
    let mut chars: Vec<char> = payload.chars().collect();

    while let Some(last) = chars.pop() {
        if let Some(next) = next_char(last) {
            chars.push(next);
            return Some(chars.into_iter().collect());
        }
    }

    None
}

pub fn previous_string_lexicographically(payload: &str) -> String {
    let mut chars: Vec<char> = payload.chars().collect();

    if let Some(last) = chars.pop() {
        if let Some(previous) = previous_char(last) {
            chars.push(previous);
        }
    }

    chars.into_iter().collect()
}

impl TitoKeyEncoder {
    /// Scan range covering every key whose leading components are `components`.
    pub fn prefix_range<I, S>(&self, components: I) -> TitoKeyRange
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start = self.build_key_prefix(components);
        let end = next_string_lexicographically(&start);

        TitoKeyRange { start, end }
    }
}

pub fn prefix_range<I, S>(components: I) -> TitoKeyRange
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    TitoKeyEncoder::DEFAULT.prefix_range(components)
}
