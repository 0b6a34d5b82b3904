use crate::{
    types::{TitoKeyFamily, TitoParsedKey, TitoSearchKey},
    TitoKeyEncoder,
};

impl TitoKeyEncoder {
    pub fn build_key<I, S>(&self, components: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut key = String::new();

        for (i, component) in components.into_iter().enumerate() {
            if i > 0 {
                key.push(self.key_separator());
            }
            key.push_str(&self.escape(component.as_ref()));
        }

        key
    }

    /// Same as [`TitoKeyEncoder::build_key`] with a trailing key separator, so
    /// a prefix scan only hits keys whose leading components match exactly.
    pub fn build_key_prefix<I, S>(&self, components: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut key = self.build_key(components);
        key.push(self.key_separator());
        key
    }

    pub fn build_search_key(
        &self,
        prefix: &str,
        field: &str,
        value: &str,
        filter: Option<&str>,
        filter_key: Option<&str>,
    ) -> String {
        self.build_key([
            prefix,
            field,
            value,
            filter.unwrap_or(""),
            filter_key.unwrap_or(""),
        ])
    }

    pub fn build_family_key(
        &self,
        family: TitoKeyFamily,
        field: &str,
        value: &str,
        filter: Option<&str>,
        filter_key: Option<&str>,
    ) -> String {
        self.build_search_key(family.prefix(), field, value, filter, filter_key)
    }

    pub fn break_key(&self, key: &str) -> Vec<String> {
        self.split_unescaped(key, self.key_separator())
            .into_iter()
            .map(|component| self.unescape(component))
            .collect()
    }

    pub fn parse_key(&self, key: &str) -> TitoParsedKey {
        let mut components = self.break_key(key).into_iter();
        let prefix = components.next().unwrap_or_default();

        TitoParsedKey {
            prefix,
            parts: components.collect(),
        }
    }

    /// Maps positions 0 to 4 onto the named slots. Never fails: short keys
    /// leave slots empty and extra components are kept in `trailing`.
    pub fn parse_search_key(&self, key: &str) -> TitoSearchKey {
        let mut components = self.break_key(key).into_iter();

        let search_key = TitoSearchKey {
            prefix: components.next().unwrap_or_default(),
            field: components.next(),
            value: components.next(),
            filter: components.next(),
            filter_key: components.next(),
            trailing: components.collect(),
        };

        if !search_key.trailing.is_empty() {
            log::debug!(
                "Search key with prefix {:?} has {} trailing components",
                search_key.prefix,
                search_key.trailing.len()
            );
        }

        search_key
    }

    pub fn key_has_prefix(&self, key: &str, prefix: &str) -> bool {
        let prefix = self.escape(prefix);

        key.len() > prefix.len()
            && key.starts_with(&prefix)
            && key[prefix.len()..].starts_with(self.key_separator())
    }
}

pub fn build_key<I, S>(components: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    TitoKeyEncoder::DEFAULT.build_key(components)
}

/// Variadic form of [`build_key`]: `tito_key!("TF", field, value)`.
#[macro_export]
macro_rules! tito_key {
    ($($component:expr),* $(,)?) => {
        $crate::build_key::<_, &str>([$(::std::convert::AsRef::<str>::as_ref(&$component)),*])
    };
}

pub fn build_key_prefix<I, S>(components: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    TitoKeyEncoder::DEFAULT.build_key_prefix(components)
}

pub fn build_search_key(
    prefix: &str,
    field: &str,
    value: &str,
    filter: Option<&str>,
    filter_key: Option<&str>,
) -> String {
    TitoKeyEncoder::DEFAULT.build_search_key(prefix, field, value, filter, filter_key)
}

pub fn build_term_frequency_key(
    field: &str,
    value: &str,
    filter: Option<&str>,
    filter_key: Option<&str>,
) -> String {
    TitoKeyEncoder::DEFAULT.build_family_key(
        TitoKeyFamily::TermFrequency,
        field,
        value,
        filter,
        filter_key,
    )
}

pub fn build_reverse_index_key(
    field: &str,
    value: &str,
    filter: Option<&str>,
    filter_key: Option<&str>,
) -> String {
    TitoKeyEncoder::DEFAULT.build_family_key(
        TitoKeyFamily::ReverseIndex,
        field,
        value,
        filter,
        filter_key,
    )
}

pub fn build_field_info_key(
    field: &str,
    value: &str,
    filter: Option<&str>,
    filter_key: Option<&str>,
) -> String {
    TitoKeyEncoder::DEFAULT.build_family_key(
        TitoKeyFamily::FieldInfo,
        field,
        value,
        filter,
        filter_key,
    )
}

pub fn break_key(key: &str) -> Vec<String> {
    TitoKeyEncoder::DEFAULT.break_key(key)
}

pub fn parse_key(key: &str) -> TitoParsedKey {
    TitoKeyEncoder::DEFAULT.parse_key(key)
}

pub fn parse_search_key(key: &str) -> TitoSearchKey {
    TitoKeyEncoder::DEFAULT.parse_search_key(key)
}

pub fn key_has_prefix(key: &str, prefix: &str) -> bool {
    TitoKeyEncoder::DEFAULT.key_has_prefix(key, prefix)
}
