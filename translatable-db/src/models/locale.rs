use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use translatable_api::TranslatableError;

pub const MAX_LOCALE_LEN: usize = 16;

/// # Documentation
/// Locale identifier tagging a translation record, e.g. `en`, `fr`, `pt-BR`.
///
/// Non-empty, at most 16 characters, ASCII alphanumerics plus `-` and `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(HeaplessString<MAX_LOCALE_LEN>);

impl Locale {
    pub fn new(value: &str) -> Result<Self, TranslatableError> {
        let valid = !value.is_empty()
            && value
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(TranslatableError::InvalidLocale(value.to_string()));
        }
        HeaplessString::from_str(value).map(Locale).map_err(|_| {
            TranslatableError::InvalidLocale(format!(
                "{value} (max {MAX_LOCALE_LEN} chars)"
            ))
        })
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for Locale {
    type Err = TranslatableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::new(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = TranslatableError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Locale::new(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.as_str().to_string()
    }
}

impl PartialEq<str> for Locale {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Locale {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
