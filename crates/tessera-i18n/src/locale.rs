//! Locale identifiers and preference parsing

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use unic_langid::LanguageIdentifier;

/// Locale served when none of the requested locales is available.
pub const DEFAULT_LOCALE: &str = "en";

/// Opaque locale identifier, usually the name of a translations subdirectory.
///
/// Two identifiers are equal only when their strings are identical; no case
/// folding or subtag matching is applied.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleId(String);

impl LocaleId {
    /// Create a locale identifier from any string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Language identifier handed to Fluent for plural rules and number formatting.
    ///
    /// Directory names that are not valid BCP-47 tags map to the undetermined
    /// language (`und`).
    pub fn language_identifier(&self) -> LanguageIdentifier {
        self.0.parse().unwrap_or_default()
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocaleId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for LocaleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for LocaleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LocaleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for LocaleId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LocaleId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Parse an `Accept-Language` style header into an ordered list of locales.
///
/// Quality weights are dropped and header order is kept, so
/// `"fr-CH, fr;q=0.9, en;q=0.8"` yields `["fr-CH", "fr", "en"]`.
pub fn parse_language_header(value: &str) -> Vec<String> {
    value
        .split(',')
        .filter_map(|entry| entry.split(';').next())
        .map(str::trim)
        .filter(|locale| !locale.is_empty())
        .map(ToString::to_string)
        .collect()
}
