//! The structured tag value

use crate::codec;
use crate::error::TagParseError;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Keys populated by the platform rather than by users.
pub const SYSTEM_TAGS: &[&str] = &["name", "content_type", "size", "ext"];

const QUERY_KEYWORDS: &[&str] = &["AND", "OR"];
const INVALID_CHARACTERS: &[char] = &[';', '(', ')'];

/// A `key` or `key:value` annotation on a file.
///
/// Ordering is by key, then value, with key-only tags first.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tag {
    /// Text before the first `:`
    pub key: String,
    /// Text after the first `:`, if there was one
    #[serde(default)]
    pub value: Option<String>,
}

impl Tag {
    /// A key-only tag
    pub fn key<K: Into<String>>(key: K) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }

    /// A tag with both key and value
    pub fn full<K: Into<String>, V: Into<String>>(key: K, value: V) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// Parse user input, rejecting tokens that cannot be stored or queried.
    ///
    /// On top of [`split`](crate::split) this refuses empty keys, the
    /// characters `;`, `(` and `)`, and tokens containing the query keywords
    /// `AND` or `OR`.
    pub fn parse<S: AsRef<str>>(expr: S) -> Result<Self, TagParseError> {
        let expr = expr.as_ref();

        if expr.contains(INVALID_CHARACTERS) {
            return Err(TagParseError::Invalid(expr.to_string()));
        }

        if QUERY_KEYWORDS.iter().any(|keyword| expr.contains(keyword)) {
            return Err(TagParseError::Invalid(expr.to_string()));
        }

        let tag = codec::split(expr);
        if tag.key.is_empty() {
            debug!(expr, "Rejected tag with empty key");
            return Err(TagParseError::Invalid(expr.to_string()));
        }

        Ok(tag)
    }

    /// Like [`Tag::parse`], also rejecting system tag keys
    pub fn parse_public<S: AsRef<str>>(expr: S) -> Result<Self, TagParseError> {
        let tag = Self::parse(expr)?;
        if tag.is_system() {
            debug!(key = %tag.key, "Rejected system tag key in user input");
            return Err(TagParseError::Reserved(tag.key));
        }

        Ok(tag)
    }

    /// Whether the key is one of [`SYSTEM_TAGS`]
    pub fn is_system(&self) -> bool {
        SYSTEM_TAGS.contains(&self.key.as_str())
    }

    /// Whether the tag was assigned by a user
    #[inline]
    pub fn is_public(&self) -> bool {
        !self.is_system()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)?;
        if let Some(value) = &self.value {
            write!(f, ":{value}")?;
        }

        Ok(())
    }
}

impl FromStr for Tag {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(codec::split(s))
    }
}

impl PartialEq<str> for Tag {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl PartialEq<&str> for Tag {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

impl From<(String, Option<String>)> for Tag {
    fn from((key, value): (String, Option<String>)) -> Self {
        Self { key, value }
    }
}

impl From<Tag> for (String, Option<String>) {
    fn from(tag: Tag) -> Self {
        (tag.key, tag.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_valid_tags() {
        for (s, key, value) in [
            ("example", "example", None),
            ("hello:world", "hello", Some("world")),
            ("hello:world:what", "hello", Some("world:what")),
            ("food:🥐", "food", Some("🥐")),
            ("hello:tessera tests", "hello", Some("tessera tests")),
        ] {
            let tag = Tag::parse(s).unwrap();
            assert_eq!(tag.key, key);
            assert_eq!(tag.value.as_deref(), value);
            assert_eq!(tag, s);
        }
    }

    #[test]
    fn test_rejects_invalid_tags() {
        for s in ["", ":world", "hello;world:what", "hello:w(orld:what)", "hello:worldANDtest", "a:b OR c"] {
            assert_eq!(Tag::parse(s), Err(TagParseError::Invalid(s.to_string())), "{s}");
        }
    }

    #[test]
    fn test_public_parse_rejects_system_keys() {
        for key in SYSTEM_TAGS {
            assert_eq!(
                Tag::parse_public(format!("{key}:x")),
                Err(TagParseError::Reserved((*key).to_string()))
            );
        }
        assert!(Tag::parse_public("project:tessera").is_ok());
    }

    #[test]
    fn test_system_and_public() {
        assert!(Tag::full("ext", "pdf").is_system());
        assert!(Tag::key("holiday").is_public());
    }

    #[test]
    fn test_ordering_puts_key_only_first() {
        let mut tags = vec![Tag::full("a", "2"), Tag::key("b"), Tag::full("a", "1"), Tag::key("a")];
        tags.sort();
        assert_eq!(
            tags,
            vec![Tag::key("a"), Tag::full("a", "1"), Tag::full("a", "2"), Tag::key("b")]
        );
    }

    #[test]
    fn test_from_str_never_fails() {
        let tag: Tag = "".parse().unwrap();
        assert_eq!(tag, Tag::key(""));
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Tag::full("hello", "world")).unwrap();
        assert_eq!(json, r#"{"key":"hello","value":"world"}"#);

        let tag: Tag = serde_json::from_str(r#"{"key":"test"}"#).unwrap();
        assert_eq!(tag, Tag::key("test"));
        let tag: Tag = serde_json::from_str(r#"{"key":"test","value":null}"#).unwrap();
        assert_eq!(tag, Tag::key("test"));
    }
}
