//! Conversions between raw tokens and structured tags

use crate::tag::Tag;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Split a raw token at its first `:`.
///
/// Total: every string decomposes, the empty string into an empty key.
pub fn split(raw: &str) -> Tag {
    match raw.split_once(':') {
        Some((key, value)) => Tag::full(key, value),
        None => Tag::key(raw),
    }
}

/// Render a tag back into its token form
pub fn concat(tag: &Tag) -> String {
    match &tag.value {
        Some(value) => format!("{}:{value}", tag.key),
        None => tag.key.clone(),
    }
}

/// A tag as it arrives from callers: either a raw token or an already
/// structured record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnyTag {
    /// `key` or `key:value` text
    Raw(String),
    /// `{key, value}` record
    Structured(Tag),
}

impl AnyTag {
    /// Structured form, splitting raw tokens
    pub fn into_tag(self) -> Tag {
        match self {
            Self::Raw(raw) => split(&raw),
            Self::Structured(tag) => tag,
        }
    }

    /// Token form, rendering structured records
    pub fn to_token(&self) -> Cow<'_, str> {
        match self {
            Self::Raw(raw) => Cow::Borrowed(raw.as_str()),
            Self::Structured(tag) => Cow::Owned(concat(tag)),
        }
    }
}

impl From<&str> for AnyTag {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_string())
    }
}

impl From<String> for AnyTag {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}

impl From<Tag> for AnyTag {
    fn from(tag: Tag) -> Self {
        Self::Structured(tag)
    }
}

impl From<AnyTag> for Tag {
    fn from(tag: AnyTag) -> Self {
        tag.into_tag()
    }
}
