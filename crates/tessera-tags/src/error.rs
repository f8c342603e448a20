//! Errors for validated tag parsing

use thiserror::Error;

/// Rejections raised by [`Tag::parse`](crate::Tag::parse) and
/// [`Tag::parse_public`](crate::Tag::parse_public).
///
/// The plain codec ([`split`](crate::split)) never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagParseError {
    /// Empty key, forbidden character or query keyword
    #[error("parse failed: '{0}' is not a valid tag")]
    Invalid(String),

    /// Key is reserved for system tags
    #[error("parse failed: key '{0}' is reserved")]
    Reserved(String),
}
