//! Predicates for selecting tags

use crate::tag::{Tag, SYSTEM_TAGS};

/// Read access to the fields a tag predicate compares.
///
/// `value_field` distinguishes "no value field at all" (`None`, e.g. a bare
/// key used as a comparison point) from "a value field that is empty"
/// (`Some(None)`).
pub trait TagFields {
    /// The tag key
    fn key(&self) -> &str;

    /// The value field, if this side has one
    fn value_field(&self) -> Option<Option<&str>>;
}

impl TagFields for Tag {
    fn key(&self) -> &str {
        &self.key
    }

    fn value_field(&self) -> Option<Option<&str>> {
        Some(self.value.as_deref())
    }
}

impl TagFields for str {
    fn key(&self) -> &str {
        self
    }

    fn value_field(&self) -> Option<Option<&str>> {
        None
    }
}

impl TagFields for String {
    fn key(&self) -> &str {
        self
    }

    fn value_field(&self) -> Option<Option<&str>> {
        None
    }
}

impl<T: TagFields + ?Sized> TagFields for &T {
    fn key(&self) -> &str {
        (**self).key()
    }

    fn value_field(&self) -> Option<Option<&str>> {
        (**self).value_field()
    }
}

/// Predicate matching tags equal to `tag`.
///
/// Keys must match. Values are compared only when both sides have a value
/// field.
pub fn equals<A, B>(tag: &A) -> impl Fn(&B) -> bool + '_
where
    A: TagFields + ?Sized,
    B: TagFields + ?Sized,
{
    move |other| {
        let key = tag.key() == other.key();
        let value = match (tag.value_field(), other.value_field()) {
            (Some(left), Some(right)) => left == right,
            _ => true,
        };

        key && value
    }
}

/// Negate a predicate
pub fn not<T, P>(predicate: P) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    P: Fn(&T) -> bool,
{
    move |value| !predicate(value)
}

/// True unless the tag's key is a system tag.
///
/// Bare strings are treated as keys.
pub fn exclude_system_tags<T: TagFields + ?Sized>(tag: &T) -> bool {
    !SYSTEM_TAGS.contains(&tag.key())
}

/// User-assigned tags of a file, sorted
pub fn user_tags(tags: &[Tag]) -> Vec<Tag> {
    let mut tags = tags.to_vec();
    tags.sort();
    tags.retain(exclude_system_tags);
    tags
}
