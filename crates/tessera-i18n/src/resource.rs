//! Parsed translation documents grouped by locale

use crate::error::{I18nError, I18nResult};
use crate::locale::LocaleId;
use fluent_bundle::FluentResource;
use fluent_syntax::ast;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// One parsed `.ftl` document.
///
/// The parsed resource is shared, so a document can be layered into any
/// number of bundles without re-parsing.
#[derive(Clone)]
pub struct ResourceDocument {
    path: PathBuf,
    resource: Arc<FluentResource>,
}

impl fmt::Debug for ResourceDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceDocument")
            .field("path", &self.path)
            .field("messages", &self.message_ids().count())
            .finish()
    }
}

impl ResourceDocument {
    /// Parse `source` as Fluent. Any syntax error rejects the whole document.
    pub fn parse(path: impl Into<PathBuf>, source: impl Into<String>) -> I18nResult<Self> {
        let path = path.into();
        let resource = FluentResource::try_new(source.into())
            .map_err(|(_, errors)| I18nError::Parse {
                path: path.clone(),
                errors,
            })?;

        Ok(Self {
            path,
            resource: Arc::new(resource),
        })
    }

    /// Path the document was discovered at
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Shared handle to the parsed resource
    pub fn resource(&self) -> Arc<FluentResource> {
        Arc::clone(&self.resource)
    }

    /// Message ids defined by this document, in source order
    pub fn message_ids(&self) -> impl Iterator<Item = &str> {
        self.resource.entries().filter_map(|entry| match entry {
            ast::Entry::Message(message) => Some(message.id.name),
            _ => None,
        })
    }

    /// Whether the document defines `id`
    pub fn defines(&self, id: &str) -> bool {
        self.message_ids().any(|defined| defined == id)
    }
}

/// Documents grouped by locale, each list kept in discovery order.
///
/// Entries are only created by [`ResourceMap::push`], so every locale present
/// has at least one document.
#[derive(Debug, Clone, Default)]
pub struct ResourceMap {
    locales: BTreeMap<LocaleId, Vec<ResourceDocument>>,
}

impl ResourceMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a document after the ones already registered for `locale`
    pub fn push(&mut self, locale: impl Into<LocaleId>, document: ResourceDocument) {
        self.locales.entry(locale.into()).or_default().push(document);
    }

    /// Documents for `locale` in discovery order
    pub fn get(&self, locale: &str) -> Option<&[ResourceDocument]> {
        self.locales.get(locale).map(Vec::as_slice)
    }

    /// Whether at least one document exists for `locale`
    pub fn supports(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Locales with at least one document
    pub fn locales(&self) -> impl Iterator<Item = &LocaleId> {
        self.locales.keys()
    }

    /// Iterate `(locale, documents)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&LocaleId, &[ResourceDocument])> {
        self.locales
            .iter()
            .map(|(locale, documents)| (locale, documents.as_slice()))
    }

    /// Number of locales
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    /// Whether no locale has any document
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Total number of documents across all locales
    pub fn document_count(&self) -> usize {
        self.locales.values().map(Vec::len).sum()
    }
}

impl<L: Into<LocaleId>> FromIterator<(L, ResourceDocument)> for ResourceMap {
    fn from_iter<I: IntoIterator<Item = (L, ResourceDocument)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (locale, document) in iter {
            map.push(locale, document);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(path: &str, source: &str) -> ResourceDocument {
        ResourceDocument::parse(path, source).unwrap()
    }

    #[test]
    fn test_parse_lists_message_ids() {
        let document = doc("en/home.ftl", "title = Files\n-brand = Tessera\nupload = Upload\n");

        assert_eq!(document.path(), Path::new("en/home.ftl"));
        assert_eq!(document.message_ids().collect::<Vec<_>>(), vec!["title", "upload"]);
        assert!(document.defines("upload"));
        assert!(!document.defines("brand"));
    }

    #[test]
    fn test_parse_error_names_the_path() {
        let err = ResourceDocument::parse("en/broken.ftl", "this is not = { fluent\n").unwrap_err();

        assert!(matches!(err, I18nError::Parse { ref errors, .. } if !errors.is_empty()));
        assert_eq!(err.path(), Path::new("en/broken.ftl"));
    }

    #[test]
    fn test_push_keeps_discovery_order() {
        let mut map = ResourceMap::new();
        map.push("en", doc("en/a.ftl", "a = A\n"));
        map.push("fr", doc("fr/a.ftl", "a = A\n"));
        map.push("en", doc("en/b.ftl", "b = B\n"));

        let paths: Vec<_> = map.get("en").unwrap().iter().map(ResourceDocument::path).collect();
        assert_eq!(paths, vec![Path::new("en/a.ftl"), Path::new("en/b.ftl")]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.document_count(), 3);
    }

    #[test]
    fn test_empty_map_supports_nothing() {
        let map = ResourceMap::new();
        assert!(map.is_empty());
        assert!(!map.supports("en"));
        assert!(map.get("en").is_none());
    }

    #[test]
    fn test_collect_from_pairs() {
        let map: ResourceMap = vec![("de", doc("de/a.ftl", "a = A\n"))].into_iter().collect();
        assert!(map.supports("de"));
        assert_eq!(map.locales().map(LocaleId::as_str).collect::<Vec<_>>(), vec!["de"]);
    }
}
