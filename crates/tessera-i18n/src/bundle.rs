//! Per-locale message bundles

use crate::locale::LocaleId;
use crate::resource::ResourceDocument;
use fluent::{FluentArgs, FluentBundle, FluentResource};
use fluent_bundle::FluentError;
use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Messages for a single locale, layered from one or more documents.
///
/// When several documents define the same message id the one registered
/// first is kept; later definitions are reported and ignored.
pub struct Bundle {
    locale: LocaleId,
    sources: Vec<PathBuf>,
    inner: FluentBundle<Arc<FluentResource>>,
}

impl fmt::Debug for Bundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bundle")
            .field("locale", &self.locale)
            .field("sources", &self.sources)
            .finish_non_exhaustive()
    }
}

impl Bundle {
    /// Create an empty bundle for `locale`
    pub fn new(locale: impl Into<LocaleId>) -> Self {
        let locale = locale.into();
        let inner = FluentBundle::new(vec![locale.language_identifier()]);

        Self {
            locale,
            sources: Vec::new(),
            inner,
        }
    }

    /// Create a bundle pre-loaded with `documents`, registered in order
    pub fn with_documents(
        locale: impl Into<LocaleId>,
        documents: &[ResourceDocument],
        use_isolating: bool,
    ) -> Self {
        let mut bundle = Self::new(locale);
        bundle.set_use_isolating(use_isolating);
        for document in documents {
            bundle.add_document(document);
        }

        debug!(
            locale = %bundle.locale,
            documents = bundle.sources.len(),
            "Built translation bundle"
        );
        bundle
    }

    /// Toggle Unicode isolation marks around placeables
    pub fn set_use_isolating(&mut self, value: bool) {
        self.inner.set_use_isolating(value);
    }

    /// Layer `document` under the ones already registered.
    ///
    /// Returns the ids this document defines that were already provided by
    /// an earlier document.
    pub fn add_document(&mut self, document: &ResourceDocument) -> Vec<String> {
        self.sources.push(document.path().to_path_buf());

        let Err(errors) = self.inner.add_resource(document.resource()) else {
            return Vec::new();
        };

        errors
            .into_iter()
            .filter_map(|err| match err {
                FluentError::Overriding { kind, id } => {
                    warn!(
                        locale = %self.locale,
                        path = %document.path().display(),
                        "Ignoring {kind:?} '{id}', already defined by an earlier document"
                    );
                    Some(id)
                }
                other => {
                    error!(locale = %self.locale, "Failed to add resource: {other}");
                    None
                }
            })
            .collect()
    }

    /// Locale this bundle serves
    pub fn locale(&self) -> &LocaleId {
        &self.locale
    }

    /// Paths of the registered documents, in registration order
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// Whether `id` resolves to a message. `message.attribute` ids check the message
    pub fn has_message(&self, id: &str) -> bool {
        let (message, _) = split_key(id);
        self.inner.has_message(message)
    }

    /// Format `key`, which is either `message` or `message.attribute`.
    ///
    /// Unknown attributes fall back to the message value. Returns `None`
    /// when the message is missing or has no value.
    pub fn format<'a>(&'a self, key: &str, args: Option<&'a FluentArgs<'_>>) -> Option<Cow<'a, str>> {
        let (id, attribute) = split_key(key);
        let message = self.inner.get_message(id)?;

        let pattern = attribute
            .and_then(|attribute| message.get_attribute(attribute))
            .map(|attribute| attribute.value())
            .or_else(|| message.value())?;

        let mut errors = Vec::new();
        let formatted = self.inner.format_pattern(pattern, args, &mut errors);
        for err in errors {
            error!(locale = %self.locale, "Failed to format translation {key}: {err}");
        }

        Some(formatted)
    }

    /// The underlying Fluent bundle
    pub fn fluent(&self) -> &FluentBundle<Arc<FluentResource>> {
        &self.inner
    }

    /// Document path for diagnostics
    pub fn first_source(&self) -> Option<&Path> {
        self.sources.first().map(PathBuf::as_path)
    }
}

fn split_key(key: &str) -> (&str, Option<&str>) {
    match key.split_once('.') {
        Some((message, attribute)) => (message, Some(attribute)),
        None => (key, None),
    }
}
