//! Loading of translation documents into a [`ResourceMap`]

use crate::error::{I18nError, I18nResult};
use crate::locale::LocaleId;
use crate::resource::{ResourceDocument, ResourceMap};
use crate::source::ResourceSource;
use futures::future::try_join_all;
use std::path::{Component, Path};
use tracing::{debug, info, instrument};

/// Locale a document belongs to: the first path segment below `base`.
///
/// Paths outside `base` are used as given.
pub fn locale_for_path(base: &Path, path: &Path) -> LocaleId {
    let relative = path.strip_prefix(base).unwrap_or(path);

    relative
        .components()
        .find_map(|component| match component {
            Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
            _ => None,
        })
        .unwrap_or_default()
        .into()
}

/// Reads and parses every document of a [`ResourceSource`].
#[derive(Debug, Clone)]
pub struct ResourceLoader<S> {
    source: S,
}

impl<S: ResourceSource> ResourceLoader<S> {
    /// Create a loader over `source`
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The underlying source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Load every discovered document.
    ///
    /// Reads run concurrently but documents are appended to their locale in
    /// discovery order. The first unreadable or malformed document aborts
    /// the load; no partial map is returned.
    #[instrument(skip(self), fields(base = %self.source.base().display()))]
    pub async fn load(&self) -> I18nResult<ResourceMap> {
        let base = self.source.base();
        let entries = self.source.discover()?;

        let pending = entries.into_iter().map(|entry| {
            let locale = locale_for_path(base, entry.path());
            let path = entry.path().to_path_buf();

            async move {
                let content = entry
                    .read()
                    .await
                    .map_err(|source| I18nError::ResourceRead {
                        path: path.clone(),
                        source,
                    })?;
                let document = ResourceDocument::parse(path, content)?;

                debug!(
                    locale = %locale,
                    path = %document.path().display(),
                    messages = document.message_ids().count(),
                    "Loaded translation document"
                );

                Ok::<_, I18nError>((locale, document))
            }
        });

        let resources: ResourceMap = try_join_all(pending).await?.into_iter().collect();

        info!(
            locales = resources.len(),
            documents = resources.document_count(),
            "Loaded translation resources"
        );

        Ok(resources)
    }
}
