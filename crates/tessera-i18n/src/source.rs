//! Discovery of translation documents

use crate::error::{I18nError, I18nResult};
use futures::future::{self, BoxFuture, FutureExt};
use std::borrow::Cow;
use std::fmt;
use std::future::Future;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

type Reader = Box<dyn FnOnce() -> BoxFuture<'static, std::io::Result<String>> + Send>;

/// A discovered document: its path and a deferred read of its contents.
///
/// Nothing is read until [`ResourceEntry::read`] is awaited.
pub struct ResourceEntry {
    path: PathBuf,
    reader: Reader,
}

impl fmt::Debug for ResourceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceEntry")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl ResourceEntry {
    /// Pair `path` with the function that reads it
    pub fn new<F, Fut>(path: impl Into<PathBuf>, read: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = std::io::Result<String>> + Send + 'static,
    {
        Self {
            path: path.into(),
            reader: Box::new(move || read().boxed()),
        }
    }

    /// Path the document was discovered at
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the raw document text
    pub async fn read(self) -> std::io::Result<String> {
        (self.reader)().await
    }
}

/// A finite, deterministic enumeration of translation documents below a base
/// location. Calling [`ResourceSource::discover`] again restarts discovery.
pub trait ResourceSource {
    /// Root the discovered paths are relative to
    fn base(&self) -> &Path;

    /// Enumerate documents in a stable order
    fn discover(&self) -> I18nResult<Vec<ResourceEntry>>;
}

/// Documents on disk, one subdirectory per locale.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    extension: String,
}

impl DirectorySource {
    /// Discover `*.ftl` files below `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: "ftl".to_string(),
        }
    }

    /// Use a different file extension
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    fn walk(&self) -> I18nResult<Vec<PathBuf>> {
        let mut found = Vec::new();

        // Symlinked directories are skipped, not followed.
        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|err| {
                let path = err.path().unwrap_or(self.root.as_path()).to_path_buf();
                I18nError::Discovery {
                    path,
                    source: err.into(),
                }
            })?;

            if entry.file_type().is_file()
                && entry.path().extension().is_some_and(|ext| ext == self.extension.as_str())
            {
                found.push(entry.into_path());
            }
        }

        Ok(found)
    }
}

impl ResourceSource for DirectorySource {
    fn base(&self) -> &Path {
        &self.root
    }

    fn discover(&self) -> I18nResult<Vec<ResourceEntry>> {
        let mut paths = self.walk()?;
        paths.sort();

        debug!(root = %self.root.display(), count = paths.len(), "Discovered translation files");

        Ok(paths
            .into_iter()
            .map(|path| {
                let target = path.clone();
                ResourceEntry::new(path, move || tokio::fs::read_to_string(target))
            })
            .collect())
    }
}

/// Documents held in memory, typically embedded with `include_str!`.
///
/// Discovery order is insertion order.
#[derive(Debug, Clone)]
pub struct MemorySource {
    base: PathBuf,
    files: Vec<(PathBuf, Cow<'static, str>)>,
}

impl MemorySource {
    /// Create an empty source rooted at `base`
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            files: Vec::new(),
        }
    }

    /// Build a source from static `(path, content)` pairs
    pub fn from_static(base: impl Into<PathBuf>, files: &[(&'static str, &'static str)]) -> Self {
        files
            .iter()
            .fold(Self::new(base), |source, (path, content)| source.with_file(*path, *content))
    }

    /// Add a document
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<Cow<'static, str>>) -> Self {
        self.files.push((path.into(), content.into()));
        self
    }
}

impl ResourceSource for MemorySource {
    fn base(&self) -> &Path {
        &self.base
    }

    fn discover(&self) -> I18nResult<Vec<ResourceEntry>> {
        Ok(self
            .files
            .iter()
            .map(|(path, content)| {
                let content = content.clone().into_owned();
                ResourceEntry::new(path.clone(), move || future::ready(Ok(content)))
            })
            .collect())
    }
}
