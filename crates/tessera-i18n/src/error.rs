//! Error types for translation loading

use fluent_syntax::parser::ParserError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering or loading translations.
///
/// Negotiation never fails: an unsupported locale is an empty bundle list.
#[derive(Error, Debug)]
pub enum I18nError {
    /// The translations root could not be enumerated
    #[error("Failed to discover translations under {}: {source}", .path.display())]
    Discovery {
        /// Directory being walked
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A resource document could not be read
    #[error("Failed to read resource file {}: {source}", .path.display())]
    ResourceRead {
        /// Offending document
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A resource document is not valid Fluent syntax
    #[error("Failed to parse Fluent resource {}: {:?}", .path.display(), .errors)]
    Parse {
        /// Offending document
        path: PathBuf,
        /// Parser diagnostics
        errors: Vec<ParserError>,
    },
}

impl I18nError {
    /// Path of the document or directory the error refers to
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Discovery { path, .. } | Self::ResourceRead { path, .. } | Self::Parse { path, .. } => {
                path
            }
        }
    }
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;
