//! # Tessera I18n
//!
//! Translation support built on the Fluent localization system:
//!
//! - discovery and loading of `.ftl` documents grouped by locale directory
//! - exact-match ("lookup") locale negotiation with a default fallback
//! - per-locale bundles layering every document registered for a locale
//! - a [`Localizer`] that degrades to raw message ids when nothing matches
//!
//! # Example
//!
//! ```no_run
//! use tessera_i18n::{DirectorySource, Localizer, Negotiator, ResourceLoader};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let resources = ResourceLoader::new(DirectorySource::new("translations"))
//!     .load()
//!     .await?;
//!
//! let bundles = Negotiator::new("en").negotiate(&resources, &["fr", "en"]);
//! let i18n = Localizer::new(bundles);
//! println!("{}", i18n.localize("home-title"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bundle;
pub mod error;
pub mod loader;
pub mod locale;
pub mod localizer;
pub mod negotiate;
pub mod resource;
pub mod source;

pub use bundle::Bundle;
pub use error::{I18nError, I18nResult};
pub use loader::{locale_for_path, ResourceLoader};
pub use locale::{parse_language_header, LocaleId, DEFAULT_LOCALE};
pub use localizer::{args_from_pairs, Localizer};
pub use negotiate::{negotiate, negotiate_locales, Negotiator};
pub use resource::{ResourceDocument, ResourceMap};
pub use source::{DirectorySource, MemorySource, ResourceEntry, ResourceSource};

// Re-export commonly used Fluent types
pub use fluent::{fluent_args, FluentArgs, FluentValue};
