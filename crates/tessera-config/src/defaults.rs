//! Default values.

use crate::schema::{I18nSettings, LoggingSettings};
use std::path::PathBuf;

/// Default translations directory.
pub const DEFAULT_TRANSLATIONS_DIR: &str = "translations";

/// Default log filter.
pub const DEFAULT_LOG_LEVEL: &str = "info";

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            translations_dir: PathBuf::from(DEFAULT_TRANSLATIONS_DIR),
            default_locale: "en".to_string(),
            use_isolating: true,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json: false,
            file: None,
        }
    }
}
