//! Configuration schema definitions

use crate::loader::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tessera_common::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Translation settings.
    pub i18n: I18nSettings,
    /// Logging settings.
    pub logging: LoggingSettings,
}

/// Translation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nSettings {
    /// Directory holding one subdirectory of `.ftl` files per locale.
    pub translations_dir: PathBuf,
    /// Locale used when no requested locale is available.
    pub default_locale: String,
    /// Wrap placeables in Unicode isolation marks.
    pub use_isolating: bool,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive, e.g. `info` or `tessera_i18n=debug`.
    pub level: String,
    /// Emit JSON lines.
    pub json: bool,
    /// Write logs to this file instead of stderr.
    pub file: Option<PathBuf>,
}

impl Settings {
    /// Validates the settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.i18n.default_locale.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "i18n.default_locale cannot be empty".to_string(),
            ));
        }

        if self.i18n.translations_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "i18n.translations_dir cannot be empty".to_string(),
            ));
        }

        if let Err(err) = EnvFilter::try_new(&self.logging.level) {
            return Err(ConfigError::Invalid(format!(
                "logging.level '{}' is not a valid filter: {err}",
                self.logging.level
            )));
        }

        Ok(())
    }
}

impl LoggingSettings {
    /// Logging configuration for [`tessera_common::init_logging`]
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            json_format: self.json,
            file_path: self.file.clone(),
            ..LoggingConfig::default()
        }
    }
}
