//! Configuration loading utilities

use crate::schema::Settings;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file {}: {source}", .path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParse {
        /// Variable name
        var: String,
        /// Underlying parse error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration validation error
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Environment variable pointing at the configuration file
pub const CONFIG_PATH_VAR: &str = "TESSERA_CONFIG_PATH";

/// Files probed, in order, when no path is given
pub const DEFAULT_CONFIG_FILES: &[&str] = &["tessera.yaml", "tessera.yml"];

/// Configuration loader for the application
#[derive(Debug)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from `TESSERA_CONFIG_PATH`, then the default files, then defaults,
    /// applying environment overrides in every case
    pub fn load() -> Result<Settings, ConfigError> {
        if let Ok(path) = env::var(CONFIG_PATH_VAR) {
            return Self::load_from_file(path);
        }

        if let Some(path) = DEFAULT_CONFIG_FILES.iter().map(Path::new).find(|p| p.exists()) {
            return Self::load_from_file(path);
        }

        debug!("No configuration file found, using defaults");
        Self::finish(Settings::default(), |var| env::var(var).ok())
    }

    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Settings, ConfigError> {
        let settings = Self::read_file(path.as_ref())?;
        Self::finish(settings, |var| env::var(var).ok())
    }

    /// Parse a YAML file without applying overrides or validation
    pub fn read_file(path: &Path) -> Result<Settings, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let settings = Self::from_yaml(&content)?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(settings)
    }

    /// Parse YAML text; missing sections take their defaults
    pub fn from_yaml(content: &str) -> Result<Settings, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Settings::default());
        }

        Ok(serde_yaml::from_str(content)?)
    }

    /// Apply overrides from `lookup`, then validate
    pub fn finish<F>(mut settings: Settings, lookup: F) -> Result<Settings, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::apply_overrides(&mut settings, lookup)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Apply `TESSERA_*` overrides read through `lookup`
    pub fn apply_overrides<F>(settings: &mut Settings, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("TESSERA_TRANSLATIONS_DIR") {
            settings.i18n.translations_dir = PathBuf::from(dir);
        }

        if let Some(locale) = lookup("TESSERA_DEFAULT_LOCALE") {
            settings.i18n.default_locale = locale;
        }

        if let Some(isolating) = lookup("TESSERA_USE_ISOLATING") {
            settings.i18n.use_isolating = isolating
                .trim()
                .parse()
                .map_err(|e| ConfigError::EnvParse {
                    var: "TESSERA_USE_ISOLATING".to_string(),
                    source: Box::new(e),
                })?;
        }

        if let Some(level) = lookup("TESSERA_LOG_LEVEL") {
            settings.logging.level = level;
        }

        Ok(())
    }
}
