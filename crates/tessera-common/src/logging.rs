//! Structured logging infrastructure for tessera

use std::path::PathBuf;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Errors raised while installing the global subscriber
#[derive(thiserror::Error, Debug)]
pub enum LoggingError {
    /// The level string is not a valid `EnvFilter` directive
    #[error("Invalid log filter '{filter}': {source}")]
    InvalidFilter {
        /// The rejected filter
        filter: String,
        /// Underlying parse error
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    /// A global subscriber has already been installed
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "tessera_i18n=debug")
    pub level: String,
    /// Emit one JSON object per event
    pub json_format: bool,
    /// Use the multi-line pretty formatter with colors
    pub pretty_format: bool,
    /// Optional file path for log output
    pub file_path: Option<PathBuf>,
    /// Whether to include span open/close events
    pub include_spans: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            pretty_format: false,
            file_path: None,
            include_spans: false,
            include_targets: true,
        }
    }
}

impl LoggingConfig {
    /// Builds the `EnvFilter`, letting `RUST_LOG` win over the configured level
    pub fn env_filter(&self) -> Result<EnvFilter, LoggingError> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }

        EnvFilter::try_new(&self.level).map_err(|source| LoggingError::InvalidFilter {
            filter: self.level.clone(),
            source,
        })
    }

    fn span_events(&self) -> FmtSpan {
        if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }
}

/// Initialize the tracing subscriber with the given configuration
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let env_filter = config.env_filter()?;
    let registry = tracing_subscriber::registry().with(env_filter);

    let file_appender = config.file_path.as_ref().map(|path| {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), PathBuf::from);
        let name = path
            .file_name()
            .map_or_else(|| "tessera.log".into(), ToOwned::to_owned);
        tracing_appender::rolling::never(dir, name)
    });

    if config.json_format {
        let layer = fmt::layer()
            .json()
            .with_span_events(config.span_events())
            .with_target(config.include_targets);

        match file_appender {
            Some(file) => registry.with(layer.with_writer(file)).try_init()?,
            None => registry.with(layer).try_init()?,
        }
    } else if config.pretty_format {
        let layer = fmt::layer()
            .pretty()
            .with_span_events(config.span_events())
            .with_target(config.include_targets);

        match file_appender {
            Some(file) => registry
                .with(layer.with_ansi(false).with_writer(file))
                .try_init()?,
            None => registry.with(layer).try_init()?,
        }
    } else {
        let layer = fmt::layer()
            .compact()
            .with_span_events(config.span_events())
            .with_target(config.include_targets)
            .with_writer(std::io::stderr);

        match file_appender {
            Some(file) => registry
                .with(layer.with_ansi(false).with_writer(file))
                .try_init()?,
            None => registry.with(layer).try_init()?,
        }
    }

    Ok(())
}

/// Initialize logging with default configuration
pub fn init_default_logging() -> Result<(), LoggingError> {
    init_logging(&LoggingConfig::default())
}

/// Initialize logging for development (pretty, debug level)
pub fn init_dev_logging() -> Result<(), LoggingError> {
    init_logging(&LoggingConfig {
        level: "debug".to_string(),
        pretty_format: true,
        include_spans: true,
        ..LoggingConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(!config.json_format);
        assert!(!config.pretty_format);
        assert!(config.file_path.is_none());
        assert!(!config.include_spans);
        assert!(config.include_targets);
    }

    #[test]
    fn test_span_events_follow_flag() {
        let mut config = LoggingConfig::default();
        assert_eq!(config.span_events(), FmtSpan::NONE);

        config.include_spans = true;
        assert_eq!(config.span_events(), FmtSpan::NEW | FmtSpan::CLOSE);
    }

    #[test]
    fn test_invalid_filter_is_rejected() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }

        let config = LoggingConfig {
            level: "info,tessera=notalevel".to_string(),
            ..LoggingConfig::default()
        };

        assert!(matches!(
            config.env_filter(),
            Err(LoggingError::InvalidFilter { .. })
        ));
    }
}
