//! Application-wide error types using thiserror.

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] tessera_config::ConfigError),

    /// Translation loading error.
    #[error("Translation error: {0}")]
    I18n(#[from] tessera_i18n::I18nError),

    /// Tag validation error.
    #[error("Tag error: {0}")]
    Tag(#[from] tessera_tags::TagParseError),

    /// Output serialization error.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed `name=value` argument.
    #[error("Invalid message argument '{0}', expected name=value")]
    InvalidArgument(String),
}

/// Result type for the application.
pub type AppResult<T> = Result<T, AppError>;
