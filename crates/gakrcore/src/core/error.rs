use thiserror::Error;

/// Centralized error types for the application
///
/// Everything that can fail outside of the calculator ends up here. The
/// calculator has its own [`crate::calc::CalcError`], which is turned into a
/// user-facing reply and never propagated.
///
/// # Example
///
/// ```no_run
/// use gakrcore::core::error::AppError;
///
/// fn handle_error(err: AppError) {
///     eprintln!("Error: {}", err);
/// }
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// IO errors (user store file, log file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// User store (de)serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Telegram API errors
    #[cfg(feature = "telegram")]
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// Missing or placeholder configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
