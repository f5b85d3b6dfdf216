use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

use crate::core::error::{AppError, AppResult};

/// Placeholder value shipped in sample `.env` files.
/// Treated the same as a missing token.
pub const TOKEN_PLACEHOLDER: &str = "your_token_here";

/// Bot token
/// Read from TELEGRAM_BOT_TOKEN or TELOXIDE_TOKEN environment variable
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| {
    env::var("TELEGRAM_BOT_TOKEN")
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .unwrap_or_else(|_| String::new())
});

/// User store file path
/// Read from USER_DATA_PATH environment variable
/// Default: user_data.json
pub static USER_DATA_PATH: Lazy<String> =
    Lazy::new(|| env::var("USER_DATA_PATH").unwrap_or_else(|_| "user_data.json".to_string()));

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: app.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "app.log".to_string()));

/// Custom Bot API server (e.g. a local telegram-bot-api instance)
pub static BOT_API_URL: Lazy<Option<String>> = Lazy::new(|| env::var("BOT_API_URL").ok());

/// Network configuration
pub mod network {
    use super::Duration;

    /// Timeout for Bot API requests (in seconds)
    pub const TIMEOUT_SECS: u64 = 30;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(TIMEOUT_SECS)
    }
}

/// Checks a token value, rejecting empty strings and the sample placeholder.
///
/// # Returns
/// * `Ok(&str)` - the trimmed token
/// * `Err(AppError::Config)` - token missing or left at the placeholder
pub fn validate_token(token: &str) -> AppResult<&str> {
    let token = token.trim();
    if token.is_empty() || token == TOKEN_PLACEHOLDER {
        return Err(AppError::Config(
            "Set TELEGRAM_BOT_TOKEN environment variable!".to_string(),
        ));
    }
    Ok(token)
}

/// Returns the configured bot token or fails fast at startup.
pub fn require_bot_token() -> AppResult<String> {
    validate_token(&BOT_TOKEN).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_token_rejects_empty() {
        assert!(matches!(validate_token(""), Err(AppError::Config(_))));
        assert!(matches!(validate_token("   "), Err(AppError::Config(_))));
    }

    #[test]
    fn test_validate_token_rejects_placeholder() {
        assert!(validate_token(TOKEN_PLACEHOLDER).is_err());
    }

    #[test]
    fn test_validate_token_accepts_real_value() {
        assert_eq!(validate_token(" 123:abc ").unwrap(), "123:abc");
    }

    #[test]
    fn test_network_timeout() {
        assert_eq!(network::timeout(), Duration::from_secs(30));
    }
}
