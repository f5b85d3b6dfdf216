//! Telegram transport: bot setup, handler tree and reply sending

pub mod bot;
pub mod handlers;
pub mod keyboard;
pub mod markdown;

pub use bot::{create_bot, setup_bot_commands, Command};
pub use handlers::{schema, HandlerDeps, HandlerError};
