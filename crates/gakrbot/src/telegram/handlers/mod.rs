//! Telegram bot handler tree configuration
//!
//! The same tree is used in production and in integration tests.

mod schema;
mod types;

pub use schema::{schema, ERROR_REPLY};
pub use types::{user_ref, HandlerDeps, HandlerError};
