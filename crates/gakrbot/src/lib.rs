//! gakrbot - Telegram front end of the GAKR assistant
//!
//! # Module Structure
//!
//! - `cli`: command line interface
//! - `telegram`: bot construction, handler tree, message sending

pub mod cli;
pub mod telegram;

pub use telegram::{create_bot, schema, setup_bot_commands, HandlerDeps, HandlerError};
