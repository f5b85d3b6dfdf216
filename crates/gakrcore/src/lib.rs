//! gakrcore - core of the GAKR assistant bot
//!
//! Everything here is independent of Telegram: the transport adapter turns
//! updates into [`InboundEvent`]s and sends back the [`Reply`] produced by
//! [`Dispatcher::dispatch`].
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging, MarkdownV2 helpers
//! - `storage`: flat-file user store
//! - `intent`: keyword/prefix message classification
//! - `calc`: arithmetic evaluator behind `calc:` messages
//! - `replies`: reply model and per-intent reply builders
//! - `dispatcher`: routing of inbound events

pub mod calc;
pub mod core;
pub mod dispatcher;
pub mod intent;
pub mod replies;
pub mod storage;

pub use self::core::{config, AppError, AppResult};
pub use dispatcher::{Command, Dispatcher, InboundEvent, UserRef};
pub use intent::{classify, Intent};
pub use replies::{Button, ButtonAction, Reply, TextFormat};
pub use storage::UserStore;
