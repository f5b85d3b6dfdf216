//! Handler types and dependencies

use std::sync::Arc;

use teloxide::types::User;

use gakrcore::{Dispatcher, UserRef};

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub dispatcher: Arc<Dispatcher>,
}

impl HandlerDeps {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}

/// Store key and display name of a Telegram user
pub fn user_ref(user: &User) -> UserRef {
    UserRef::new(user.id.0, user.first_name.clone())
}
