//! Transport-independent routing of inbound events to reply builders

use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Local};
use rand::Rng;

use crate::core::error::AppResult;
use crate::intent::{self, Intent};
use crate::replies::{account, calculator, datetime, fun, general, search, ButtonAction, Reply};
use crate::storage::store::{self, UserStore};

/// Who sent an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRef {
    /// Platform user id as a decimal string (the store key)
    pub id: String,
    pub first_name: String,
}

impl UserRef {
    pub fn new(id: impl ToString, first_name: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            first_name: first_name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Stats,
    Clear,
}

/// Everything the bot reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    TextMessage { user: UserRef, text: String },
    Command { user: UserRef, command: Command },
    /// Inline keyboard press carrying the button's callback data
    ButtonPress { user: UserRef, data: String },
}

impl InboundEvent {
    pub fn user(&self) -> &UserRef {
        match self {
            InboundEvent::TextMessage { user, .. }
            | InboundEvent::Command { user, .. }
            | InboundEvent::ButtonPress { user, .. } => user,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            InboundEvent::TextMessage { .. } => "text",
            InboundEvent::Command { .. } => "command",
            InboundEvent::ButtonPress { .. } => "button",
        }
    }
}

/// Routes events to handlers and keeps the user store up to date
#[derive(Debug, Clone)]
pub struct Dispatcher {
    store: Arc<UserStore>,
}

impl Dispatcher {
    pub fn new(store: Arc<UserStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<UserStore> {
        &self.store
    }

    /// Handles one event using the thread RNG and the local clock.
    ///
    /// Returns `Ok(None)` when the event needs no reply (unknown button data).
    /// Store write failures are returned to the caller.
    pub fn dispatch(&self, event: &InboundEvent) -> AppResult<Option<Reply>> {
        self.dispatch_with(event, &mut rand::rng(), &Local::now())
    }

    /// Same as [`Dispatcher::dispatch`] with an explicit RNG and clock
    pub fn dispatch_with<R: Rng + ?Sized>(
        &self,
        event: &InboundEvent,
        rng: &mut R,
        now: &DateTime<Local>,
    ) -> AppResult<Option<Reply>> {
        let user = event.user();
        log::info!("Dispatching {} event from user {}", event.kind(), user.id);

        match event {
            InboundEvent::TextMessage { text, .. } => {
                let text = text.trim();
                self.store.record_query(&user.id, text, &store::timestamp(now))?;
                let intent = intent::classify(text);
                log::debug!("User {} message classified as {}", user.id, intent.name());
                Ok(Some(reply_for_intent(intent, rng, now)))
            }
            InboundEvent::Command { command, .. } => self.run_command(*command, user, now).map(Some),
            InboundEvent::ButtonPress { data, .. } => match ButtonAction::from_str(data) {
                Ok(action) => Ok(Some(account::button_reply(action, self.store.query_count(&user.id)))),
                Err(_) => {
                    log::warn!("Unknown button data '{}' from user {}", data, user.id);
                    Ok(None)
                }
            },
        }
    }

    fn run_command(&self, command: Command, user: &UserRef, now: &DateTime<Local>) -> AppResult<Reply> {
        match command {
            Command::Start => {
                if self.store.ensure_user(&user.id, &store::timestamp(now))? {
                    log::info!("New user {} registered", user.id);
                }
                Ok(account::start_reply(&user.first_name))
            }
            Command::Help => Ok(account::help_reply()),
            Command::Stats => Ok(account::stats_reply(self.store.snapshot(&user.id).as_ref())),
            Command::Clear => {
                self.store.clear_queries(&user.id)?;
                Ok(account::clear_reply())
            }
        }
    }
}

fn reply_for_intent<R: Rng + ?Sized>(intent: Intent, rng: &mut R, now: &DateTime<Local>) -> Reply {
    match intent {
        Intent::Calculator(expression) => calculator::reply(&expression),
        Intent::Search(query) => search::reply(&query),
        Intent::Random => fun::random_reply(rng),
        Intent::Coin => fun::coin_reply(rng),
        Intent::Datetime => datetime::reply(now),
        Intent::Joke => fun::joke_reply(rng),
        Intent::General(text) => general::reply(&text),
    }
}
