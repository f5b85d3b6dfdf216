//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::{ChatAction, Message};

use gakrcore::{InboundEvent, Reply};

use super::types::{user_ref, HandlerDeps, HandlerError};
use crate::telegram::bot::Command;
use crate::telegram::markdown::{edit_reply, send_reply};

/// Sent when dispatching or sending a reply fails
pub const ERROR_REPLY: &str = "⚠️ Error occurred. Try /start";

/// Creates the main dispatcher schema for the Telegram bot.
///
/// # Arguments
/// * `deps` - Handler dependencies (the event dispatcher and its store)
///
/// # Returns
/// The complete handler tree for the bot
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_commands = deps.clone();
    let deps_messages = deps.clone();
    let deps_callback = deps;

    dptree::entry()
        .branch(command_handler(deps_commands))
        .branch(message_handler(deps_messages))
        .branch(callback_handler(deps_callback))
}

/// Handler for /start, /help, /stats and /clear
fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |bot: Bot, msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                log::info!("🎯 Received command: {:?} from chat {}", cmd, msg.chat.id);

                let Some(user) = msg.from.as_ref() else {
                    return Ok(());
                };
                let event = InboundEvent::Command {
                    user: user_ref(user),
                    command: cmd.into(),
                };
                if let Err(e) = reply_to_message(&bot, &deps, &msg, event).await {
                    report_failure(&bot, msg.chat.id, e).await;
                }
                Ok(())
            }
        },
    ))
}

/// Handler for plain text (anything that is not a /command)
fn message_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.text().is_some_and(|text| !text.starts_with('/')))
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                let (Some(user), Some(text)) = (msg.from.as_ref(), msg.text()) else {
                    return Ok(());
                };

                if let Err(e) = bot.send_chat_action(msg.chat.id, ChatAction::Typing).await {
                    log::warn!("Failed to send typing action to chat {}: {}", msg.chat.id, e);
                }

                let event = InboundEvent::TextMessage {
                    user: user_ref(user),
                    text: text.to_string(),
                };
                if let Err(e) = reply_to_message(&bot, &deps, &msg, event).await {
                    report_failure(&bot, msg.chat.id, e).await;
                }
                Ok(())
            }
        })
}

/// Handler for inline keyboard presses
fn callback_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
        let deps = deps.clone();
        async move {
            if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
                log::warn!("Failed to answer callback query {:?}: {}", q.id, e);
            }

            let Some(data) = q.data.clone() else {
                return Ok(());
            };
            let chat_id = q.message.as_ref().map_or(ChatId::from(q.from.id), |m| m.chat().id);

            if let Err(e) = reply_to_callback(&bot, &deps, &q, data).await {
                report_failure(&bot, chat_id, e).await;
            }
            Ok(())
        }
    })
}

async fn reply_to_message(
    bot: &Bot,
    deps: &HandlerDeps,
    msg: &Message,
    event: InboundEvent,
) -> Result<(), HandlerError> {
    if let Some(reply) = dispatch_blocking(deps, event).await? {
        send_reply(bot, msg.chat.id, &reply).await?;
    }
    Ok(())
}

/// Edits the message that carried the keyboard; sends a new message when
/// the original is not available.
async fn reply_to_callback(bot: &Bot, deps: &HandlerDeps, q: &CallbackQuery, data: String) -> Result<(), HandlerError> {
    let event = InboundEvent::ButtonPress {
        user: user_ref(&q.from),
        data,
    };
    let Some(reply) = dispatch_blocking(deps, event).await? else {
        return Ok(());
    };

    match &q.message {
        Some(message) => {
            edit_reply(bot, message.chat().id, message.id(), &reply).await?;
        }
        None => {
            send_reply(bot, ChatId::from(q.from.id), &reply).await?;
        }
    }
    Ok(())
}

/// Runs the dispatcher on the blocking pool: every text message rewrites the
/// store file under the store lock.
async fn dispatch_blocking(deps: &HandlerDeps, event: InboundEvent) -> Result<Option<Reply>, HandlerError> {
    let dispatcher = deps.dispatcher.clone();
    let reply = tokio::task::spawn_blocking(move || dispatcher.dispatch(&event)).await??;
    Ok(reply)
}

/// Logs a failed update and tells the user something went wrong
async fn report_failure(bot: &Bot, chat_id: ChatId, err: HandlerError) {
    log::error!("❌ Failed to handle update for chat {}: {}", chat_id, err);
    if let Err(e) = bot.send_message(chat_id, ERROR_REPLY).await {
        log::error!("Failed to send error reply to chat {}: {}", chat_id, e);
    }
}
