//! Sending and editing [`Reply`] values
//!
//! MarkdownV2 replies that Telegram refuses to parse are retried once with
//! the visible text fully escaped.

use teloxide::prelude::*;
use teloxide::types::{LinkPreviewOptions, MessageId, ParseMode};
use teloxide::RequestError;

use gakrcore::core::markdown::escape;
use gakrcore::{Reply, TextFormat};

use super::keyboard::inline_keyboard;

fn is_markdown_parse_error(err: &RequestError) -> bool {
    err.to_string().to_lowercase().contains("can't parse entities")
}

fn no_preview() -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: true,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    }
}

/// Sends a reply as a new message.
pub async fn send_reply(bot: &Bot, chat_id: ChatId, reply: &Reply) -> ResponseResult<Message> {
    match send_text(bot, chat_id, reply, reply.text.clone()).await {
        Err(e) if reply.format == TextFormat::MarkdownV2 && is_markdown_parse_error(&e) => {
            log::warn!("MarkdownV2 rejected for chat {}, resending escaped: {}", chat_id, e);
            send_text(bot, chat_id, reply, escape(&reply.plain_text())).await
        }
        result => result,
    }
}

async fn send_text(bot: &Bot, chat_id: ChatId, reply: &Reply, text: String) -> ResponseResult<Message> {
    let mut req = bot.send_message(chat_id, text);
    if reply.format == TextFormat::MarkdownV2 {
        req = req.parse_mode(ParseMode::MarkdownV2);
    }
    if reply.disable_link_preview {
        req = req.link_preview_options(no_preview());
    }
    if let Some(kb) = inline_keyboard(reply) {
        req = req.reply_markup(kb);
    }
    req.await
}

/// Replaces the text of an existing message with a reply.
pub async fn edit_reply(bot: &Bot, chat_id: ChatId, message_id: MessageId, reply: &Reply) -> ResponseResult<Message> {
    match edit_text(bot, chat_id, message_id, reply, reply.text.clone()).await {
        Err(e) if reply.format == TextFormat::MarkdownV2 && is_markdown_parse_error(&e) => {
            log::warn!("MarkdownV2 rejected for chat {}, editing escaped: {}", chat_id, e);
            edit_text(bot, chat_id, message_id, reply, escape(&reply.plain_text())).await
        }
        result => result,
    }
}

async fn edit_text(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    reply: &Reply,
    text: String,
) -> ResponseResult<Message> {
    let mut req = bot.edit_message_text(chat_id, message_id, text);
    if reply.format == TextFormat::MarkdownV2 {
        req = req.parse_mode(ParseMode::MarkdownV2);
    }
    if reply.disable_link_preview {
        req = req.link_preview_options(no_preview());
    }
    if let Some(kb) = inline_keyboard(reply) {
        req = req.reply_markup(kb);
    }
    req.await
}
