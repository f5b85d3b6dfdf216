use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use gakrcore::Reply;

/// Inline keyboard for a reply, `None` when the reply has no buttons
pub fn inline_keyboard(reply: &Reply) -> Option<InlineKeyboardMarkup> {
    if reply.buttons.is_empty() {
        return None;
    }
    let rows = reply.buttons.iter().map(|row| {
        row.iter()
            .map(|b| InlineKeyboardButton::callback(b.label.clone(), b.action.callback_data()))
            .collect::<Vec<_>>()
    });
    Some(InlineKeyboardMarkup::new(rows))
}
