//! Command replies (/start, /help, /stats, /clear) and the `/start` shortcut buttons

use indoc::{formatdoc, indoc};

use super::{Button, ButtonAction, Reply};
use crate::core::markdown::escape;
use crate::storage::UserRecord;

pub const NO_DATA: &str = "No data found. Send /start first!";
pub const HISTORY_CLEARED: &str = "🗑 History cleared!";

const HELP_TEXT: &str = indoc! {"
    *🤖 GAKR Assistant Commands:*

    /start \\- Start bot & show menu
    /help \\- Show this help message
    /stats \\- Your usage statistics
    /clear \\- Clear your history

    *Examples:*
    `calc: 125 * 45`
    `search: Python programming`
    `random`
    `coin`"};

pub fn help_reply() -> Reply {
    Reply::markdown(HELP_TEXT)
}

/// Greeting with the three shortcut buttons
pub fn start_reply(first_name: &str) -> Reply {
    let text = formatdoc!(
        "
            👋 Hello {}\\!

            🤖 *GAKR Assistant* is ready\\!

            🔍 *Smart Search* \\- Type any question
            🧮 *Calculator* \\- \"calc: 15\\*23\"
            🎲 *Random* \\- \"random\" or \"coin\"
            📊 *Stats* \\- /stats

            _Just send me anything\\!_",
        escape(first_name)
    );

    Reply::markdown(text).with_buttons(vec![
        vec![Button::new("🔍 Example Query", ButtonAction::ExampleQuery)],
        vec![Button::new("🧮 Calculator", ButtonAction::CalcDemo)],
        vec![Button::new("📊 My Stats", ButtonAction::ShowStats)],
    ])
}

/// Query count and join date, or a hint to /start for unknown users
pub fn stats_reply(record: Option<&UserRecord>) -> Reply {
    match record {
        Some(record) => Reply::markdown(formatdoc!(
            "
                📊 *Your Statistics*

                📝 Total Queries: {}
                📅 Joined: {}
                🤖 Status: Active",
            record.queries.len(),
            escape(record.joined_date())
        )),
        None => Reply::plain(NO_DATA),
    }
}

pub fn clear_reply() -> Reply {
    Reply::plain(HISTORY_CLEARED)
}

/// Canned reply for a shortcut button press
pub fn button_reply(action: ButtonAction, query_count: usize) -> Reply {
    match action {
        ButtonAction::ExampleQuery => Reply::markdown("Try: `search: Python programming`"),
        ButtonAction::CalcDemo => Reply::markdown("Try: `calc: 15 * 23`"),
        ButtonAction::ShowStats => Reply::markdown(format!("📊 You've made *{}* queries\\!", query_count)),
    }
}
