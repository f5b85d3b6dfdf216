use chrono::{DateTime, TimeZone};

use super::Reply;
use crate::core::markdown::escape;

/// Current time as `HH:MM:SS` and date as `Month DD, YYYY`
pub fn reply<Tz: TimeZone>(now: &DateTime<Tz>) -> Reply
where
    Tz::Offset: std::fmt::Display,
{
    Reply::markdown(format!(
        "🕐 *Time:* {}\n📅 *Date:* {}",
        escape(&now.format("%H:%M:%S").to_string()),
        escape(&now.format("%B %d, %Y").to_string()),
    ))
}
