//! Keyword/prefix intent classification for free-text messages
//!
//! Rules are checked against the trimmed, lower-cased text in a fixed order
//! and the first match wins. Keyword rules use substring containment, so
//! "I hate my job today" is a datetime request ("day").

/// What a text message asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// `calc: <expression>`
    Calculator(String),
    /// `search: <query>`
    Search(String),
    Random,
    Coin,
    Datetime,
    Joke,
    /// Anything else; carries the original (trimmed) text
    General(String),
}

impl Intent {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Calculator(_) => "calculator",
            Intent::Search(_) => "search",
            Intent::Random => "random",
            Intent::Coin => "coin",
            Intent::Datetime => "datetime",
            Intent::Joke => "joke",
            Intent::General(_) => "general",
        }
    }
}

const CALC_PREFIX: &str = "calc:";
const SEARCH_PREFIX: &str = "search:";
const RANDOM_WORDS: [&str; 3] = ["random", "dice", "roll"];
const COIN_WORDS: [&str; 3] = ["coin", "flip", "toss"];
const DATETIME_KEYWORDS: [&str; 3] = ["time", "date", "day"];
const JOKE_KEYWORDS: [&str; 3] = ["joke", "funny", "laugh"];

/// Classifies a message.
///
/// # Example
///
/// ```
/// use gakrcore::intent::{classify, Intent};
///
/// assert_eq!(classify("calc: 2+2"), Intent::Calculator("2+2".to_string()));
/// assert_eq!(classify("random day"), Intent::Datetime);
/// ```
pub fn classify(text: &str) -> Intent {
    let text = text.trim();
    let lower = text.to_lowercase();

    if lower.starts_with(CALC_PREFIX) {
        return Intent::Calculator(payload_after_colon(text));
    }
    if lower.starts_with(SEARCH_PREFIX) {
        return Intent::Search(payload_after_colon(text));
    }
    if RANDOM_WORDS.contains(&lower.as_str()) {
        return Intent::Random;
    }
    if COIN_WORDS.contains(&lower.as_str()) {
        return Intent::Coin;
    }
    if contains_any(&lower, &DATETIME_KEYWORDS) {
        return Intent::Datetime;
    }
    if contains_any(&lower, &JOKE_KEYWORDS) {
        return Intent::Joke;
    }
    Intent::General(text.to_string())
}

/// Text after the first `:`, trimmed
fn payload_after_colon(text: &str) -> String {
    text.split_once(':').map(|(_, rest)| rest.trim()).unwrap_or("").to_string()
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
