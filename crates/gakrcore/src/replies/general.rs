use super::Reply;
use crate::core::markdown::escape;

const GREETINGS: [&str; 3] = ["hi", "hello", "hey"];

/// Fallback for messages no other rule matched
pub fn reply(text: &str) -> Reply {
    let lower = text.to_lowercase();

    if GREETINGS.iter().any(|g| lower.contains(g)) {
        Reply::markdown("👋 Hello\\! Try 'search: \\[topic\\]' or 'calc: \\[math\\]'\\.")
    } else if lower.contains("thank") {
        Reply::plain("🙌 You're welcome!")
    } else {
        let t = escape(text);
        Reply::markdown(format!(
            "💡 I got: \"{t}\"\n\
             \n\
             Try:\n\
             • \"search: {t}\"\n\
             • \"calc: 15\\*23\"\n\
             • \"random\" or \"coin\"\n\
             \n\
             _Type /help for more_",
            t = t
        ))
    }
}
