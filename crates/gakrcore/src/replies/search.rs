//! Templated "search" reply
//!
//! No lookup is performed: the reply only embeds the query and a guessed
//! Wikipedia link.

use super::Reply;
use crate::core::markdown::{escape, link};

const WIKIPEDIA_BASE: &str = "https://en.wikipedia.org/wiki/";

/// Wikipedia article URL for a query (spaces become underscores)
pub fn wiki_url(query: &str) -> String {
    format!("{}{}", WIKIPEDIA_BASE, query.replace(' ', "_"))
}

pub fn reply(query: &str) -> Reply {
    let q = escape(query);
    let text = format!(
        "🔍 *Search Results for:* \"{q}\"\n\
         \n\
         1️⃣ *Wikipedia*\n   {read_more}\n\
         \n\
         2️⃣ *Knowledge Base*\n   Key facts about {q}\\.\n\
         \n\
         3️⃣ *Related Topics*\n   • Introduction to {q}\n   • {q} examples\n\
         \n\
         _Tip: Be more specific\\!_",
        q = q,
        read_more = link("Read more", &wiki_url(query)),
    );
    Reply::markdown(text).without_link_preview()
}
