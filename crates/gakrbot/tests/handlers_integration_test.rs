//! Integration tests for the Telegram handler tree using teloxide_tests
//!
//! These tests drive the production `schema()` with a MockBot and a
//! temporary user store, without hitting the Telegram API.
//! Run with: cargo test -p gakrbot --test handlers_integration_test

use std::path::Path;
use std::sync::Arc;

use gakrbot::telegram::handlers::ERROR_REPLY;
use gakrbot::{schema, HandlerDeps};
use gakrcore::{Dispatcher, UserStore};
use pretty_assertions::assert_eq;
use serial_test::serial;
use tempfile::TempDir;
use teloxide_tests::{MockBot, MockCallbackQuery, MockMessageText};

fn deps_with_store(path: &Path) -> (HandlerDeps, Arc<UserStore>) {
    let store = Arc::new(UserStore::open(path));
    let deps = HandlerDeps::new(Arc::new(Dispatcher::new(store.clone())));
    (deps, store)
}

#[tokio::test]
#[serial]
async fn test_start_sends_greeting_with_keyboard() {
    let dir = TempDir::new().unwrap();
    let (deps, store) = deps_with_store(&dir.path().join("user_data.json"));

    let mut bot = MockBot::new(MockMessageText::new().text("/start"), schema(deps));
    bot.dispatch().await;

    let responses = bot.get_responses();
    assert_eq!(responses.sent_messages.len(), 1, "Should send exactly one message");

    let msg = &responses.sent_messages[0];
    let text = msg.text().expect("Message should have text");
    assert!(text.contains("GAKR Assistant"), "text: {}", text);

    let markup = msg.reply_markup().expect("Should have inline keyboard");
    assert_eq!(markup.inline_keyboard.len(), 3);
    assert!(markup.inline_keyboard[0][0].text.contains("Example Query"));
    assert!(markup.inline_keyboard[2][0].text.contains("My Stats"));

    assert_eq!(store.user_count(), 1, "/start should register the user");
}

#[tokio::test]
#[serial]
async fn test_calc_message_replies_with_result() {
    let dir = TempDir::new().unwrap();
    let (deps, store) = deps_with_store(&dir.path().join("user_data.json"));

    let mut bot = MockBot::new(MockMessageText::new().text("calc: 2*(3+4)"), schema(deps));
    bot.dispatch().await;

    let responses = bot.get_responses();
    let text = responses.sent_messages.last().and_then(|m| m.text()).expect("Should reply");
    assert!(text.contains("14"), "text: {}", text);

    let total: usize = store.user_count();
    assert_eq!(total, 1, "the message should be recorded");
}

#[tokio::test]
#[serial]
async fn test_coin_message() {
    let dir = TempDir::new().unwrap();
    let (deps, _store) = deps_with_store(&dir.path().join("user_data.json"));

    let mut bot = MockBot::new(MockMessageText::new().text("coin"), schema(deps));
    bot.dispatch().await;

    let responses = bot.get_responses();
    let text = responses.sent_messages.last().and_then(|m| m.text()).expect("Should reply");
    assert!(text.contains("Heads") || text.contains("Tails"), "text: {}", text);
}

#[tokio::test]
#[serial]
async fn test_unknown_command_is_ignored() {
    let dir = TempDir::new().unwrap();
    let (deps, store) = deps_with_store(&dir.path().join("user_data.json"));

    let mut bot = MockBot::new(MockMessageText::new().text("/nonexistent"), schema(deps));
    bot.dispatch().await;

    assert!(bot.get_responses().sent_messages.is_empty());
    assert_eq!(store.user_count(), 0);
}

#[tokio::test]
#[serial]
async fn test_store_failure_sends_apology() {
    let dir = TempDir::new().unwrap();
    let (deps, _store) = deps_with_store(&dir.path().join("missing").join("user_data.json"));

    let mut bot = MockBot::new(MockMessageText::new().text("hello"), schema(deps));
    bot.dispatch().await;

    let responses = bot.get_responses();
    let text = responses.sent_messages.last().and_then(|m| m.text()).expect("Should reply");
    assert_eq!(text, ERROR_REPLY);
}

#[tokio::test]
#[serial]
async fn test_calc_demo_button_edits_message() {
    let dir = TempDir::new().unwrap();
    let (deps, _store) = deps_with_store(&dir.path().join("user_data.json"));

    let mut bot = MockBot::new(MockCallbackQuery::new().data("calc_demo"), schema(deps));
    bot.dispatch().await;

    let responses = bot.get_responses();
    assert!(
        !responses.answered_callback_queries.is_empty(),
        "Should answer callback query"
    );
    let edited = responses
        .edited_messages_text
        .last()
        .and_then(|e| e.message.text())
        .expect("Should edit the keyboard message");
    assert!(edited.contains("Try: calc: 15 * 23"), "text: {}", edited);
}

#[tokio::test]
#[serial]
async fn test_show_stats_button_counts_previous_messages() {
    let dir = TempDir::new().unwrap();
    let (deps, store) = deps_with_store(&dir.path().join("user_data.json"));

    let mut bot = MockBot::new(MockMessageText::new().text("coin"), schema(deps));
    bot.dispatch().await;
    bot.update(MockMessageText::new().text("hello"));
    bot.dispatch().await;
    assert_eq!(store.user_count(), 1);

    bot.update(MockCallbackQuery::new().data("show_stats"));
    bot.dispatch().await;

    let responses = bot.get_responses();
    let edited = responses
        .edited_messages_text
        .last()
        .and_then(|e| e.message.text())
        .expect("Should edit the keyboard message");
    assert!(edited.contains("2"), "text: {}", edited);
    assert!(edited.contains("queries"), "text: {}", edited);
}

#[tokio::test]
#[serial]
async fn test_clear_then_stats() {
    let dir = TempDir::new().unwrap();
    let (deps, store) = deps_with_store(&dir.path().join("user_data.json"));

    let mut bot = MockBot::new(MockMessageText::new().text("/start"), schema(deps));
    bot.dispatch().await;
    bot.update(MockMessageText::new().text("calc: 1+1"));
    bot.dispatch().await;

    bot.update(MockMessageText::new().text("/clear"));
    bot.dispatch().await;
    let responses = bot.get_responses();
    let text = responses.sent_messages.last().and_then(|m| m.text()).expect("Should reply");
    assert_eq!(text, "🗑 History cleared!");

    bot.update(MockMessageText::new().text("/stats"));
    bot.dispatch().await;
    let responses = bot.get_responses();
    let text = responses.sent_messages.last().and_then(|m| m.text()).expect("Should reply");
    assert!(text.contains("Total Queries: 0"), "text: {}", text);
    assert_eq!(store.user_count(), 1);
}

#[tokio::test]
#[serial]
async fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    let (deps, store) = deps_with_store(&dir.path().join("user_data.json"));

    let mut bot = MockBot::new(MockMessageText::new().text("/help"), schema(deps));
    bot.dispatch().await;

    let responses = bot.get_responses();
    let text = responses.sent_messages.last().and_then(|m| m.text()).expect("Should reply");
    for cmd in ["/start", "/help", "/stats", "/clear"] {
        assert!(text.contains(cmd), "missing {} in {}", cmd, text);
    }
    assert_eq!(store.user_count(), 0, "/help should not touch the store");
}

#[tokio::test]
#[serial]
async fn test_unknown_button_only_answers() {
    let dir = TempDir::new().unwrap();
    let (deps, _store) = deps_with_store(&dir.path().join("user_data.json"));

    let mut bot = MockBot::new(MockCallbackQuery::new().data("menu:unknown"), schema(deps));
    bot.dispatch().await;

    let responses = bot.get_responses();
    assert!(!responses.answered_callback_queries.is_empty());
    assert!(responses.sent_messages.is_empty());
    assert!(responses.edited_messages_text.is_empty());
}
