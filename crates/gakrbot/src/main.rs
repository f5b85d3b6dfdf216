use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use teloxide::prelude::*;
use teloxide::update_listeners::Polling;

use gakrbot::cli::{Cli, Commands};
use gakrbot::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};
use gakrcore::core::{config, init_logger, log_startup_configuration};
use gakrcore::replies::account::stats_reply;
use gakrcore::UserStore;

/// Main entry point for the Telegram bot
///
/// Parses CLI arguments and dispatches to the selected subcommand.
///
/// # Errors
/// Returns an error if initialization fails (logging, token, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Log panics from handler tasks instead of losing them on stderr
    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("Panic caught: {:?}", panic_info);
        if let Some(location) = panic_info.location() {
            log::error!("Panic at {}:{}:{}", location.file(), location.line(), location.column());
        }
        if let Some(msg) = panic_info.payload().downcast_ref::<&str>() {
            log::error!("Panic message: {}", msg);
        }
    }));

    // .env first so LOG_FILE_PATH and USER_DATA_PATH can come from it
    let _ = dotenv();

    init_logger(&config::LOG_FILE_PATH)?;

    let data_path = cli.data_path();
    match cli.command {
        None | Some(Commands::Run) => run_bot(&data_path).await,
        Some(Commands::Stats { user }) => print_stats(&data_path, user),
    }
}

async fn run_bot(data_path: &str) -> Result<()> {
    let token = config::require_bot_token()?;

    log_startup_configuration(data_path);
    let store = Arc::new(UserStore::open(data_path));
    let deps = HandlerDeps::new(Arc::new(gakrcore::Dispatcher::new(store)));

    let bot = create_bot(&token)?;
    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to register bot commands: {}", e);
    }

    log::info!("🤖 GAKR Bot Starting...");

    let listener = Polling::builder(bot.clone()).drop_pending_updates().build();
    Dispatcher::builder(bot, schema(deps))
        .dependencies(DependencyMap::new())
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}

fn print_stats(data_path: &str, user: u64) -> Result<()> {
    let store = UserStore::open(data_path);
    let record = store.snapshot(&user.to_string());
    println!("{}", stats_reply(record.as_ref()).plain_text());
    Ok(())
}
