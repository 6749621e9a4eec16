use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use teloxide::prelude::*;

use kafedra_bot::cli::{Cli, Commands};
use kafedra_bot::core::{config, init_logger, log_storage_configuration};
use kafedra_bot::storage::ContentStore;
use kafedra_bot::telegram::{create_bot, schema, setup_bot_commands, DialogTracker, HandlerDeps};

/// Main entry point for the Telegram bot
///
/// Parses CLI arguments and dispatches to appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (logging, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Load environment variables from .env before any config is read
    let _ = dotenv();

    // Initialize logger (console + file)
    init_logger(&config::LOG_FILE_PATH)?;

    // Dispatch to appropriate command
    match cli.command {
        Some(Commands::CheckConfig) => {
            log_storage_configuration();
            Ok(())
        }
        Some(Commands::Run) | None => run_bot().await,
    }
}

/// Run the bot in long polling mode
async fn run_bot() -> Result<()> {
    log::info!("Starting bot...");

    // Log storage configuration at startup
    log_storage_configuration();

    // Create bot instance
    let bot = create_bot()?;

    let bot_info = bot.get_me().await?;
    log::info!("Bot username: {:?}, Bot ID: {}", bot_info.username, bot_info.id);

    // Set up bot commands in the Telegram UI
    setup_bot_commands(&bot).await?;

    // Create handler dependencies for the modular schema
    let store = Arc::new(ContentStore::from_env());
    let dialog = Arc::new(DialogTracker::new());
    let handler_deps = HandlerDeps::new(store, dialog);

    // Create the dispatcher handler tree using the modular schema
    let handler = schema(handler_deps);

    log::info!("================================================");
    log::info!("🎉 Bot initialization complete");
    log::info!("📡 Ready to receive updates!");
    log::info!("================================================");

    Dispatcher::builder(bot, handler)
        .default_handler(|upd| async move {
            log::debug!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    log::info!("Bot stopped");
    Ok(())
}
