//! Telegram bot integration and handlers

pub mod admin;
pub mod bot;
pub mod callback;
pub mod commands;
pub mod dialog;
pub mod handlers;
pub mod menu;

// Re-exports for convenience
pub use bot::{create_bot, setup_bot_commands, Command};
pub use callback::{AdminAction, CallbackCommand};
pub use dialog::{DialogStage, DialogTracker};
pub use handlers::{schema, HandlerDeps, HandlerError};
