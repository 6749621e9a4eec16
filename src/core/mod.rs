//! Core utilities, configuration, and common functionality

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

// Re-exports for convenience
pub use error::{AppError, AppResult, BotError};
pub use logging::{init_logger, log_storage_configuration};
pub use types::Department;
