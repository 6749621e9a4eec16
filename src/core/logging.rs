//! Logging initialization and startup diagnostics
//!
//! This module provides:
//! - Logger initialization (console + file)
//! - Storage configuration validation and logging

use anyhow::Result;
use simplelog::*;
use std::fs::File;

use crate::core::config;

/// Initialize logger for both console and file output
///
/// # Arguments
/// * `log_file_path` - Path to the log file
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(anyhow::Error)` - Failed to initialize logger
pub fn init_logger(log_file_path: &str) -> Result<()> {
    let log_file = File::create(log_file_path).map_err(|e| anyhow::anyhow!("Failed to create log file: {}", e))?;

    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(LevelFilter::Info, Config::default(), log_file),
    ])
    .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}

/// Logs storage configuration at application startup
///
/// Reports the resolved data and image directories and whether any
/// content is already present, so a misconfigured deployment is visible
/// in the first lines of the log.
pub fn log_storage_configuration() {
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("📁 Storage Configuration");
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let departments_dir = config::DATA_DIR.join("departments");
    if departments_dir.is_dir() {
        let count = std::fs::read_dir(&departments_dir).map(|rd| rd.count()).unwrap_or(0);
        log::info!("✅ Departments dir: {} ({} file(s))", departments_dir.display(), count);
    } else {
        log::info!(
            "ℹ️ Departments dir: {} (missing, will be created on first write)",
            departments_dir.display()
        );
    }

    let events_file = config::DATA_DIR.join("events.json");
    if events_file.is_file() {
        log::info!("✅ Events file: {}", events_file.display());
    } else {
        log::info!(
            "ℹ️ Events file: {} (missing, empty list will be served)",
            events_file.display()
        );
    }

    if config::IMAGES_DIR.is_dir() {
        log::info!("✅ Images dir: {}", config::IMAGES_DIR.display());
    } else {
        log::info!(
            "ℹ️ Images dir: {} (missing, will be created on first photo)",
            config::IMAGES_DIR.display()
        );
    }

    if config::admin::ADMIN_IDS.is_empty() {
        log::warn!("⚠️ ADMIN_IDS is not set, admin commands will be rejected for everyone");
    } else {
        log::info!("✅ {} admin(s) configured", config::admin::ADMIN_IDS.len());
    }
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
}
