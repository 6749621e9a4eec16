use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Bot token
/// Read from BOT_TOKEN or TELOXIDE_TOKEN environment variable
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| {
    env::var("BOT_TOKEN")
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .unwrap_or_else(|_| String::new())
});

/// Data directory holding department records and the events collection
/// Read from DATA_DIR environment variable
/// Default: data
pub static DATA_DIR: Lazy<PathBuf> =
    Lazy::new(|| PathBuf::from(env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string())));

/// Directory for photo blobs referenced from department/event records
/// Read from IMAGES_DIR environment variable
/// Default: images
pub static IMAGES_DIR: Lazy<PathBuf> =
    Lazy::new(|| PathBuf::from(env::var("IMAGES_DIR").unwrap_or_else(|_| "images".to_string())));

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: app.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "app.log".to_string()));

/// Admin configuration
pub mod admin {
    use once_cell::sync::Lazy;
    use std::env;

    pub(crate) fn parse_admin_ids(raw: &str) -> Vec<i64> {
        raw.split([',', ' ', '\n', '\t'])
            .filter_map(|part| part.trim().parse::<i64>().ok())
            .collect()
    }

    /// Admin user IDs (comma-separated)
    /// Read from ADMIN_IDS environment variable
    pub static ADMIN_IDS: Lazy<Vec<i64>> = Lazy::new(|| {
        env::var("ADMIN_IDS")
            .ok()
            .map(|raw| parse_admin_ids(&raw))
            .unwrap_or_default()
    });
}

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for Bot API HTTP requests (in seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

/// User-facing text templates
pub mod texts {
    /// Greeting sent on /start and /help
    pub const WELCOME_MESSAGE: &str = "\
👋 Добро пожаловать в информационный бот кафедр!

Здесь вы можете узнать о:
• Направлениях подготовки
• Преподавателях
• Ближайших мероприятиях";

    /// Help text sent on /info
    pub const INFO_MESSAGE: &str = "\
ℹ️ Справка по боту:

🔹 «К разделам» - главное меню
🔹 «Информация» - это сообщение
🔹 Для админов - команда /admin";

    /// Prompt shown together with the main inline menu
    pub const CHOOSE_SECTION: &str = "Выберите раздел:";

    /// Placeholder served for departments without a stored record
    pub const NO_INFORMATION: &str = "Информация отсутствует";
}
