//! Inline and reply keyboards
//!
//! All callback payloads are produced through [`CallbackCommand`] so the
//! wire encoding lives in one place.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup};

use crate::core::types::Department;
use crate::storage::Event;

use super::callback::{AdminAction, CallbackCommand};

/// Reply-keyboard button that returns to the main menu.
pub const BUTTON_SECTIONS: &str = "🔍 К разделам";
/// Reply-keyboard button that shows the info text.
pub const BUTTON_INFO: &str = "ℹ️ Информация";

fn cb(text: impl Into<String>, command: CallbackCommand) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(text.into(), command.as_callback_data())
}

/// Main menu with the two content sections.
pub fn main_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        cb("🏛 Кафедры", CallbackCommand::Departments),
        cb("📅 Мероприятия", CallbackCommand::Events),
    ]])
}

/// Persistent reply keyboard shown under every content message.
pub fn template_menu() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![vec![
        KeyboardButton::new(BUTTON_SECTIONS),
        KeyboardButton::new(BUTTON_INFO),
    ]])
    .resize_keyboard()
}

fn department_rows(to_command: impl Fn(Department) -> CallbackCommand) -> Vec<Vec<InlineKeyboardButton>> {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = Vec::new();
    for pair in Department::ALL.chunks(2) {
        rows.push(pair.iter().map(|dept| cb(dept.title(), to_command(*dept))).collect());
    }
    rows
}

/// Department selection for readers.
pub fn departments_menu() -> InlineKeyboardMarkup {
    let mut rows = department_rows(CallbackCommand::Department);
    rows.push(vec![cb("🔙 Назад", CallbackCommand::BackToMain)]);
    InlineKeyboardMarkup::new(rows)
}

/// Top-level admin panel.
pub fn admin_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        cb("➕ Добавить", CallbackCommand::Admin(AdminAction::ShowAddMenu)),
        cb("🗑 Удалить", CallbackCommand::Admin(AdminAction::DeleteMenu)),
    ]])
}

/// "What do you want to add?" submenu.
pub fn admin_add_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![
            cb("Кафедру", CallbackCommand::Admin(AdminAction::ChooseDepartment)),
            cb("Мероприятие", CallbackCommand::Admin(AdminAction::AddEvent)),
        ],
        vec![cb("🔙 Назад", CallbackCommand::Admin(AdminAction::Back))],
    ])
}

/// Department selection for the editing dialog.
pub fn admin_departments_menu() -> InlineKeyboardMarkup {
    let mut rows = department_rows(|dept| {
        CallbackCommand::Admin(AdminAction::AddDepartment {
            key: dept.key().to_string(),
        })
    });
    rows.push(vec![cb("🔙 Назад", CallbackCommand::Admin(AdminAction::Back))]);
    InlineKeyboardMarkup::new(rows)
}

/// Event list with one delete button per stored event.
pub fn admin_delete_menu(events: &[Event]) -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = events
        .iter()
        .map(|event| {
            let mut label: String = event.text.chars().take(30).collect();
            if event.text.chars().count() > 30 {
                label.push('…');
            }
            vec![cb(
                format!("❌ {}: {}", event.id, label),
                CallbackCommand::Admin(AdminAction::DeleteEvent { id: event.id }),
            )]
        })
        .collect();
    rows.push(vec![cb("🔙 Назад", CallbackCommand::Admin(AdminAction::Back))]);
    InlineKeyboardMarkup::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_departments_menu_covers_fixed_set() {
        let markup = departments_menu();
        let buttons: usize = markup.inline_keyboard.iter().map(|row| row.len()).sum();
        // All departments plus the back button.
        assert_eq!(buttons, Department::ALL.len() + 1);
    }

    #[test]
    fn test_delete_menu_truncates_long_text() {
        let events = vec![Event {
            id: 7,
            text: "x".repeat(100),
            photo: None,
        }];
        let markup = admin_delete_menu(&events);
        assert_eq!(markup.inline_keyboard.len(), 2);
    }
}
