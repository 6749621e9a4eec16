//! Read-only content display: welcome/info texts, department pages and
//! the event feed.

use teloxide::prelude::*;
use teloxide::types::{CallbackQueryId, InputFile, MessageId};

use crate::core::config::texts;
use crate::core::types::Department;
use crate::storage::ContentStore;

use super::menu;

/// Handle /start and /help: greeting plus both menus
pub async fn handle_start_command(bot: &Bot, chat_id: ChatId) -> ResponseResult<()> {
    bot.send_message(chat_id, texts::WELCOME_MESSAGE)
        .reply_markup(menu::template_menu())
        .await?;
    bot.send_message(chat_id, texts::CHOOSE_SECTION)
        .reply_markup(menu::main_menu())
        .await?;
    Ok(())
}

/// Handle /info and the "Информация" reply button
pub async fn handle_info_command(bot: &Bot, chat_id: ChatId) -> ResponseResult<()> {
    bot.send_message(chat_id, texts::INFO_MESSAGE)
        .reply_markup(menu::template_menu())
        .await?;
    Ok(())
}

/// Send a fresh main menu (used by the "К разделам" reply button)
pub async fn send_main_menu(bot: &Bot, chat_id: ChatId) -> ResponseResult<()> {
    bot.send_message(chat_id, texts::CHOOSE_SECTION)
        .reply_markup(menu::main_menu())
        .await?;
    Ok(())
}

/// Edit an existing menu message into the department-selection menu
pub async fn show_departments_menu(bot: &Bot, chat_id: ChatId, message_id: MessageId) -> ResponseResult<()> {
    bot.edit_message_text(chat_id, message_id, "Выберите кафедру:")
        .reply_markup(menu::departments_menu())
        .await?;
    Ok(())
}

/// Edit an existing menu message back into the main menu
pub async fn show_main_menu_edit(bot: &Bot, chat_id: ChatId, message_id: MessageId) -> ResponseResult<()> {
    bot.edit_message_text(chat_id, message_id, texts::CHOOSE_SECTION)
        .reply_markup(menu::main_menu())
        .await?;
    Ok(())
}

/// Show one department's page: photo with the text as caption when the
/// blob is available, plain text otherwise.
pub async fn show_department(
    bot: &Bot,
    chat_id: ChatId,
    store: &ContentStore,
    department: Department,
) -> ResponseResult<()> {
    let record = store.get_department(department);
    log::info!("Showing department {}", department.key());

    let photo_path = record.photo.as_deref().map(|name| store.photo_path(name));
    match photo_path {
        Some(path) if path.is_file() => {
            bot.send_photo(chat_id, InputFile::file(path))
                .caption(record.text)
                .reply_markup(menu::template_menu())
                .await?;
        }
        _ => {
            bot.send_message(chat_id, record.text)
                .reply_markup(menu::template_menu())
                .await?;
        }
    }
    Ok(())
}

/// Show the event feed, one message per event.
///
/// An empty feed only answers the callback with a toast; otherwise the
/// callback is acknowledged and the feed is sent.
pub async fn show_events(
    bot: &Bot,
    callback_id: CallbackQueryId,
    chat_id: ChatId,
    store: &ContentStore,
) -> ResponseResult<()> {
    let events = store.list_events();
    if events.is_empty() {
        bot.answer_callback_query(callback_id)
            .text("Нет доступных мероприятий")
            .await?;
        return Ok(());
    }
    bot.answer_callback_query(callback_id).await?;

    bot.send_message(chat_id, "📅 Ближайшие мероприятия:")
        .reply_markup(menu::template_menu())
        .await?;

    for event in events {
        let photo_path = event.photo.as_deref().map(|name| store.photo_path(name));
        match photo_path {
            Some(path) if path.is_file() => {
                bot.send_photo(chat_id, InputFile::file(path)).caption(event.text).await?;
            }
            _ => {
                bot.send_message(chat_id, event.text).await?;
            }
        }
    }
    Ok(())
}
