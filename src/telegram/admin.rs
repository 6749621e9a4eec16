//! Admin functionality for the Telegram bot
//!
//! This module contains the content-editing side of the bot:
//! - The /admin panel and its callback actions
//! - The guided add-department / add-event dialogs
//! - The delete-event flow
//!
//! Every entry point is gated by the ADMIN_IDS allow-list before any
//! conversation state is touched.

use anyhow::Result;
use teloxide::net::Download;
use teloxide::prelude::*;
use teloxide::types::{CallbackQueryId, KeyboardRemove, MessageId};

use crate::core::config::admin::ADMIN_IDS;
use crate::core::error::{AppError, AppResult};
use crate::core::types::Department;
use crate::telegram::callback::AdminAction;
use crate::telegram::dialog::{DialogStage, PhotoOutcome, TextOutcome};
use crate::telegram::menu;

use super::handlers::HandlerDeps;

const DENIED_MESSAGE: &str = "⛔ У вас нет доступа!";
const DENIED_TOAST: &str = "⛔ Доступ запрещен";

/// Check if user is admin
pub fn is_admin(user_id: i64) -> bool {
    ADMIN_IDS.contains(&user_id)
}

/// Handle /admin command - show admin control panel
///
/// # Arguments
/// * `bot` - Bot instance
/// * `chat_id` - Chat ID where to send response
/// * `user_id` - Telegram user ID of the requester
pub async fn handle_admin_command(bot: &Bot, chat_id: ChatId, user_id: i64) -> Result<()> {
    if !is_admin(user_id) {
        log::warn!("User {} tried to open the admin panel without permission", user_id);
        bot.send_message(chat_id, DENIED_MESSAGE).await?;
        return Ok(());
    }

    bot.send_message(chat_id, "🔐 Админ-панель:")
        .reply_markup(menu::admin_menu())
        .await?;
    Ok(())
}

/// Handle a decoded `admin_*` callback action.
///
/// Unauthorized presses are answered with a toast and change nothing.
pub async fn handle_admin_callback(
    bot: &Bot,
    callback_id: CallbackQueryId,
    chat_id: ChatId,
    message_id: MessageId,
    user_id: i64,
    action: AdminAction,
    deps: &HandlerDeps,
) -> Result<()> {
    if !is_admin(user_id) {
        log::warn!("User {} pressed admin button {:?} without permission", user_id, action);
        bot.answer_callback_query(callback_id).text(DENIED_TOAST).await?;
        return Ok(());
    }

    match action {
        AdminAction::ShowAddMenu => {
            bot.answer_callback_query(callback_id).await?;
            bot.edit_message_text(chat_id, message_id, "Что вы хотите добавить?")
                .reply_markup(menu::admin_add_menu())
                .await?;
        }
        AdminAction::ChooseDepartment => {
            bot.answer_callback_query(callback_id).await?;
            deps.dialog.set(chat_id, DialogStage::ChoosingDepartment);
            bot.edit_message_text(chat_id, message_id, "Выберите кафедру для редактирования:")
                .reply_markup(menu::admin_departments_menu())
                .await?;
        }
        AdminAction::AddDepartment { key } => {
            let department = match key.parse::<Department>() {
                Ok(dept) => dept,
                Err(_) => {
                    // Stale or forged payload: reject, keep the stage as is.
                    log::warn!("Admin {} picked unknown department key '{}'", user_id, key);
                    bot.answer_callback_query(callback_id).text("❌ Кафедра не найдена").await?;
                    return Ok(());
                }
            };

            bot.answer_callback_query(callback_id).await?;
            deps.dialog.set(chat_id, DialogStage::AwaitingDepartmentText { department });
            bot.send_message(
                chat_id,
                format!("✏️ Введите текст для кафедры {}:", department.title()),
            )
            .reply_markup(KeyboardRemove::new())
            .await?;
        }
        AdminAction::AddEvent => {
            bot.answer_callback_query(callback_id).await?;
            deps.dialog.set(chat_id, DialogStage::AwaitingEventText);
            bot.send_message(chat_id, "Введите текст мероприятия:")
                .reply_markup(KeyboardRemove::new())
                .await?;
        }
        AdminAction::DeleteMenu => {
            let events = deps.store.list_events();
            if events.is_empty() {
                bot.answer_callback_query(callback_id)
                    .text("Нет доступных мероприятий")
                    .await?;
                return Ok(());
            }
            bot.answer_callback_query(callback_id).await?;
            bot.edit_message_text(chat_id, message_id, "Выберите мероприятие для удаления:")
                .reply_markup(menu::admin_delete_menu(&events))
                .await?;
        }
        AdminAction::DeleteEvent { id } => match deps.store.delete_event(id) {
            Ok(()) => {
                bot.answer_callback_query(callback_id).text("🗑 Мероприятие удалено").await?;
                let events = deps.store.list_events();
                if events.is_empty() {
                    bot.edit_message_text(chat_id, message_id, "🔐 Админ-панель:")
                        .reply_markup(menu::admin_menu())
                        .await?;
                } else {
                    bot.edit_message_text(chat_id, message_id, "Выберите мероприятие для удаления:")
                        .reply_markup(menu::admin_delete_menu(&events))
                        .await?;
                }
            }
            Err(e) => {
                log::error!("Failed to delete event {}: {}", id, e);
                bot.answer_callback_query(callback_id).await?;
                bot.send_message(chat_id, "⚠️ Не удалось удалить мероприятие. Попробуйте ещё раз.")
                    .await?;
            }
        },
        AdminAction::Back => {
            bot.answer_callback_query(callback_id).await?;
            bot.edit_message_text(chat_id, message_id, "🔐 Админ-панель:")
                .reply_markup(menu::admin_menu())
                .await?;
        }
    }

    Ok(())
}

/// Offer a text message to the dialog engine.
///
/// Returns `true` when the message belonged to an admin dialog (consumed),
/// `false` when the caller should treat it as ordinary chat text.
pub async fn handle_admin_text(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> Result<bool> {
    let user_id = msg.from.as_ref().and_then(|u| i64::try_from(u.id.0).ok()).unwrap_or(0);
    if !is_admin(user_id) {
        return Ok(false);
    }
    let text = match msg.text() {
        Some(text) => text,
        None => return Ok(false),
    };

    match deps.dialog.note_text(msg.chat.id, text) {
        TextOutcome::NoDialog => Ok(false),
        TextOutcome::WrongModality { stage } => {
            bot.send_message(msg.chat.id, wrong_text_hint(&stage)).await?;
            Ok(true)
        }
        TextOutcome::DepartmentPhotoNext { department } => {
            bot.send_message(
                msg.chat.id,
                format!("📷 Теперь отправьте фото для кафедры {}:", department.title()),
            )
            .await?;
            Ok(true)
        }
        TextOutcome::EventPhotoNext => {
            bot.send_message(msg.chat.id, "Теперь отправьте фото для мероприятия:").await?;
            Ok(true)
        }
    }
}

/// Offer a photo message to the dialog engine.
///
/// Completing a dialog persists the record; the state survives a failed
/// write so the admin can simply resend the photo.
pub async fn handle_admin_photo(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> Result<bool> {
    let user_id = msg.from.as_ref().and_then(|u| i64::try_from(u.id.0).ok()).unwrap_or(0);
    if !is_admin(user_id) {
        return Ok(false);
    }

    match deps.dialog.peek_photo(msg.chat.id) {
        PhotoOutcome::NoDialog => Ok(false),
        PhotoOutcome::WrongModality { stage } => {
            bot.send_message(msg.chat.id, wrong_photo_hint(&stage)).await?;
            Ok(true)
        }
        PhotoOutcome::CompletesDepartment { department, text } => {
            let filename = match download_photo(bot, msg, deps).await {
                Ok(filename) => filename,
                Err(e) => {
                    log::error!("Failed to store photo for department {}: {}", department.key(), e);
                    bot.send_message(msg.chat.id, "⚠️ Не удалось сохранить фото. Отправьте его ещё раз.")
                        .await?;
                    return Ok(true);
                }
            };

            if deps.store.update_department(department, &text, Some(filename)) {
                deps.dialog.clear(msg.chat.id);
                bot.send_message(msg.chat.id, format!("✅ Кафедра {} обновлена!", department.title()))
                    .reply_markup(menu::template_menu())
                    .await?;
            } else {
                bot.send_message(
                    msg.chat.id,
                    "⚠️ Не удалось сохранить данные кафедры. Отправьте фото ещё раз.",
                )
                .await?;
            }
            Ok(true)
        }
        PhotoOutcome::CompletesEvent { text } => {
            let filename = match download_photo(bot, msg, deps).await {
                Ok(filename) => filename,
                Err(e) => {
                    log::error!("Failed to store event photo: {}", e);
                    bot.send_message(msg.chat.id, "⚠️ Не удалось сохранить фото. Отправьте его ещё раз.")
                        .await?;
                    return Ok(true);
                }
            };

            match deps.store.add_event(&text, Some(filename)) {
                Ok(event) => {
                    deps.dialog.clear(msg.chat.id);
                    log::info!("Admin {} added event {}", user_id, event.id);
                    bot.send_message(msg.chat.id, "✅ Мероприятие успешно добавлено!")
                        .reply_markup(menu::template_menu())
                        .await?;
                }
                Err(e) => {
                    log::error!("Failed to save event: {}", e);
                    bot.send_message(
                        msg.chat.id,
                        "⚠️ Не удалось сохранить мероприятие. Отправьте фото ещё раз.",
                    )
                    .await?;
                }
            }
            Ok(true)
        }
    }
}

fn wrong_text_hint(stage: &DialogStage) -> &'static str {
    match stage {
        DialogStage::ChoosingDepartment => "Выберите кафедру кнопкой в меню выше.",
        _ => "📷 Сейчас нужно отправить фото.",
    }
}

fn wrong_photo_hint(stage: &DialogStage) -> &'static str {
    match stage {
        DialogStage::ChoosingDepartment => "Выберите кафедру кнопкой в меню выше.",
        _ => "✏️ Сейчас нужно отправить текст.",
    }
}

/// Downloads the highest-resolution variant of the message's photo and
/// hands the blob to the store, returning the generated filename.
async fn download_photo(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> AppResult<String> {
    let photo = msg
        .photo()
        .and_then(|sizes| sizes.last())
        .ok_or_else(|| AppError::Validation("message carries no photo".to_string()))?;

    let file = bot.get_file(photo.file.id.clone()).await?;
    let mut blob: Vec<u8> = Vec::with_capacity(file.size as usize);
    bot.download_file(&file.path, &mut blob).await?;

    deps.store.save_photo(&blob)
}
