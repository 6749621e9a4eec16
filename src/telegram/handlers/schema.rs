//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::types::{HandlerDeps, HandlerError};
use crate::telegram::admin::{handle_admin_callback, handle_admin_command, handle_admin_photo, handle_admin_text};
use crate::telegram::bot::Command;
use crate::telegram::callback::CallbackCommand;
use crate::telegram::commands::{
    handle_info_command, handle_start_command, send_main_menu, show_department, show_departments_menu, show_events,
    show_main_menu_edit,
};
use crate::telegram::menu::{BUTTON_INFO, BUTTON_SECTIONS};

/// Creates the main dispatcher schema for the Telegram bot.
///
/// This function returns a handler tree that can be used with teloxide's
/// Dispatcher. Any error escaping a handler is logged and reported to the
/// user as a generic notice; the process keeps running.
///
/// # Arguments
/// * `deps` - Handler dependencies (content store, dialog tracker)
///
/// # Returns
/// The complete handler tree for the bot
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_commands = deps.clone();
    let deps_photos = deps.clone();
    let deps_messages = deps.clone();
    let deps_callback = deps;

    dptree::entry()
        // Command handler
        .branch(command_handler(deps_commands))
        // Photos feed the admin dialog engine
        .branch(photo_handler(deps_photos))
        // Reply-keyboard buttons and dialog text input
        .branch(message_handler(deps_messages))
        // Callback query handler
        .branch(callback_handler(deps_callback))
}

/// Reports a handler failure to the user without killing the dispatcher.
async fn report_handler_error(bot: &Bot, chat_id: ChatId, context: &str, err: anyhow::Error) {
    log::error!("{} failed: {:?}", context, err);
    let _ = bot.send_message(chat_id, "⚠️ Произошла ошибка. Попробуйте позже.").await;
}

/// Handler for bot commands (/start, /help, /info, /admin)
fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |bot: Bot, msg: Message, cmd: Command| {
            let _deps = deps.clone();
            async move {
                log::info!("🎯 Received command: {:?} from chat {}", cmd, msg.chat.id);

                let result = match cmd {
                    Command::Start | Command::Help => handle_start_command(&bot, msg.chat.id).await.map_err(Into::into),
                    Command::Info => handle_info_command(&bot, msg.chat.id).await.map_err(Into::into),
                    Command::Admin => {
                        let user_id = msg.from.as_ref().and_then(|u| i64::try_from(u.id.0).ok()).unwrap_or(0);
                        handle_admin_command(&bot, msg.chat.id, user_id).await
                    }
                };

                if let Err(e) = result {
                    report_handler_error(&bot, msg.chat.id, "Command handler", e).await;
                }
                Ok(())
            }
        },
    ))
}

/// Handler for photo messages (admin dialog input)
fn photo_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.photo().is_some())
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                match handle_admin_photo(&bot, &msg, &deps).await {
                    // Photos outside an admin dialog are not addressed to us.
                    Ok(_consumed) => {}
                    Err(e) => report_handler_error(&bot, msg.chat.id, "Photo handler", e).await,
                }
                Ok(())
            }
        })
}

/// Handler for regular text messages (reply buttons, dialog text input)
fn message_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.text().is_some())
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                let text = msg.text().unwrap_or_default();

                let result = match text {
                    BUTTON_SECTIONS => send_main_menu(&bot, msg.chat.id).await.map_err(Into::into),
                    BUTTON_INFO => handle_info_command(&bot, msg.chat.id).await.map_err(Into::into),
                    // Anything else is offered to the dialog engine; text
                    // outside a dialog is simply ignored.
                    _ => handle_admin_text(&bot, &msg, &deps).await.map(|_consumed| ()),
                };

                if let Err(e) = result {
                    report_handler_error(&bot, msg.chat.id, "Message handler", e).await;
                }
                Ok(())
            }
        })
}

/// Handler for callback queries (inline keyboard buttons)
fn callback_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
        let deps = deps.clone();
        async move {
            let data = q.data.as_deref().unwrap_or_default();
            let command = CallbackCommand::parse(data);

            let chat_id = q.message.as_ref().map(|m| m.chat().id);
            let message_id = q.message.as_ref().map(|m| m.id());
            let (chat_id, message_id) = match (chat_id, message_id) {
                (Some(chat_id), Some(message_id)) => (chat_id, message_id),
                _ => {
                    // The originating message is gone; just acknowledge.
                    let _ = bot.answer_callback_query(q.id).await;
                    return Ok(());
                }
            };

            let command = match command {
                Some(command) => command,
                None => {
                    log::warn!("Unknown callback payload '{}' from chat {}", data, chat_id);
                    let _ = bot.answer_callback_query(q.id).await;
                    return Ok(());
                }
            };

            let user_id = i64::try_from(q.from.id.0).unwrap_or(0);
            let callback_id = q.id;

            let result: anyhow::Result<()> = async {
                match command {
                    CallbackCommand::Departments => {
                        bot.answer_callback_query(callback_id).await?;
                        show_departments_menu(&bot, chat_id, message_id).await?;
                    }
                    CallbackCommand::Events => {
                        show_events(&bot, callback_id, chat_id, &deps.store).await?;
                    }
                    CallbackCommand::Department(department) => {
                        bot.answer_callback_query(callback_id).await?;
                        show_department(&bot, chat_id, &deps.store, department).await?;
                    }
                    CallbackCommand::BackToMain => {
                        bot.answer_callback_query(callback_id).await?;
                        show_main_menu_edit(&bot, chat_id, message_id).await?;
                    }
                    CallbackCommand::Admin(action) => {
                        handle_admin_callback(&bot, callback_id, chat_id, message_id, user_id, action, &deps).await?;
                    }
                }
                Ok(())
            }
            .await;

            if let Err(e) = result {
                report_handler_error(&bot, chat_id, "Callback handler", e).await;
            }
            Ok(())
        }
    })
}
