//! Per-admin conversation state for the content-editing dialogs
//!
//! The tracker is volatile: it lives for the process lifetime, one entry
//! per admin chat, and is passed around inside `HandlerDeps` rather than
//! sitting in a global. Starting a new dialog overwrites whatever dialog
//! the same admin had in flight.

use std::collections::HashMap;
use std::sync::Mutex;

use teloxide::types::ChatId;

use crate::core::types::Department;

/// Current step of an admin's in-progress dialog.
///
/// Data-bearing variants carry the input accumulated so far, so a pending
/// department key is a [`Department`] by construction and can never fall
/// outside the fixed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogStage {
    /// Department-selection menu is open, no key picked yet.
    ChoosingDepartment,
    AwaitingDepartmentText { department: Department },
    AwaitingDepartmentPhoto { department: Department, text: String },
    AwaitingEventText,
    AwaitingEventPhoto { text: String },
}

/// What feeding a text message into the state machine produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextOutcome {
    /// No dialog in flight for this chat; the text is not ours.
    NoDialog,
    /// A dialog is in flight but the stage does not take text.
    /// No transition happened.
    WrongModality { stage: DialogStage },
    /// Text accepted, now awaiting the department photo.
    DepartmentPhotoNext { department: Department },
    /// Text accepted, now awaiting the event photo.
    EventPhotoNext,
}

/// What a photo message would do at the current stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoOutcome {
    /// No dialog in flight for this chat; the photo is not ours.
    NoDialog,
    /// A dialog is in flight but the stage does not take a photo.
    /// No transition happened.
    WrongModality { stage: DialogStage },
    /// A photo completes the department dialog with these pending fields.
    CompletesDepartment { department: Department, text: String },
    /// A photo completes the event dialog with this pending text.
    CompletesEvent { text: String },
}

/// In-memory map from admin chat to dialog stage.
#[derive(Debug, Default)]
pub struct DialogTracker {
    states: Mutex<HashMap<ChatId, DialogStage>>,
}

impl DialogTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, chat: ChatId) -> Option<DialogStage> {
        self.states.lock().expect("dialog tracker poisoned").get(&chat).cloned()
    }

    /// Sets the stage, silently discarding any unfinished dialog.
    pub fn set(&self, chat: ChatId, stage: DialogStage) {
        self.states.lock().expect("dialog tracker poisoned").insert(chat, stage);
    }

    pub fn clear(&self, chat: ChatId) {
        self.states.lock().expect("dialog tracker poisoned").remove(&chat);
    }

    /// Feeds a text message into the state machine, advancing the stage
    /// when the dialog is waiting for text.
    pub fn note_text(&self, chat: ChatId, text: &str) -> TextOutcome {
        let mut states = self.states.lock().expect("dialog tracker poisoned");
        match states.get(&chat).cloned() {
            None => TextOutcome::NoDialog,
            Some(DialogStage::AwaitingDepartmentText { department }) => {
                states.insert(
                    chat,
                    DialogStage::AwaitingDepartmentPhoto {
                        department,
                        text: text.to_string(),
                    },
                );
                TextOutcome::DepartmentPhotoNext { department }
            }
            Some(DialogStage::AwaitingEventText) => {
                states.insert(chat, DialogStage::AwaitingEventPhoto { text: text.to_string() });
                TextOutcome::EventPhotoNext
            }
            Some(stage) => TextOutcome::WrongModality { stage },
        }
    }

    /// Reports what a photo would complete at the current stage.
    ///
    /// Deliberately does not clear the state: the caller clears only after
    /// the blob and record are persisted, so a failed write leaves the
    /// admin free to resend the photo.
    pub fn peek_photo(&self, chat: ChatId) -> PhotoOutcome {
        match self.get(chat) {
            None => PhotoOutcome::NoDialog,
            Some(DialogStage::AwaitingDepartmentPhoto { department, text }) => {
                PhotoOutcome::CompletesDepartment { department, text }
            }
            Some(DialogStage::AwaitingEventPhoto { text }) => PhotoOutcome::CompletesEvent { text },
            Some(stage) => PhotoOutcome::WrongModality { stage },
        }
    }
}
