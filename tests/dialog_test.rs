//! Integration tests for the admin dialog state machine
//!
//! These drive the tracker and the store together the way the Telegram
//! handlers do, minus the transport.
//!
//! Run with: cargo test --test dialog_test

use pretty_assertions::assert_eq;
use teloxide::types::ChatId;
use tempfile::TempDir;

use kafedra_bot::core::Department;
use kafedra_bot::storage::{ContentStore, DepartmentRecord};
use kafedra_bot::telegram::admin::is_admin;
use kafedra_bot::telegram::dialog::{DialogStage, DialogTracker, PhotoOutcome, TextOutcome};

const ADMIN_CHAT: ChatId = ChatId(777);

fn fresh_store() -> (TempDir, ContentStore) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let store = ContentStore::new(&dir.path().join("data"), &dir.path().join("images"));
    (dir, store)
}

#[test]
fn test_full_department_dialog_walk() {
    let (_guard, store) = fresh_store();
    let tracker = DialogTracker::new();
    let dept = Department::SystemsEngineering;

    // "add department" pressed
    tracker.set(ADMIN_CHAT, DialogStage::ChoosingDepartment);
    assert_eq!(tracker.get(ADMIN_CHAT), Some(DialogStage::ChoosingDepartment));

    // key picked from the fixed set
    tracker.set(ADMIN_CHAT, DialogStage::AwaitingDepartmentText { department: dept });

    // text received
    assert_eq!(
        tracker.note_text(ADMIN_CHAT, "hello"),
        TextOutcome::DepartmentPhotoNext { department: dept }
    );

    // photo received: persist, then clear
    let outcome = tracker.peek_photo(ADMIN_CHAT);
    let (department, text) = match outcome {
        PhotoOutcome::CompletesDepartment { department, text } => (department, text),
        other => panic!("unexpected outcome: {:?}", other),
    };
    let filename = store.save_photo(b"blob").unwrap();
    assert!(store.update_department(department, &text, Some(filename.clone())));
    tracker.clear(ADMIN_CHAT);

    // back to idle, record persisted
    assert_eq!(tracker.get(ADMIN_CHAT), None);
    let record = store.get_department(dept);
    assert_eq!(record.text, "hello");
    assert_eq!(record.photo, Some(filename));
}

#[test]
fn test_full_event_dialog_walk() {
    let (_guard, store) = fresh_store();
    let tracker = DialogTracker::new();

    tracker.set(ADMIN_CHAT, DialogStage::AwaitingEventText);
    assert_eq!(tracker.note_text(ADMIN_CHAT, "concert"), TextOutcome::EventPhotoNext);

    let text = match tracker.peek_photo(ADMIN_CHAT) {
        PhotoOutcome::CompletesEvent { text } => text,
        other => panic!("unexpected outcome: {:?}", other),
    };
    let filename = store.save_photo(b"poster").unwrap();
    let event = store.add_event(&text, Some(filename)).unwrap();
    tracker.clear(ADMIN_CHAT);

    assert_eq!(event.id, 1);
    assert_eq!(tracker.get(ADMIN_CHAT), None);

    let events = store.list_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].text, "concert");
}

#[test]
fn test_photo_at_text_stage_changes_nothing() {
    let (_guard, store) = fresh_store();
    let tracker = DialogTracker::new();
    let dept = Department::ManagementProblems;
    let stage = DialogStage::AwaitingDepartmentText { department: dept };
    tracker.set(ADMIN_CHAT, stage.clone());

    assert_eq!(
        tracker.peek_photo(ADMIN_CHAT),
        PhotoOutcome::WrongModality { stage: stage.clone() }
    );

    // stage unchanged, nothing persisted
    assert_eq!(tracker.get(ADMIN_CHAT), Some(stage));
    assert_eq!(store.get_department(dept), DepartmentRecord::placeholder());
}

#[test]
fn test_text_at_photo_stage_keeps_pending_fields() {
    let tracker = DialogTracker::new();
    let stage = DialogStage::AwaitingDepartmentPhoto {
        department: Department::AutomaticSystems,
        text: "pending text".to_string(),
    };
    tracker.set(ADMIN_CHAT, stage.clone());

    assert_eq!(
        tracker.note_text(ADMIN_CHAT, "still not a photo"),
        TextOutcome::WrongModality { stage: stage.clone() }
    );
    assert_eq!(tracker.get(ADMIN_CHAT), Some(stage));
}

#[test]
fn test_starting_new_dialog_discards_unfinished_one() {
    let tracker = DialogTracker::new();

    tracker.set(
        ADMIN_CHAT,
        DialogStage::AwaitingDepartmentPhoto {
            department: Department::IndustrialInformatics,
            text: "half done".to_string(),
        },
    );
    // admin opens "add event" instead of finishing
    tracker.set(ADMIN_CHAT, DialogStage::AwaitingEventText);

    assert_eq!(tracker.get(ADMIN_CHAT), Some(DialogStage::AwaitingEventText));
    assert_eq!(tracker.note_text(ADMIN_CHAT, "party"), TextOutcome::EventPhotoNext);
}

#[test]
fn test_failed_persistence_leaves_dialog_resumable() {
    let guard = TempDir::new().unwrap();
    let data_dir = guard.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    // Block the departments directory so the write fails.
    std::fs::write(data_dir.join("departments"), b"in the way").unwrap();
    let store = ContentStore::new(&data_dir, &guard.path().join("images"));

    let tracker = DialogTracker::new();
    let dept = Department::ComputerSecurity;
    tracker.set(ADMIN_CHAT, DialogStage::AwaitingDepartmentText { department: dept });
    tracker.note_text(ADMIN_CHAT, "text");

    let stage_before = tracker.get(ADMIN_CHAT);
    let (department, text) = match tracker.peek_photo(ADMIN_CHAT) {
        PhotoOutcome::CompletesDepartment { department, text } => (department, text),
        other => panic!("unexpected outcome: {:?}", other),
    };

    // The write fails; the handler keeps the state so the admin can resend.
    assert!(!store.update_department(department, &text, None));
    assert_eq!(tracker.get(ADMIN_CHAT), stage_before);
}

#[test]
fn test_dialog_state_is_per_chat() {
    let tracker = DialogTracker::new();
    let other_chat = ChatId(778);

    tracker.set(ADMIN_CHAT, DialogStage::AwaitingEventText);
    assert_eq!(tracker.get(other_chat), None);
    assert_eq!(tracker.note_text(other_chat, "hi"), TextOutcome::NoDialog);

    // The first admin's dialog is untouched.
    assert_eq!(tracker.get(ADMIN_CHAT), Some(DialogStage::AwaitingEventText));
}

#[test]
fn test_without_allow_list_nobody_is_admin() {
    // ADMIN_IDS is unset in the test environment; the gate rejects
    // everyone, so no conversation state can ever be created for them.
    if kafedra_bot::core::config::admin::ADMIN_IDS.is_empty() {
        assert!(!is_admin(0));
        assert!(!is_admin(777));
    }
}
