//! Integration tests for the flat-file content store
//!
//! Run with: cargo test --test content_store_test

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use kafedra_bot::core::Department;
use kafedra_bot::storage::{ContentStore, DepartmentRecord};

/// Store rooted in a throwaway directory; the TempDir guard must outlive
/// the store.
fn fresh_store() -> (TempDir, ContentStore) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let store = ContentStore::new(&dir.path().join("data"), &dir.path().join("images"));
    (dir, store)
}

// ============================================================================
// Department record tests
// ============================================================================

mod department_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fresh_store_serves_placeholder_for_every_key() {
        let (_guard, store) = fresh_store();
        for dept in Department::ALL {
            assert_eq!(store.get_department(dept), DepartmentRecord::placeholder());
        }
    }

    #[test]
    fn test_update_then_get_round_trip() {
        let (_guard, store) = fresh_store();

        assert!(store.update_department(Department::Biocybernetics, "T", Some("p.jpg".to_string())));

        let record = store.get_department(Department::Biocybernetics);
        assert_eq!(record.text, "T");
        assert_eq!(record.photo.as_deref(), Some("p.jpg"));
    }

    #[test]
    fn test_update_is_full_overwrite_not_merge() {
        let (_guard, store) = fresh_store();

        assert!(store.update_department(Department::AiTechnologies, "v1", Some("old.jpg".to_string())));
        assert!(store.update_department(Department::AiTechnologies, "v2", None));

        let record = store.get_department(Department::AiTechnologies);
        assert_eq!(record.text, "v2");
        assert_eq!(record.photo, None);
    }

    #[test]
    fn test_updates_do_not_leak_across_keys() {
        let (_guard, store) = fresh_store();

        assert!(store.update_department(Department::HigherMathematics, "math", None));

        assert_eq!(
            store.get_department(Department::ComputerSecurity),
            DepartmentRecord::placeholder()
        );
    }

    #[test]
    fn test_malformed_department_file_degrades_to_placeholder() {
        let (guard, store) = fresh_store();

        let dir = guard.path().join("data").join("departments");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("biocybernetics.json"), b"{not json").unwrap();

        assert_eq!(
            store.get_department(Department::Biocybernetics),
            DepartmentRecord::placeholder()
        );
    }

    #[test]
    fn test_department_file_missing_required_field_degrades_to_placeholder() {
        let (guard, store) = fresh_store();

        let dir = guard.path().join("data").join("departments");
        fs::create_dir_all(&dir).unwrap();
        // Valid JSON, but no "text" field.
        fs::write(dir.join("biocybernetics.json"), br#"{"photo": "p.jpg"}"#).unwrap();

        assert_eq!(
            store.get_department(Department::Biocybernetics),
            DepartmentRecord::placeholder()
        );
    }

    #[test]
    fn test_update_reports_false_when_directory_is_blocked() {
        let guard = TempDir::new().unwrap();
        let data_dir = guard.path().join("data");
        fs::create_dir_all(&data_dir).unwrap();
        // A plain file where the departments directory should go.
        fs::write(data_dir.join("departments"), b"in the way").unwrap();

        let store = ContentStore::new(&data_dir, &guard.path().join("images"));
        assert!(!store.update_department(Department::Biocybernetics, "T", None));
    }
}

// ============================================================================
// Event collection tests
// ============================================================================

mod event_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fresh_store_has_no_events() {
        let (_guard, store) = fresh_store();
        assert!(store.list_events().is_empty());
    }

    #[test]
    fn test_event_ids_are_monotonic_from_one() {
        let (_guard, store) = fresh_store();

        let first = store.add_event("x", None).unwrap();
        assert_eq!(first.id, 1);

        let second = store.add_event("y", Some("p.jpg".to_string())).unwrap();
        assert_eq!(second.id, 2);

        store.delete_event(1).unwrap();
        let remaining = store.list_events();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);
        assert_eq!(remaining[0].text, "y");
    }

    #[test]
    fn test_ids_do_not_reuse_after_tail_delete() {
        let (_guard, store) = fresh_store();

        store.add_event("a", None).unwrap();
        let second = store.add_event("b", None).unwrap();
        store.delete_event(second.id).unwrap();

        // Max remaining id is 1, so the next id is 2 again.
        let third = store.add_event("c", None).unwrap();
        assert_eq!(third.id, 2);
    }

    #[test]
    fn test_delete_unknown_id_is_a_no_op() {
        let (_guard, store) = fresh_store();

        store.add_event("keep me", None).unwrap();
        store.delete_event(999).unwrap();

        let events = store.list_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].text, "keep me");
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let (_guard, store) = fresh_store();

        for text in ["one", "two", "three"] {
            store.add_event(text, None).unwrap();
        }

        let texts: Vec<_> = store.list_events().into_iter().map(|e| e.text).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_malformed_events_file_degrades_to_empty() {
        let (guard, store) = fresh_store();

        let data_dir = guard.path().join("data");
        fs::create_dir_all(&data_dir).unwrap();
        fs::write(data_dir.join("events.json"), b"[1, 2, oops").unwrap();

        assert!(store.list_events().is_empty());
    }
}

// ============================================================================
// Photo blob tests
// ============================================================================

mod photo_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_save_photo_writes_blob_and_returns_filename() {
        let (_guard, store) = fresh_store();

        let filename = store.save_photo(b"jpeg bytes").unwrap();
        assert!(filename.starts_with("photo_"));
        assert!(filename.ends_with(".jpg"));

        let stored = fs::read(store.photo_path(&filename)).unwrap();
        assert_eq!(stored, b"jpeg bytes");
    }

    #[test]
    fn test_rapid_saves_get_distinct_filenames() {
        let (_guard, store) = fresh_store();

        let first = store.save_photo(b"one").unwrap();
        let second = store.save_photo(b"two").unwrap();
        assert_ne!(first, second);
    }
}
