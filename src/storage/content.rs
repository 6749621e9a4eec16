//! Flat-file content store for department records and the event list
//!
//! Departments live one JSON document per key under `<data>/departments/`,
//! events as a single `{"events": [...]}` aggregate at `<data>/events.json`.
//! Reads never fail past this boundary: a missing or corrupt file degrades
//! to a placeholder record or an empty list.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::config::{self, texts};
use crate::core::error::AppResult;
use crate::core::types::Department;

/// Stored description of a single department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentRecord {
    pub text: String,
    pub photo: Option<String>,
}

impl DepartmentRecord {
    /// Record served when nothing (valid) is stored for a department.
    pub fn placeholder() -> Self {
        Self {
            text: texts::NO_INFORMATION.to_string(),
            photo: None,
        }
    }
}

/// One announcement in the event feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub text: String,
    pub photo: Option<String>,
}

/// On-disk shape of the events collection.
#[derive(Debug, Default, Serialize, Deserialize)]
struct EventsFile {
    events: Vec<Event>,
}

/// File-backed store for all bot content.
///
/// Paths are injected so tests can point the store at a temp directory;
/// production uses [`ContentStore::from_env`].
#[derive(Debug, Clone)]
pub struct ContentStore {
    departments_dir: PathBuf,
    events_file: PathBuf,
    images_dir: PathBuf,
}

impl ContentStore {
    pub fn new(data_dir: &Path, images_dir: &Path) -> Self {
        Self {
            departments_dir: data_dir.join("departments"),
            events_file: data_dir.join("events.json"),
            images_dir: images_dir.to_path_buf(),
        }
    }

    /// Store rooted at the configured DATA_DIR / IMAGES_DIR.
    pub fn from_env() -> Self {
        Self::new(&config::DATA_DIR, &config::IMAGES_DIR)
    }

    pub(crate) fn images_dir(&self) -> &Path {
        &self.images_dir
    }

    fn department_file(&self, department: Department) -> PathBuf {
        self.departments_dir.join(format!("{}.json", department.key()))
    }

    /// Returns the stored record for `department`, or the placeholder when
    /// the backing file is missing, unreadable or malformed.
    pub fn get_department(&self, department: Department) -> DepartmentRecord {
        let path = self.department_file(department);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("Failed to read department file {}: {}", path.display(), e);
                }
                return DepartmentRecord::placeholder();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Malformed department file {}: {}", path.display(), e);
                DepartmentRecord::placeholder()
            }
        }
    }

    /// Overwrites the department record entirely (not a merge).
    ///
    /// Returns `false` on I/O failure instead of propagating, so a broken
    /// disk never takes the dialog engine down with it.
    pub fn update_department(&self, department: Department, text: &str, photo: Option<String>) -> bool {
        let record = DepartmentRecord {
            text: text.to_string(),
            photo,
        };

        let path = self.department_file(department);
        match self.write_json(&path, &record) {
            Ok(()) => {
                log::info!("Department {} updated ({})", department.key(), path.display());
                true
            }
            Err(e) => {
                log::error!("Failed to save department {}: {}", department.key(), e);
                false
            }
        }
    }

    /// Returns all events in insertion order; empty when the backing file
    /// is missing or malformed.
    pub fn list_events(&self) -> Vec<Event> {
        let raw = match fs::read_to_string(&self.events_file) {
            Ok(raw) => raw,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("Failed to read events file {}: {}", self.events_file.display(), e);
                }
                return Vec::new();
            }
        };

        match serde_json::from_str::<EventsFile>(&raw) {
            Ok(file) => file.events,
            Err(e) => {
                log::warn!("Malformed events file {}: {}", self.events_file.display(), e);
                Vec::new()
            }
        }
    }

    /// Appends a new event with id = max(existing) + 1 and rewrites the
    /// whole collection.
    pub fn add_event(&self, text: &str, photo: Option<String>) -> AppResult<Event> {
        let mut events = self.list_events();
        let new_id = events.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        let event = Event {
            id: new_id,
            text: text.to_string(),
            photo,
        };
        events.push(event.clone());
        self.write_json(&self.events_file, &EventsFile { events })?;
        log::info!("Event {} added", new_id);
        Ok(event)
    }

    /// Removes the event with the given id; no-op when the id is absent.
    pub fn delete_event(&self, id: i64) -> AppResult<()> {
        let mut events = self.list_events();
        let before = events.len();
        events.retain(|e| e.id != id);
        if events.len() == before {
            log::info!("Event {} not found, nothing to delete", id);
            return Ok(());
        }
        self.write_json(&self.events_file, &EventsFile { events })?;
        log::info!("Event {} deleted", id);
        Ok(())
    }

    fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let body = serde_json::to_vec_pretty(value)?;
        fs::write(path, body)?;
        Ok(())
    }
}
