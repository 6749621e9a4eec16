//! Photo blob storage
//!
//! Incoming photos are reduced to a filename reference stored inside the
//! department/event documents; the blob itself lands in the images
//! directory. Filenames carry a uuid token next to the timestamp so two
//! uploads within the same second cannot collide.

use std::fs;
use std::path::PathBuf;

use crate::core::error::AppResult;

use super::content::ContentStore;

impl ContentStore {
    /// Writes a downloaded photo blob and returns the generated filename
    /// for reference-storage in records.
    pub fn save_photo(&self, bytes: &[u8]) -> AppResult<String> {
        let token = uuid::Uuid::new_v4().simple().to_string();
        let filename = format!("photo_{}_{}.jpg", chrono::Utc::now().timestamp(), &token[..8]);

        fs::create_dir_all(self.images_dir())?;
        let path = self.images_dir().join(&filename);
        fs::write(&path, bytes)?;

        log::info!("Photo saved: {} ({} bytes)", path.display(), bytes.len());
        Ok(filename)
    }

    /// Resolves a stored filename inside the images directory.
    pub fn photo_path(&self, filename: &str) -> PathBuf {
        self.images_dir().join(filename)
    }
}
