//! Persistent registry of hidden windows.
//!
//! Records are keyed by window address. Methods here do not lock; callers
//! that read-modify-write hold a [`RegistryLock`] for the whole operation.

pub mod errors;
pub mod lock;
pub mod persistence;
pub mod types;
pub mod validation;

use std::path::{Path, PathBuf};

pub use errors::RegistryError;
pub use lock::RegistryLock;
pub use types::WindowRecord;
pub use validation::validate_address;

#[derive(Debug, Clone)]
pub struct WindowRegistry {
    dir: PathBuf,
}

impl WindowRegistry {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn ensure_directory(&self) -> Result<(), RegistryError> {
        persistence::ensure_registry_directory(&self.dir)
    }

    /// Where the thumbnail for `address` lives.
    pub fn screenshot_path(&self, address: &str) -> Result<PathBuf, RegistryError> {
        validate_address(address)?;
        Ok(persistence::screenshot_file(&self.dir, address))
    }

    /// Insert or replace the record for `record.address`.
    pub fn put(&self, record: &WindowRecord) -> Result<(), RegistryError> {
        validate_address(&record.address)?;
        persistence::ensure_registry_directory(&self.dir)?;
        persistence::save_record_to_file(record, &self.dir)?;

        tracing::debug!(
            event = "core.registry.put_completed",
            address = %record.address,
            synthesized = record.synthesized
        );
        Ok(())
    }

    pub fn get(&self, address: &str) -> Result<Option<WindowRecord>, RegistryError> {
        validate_address(address)?;
        persistence::load_record_from_file(address, &self.dir)
    }

    /// Remove the record and its thumbnail. Removing an absent record is not an error.
    pub fn delete(&self, address: &str) -> Result<(), RegistryError> {
        validate_address(address)?;
        persistence::remove_record_files(&self.dir, address)?;

        tracing::debug!(event = "core.registry.delete_completed", address = %address);
        Ok(())
    }

    /// Every valid record, oldest first. Invalid files are logged and skipped.
    pub fn list_all(&self) -> Result<Vec<WindowRecord>, RegistryError> {
        let (mut records, skipped) = persistence::load_records_from_files(&self.dir)?;
        if skipped > 0 {
            tracing::warn!(
                event = "core.registry.list_skipped_files",
                skipped = skipped,
                dir = %self.dir.display()
            );
        }
        records.sort_by(|a, b| {
            a.hidden_at
                .cmp(&b.hidden_at)
                .then_with(|| a.address.cmp(&b.address))
        });
        Ok(records)
    }

    /// Block until this process holds the registry lock.
    pub fn lock(&self) -> Result<RegistryLock, RegistryError> {
        lock::acquire_lock(&self.dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wm::types::{Position, WorkspaceId};
    use tempfile::TempDir;

    fn record(address: &str, hidden_at: &str) -> WindowRecord {
        WindowRecord {
            address: address.to_string(),
            title: "editor".to_string(),
            class: "code".to_string(),
            position: Position { x: 10, y: 20 },
            workspace: WorkspaceId::Id(1),
            was_floating: true,
            screenshot_path: None,
            hidden_at: hidden_at.to_string(),
            synthesized: false,
        }
    }

    #[test]
    fn test_put_get_delete() {
        let temp_dir = TempDir::new().unwrap();
        let registry = WindowRegistry::new(temp_dir.path().join("records"));
        let r = record("0xa1", "2026-03-01T10:00:00+00:00");

        registry.put(&r).unwrap();
        assert_eq!(registry.get("0xa1").unwrap(), Some(r));

        registry.delete("0xa1").unwrap();
        assert_eq!(registry.get("0xa1").unwrap(), None);
        registry.delete("0xa1").unwrap();
    }

    #[test]
    fn test_put_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let registry = WindowRegistry::new(temp_dir.path());
        let mut r = record("0xa1", "2026-03-01T10:00:00+00:00");
        registry.put(&r).unwrap();

        r.position = Position { x: 500, y: 600 };
        registry.put(&r).unwrap();

        assert_eq!(registry.list_all().unwrap(), vec![r]);
    }

    #[test]
    fn test_delete_removes_thumbnail() {
        let temp_dir = TempDir::new().unwrap();
        let registry = WindowRegistry::new(temp_dir.path());
        registry
            .put(&record("0xa1", "2026-03-01T10:00:00+00:00"))
            .unwrap();
        let shot = registry.screenshot_path("0xa1").unwrap();
        std::fs::write(&shot, b"png").unwrap();

        registry.delete("0xa1").unwrap();
        assert!(!shot.exists());
    }

    #[test]
    fn test_list_all_sorted_by_hidden_at() {
        let temp_dir = TempDir::new().unwrap();
        let registry = WindowRegistry::new(temp_dir.path());
        registry
            .put(&record("0xb2", "2026-03-02T10:00:00+00:00"))
            .unwrap();
        registry
            .put(&record("0xa1", "2026-03-01T10:00:00+00:00"))
            .unwrap();

        let addresses: Vec<_> = registry
            .list_all()
            .unwrap()
            .into_iter()
            .map(|r| r.address)
            .collect();
        assert_eq!(addresses, vec!["0xa1", "0xb2"]);
    }

    #[test]
    fn test_invalid_address_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let registry = WindowRegistry::new(temp_dir.path());

        let result = registry.put(&record("../escape", "x"));
        assert!(matches!(result, Err(RegistryError::InvalidAddress { .. })));
        assert!(registry.get("").is_err());
        assert!(registry.delete("a/b").is_err());
    }

    #[test]
    fn test_lock_file_not_listed() {
        let temp_dir = TempDir::new().unwrap();
        let registry = WindowRegistry::new(temp_dir.path());
        let _lock = registry.lock().unwrap();
        registry
            .put(&record("0xa1", "2026-03-01T10:00:00+00:00"))
            .unwrap();

        assert_eq!(registry.list_all().unwrap().len(), 1);
    }
}
