//! Favorite book ids persisted in a durable key-value slot

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

pub const FAVORITES_KEY: &str = "bookFinderFavorites";

/// A single durable string slot
pub trait KeyValueSlot: Send + Sync {
    /// `Ok(None)` when nothing has been written yet
    fn read(&self) -> Result<Option<String>, StoreError>;
    fn write(&self, value: &str) -> Result<(), StoreError>;
}

/// Slot stored as `<dir>/<key>.json`
pub struct FileSlot {
    dir: PathBuf,
    path: PathBuf,
}

impl FileSlot {
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        let dir = dir.as_ref().to_path_buf();
        let path = dir.join(format!("{}.json", key));
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueSlot for FileSlot {
    fn read(&self) -> Result<Option<String>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path)?))
    }

    fn write(&self, value: &str) -> Result<(), StoreError> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }
        fs::write(&self.path, value)?;
        Ok(())
    }
}

/// Result of a toggle. `favorites` is always the updated list, even when
/// it could not be written
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub favorites: Vec<String>,
    pub persisted: bool,
}

pub struct FavoritesStore {
    slot: Box<dyn KeyValueSlot>,
}

impl FavoritesStore {
    pub fn new(slot: Box<dyn KeyValueSlot>) -> Self {
        Self { slot }
    }

    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(Box::new(FileSlot::new(dir, FAVORITES_KEY)))
    }

    /// Read the stored ids. Any failure yields an empty list
    pub fn load(&self) -> Vec<String> {
        match self.try_load() {
            Ok(ids) => {
                tracing::info!(count = ids.len(), "Favorites loaded");
                ids
            }
            Err(e) => {
                tracing::error!(error = %e, "Error loading favorites, starting with none");
                Vec::new()
            }
        }
    }

    fn try_load(&self) -> Result<Vec<String>, StoreError> {
        let Some(content) = self.slot.read()? else {
            return Ok(Vec::new());
        };
        let stored: Vec<String> = serde_json::from_str(&content)?;

        let mut ids: Vec<String> = Vec::with_capacity(stored.len());
        for id in stored {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Ok(ids)
    }

    /// Add `id` if absent, remove it if present, then persist
    pub fn toggle(&self, id: &str, current: &[String]) -> ToggleOutcome {
        let favorites: Vec<String> = if current.iter().any(|fav| fav == id) {
            current.iter().filter(|fav| *fav != id).cloned().collect()
        } else {
            current.iter().cloned().chain(std::iter::once(id.to_string())).collect()
        };

        let persisted = self.save(&favorites);
        ToggleOutcome { favorites, persisted }
    }

    /// Write the list, retrying once. Returns whether a write succeeded
    fn save(&self, favorites: &[String]) -> bool {
        let content = match serde_json::to_string(favorites) {
            Ok(content) => content,
            Err(e) => {
                tracing::error!(error = %e, "Error serializing favorites");
                return false;
            }
        };

        for attempt in 1..=2 {
            match self.slot.write(&content) {
                Ok(()) => {
                    tracing::debug!(count = favorites.len(), attempt, "Favorites saved");
                    return true;
                }
                Err(e) => tracing::warn!(error = %e, attempt, "Error saving favorites"),
            }
        }

        tracing::error!("Giving up on saving favorites; in-memory list kept");
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Slot that fails its first `failures` writes
    struct FlakySlot {
        failures: usize,
        writes: AtomicUsize,
        value: Mutex<Option<String>>,
    }

    impl FlakySlot {
        fn failing(failures: usize) -> Self {
            Self {
                failures,
                writes: AtomicUsize::new(0),
                value: Mutex::new(None),
            }
        }
    }

    impl KeyValueSlot for Arc<FlakySlot> {
        fn read(&self) -> Result<Option<String>, StoreError> {
            Ok(self.value.lock().unwrap().clone())
        }

        fn write(&self, value: &str) -> Result<(), StoreError> {
            let n = self.writes.fetch_add(1, Ordering::SeqCst);
            if n < self.failures {
                return Err(std::io::Error::other("disk full").into());
            }
            *self.value.lock().unwrap() = Some(value.to_string());
            Ok(())
        }
    }

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FavoritesStore::in_dir(dir.path().join("nested"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path(), FAVORITES_KEY);
        fs::write(slot.path(), "{not json").unwrap();

        let store = FavoritesStore::new(Box::new(slot));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_collapses_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path(), FAVORITES_KEY);
        fs::write(slot.path(), r#"["a","b","a"]"#).unwrap();

        let store = FavoritesStore::new(Box::new(slot));
        assert_eq!(store.load(), ids(&["a", "b"]));
    }

    #[test]
    fn test_toggle_persists_and_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let store = FavoritesStore::in_dir(dir.path());

        let added = store.toggle("b2", &ids(&["a1"]));
        assert!(added.persisted);
        assert_eq!(added.favorites, ids(&["a1", "b2"]));

        let reopened = FavoritesStore::in_dir(dir.path());
        assert_eq!(reopened.load(), ids(&["a1", "b2"]));

        let content = fs::read_to_string(dir.path().join("bookFinderFavorites.json")).unwrap();
        assert_eq!(content, r#"["a1","b2"]"#);
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let dir = tempfile::tempdir().unwrap();
        let store = FavoritesStore::in_dir(dir.path());
        let original = ids(&["x", "y", "z"]);

        for id in ["y", "new"] {
            let once = store.toggle(id, &original);
            let twice = store.toggle(id, &once.favorites);
            let mut restored = twice.favorites.clone();
            let mut expected = original.clone();
            restored.sort();
            expected.sort();
            assert_eq!(restored, expected);
        }
    }

    #[test]
    fn test_single_write_failure_is_retried() {
        let slot = Arc::new(FlakySlot::failing(1));
        let store = FavoritesStore::new(Box::new(slot.clone()));

        let outcome = store.toggle("a", &[]);
        assert!(outcome.persisted);
        assert_eq!(slot.writes.load(Ordering::SeqCst), 2);
        assert_eq!(store.load(), ids(&["a"]));
    }

    #[test]
    fn test_persistent_write_failure_keeps_in_memory_update() {
        let slot = Arc::new(FlakySlot::failing(usize::MAX));
        let store = FavoritesStore::new(Box::new(slot.clone()));

        let outcome = store.toggle("a", &ids(&["b"]));
        assert!(!outcome.persisted);
        assert_eq!(outcome.favorites, ids(&["b", "a"]));
        assert_eq!(slot.writes.load(Ordering::SeqCst), 2);
    }
}
