use std::{
    collections::BTreeMap,
    ffi::OsString,
    fs::{self, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
    sync::Mutex,
};

use log::{debug, warn};

use crate::{error::StorageError, persistence::PersistentStore};

/// A durable store backed by a single JSON object on disk.
///
/// Every write is synced to disk before returning, through a temporary file
/// (`<file name>.tmp` next to the store) that is renamed over the original, so
/// the file always holds a complete map.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Opens the store at `path`. A missing file yields an empty store; the file
    /// is only created on the first write.
    ///
    /// A file that cannot be read (a directory, no permission) is
    /// [StorageError::StoreUnavailable]; only malformed contents are
    /// [StorageError::Decode].
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        let entries = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|e| StorageError::decode(path.display().to_string(), e))?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No store file at {}, starting empty", path.display());
                BTreeMap::new()
            }
            Err(e) => {
                warn!("Cannot read store file {}: {}", path.display(), e);
                return Err(StorageError::StoreUnavailable);
            }
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn flush(&self, key: &str, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let write_failure = |reason: String| StorageError::WriteFailure {
            key: key.to_owned(),
            reason,
        };

        let contents =
            serde_json::to_string_pretty(entries).map_err(|e| write_failure(e.to_string()))?;

        let tmp = self.tmp_path();
        File::create(&tmp)
            .and_then(|mut file| {
                file.write_all(contents.as_bytes())?;
                file.sync_all()
            })
            .map_err(|e| write_failure(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            warn!("Failed to move {} into place: {}", tmp.display(), e);
            write_failure(e.to_string())
        })
    }
}

impl PersistentStore for FileStore {
    fn is_available(&self) -> bool {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.is_dir(),
            _ => true,
        }
    }

    fn get(&self, key: String) -> Option<String> {
        self.entries.lock().expect("lock poisoned!").get(&key).cloned()
    }

    fn set(&self, key: String, value: String) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().expect("lock poisoned!");
        let previous = entries.insert(key.clone(), value);

        if let Err(e) = self.flush(&key, &entries) {
            // keep memory in line with what is on disk
            match previous {
                Some(previous) => entries.insert(key, previous),
                None => entries.remove(&key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove_entry(&self, key: String) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().expect("lock poisoned!");
        let Some(previous) = entries.remove(&key) else {
            return Ok(());
        };

        if let Err(e) = self.flush(&key, &entries) {
            entries.insert(key, previous);
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = FileStore::open(&path).unwrap();
        store.set("ACCESS_TOKEN".into(), "abc123".into()).unwrap();
        store.set("other".into(), "value".into()).unwrap();
        store.remove_entry("other".into()).unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("ACCESS_TOKEN".into()).as_deref(), Some("abc123"));
        assert_eq!(reopened.get("other".into()), None);
    }

    #[test]
    fn missing_file_is_empty_and_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = FileStore::open(&path).unwrap();
        assert!(store.is_available());
        assert_eq!(store.get("USER".into()), None);
        store.remove_entry("USER".into()).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn malformed_file_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();

        let err = FileStore::open(&path).unwrap_err();
        assert!(matches!(err, StorageError::Decode { .. }));
    }

    #[test]
    fn unreadable_path_is_unavailable_not_corrupt() {
        let dir = tempfile::tempdir().unwrap();

        let err = FileStore::open(dir.path()).unwrap_err();
        assert!(matches!(err, StorageError::StoreUnavailable));
    }

    #[test]
    fn temp_file_keeps_full_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let json = FileStore::open(dir.path().join("session.json")).unwrap();
        let db = FileStore::open(dir.path().join("session.db")).unwrap();

        assert_eq!(json.tmp_path(), dir.path().join("session.json.tmp"));
        assert_eq!(db.tmp_path(), dir.path().join("session.db.tmp"));

        json.set("k".into(), "json".into()).unwrap();
        db.set("k".into(), "db".into()).unwrap();
        assert!(!json.tmp_path().exists());
        assert_eq!(
            FileStore::open(dir.path().join("session.json"))
                .unwrap()
                .get("k".into())
                .as_deref(),
            Some("json")
        );
    }

    #[test]
    fn write_into_removed_directory_fails_and_rolls_back() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        let store = FileStore::open(nested.join("session.json")).unwrap();
        fs::remove_dir(&nested).unwrap();

        assert!(!store.is_available());
        let err = store.set("k".into(), "v".into()).unwrap_err();
        assert!(matches!(err, StorageError::WriteFailure { ref key, .. } if key == "k"));
        assert_eq!(store.get("k".into()), None);
    }
}
