use std::{collections::HashMap, sync::Mutex};

use crate::{error::StorageError, persistence::PersistentStore};

/// A process-local store. Entries live as long as the store itself.
#[derive(Default, Debug)]
pub struct MemoryStore(Mutex<HashMap<String, String>>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.lock().expect("lock poisoned!").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PersistentStore for MemoryStore {
    fn is_available(&self) -> bool {
        true
    }

    fn get(&self, key: String) -> Option<String> {
        self.0.lock().expect("lock poisoned!").get(&key).cloned()
    }

    fn set(&self, key: String, value: String) -> Result<(), StorageError> {
        self.0.lock().expect("lock poisoned!").insert(key, value);
        Ok(())
    }

    fn remove_entry(&self, key: String) -> Result<(), StorageError> {
        self.0.lock().expect("lock poisoned!").remove(&key);
        Ok(())
    }
}
