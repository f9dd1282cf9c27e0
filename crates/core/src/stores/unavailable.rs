use crate::{error::StorageError, persistence::PersistentStore};

/// Stands in for a store that does not exist in the current execution context,
/// e.g. code running outside a browser window.
#[derive(Default, Debug, Clone, Copy)]
pub struct UnavailableStore;

impl PersistentStore for UnavailableStore {
    fn is_available(&self) -> bool {
        false
    }

    fn get(&self, _key: String) -> Option<String> {
        None
    }

    fn set(&self, _key: String, _value: String) -> Result<(), StorageError> {
        Err(StorageError::StoreUnavailable)
    }

    fn remove_entry(&self, _key: String) -> Result<(), StorageError> {
        Err(StorageError::StoreUnavailable)
    }
}
