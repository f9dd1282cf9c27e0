use crate::error::StorageError;

/// Provides persistent string storage for session data like tokens and the signed in user.
/// Implementations should handle platform-specific storage (e.g. NSUserDefaults on iOS,
/// `localStorage` in a browser) and are expected to keep entries across process restarts.
#[uniffi::export(callback_interface)]
pub trait PersistentStore: Send + Sync {
    /// Whether the store can be reached from the current execution context.
    /// Checked before every operation.
    fn is_available(&self) -> bool;

    /// Gets the value for the given key, or None if not found
    fn get(&self, key: String) -> Option<String>;

    /// Sets the value for the given key, replacing any previous value
    fn set(&self, key: String, value: String) -> Result<(), StorageError>;

    /// Removes the entry for the given key. Removing a missing key is not an error.
    fn remove_entry(&self, key: String) -> Result<(), StorageError>;
}
