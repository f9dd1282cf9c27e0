use session_storage_core::{PersistentStore, StorageError};
use web_sys::Storage;

/// `window.localStorage` as a [PersistentStore].
///
/// The handle is looked up on every call, so the store reports itself as
/// unavailable in workers, or anywhere else without a window.
#[derive(Default, Debug, Clone, Copy)]
pub struct LocalStorage;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn describe(error: &wasm_bindgen::JsValue) -> String {
    error
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(error, &"name".into())
                .ok()
                .and_then(|name| name.as_string())
        })
        .unwrap_or_else(|| format!("{error:?}"))
}

impl PersistentStore for LocalStorage {
    fn is_available(&self) -> bool {
        local_storage().is_some()
    }

    fn get(&self, key: String) -> Option<String> {
        local_storage()?.get_item(&key).ok().flatten()
    }

    fn set(&self, key: String, value: String) -> Result<(), StorageError> {
        let storage = local_storage().ok_or(StorageError::StoreUnavailable)?;
        storage
            .set_item(&key, &value)
            .map_err(|e| StorageError::WriteFailure {
                reason: describe(&e),
                key,
            })
    }

    fn remove_entry(&self, key: String) -> Result<(), StorageError> {
        let storage = local_storage().ok_or(StorageError::StoreUnavailable)?;
        storage
            .remove_item(&key)
            .map_err(|e| StorageError::WriteFailure {
                reason: describe(&e),
                key,
            })
    }
}
