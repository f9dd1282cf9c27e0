mod local_storage;

use std::sync::Arc;

pub use local_storage::LocalStorage;
use log::debug;
use serde::Serialize;
use session_storage_core::{SessionStorageConfig, StorageError};
use wasm_bindgen::prelude::*;

/// Browser facing session storage backed by `window.localStorage`.
#[wasm_bindgen]
pub struct SessionStorage {
    inner: session_storage_core::SessionStorage,
}

fn to_js(error: StorageError) -> JsError {
    JsError::new(&error.to_string())
}

#[wasm_bindgen]
impl SessionStorage {
    #[wasm_bindgen(constructor)]
    pub fn new(namespace: Option<String>) -> SessionStorage {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let mut config = SessionStorageConfig::with_provider(Arc::new(LocalStorage));
        config.namespace = namespace;
        debug!("New session storage: {config:?}");

        SessionStorage {
            inner: session_storage_core::SessionStorage::with_config(config),
        }
    }

    #[wasm_bindgen(js_name = "isAvailable")]
    pub fn is_available(&self) -> bool {
        self.inner.is_available()
    }

    #[wasm_bindgen(js_name = "getEntry")]
    pub fn get_entry(&self, key: &str) -> Option<String> {
        self.inner.get_entry(key)
    }

    #[wasm_bindgen(js_name = "setEntry")]
    pub fn set_entry(&self, key: &str, value: &str) -> Result<(), JsError> {
        self.inner.set_entry(key, value).map_err(to_js)
    }

    #[wasm_bindgen(js_name = "clearEntry")]
    pub fn clear_entry(&self, key: &str) -> Result<(), JsError> {
        self.inner.clear_entry(key).map_err(to_js)
    }

    #[wasm_bindgen(js_name = "getAccessToken")]
    pub fn get_access_token(&self) -> Option<String> {
        self.inner.get_access_token()
    }

    #[wasm_bindgen(js_name = "setAccessToken")]
    pub fn set_access_token(&self, access_token: &str) -> Result<(), JsError> {
        self.inner.set_access_token(access_token).map_err(to_js)
    }

    #[wasm_bindgen(js_name = "clearAccessToken")]
    pub fn clear_access_token(&self) -> Result<(), JsError> {
        self.inner.clear_access_token().map_err(to_js)
    }

    #[wasm_bindgen(js_name = "getRefreshToken")]
    pub fn get_refresh_token(&self) -> Option<String> {
        self.inner.get_refresh_token()
    }

    #[wasm_bindgen(js_name = "setRefreshToken")]
    pub fn set_refresh_token(&self, refresh_token: &str) -> Result<(), JsError> {
        self.inner.set_refresh_token(refresh_token).map_err(to_js)
    }

    #[wasm_bindgen(js_name = "clearRefreshToken")]
    pub fn clear_refresh_token(&self) -> Result<(), JsError> {
        self.inner.clear_refresh_token().map_err(to_js)
    }

    /// Returns the stored user as a plain object, or `null`. The shape is owned by
    /// the application, so the JSON is handed over as is.
    #[wasm_bindgen(js_name = "getUser")]
    pub fn get_user(&self) -> Result<JsValue, JsError> {
        let Some(user) = self
            .inner
            .get_user_as::<serde_json::Value>()
            .map_err(to_js)?
        else {
            return Ok(JsValue::null());
        };
        // Plain objects instead of Maps on the JS side.
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        Ok(user.serialize(&serializer)?)
    }

    #[wasm_bindgen(js_name = "setUser")]
    pub fn set_user(&self, user: JsValue) -> Result<(), JsError> {
        let user: serde_json::Value = serde_wasm_bindgen::from_value(user)?;
        self.inner.set_user_as(&user).map_err(to_js)
    }

    #[wasm_bindgen(js_name = "clearUser")]
    pub fn clear_user(&self) -> Result<(), JsError> {
        self.inner.clear_user().map_err(to_js)
    }

    #[wasm_bindgen(js_name = "clearSession")]
    pub fn clear_session(&self) -> Result<(), JsError> {
        self.inner.clear_session().map_err(to_js)
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn user_round_trip_through_js() {
        let storage = SessionStorage::new(Some("wasm-test".into()));
        assert!(storage.is_available());

        let user = js_sys::JSON::parse(r#"{"id":1,"name":"Ann"}"#).unwrap();
        storage.set_user(user).unwrap();

        let stored = storage.get_user().unwrap();
        let name = js_sys::Reflect::get(&stored, &"name".into()).unwrap();
        assert_eq!(name.as_string().as_deref(), Some("Ann"));

        storage.clear_user().unwrap();
        assert!(storage.get_user().unwrap().is_null());
    }

    #[wasm_bindgen_test]
    fn access_token_round_trip() {
        let storage = SessionStorage::new(Some("wasm-test".into()));

        storage.set_access_token("abc123").unwrap();
        assert_eq!(storage.get_access_token().as_deref(), Some("abc123"));

        storage.clear_access_token().unwrap();
        assert_eq!(storage.get_access_token(), None);
    }
}
