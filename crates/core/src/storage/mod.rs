mod config;


use std::sync::{Arc, Mutex};

pub use config::*;
use log::{debug, error, warn};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    error::StorageError,
    keys::SessionKey,
    logging,
    persistence::PersistentStore,
    stores::{FileStore, UnavailableStore},
    user::User,
};

/// Typed access to the session entries kept in a [PersistentStore].
///
/// Tokens are stored verbatim, the user record as JSON. Every operation checks
/// that the store is reachable first: reads against an unavailable store come
/// back empty, while writes and clears fail with [StorageError::StoreUnavailable].
/// A missing entry is never an error.
#[derive(uniffi::Object)]
pub struct SessionStorage {
    store: Arc<dyn PersistentStore>,
    namespace: Option<String>,
    /// `namespace` with `%` and `:` escaped, followed by the `:` separator.
    prefix: Option<String>,
}

/// Escapes the separator so the first `:` of a stored key always ends the
/// namespace, e.g. namespace `a:b` never collides with namespace `a` and key `b:c`.
fn key_prefix(namespace: &str) -> String {
    let mut prefix = namespace.replace('%', "%25").replace(':', "%3A");
    prefix.push(':');
    prefix
}

// crate local api
impl SessionStorage {
    pub fn new(store: Arc<dyn PersistentStore>) -> Self {
        Self::with_config(SessionStorageConfig::with_provider(store))
    }

    pub fn with_config(config: SessionStorageConfig) -> Self {
        let store = config.persistence_provider.unwrap_or_else(|| {
            warn!("No persistent store provided - session data will not be persisted");
            Arc::new(UnavailableStore)
        });

        let namespace = config.namespace.filter(|ns| !ns.is_empty());
        Self {
            store,
            prefix: namespace.as_deref().map(key_prefix),
            namespace,
        }
    }

    /// Reads the user entry as any application defined record.
    pub fn get_user_as<T: DeserializeOwned>(&self) -> Result<Option<T>, StorageError> {
        let key = self.storage_key(SessionKey::User.as_str());
        let Some(raw) = self.read(&key) else {
            return Ok(None);
        };

        serde_json::from_str(&raw).map(Some).map_err(|e| {
            error!("Stored user under {key} could not be decoded: {e}");
            StorageError::decode(key, e)
        })
    }

    /// Writes any serializable record as the user entry. Nothing is written if
    /// encoding fails.
    pub fn set_user_as<T: Serialize + ?Sized>(&self, user: &T) -> Result<(), StorageError> {
        let key = self.storage_key(SessionKey::User.as_str());
        let json = serde_json::to_string(user).map_err(|e| StorageError::encode(&key, e))?;
        self.write(key, json)
    }

    fn storage_key(&self, key: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}{key}"),
            None => key.to_owned(),
        }
    }

    fn read(&self, key: &str) -> Option<String> {
        if !self.store.is_available() {
            warn!("Persistent store unavailable, treating {key} as absent");
            return None;
        }
        debug!("Reading {key}");
        self.store.get(key.to_owned())
    }

    fn write(&self, key: String, value: String) -> Result<(), StorageError> {
        if !self.store.is_available() {
            return Err(StorageError::StoreUnavailable);
        }
        debug!("Writing {key}");
        self.store.set(key, value)
    }

    fn remove(&self, key: String) -> Result<(), StorageError> {
        if !self.store.is_available() {
            return Err(StorageError::StoreUnavailable);
        }
        debug!("Removing {key}");
        self.store.remove_entry(key)
    }
}

#[uniffi::export]
impl SessionStorage {
    /// Whether the underlying store can currently be reached.
    pub fn is_available(&self) -> bool {
        self.store.is_available()
    }

    pub fn namespace(&self) -> Option<String> {
        self.namespace.clone()
    }

    pub fn get_entry(&self, key: &str) -> Option<String> {
        self.read(&self.storage_key(key))
    }

    pub fn set_entry(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.write(self.storage_key(key), value.to_owned())
    }

    pub fn clear_entry(&self, key: &str) -> Result<(), StorageError> {
        self.remove(self.storage_key(key))
    }

    pub fn get_access_token(&self) -> Option<String> {
        self.get_entry(SessionKey::AccessToken.as_str())
    }

    pub fn set_access_token(&self, access_token: &str) -> Result<(), StorageError> {
        self.set_entry(SessionKey::AccessToken.as_str(), access_token)
    }

    pub fn clear_access_token(&self) -> Result<(), StorageError> {
        self.clear_entry(SessionKey::AccessToken.as_str())
    }

    pub fn get_refresh_token(&self) -> Option<String> {
        self.get_entry(SessionKey::RefreshToken.as_str())
    }

    pub fn set_refresh_token(&self, refresh_token: &str) -> Result<(), StorageError> {
        self.set_entry(SessionKey::RefreshToken.as_str(), refresh_token)
    }

    pub fn clear_refresh_token(&self) -> Result<(), StorageError> {
        self.clear_entry(SessionKey::RefreshToken.as_str())
    }

    /// Returns the stored user, or `None` if nobody is signed in. A stored value
    /// that is not a valid user record is reported as [StorageError::Decode].
    pub fn get_user(&self) -> Result<Option<User>, StorageError> {
        self.get_user_as()
    }

    pub fn set_user(&self, user: User) -> Result<(), StorageError> {
        self.set_user_as(&user)
    }

    pub fn clear_user(&self) -> Result<(), StorageError> {
        self.clear_entry(SessionKey::User.as_str())
    }

    /// Removes both tokens and the user, stopping at the first failure.
    /// Entries written through the generic path are left alone.
    pub fn clear_session(&self) -> Result<(), StorageError> {
        self.clear_access_token()?;
        self.clear_refresh_token()?;
        self.clear_user()
    }
}

/// A configuration interface for building a [SessionStorage].
///
/// Without a persistence provider the resulting storage cannot keep anything,
/// see [SessionStorageBuilder::set_persistence_provider].
#[derive(uniffi::Object, Default)]
pub struct SessionStorageBuilder {
    config: Mutex<SessionStorageConfig>,
}

// crate local api
impl SessionStorageBuilder {
    pub fn arc_set_persistence_provider(&self, provider: Arc<dyn PersistentStore>) {
        let mut config = self.config.lock().expect("lock poisoned!");
        config.persistence_provider = Some(provider);
    }
}

#[uniffi::export]
impl SessionStorageBuilder {
    #[uniffi::constructor]
    pub fn new() -> Self {
        Self {
            config: Default::default(),
        }
    }

    /// Provides the [SessionStorage] with a platform store for tokens and the user record.
    pub fn set_persistence_provider(&self, provider: Box<dyn PersistentStore>) {
        self.arc_set_persistence_provider(provider.into());
    }

    /// Uses a JSON file at `path` as the persistence provider.
    pub fn set_file_store(&self, path: String) -> Result<(), StorageError> {
        let store = FileStore::open(path)?;
        self.arc_set_persistence_provider(Arc::new(store));
        Ok(())
    }

    /// Prefix every key with `namespace`. An empty namespace means no prefix.
    /// `:` and `%` inside the namespace are stored escaped as `%3A` and `%25`.
    pub fn set_namespace(&self, namespace: String) {
        let mut config = self.config.lock().expect("lock poisoned!");
        config.namespace = Some(namespace);
    }

    /// Set the log filter level.
    ///
    /// By Default the log filter is set to [LogLevel::Info]
    pub fn set_log_level(&self, level: LogLevel) {
        let mut config = self.config.lock().expect("lock poisoned!");
        config.log_level = level;
    }

    pub fn namespace(&self) -> Option<String> {
        let config = self.config.lock().expect("lock poisoned!");
        config.namespace.clone()
    }

    pub fn log_level(&self) -> LogLevel {
        let config = self.config.lock().expect("lock poisoned!");
        config.log_level
    }

    pub fn has_persistence_provider(&self) -> bool {
        let config = self.config.lock().expect("lock poisoned!");
        config.persistence_provider.is_some()
    }

    pub fn build(&self) -> Arc<SessionStorage> {
        let config = self.config.lock().expect("lock poisoned!").clone();
        logging::init_log(config.log_level);
        debug!("Building session storage with {config:?}");
        Arc::new(SessionStorage::with_config(config))
    }
}
