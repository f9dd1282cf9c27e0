//! Session persistence for apps that keep an access token, a refresh token and the
//! signed in user in a platform key-value store.
//!
//! The store itself is supplied by the host through [PersistentStore], either from
//! Rust or from Swift/Kotlin through the generated bindings. [SessionStorage] layers
//! the fixed session keys and JSON handling of the user record on top of it.

pub mod error;
pub mod keys;
pub mod logging;
pub mod persistence;
pub mod storage;
pub mod stores;
pub mod user;

pub use error::StorageError;
pub use keys::SessionKey;
pub use persistence::PersistentStore;
pub use storage::{LogLevel, SessionStorage, SessionStorageBuilder, SessionStorageConfig};
pub use user::User;

uniffi::setup_scaffolding!();
