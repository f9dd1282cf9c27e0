//! [PersistentStore](crate::persistence::PersistentStore) implementations bundled with the crate.
//!
//! Hosts with their own storage (Keychain, SharedPreferences, browser `localStorage`)
//! provide it through the callback interface instead.

mod file;
mod memory;
mod unavailable;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use unavailable::UnavailableStore;
