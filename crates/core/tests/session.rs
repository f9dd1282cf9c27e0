use std::sync::Arc;

use pretty_assertions::assert_eq;
use session_storage_core::{
    stores::{FileStore, MemoryStore},
    PersistentStore, SessionStorage, SessionStorageConfig, StorageError, User,
};

fn signed_in_user() -> User {
    User {
        id: 42,
        name: "Ann Lee".into(),
        username: Some("ann".into()),
        email: Some("ann@example.com".into()),
        role: Some("user".into()),
        created_at: Some("2024-03-01T10:00:00Z".into()),
        updated_at: None,
    }
}

#[test]
fn session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    {
        let storage = SessionStorage::new(Arc::new(FileStore::open(&path).unwrap()));
        storage.set_access_token("abc123").unwrap();
        storage.set_refresh_token("refresh-456").unwrap();
        storage.set_user(signed_in_user()).unwrap();
    }

    let storage = SessionStorage::new(Arc::new(FileStore::open(&path).unwrap()));
    assert_eq!(storage.get_access_token().as_deref(), Some("abc123"));
    assert_eq!(storage.get_refresh_token().as_deref(), Some("refresh-456"));
    assert_eq!(storage.get_user().unwrap(), Some(signed_in_user()));

    storage.clear_session().unwrap();

    let storage = SessionStorage::new(Arc::new(FileStore::open(&path).unwrap()));
    assert_eq!(storage.get_access_token(), None);
    assert_eq!(storage.get_refresh_token(), None);
    assert_eq!(storage.get_user().unwrap(), None);
}

#[test]
fn tampered_user_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, r#"{"USER": "{\"id\": \"not a number\"}"}"#).unwrap();

    let storage = SessionStorage::new(Arc::new(FileStore::open(&path).unwrap()));
    assert!(matches!(
        storage.get_user(),
        Err(StorageError::Decode { .. })
    ));
}

#[test]
fn accessors_over_one_store_see_the_same_entries() {
    let store: Arc<dyn PersistentStore> = Arc::new(MemoryStore::new());
    let writer = SessionStorage::new(store.clone());
    let reader = SessionStorage::with_config(SessionStorageConfig::with_provider(store));

    writer.set_access_token("first").unwrap();
    writer.set_access_token("second").unwrap();
    assert_eq!(reader.get_access_token().as_deref(), Some("second"));

    reader.clear_access_token().unwrap();
    assert_eq!(writer.get_access_token(), None);
}
