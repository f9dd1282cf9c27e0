// Own test binary: the log level is process wide.

use log::LevelFilter;
use session_storage_core::{logging, stores::MemoryStore, LogLevel, SessionStorageBuilder};

#[test]
fn every_build_applies_its_log_level() {
    let first = SessionStorageBuilder::new();
    first.set_persistence_provider(Box::new(MemoryStore::new()));
    first.set_log_level(LogLevel::Warn);
    first.build();
    assert_eq!(log::max_level(), LevelFilter::Warn);

    let second = SessionStorageBuilder::new();
    second.set_persistence_provider(Box::new(MemoryStore::new()));
    second.set_log_level(LogLevel::Trace);
    second.build();
    assert_eq!(log::max_level(), LevelFilter::Trace);

    logging::set_log_level(LogLevel::Error);
    assert_eq!(log::max_level(), LevelFilter::Error);
}
