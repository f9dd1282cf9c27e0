use std::sync::Arc;

use crate::persistence::PersistentStore;

#[derive(uniffi::Enum, Debug, Clone, Default, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

#[derive(Default, Clone)]
pub struct SessionStorageConfig {
    /// Where entries are kept. Without one, reads come back empty and writes fail.
    pub persistence_provider: Option<Arc<dyn PersistentStore>>,
    /// Prefix applied to every key as `{namespace}:{key}`, so several accessors
    /// can share one store without seeing each other's entries. `:` and `%` in
    /// the namespace are escaped as `%3A` and `%25`.
    pub namespace: Option<String>,
    /// Initial log level - defaults to [LogLevel::Info]
    pub log_level: LogLevel,
}

impl SessionStorageConfig {
    pub fn with_provider(provider: Arc<dyn PersistentStore>) -> Self {
        Self {
            persistence_provider: Some(provider),
            ..Default::default()
        }
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }
}

impl std::fmt::Debug for SessionStorageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStorageConfig")
            .field(
                "persistence_provider",
                &self.persistence_provider.is_some().then_some("..."),
            )
            .field("namespace", &self.namespace)
            .field("log_level", &self.log_level)
            .finish()
    }
}
