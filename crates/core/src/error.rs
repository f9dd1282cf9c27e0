#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum StorageError {
    /// The persistent store cannot be reached from the current execution context.
    #[error("Persistent store is unavailable in this context")]
    StoreUnavailable,

    #[error("Failed to decode value stored under {key} - {error}")]
    Decode { key: String, error: String },

    #[error("Failed to encode value for {key} - {error}")]
    Encode { key: String, error: String },

    /// The store rejected a write, e.g. because it is full. Never retried.
    #[error("Persistent store rejected write to {key} - {reason}")]
    WriteFailure { key: String, reason: String },

    #[error("Host store callback failed - {reason}")]
    HostCallback { reason: String },
}

impl StorageError {
    pub(crate) fn decode(key: impl Into<String>, error: serde_json::Error) -> Self {
        Self::Decode {
            key: key.into(),
            error: error.to_string(),
        }
    }

    pub(crate) fn encode(key: impl Into<String>, error: serde_json::Error) -> Self {
        Self::Encode {
            key: key.into(),
            error: error.to_string(),
        }
    }
}

// Foreign store implementations can throw anything; uniffi funnels those through here.
impl From<uniffi::UnexpectedUniFFICallbackError> for StorageError {
    fn from(value: uniffi::UnexpectedUniFFICallbackError) -> Self {
        Self::HostCallback {
            reason: value.reason,
        }
    }
}
