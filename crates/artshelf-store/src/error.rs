//! Store error types.

use thiserror::Error;

/// Errors that can occur when reading or writing the durable store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying I/O failed.
    #[error("I/O error on key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Key contains characters the backend cannot address.
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),

    /// The backend refused the operation.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub(crate) fn io(key: &str, source: std::io::Error) -> Self {
        StoreError::Io {
            key: key.to_string(),
            source,
        }
    }
}
