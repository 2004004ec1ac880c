//! Catalog error types.

use thiserror::Error;

/// Errors that can occur in catalog operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Durable store was unreadable or held corrupt data.
    ///
    /// Favorites loading recovers from this locally; it only reaches callers
    /// of lower-level APIs.
    #[error("Storage read error: {0}")]
    StorageRead(String),

    /// Persisting a mutation failed; in-memory state was left unchanged.
    #[error("Storage write error: {0}")]
    StorageWrite(#[source] artshelf_store::StoreError),

    /// User input was rejected. The message is meant for the user.
    #[error("{0}")]
    Validation(String),

    /// Fetching the catalog failed.
    #[error("Network error: {0}")]
    Network(String),

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A mutation task ended without reporting a result.
    #[error("Mutation interrupted: {0}")]
    Interrupted(String),
}

impl CatalogError {
    /// Whether the error is the user's to fix (as opposed to a system fault).
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            CatalogError::Validation(_) | CatalogError::ProductNotFound(_)
        )
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        CatalogError::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_errors() {
        assert!(CatalogError::Validation("bad rating".into()).is_user_facing());
        assert!(CatalogError::ProductNotFound("9".into()).is_user_facing());
        assert!(!CatalogError::Network("timeout".into()).is_user_facing());
        assert!(!CatalogError::StorageRead("corrupt".into()).is_user_facing());
    }

    #[test]
    fn test_validation_message_is_bare() {
        let err = CatalogError::Validation("Rating must be between 1 and 5".into());
        assert_eq!(err.to_string(), "Rating must be between 1 and 5");
    }
}
