//! Key-value contract and typed wrapper with automatic serialization.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::StoreError;

/// Durable key-value store.
///
/// Values are opaque strings; callers that want typed access go through
/// [`Cache`]. Implementations must be safe to share across tasks.
#[async_trait]
pub trait DurableStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if it was never written.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    ///
    /// A successful return means the value is durable: a later `get` (in this
    /// process or the next one) observes it.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing a missing key is not an error.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;
}

#[async_trait]
impl<S: DurableStore + ?Sized> DurableStore for Arc<S> {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value).await
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        (**self).delete(key).await
    }
}

/// Type-safe cache over any [`DurableStore`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug, Clone, Default)]
pub struct Cache<S> {
    store: S,
}

impl<S: DurableStore> Cache<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a value from the store.
    ///
    /// Returns `None` if the key doesn't exist, and an error if the stored
    /// text is not valid JSON for `T`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let favorites: Option<Vec<Product>> = cache.get("favorites").await?;
    /// ```
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.store.get(key).await? {
            Some(text) => {
                let value: T = serde_json::from_str(&text)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Serialize `value` and write it under `key`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// cache.set("favorites", &favorites).await?;
    /// ```
    pub async fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let text = serde_json::to_string(value)?;
        self.store.set(key, &text).await
    }

    /// Delete a value from the store.
    pub async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.store.delete(key).await
    }

    /// Check if a key has a value.
    pub async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.store.get(key).await?.is_some())
    }
}
