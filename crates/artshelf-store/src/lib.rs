//! Durable key-value storage for artshelf.
//!
//! The rest of the workspace only talks to storage through the
//! [`DurableStore`] contract: `get`, `set` and `delete` over string keys and
//! string values. Two backends ship with the crate:
//!
//! - [`MemoryStore`]: process-local, with failure injection for tests
//! - [`FileStore`]: one JSON file per key, written atomically
//!
//! [`Cache`] layers typed JSON serialization on top of any backend.
//!
//! # Example
//!
//! ```rust,ignore
//! use artshelf_store::{Cache, FileStore};
//!
//! let cache = Cache::new(FileStore::open(".artshelf").await?);
//!
//! // Store a value
//! cache.set("favorites", &favorites).await?;
//!
//! // Retrieve a value
//! let favorites: Option<Vec<Product>> = cache.get("favorites").await?;
//! ```

mod error;
mod file;
mod kv;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use kv::{Cache, DurableStore};
pub use memory::MemoryStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, DurableStore, FileStore, MemoryStore, StoreError};
}
