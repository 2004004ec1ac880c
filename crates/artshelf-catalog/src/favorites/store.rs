//! Favorites store: the single writer of the persisted favorite set.

use std::sync::Arc;

use artshelf_store::{Cache, DurableStore};
use tokio::sync::{watch, Mutex, OwnedMutexGuard};
use tracing::{debug, error, info, warn};

use crate::catalog::Product;
use crate::error::CatalogError;
use crate::favorites::FavoriteSet;
use crate::ids::ProductId;

/// Durable store key holding the favorite set.
pub const FAVORITES_KEY: &str = "favorites";

/// Where the store is in its startup sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadState {
    /// Nothing read yet.
    Unloaded,
    /// A read from the durable store is in progress.
    Loading,
    /// The set reflects the durable store.
    Ready,
    /// The durable store could not be read; the set started empty. The
    /// next successful write moves the store to `Ready`.
    ReadyEmpty,
}

impl LoadState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadState::Unloaded => "unloaded",
            LoadState::Loading => "loading",
            LoadState::Ready => "ready",
            LoadState::ReadyEmpty => "ready-empty",
        }
    }

    /// Whether a load has finished (successfully or not).
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready | LoadState::ReadyEmpty)
    }
}

/// Outcome of [`FavoritesStore::toggle`].
#[derive(Debug, Clone, PartialEq)]
pub struct Toggled {
    /// Whether the product is a favorite after the toggle.
    pub favorite: bool,
    /// The committed set after the toggle.
    pub favorites: FavoriteSet,
}

/// Shared handle to the favorite set.
///
/// Every view surface holds a clone of the same handle. Mutations are
/// serialized: each one waits for the previous to finish, computes the new
/// set from the committed one, writes the whole set to the durable store,
/// and only then commits it in memory and notifies subscribers. A failed
/// write leaves memory untouched.
///
/// Once a mutation has started writing, dropping the caller's future does
/// not abort it; the write and commit finish on a background task.
///
/// # Example
///
/// ```rust,ignore
/// let favorites = FavoritesStore::new(FileStore::open(".artshelf").await?);
/// favorites.load().await;
///
/// favorites.add(product.clone()).await?;
/// assert!(favorites.is_favorite(&product.id));
/// ```
pub struct FavoritesStore<S> {
    inner: Arc<Inner<S>>,
}

struct Inner<S> {
    cache: Cache<S>,
    /// Committed set; the lock is the mutation queue.
    committed: Arc<Mutex<FavoriteSet>>,
    /// Last committed set, readable without waiting on mutations.
    snapshot: watch::Sender<FavoriteSet>,
    state: watch::Sender<LoadState>,
}

impl<S> Clone for FavoritesStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: DurableStore + 'static> FavoritesStore<S> {
    /// Create an unloaded store over `store`.
    pub fn new(store: S) -> Self {
        let (snapshot, _) = watch::channel(FavoriteSet::new());
        let (state, _) = watch::channel(LoadState::Unloaded);
        Self {
            inner: Arc::new(Inner {
                cache: Cache::new(store),
                committed: Arc::new(Mutex::new(FavoriteSet::new())),
                snapshot,
                state,
            }),
        }
    }

    /// Create a store and load it.
    pub async fn open(store: S) -> Self {
        let favorites = Self::new(store);
        favorites.load().await;
        favorites
    }

    /// Read the persisted set, replacing the in-memory one.
    ///
    /// Never fails: an unreadable or corrupt value is logged and replaced by
    /// an empty set, and the state becomes [`LoadState::ReadyEmpty`].
    ///
    /// Once the mutation lock is taken the read runs on its own task, so
    /// dropping this future cannot leave the store half-loaded.
    pub async fn load(&self) -> FavoriteSet {
        let mut committed = Arc::clone(&self.inner.committed).lock_owned().await;
        let inner = Arc::clone(&self.inner);
        let loaded = tokio::spawn(async move { inner.load_into(&mut *committed).await }).await;
        match loaded {
            Ok(set) => set,
            Err(e) => {
                warn!(error = %e, "favorites load interrupted");
                self.snapshot()
            }
        }
    }

    /// Add a product. Adding an id that is already present changes nothing
    /// and writes nothing.
    pub async fn add(&self, product: Product) -> Result<FavoriteSet, CatalogError> {
        let id = product.id.clone();
        self.mutate("add", &id, move |current| current.inserted(product)).await
    }

    /// Remove a product by id. Removing an absent id is a no-op.
    pub async fn remove(&self, id: &ProductId) -> Result<FavoriteSet, CatalogError> {
        let target = id.clone();
        self.mutate("remove", id, move |current| current.removed(&target)).await
    }

    /// Add the product if absent, remove it if present.
    ///
    /// The decision is made against the committed set inside the mutation
    /// queue, so two surfaces toggling from the same stale view cannot both
    /// add.
    pub async fn toggle(&self, product: Product) -> Result<Toggled, CatalogError> {
        let id = product.id.clone();
        let favorites = self
            .mutate("toggle", &id, move |current| {
                if current.contains(&product.id) {
                    current.removed(&product.id)
                } else {
                    current.inserted(product)
                }
            })
            .await?;
        Ok(Toggled {
            favorite: favorites.contains(&id),
            favorites,
        })
    }

    /// Whether the product is in the committed set.
    pub fn is_favorite(&self, id: &ProductId) -> bool {
        self.inner.snapshot.borrow().contains(id)
    }

    /// The committed set.
    pub fn snapshot(&self) -> FavoriteSet {
        self.inner.snapshot.borrow().clone()
    }

    /// Receive the committed set after every load and successful mutation.
    pub fn subscribe(&self) -> watch::Receiver<FavoriteSet> {
        self.inner.snapshot.subscribe()
    }

    /// Current load state.
    pub fn load_state(&self) -> LoadState {
        *self.inner.state.borrow()
    }

    /// Number of favorites.
    pub fn len(&self) -> usize {
        self.inner.snapshot.borrow().len()
    }

    /// Whether there are no favorites.
    pub fn is_empty(&self) -> bool {
        self.inner.snapshot.borrow().is_empty()
    }

    async fn mutate<F>(
        &self,
        op: &'static str,
        id: &ProductId,
        change: F,
    ) -> Result<FavoriteSet, CatalogError>
    where
        F: FnOnce(&FavoriteSet) -> Option<FavoriteSet> + Send + 'static,
    {
        let committed = Arc::clone(&self.inner.committed).lock_owned().await;
        let inner = Arc::clone(&self.inner);
        let id = id.clone();
        tokio::spawn(async move { inner.apply(committed, op, id, change).await })
            .await
            .map_err(|e| CatalogError::Interrupted(e.to_string()))?
    }
}

impl<S: DurableStore> Inner<S> {
    /// Load if needed, compute the change and persist it. Runs on a spawned
    /// task that owns the mutation lock.
    async fn apply<F>(
        &self,
        mut committed: OwnedMutexGuard<FavoriteSet>,
        op: &'static str,
        id: ProductId,
        change: F,
    ) -> Result<FavoriteSet, CatalogError>
    where
        F: FnOnce(&FavoriteSet) -> Option<FavoriteSet>,
    {
        let ready = self.state.borrow().is_ready();
        if !ready {
            self.load_into(&mut *committed).await;
        }

        let Some(next) = change(&*committed) else {
            debug!(op, id = %id, "favorites unchanged");
            return Ok(committed.clone());
        };

        self.persist_and_commit(committed, next, op, id).await
    }

    async fn load_into(&self, committed: &mut FavoriteSet) -> FavoriteSet {
        self.state.send_replace(LoadState::Loading);

        let (loaded, state) = match self.cache.get::<FavoriteSet>(FAVORITES_KEY).await {
            Ok(Some(set)) => {
                info!(count = set.len(), "favorites loaded");
                (set, LoadState::Ready)
            }
            Ok(None) => {
                info!("no stored favorites");
                (FavoriteSet::new(), LoadState::Ready)
            }
            Err(e) => {
                let e = CatalogError::StorageRead(e.to_string());
                warn!(error = %e, "failed to load favorites, starting empty");
                (FavoriteSet::new(), LoadState::ReadyEmpty)
            }
        };

        *committed = loaded.clone();
        self.snapshot.send_replace(loaded.clone());
        self.state.send_replace(state);
        loaded
    }

    async fn persist_and_commit(
        &self,
        mut committed: OwnedMutexGuard<FavoriteSet>,
        next: FavoriteSet,
        op: &'static str,
        id: ProductId,
    ) -> Result<FavoriteSet, CatalogError> {
        if let Err(e) = self.cache.set(FAVORITES_KEY, &next).await {
            error!(op, id = %id, error = %e, "failed to persist favorites");
            return Err(CatalogError::StorageWrite(e));
        }

        *committed = next.clone();
        self.snapshot.send_replace(next.clone());
        self.state.send_replace(LoadState::Ready);
        debug!(op, id = %id, count = next.len(), "favorites persisted");
        Ok(next)
    }
}
