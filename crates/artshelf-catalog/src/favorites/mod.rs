//! Favorites module.
//!
//! The favorite set value type and the store that persists it.

mod set;
mod store;

pub use set::FavoriteSet;
pub use store::{FavoritesStore, LoadState, Toggled, FAVORITES_KEY};
