//! Data persistence
//!
//! The favorites store, its key-value backend, the blob codec, and the
//! view snapshot synchronization contract.

pub mod backend;
pub mod codec;
pub mod favorites;
pub mod sync;
pub mod types;

// Re-export common types
pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use favorites::FavoritesStore;
pub use sync::{FavoritesSnapshot, SyncState};
pub use types::{FavoriteRecipe, IngredientEntry, RecipeDetail, RecipeSummary};
