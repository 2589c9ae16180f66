//! Favorites store
//!
//! De-duplicated, insertion-ordered collection of saved recipes over a
//! durable key-value backend.

use crate::config::storage::FAVORITES_KEY;
use crate::data::backend::StorageBackend;
use crate::data::codec;
use crate::data::types::FavoriteRecipe;
use crate::error::{AppError, Result};
use tracing::{debug, warn};

/// Repository for the persisted favorites collection
///
/// The store is the sole writer of the collection; views hold read-only
/// snapshots obtained through [`all`](FavoritesStore::all). Every mutation
/// reads, modifies, and rewrites the whole collection as one blob. Two
/// mutations issued concurrently from independent tasks are not serialized
/// here — the second write wins and the first is lost. Callers that need
/// ordering must await operations sequentially.
pub struct FavoritesStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> FavoritesStore<B> {
    /// Create a store over a backend
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Read the full collection, in insertion order
    ///
    /// Nothing persisted yet decodes to an empty collection. A corrupt
    /// blob also yields an empty collection: for a local cache,
    /// availability beats strict integrity, and the next successful
    /// mutation overwrites the bad blob.
    pub async fn all(&self) -> Result<Vec<FavoriteRecipe>> {
        self.load_or_recover().await
    }

    /// Whether a record with this id is in the collection
    pub async fn contains(&self, id: &str) -> Result<bool> {
        let recipes = self.load_or_recover().await?;
        Ok(recipes.iter().any(|r| r.id == id))
    }

    /// Append a record to the collection
    ///
    /// Idempotent: if a record with the same id already exists the store
    /// is left untouched — no duplicate, no write, no error.
    pub async fn add(&self, recipe: FavoriteRecipe) -> Result<()> {
        let mut recipes = self.load_or_recover().await?;

        if recipes.iter().any(|r| r.id == recipe.id) {
            debug!(id = %recipe.id, "favorite already present, skipping add");
            return Ok(());
        }

        recipes.push(recipe);
        self.persist(&recipes).await
    }

    /// Remove any record with this id
    ///
    /// Idempotent: removing an id that is not present succeeds without
    /// touching the backend.
    pub async fn remove(&self, id: &str) -> Result<()> {
        let mut recipes = self.load_or_recover().await?;

        let before = recipes.len();
        recipes.retain(|r| r.id != id);
        if recipes.len() == before {
            debug!(id = %id, "favorite not present, skipping remove");
            return Ok(());
        }

        self.persist(&recipes).await
    }

    async fn load_or_recover(&self) -> Result<Vec<FavoriteRecipe>> {
        let blob = self.backend.get(FAVORITES_KEY).await?;
        match codec::decode(blob.as_deref()) {
            Ok(recipes) => Ok(recipes),
            Err(AppError::CorruptData(msg)) => {
                warn!("discarding corrupt favorites data: {msg}");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    async fn persist(&self, recipes: &[FavoriteRecipe]) -> Result<()> {
        let blob = codec::encode(recipes)?;
        self.backend.set(FAVORITES_KEY, &blob).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::backend::MemoryBackend;
    use async_trait::async_trait;

    fn teriyaki() -> FavoriteRecipe {
        FavoriteRecipe::new("52772", "Teriyaki Chicken", "http://x/1.jpg")
    }

    fn crumble() -> FavoriteRecipe {
        FavoriteRecipe::new("52893", "Apple Crumble", "http://x/2.jpg")
    }

    fn empty_store() -> FavoritesStore<MemoryBackend> {
        FavoritesStore::new(MemoryBackend::new())
    }

    #[tokio::test]
    async fn test_empty_store_all() {
        let store = empty_store();
        assert!(store.all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_then_all() {
        let store = empty_store();
        store.add(teriyaki()).await.unwrap();

        let recipes = store.all().await.unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id, "52772");
        assert_eq!(recipes[0].name, "Teriyaki Chicken");
        assert_eq!(recipes[0].thumb_url, "http://x/1.jpg");
    }

    #[tokio::test]
    async fn test_add_is_idempotent() {
        let store = empty_store();
        store.add(teriyaki()).await.unwrap();
        store.add(teriyaki()).await.unwrap();

        assert_eq!(store.all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_add_duplicate_id_keeps_original_fields() {
        let store = empty_store();
        store.add(teriyaki()).await.unwrap();

        // Same id, different name: the original record is retained
        store
            .add(FavoriteRecipe::new("52772", "Renamed", "http://x/other.jpg"))
            .await
            .unwrap();

        let recipes = store.all().await.unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Teriyaki Chicken");
    }

    #[tokio::test]
    async fn test_insertion_order_preserved() {
        let store = empty_store();
        store.add(teriyaki()).await.unwrap();
        store.add(crumble()).await.unwrap();

        let recipes = store.all().await.unwrap();
        assert_eq!(recipes[0].id, "52772");
        assert_eq!(recipes[1].id, "52893");
    }

    #[tokio::test]
    async fn test_remove_first_keeps_second() {
        let store = empty_store();
        store.add(teriyaki()).await.unwrap();
        store.add(crumble()).await.unwrap();

        store.remove("52772").await.unwrap();

        let recipes = store.all().await.unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id, "52893");
    }

    #[tokio::test]
    async fn test_remove_missing_id_is_noop() {
        let store = empty_store();
        store.add(teriyaki()).await.unwrap();

        store.remove("does-not-exist").await.unwrap();

        assert_eq!(store.all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_remove_to_empty() {
        let store = empty_store();
        store.add(teriyaki()).await.unwrap();
        store.remove("52772").await.unwrap();

        assert!(store.all().await.unwrap().is_empty());
        assert!(!store.contains("52772").await.unwrap());
    }

    #[tokio::test]
    async fn test_contains_matches_all() {
        let store = empty_store();
        assert!(!store.contains("52772").await.unwrap());

        store.add(teriyaki()).await.unwrap();
        assert!(store.contains("52772").await.unwrap());
        assert!(!store.contains("52893").await.unwrap());
    }

    #[tokio::test]
    async fn test_no_duplicate_ids_after_mixed_operations() {
        let store = empty_store();
        store.add(teriyaki()).await.unwrap();
        store.add(crumble()).await.unwrap();
        store.remove("52772").await.unwrap();
        store.add(teriyaki()).await.unwrap();
        store.add(crumble()).await.unwrap();

        let recipes = store.all().await.unwrap();
        let mut ids: Vec<&str> = recipes.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), recipes.len());
    }

    #[tokio::test]
    async fn test_corrupt_blob_recovers_to_empty() {
        let backend = MemoryBackend::new();
        backend.set(FAVORITES_KEY, "not valid json").await.unwrap();

        let store = FavoritesStore::new(backend);
        assert!(store.all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_overwrites_corrupt_blob() {
        let backend = MemoryBackend::new();
        backend.set(FAVORITES_KEY, "{{{garbage").await.unwrap();

        let store = FavoritesStore::new(backend);
        store.add(teriyaki()).await.unwrap();

        let recipes = store.all().await.unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id, "52772");
    }

    #[tokio::test]
    async fn test_sequential_ops_observe_prior_effects() {
        // Within one caller, an add followed by a read sees the add.
        let store = empty_store();
        store.add(teriyaki()).await.unwrap();
        assert!(store.contains("52772").await.unwrap());
        store.remove("52772").await.unwrap();
        assert!(!store.contains("52772").await.unwrap());
    }

    // --- Backend failure propagation ---

    /// A backend that always fails, for error-path coverage
    struct FailingBackend;

    #[async_trait]
    impl StorageBackend for FailingBackend {
        async fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(AppError::StorageUnavailable("backend offline".to_string()))
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(AppError::StorageUnavailable("backend offline".to_string()))
        }
    }

    #[tokio::test]
    async fn test_read_failure_propagates() {
        let store = FavoritesStore::new(FailingBackend);
        let result = store.all().await;
        assert!(matches!(result, Err(AppError::StorageUnavailable(_))));
    }

    #[tokio::test]
    async fn test_mutation_failure_propagates() {
        let store = FavoritesStore::new(FailingBackend);
        let result = store.add(teriyaki()).await;
        assert!(matches!(result, Err(AppError::StorageUnavailable(_))));
    }

    /// A backend whose writes fail but reads work, to check that a failed
    /// mutation leaves the persisted collection readable and unchanged
    struct ReadOnlyBackend {
        inner: MemoryBackend,
    }

    #[async_trait]
    impl StorageBackend for ReadOnlyBackend {
        async fn get(&self, key: &str) -> Result<Option<String>> {
            self.inner.get(key).await
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(AppError::StorageUnavailable("read-only".to_string()))
        }
    }

    #[tokio::test]
    async fn test_failed_write_keeps_prior_collection() {
        let inner = MemoryBackend::new();
        let blob = codec::encode(&[teriyaki()]).unwrap();
        inner.set(FAVORITES_KEY, &blob).await.unwrap();

        let store = FavoritesStore::new(ReadOnlyBackend { inner });
        let result = store.add(crumble()).await;
        assert!(matches!(result, Err(AppError::StorageUnavailable(_))));

        // The failed mutation is terminal for that operation only; the
        // previously persisted collection is still intact.
        let recipes = store.all().await.unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id, "52772");
    }
}
