//! View snapshot synchronization
//!
//! List-displaying views hold a transient, read-only copy of the favorites
//! collection. This module is the contract that keeps such a copy honest:
//! a snapshot is either `Fresh` (confirmed consistent with the backend as
//! of its last read) or `Stale` (may not reflect the backend), and only a
//! wholesale re-read moves it back to `Fresh`.

use crate::data::backend::StorageBackend;
use crate::data::favorites::FavoritesStore;
use crate::data::types::FavoriteRecipe;
use crate::error::Result;

/// Consistency state of a view's snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// The snapshot may not reflect the backend
    Stale,
    /// The snapshot matched the backend as of the last read
    Fresh,
}

/// A view's local copy of the favorites collection
///
/// Starts `Stale` and empty. Call [`focus`](FavoritesSnapshot::focus) when
/// the view activates or regains focus after navigation, and
/// [`blur`](FavoritesSnapshot::blur) when it navigates away. Mutations made
/// from other views are not visible here until the next blur/focus cycle —
/// a snapshot must never be assumed correct after navigation without
/// re-fetching.
pub struct FavoritesSnapshot {
    recipes: Vec<FavoriteRecipe>,
    state: SyncState,
}

impl FavoritesSnapshot {
    /// Create an empty, stale snapshot
    pub fn new() -> Self {
        Self {
            recipes: Vec::new(),
            state: SyncState::Stale,
        }
    }

    /// Current consistency state
    pub fn state(&self) -> SyncState {
        self.state
    }

    /// Whether the snapshot is known consistent with the backend
    pub fn is_fresh(&self) -> bool {
        self.state == SyncState::Fresh
    }

    /// The snapshot's records, in the store's insertion order
    pub fn recipes(&self) -> &[FavoriteRecipe] {
        &self.recipes
    }

    /// The view activated or regained focus
    ///
    /// If the snapshot is stale this reads the full collection and
    /// replaces the snapshot wholesale. A snapshot that is still fresh
    /// (the view never lost focus) is left as-is.
    pub async fn focus<B: StorageBackend>(&mut self, store: &FavoritesStore<B>) -> Result<()> {
        if self.state == SyncState::Fresh {
            return Ok(());
        }
        self.recipes = store.all().await?;
        self.state = SyncState::Fresh;
        Ok(())
    }

    /// The view navigated away
    pub fn blur(&mut self) {
        self.state = SyncState::Stale;
    }

    /// Invalidate after a local mutation that was not patched in
    pub fn mark_stale(&mut self) {
        self.state = SyncState::Stale;
    }

    /// Optimistic same-view fast path for a remove
    ///
    /// Valid only immediately after this view itself awaited
    /// `store.remove(id)`: the patch mirrors that mutation exactly, so the
    /// snapshot stays nominally fresh. Mutations performed on other views
    /// still require a blur/focus cycle.
    pub fn remove_local(&mut self, id: &str) {
        self.recipes.retain(|r| r.id != id);
    }
}

impl Default for FavoritesSnapshot {
    fn default() -> Self {
        Self::new()
    }
}
