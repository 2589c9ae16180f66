//! Recipe source trait
//!
//! Defines the interface a recipe directory service must implement.

use crate::data::types::{RecipeDetail, RecipeSummary};
use crate::error::Result;
use async_trait::async_trait;

/// A read-only source of recipe listings
///
/// All lookups are request/response over the network; a failing source
/// surfaces [`SourceUnavailable`](crate::error::AppError::SourceUnavailable)
/// and the presentation layer degrades to an empty state. No retry happens
/// at this layer.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Display name for the source (e.g., "TheMealDB")
    fn name(&self) -> &'static str;

    /// Search for recipes by name
    ///
    /// No matches is an empty list, not an error.
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>>;

    /// Look up a single recipe by its source-issued id
    async fn lookup(&self, id: &str) -> Result<Option<RecipeDetail>>;

    /// Fetch one random recipe
    async fn random(&self) -> Result<Option<RecipeDetail>>;
}
