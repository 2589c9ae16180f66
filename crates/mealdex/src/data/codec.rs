//! Favorites blob codec
//!
//! Serializes the favorites collection to and from the backend's string
//! representation.

use crate::config::storage::FAVORITES_VERSION;
use crate::data::types::FavoriteRecipe;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};

/// Persisted envelope around the favorites collection
#[derive(Debug, Serialize, Deserialize)]
struct FavoritesBlob {
    version: u32,
    recipes: Vec<FavoriteRecipe>,
}

/// Serialize the collection, preserving field values and order exactly
pub fn encode(recipes: &[FavoriteRecipe]) -> Result<String> {
    let blob = FavoritesBlob {
        version: FAVORITES_VERSION,
        recipes: recipes.to_vec(),
    };
    serde_json::to_string_pretty(&blob)
        .map_err(|e| AppError::Config(format!("Failed to serialize favorites: {e}")))
}

/// Parse a stored blob back into the ordered collection
///
/// `None` (nothing persisted yet) decodes to an empty collection. A blob
/// that is present but not a well-formed envelope fails with
/// [`AppError::CorruptData`]; the caller decides between lossy recovery
/// and propagation.
pub fn decode(blob: Option<&str>) -> Result<Vec<FavoriteRecipe>> {
    let content = match blob {
        Some(c) => c,
        None => return Ok(Vec::new()),
    };

    // TODO: Handle version migrations when FAVORITES_VERSION increases
    let parsed: FavoritesBlob = serde_json::from_str(content)
        .map_err(|e| AppError::CorruptData(format!("Failed to parse favorites: {e}")))?;

    Ok(parsed.recipes)
}
