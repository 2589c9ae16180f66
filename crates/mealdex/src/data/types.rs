//! Common data types
//!
//! Recipe types returned by the source and the record shape persisted
//! in the favorites store.

use serde::{Deserialize, Serialize};

// =============================================================================
// RecipeSummary - What a search hit looks like
// =============================================================================

/// A recipe as listed in search results
///
/// Carries just enough to render a list row and to navigate to the
/// detail view: the source-issued id, display name, and thumbnail URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeSummary {
    /// Stable unique identifier issued by the recipe source
    pub id: String,
    /// Display title
    pub name: String,
    /// Thumbnail image URL
    #[serde(default)]
    pub thumb_url: String,
}

impl RecipeSummary {
    /// Create a new summary
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        thumb_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            thumb_url: thumb_url.into(),
        }
    }
}

// =============================================================================
// IngredientEntry - One measure/ingredient pair
// =============================================================================

/// A single ingredient line of a recipe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngredientEntry {
    /// Quantity text as the source reports it (e.g. "2 tbsp")
    pub measure: String,
    /// Ingredient name (e.g. "soy sauce")
    pub ingredient: String,
}

impl IngredientEntry {
    /// Create a new entry
    pub fn new(measure: impl Into<String>, ingredient: impl Into<String>) -> Self {
        Self {
            measure: measure.into(),
            ingredient: ingredient.into(),
        }
    }
}

// =============================================================================
// RecipeDetail - Full recipe as returned by a by-id lookup
// =============================================================================

/// Full recipe detail
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeDetail {
    /// Stable unique identifier issued by the recipe source
    pub id: String,
    /// Display title
    pub name: String,
    /// Thumbnail image URL
    #[serde(default)]
    pub thumb_url: String,
    /// Category (e.g. "Chicken")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Cuisine/area (e.g. "Japanese")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    /// Preparation instructions
    #[serde(default)]
    pub instructions: String,
    /// Ingredient list, in the source's slot order
    #[serde(default)]
    pub ingredients: Vec<IngredientEntry>,
}

impl RecipeDetail {
    /// The summary view of this recipe
    pub fn summary(&self) -> RecipeSummary {
        RecipeSummary::new(&self.id, &self.name, &self.thumb_url)
    }
}

// =============================================================================
// FavoriteRecipe - The persisted favorites record
// =============================================================================

/// A user-saved recipe reference, as persisted in the favorites store
///
/// Exactly the fields needed to render a favorites list row without a
/// second network fetch. Within the persisted collection `id` is unique.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FavoriteRecipe {
    /// Stable unique identifier issued by the recipe source. Primary key.
    pub id: String,
    /// Display title
    pub name: String,
    /// Thumbnail image URL
    #[serde(default)]
    pub thumb_url: String,
}

impl FavoriteRecipe {
    /// Create a new favorite record
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        thumb_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            thumb_url: thumb_url.into(),
        }
    }
}

impl From<RecipeSummary> for FavoriteRecipe {
    fn from(recipe: RecipeSummary) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name,
            thumb_url: recipe.thumb_url,
        }
    }
}

impl From<&RecipeDetail> for FavoriteRecipe {
    fn from(recipe: &RecipeDetail) -> Self {
        Self::new(&recipe.id, &recipe.name, &recipe.thumb_url)
    }
}
