//! TheMealDB API provider
//!
//! Implementation of `RecipeSource` for TheMealDB
//! (<https://www.themealdb.com/>).

use crate::config::source::{MAX_INGREDIENT_SLOTS, MEALDB_DEFAULT_SERVER};
use crate::data::types::{IngredientEntry, RecipeDetail, RecipeSummary};
use crate::error::Result;
use crate::network::HttpClient;

use super::traits::RecipeSource;

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;

// =============================================================================
// Internal API response types (serde)
// =============================================================================

/// Every TheMealDB endpoint wraps its payload the same way, with `null`
/// rather than an empty array when there are no hits.
#[derive(Debug, Deserialize)]
struct MdbMealList<T> {
    meals: Option<Vec<T>>,
}

#[derive(Debug, Deserialize)]
struct MdbMealSummary {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strMealThumb", default)]
    thumb: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MdbMeal {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strMealThumb", default)]
    thumb: Option<String>,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strArea", default)]
    area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    /// The numbered strIngredientN / strMeasureN fields land here
    #[serde(flatten)]
    slots: HashMap<String, Option<String>>,
}

// =============================================================================
// Mdb* -> domain conversions
// =============================================================================

/// Convert an empty string to None
fn non_empty(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Fold the numbered ingredient/measure slots into an ordered list
///
/// Slots with an empty or absent ingredient are skipped; a missing measure
/// leaves the entry's measure empty.
fn ingredients_from_slots(slots: &HashMap<String, Option<String>>) -> Vec<IngredientEntry> {
    let mut entries = Vec::new();
    for i in 1..=MAX_INGREDIENT_SLOTS {
        let ingredient = slots
            .get(&format!("strIngredient{i}"))
            .and_then(|v| v.as_deref())
            .and_then(non_empty);
        let ingredient = match ingredient {
            Some(ing) => ing,
            None => continue,
        };

        let measure = slots
            .get(&format!("strMeasure{i}"))
            .and_then(|v| v.as_deref())
            .and_then(non_empty)
            .unwrap_or_default();

        entries.push(IngredientEntry {
            measure,
            ingredient,
        });
    }
    entries
}

impl From<MdbMealSummary> for RecipeSummary {
    fn from(mdb: MdbMealSummary) -> Self {
        RecipeSummary::new(mdb.id, mdb.name, mdb.thumb.unwrap_or_default())
    }
}

impl From<MdbMeal> for RecipeDetail {
    fn from(mdb: MdbMeal) -> Self {
        let ingredients = ingredients_from_slots(&mdb.slots);
        RecipeDetail {
            id: mdb.id,
            name: mdb.name,
            thumb_url: mdb.thumb.unwrap_or_default(),
            category: mdb.category.as_deref().and_then(non_empty),
            area: mdb.area.as_deref().and_then(non_empty),
            instructions: mdb.instructions.unwrap_or_default(),
            ingredients,
        }
    }
}

// =============================================================================
// MealDbSource
// =============================================================================

/// TheMealDB API provider
///
/// Searches [TheMealDB](https://www.themealdb.com/), a free community
/// database of meal recipes.
pub struct MealDbSource {
    client: HttpClient,
    base_url: String,
}

impl MealDbSource {
    /// Create a source using the default server
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
            base_url: MEALDB_DEFAULT_SERVER.to_string(),
        })
    }

    /// Create a source with a custom base URL (for testing or mirrors)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
            base_url: base_url.into(),
        })
    }

    /// Build a full API URL from an endpoint path
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl RecipeSource for MealDbSource {
    fn name(&self) -> &'static str {
        "TheMealDB"
    }

    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>> {
        let list: MdbMealList<MdbMealSummary> = self
            .client
            .get_json_with_query(&self.url("/search.php"), &[("s", query)])
            .await?;

        Ok(list
            .meals
            .unwrap_or_default()
            .into_iter()
            .map(RecipeSummary::from)
            .collect())
    }

    async fn lookup(&self, id: &str) -> Result<Option<RecipeDetail>> {
        let list: MdbMealList<MdbMeal> = self
            .client
            .get_json_with_query(&self.url("/lookup.php"), &[("i", id)])
            .await?;

        Ok(list
            .meals
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(RecipeDetail::from))
    }

    async fn random(&self) -> Result<Option<RecipeDetail>> {
        let list: MdbMealList<MdbMeal> =
            self.client.get_json(&self.url("/random.php")).await?;

        Ok(list
            .meals
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(RecipeDetail::from))
    }
}

// =============================================================================
// Tests
// =============================================================================
