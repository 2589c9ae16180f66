//! Recipe sources
//!
//! The `RecipeSource` trait and the TheMealDB implementation.

pub mod mealdb;
pub mod traits;

// Re-exports
pub use mealdb::MealDbSource;
pub use traits::RecipeSource;
