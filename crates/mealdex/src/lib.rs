//! Mealdex — recipe lookup with a local favorites store
//!
//! Recipe search against TheMealDB, plus a persistent, de-duplicated
//! favorites collection over a durable key-value backend.
//!
//! ## Quick start
//!
//! ```no_run
//! use mealdex::data::{FavoritesStore, FileBackend};
//! use mealdex::providers::MealDbSource;
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod network;
pub mod providers;

pub use error::{AppError, Result};
