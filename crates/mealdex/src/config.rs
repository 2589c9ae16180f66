//! Configuration constants for mealdex

/// Application metadata
pub mod app {
    /// Application name (used for config directory, etc.)
    pub const NAME: &str = "mealdex";
}

/// Favorites storage configuration
pub mod storage {
    /// Backend key under which the whole favorites collection is stored
    pub const FAVORITES_KEY: &str = "favorites";

    /// Favorites envelope format version
    pub const FAVORITES_VERSION: u32 = 1;
}

/// Recipe source configuration
pub mod source {
    /// Default TheMealDB API server (free public tier)
    pub const MEALDB_DEFAULT_SERVER: &str = "https://www.themealdb.com/api/json/v1/1";

    /// Maximum number of numbered ingredient/measure slots a recipe carries
    pub const MAX_INGREDIENT_SLOTS: usize = 20;
}

/// Network-related configuration
pub mod network {
    /// User agent for HTTP requests
    pub const USER_AGENT: &str = concat!("Mealdex/", env!("CARGO_PKG_VERSION"));

    /// Connection timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Read timeout in seconds
    pub const READ_TIMEOUT_SECS: u64 = 30;
}
