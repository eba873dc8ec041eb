// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Storage keys, filter option catalogues, and service defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants grouped by domain.

/// Keys of the durable key-value slots
pub mod storage_keys {
    /// Favorite recipe identifiers (JSON array of strings)
    pub const FAVORITES: &str = "recipe-favorites";
    /// Shopping list entries (JSON array of strings)
    pub const SHOPPING_LIST: &str = "shopping-list";
}

/// Sentinel values used by selection and filter inputs
pub mod selection {
    /// Category selection / cook time / difficulty meaning "no restriction"
    pub const ALL: &str = "all";
}

/// Option catalogues offered by the filter panel
pub mod filter_options {
    /// Dietary tags that can be required
    pub const DIETARY_TAGS: [&str; 8] = [
        "vegetarian",
        "vegan",
        "gluten-free",
        "dairy-free",
        "keto",
        "paleo",
        "low-carb",
        "high-protein",
    ];

    /// Cook time thresholds offered, with display labels
    pub const COOK_TIME_OPTIONS: [(&str, &str); 4] = [
        ("all", "Any Time"),
        ("15", "Under 15 min"),
        ("30", "Under 30 min"),
        ("60", "Under 1 hour"),
    ];

    /// Difficulty choices, with display labels
    pub const DIFFICULTY_OPTIONS: [(&str, &str); 4] = [
        ("all", "All Levels"),
        ("easy", "Easy"),
        ("medium", "Medium"),
        ("hard", "Hard"),
    ];
}

/// Service identification used in logs
pub mod service_names {
    /// Name reported by the logging layer
    pub const RECIPE_FINDER: &str = "recipe-finder";
}

/// Default directories and file names
pub mod defaults {
    /// Subdirectory created under the platform data directory
    pub const DATA_DIR_NAME: &str = "recipe-finder";
    /// Fallback data directory when no platform directory is known
    ///
    /// Kept apart from the repository's `data/` fixture sources.
    pub const FALLBACK_DATA_DIR: &str = "./.recipe-finder";
    /// Extension of the per-key files written by the file store
    pub const STORE_FILE_EXTENSION: &str = "json";
}
