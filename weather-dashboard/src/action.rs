//! Actions - user intents and async results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherReading;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Search category =====
    /// Search input text changed
    QueryChange(String),

    /// Intent: look up the current query (no-op when blank)
    Search,

    // ===== Weather category =====
    /// Result: provider answered for the given request
    WeatherDidLoad {
        request_id: u64,
        reading: WeatherReading,
    },

    /// Result: lookup failed (network, status or decode); detail is logged, not stored
    WeatherDidError { request_id: u64 },

    // ===== Favorite category =====
    /// Append the current query to favorites and persist the list
    FavoriteSave,

    /// Put a favorite into the search box and look it up
    FavoriteLoad(String),

    /// Highlight a favorite in the list (by index)
    FavoriteSelect(usize),

    /// Load the highlighted favorite
    FavoriteConfirm,

    // ===== Favorites category =====
    /// Result: favorites written to storage
    FavoritesDidPersist,

    /// Result: writing favorites failed
    FavoritesDidError(String),

    // ===== UI category =====
    /// Toggle between Celsius and Fahrenheit
    UiToggleUnits,

    /// Move keyboard focus between search box and favorites
    UiFocusToggle,

    /// Force a re-render (for cursor movement, etc.)
    Render,

    // ===== Uncategorized (global) =====
    /// Exit the application
    Quit,
}
