//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

/// User-facing message for every failed lookup
pub const LOOKUP_FAILED_MESSAGE: &str = "City not found";

/// One snapshot of current conditions from the weather provider
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherReading {
    pub name: String,
    pub temperature: f64,
    pub humidity: u8,
    pub wind_kph: f64,
    pub condition: String,
    /// Icon reference as returned upstream (e.g. `//cdn.weatherapi.com/.../113.png`)
    pub icon: String,
}

/// Temperature unit preference
///
/// Only affects the label and the `units` query parameter. Readings are never
/// converted locally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum TempUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TempUnit {
    pub fn toggle(&self) -> Self {
        match self {
            TempUnit::Celsius => TempUnit::Fahrenheit,
            TempUnit::Fahrenheit => TempUnit::Celsius,
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            TempUnit::Celsius => "°C",
            TempUnit::Fahrenheit => "°F",
        }
    }

    /// Value for the provider's `units` query parameter
    pub fn query_value(&self) -> &'static str {
        match self {
            TempUnit::Celsius => "metric",
            TempUnit::Fahrenheit => "imperial",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TempUnit::Celsius => "Celsius",
            TempUnit::Fahrenheit => "Fahrenheit",
        }
    }

    pub fn format(&self, value: f64) -> String {
        format!("{}{}", value, self.suffix())
    }
}

/// Which panel receives keyboard input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum Focus {
    #[default]
    Search,
    Favorites,
}

impl Focus {
    pub fn toggle(&self) -> Self {
        match self {
            Focus::Search => Focus::Favorites,
            Focus::Favorites => Focus::Search,
        }
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Search input text
    #[debug(section = "Search", label = "Query")]
    pub query: String,

    /// Reading lifecycle: Empty → Loading → Loaded/Failed.
    /// A reading and an error are never active at the same time.
    #[debug(section = "Weather", label = "Reading", debug_fmt)]
    pub weather: DataResource<WeatherReading>,

    /// A fetch is in flight while the previous reading stays on screen
    #[debug(section = "Weather", label = "Refreshing")]
    pub is_refreshing: bool,

    #[debug(section = "Weather", label = "Unit", debug_fmt)]
    pub unit: TempUnit,

    /// Id of the most recent fetch; results tagged with an older id are stale
    #[debug(section = "Weather", label = "Request")]
    pub request_seq: u64,

    /// Favorite cities in insertion order, unique by value
    #[debug(section = "Favorites", label = "Cities", debug_fmt)]
    pub favorites: Vec<String>,

    #[debug(skip)]
    pub favorites_selected: usize,

    /// Last failure writing favorites to storage
    #[debug(section = "Favorites", label = "Storage error", debug_fmt)]
    pub storage_error: Option<String>,

    #[debug(skip)]
    pub focus: Focus,
}

impl AppState {
    /// Seed state with favorites loaded from storage
    pub fn new(favorites: Vec<String>) -> Self {
        Self {
            query: String::new(),
            weather: DataResource::Empty,
            is_refreshing: false,
            unit: TempUnit::default(),
            request_seq: 0,
            favorites,
            favorites_selected: 0,
            storage_error: None,
            focus: Focus::default(),
        }
    }

    pub fn reading(&self) -> Option<&WeatherReading> {
        self.weather.data()
    }

    pub fn error(&self) -> Option<&str> {
        self.weather.error()
    }

    pub fn is_favorite(&self, city: &str) -> bool {
        self.favorites.iter().any(|c| c == city)
    }

    pub fn selected_favorite(&self) -> Option<&str> {
        self.favorites
            .get(self.favorites_selected)
            .map(String::as_str)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
