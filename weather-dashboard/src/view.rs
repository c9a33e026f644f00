//! Display model - pure projection of `AppState` into what gets drawn
//!
//! Components render a `DashboardView` and never inspect `AppState`
//! conditionals themselves, so everything visible can be asserted here
//! without a terminal.

use tui_dispatch::DataResource;

use crate::icons;
use crate::state::{AppState, Focus, WeatherReading};

pub const SEARCH_PLACEHOLDER: &str = "Enter city name";
pub const NO_FAVORITES: &str = "No favorite cities yet.";

/// The result card for a loaded reading
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub name: String,
    pub temperature: String,
    pub humidity: String,
    pub wind: String,
    pub icon: &'static str,
    pub condition: String,
}

impl CardView {
    fn new(reading: &WeatherReading, state: &AppState) -> Self {
        CardView {
            name: reading.name.clone(),
            temperature: format!("Temperature: {}", state.unit.format(reading.temperature)),
            humidity: format!("Humidity: {}%", reading.humidity),
            wind: format!("Wind Speed: {} kph", reading.wind_kph),
            icon: icons::icon_emoji(&reading.icon),
            condition: reading.condition.clone(),
        }
    }
}

/// What the weather area shows
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherView {
    Empty,
    Loading,
    Error(String),
    Ready(CardView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub query: String,
    pub weather: WeatherView,
    pub is_refreshing: bool,
    /// Label of the unit toggle, naming the unit it switches to
    pub toggle_label: String,
    pub favorites: Vec<String>,
    pub favorites_selected: usize,
    pub focus: Focus,
    pub status: Option<String>,
}

impl DashboardView {
    pub fn from_state(state: &AppState) -> Self {
        let weather = match &state.weather {
            DataResource::Empty => WeatherView::Empty,
            DataResource::Loading => WeatherView::Loading,
            DataResource::Failed(error) => WeatherView::Error(format!("Error: {error}")),
            DataResource::Loaded(reading) => WeatherView::Ready(CardView::new(reading, state)),
        };

        DashboardView {
            query: state.query.clone(),
            weather,
            is_refreshing: state.is_refreshing,
            toggle_label: format!("Switch to {}", state.unit.toggle().label()),
            favorites: state.favorites.clone(),
            favorites_selected: state.favorites_selected,
            focus: state.focus,
            status: state
                .storage_error
                .as_ref()
                .map(|e| format!("Could not save favorites: {e}")),
        }
    }

    pub fn card(&self) -> Option<&CardView> {
        match &self.weather {
            WeatherView::Ready(card) => Some(card),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.weather {
            WeatherView::Error(message) => Some(message),
            _ => None,
        }
    }
}
