pub mod dashboard;
pub mod favorites_panel;
pub mod search_bar;
pub mod weather_card;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use dashboard::{Dashboard, DashboardProps, ERROR_ICON};
pub use favorites_panel::{FavoritesPanel, FavoritesPanelProps};
pub use search_bar::{SearchBar, SearchBarProps};
pub use weather_card::{WeatherCard, WeatherCardProps};
