//! Effects - side effects declared by the reducer

use crate::state::TempUnit;

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Look up current conditions for a city
    FetchWeather {
        request_id: u64,
        city: String,
        unit: TempUnit,
    },
    /// Overwrite the stored favorites with the full list
    PersistFavorites { cities: Vec<String> },
}
