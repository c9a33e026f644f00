//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, LOOKUP_FAILED_MESSAGE};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Search actions =====
        Action::QueryChange(query) => {
            state.query = query;
            DispatchResult::changed()
        }

        Action::Search => {
            let city = state.query.trim().to_string();
            if city.is_empty() {
                return DispatchResult::unchanged();
            }
            start_fetch(state, city)
        }

        // ===== Weather actions =====
        Action::WeatherDidLoad {
            request_id,
            reading,
        } => {
            if request_id != state.request_seq {
                return DispatchResult::unchanged();
            }
            state.weather = DataResource::Loaded(reading);
            state.is_refreshing = false;
            DispatchResult::changed()
        }

        Action::WeatherDidError { request_id } => {
            if request_id != state.request_seq {
                return DispatchResult::unchanged();
            }
            state.weather = DataResource::Failed(LOOKUP_FAILED_MESSAGE.to_string());
            state.is_refreshing = false;
            DispatchResult::changed()
        }

        // ===== Favorite actions =====
        Action::FavoriteSave => {
            let city = state.query.trim();
            if city.is_empty() || state.is_favorite(city) {
                return DispatchResult::unchanged();
            }
            state.favorites.push(city.to_string());
            DispatchResult::changed_with(Effect::PersistFavorites {
                cities: state.favorites.clone(),
            })
        }

        Action::FavoriteLoad(city) => load_favorite(state, city),

        Action::FavoriteSelect(index) => {
            if index < state.favorites.len() && index != state.favorites_selected {
                state.favorites_selected = index;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::FavoriteConfirm => {
            let Some(city) = state.selected_favorite().map(str::to_string) else {
                return DispatchResult::unchanged();
            };
            load_favorite(state, city)
        }

        Action::FavoritesDidPersist => {
            if state.storage_error.take().is_some() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::FavoritesDidError(msg) => {
            state.storage_error = Some(msg);
            DispatchResult::changed()
        }

        // ===== UI actions =====
        Action::UiToggleUnits => {
            state.unit = state.unit.toggle();
            DispatchResult::changed()
        }

        Action::UiFocusToggle => {
            state.focus = state.focus.toggle();
            DispatchResult::changed()
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Quit => DispatchResult::unchanged(),
    }
}

fn load_favorite(state: &mut AppState, city: String) -> DispatchResult<Effect> {
    state.query = city;
    let city = state.query.trim().to_string();
    if city.is_empty() {
        return DispatchResult::changed();
    }
    start_fetch(state, city)
}

/// Bump the request generation and declare the fetch.
/// A loaded reading stays visible until the new result arrives.
fn start_fetch(state: &mut AppState, city: String) -> DispatchResult<Effect> {
    state.request_seq = state.request_seq.wrapping_add(1);
    if state.weather.is_loaded() {
        state.is_refreshing = true;
    } else {
        state.weather = DataResource::Loading;
    }
    DispatchResult::changed_with(Effect::FetchWeather {
        request_id: state.request_seq,
        city,
        unit: state.unit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Focus, TempUnit, WeatherReading};

    fn paris() -> WeatherReading {
        WeatherReading {
            name: "Paris".into(),
            temperature: 18.0,
            humidity: 72,
            wind_kph: 11.2,
            condition: "Partly cloudy".into(),
            icon: "//cdn.weatherapi.com/weather/64x64/day/116.png".into(),
        }
    }

    #[test]
    fn test_search_sets_loading_and_emits_fetch() {
        let mut state = AppState {
            query: "  Paris ".into(),
            ..Default::default()
        };

        let result = reducer(&mut state, Action::Search);

        assert!(result.changed);
        assert!(state.weather.is_loading());
        assert_eq!(state.request_seq, 1);
        assert_eq!(
            result.effects,
            vec![Effect::FetchWeather {
                request_id: 1,
                city: "Paris".into(),
                unit: TempUnit::Celsius,
            }]
        );
    }

    #[test]
    fn test_blank_search_is_a_no_op() {
        let mut state = AppState {
            query: "   ".into(),
            ..Default::default()
        };

        let result = reducer(&mut state, Action::Search);

        assert!(!result.changed);
        assert!(result.effects.is_empty());
        assert!(state.weather.is_empty());
        assert_eq!(state.request_seq, 0);
    }

    #[test]
    fn test_search_keeps_loaded_reading_while_refreshing() {
        let mut state = AppState {
            query: "Paris".into(),
            weather: DataResource::Loaded(paris()),
            ..Default::default()
        };

        reducer(&mut state, Action::Search);

        assert!(state.is_refreshing);
        assert_eq!(state.reading(), Some(&paris()));
    }

    #[test]
    fn test_load_replaces_reading_and_clears_error() {
        let mut state = AppState {
            weather: DataResource::Failed(LOOKUP_FAILED_MESSAGE.into()),
            query: "Paris".into(),
            ..Default::default()
        };
        reducer(&mut state, Action::Search);

        let result = reducer(
            &mut state,
            Action::WeatherDidLoad {
                request_id: 1,
                reading: paris(),
            },
        );

        assert!(result.changed);
        assert_eq!(state.reading(), Some(&paris()));
        assert_eq!(state.error(), None);
        assert!(!state.is_refreshing);
    }

    #[test]
    fn test_error_clears_reading() {
        let mut state = AppState {
            query: "Atlantis".into(),
            weather: DataResource::Loaded(paris()),
            ..Default::default()
        };
        reducer(&mut state, Action::Search);

        reducer(&mut state, Action::WeatherDidError { request_id: 1 });

        assert_eq!(state.reading(), None);
        assert_eq!(state.error(), Some("City not found"));
        assert!(!state.is_refreshing);
    }

    #[test]
    fn test_stale_results_are_ignored() {
        let mut state = AppState {
            query: "Paris".into(),
            ..Default::default()
        };
        reducer(&mut state, Action::Search);
        state.query = "Tokyo".into();
        reducer(&mut state, Action::Search);
        assert_eq!(state.request_seq, 2);

        let result = reducer(
            &mut state,
            Action::WeatherDidLoad {
                request_id: 1,
                reading: paris(),
            },
        );
        assert!(!result.changed);
        assert!(state.weather.is_loading());

        let result = reducer(&mut state, Action::WeatherDidError { request_id: 1 });
        assert!(!result.changed);
        assert!(state.weather.is_loading());
    }

    #[test]
    fn test_toggle_units_does_not_fetch_or_touch_reading() {
        let mut state = AppState {
            weather: DataResource::Loaded(paris()),
            ..Default::default()
        };

        let result = reducer(&mut state, Action::UiToggleUnits);

        assert!(result.changed);
        assert!(result.effects.is_empty());
        assert_eq!(state.unit, TempUnit::Fahrenheit);
        assert_eq!(state.reading(), Some(&paris()));
    }

    #[test]
    fn test_save_favorite_appends_and_persists() {
        let mut state = AppState {
            query: "Paris".into(),
            ..Default::default()
        };

        let result = reducer(&mut state, Action::FavoriteSave);

        assert_eq!(state.favorites, vec!["Paris"]);
        assert_eq!(
            result.effects,
            vec![Effect::PersistFavorites {
                cities: vec!["Paris".into()],
            }]
        );

        let result = reducer(&mut state, Action::FavoriteSave);
        assert!(!result.changed);
        assert!(result.effects.is_empty());
        assert_eq!(state.favorites, vec!["Paris"]);
    }

    #[test]
    fn test_save_favorite_ignores_blank_query() {
        let mut state = AppState::default();
        let result = reducer(&mut state, Action::FavoriteSave);
        assert!(!result.changed);
        assert!(state.favorites.is_empty());
    }

    #[test]
    fn test_save_favorite_dedups_by_exact_match_only() {
        let mut state = AppState::new(vec!["Paris".into()]);
        state.query = "paris".into();

        reducer(&mut state, Action::FavoriteSave);

        assert_eq!(state.favorites, vec!["Paris", "paris"]);
    }

    #[test]
    fn test_load_favorite_matches_search() {
        let mut via_search = AppState {
            query: "Tokyo".into(),
            ..Default::default()
        };
        let searched = reducer(&mut via_search, Action::Search);

        let mut via_favorite = AppState::default();
        let loaded = reducer(&mut via_favorite, Action::FavoriteLoad("Tokyo".into()));

        assert_eq!(via_favorite.query, "Tokyo");
        assert_eq!(loaded.effects, searched.effects);
    }

    #[test]
    fn test_favorite_confirm_loads_selected() {
        let mut state = AppState::new(vec!["London".into(), "Berlin".into()]);

        assert!(reducer(&mut state, Action::FavoriteSelect(1)).changed);
        assert!(!reducer(&mut state, Action::FavoriteSelect(5)).changed);

        let result = reducer(&mut state, Action::FavoriteConfirm);
        assert_eq!(state.query, "Berlin");
        assert!(matches!(
            &result.effects[..],
            [Effect::FetchWeather { city, .. }] if city == "Berlin"
        ));
    }

    #[test]
    fn test_favorite_confirm_without_favorites() {
        let mut state = AppState::default();
        let result = reducer(&mut state, Action::FavoriteConfirm);
        assert!(!result.changed);
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_storage_error_round_trip() {
        let mut state = AppState::default();

        reducer(&mut state, Action::FavoritesDidError("disk full".into()));
        assert_eq!(state.storage_error.as_deref(), Some("disk full"));

        assert!(reducer(&mut state, Action::FavoritesDidPersist).changed);
        assert_eq!(state.storage_error, None);
        assert!(!reducer(&mut state, Action::FavoritesDidPersist).changed);
    }

    #[test]
    fn test_focus_toggle() {
        let mut state = AppState::default();
        reducer(&mut state, Action::UiFocusToggle);
        assert_eq!(state.focus, Focus::Favorites);
        reducer(&mut state, Action::UiFocusToggle);
        assert_eq!(state.focus, Focus::Search);
    }
}
