//! Render snapshot tests using RenderHarness

use tui_dispatch::{DataResource, testing::*};
use weather_dashboard::{
    components::{Component, Dashboard, DashboardProps},
    state::{AppState, Focus, TempUnit, WeatherReading},
};

fn render(state: &AppState, width: u16, height: u16) -> String {
    let mut render = RenderHarness::new(width, height);
    let mut component = Dashboard::new();

    render.render_to_string_plain(|frame| {
        let props = DashboardProps {
            state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    })
}

fn reading(name: &str, temperature: f64, icon_code: u16, condition: &str) -> WeatherReading {
    WeatherReading {
        name: name.into(),
        temperature,
        humidity: 55,
        wind_kph: 12.6,
        condition: condition.into(),
        icon: format!("//cdn.weatherapi.com/weather/64x64/day/{icon_code}.png"),
    }
}

#[test]
fn test_render_initial_state() {
    let output = render(&AppState::default(), 60, 24);

    assert!(output.contains("Weather Dashboard"), "Should show title");
    assert!(
        output.contains("Enter city name"),
        "Should show search placeholder"
    );
    assert!(
        output.contains("No favorite cities yet."),
        "Should show empty favorites"
    );
    assert!(
        output.contains("Switch to Fahrenheit"),
        "Should offer unit toggle"
    );
}

#[test]
fn test_render_loading_state() {
    let state = AppState {
        query: "Lisbon".into(),
        weather: DataResource::Loading,
        ..Default::default()
    };

    let output = render(&state, 60, 24);

    assert!(output.contains("Lisbon"), "Query stays in the search box");
    assert!(output.contains("Loading..."));
}

#[test]
fn test_render_clear_weather() {
    let state = AppState {
        weather: DataResource::Loaded(reading("Madrid", 22.5, 113, "Sunny")),
        ..Default::default()
    };

    let output = render(&state, 60, 24);

    assert!(output.contains("Madrid"));
    assert!(output.contains("Sunny"));
    assert!(output.contains("Temperature: 22.5°C"));
    assert!(output.contains("Humidity: 55%"));
    assert!(output.contains("Wind Speed: 12.6 kph"));
}

#[test]
fn test_render_error_state() {
    let state = AppState {
        weather: DataResource::Failed("City not found".into()),
        ..Default::default()
    };

    let output = render(&state, 60, 24);

    assert!(output.contains("Error: City not found"));
}

#[test]
fn test_render_refreshing_keeps_reading() {
    let state = AppState {
        weather: DataResource::Loaded(reading("Oslo", -3.0, 338, "Heavy snow")),
        is_refreshing: true,
        ..Default::default()
    };

    let output = render(&state, 60, 24);

    assert!(output.contains("refreshing"));
    assert!(output.contains("Oslo"));
    assert!(output.contains("Heavy snow"));
}

#[test]
fn test_render_fahrenheit() {
    let state = AppState {
        weather: DataResource::Loaded(reading("Phoenix", 104.0, 113, "Sunny")),
        unit: TempUnit::Fahrenheit,
        ..Default::default()
    };

    let output = render(&state, 60, 24);

    assert!(output.contains("Temperature: 104°F"));
    assert!(output.contains("Switch to Celsius"));
}

#[test]
fn test_render_favorites() {
    let state = AppState::new(vec!["London".into(), "Berlin".into()]);

    let output = render(&state, 60, 24);

    assert!(output.contains("Favorite Cities"));
    assert!(output.contains("London"));
    assert!(output.contains("Berlin"));
    assert!(!output.contains("No favorite cities yet."));
}

#[test]
fn test_render_help_bar() {
    let output = render(&AppState::default(), 80, 24);

    assert!(output.contains("search"), "Should show search hint");
    assert!(output.contains("save"), "Should show save hint");
    assert!(output.contains("units"), "Should show units hint");
    assert!(output.contains("quit"), "Should show quit hint");

    let state = AppState {
        focus: Focus::Favorites,
        ..AppState::new(vec!["Rome".into()])
    };
    let output = render(&state, 80, 24);
    assert!(output.contains("load"), "Should show load hint");
}
