//! Terminal glyphs for the provider's condition icons
//!
//! WeatherAPI icon references end in a numeric file name
//! (`//cdn.weatherapi.com/weather/64x64/day/113.png`); the number identifies
//! the condition independent of day/night.

/// Coarse weather condition for glyph selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCondition {
    ClearSky,
    PartlyCloudy,
    Cloudy,
    Fog,
    Drizzle,
    Rain,
    Snow,
    Thunderstorm,
    Unknown,
}

impl WeatherCondition {
    /// Condition for a WeatherAPI icon number
    pub fn from_icon_code(code: u16) -> Self {
        match code {
            113 => WeatherCondition::ClearSky,
            116 => WeatherCondition::PartlyCloudy,
            119 | 122 => WeatherCondition::Cloudy,
            143 | 248 | 260 => WeatherCondition::Fog,
            263 | 266 | 281 | 284 => WeatherCondition::Drizzle,
            176 | 293..=314 | 353..=359 => WeatherCondition::Rain,
            179..=185 | 227 | 230 | 317..=350 | 362..=377 => WeatherCondition::Snow,
            200 | 386..=395 => WeatherCondition::Thunderstorm,
            _ => WeatherCondition::Unknown,
        }
    }

    /// Condition for a full icon reference; `Unknown` if it has no code
    pub fn from_icon(icon: &str) -> Self {
        icon_code(icon)
            .map(Self::from_icon_code)
            .unwrap_or(WeatherCondition::Unknown)
    }

    pub fn emoji(self) -> &'static str {
        match self {
            WeatherCondition::ClearSky => "\u{2600}\u{fe0f}",
            WeatherCondition::PartlyCloudy => "\u{26c5}",
            WeatherCondition::Cloudy | WeatherCondition::Unknown => "\u{2601}\u{fe0f}",
            WeatherCondition::Fog => "\u{1f32b}\u{fe0f}",
            WeatherCondition::Drizzle => "\u{1f326}\u{fe0f}",
            WeatherCondition::Rain => "\u{1f327}\u{fe0f}",
            WeatherCondition::Snow => "\u{2744}\u{fe0f}",
            WeatherCondition::Thunderstorm => "\u{26c8}\u{fe0f}",
        }
    }
}

/// Numeric file stem of an icon reference
fn icon_code(icon: &str) -> Option<u16> {
    let file = icon.rsplit('/').next()?;
    let stem = file.split('.').next()?;
    stem.parse().ok()
}

pub fn icon_emoji(icon: &str) -> &'static str {
    WeatherCondition::from_icon(icon).emoji()
}
