//! WeatherAPI.com client

use reqwest::{Client, Request, StatusCode};
use serde::Deserialize;

use crate::state::{TempUnit, WeatherReading};

/// Current-conditions endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1/current.json";

/// Why a lookup failed. Only ever logged; the UI shows a single message.
#[derive(thiserror::Error, Debug)]
pub enum LookupError {
    #[error("weather request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("weather provider returned {0}")]
    Status(StatusCode),
    #[error("weather response parse error: {0}")]
    Decode(#[from] serde_json::Error),
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    location: ApiLocation,
    current: ApiCurrent,
}

#[derive(Debug, Deserialize)]
struct ApiLocation {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ApiCurrent {
    temp_c: f64,
    humidity: u8,
    wind_kph: f64,
    condition: ApiCondition,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    icon: String,
    text: String,
}

impl From<CurrentResponse> for WeatherReading {
    fn from(data: CurrentResponse) -> Self {
        WeatherReading {
            name: data.location.name,
            temperature: data.current.temp_c,
            humidity: data.current.humidity,
            wind_kph: data.current.wind_kph,
            condition: data.current.condition.text,
            icon: data.current.condition.icon,
        }
    }
}

/// Decode a `current.json` body into a reading
pub fn parse_reading(body: &str) -> Result<WeatherReading, LookupError> {
    let data: CurrentResponse = serde_json::from_str(body)?;
    Ok(data.into())
}

// ============================================================================
// Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct WeatherClient {
    base_url: String,
    api_key: String,
    http: Client,
}

impl WeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            http: Client::new(),
        }
    }

    /// Build the GET request; the city name is URL-encoded here
    pub fn build_request(&self, city: &str, unit: TempUnit) -> Result<Request, LookupError> {
        let request = self
            .http
            .get(self.base_url.as_str())
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", city),
                ("units", unit.query_value()),
            ])
            .build()?;
        Ok(request)
    }

    /// Fetch current conditions for `city`.
    /// Any non-2xx status is an error regardless of body.
    pub async fn fetch_current(
        &self,
        city: &str,
        unit: TempUnit,
    ) -> Result<WeatherReading, LookupError> {
        let request = self.build_request(city, unit)?;
        let response = self.http.execute(request).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }

        let body = response.text().await?;
        parse_reading(&body)
    }
}
