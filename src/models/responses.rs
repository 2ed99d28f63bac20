//! Response bodies of the remote services
//!
//! Only the fields the lookup reads are modelled; everything else is ignored.

use serde::Deserialize;

use crate::models::{Coordinate, WeatherReading};

/// Body of the geocoding search endpoint.
///
/// `results` is omitted entirely by the service when nothing matches.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Option<Vec<GeocodingResult>>,
}

impl GeocodingResponse {
    /// First match, if any.
    pub fn first(&self) -> Option<&GeocodingResult> {
        self.results.as_deref().and_then(|results| results.first())
    }
}

/// A single geocoding match.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResult {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl GeocodingResult {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Body of the forecast endpoint when `current_weather=true`.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub current_weather: Option<CurrentWeather>,
}

impl ForecastResponse {
    /// Reading from the current weather block, if it carries a temperature.
    pub fn reading(&self) -> Option<WeatherReading> {
        self.current_weather
            .as_ref()
            .and_then(|current| current.temperature)
            .map(WeatherReading::new)
    }
}

/// The `current_weather` block. Only the temperature is read; other
/// fields are ignored whatever their type.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    #[serde(default)]
    pub temperature: Option<f64>,
}
