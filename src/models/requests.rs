//! Query parameters for the remote services
//!
//! Serialized into the URL query string by reqwest.

use serde::Serialize;

use crate::models::Coordinate;

/// Query for the geocoding search endpoint.
///
/// # Fields
/// - `name`: City name, sent as typed
/// - `count`: Number of results requested (always 1)
/// - `language`: Language of returned place names
/// - `format`: Response format (always "json")
#[derive(Debug, Clone, Serialize)]
pub struct GeocodingQuery<'a> {
    pub name: &'a str,
    pub count: u32,
    pub language: &'a str,
    pub format: &'static str,
}

impl<'a> GeocodingQuery<'a> {
    pub fn new(name: &'a str, language: &'a str) -> Self {
        Self {
            name,
            count: 1,
            language,
            format: "json",
        }
    }
}

/// Query for the forecast endpoint, asking only for current weather.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub current_weather: bool,
}

impl From<Coordinate> for ForecastQuery {
    fn from(coord: Coordinate) -> Self {
        Self {
            latitude: coord.latitude,
            longitude: coord.longitude,
            current_weather: true,
        }
    }
}
