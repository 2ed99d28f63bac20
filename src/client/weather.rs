//! Weather Fetcher
//!
//! Fetches the current temperature for a coordinate.

use reqwest::Client;
use tracing::{debug, info};

use crate::client::{get_json, WeatherSource};
use crate::config::Config;
use crate::error::{ClimaError, Result};
use crate::models::{Coordinate, ForecastQuery, ForecastResponse, WeatherReading};

/// Client for the forecast endpoint.
#[derive(Debug, Clone)]
pub struct WeatherFetcher {
    client: Client,
    url: String,
}

impl WeatherFetcher {
    // == Constructor ==
    /// Creates a fetcher that queries the forecast endpoint at `url`.
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Creates a fetcher for the configured forecast endpoint.
    pub fn from_config(client: Client, config: &Config) -> Self {
        Self::new(client, config.weather_url.clone())
    }
}

impl WeatherSource for WeatherFetcher {
    /// Requests current weather for `coord` and returns its temperature.
    ///
    /// Coordinates are not range-checked. The temperature is returned as
    /// reported, in Celsius.
    async fn fetch_weather(&self, coord: Coordinate) -> Result<WeatherReading> {
        debug!(url = %self.url, "Fetching current weather for {}", coord);

        let body: ForecastResponse =
            get_json(&self.client, &self.url, &ForecastQuery::from(coord)).await?;
        let reading = body.reading().ok_or(ClimaError::WeatherUnavailable)?;

        info!(temperature = reading.temperature, "Fetched weather for {}", coord);
        Ok(reading)
    }
}
