//! Client Module
//!
//! HTTP clients for the geocoding and weather services.
//!
//! # Services
//! - Geocoding search: city name to coordinates
//! - Forecast: coordinates to current temperature

pub mod geocoding;
pub mod weather;

use std::future::Future;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{ClimaError, Result};
use crate::models::{Coordinate, WeatherReading};

pub use geocoding::CoordinateResolver;
pub use weather::WeatherFetcher;

// == Weather Source ==
/// Anything that can produce a current reading for a coordinate.
///
/// The cache wraps a source; tests substitute counting fakes.
pub trait WeatherSource {
    fn fetch_weather(
        &self,
        coord: Coordinate,
    ) -> impl Future<Output = Result<WeatherReading>> + Send;
}

/// Builds the HTTP client shared by both services.
pub fn build_http_client() -> Result<Client> {
    Client::builder()
        .user_agent(concat!("clima/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(ClimaError::from)
}

/// Sends a GET with the given query and decodes a JSON body.
///
/// Non-2xx statuses become `ClimaError::Api`; transport failures are
/// classified by the `reqwest::Error` conversion.
pub(crate) async fn get_json<Q, T>(client: &Client, url: &str, query: &Q) -> Result<T>
where
    Q: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let response: Response = client.get(url).query(query).send().await?;

    let status = response.status();
    debug!(%status, url, "Received response");
    if !status.is_success() {
        return Err(ClimaError::from_status(status));
    }

    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| ClimaError::Unexpected(e.to_string()))
}
