//! Coordinate Resolver
//!
//! Resolves a city name to the coordinates of the first geocoding match.

use reqwest::Client;
use tracing::{debug, info};

use crate::client::get_json;
use crate::config::Config;
use crate::error::{ClimaError, Result};
use crate::models::{Coordinate, GeocodingQuery, GeocodingResponse};

/// Client for the geocoding search endpoint.
#[derive(Debug, Clone)]
pub struct CoordinateResolver {
    client: Client,
    url: String,
    language: String,
}

impl CoordinateResolver {
    /// Creates a resolver for `url`, requesting results in `language`.
    pub fn new(client: Client, url: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            language: language.into(),
        }
    }

    /// Creates a resolver from configuration.
    pub fn from_config(client: Client, config: &Config) -> Self {
        Self::new(client, config.geocoding_url.clone(), config.language.clone())
    }

    // == Resolve ==
    /// Returns the coordinates of the first match for `city`.
    ///
    /// The name is sent as given, with no validation. One request per call.
    ///
    /// # Errors
    /// - `CityNotFound` if the service returns no results
    /// - transport and HTTP errors as classified by the client
    pub async fn resolve(&self, city: &str) -> Result<Coordinate> {
        debug!(city, url = %self.url, "Resolving city");

        let query = GeocodingQuery::new(city, &self.language);
        let body: GeocodingResponse = get_json(&self.client, &self.url, &query).await?;

        let first = body.first().ok_or(ClimaError::CityNotFound)?;
        let coord = first.coordinate();

        info!(
            city,
            place = first.name.as_deref().unwrap_or(city),
            country = first.country.as_deref().unwrap_or("-"),
            "Resolved to {}",
            coord
        );
        Ok(coord)
    }
}
