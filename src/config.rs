//! Configuration Module
//!
//! Handles loading the endpoint and cache settings from environment variables.

use std::env;

/// Default Open-Meteo geocoding endpoint
pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Default Open-Meteo forecast endpoint
pub const DEFAULT_WEATHER_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Default language for geocoding results
pub const DEFAULT_LANGUAGE: &str = "pt";

/// Lookup configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
/// Nothing is validated here; a bad URL surfaces on the first request.
#[derive(Debug, Clone)]
pub struct Config {
    /// Geocoding endpoint URL
    pub geocoding_url: String,
    /// Current weather endpoint URL
    pub weather_url: String,
    /// Language requested from the geocoding service
    pub language: String,
    /// Whether weather readings are cached for one hour
    pub cache_enabled: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `GEOCODING_API` - Geocoding endpoint (default: Open-Meteo search)
    /// - `CLIMA_API` - Weather endpoint (default: Open-Meteo forecast)
    /// - `GEOCODING_LANGUAGE` - Result language (default: pt)
    /// - `CLIMA_CACHE` - Enable the weather cache (default: true)
    pub fn from_env() -> Self {
        Self {
            geocoding_url: env::var("GEOCODING_API")
                .unwrap_or_else(|_| DEFAULT_GEOCODING_URL.to_string()),
            weather_url: env::var("CLIMA_API")
                .unwrap_or_else(|_| DEFAULT_WEATHER_URL.to_string()),
            language: env::var("GEOCODING_LANGUAGE")
                .unwrap_or_else(|_| DEFAULT_LANGUAGE.to_string()),
            cache_enabled: env::var("CLIMA_CACHE")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }

    /// Creates a Config pointing at the given endpoints, keeping other defaults.
    pub fn with_endpoints(
        geocoding_url: impl Into<String>,
        weather_url: impl Into<String>,
    ) -> Self {
        Self {
            geocoding_url: geocoding_url.into(),
            weather_url: weather_url.into(),
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geocoding_url: DEFAULT_GEOCODING_URL.to_string(),
            weather_url: DEFAULT_WEATHER_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            cache_enabled: true,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
