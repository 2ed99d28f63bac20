//! Domain values and wire models
//!
//! `domain` holds the values passed between components, `requests` the query
//! parameters sent to the remote services, and `responses` their JSON bodies.

pub mod domain;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use domain::{Coordinate, WeatherReading};
pub use requests::{ForecastQuery, GeocodingQuery};
pub use responses::{CurrentWeather, ForecastResponse, GeocodingResponse, GeocodingResult};
