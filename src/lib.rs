//! Clima - current temperature of a city
//!
//! Resolves a city name with the Open-Meteo geocoding API, then fetches its
//! current temperature, caching readings for one hour.

pub mod app;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use app::{App, WeatherLookup};
pub use cache::WeatherCache;
pub use client::{CoordinateResolver, WeatherFetcher, WeatherSource};
pub use config::Config;
pub use error::{ClimaError, ErrorKind};
pub use models::{Coordinate, WeatherReading};
