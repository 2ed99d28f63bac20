//! Cache Module
//!
//! Provides in-memory caching of weather readings with a fixed TTL.

mod clock;
mod entry;
mod stats;
mod store;
mod weather;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;
pub use weather::WeatherCache;

// == Public Constants ==
/// How long a cached reading stays fresh, in milliseconds (one hour)
pub const WEATHER_TTL_MS: i64 = 3_600_000;
