//! Weather Cache
//!
//! Wraps a weather source with a one-hour cache keyed by coordinate.

use chrono::Duration;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore, Clock, SystemClock, WEATHER_TTL_MS};
use crate::client::WeatherSource;
use crate::error::Result;
use crate::models::{Coordinate, WeatherReading};

/// Time-bounded cache in front of a [`WeatherSource`].
///
/// Lookups take `&mut self`; there is no locking and no de-duplication of
/// concurrent misses.
#[derive(Debug)]
pub struct WeatherCache<S, C = SystemClock> {
    source: S,
    clock: C,
    store: CacheStore,
}

impl<S: WeatherSource> WeatherCache<S> {
    /// Creates a cache over `source` using the wall clock.
    pub fn new(source: S) -> Self {
        Self::with_clock(source, SystemClock)
    }
}

impl<S: WeatherSource, C: Clock> WeatherCache<S, C> {
    /// Creates a cache over `source` reading time from `clock`.
    pub fn with_clock(source: S, clock: C) -> Self {
        Self {
            source,
            clock,
            store: CacheStore::new(Duration::milliseconds(WEATHER_TTL_MS)),
        }
    }

    // == Get Weather ==
    /// Returns the reading for `coord`, fetching only on a miss.
    ///
    /// A fresh entry (younger than one hour) is returned without touching the
    /// source. Otherwise the source is called and its reading stored with the
    /// current time. A failed fetch leaves the cache unchanged.
    pub async fn get_weather(&mut self, coord: Coordinate) -> Result<WeatherReading> {
        let key = coord.cache_key();

        if let Some(reading) = self.store.get(&key, self.clock.now()) {
            debug!(key, "Cache hit");
            return Ok(reading);
        }

        debug!(key, "Cache miss");
        let reading = self.source.fetch_weather(coord).await?;
        self.store.insert(key, reading, self.clock.now());
        Ok(reading)
    }

    // == Accessors ==
    /// Hit, miss and entry counts so far.
    pub fn stats(&self) -> CacheStats {
        self.store.stats()
    }

    /// Underlying store, stale entries included.
    pub fn store(&self) -> &CacheStore {
        &self.store
    }

    /// The wrapped weather source.
    pub fn source(&self) -> &S {
        &self.source
    }
}
