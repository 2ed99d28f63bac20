//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use chrono::{DateTime, Duration, Utc};

use crate::models::WeatherReading;

// == Cache Entry ==
/// A stored weather reading and the instant it was written.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Key derived from the coordinate, `"lat,lon"`
    pub key: String,
    /// The stored reading
    pub data: WeatherReading,
    /// Creation instant
    pub timestamp: DateTime<Utc>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with `now`.
    pub fn new(key: String, data: WeatherReading, now: DateTime<Utc>) -> Self {
        Self {
            key,
            data,
            timestamp: now,
        }
    }

    /// Age of the entry at `now`.
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now.signed_duration_since(self.timestamp)
    }

    // == Is Fresh ==
    /// Checks whether the entry is still live at `now`.
    ///
    /// Boundary condition: an entry whose age equals `ttl` is stale. Only an
    /// age strictly below `ttl` is fresh.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        self.age(now) < ttl
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn entry_at(now: DateTime<Utc>) -> CacheEntry {
        CacheEntry::new("-23.55,-46.63".to_string(), WeatherReading::new(28.0), now)
    }

    #[test]
    fn test_entry_creation() {
        let now = Utc::now();
        let entry = entry_at(now);

        assert_eq!(entry.key, "-23.55,-46.63");
        assert_eq!(entry.data.temperature, 28.0);
        assert_eq!(entry.timestamp, now);
    }

    #[test]
    fn test_fresh_within_ttl() {
        let now = Utc::now();
        let entry = entry_at(now);

        assert!(entry.is_fresh(now, Duration::hours(1)));
        assert!(entry.is_fresh(now + Duration::minutes(59), Duration::hours(1)));
    }

    #[test]
    fn test_stale_after_ttl() {
        let now = Utc::now();
        let entry = entry_at(now);

        assert!(!entry.is_fresh(now + Duration::minutes(61), Duration::hours(1)));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = Utc::now();
        let entry = entry_at(now);
        let ttl = Duration::milliseconds(3_600_000);

        assert!(entry.is_fresh(now + ttl - Duration::milliseconds(1), ttl));
        assert!(!entry.is_fresh(now + ttl, ttl), "Entry should be stale at boundary");
    }

    #[test]
    fn test_age() {
        let now = Utc::now();
        let entry = entry_at(now);
        assert_eq!(entry.age(now + Duration::seconds(90)), Duration::seconds(90));
    }
}
