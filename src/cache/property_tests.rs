//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check key derivation and TTL behavior of the store.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

use crate::cache::{CacheStore, WEATHER_TTL_MS};
use crate::models::{Coordinate, WeatherReading};

// == Strategies ==
/// Finite axis values, including out-of-range ones and both signed zeros.
fn axis_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => -1000.0f64..1000.0,
        1 => Just(0.0f64),
        1 => Just(-0.0f64),
    ]
}

fn coordinate_strategy() -> impl Strategy<Value = Coordinate> {
    (axis_strategy(), axis_strategy()).prop_map(|(lat, lon)| Coordinate::new(lat, lon))
}

fn flip_zero(value: f64) -> f64 {
    if value == 0.0 {
        -value
    } else {
        value
    }
}

fn temperature_strategy() -> impl Strategy<Value = f64> {
    -90.0f64..60.0
}

fn ttl() -> Duration {
    Duration::milliseconds(WEATHER_TTL_MS)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Equal coordinates always derive the same key, including when a zero
    // axis carries the opposite sign.
    #[test]
    fn prop_key_is_deterministic(coord in coordinate_strategy()) {
        let copy = Coordinate::new(coord.latitude, coord.longitude);
        prop_assert_eq!(coord.cache_key(), copy.cache_key());

        let flipped = Coordinate::new(flip_zero(coord.latitude), flip_zero(coord.longitude));
        prop_assert_eq!(flipped, coord);
        prop_assert_eq!(flipped.cache_key(), coord.cache_key());
    }

    // Keys of distinct coordinates differ.
    #[test]
    fn prop_distinct_coordinates_distinct_keys(
        a in coordinate_strategy(),
        b in coordinate_strategy(),
    ) {
        prop_assume!(a != b);
        prop_assert_ne!(a.cache_key(), b.cache_key());
    }

    // A reading is served for any read strictly inside the TTL window and
    // for none at or beyond it.
    #[test]
    fn prop_fresh_only_within_ttl(
        coord in coordinate_strategy(),
        temperature in temperature_strategy(),
        offset_ms in 0i64..(2 * WEATHER_TTL_MS),
    ) {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let mut store = CacheStore::new(ttl());
        store.insert(coord.cache_key(), WeatherReading::new(temperature), start);

        let read = store.get(&coord.cache_key(), start + Duration::milliseconds(offset_ms));

        if offset_ms < WEATHER_TTL_MS {
            prop_assert_eq!(read, Some(WeatherReading::new(temperature)));
        } else {
            prop_assert_eq!(read, None);
        }
    }

    // The most recent write for a key is the live one.
    #[test]
    fn prop_last_write_wins(
        coord in coordinate_strategy(),
        temps in prop::collection::vec(temperature_strategy(), 1..10),
    ) {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let mut store = CacheStore::new(ttl());
        let mut now = start;

        for temperature in &temps {
            store.insert(coord.cache_key(), WeatherReading::new(*temperature), now);
            now += Duration::minutes(1);
        }

        let last = *temps.last().unwrap();
        prop_assert_eq!(store.get(&coord.cache_key(), now), Some(WeatherReading::new(last)));
        prop_assert_eq!(store.stats().total_entries, 1);
    }

    // Entries are never removed, so the store holds one entry per distinct key
    // written, however old.
    #[test]
    fn prop_entries_never_removed(
        coords in prop::collection::vec(coordinate_strategy(), 1..20),
        read_offset_hours in 0i64..48,
    ) {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let mut store = CacheStore::new(ttl());
        let mut keys = std::collections::HashSet::new();

        for coord in &coords {
            store.insert(coord.cache_key(), WeatherReading::new(20.0), start);
            keys.insert(coord.cache_key());
        }
        for coord in &coords {
            store.get(&coord.cache_key(), start + Duration::hours(read_offset_hours));
        }

        prop_assert_eq!(store.stats().total_entries, keys.len());
    }

    // Hits plus misses equals the number of reads.
    #[test]
    fn prop_statistics_accuracy(
        coords in prop::collection::vec(coordinate_strategy(), 1..20),
        reads in prop::collection::vec((0usize..20, 0i64..(2 * WEATHER_TTL_MS)), 1..40),
    ) {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let mut store = CacheStore::new(ttl());
        for coord in &coords {
            store.insert(coord.cache_key(), WeatherReading::new(15.0), start);
        }

        let mut expected_hits = 0u64;
        let mut expected_misses = 0u64;
        for (index, offset_ms) in &reads {
            let key = match coords.get(*index) {
                Some(coord) => coord.cache_key(),
                None => "missing".to_string(),
            };
            match store.get(&key, start + Duration::milliseconds(*offset_ms)) {
                Some(_) => expected_hits += 1,
                None => expected_misses += 1,
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.hits + stats.misses, reads.len() as u64);
    }
}
