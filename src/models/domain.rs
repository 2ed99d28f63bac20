//! Values exchanged between the resolver, the fetcher and the cache.

use std::fmt;

/// A latitude/longitude pair as reported by the geocoding service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    // == Constructor ==
    /// Creates a coordinate from raw values; no range check is made.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    // == Cache Key ==
    /// Cache key for this coordinate, `"lat,lon"`.
    ///
    /// Signed zero is written as `0`, so coordinates that compare equal
    /// always share a key.
    pub fn cache_key(&self) -> String {
        format!("{},{}", unsigned_zero(self.latitude), unsigned_zero(self.longitude))
    }
}

fn unsigned_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Current temperature in degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherReading {
    pub temperature: f64,
}

impl WeatherReading {
    /// Creates a reading of `temperature` degrees Celsius.
    pub fn new(temperature: f64) -> Self {
        Self { temperature }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_format() {
        let coord = Coordinate::new(-23.55, -46.63);
        assert_eq!(coord.cache_key(), "-23.55,-46.63");
    }

    #[test]
    fn test_cache_key_whole_numbers() {
        let coord = Coordinate::new(10.0, 20.5);
        assert_eq!(coord.cache_key(), "10,20.5");
    }

    #[test]
    fn test_equal_values_share_key() {
        let a = Coordinate::new(-8.05, -34.9);
        let b = Coordinate::new(-8.05, -34.9);
        assert_eq!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn test_negative_zero_shares_key() {
        let negative = Coordinate::new(-0.0, 10.0);
        let positive = Coordinate::new(0.0, 10.0);

        assert_eq!(negative, positive);
        assert_eq!(negative.cache_key(), "0,10");
        assert_eq!(negative.cache_key(), positive.cache_key());
        assert_eq!(Coordinate::new(5.5, -0.0).cache_key(), "5.5,0");
    }

    #[test]
    fn test_display() {
        assert_eq!(Coordinate::new(1.5, -2.0).to_string(), "(1.5, -2)");
    }
}
