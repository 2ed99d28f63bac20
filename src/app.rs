//! Interactive Driver
//!
//! One prompt, one lookup, one line of output.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use crate::cache::{CacheStats, Clock, SystemClock, WeatherCache};
use crate::client::{build_http_client, CoordinateResolver, WeatherFetcher, WeatherSource};
use crate::config::Config;
use crate::error::{ClimaError, Result};
use crate::models::{Coordinate, WeatherReading};

/// Prompt shown before reading the city name
pub const PROMPT: &str = "Digite o nome da cidade: ";

// == Weather Lookup ==
/// Weather retrieval with or without the one-hour cache.
#[derive(Debug)]
pub enum WeatherLookup<S, C = SystemClock> {
    Direct(S),
    Cached(WeatherCache<S, C>),
}

impl<S: WeatherSource, C: Clock> WeatherLookup<S, C> {
    /// Current reading for `coord`, through the cache when enabled.
    pub async fn current(&mut self, coord: Coordinate) -> Result<WeatherReading> {
        match self {
            WeatherLookup::Direct(source) => source.fetch_weather(coord).await,
            WeatherLookup::Cached(cache) => cache.get_weather(coord).await,
        }
    }

    /// Cache statistics, if caching is enabled.
    pub fn stats(&self) -> Option<CacheStats> {
        match self {
            WeatherLookup::Direct(_) => None,
            WeatherLookup::Cached(cache) => Some(cache.stats()),
        }
    }
}

// == App ==
/// Resolver plus weather lookup, driven once per process.
#[derive(Debug)]
pub struct App<S = WeatherFetcher, C = SystemClock> {
    resolver: CoordinateResolver,
    weather: WeatherLookup<S, C>,
}

impl App {
    /// Builds the HTTP clients and optional cache from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = build_http_client()?;
        let resolver = CoordinateResolver::from_config(client.clone(), config);
        let fetcher = WeatherFetcher::from_config(client, config);

        let weather = if config.cache_enabled {
            WeatherLookup::Cached(WeatherCache::new(fetcher))
        } else {
            WeatherLookup::Direct(fetcher)
        };

        Ok(Self::new(resolver, weather))
    }
}

impl<S: WeatherSource, C: Clock> App<S, C> {
    // == Constructor ==
    /// Wires an already built resolver and weather lookup together.
    pub fn new(resolver: CoordinateResolver, weather: WeatherLookup<S, C>) -> Self {
        Self { resolver, weather }
    }

    // == Lookup ==
    /// Resolves `city` and returns its current reading.
    ///
    /// The weather lookup only starts after resolution succeeded.
    pub async fn lookup(&mut self, city: &str) -> Result<WeatherReading> {
        let coord = self.resolver.resolve(city).await?;
        self.weather.current(coord).await
    }

    // == Run ==
    /// Prompts on `out`, reads one city from `input`, and reports the result.
    ///
    /// Lookup failures are written to `err` and swallowed. Only I/O errors on
    /// the given streams are returned.
    pub async fn run<R, W, E>(&mut self, mut input: R, mut out: W, mut err: E) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;
        let city = line.trim_end_matches(['\r', '\n']);

        match self.lookup(city).await {
            Ok(reading) => {
                info!(city, temperature = reading.temperature, "Lookup complete");
                writeln!(out, "{}", format_success(city, &reading))?;
            }
            Err(e) => {
                warn!(city, kind = ?e.kind(), "Lookup failed: {}", e);
                writeln!(err, "{}", format_failure(&e))?;
            }
        }

        if let Some(stats) = self.weather.stats() {
            debug!(
                hits = stats.hits,
                misses = stats.misses,
                entries = stats.total_entries,
                hit_rate = stats.hit_rate(),
                "Cache stats"
            );
        }
        Ok(())
    }

    // == Accessors ==
    /// The weather lookup, for inspecting cache state.
    pub fn weather(&self) -> &WeatherLookup<S, C> {
        &self.weather
    }
}

/// Line printed on success.
pub fn format_success(city: &str, reading: &WeatherReading) -> String {
    format!(
        "🌤️ Temperatura atual em {}: {}°C",
        city, reading.temperature
    )
}

/// Line printed when the lookup fails.
pub fn format_failure(error: &ClimaError) -> String {
    format!("Erro ao buscar dados: {}", error)
}
