//! Runtime settings.
//!
//! Settings are layered, later sources winning:
//!
//! 1. Built-in defaults ([`Settings::default`])
//! 2. An optional TOML file passed with `--config`
//! 3. `SORTSCOPE_*` environment variables (e.g. `SORTSCOPE_ARRAY_SIZE=80`)
//! 4. Command-line flags ([`Overrides`])
//!
//! ```toml
//! array_size = 50
//! min_value = 0
//! max_value = 100
//! tick_rate = 60
//! algorithm = "merge"
//! direction = "descending"
//! seed = 7
//! log_file = "sortscope.log"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::sort::{Algorithm, Direction};

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "SORTSCOPE";

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of bars.
    pub array_size: usize,
    /// Smallest value generated on reset (inclusive).
    pub min_value: i64,
    /// Largest value generated on reset (inclusive).
    pub max_value: i64,
    /// Ticks per second; one sort step is taken per tick.
    pub tick_rate: u32,
    /// Algorithm selected at startup.
    pub algorithm: Algorithm,
    /// Direction selected at startup.
    pub direction: Direction,
    /// Seed for array generation. Random when unset.
    pub seed: Option<u64>,
    /// Where to write logs. Logging is off when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            array_size: 50,
            min_value: 0,
            max_value: 100,
            tick_rate: 60,
            algorithm: Algorithm::Bubble,
            direction: Direction::Ascending,
            seed: None,
            log_file: None,
        }
    }
}

/// Values given on the command line. `None` leaves the setting alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub array_size: Option<usize>,
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
    pub tick_rate: Option<u32>,
    pub algorithm: Option<Algorithm>,
    pub direction: Option<Direction>,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Load settings from an optional file and the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    /// Load settings from an optional file and the given environment source.
    pub fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        builder = builder.add_source(env.try_parsing(true));

        let config = builder.build().with_context(|| match path {
            Some(path) => format!("Failed to read config file {}", path.display()),
            None => "Failed to read configuration".to_string(),
        })?;
        let settings: Settings = config.try_deserialize().context("Invalid configuration")?;
        Ok(settings)
    }

    /// Apply command-line overrides on top of the loaded settings.
    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(size) = overrides.array_size {
            self.array_size = size;
        }
        if let Some(min) = overrides.min_value {
            self.min_value = min;
        }
        if let Some(max) = overrides.max_value {
            self.max_value = max;
        }
        if let Some(rate) = overrides.tick_rate {
            self.tick_rate = rate;
        }
        if let Some(algorithm) = overrides.algorithm {
            self.algorithm = algorithm;
        }
        if let Some(direction) = overrides.direction {
            self.direction = direction;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if overrides.log_file.is_some() {
            self.log_file = overrides.log_file;
        }
        self
    }

    /// Reject settings the array model cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.array_size == 0 {
            bail!("array_size must be at least 1");
        }
        if self.min_value > self.max_value {
            bail!(
                "min_value ({}) must not exceed max_value ({})",
                self.min_value,
                self.max_value
            );
        }
        if !(1..=1000).contains(&self.tick_rate) {
            bail!("tick_rate must be between 1 and 1000, got {}", self.tick_rate);
        }
        Ok(())
    }

    /// Time between ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }
}
