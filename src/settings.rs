//! # Settings Module
//!
//! ## Purpose
//! JSON-backed configuration of the simulator front end. Everything has a default,
//! so a missing settings file is not an error.
//!
//! ## Configuration Format
//! ```json
//! {
//!   "seed": 42,
//!   "registry_file": "my_metals.json",
//!   "start_level": 3,
//!   "log_level": "debug"
//! }
//! ```
//!
//! | Key | Meaning | Default |
//! |-----|---------|---------|
//! | `seed` | seed of the generator behind the unknown species, `null` = seeded from the OS | `null` |
//! | `registry_file` | JSON array of species replacing the standard table | `null` |
//! | `start_level` | exercise level (0..=6) of the first problem | 0 |
//! | `log_level` | `off`, `error`, `warn`, `info`, `debug`, `trace` | `info` |
//!
//! ## Usage Pattern
//! ```rust, ignore
//! use NernstKit::settings::Settings;
//!
//! let settings = Settings::load(Settings::DEFAULT_FILE)?;
//! let mut registry = settings.build_registry()?;
//! let mut rng = settings.build_rng();
//! ```

use crate::Electrochemistry::electrochem_errors::ElectrochemResult;
use crate::Electrochemistry::exercises::ExerciseLevel;
use crate::Electrochemistry::metal_registry::MetalRegistry;
use log::{LevelFilter, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub seed: Option<u64>,
    pub registry_file: Option<String>,
    pub start_level: u8,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            registry_file: None,
            start_level: 0,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    pub const DEFAULT_FILE: &'static str = "nernst_settings.json";

    /// Reads the settings file; returns the defaults when the file does not exist.
    ///
    /// # Returns
    /// * `Ok(Settings)` - loaded or default settings
    /// * `Err(ElectrochemError)` - the file exists but cannot be read or parsed
    pub fn load<P: AsRef<Path>>(path: P) -> ElectrochemResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No settings file at '{}', using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        info!("Settings loaded from '{}'", path.display());
        Ok(settings)
    }

    /// writes the settings as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ElectrochemResult<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn start_level(&self) -> ElectrochemResult<ExerciseLevel> {
        ExerciseLevel::try_from(self.start_level)
    }

    /// unparsable values fall back to `Info`
    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or_else(|_| {
            warn!("Unknown log level '{}', using info", self.log_level);
            LevelFilter::Info
        })
    }

    /// Sets the global `log` filter to the configured level. An unknown level is
    /// reported through the logger already running at its start-up level.
    pub fn apply_log_level(&self) -> LevelFilter {
        let level = self.log_level_filter();
        log::set_max_level(level);
        level
    }

    /// the configured registry file, or the standard table
    pub fn build_registry(&self) -> ElectrochemResult<MetalRegistry> {
        match &self.registry_file {
            Some(file) => MetalRegistry::from_file(file),
            None => Ok(MetalRegistry::standard()),
        }
    }

    pub fn build_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
