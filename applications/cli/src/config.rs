/// Host configuration
use crate::error::{CliError, Result};
use hearth_playback::PlaybackConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_catalog")]
    pub catalog: CatalogSettings,

    #[serde(default = "default_playback")]
    pub playback: PlaybackSettings,

    #[serde(default = "default_simulation")]
    pub simulation: SimulationSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    /// Directory holding `hearth.redb`
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// JSON array of episodes
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaybackSettings {
    #[serde(default = "default_volume")]
    pub volume: f32,

    #[serde(default = "default_rate")]
    pub rate: f32,

    #[serde(default = "default_skip_interval_seconds")]
    pub skip_interval_seconds: f64,

    /// Arm the sleep timer at start
    #[serde(default)]
    pub sleep_minutes: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimulationSettings {
    /// Simulated seconds per wall-clock second
    #[serde(default = "default_speed")]
    pub speed: f64,

    /// Device clock period
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// Used when the catalog has no `durationSeconds`
    #[serde(default = "default_episode_seconds")]
    pub default_episode_seconds: f64,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// `path` defaults to `hearth.toml` in the working directory; a missing
    /// file is not an error. `HEARTH_*` variables override the file, with
    /// `__` between section and key (`HEARTH_PLAYBACK__VOLUME=0.5`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        let config_path = path.map_or_else(|| PathBuf::from("hearth.toml"), Path::to_path_buf);
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        } else if path.is_some() {
            return Err(CliError::Config(format!(
                "config file not found: {}",
                config_path.display()
            )));
        }

        settings = settings.add_source(
            config::Environment::with_prefix("HEARTH")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.playback.volume) {
            return Err(CliError::Config(format!(
                "playback.volume must be within 0.0-1.0, got {}",
                self.playback.volume
            )));
        }

        if !(self.playback.rate.is_finite() && self.playback.rate > 0.0) {
            return Err(CliError::Config(format!(
                "playback.rate must be positive, got {}",
                self.playback.rate
            )));
        }

        let skip = self.playback.skip_interval_seconds;
        if !(skip.is_finite() && skip > 0.0) {
            return Err(CliError::Config(
                "playback.skip_interval_seconds must be positive".to_string(),
            ));
        }

        if !(self.simulation.speed.is_finite() && self.simulation.speed > 0.0) {
            return Err(CliError::Config("simulation.speed must be positive".to_string()));
        }

        if self.simulation.tick_ms == 0 {
            return Err(CliError::Config("simulation.tick_ms must be non-zero".to_string()));
        }

        Ok(())
    }

    pub fn playback_config(&self) -> PlaybackConfig {
        PlaybackConfig {
            volume: self.playback.volume,
            playback_rate: self.playback.rate,
            skip_interval_seconds: self.playback.skip_interval_seconds,
        }
    }

    pub fn database_path(&self) -> PathBuf {
        self.storage.data_dir.join("hearth.redb")
    }
}

// Default values
fn default_storage() -> StorageSettings {
    StorageSettings {
        data_dir: default_data_dir(),
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_catalog() -> CatalogSettings {
    CatalogSettings {
        path: default_catalog_path(),
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("./catalog.json")
}

fn default_playback() -> PlaybackSettings {
    PlaybackSettings {
        volume: default_volume(),
        rate: default_rate(),
        skip_interval_seconds: default_skip_interval_seconds(),
        sleep_minutes: None,
    }
}

fn default_volume() -> f32 {
    1.0
}

fn default_rate() -> f32 {
    1.0
}

fn default_skip_interval_seconds() -> f64 {
    hearth_playback::types::DEFAULT_SKIP_INTERVAL_SECONDS
}

fn default_simulation() -> SimulationSettings {
    SimulationSettings {
        speed: default_speed(),
        tick_ms: default_tick_ms(),
        default_episode_seconds: default_episode_seconds(),
    }
}

fn default_speed() -> f64 {
    1.0
}

fn default_tick_ms() -> u64 {
    250
}

fn default_episode_seconds() -> f64 {
    600.0
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: default_storage(),
            catalog: default_catalog(),
            playback: default_playback(),
            simulation: default_simulation(),
        }
    }
}
