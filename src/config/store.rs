//! Settings file persistence
//!
//! `ConfigStore` reads and writes the config as pretty JSON. The file is
//! human-editable; missing fields fall back to defaults and out-of-range
//! volumes are clamped on load.

use super::types::Config;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Current settings file version
pub const CURRENT_CONFIG_VERSION: u32 = 1;

const APP_DIR: &str = "key_dungeon";
const FILE_NAME: &str = "settings.json";

/// The root settings file structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    /// RFC 3339 local time of the last save
    #[serde(default)]
    pub saved_at: Option<String>,
    #[serde(default)]
    pub config: Config,
}

/// Error types for settings load/save
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    SerializationError(serde_json::Error),
    InvalidVersion(u32),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::SerializationError(e) => write!(f, "Serialization error: {}", e),
            ConfigError::InvalidVersion(v) => write!(f, "Unsupported settings version: {}", v),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::SerializationError(err)
    }
}

pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        ConfigStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// `<config dir>/key_dungeon/settings.json`, or `./settings.json` when
    /// the platform has no config directory
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR).join(FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        let json = fs::read_to_string(&self.path)?;
        let file: ConfigFile = serde_json::from_str(&json)?;

        if file.version > CURRENT_CONFIG_VERSION {
            return Err(ConfigError::InvalidVersion(file.version));
        }

        Ok(file.config)
    }

    /// Loads the settings file, falling back to defaults if it is missing
    /// or unreadable
    pub fn load_or_default(&self) -> Config {
        match self.load() {
            Ok(config) => {
                log::info!("Loaded settings from {}", self.path.display());
                config
            }
            Err(ConfigError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings file at {}, using defaults", self.path.display());
                Config::default()
            }
            Err(e) => {
                log::warn!("Ignoring settings file {}: {}", self.path.display(), e);
                Config::default()
            }
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let file = ConfigFile {
            version: CURRENT_CONFIG_VERSION,
            saved_at: Some(chrono::Local::now().to_rfc3339()),
            config: config.clone(),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&file)?)?;

        log::info!("Settings saved to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Volume;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("key_dungeon_test_{}_{}", std::process::id(), name))
            .join(FILE_NAME)
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("roundtrip");
        let store = ConfigStore::new(&path);

        let config = Config {
            is_music_on: false,
            is_fullscreen: true,
            music_volume: Volume::new(8),
        };
        store.save(&config).unwrap();

        assert_eq!(store.load().unwrap(), config);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let store = ConfigStore::new(scratch_path("missing"));
        assert!(matches!(store.load(), Err(ConfigError::IoError(_))));
        assert_eq!(store.load_or_default(), Config::default());
    }

    #[test]
    fn test_newer_version_rejected() {
        let path = scratch_path("version");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"version": 99, "config": {}}"#).unwrap();

        let store = ConfigStore::new(&path);
        assert!(matches!(store.load(), Err(ConfigError::InvalidVersion(99))));
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_out_of_range_volume_clamped_on_load() {
        let path = scratch_path("clamp");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"version": 1, "config": {"music_volume": 42}}"#).unwrap();

        let config = ConfigStore::new(&path).load().unwrap();
        assert_eq!(config.music_volume.get(), Volume::MAX);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_corrupted_file_falls_back_to_default() {
        let path = scratch_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        let store = ConfigStore::new(&path);
        assert!(matches!(store.load(), Err(ConfigError::SerializationError(_))));
        assert_eq!(store.load_or_default(), Config::default());
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
