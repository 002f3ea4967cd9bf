//! Configuration data types
//!
//! Uses Serde so the same structs are written to and read from the settings
//! file without a separate on-disk representation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An integer setting clamped to `[Volume::MIN, Volume::MAX]`
///
/// Every way of building a `Volume` (constructor, deserialization, stepping)
/// clamps, so an out-of-range value can never be observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "f64", into = "u8")]
pub struct Volume(u8);

impl Volume {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: u8) -> Self {
        Volume(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// One step up, saturating at `MAX`
    pub fn stepped_up(self) -> Self {
        if self.0 < Self::MAX {
            Volume(self.0 + 1)
        } else {
            self
        }
    }

    /// One step down, saturating at `MIN`
    pub fn stepped_down(self) -> Self {
        if self.0 > Self::MIN {
            Volume(self.0 - 1)
        } else {
            self
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Volume(5)
    }
}

/// Any JSON number is accepted: fractions round, out-of-range values clamp
/// and NaN falls back to the default
impl From<f64> for Volume {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            return Volume::default();
        }
        Volume(value.round().clamp(Self::MIN as f64, Self::MAX as f64) as u8)
    }
}

impl From<Volume> for u8 {
    fn from(volume: Volume) -> Self {
        volume.0
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Boolean options a toggle field can bind to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleKey {
    MusicOn,
    Fullscreen,
}

/// Bounded integer options a slider field can bind to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderKey {
    MusicVolume,
}

impl ToggleKey {
    /// Name of the attribute in the settings file
    pub fn key(self) -> &'static str {
        match self {
            ToggleKey::MusicOn => "is_music_on",
            ToggleKey::Fullscreen => "is_fullscreen",
        }
    }
}

impl SliderKey {
    pub fn key(self) -> &'static str {
        match self {
            SliderKey::MusicVolume => "music_volume",
        }
    }
}

/// Player-adjustable game options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub is_music_on: bool,
    pub is_fullscreen: bool,
    pub music_volume: Volume,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            is_music_on: true,
            is_fullscreen: false,
            music_volume: Volume::default(),
        }
    }
}

impl Config {
    pub fn flag(&self, key: ToggleKey) -> bool {
        match key {
            ToggleKey::MusicOn => self.is_music_on,
            ToggleKey::Fullscreen => self.is_fullscreen,
        }
    }

    pub fn set_flag(&mut self, key: ToggleKey, value: bool) {
        let slot = match key {
            ToggleKey::MusicOn => &mut self.is_music_on,
            ToggleKey::Fullscreen => &mut self.is_fullscreen,
        };
        if *slot != value {
            log::debug!("{} -> {}", key.key(), value);
        }
        *slot = value;
    }

    pub fn level(&self, key: SliderKey) -> Volume {
        match key {
            SliderKey::MusicVolume => self.music_volume,
        }
    }

    pub fn set_level(&mut self, key: SliderKey, value: Volume) {
        let slot = match key {
            SliderKey::MusicVolume => &mut self.music_volume,
        };
        if *slot != value {
            log::debug!("{} -> {}", key.key(), value);
        }
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_new_clamps() {
        assert_eq!(Volume::new(0).get(), 1);
        assert_eq!(Volume::new(7).get(), 7);
        assert_eq!(Volume::new(200).get(), 10);
    }

    #[test]
    fn test_volume_steps_saturate() {
        assert_eq!(Volume::new(10).stepped_up().get(), 10);
        assert_eq!(Volume::new(9).stepped_up().get(), 10);
        assert_eq!(Volume::new(1).stepped_down().get(), 1);
        assert_eq!(Volume::new(2).stepped_down().get(), 1);
    }

    #[test]
    fn test_volume_deserialize_clamps() {
        let low: Volume = serde_json::from_str("-4").unwrap();
        let high: Volume = serde_json::from_str("99").unwrap();
        assert_eq!(low.get(), 1);
        assert_eq!(high.get(), 10);
    }

    #[test]
    fn test_volume_deserialize_accepts_any_number() {
        let fraction: Volume = serde_json::from_str("5.0").unwrap();
        let rounded: Volume = serde_json::from_str("6.6").unwrap();
        let huge: Volume = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(fraction.get(), 5);
        assert_eq!(rounded.get(), 7);
        assert_eq!(huge.get(), 10);
    }

    #[test]
    fn test_hand_edited_volume_keeps_other_settings() {
        let config: Config =
            serde_json::from_str(r#"{"is_music_on": false, "is_fullscreen": true, "music_volume": 3.0}"#)
                .unwrap();
        assert!(!config.is_music_on);
        assert!(config.is_fullscreen);
        assert_eq!(config.music_volume.get(), 3);
    }

    #[test]
    fn test_config_missing_fields_use_defaults() {
        let config: Config = serde_json::from_str(r#"{"is_fullscreen": true}"#).unwrap();
        assert!(config.is_fullscreen);
        assert!(config.is_music_on);
        assert_eq!(config.music_volume, Volume::default());
    }

    #[test]
    fn test_typed_accessors() {
        let mut config = Config::default();

        config.set_flag(ToggleKey::Fullscreen, true);
        assert!(config.flag(ToggleKey::Fullscreen));
        assert!(config.is_fullscreen);

        config.set_level(SliderKey::MusicVolume, Volume::new(3));
        assert_eq!(config.level(SliderKey::MusicVolume).get(), 3);
        assert_eq!(config.music_volume.get(), 3);
    }
}
