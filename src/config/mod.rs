//! Game configuration
//!
//! Holds the player-adjustable options (music, fullscreen, volume) and
//! persists them between runs.
//!
//! # Architecture
//!
//! - `types`: the `Config` struct, the bounded `Volume` value and the typed
//!   binding keys used by settings fields
//! - `store`: `ConfigStore` for loading/saving the settings file
//!
//! The config is a plain value owned by the main loop. Components that read
//! or mutate it receive `&Config` / `&mut Config` for the duration of a call.
//!
//! # Example Usage
//!
//! ```ignore
//! let store = ConfigStore::new(ConfigStore::default_path());
//! let mut config = store.load_or_default();
//!
//! config.set_flag(ToggleKey::Fullscreen, true);
//! store.save(&config)?;
//! ```

pub mod store;
pub mod types;

pub use store::ConfigStore;
pub use types::{Config, SliderKey, ToggleKey, Volume};
