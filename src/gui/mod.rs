//! Screen-Space GUI System
//!
//! Full-screen views and menus that render at fixed screen positions,
//! independent of the playfield.
//!
//! # Available Components
//!
//! - [`MainMenu`] - Play / Settings / Quit
//! - [`SettingsScreen`] - Toggle and slider fields bound to the [`Config`]
//!
//! [`Config`]: crate::config::Config
//!
//! # Example Usage
//!
//! ```ignore
//! let mut settings = SettingsScreen::new(&SettingsScreen::default_fields(), (640, 480));
//!
//! // Handle input
//! settings.on_direction(Direction::Down, &mut config);
//!
//! // Render
//! settings.render(&mut canvas, &config)?;
//! ```

pub mod main_menu;
pub mod menu;
pub mod settings_field;
pub mod settings_screen;

pub use main_menu::{MainMenu, MainMenuOption};
pub use menu::Menu;
pub use settings_screen::SettingsScreen;
