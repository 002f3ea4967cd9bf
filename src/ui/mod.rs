//! HUD Components
//!
//! Screen-space overlays drawn on top of the playfield every frame. These
//! are stateless: all inputs (inventory, level, viewport) are passed to
//! `render`, and the layout is recomputed from them each call.
//!
//! # Available Components
//!
//! - [`IngameHud`] - Key count and current level, top-right corner

pub mod ingame_hud;

pub use ingame_hud::{IngameHud, Viewport};
