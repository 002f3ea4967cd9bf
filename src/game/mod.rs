// Game module - the playable room
//
// This module contains:
// - level.rs: deterministic per-level key layout and the exit door
// - world.rs: GameWorld, which moves the player, collects keys and draws
//   the room with the HUD on top

pub mod level;
pub mod world;

pub use world::GameWorld;
