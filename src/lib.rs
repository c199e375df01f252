//! Astro Hop - A side-scrolling asteroid-gap arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (craft, obstacle field, session state)
//! - `geometry`: Procedural asteroid meshes
//! - `config`: Game tuning values, loaded from JSON
//! - `highscores`: Best-score leaderboard

pub mod config;
pub mod geometry;
pub mod highscores;
pub mod sim;
#[cfg(target_arch = "wasm32")]
mod storage;

pub use config::{ConfigError, GameConfig};
pub use highscores::HighScores;

/// Arena layout constants
///
/// Gameplay tunables live in [`GameConfig`]; these describe the fixed playfield.
pub mod consts {
    /// Fixed simulation timestep (60 Hz, the rate the per-tick tunables assume)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta fed to the stepper (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Craft never moves horizontally
    pub const CRAFT_X: f32 = -4.0;
    /// Vertical bounds of the playfield
    pub const CEILING: f32 = 2.5;
    pub const FLOOR: f32 = -2.5;

    /// Obstacles enter at the right edge
    pub const SPAWN_X: f32 = 5.0;
    /// Obstacles left of this are evicted
    pub const EVICTION_X: f32 = -6.0;
    /// Gap centers are drawn uniformly from this range
    pub const GAP_CENTER_MIN: f32 = -1.0;
    pub const GAP_CENTER_MAX: f32 = 1.0;
    /// Horizontal half-width of the collision band around the craft
    pub const COLLISION_RADIUS: f32 = 0.5;
    /// Barrier centers sit this far beyond the gap edge
    pub const BARRIER_OFFSET: f32 = 1.0;
}
