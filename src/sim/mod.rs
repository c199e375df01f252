//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod craft;
pub mod obstacles;
pub mod state;
pub mod stepper;
pub mod tick;

pub use craft::Craft;
pub use obstacles::{Obstacle, ObstacleField, SpawnTimer};
pub use state::{GameEvent, GamePhase, GameState, ObstacleView, Snapshot};
pub use stepper::FixedStep;
pub use tick::{TickInput, collides, tick};
