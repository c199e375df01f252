//! Player craft: vertical-only motion under gravity

use serde::{Deserialize, Serialize};

use crate::consts::{CEILING, FLOOR};

/// The player's craft
///
/// Horizontal position is fixed at [`crate::consts::CRAFT_X`]; only `y` changes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Craft {
    /// Signed offset from the center line
    pub y: f32,
    /// Vertical velocity (units per tick)
    pub vy: f32,
}

impl Craft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Integrate one tick of gravity, clamping to the playfield.
    ///
    /// Touching the floor or ceiling kills all vertical velocity.
    pub fn tick(&mut self, gravity: f32) {
        self.vy += gravity;
        self.y += self.vy;

        if !(FLOOR..=CEILING).contains(&self.y) {
            self.y = self.y.clamp(FLOOR, CEILING);
            self.vy = 0.0;
        }

        debug_assert!((FLOOR..=CEILING).contains(&self.y));
    }

    /// Replace current velocity with the jump impulse (no stacking)
    pub fn jump(&mut self, jump_force: f32) {
        self.vy = jump_force;
    }

    pub fn position(&self) -> f32 {
        self.y
    }

    pub fn set_position(&mut self, y: f32) {
        self.y = y;
    }

    /// Back to center, at rest
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
