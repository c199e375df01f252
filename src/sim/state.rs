//! Session state and core simulation types
//!
//! Everything one run needs lives in [`GameState`]; the host owns it and drives it
//! through [`super::tick`] (per frame) and [`GameState::elapse`] (wall-clock time).

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::craft::Craft;
use super::obstacles::ObstacleField;
use crate::config::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended by a collision; waiting for restart
    GameOver,
}

/// Things that happened since the host last drained the queue
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum GameEvent {
    Spawned { id: u32, gap_center: f32 },
    Scored { id: u32, score: u32 },
    GameOver { score: u32 },
    Restarted { seed: u64 },
}

/// Renderer-facing view of one obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub id: u32,
    pub x: f32,
    pub gap_center: f32,
}

/// Everything the presentation layer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub score: u32,
    pub is_over: bool,
    pub craft_y: f32,
    pub craft_vy: f32,
    pub obstacles: Vec<ObstacleView>,
}

/// Complete session state (deterministic given seed, inputs, and elapsed times)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Gap-center RNG, reseeded on restart
    pub rng: Pcg32,
    pub config: GameConfig,
    pub phase: GamePhase,
    pub score: u32,
    /// Simulation ticks since the run started
    pub time_ticks: u64,
    pub craft: Craft,
    pub field: ObstacleField,
    /// Pending events (drained by the host)
    pub events: Vec<GameEvent>,
    /// Completed runs in this session
    pub runs: u32,
}

impl GameState {
    /// Create a new session with the given config and seed
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            config,
            phase: GamePhase::Playing,
            score: 0,
            time_ticks: 0,
            craft: Craft::new(),
            field: ObstacleField::new(config.spawn_interval_ms),
            events: Vec::new(),
            runs: 0,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Forward a jump to the craft; ignored once the run is over
    pub fn jump(&mut self) {
        if self.phase == GamePhase::Playing {
            self.craft.jump(self.config.jump_force);
        }
    }

    /// Feed wall-clock time to the spawn timer; returns true if an obstacle spawned.
    ///
    /// Spawns only append, so this may land before or after a tick.
    pub fn elapse(&mut self, elapsed_ms: f64) -> bool {
        if self.phase != GamePhase::Playing || !self.field.timer.advance(elapsed_ms) {
            return false;
        }

        let obstacle = *self.field.spawn(&mut self.rng);
        self.events.push(GameEvent::Spawned {
            id: obstacle.id,
            gap_center: obstacle.gap_center,
        });
        true
    }

    /// Mark the run as lost
    pub fn end_run(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.runs += 1;
        self.events.push(GameEvent::GameOver { score: self.score });
        log::info!(
            "Game over: score {} after {} ticks",
            self.score,
            self.time_ticks
        );
    }

    /// Start a new run from `GameOver`. Returns false (and does nothing) mid-run.
    pub fn restart(&mut self, seed: u64) -> bool {
        if self.phase != GamePhase::GameOver {
            log::warn!("Ignoring restart while playing");
            return false;
        }
        self.reset(seed);
        true
    }

    /// Unconditionally reset to a fresh run with a new seed.
    ///
    /// Cancels the pending spawn before the new run's timer starts.
    pub fn reset(&mut self, seed: u64) {
        self.field.clear();
        self.craft.reset();
        self.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);
        self.score = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::Restarted { seed });
        log::info!("Run started with seed: {}", seed);
    }

    /// Seed for the next run, derived from the current one
    pub fn next_seed(&self) -> u64 {
        self.seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407)
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.time_ticks,
            score: self.score,
            is_over: self.is_over(),
            craft_y: self.craft.y,
            craft_vy: self.craft.vy,
            obstacles: self
                .field
                .iter()
                .map(|o| ObstacleView {
                    id: o.id,
                    x: o.x,
                    gap_center: o.gap_center,
                })
                .collect(),
        }
    }
}
