//! Per-tick simulation step
//!
//! One call advances the session by exactly one tick. Order within a tick:
//! scroll obstacles, score crossings, integrate the craft, then test collisions.

use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::{COLLISION_RADIUS, CRAFT_X};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump (space/tap while playing)
    pub jump: bool,
    /// Start a new run (space/tap after game over)
    pub restart: bool,
    /// Idle/demo mode - autopilot flies the craft
    pub idle_mode: bool,
}

/// Vertical margin below the target before autopilot jumps
const AUTOPILOT_MARGIN: f32 = 0.5;

/// Advance the game state by one fixed tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.restart && state.phase == GamePhase::GameOver {
        let seed = state.next_seed();
        state.restart(seed);
    }

    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    if input.jump || (input.idle_mode && autopilot_wants_jump(state)) {
        state.jump();
    }

    state.field.advance(state.config.obstacle_speed);

    // Per-obstacle flag so two crossings in one tick both count
    for obstacle in &mut state.field.obstacles {
        if !obstacle.counted && obstacle.crossed(CRAFT_X) {
            obstacle.counted = true;
            state.score += 1;
            state.events.push(GameEvent::Scored {
                id: obstacle.id,
                score: state.score,
            });
            log::debug!("Passed obstacle {} (score {})", obstacle.id, state.score);
        }
    }

    state.craft.tick(state.config.gravity);

    if collides(state) {
        state.end_run();
    }
}

/// Craft is outside the gap of any obstacle inside the collision band
pub fn collides(state: &GameState) -> bool {
    let craft_y = state.craft.position();
    let half_gap = state.config.half_gap();

    state
        .field
        .iter()
        .filter(|o| (o.x - CRAFT_X).abs() < COLLISION_RADIUS)
        .any(|o| (craft_y - o.gap_center).abs() > half_gap)
}

/// Jump when falling below the gap of the next obstacle that can still hit us
fn autopilot_wants_jump(state: &GameState) -> bool {
    let target = state
        .field
        .iter()
        .find(|o| o.x > CRAFT_X - COLLISION_RADIUS)
        .map(|o| o.gap_center)
        .unwrap_or(0.0);

    state.craft.vy <= 0.0 && state.craft.y < target - AUTOPILOT_MARGIN
}
