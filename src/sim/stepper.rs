//! Fixed-timestep accumulator
//!
//! Turns variable frame deltas into a whole number of simulation ticks so movement
//! speed does not depend on the display refresh rate.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f32,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a frame delta (seconds) and return how many ticks to run now.
    ///
    /// Large deltas (tab in background) are clamped, and at most `MAX_SUBSTEPS`
    /// ticks run per frame to prevent a spiral of death.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let dt = frame_dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        substeps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_tick_per_sim_frame() {
        let mut step = FixedStep::new();
        let total: u32 = (0..60).map(|_| step.advance(SIM_DT)).sum();
        assert!((59..=60).contains(&total));
    }

    #[test]
    fn test_high_refresh_rate_same_tick_count() {
        let mut slow = FixedStep::new();
        let mut fast = FixedStep::new();
        let slow_ticks: u32 = (0..30).map(|_| slow.advance(1.0 / 30.0)).sum();
        let fast_ticks: u32 = (0..144).map(|_| fast.advance(1.0 / 144.0)).sum();
        assert!(slow_ticks.abs_diff(fast_ticks) <= 1);
        assert!(slow_ticks.abs_diff(60) <= 1);
    }

    #[test]
    fn test_clamps_huge_frames() {
        let mut step = FixedStep::new();
        // 5 seconds in the background still only yields MAX_FRAME_DT worth of ticks
        let ticks = step.advance(5.0);
        assert!(ticks <= MAX_SUBSTEPS);
        assert!(ticks >= 5);
    }

    #[test]
    fn test_negative_delta_ignored() {
        let mut step = FixedStep::new();
        assert_eq!(step.advance(-1.0), 0);
        // Nothing was banked, so one sim frame yields exactly one tick
        assert_eq!(step.advance(SIM_DT), 1);
    }

    #[test]
    fn test_reset_drops_leftover() {
        let mut step = FixedStep::new();
        assert_eq!(step.advance(SIM_DT * 0.6), 0);
        step.reset();
        assert_eq!(step.advance(SIM_DT * 0.6), 0);
    }
}
