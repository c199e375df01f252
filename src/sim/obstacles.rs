//! Obstacle field: spawning, scrolling, and eviction of asteroid pairs

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{BARRIER_OFFSET, EVICTION_X, GAP_CENTER_MAX, GAP_CENTER_MIN, SPAWN_X};

/// A top/bottom asteroid pair with a passable gap between them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Current horizontal position
    pub x: f32,
    /// Horizontal position before the most recent advance
    pub prev_x: f32,
    /// Vertical center of the gap, fixed at spawn
    pub gap_center: f32,
    /// Already scored (each obstacle scores at most once)
    pub counted: bool,
}

impl Obstacle {
    pub fn new(id: u32, gap_center: f32) -> Self {
        Self {
            id,
            x: SPAWN_X,
            prev_x: SPAWN_X,
            gap_center,
            counted: false,
        }
    }

    /// True on the advance where this obstacle moved from ahead of `at_x` to at-or-behind it
    pub fn crossed(&self, at_x: f32) -> bool {
        self.prev_x > at_x && self.x <= at_x
    }

    /// Centers of the (top, bottom) asteroids for a given gap height
    pub fn barrier_centers(&self, gap: f32) -> (f32, f32) {
        let offset = gap / 2.0 + BARRIER_OFFSET;
        (self.gap_center + offset, self.gap_center - offset)
    }
}

/// Real-time spawn cadence, independent of how often the simulation ticks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnTimer {
    pub interval_ms: u32,
    elapsed_ms: f64,
}

impl SpawnTimer {
    pub fn new(interval_ms: u32) -> Self {
        debug_assert!(interval_ms > 0, "spawn interval must be non-zero");
        Self {
            interval_ms,
            elapsed_ms: 0.0,
        }
    }

    /// Feed wall-clock time; returns true when a spawn came due.
    ///
    /// Fires at most once per call. A backlog of missed intervals (tab in the
    /// background) is dropped so obstacles never stack at the spawn line.
    pub fn advance(&mut self, elapsed_ms: f64) -> bool {
        if elapsed_ms <= 0.0 || self.interval_ms == 0 {
            return false;
        }
        self.elapsed_ms += elapsed_ms;

        let interval = self.interval_ms as f64;
        if self.elapsed_ms < interval {
            return false;
        }
        self.elapsed_ms %= interval;
        true
    }

    /// Cancel the in-flight interval
    pub fn reset(&mut self) {
        self.elapsed_ms = 0.0;
    }

    /// Milliseconds until the next spawn
    pub fn remaining_ms(&self) -> f64 {
        self.interval_ms as f64 - self.elapsed_ms
    }
}

/// Owns the live obstacles in spawn order (which is also left-to-right order)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleField {
    pub obstacles: Vec<Obstacle>,
    pub timer: SpawnTimer,
    next_id: u32,
}

impl ObstacleField {
    pub fn new(spawn_interval_ms: u32) -> Self {
        Self {
            obstacles: Vec::new(),
            timer: SpawnTimer::new(spawn_interval_ms),
            next_id: 1,
        }
    }

    /// Append an obstacle at the right edge with a uniformly drawn gap center
    pub fn spawn(&mut self, rng: &mut impl Rng) -> &Obstacle {
        let gap_center = rng.random_range(GAP_CENTER_MIN..=GAP_CENTER_MAX);
        self.spawn_with_gap(gap_center)
    }

    /// Append an obstacle at the right edge with a known gap center
    pub fn spawn_with_gap(&mut self, gap_center: f32) -> &Obstacle {
        let id = self.next_id;
        self.next_id += 1;
        self.obstacles.push(Obstacle::new(id, gap_center));
        log::debug!("Spawned obstacle {} (gap center {:.3})", id, gap_center);
        &self.obstacles[self.obstacles.len() - 1]
    }

    /// Scroll every obstacle left and evict the ones past the cutoff.
    ///
    /// Returns the number evicted. Survivors keep their relative order.
    pub fn advance(&mut self, speed: f32) -> usize {
        for obstacle in &mut self.obstacles {
            obstacle.prev_x = obstacle.x;
            obstacle.x -= speed;
        }

        let before = self.obstacles.len();
        self.obstacles.retain(|o| o.x >= EVICTION_X);
        let evicted = before - self.obstacles.len();

        debug_assert!(self.obstacles.windows(2).all(|w| w[0].id < w[1].id));
        evicted
    }

    /// Drop all obstacles and cancel the pending spawn
    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.timer.reset();
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_at_right_edge() {
        let mut field = ObstacleField::new(2000);
        let mut rng = Pcg32::seed_from_u64(7);
        let obstacle = *field.spawn(&mut rng);

        assert_eq!(obstacle.x, SPAWN_X);
        assert!(!obstacle.counted);
        assert!((GAP_CENTER_MIN..=GAP_CENTER_MAX).contains(&obstacle.gap_center));
    }

    #[test]
    fn test_gap_centers_cover_range() {
        let mut field = ObstacleField::new(2000);
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..500 {
            field.spawn(&mut rng);
        }
        let min = field.iter().map(|o| o.gap_center).fold(f32::MAX, f32::min);
        let max = field.iter().map(|o| o.gap_center).fold(f32::MIN, f32::max);
        assert!(min >= GAP_CENTER_MIN && min < -0.9);
        assert!(max <= GAP_CENTER_MAX && max > 0.9);
    }

    #[test]
    fn test_advance_moves_and_tracks_previous() {
        let mut field = ObstacleField::new(2000);
        field.spawn_with_gap(0.0);
        field.advance(0.5);

        let obstacle = field.obstacles[0];
        assert_eq!(obstacle.prev_x, SPAWN_X);
        assert_eq!(obstacle.x, SPAWN_X - 0.5);
    }

    #[test]
    fn test_eviction_preserves_order() {
        let mut field = ObstacleField::new(2000);
        field.spawn_with_gap(0.0);
        field.advance(10.5); // first obstacle now at -5.5
        field.spawn_with_gap(0.5);
        field.spawn_with_gap(-0.5);

        let evicted = field.advance(1.0);
        assert_eq!(evicted, 1);
        let ids: Vec<u32> = field.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_crossing_detection() {
        let mut obstacle = Obstacle::new(1, 0.0);
        obstacle.prev_x = -3.98;
        obstacle.x = -4.03;
        assert!(obstacle.crossed(-4.0));

        obstacle.prev_x = -4.03;
        obstacle.x = -4.08;
        assert!(!obstacle.crossed(-4.0));

        // Landing exactly on the line counts as crossing
        obstacle.prev_x = -3.95;
        obstacle.x = -4.0;
        assert!(obstacle.crossed(-4.0));
    }

    #[test]
    fn test_barrier_centers() {
        let obstacle = Obstacle::new(1, 0.5);
        assert_eq!(obstacle.barrier_centers(2.0), (2.5, -1.5));
    }

    #[test]
    fn test_timer_fires_on_interval() {
        let mut timer = SpawnTimer::new(2000);
        assert!(!timer.advance(1999.0));
        assert!(timer.advance(1.0));
        assert!(!timer.advance(1999.0));
        assert!(timer.advance(1.0));
        assert_eq!(timer.remaining_ms(), 2000.0);
    }

    #[test]
    fn test_timer_drops_backlog() {
        let mut timer = SpawnTimer::new(2000);
        // Ten seconds in the background: one spawn, the rest are skipped
        assert!(timer.advance(10_500.0));
        assert_eq!(timer.remaining_ms(), 1500.0);
        assert!(!timer.advance(1000.0));
        assert!(timer.advance(500.0));
    }

    #[test]
    fn test_timer_ignores_non_positive() {
        let mut timer = SpawnTimer::new(2000);
        assert!(!timer.advance(-50.0));
        assert!(!timer.advance(0.0));
        assert_eq!(timer.remaining_ms(), 2000.0);
    }

    #[test]
    fn test_clear_cancels_pending_spawn() {
        let mut field = ObstacleField::new(2000);
        field.spawn_with_gap(0.0);
        field.timer.advance(1500.0);

        field.clear();
        assert!(field.is_empty());
        assert!(!field.timer.advance(1500.0));
    }

    proptest! {
        #[test]
        fn prop_evicted_obstacles_never_return(ticks in 1usize..400, spawn_every in 1usize..60) {
            let mut field = ObstacleField::new(2000);
            let mut rng = Pcg32::seed_from_u64(3);
            let mut gone = Vec::new();

            for t in 0..ticks {
                if t % spawn_every == 0 {
                    field.spawn(&mut rng);
                }
                let ids_before: Vec<u32> = field.iter().map(|o| o.id).collect();
                field.advance(0.05);

                for id in ids_before {
                    if !field.iter().any(|o| o.id == id) {
                        gone.push(id);
                    }
                }
                prop_assert!(field.iter().all(|o| o.x >= EVICTION_X));
                prop_assert!(field.iter().all(|o| !gone.contains(&o.id)));
            }
        }
    }
}
