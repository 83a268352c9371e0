//! Timer-driven enemy spawning with accelerating cadence
//!
//! The delay between spawns shrinks by a fixed step after every spawn and
//! bottoms out at a floor, so the spawn rate rises monotonically but never
//! exceeds a hard ceiling.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::Enemy;
use crate::consts::*;

/// Spawn scheduling state
#[derive(Debug, Clone)]
pub struct Spawner {
    /// Frames since the last spawn
    pub timer: u32,
    /// Frames between spawns; non-increasing, floored at SPAWN_DELAY_MIN
    pub delay: f32,
}

impl Spawner {
    pub fn new() -> Self {
        Self {
            timer: 0,
            delay: SPAWN_DELAY_START,
        }
    }

    /// Advance one frame. Returns true when an enemy is due this frame, in
    /// which case the timer resets and the delay tightens.
    pub fn advance(&mut self) -> bool {
        self.timer += 1;
        if self.timer as f32 > self.delay {
            self.timer = 0;
            self.delay = (self.delay - SPAWN_DELAY_DECREMENT).max(SPAWN_DELAY_MIN);
            true
        } else {
            false
        }
    }
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a new enemy at a uniformly random x along the top edge
pub fn spawn_enemy(rng: &mut Pcg32, field_width: f32) -> Enemy {
    let x = rng.random_range(0.0..=field_width - ENEMY_WIDTH);
    Enemy::new(x)
}
