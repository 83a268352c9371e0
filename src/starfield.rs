//! Scrolling background starfield
//!
//! Purely visual parallax effect; nothing in the simulation reads it. It
//! owns a separate RNG stream so respawning stars never perturbs gameplay
//! determinism.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{STAR_COUNT, STAR_SPEED};

/// A field of background stars drifting toward the bottom edge
#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<Vec2>,
    width: f32,
    height: f32,
    rng: Pcg32,
}

impl Starfield {
    /// Scatter stars uniformly over the field
    pub fn new(seed: u64, width: f32, height: f32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = (0..STAR_COUNT)
            .map(|_| {
                Vec2::new(
                    rng.random_range(0.0..width),
                    rng.random_range(0.0..height),
                )
            })
            .collect();
        Self {
            stars,
            width,
            height,
            rng,
        }
    }

    /// Drift every star down one step; stars leaving the bottom edge wrap
    /// to a random x just above the top.
    pub fn update(&mut self) {
        for star in &mut self.stars {
            star.y += STAR_SPEED;
            if star.y > self.height {
                star.x = self.rng.random_range(0.0..self.width);
                star.y = self.rng.random_range(-20.0..=0.0);
            }
        }
    }

    /// Rebuild the field from scratch (used on restart)
    pub fn reset(&mut self) {
        let seed = self.rng.random();
        *self = Self::new(seed, self.width, self.height);
    }

    pub fn points(&self) -> &[Vec2] {
        &self.stars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_start_inside_field() {
        let field = Starfield::new(3, 1366.0, 768.0);
        assert_eq!(field.points().len(), STAR_COUNT);
        for star in field.points() {
            assert!(star.x >= 0.0 && star.x < 1366.0);
            assert!(star.y >= 0.0 && star.y < 768.0);
        }
    }

    #[test]
    fn stars_wrap_at_bottom_edge() {
        let mut field = Starfield::new(3, 1366.0, 768.0);
        // Enough frames for every star to cross the bottom at least once
        for _ in 0..800 {
            field.update();
        }
        for star in field.points() {
            assert!(star.y <= 768.0 + STAR_SPEED);
            assert!(star.x >= 0.0 && star.x < 1366.0);
        }
        assert_eq!(field.points().len(), STAR_COUNT);
    }

    #[test]
    fn update_moves_stars_down() {
        let mut field = Starfield::new(9, 1366.0, 768.0);
        let before = field.points()[0].y;
        field.update();
        let after = field.points()[0].y;
        // Either drifted down or wrapped back above the top
        assert!(after == before + STAR_SPEED || after <= 0.0);
    }
}
