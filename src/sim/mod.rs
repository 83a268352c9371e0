//! Deterministic simulation module
//!
//! All gameplay logic lives here, and every tick must replay identically
//! from the same seed and inputs:
//! - Fixed timestep only (one tick per frame at 60 Hz)
//! - Seeded RNG only
//! - Stable iteration order (insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, resolve_bullet_hits};
pub use difficulty::enemy_speed;
pub use spawn::Spawner;
pub use state::{Bullet, Enemy, GamePhase, GameState, Player};
pub use tick::{TickInput, tick};
