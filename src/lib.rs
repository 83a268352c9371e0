//! Starfall - a vertical arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, difficulty)
//! - `starfield`: Parallax background effect, decoupled from gameplay
//! - `renderer`: Terminal presentation (reads state, never writes it)
//! - `highscores`: In-memory leaderboard for the current process
//! - `settings`: Startup configuration

pub mod highscores;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod starfield;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (frames per second)
    pub const TICK_HZ: u32 = 60;

    /// Default playfield dimensions (simulation pixels)
    pub const FIELD_WIDTH: f32 = 1366.0;
    pub const FIELD_HEIGHT: f32 = 768.0;

    /// Player ship
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 45.0;
    /// Horizontal speed (pixels per frame)
    pub const PLAYER_SPEED: f32 = 7.0;
    /// Player spawn height above the bottom edge
    pub const PLAYER_BOTTOM_OFFSET: f32 = 60.0;
    /// Frames between shots while fire is held
    pub const FIRE_COOLDOWN_FRAMES: u32 = 8;

    /// Bullets
    pub const BULLET_WIDTH: f32 = 4.0;
    pub const BULLET_HEIGHT: f32 = 12.0;
    /// Upward speed (pixels per frame)
    pub const BULLET_SPEED: f32 = 11.0;
    /// Bullets are culled once above this line
    pub const BULLET_CULL_Y: f32 = -20.0;

    /// Enemies
    pub const ENEMY_WIDTH: f32 = 40.0;
    pub const ENEMY_HEIGHT: f32 = 45.0;
    /// Spawn height above the top edge
    pub const ENEMY_SPAWN_Y: f32 = -50.0;
    /// Enemies are culled this far below the bottom edge
    pub const ENEMY_CULL_MARGIN: f32 = 20.0;

    /// Difficulty scaling
    pub const ENEMY_BASE_SPEED: f32 = 2.0;
    /// Score units per +1 px/frame of enemy speed
    pub const SPEED_SCORE_SCALE: f32 = 800.0;
    /// Spawner cadence (frames between spawns)
    pub const SPAWN_DELAY_START: f32 = 120.0;
    pub const SPAWN_DELAY_DECREMENT: f32 = 0.8;
    pub const SPAWN_DELAY_MIN: f32 = 25.0;

    /// Points per enemy destroyed
    pub const KILL_SCORE: u32 = 10;

    /// Background starfield
    pub const STAR_COUNT: usize = 150;
    /// Downward drift (pixels per frame)
    pub const STAR_SPEED: f32 = 1.0;
}
