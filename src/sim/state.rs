//! Session state and entity types
//!
//! Everything mutable for one playthrough lives in [`GameState`]. The
//! renderer reads this state each frame but never mutates it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use super::spawn::Spawner;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended, waiting for restart
    GameOver,
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner of the ship's bounding box
    pub pos: Vec2,
    /// Frames until the next shot is allowed (0 = ready)
    pub fire_cooldown: u32,
}

impl Player {
    /// Spawn at the horizontal center, near the bottom edge
    pub fn new(field_width: f32, field_height: f32) -> Self {
        Self {
            pos: Vec2::new(
                field_width / 2.0 - PLAYER_WIDTH / 2.0,
                field_height - PLAYER_BOTTOM_OFFSET,
            ),
            fire_cooldown: 0,
        }
    }

    /// Apply one frame of movement input and decay the fire cooldown.
    ///
    /// Both directions held cancel out. The x position is clamped so the
    /// ship never leaves the field.
    pub fn update(&mut self, move_left: bool, move_right: bool, field_width: f32) {
        if move_left {
            self.pos.x -= PLAYER_SPEED;
        }
        if move_right {
            self.pos.x += PLAYER_SPEED;
        }
        self.pos.x = self.pos.x.clamp(0.0, field_width - PLAYER_WIDTH);

        if self.fire_cooldown > 0 {
            self.fire_cooldown -= 1;
        }
    }

    /// Bounding rectangle at the current position
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    /// Spawn x for a new bullet: centered on the ship
    pub fn muzzle_x(&self) -> f32 {
        self.pos.x + PLAYER_WIDTH / 2.0 - BULLET_WIDTH / 2.0
    }
}

/// A player projectile, moving straight up
#[derive(Debug, Clone)]
pub struct Bullet {
    pub pos: Vec2,
}

impl Bullet {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }

    /// Advance one frame
    pub fn update(&mut self) {
        self.pos.y -= BULLET_SPEED;
    }

    /// True once the bullet has left the top of the field
    pub fn off_screen(&self) -> bool {
        self.pos.y < BULLET_CULL_Y
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, BULLET_WIDTH, BULLET_HEIGHT)
    }
}

/// A descending enemy
#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
}

impl Enemy {
    /// Spawn just above the top edge at the given x
    pub fn new(x: f32) -> Self {
        Self {
            pos: Vec2::new(x, ENEMY_SPAWN_Y),
        }
    }

    /// Advance one frame. Speed is the shared session value, not stored
    /// per-entity, so every live enemy accelerates together.
    pub fn update(&mut self, speed: f32) {
        self.pos.y += speed;
    }

    /// True once the enemy has passed below the bottom edge
    pub fn off_screen(&self, field_height: f32) -> bool {
        self.pos.y > field_height + ENEMY_CULL_MARGIN
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, ENEMY_WIDTH, ENEMY_HEIGHT)
    }
}

/// Complete session state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Playfield dimensions (simulation pixels)
    pub width: f32,
    pub height: f32,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation frame counter, reset on restart
    pub frame: u64,
    /// Current phase
    pub phase: GamePhase,
    pub player: Player,
    /// Live bullets, insertion order
    pub bullets: Vec<Bullet>,
    /// Live enemies, insertion order
    pub enemies: Vec<Enemy>,
    /// Enemy spawn scheduling
    pub spawner: Spawner,
    /// Score for the current run
    pub score: u32,
    /// Best score this process; survives restarts
    pub high_score: u32,
    /// Derived from score every frame, never stored per-enemy
    pub enemy_speed: f32,
    /// Session RNG; the spawner's x positions are its only consumer
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a fresh session with the given seed and field size
    pub fn new(seed: u64, width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            seed,
            frame: 0,
            phase: GamePhase::Playing,
            player: Player::new(width, height),
            bullets: Vec::new(),
            enemies: Vec::new(),
            spawner: Spawner::new(),
            score: 0,
            high_score: 0,
            enemy_speed: ENEMY_BASE_SPEED,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Start a new run after a game over.
    ///
    /// Resets all session state; keeps the high score and continues the
    /// same RNG stream.
    pub fn restart(&mut self) {
        self.frame = 0;
        self.phase = GamePhase::Playing;
        self.player = Player::new(self.width, self.height);
        self.bullets.clear();
        self.enemies.clear();
        self.spawner = Spawner::new();
        self.score = 0;
        self.enemy_speed = ENEMY_BASE_SPEED;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_spawns_centered_near_bottom() {
        let p = Player::new(1366.0, 768.0);
        assert_eq!(p.pos.x, 1366.0 / 2.0 - 20.0);
        assert_eq!(p.pos.y, 768.0 - 60.0);
        assert_eq!(p.fire_cooldown, 0);
    }

    #[test]
    fn player_clamps_left_and_right() {
        let mut p = Player::new(1366.0, 768.0);
        p.pos.x = 3.0;
        p.update(true, false, 1366.0);
        assert_eq!(p.pos.x, 0.0);

        p.pos.x = 1366.0 - PLAYER_WIDTH - 3.0;
        p.update(false, true, 1366.0);
        assert_eq!(p.pos.x, 1366.0 - PLAYER_WIDTH);
    }

    #[test]
    fn player_both_directions_cancel() {
        let mut p = Player::new(1366.0, 768.0);
        let x = p.pos.x;
        p.update(true, true, 1366.0);
        assert_eq!(p.pos.x, x);
    }

    #[test]
    fn cooldown_decays_to_zero_and_stops() {
        let mut p = Player::new(1366.0, 768.0);
        p.fire_cooldown = 2;
        p.update(false, false, 1366.0);
        assert_eq!(p.fire_cooldown, 1);
        p.update(false, false, 1366.0);
        assert_eq!(p.fire_cooldown, 0);
        p.update(false, false, 1366.0);
        assert_eq!(p.fire_cooldown, 0);
    }

    #[test]
    fn bullet_moves_up_and_culls_below_line() {
        let mut b = Bullet::new(100.0, -10.0);
        assert!(!b.off_screen());
        b.update();
        assert_eq!(b.pos.y, -21.0);
        assert!(b.off_screen());
    }

    #[test]
    fn enemy_uses_supplied_speed() {
        let mut e = Enemy::new(50.0);
        assert_eq!(e.pos.y, ENEMY_SPAWN_Y);
        e.update(2.0);
        e.update(3.5);
        assert_eq!(e.pos.y, ENEMY_SPAWN_Y + 5.5);
    }

    #[test]
    fn enemy_culls_past_bottom_margin() {
        let mut e = Enemy::new(50.0);
        e.pos.y = 768.0 + ENEMY_CULL_MARGIN;
        assert!(!e.off_screen(768.0));
        e.pos.y += 0.5;
        assert!(e.off_screen(768.0));
    }

    #[test]
    fn restart_preserves_high_score_and_size() {
        let mut state = GameState::new(7, 1366.0, 768.0);
        state.score = 120;
        state.high_score = 340;
        state.frame = 999;
        state.phase = GamePhase::GameOver;
        state.enemies.push(Enemy::new(10.0));
        state.bullets.push(Bullet::new(5.0, 5.0));
        state.spawner.delay = 40.0;
        state.enemy_speed = 9.0;

        state.restart();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 340);
        assert_eq!(state.frame, 0);
        assert!(state.bullets.is_empty());
        assert!(state.enemies.is_empty());
        assert_eq!(state.spawner.delay, SPAWN_DELAY_START);
        assert_eq!(state.spawner.timer, 0);
        assert_eq!(state.enemy_speed, ENEMY_BASE_SPEED);
        assert_eq!(state.player.pos.x, 1366.0 / 2.0 - 20.0);
        assert_eq!(state.width, 1366.0);
    }
}
