//! Fixed timestep simulation tick
//!
//! Advances the session by exactly one frame. The frontend calls this at a
//! fixed 60 Hz; all speeds and timers are expressed in frames, so there is
//! no dt parameter to thread through.

use super::collision::resolve_bullet_hits;
use super::difficulty::enemy_speed;
use super::spawn::spawn_enemy;
use super::state::{Bullet, GamePhase, GameState};
use crate::consts::*;

/// Input snapshot for a single frame (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move-left control held
    pub move_left: bool,
    /// Move-right control held
    pub move_right: bool,
    /// Fire control held (auto-fire, gated by the player's cooldown)
    pub fire: bool,
    /// One-shot restart trigger; only honored during game over
    pub restart: bool,
}

/// Advance the game state by one frame.
///
/// Frame order while playing: fire, spawn, player movement, bullet
/// movement and cull, enemy movement and cull, collisions, difficulty,
/// high score. A player-enemy contact ends the frame immediately; the
/// scoring pass does not run on the frame the run ends.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::GameOver {
        if input.restart {
            state.restart();
        }
        return;
    }

    state.frame += 1;

    // Auto-fire while the control is held
    if input.fire && state.player.fire_cooldown == 0 {
        state
            .bullets
            .push(Bullet::new(state.player.muzzle_x(), state.player.pos.y));
        state.player.fire_cooldown = FIRE_COOLDOWN_FRAMES;
    }

    if state.spawner.advance() {
        let enemy = spawn_enemy(&mut state.rng, state.width);
        state.enemies.push(enemy);
    }

    state
        .player
        .update(input.move_left, input.move_right, state.width);

    for bullet in &mut state.bullets {
        bullet.update();
    }
    state.bullets.retain(|b| !b.off_screen());

    let speed = state.enemy_speed;
    for enemy in &mut state.enemies {
        enemy.update(speed);
    }
    let height = state.height;
    state.enemies.retain(|e| !e.off_screen(height));

    // Contact with any enemy ends the run; nothing else advances this frame
    let player_rect = state.player.rect();
    if state
        .enemies
        .iter()
        .any(|e| player_rect.intersects(&e.rect()))
    {
        state.phase = GamePhase::GameOver;
        return;
    }

    let kills = resolve_bullet_hits(&mut state.bullets, &mut state.enemies);
    state.score += kills * KILL_SCORE;

    state.enemy_speed = enemy_speed(state.score);

    state.high_score = state.high_score.max(state.score);
}
