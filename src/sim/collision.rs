//! Axis-aligned rectangle overlap and the bullet-enemy resolution pass
//!
//! Overlap is strict: rectangles that merely touch along an edge do not
//! collide. Bullet-enemy resolution is first-match-wins per bullet, in
//! insertion order, so ties between simultaneously overlapping enemies are
//! broken deterministically.

use super::state::{Bullet, Enemy};

/// An axis-aligned rectangle, top-left origin, y growing downward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Strict overlap test; shared edges don't count
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

/// Resolve bullet-enemy hits for one frame.
///
/// Each bullet scans live enemies in insertion order and destroys at most
/// the first one it overlaps; remaining bullets then get their own scan, so
/// several bullets can each score a kill in the same frame. Hits are marked
/// during the scan and compacted afterwards, never removed mid-iteration.
///
/// Returns the number of enemies destroyed.
pub fn resolve_bullet_hits(bullets: &mut Vec<Bullet>, enemies: &mut Vec<Enemy>) -> u32 {
    let mut bullet_spent = vec![false; bullets.len()];
    let mut enemy_dead = vec![false; enemies.len()];
    let mut kills = 0u32;

    for (bi, bullet) in bullets.iter().enumerate() {
        let b = bullet.rect();
        for (ei, enemy) in enemies.iter().enumerate() {
            if enemy_dead[ei] {
                continue;
            }
            if b.intersects(&enemy.rect()) {
                bullet_spent[bi] = true;
                enemy_dead[ei] = true;
                kills += 1;
                break; // first match wins for this bullet
            }
        }
    }

    let mut i = 0;
    bullets.retain(|_| {
        let keep = !bullet_spent[i];
        i += 1;
        keep
    });
    let mut i = 0;
    enemies.retain(|_| {
        let keep = !enemy_dead[i];
        i += 1;
        keep
    });

    kills
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enemy_at(x: f32, y: f32) -> Enemy {
        let mut e = Enemy::new(x);
        e.pos.y = y;
        e
    }

    #[test]
    fn overlapping_rects_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn disjoint_rects_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 4.0, 4.0);
        let b = Rect::new(100.0, 100.0, 4.0, 4.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn contained_rect_intersects() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 4.0, 12.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn hit_removes_bullet_and_enemy() {
        let mut bullets = vec![Bullet::new(110.0, 210.0)];
        let mut enemies = vec![enemy_at(100.0, 200.0)];
        let kills = resolve_bullet_hits(&mut bullets, &mut enemies);
        assert_eq!(kills, 1);
        assert!(bullets.is_empty());
        assert!(enemies.is_empty());
    }

    #[test]
    fn miss_leaves_both_alone() {
        let mut bullets = vec![Bullet::new(500.0, 500.0)];
        let mut enemies = vec![enemy_at(100.0, 200.0)];
        let kills = resolve_bullet_hits(&mut bullets, &mut enemies);
        assert_eq!(kills, 0);
        assert_eq!(bullets.len(), 1);
        assert_eq!(enemies.len(), 1);
    }

    #[test]
    fn first_inserted_enemy_wins_tie() {
        // One bullet overlapping two stacked enemies: the earlier insertion
        // dies, the later one survives.
        let mut bullets = vec![Bullet::new(110.0, 210.0)];
        let first = enemy_at(100.0, 200.0);
        let second = enemy_at(105.0, 205.0);
        let mut enemies = vec![first, second];

        let kills = resolve_bullet_hits(&mut bullets, &mut enemies);
        assert_eq!(kills, 1);
        assert_eq!(enemies.len(), 1);
        assert_eq!(enemies[0].pos.x, 105.0);
    }

    #[test]
    fn one_kill_per_bullet() {
        // A bullet inside three enemies still destroys exactly one.
        let mut bullets = vec![Bullet::new(110.0, 210.0)];
        let mut enemies = vec![
            enemy_at(100.0, 200.0),
            enemy_at(100.0, 201.0),
            enemy_at(100.0, 202.0),
        ];
        let kills = resolve_bullet_hits(&mut bullets, &mut enemies);
        assert_eq!(kills, 1);
        assert_eq!(enemies.len(), 2);
    }

    #[test]
    fn second_bullet_does_not_hit_dead_enemy() {
        // Two bullets over the same single enemy: only the first is spent.
        let mut bullets = vec![Bullet::new(110.0, 210.0), Bullet::new(112.0, 212.0)];
        let mut enemies = vec![enemy_at(100.0, 200.0)];
        let kills = resolve_bullet_hits(&mut bullets, &mut enemies);
        assert_eq!(kills, 1);
        assert_eq!(bullets.len(), 1);
        assert_eq!(bullets[0].pos.x, 112.0);
        assert!(enemies.is_empty());
    }

    #[test]
    fn multiple_bullets_kill_multiple_enemies_same_frame() {
        let mut bullets = vec![Bullet::new(110.0, 210.0), Bullet::new(510.0, 210.0)];
        let mut enemies = vec![enemy_at(100.0, 200.0), enemy_at(500.0, 200.0)];
        let kills = resolve_bullet_hits(&mut bullets, &mut enemies);
        assert_eq!(kills, 2);
        assert!(bullets.is_empty());
        assert!(enemies.is_empty());
    }
}
