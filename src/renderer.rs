//! Terminal rendering - all presentation I/O lives here
//!
//! Each function receives a mutable writer and an immutable view of the
//! simulation state. No game logic is performed; this module only scales
//! simulation pixels into terminal cells and queues draw commands.

use std::io::Write;

use crossterm::{
    QueueableCommand, cursor,
    style::{self, Color, Print},
    terminal,
};
use glam::Vec2;

use crate::consts::{BULLET_WIDTH, ENEMY_WIDTH, PLAYER_HEIGHT, PLAYER_WIDTH};
use crate::sim::{GamePhase, GameState};
use crate::starfield::Starfield;

const C_STAR: Color = Color::DarkGrey;
const C_PLAYER: Color = Color::Cyan;
const C_ENEMY: Color = Color::Red;
const C_BULLET: Color = Color::Yellow;
const C_HUD: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;
const C_OVER: Color = Color::Red;

/// Maps simulation pixels onto the terminal grid.
///
/// Row 0 is reserved for the HUD and the last row for the controls hint;
/// everything between is playfield.
#[derive(Debug, Clone, Copy)]
struct Viewport {
    cols: u16,
    rows: u16,
    field_w: f32,
    field_h: f32,
}

impl Viewport {
    fn new(cols: u16, rows: u16, state: &GameState) -> Self {
        Self {
            cols,
            rows,
            field_w: state.width,
            field_h: state.height,
        }
    }

    /// Simulation point to terminal cell; None when outside the playfield
    fn cell(&self, pos: Vec2) -> Option<(u16, u16)> {
        let col = (pos.x / self.field_w * self.cols as f32).floor();
        let row = (pos.y / self.field_h * (self.rows as f32 - 2.0)).floor() + 1.0;
        if col < 0.0 || col >= self.cols as f32 || row < 1.0 || row >= self.rows as f32 - 1.0 {
            return None;
        }
        Some((col as u16, row as u16))
    }
}

/// Render one complete frame
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    stars: Option<&Starfield>,
) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let view = Viewport::new(cols, rows, state);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    if let Some(stars) = stars {
        draw_stars(out, &view, stars)?;
    }
    draw_bullets(out, &view, state)?;
    draw_enemies(out, &view, state)?;
    draw_player(out, &view, state)?;
    draw_hud(out, &view, state)?;
    draw_controls_hint(out, &view)?;

    if state.phase == GamePhase::GameOver {
        draw_game_over(out, &view, state)?;
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

fn draw_stars<W: Write>(out: &mut W, view: &Viewport, stars: &Starfield) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_STAR))?;
    for star in stars.points() {
        if let Some((col, row)) = view.cell(*star) {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(Print("·"))?;
        }
    }
    Ok(())
}

fn draw_player<W: Write>(out: &mut W, view: &Viewport, state: &GameState) -> std::io::Result<()> {
    // Two-row sprite: tip above swept wings
    //   ▲
    //  ◢█◣
    let center = state.player.pos + Vec2::new(PLAYER_WIDTH / 2.0, 0.0);
    let Some((col, row)) = view.cell(center) else {
        return Ok(());
    };

    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print("▲"))?;

    let wing_pos = center + Vec2::new(0.0, PLAYER_HEIGHT / 2.0);
    if let Some((wc, wr)) = view.cell(wing_pos) {
        if wr > row {
            out.queue(cursor::MoveTo(wc.saturating_sub(1), wr))?;
            out.queue(Print("◢█◣"))?;
        }
    }
    Ok(())
}

fn draw_enemies<W: Write>(out: &mut W, view: &Viewport, state: &GameState) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_ENEMY))?;
    for enemy in &state.enemies {
        // Flat top, point-down hull
        let center = enemy.pos + Vec2::new(ENEMY_WIDTH / 2.0, 0.0);
        if let Some((col, row)) = view.cell(center) {
            out.queue(cursor::MoveTo(col.saturating_sub(1), row))?;
            out.queue(Print("▄▄▄"))?;
            if row + 1 < view.rows - 1 {
                out.queue(cursor::MoveTo(col, row + 1))?;
                out.queue(Print("▼"))?;
            }
        }
    }
    Ok(())
}

fn draw_bullets<W: Write>(out: &mut W, view: &Viewport, state: &GameState) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_BULLET))?;
    for bullet in &state.bullets {
        let center = bullet.pos + Vec2::new(BULLET_WIDTH / 2.0, 0.0);
        if let Some((col, row)) = view.cell(center) {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(Print("│"))?;
        }
    }
    Ok(())
}

fn draw_hud<W: Write>(out: &mut W, view: &Viewport, state: &GameState) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(Print(format!("Score: {:>6}", state.score)))?;

    let high = format!("High: {:>6}", state.high_score);
    let col = view.cols.saturating_sub(high.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(col, 0))?;
    out.queue(Print(&high))?;
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   Hold SPACE : Fire   Q : Quit"))?;
    Ok(())
}

fn draw_game_over<W: Write>(out: &mut W, view: &Viewport, state: &GameState) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}", state.score);
    let lines: &[(&str, Color)] = &[
        ("G A M E   O V E R", C_OVER),
        (&score_line, Color::Yellow),
        ("Press SPACE to restart", C_HUD),
    ];

    let cx = view.cols / 2;
    let start_row = (view.rows / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}
