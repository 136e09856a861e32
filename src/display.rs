//! Rendering layer.  All terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable snapshot.  No
//! game logic is performed; this module only projects the pixel-space
//! snapshot onto terminal cells.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use platformer::entities::{EnemyKind, EntityKind, Mode, PickupKind, PowerUp, ProjectileKind};
use platformer::snapshot::{EntityView, Snapshot};
use platformer::theme::{Rgb, THEMES};

/// World pixels per terminal column / row.
const CELL_W: f32 = 16.0;
const CELL_H: f32 = 32.0;
/// Rows reserved above the play field for the HUD.
const HUD_ROWS: u16 = 2;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;
const C_COIN: Color = Color::Yellow;
const C_PROJECTILE_FIRE: Color = Color::Red;
const C_PROJECTILE_ICE: Color = Color::Cyan;
const C_PLAYER: Color = Color::Red;
const C_PLAYER_FLASH: Color = Color::White;

fn rgb(c: Rgb) -> Color {
    Color::Rgb {
        r: c.0,
        g: c.1,
        b: c.2,
    }
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Render one complete playing frame (also used behind the end screens).
pub fn render<W: Write>(out: &mut W, snap: &Snapshot) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (cols, rows) = terminal::size()?;
    draw_hud(out, snap)?;
    for view in &snap.entities {
        draw_entity(out, snap, view, cols, rows)?;
    }

    match snap.mode {
        Mode::GameOver => draw_banner(out, cols, rows, "GAME OVER", Color::Red, snap)?,
        Mode::Victory => draw_banner(out, cols, rows, "VICTORY!", Color::Yellow, snap)?,
        _ => {}
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

pub fn render_menu<W: Write>(out: &mut W, high_score: u32) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let title = "★  PLATFORMER  ★";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(6),
    ))?;
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    out.queue(Print(title))?;

    if high_score > 0 {
        let hs_str = format!("Best Score: {}", high_score);
        out.queue(cursor::MoveTo(
            cx.saturating_sub(hs_str.chars().count() as u16 / 2),
            cy.saturating_sub(5),
        ))?;
        out.queue(style::SetForegroundColor(C_HUD))?;
        out.queue(Print(&hs_str))?;
    }

    out.queue(cursor::MoveTo(cx.saturating_sub(12), cy.saturating_sub(3)))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print("Select world:"))?;

    for (i, theme) in THEMES.iter().enumerate() {
        let row = cy.saturating_sub(1) + i as u16;
        out.queue(cursor::MoveTo(cx.saturating_sub(12), row))?;
        out.queue(style::SetForegroundColor(C_HINT))?;
        out.queue(Print(format!("[{}] ", i + 1)))?;
        out.queue(style::SetForegroundColor(rgb(theme.accent)))?;
        out.queue(Print(theme.name))?;
    }

    out.queue(cursor::MoveTo(cx.saturating_sub(24), cy + 6))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move  Z : Run  SPACE : Jump  X : Fire  Q : Quit"))?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

// ── HUD ───────────────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, snap: &Snapshot) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(rgb(snap.theme.accent)))?;
    out.queue(Print(format!("World {} · {}", snap.world_index + 1, snap.theme.name)))?;

    out.queue(cursor::MoveTo(1, 1))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!(
        "Score {:>7}   Coins {:>2}   Lives {}",
        snap.score, snap.coins, snap.lives
    )))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn glyph(view: &EntityView) -> (char, Option<Color>) {
    match view.kind {
        EntityKind::Platform => ('▓', None),
        EntityKind::Exit => ('|', Some(Color::Green)),
        EntityKind::Pickup(PickupKind::Coin) => ('o', Some(C_COIN)),
        EntityKind::Pickup(PickupKind::PowerUp(power)) => match power {
            PowerUp::Mushroom => ('M', Some(Color::Red)),
            PowerUp::FireFlower => ('F', Some(Color::DarkYellow)),
            PowerUp::IceFlower => ('I', Some(Color::Cyan)),
            PowerUp::Star | PowerUp::None => ('*', Some(Color::Yellow)),
        },
        EntityKind::Enemy(_) if !view.alive => ('_', Some(C_HINT)),
        EntityKind::Enemy(kind) => {
            let c = match kind {
                EnemyKind::Goomba => 'g',
                EnemyKind::Koopa => 'k',
                EnemyKind::Piranha => 'p',
                EnemyKind::Bullet => '>',
                EnemyKind::HammerBro => 'h',
                EnemyKind::Boo => 'b',
                EnemyKind::Spike => 's',
            };
            (c, Some(Color::Magenta))
        }
        EntityKind::Projectile(ProjectileKind::Fire) => ('•', Some(C_PROJECTILE_FIRE)),
        EntityKind::Projectile(ProjectileKind::Ice) => ('•', Some(C_PROJECTILE_ICE)),
        EntityKind::Player => {
            let c = if view.power.is_some_and(|p| p.is_big()) {
                '@'
            } else {
                'a'
            };
            let color = if view.invincible && view.power != Some(PowerUp::Star) {
                C_PLAYER_FLASH
            } else {
                C_PLAYER
            };
            (c, Some(color))
        }
    }
}

/// Fill the cells covered by an entity's box, clipped to the terminal.
fn draw_entity<W: Write>(
    out: &mut W,
    snap: &Snapshot,
    view: &EntityView,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let b = view.bounds;
    let left = ((b.x - snap.camera_x) / CELL_W).floor() as i32;
    let right = ((b.right() - snap.camera_x) / CELL_W).ceil() as i32;
    let top = (b.y / CELL_H).floor() as i32 + HUD_ROWS as i32;
    let bottom = (b.bottom() / CELL_H).ceil() as i32 + HUD_ROWS as i32;

    let (c, color) = glyph(view);
    let color = color.unwrap_or_else(|| rgb(snap.theme.platform));
    out.queue(style::SetForegroundColor(color))?;

    for row in top.max(HUD_ROWS as i32)..bottom.min(rows as i32) {
        for col in left.max(0)..right.min(cols as i32) {
            out.queue(cursor::MoveTo(col as u16, row as u16))?;
            out.queue(Print(c))?;
        }
    }
    Ok(())
}

// ── End screens ───────────────────────────────────────────────────────────────

fn draw_banner<W: Write>(
    out: &mut W,
    cols: u16,
    rows: u16,
    title: &str,
    color: Color,
    snap: &Snapshot,
) -> std::io::Result<()> {
    let cx = cols / 2;
    let cy = rows / 2;

    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(1),
    ))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(title))?;

    let line = format!("Score {}   Best {}", snap.score, snap.high_score);
    out.queue(cursor::MoveTo(
        cx.saturating_sub(line.chars().count() as u16 / 2),
        cy + 1,
    ))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(&line))?;

    let hint = "SPACE : menu   Q : quit";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(hint.chars().count() as u16 / 2),
        cy + 3,
    ))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}
