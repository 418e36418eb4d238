//! Frame building
//!
//! Turns a [`Snapshot`] into triangle lists and text requests. The shaken
//! layer holds the arena and the HUD; the overlay (menu, pause, game over)
//! is drawn on top without the camera offset.

use glam::Vec2;
use rand::Rng;

use super::shapes::{circle, line, rect, rect_outline};
use super::vertex::{Vertex, opaque, rgba};
use crate::consts::{HEIGHT, WIDTH};
use crate::palette::*;
use crate::settings::Settings;
use crate::sim::{Screen, Snapshot};

const GRID_SPACING: f32 = 40.0;
const GRID_COLOR: Rgb = [24, 28, 40];
const DIAGONAL_COLOR: Rgb = [18, 22, 35];
const PANEL_BORDER: Rgb = [35, 45, 65];
const BAR_BG: Rgb = [22, 26, 36];
const BAR_BORDER: Rgb = [40, 48, 66];
const ENEMY_CORE: Rgb = [35, 35, 45];
const PLAYER_GLOW: Rgb = [80, 200, 255];
const OVERLAY_PANEL: Rgb = [14, 18, 28];
const OVERLAY_BORDER: Rgb = [34, 46, 70];

/// Dash readiness bar (top-left corner and size)
const DASH_BAR_POS: Vec2 = Vec2::new(26.0, 102.0);
const DASH_BAR_SIZE: Vec2 = Vec2::new(220.0, 14.0);

const HINT: &str = "WASD/Arrows - move | SPACE/SHIFT - dash | P - pause";

/// Font size class for a text request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Small,
    Ui,
    Big,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// `pos` is the top-left corner
    TopLeft,
    /// `pos` is the top-center
    TopCenter,
}

/// Text the host should draw with its own font renderer
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub pos: Vec2,
    pub size: TextSize,
    pub anchor: Anchor,
    pub color: Rgb,
}

impl TextItem {
    fn new(text: impl Into<String>, pos: Vec2, size: TextSize, color: Rgb) -> Self {
        Self {
            text: text.into(),
            pos,
            size,
            anchor: Anchor::TopLeft,
            color,
        }
    }

    fn centered(text: impl Into<String>, pos: Vec2, size: TextSize, color: Rgb) -> Self {
        Self {
            anchor: Anchor::TopCenter,
            ..Self::new(text, pos, size, color)
        }
    }
}

/// Everything needed to present one frame
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub clear_color: [f32; 4],
    /// Arena and HUD, drawn at `offset`
    pub world: Vec<Vertex>,
    pub world_text: Vec<TextItem>,
    /// Screen panel, drawn without offset
    pub overlay: Vec<Vertex>,
    pub overlay_text: Vec<TextItem>,
    /// Camera shake offset (pixels)
    pub offset: Vec2,
}

impl Frame {
    pub fn vertex_count(&self) -> usize {
        self.world.len() + self.overlay.len()
    }

    /// All text in draw order
    pub fn texts(&self) -> impl Iterator<Item = &TextItem> {
        self.world_text.iter().chain(self.overlay_text.iter())
    }
}

/// Build the draw lists for one frame.
///
/// `rng` only drives the cosmetic shake offset; pass the host's RNG, not
/// the simulation's.
pub fn build_frame<R: Rng + ?Sized>(snap: &Snapshot, settings: &Settings, rng: &mut R) -> Frame {
    let segments = settings.quality.circle_segments();
    let mut frame = Frame {
        clear_color: opaque(BG),
        ..Frame::default()
    };

    if settings.quality.background_grid() {
        draw_background(&mut frame.world, snap.grid_offset);
    }
    draw_entities(&mut frame.world, snap, settings, segments);
    draw_hud(&mut frame, snap);

    if settings.effective_screen_shake() && snap.shake.is_active() {
        let s = snap.shake.strength as i32;
        frame.offset = Vec2::new(
            rng.random_range(-s..=s) as f32,
            rng.random_range(-s..=s) as f32,
        );
    }

    match snap.screen {
        Screen::Playing => {}
        Screen::Menu => draw_center_panel(
            &mut frame,
            "NEON DRIFT ARENA",
            &[
                "Dodge the drones and collect energy orbs".to_string(),
                "Dashing grants brief invulnerability".to_string(),
                "> ENTER - start".to_string(),
                "> ESC - quit".to_string(),
            ],
            BLUE,
        ),
        Screen::Paused => draw_center_panel(
            &mut frame,
            "PAUSE",
            &[
                "Game paused".to_string(),
                "> P / ENTER - resume".to_string(),
                "> R - restart".to_string(),
                "> ESC - menu".to_string(),
            ],
            YELLOW,
        ),
        Screen::GameOver => draw_center_panel(
            &mut frame,
            "GAME OVER",
            &[
                format!("Score: {}", snap.score),
                format!("Best: {}", snap.best_score),
                "> ENTER - play again".to_string(),
                "> ESC - menu".to_string(),
            ],
            RED,
        ),
    }

    frame
}

/// Scrolling grid plus static diagonals
fn draw_background(out: &mut Vec<Vertex>, grid_offset: f32) {
    let grid = opaque(GRID_COLOR);
    let ox = (grid_offset as i32).rem_euclid(GRID_SPACING as i32) as f32;
    let oy = ((grid_offset * 0.6) as i32).rem_euclid(GRID_SPACING as i32) as f32;

    let mut x = -GRID_SPACING;
    while x < WIDTH + GRID_SPACING {
        out.extend(line(
            Vec2::new(x + ox, 0.0),
            Vec2::new(x + ox, HEIGHT),
            1.0,
            grid,
        ));
        x += GRID_SPACING;
    }
    let mut y = -GRID_SPACING;
    while y < HEIGHT + GRID_SPACING {
        out.extend(line(
            Vec2::new(0.0, y + oy),
            Vec2::new(WIDTH, y + oy),
            1.0,
            grid,
        ));
        y += GRID_SPACING;
    }

    let diagonal = opaque(DIAGONAL_COLOR);
    let mut i = 0.0;
    while i < WIDTH {
        out.extend(line(
            Vec2::new(i, 0.0),
            Vec2::new(i - 180.0, HEIGHT),
            1.0,
            diagonal,
        ));
        i += 120.0;
    }
}

fn draw_entities(out: &mut Vec<Vertex>, snap: &Snapshot, settings: &Settings, segments: u32) {
    // Orbs: pulsing body with a soft glow
    for orb in snap.orbs {
        let r = (orb.radius * orb.pulse()).floor();
        out.extend(circle(orb.pos, r + 10.0, rgba(GREEN, 90.0 / 255.0), segments));
        out.extend(circle(orb.pos, r, opaque(GREEN), segments));
        out.extend(circle(orb.pos, (r - 5.0).max(2.0), opaque(WHITE), segments));
    }

    // Drones: glow, body, dark core, three spinning blades
    for enemy in snap.enemies {
        let r = enemy.radius;
        out.extend(circle(enemy.pos, r + 8.0, rgba(enemy.color, 80.0 / 255.0), segments));
        out.extend(circle(enemy.pos, r, opaque(enemy.color), segments));
        out.extend(circle(enemy.pos, (r - 5.0).max(2.0), opaque(ENEMY_CORE), segments));
        for i in 0..3 {
            let ang = enemy.angle + i as f32 * std::f32::consts::TAU / 3.0;
            let p1 = enemy.pos + crate::direction_from_angle(ang) * (r - 2.0);
            let p2 = enemy.pos + crate::direction_from_angle(ang + 0.35) * 6.0;
            out.extend(line(p1, p2, 2.0, opaque(WHITE)));
        }
    }

    if settings.particles {
        for p in snap.particles.iter().filter(|p| p.is_alive()) {
            let fade = p.fade();
            let r = (p.radius * (0.6 + fade)).floor().max(1.0);
            out.extend(circle(p.pos, r, rgba(p.color, 170.0 / 255.0 * fade), segments / 2));
        }
    }

    // Player: glow brightens and body turns yellow while invulnerable
    let player = snap.player;
    let invulnerable = !player.can_be_hit();
    let pulse = 0.8 + 0.2 * (snap.time_alive * 10.0).sin();
    let glow_alpha = (if invulnerable { 150.0 } else { 90.0 }) / 255.0 * pulse;
    let body = if invulnerable { YELLOW } else { BLUE };
    out.extend(circle(player.pos, player.radius + 10.0, rgba(PLAYER_GLOW, glow_alpha), segments));
    out.extend(circle(player.pos, player.radius, opaque(body), segments));
    out.extend(circle(player.pos, player.radius - 6.0, opaque(WHITE), segments));
    let nose = player.pos + player.dash_direction * (player.radius + 6.0);
    out.extend(line(player.pos, nose, 3.0, opaque(body)));
}

fn draw_hud(frame: &mut Frame, snap: &Snapshot) {
    let panel_pos = Vec2::new(12.0, 12.0);
    let panel_size = Vec2::new(WIDTH - 24.0, 78.0);
    frame.world.extend(rect(panel_pos, panel_size, opaque(PANEL)));
    frame.world.extend(rect_outline(panel_pos, panel_size, 2.0, opaque(PANEL_BORDER)));

    let texts = &mut frame.world_text;
    texts.push(TextItem::new(
        format!("SCORE: {}", snap.score),
        Vec2::new(26.0, 22.0),
        TextSize::Ui,
        WHITE,
    ));
    texts.push(TextItem::new(
        format!("BEST: {}", snap.best_score),
        Vec2::new(28.0, 55.0),
        TextSize::Small,
        MUTED,
    ));
    texts.push(TextItem::new(
        format!("TIME: {:05.1}s", snap.time_alive),
        Vec2::new(180.0, 55.0),
        TextSize::Small,
        MUTED,
    ));
    texts.push(TextItem::new(
        format!("LVL {}", snap.difficulty_level),
        Vec2::new(WIDTH - 190.0, 22.0),
        TextSize::Ui,
        YELLOW,
    ));
    texts.push(TextItem::centered(
        HINT,
        Vec2::new(WIDTH / 2.0, 55.0),
        TextSize::Small,
        MUTED,
    ));
    if snap.show_combo() {
        texts.push(TextItem::centered(
            format!("COMBO x{}", snap.combo),
            Vec2::new(WIDTH / 2.0, 102.0),
            TextSize::Ui,
            GREEN,
        ));
    }

    // Dash readiness bar
    frame.world.extend(rect(DASH_BAR_POS, DASH_BAR_SIZE, opaque(BAR_BG)));
    frame
        .world
        .extend(rect_outline(DASH_BAR_POS, DASH_BAR_SIZE, 1.0, opaque(BAR_BORDER)));
    let fill_w = ((DASH_BAR_SIZE.x - 2.0) * snap.dash_ready).floor();
    if fill_w > 0.0 {
        frame.world.extend(rect(
            DASH_BAR_POS + Vec2::ONE,
            Vec2::new(fill_w, DASH_BAR_SIZE.y - 2.0),
            opaque(BLUE),
        ));
    }
    frame.world_text.push(TextItem::new(
        "Dash",
        DASH_BAR_POS + Vec2::new(0.0, 18.0),
        TextSize::Small,
        MUTED,
    ));
}

/// Dimmed screen with a centered panel, accent bar, title and lines.
/// Lines starting with `>` are key prompts and drawn brighter.
fn draw_center_panel(frame: &mut Frame, title: &str, lines: &[String], accent: Rgb) {
    frame.overlay.extend(rect(
        Vec2::ZERO,
        Vec2::new(WIDTH, HEIGHT),
        [0.0, 0.0, 0.0, 140.0 / 255.0],
    ));

    let size = Vec2::new(620.0, 320.0);
    let pos = ((Vec2::new(WIDTH, HEIGHT) - size) / 2.0).floor();
    frame.overlay.extend(rect(pos, size, opaque(OVERLAY_PANEL)));
    frame.overlay.extend(rect_outline(pos, size, 2.0, opaque(OVERLAY_BORDER)));
    frame
        .overlay
        .extend(rect(pos, Vec2::new(size.x, 6.0), opaque(accent)));

    let center_x = pos.x + size.x / 2.0;
    frame.overlay_text.push(TextItem::centered(
        title,
        Vec2::new(center_x, pos.y + 24.0),
        TextSize::Big,
        WHITE,
    ));

    let mut y = pos.y + 118.0;
    for line in lines {
        let color = if line.starts_with('>') { WHITE } else { MUTED };
        frame.overlay_text.push(TextItem::centered(
            line.as_str(),
            Vec2::new(center_x, y),
            TextSize::Ui,
            color,
        ));
        y += 40.0;
    }
}
