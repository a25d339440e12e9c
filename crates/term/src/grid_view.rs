//! GridView: maps a grid snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O) and renders whatever the snapshot
//! carries: the playing field through a per-kind [`Theme`], a HUD panel
//! for the fields the game actually populates, the message line, and the
//! game-over / victory overlays. An empty snapshot renders an error
//! banner instead of a field.

use arcade_core::Grid;
use arcade_types::EntityKind;

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

const EMPTY_GRID_BANNER: &str = "NO PLAYFIELD - GAME MODULE RETURNED AN EMPTY GRID";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Glyph and style for one entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub ch: char,
    pub style: CellStyle,
}

impl Tile {
    pub const fn new(ch: char, style: CellStyle) -> Self {
        Self { ch, style }
    }
}

/// Per-kind glyph table; every field is public so hosts can restyle
/// individual kinds without rebuilding the table.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub empty: Tile,
    pub wall: Tile,
    pub border: Tile,
    pub player: Tile,
    pub player_head: Tile,
    pub player_body: Tile,
    pub enemy: Tile,
    pub collectible: Tile,
    pub large_collectible: Tile,
    pub projectile: Tile,
    pub hidden: Tile,
}

impl Theme {
    pub fn tile(&self, kind: EntityKind) -> Tile {
        match kind {
            EntityKind::Empty => self.empty,
            EntityKind::Wall => self.wall,
            EntityKind::Border => self.border,
            EntityKind::Player => self.player,
            EntityKind::PlayerHead => self.player_head,
            EntityKind::PlayerBody => self.player_body,
            EntityKind::Enemy => self.enemy,
            EntityKind::Collectible => self.collectible,
            EntityKind::LargeCollectible => self.large_collectible,
            EntityKind::Projectile => self.projectile,
            EntityKind::Hidden => self.hidden,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            empty: Tile::new('·', CellStyle::fg_on_dark(Rgb::new(70, 70, 80)).dim()),
            wall: Tile::new('█', CellStyle::fg_on_dark(Rgb::new(110, 110, 130))),
            border: Tile::new('█', CellStyle::fg_on_dark(Rgb::new(180, 180, 190))),
            player: Tile::new('@', CellStyle::fg_on_dark(Rgb::new(240, 220, 80)).bold()),
            player_head: Tile::new('█', CellStyle::fg_on_dark(Rgb::new(120, 230, 120)).bold()),
            player_body: Tile::new('█', CellStyle::fg_on_dark(Rgb::new(90, 190, 90))),
            enemy: Tile::new('█', CellStyle::fg_on_dark(Rgb::new(230, 90, 90)).bold()),
            collectible: Tile::new('•', CellStyle::fg_on_dark(Rgb::new(240, 180, 80))),
            large_collectible: Tile::new('●', CellStyle::fg_on_dark(Rgb::new(255, 200, 90)).bold()),
            projectile: Tile::new('|', CellStyle::fg_on_dark(Rgb::new(250, 250, 250))),
            hidden: Tile::new(' ', CellStyle::default()),
        }
    }
}

/// Pure view over a grid snapshot.
pub struct GridView {
    /// Field cell width in terminal columns.
    cell_w: u16,
    theme: Theme,
}

impl Default for GridView {
    fn default() -> Self {
        // 2 columns per cell compensates for terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            theme: Theme::default(),
        }
    }
}

impl GridView {
    pub fn new(cell_w: u16, theme: Theme) -> Self {
        Self { cell_w, theme }
    }

    pub fn theme_mut(&mut self) -> &mut Theme {
        &mut self.theme
    }

    /// Render one snapshot into a fresh framebuffer.
    pub fn render(&self, grid: &Grid, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(Cell::default());

        if grid.is_empty() {
            self.draw_centered(&mut fb, viewport.height / 2, EMPTY_GRID_BANNER);
            return fb;
        }

        // Oversized levels saturate instead of wrapping; the framebuffer
        // clips whatever falls outside the viewport anyway.
        let field_w = u16::try_from(grid.width())
            .unwrap_or(u16::MAX)
            .saturating_mul(self.cell_w);
        let field_h = u16::try_from(grid.height()).unwrap_or(u16::MAX);
        let frame_w = field_w.saturating_add(2);
        let frame_h = field_h.saturating_add(2);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_frame(&mut fb, start_x, start_y, frame_w, frame_h);

        for cell in grid.cells() {
            let (Ok(cx), Ok(cy)) = (u16::try_from(cell.x), u16::try_from(cell.y)) else {
                continue;
            };
            let tile = self.theme.tile(cell.kind);
            let px = start_x.saturating_add(1).saturating_add(cx.saturating_mul(self.cell_w));
            let py = start_y.saturating_add(1).saturating_add(cy);
            fb.fill_rect(px, py, self.cell_w, 1, tile.ch, tile.style);
        }

        self.draw_hud(&mut fb, grid, viewport, start_x, start_y, frame_w);

        if grid.has_message() {
            let y = start_y.saturating_add(frame_h);
            self.draw_centered(&mut fb, y, grid.message());
        }

        if grid.flag("VICTORY") {
            self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "VICTORY");
        } else if grid.is_game_over() {
            self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }

        fb
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::fg_on_dark(Rgb::new(200, 200, 200));

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Side panel showing only the HUD fields the game populates.
    fn draw_hud(
        &self,
        fb: &mut FrameBuffer,
        grid: &Grid,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::fg_on_dark(Rgb::new(200, 200, 200));

        let mut y = start_y;
        let mut entry = |fb: &mut FrameBuffer, name: &str, text: String| {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y.saturating_add(1), &text, value);
            y = y.saturating_add(3);
        };

        if grid.has_level() {
            entry(fb, "LEVEL", grid.level().to_string());
        }
        if grid.has_score() {
            entry(fb, "SCORE", grid.score().to_string());
        }
        if grid.has_high_score() {
            entry(fb, "HIGH", grid.high_score().to_string());
        }
        if grid.has_lives() {
            entry(fb, "LIVES", grid.lives().to_string());
        }
        if grid.has_time_left() {
            entry(fb, "TIME", grid.time_left().to_string());
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
        let mid_y = y.saturating_add(h / 2);
        let text_w = text.chars().count() as u16;
        let tx = x.saturating_add(w.saturating_sub(text_w) / 2);
        let style = CellStyle::fg_on_dark(Rgb::new(255, 255, 255)).bold();
        fb.put_str(tx, mid_y, text, style);
    }

    fn draw_centered(&self, fb: &mut FrameBuffer, y: u16, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = fb.width().saturating_sub(text_w) / 2;
        fb.put_str(x, y, text, CellStyle::default().bold());
    }
}
