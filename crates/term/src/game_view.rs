//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::theme::{Palette, Theme};
use crate::types::CellKind;

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

/// A lightweight terminal renderer for the maze game.
pub struct GameView {
    /// Maze cell width in terminal columns.
    cell_w: u16,
    /// Maze cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render into an existing framebuffer.
    ///
    /// This is the hot path: callers keep one framebuffer across frames and
    /// it is resized only when the terminal size changes. `bump_flash`
    /// briefly recolors the border after a blocked move; the caller owns the
    /// timing.
    pub fn render_into(
        &self,
        state: &GameState,
        theme: Theme,
        bump_flash: bool,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let pal = theme.palette();
        let text = text_color(&pal);

        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::new(' ', CellStyle::colors(text, pal.bg)));

        let size = state.maze().size() as u16;
        let frame_w = size * self.cell_w + 2;
        let frame_h = size * self.cell_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = if bump_flash {
            CellStyle {
                bold: true,
                ..CellStyle::colors(Rgb::new(255, 92, 92), pal.bg)
            }
        } else {
            CellStyle::colors(pal.accent, pal.bg)
        };
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Maze cells.
        for y in 0..size {
            for x in 0..size {
                match state.maze().cell_or_wall(x as i32, y as i32) {
                    CellKind::Wall => {
                        let style = CellStyle::colors(pal.wall, pal.bg);
                        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
                    }
                    CellKind::Path | CellKind::Start => {
                        let style = CellStyle::colors(pal.path, pal.path);
                        self.fill_cell_rect(fb, start_x, start_y, x, y, ' ', style);
                    }
                    CellKind::Goal => {
                        let style = CellStyle::colors(pal.wall, pal.goal);
                        self.fill_cell_rect(fb, start_x, start_y, x, y, ' ', style);
                        let px = start_x + 1 + x * self.cell_w;
                        let py = start_y + 1 + y * self.cell_h;
                        fb.put_char(px, py, '♥', style);
                    }
                }
            }
        }

        // Player sprite, drawn over whatever cell it stands on.
        let player = state.player();
        if player.x >= 0 && player.y >= 0 {
            let style = CellStyle::colors(pal.player, pal.path);
            self.fill_cell_rect(
                fb,
                start_x,
                start_y,
                player.x as u16,
                player.y as u16,
                '█',
                style,
            );
        }

        self.draw_side_panel(fb, state, theme, &pal, text, viewport, start_x, start_y, frame_w);

        if state.won() {
            self.draw_win_overlay(fb, &pal, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Render into a fresh framebuffer (convenience wrapper for tests).
    pub fn render(
        &self,
        state: &GameState,
        theme: Theme,
        bump_flash: bool,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, theme, bump_flash, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

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

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        theme: Theme,
        pal: &Palette,
        text: Rgb,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 14 {
            return;
        }

        let title = CellStyle {
            bold: true,
            ..CellStyle::colors(pal.accent, pal.bg)
        };
        let label = CellStyle {
            bold: true,
            ..CellStyle::colors(text, pal.bg)
        };
        let value = CellStyle::colors(text, pal.bg);
        let hint = CellStyle { dim: true, ..value };

        let mut y = start_y;
        fb.put_str(panel_x, y, "MISSION: FIND LOVE", title);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "PIXEL MAZE", hint);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "THEME", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, theme.as_str(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SIZE", label);
        y = y.saturating_add(1);
        let size = state.maze().size() as u32;
        let w = fb.put_u32(panel_x, y, size, value);
        fb.put_str(panel_x + w, y, " x ", value);
        fb.put_u32(panel_x + w + 3, y, size, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "KEYS", label);
        y = y.saturating_add(1);
        for line in [
            "arrows/wasd move",
            "n new maze",
            "r replay",
            "t theme",
            "q quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_win_overlay(
        &self,
        fb: &mut FrameBuffer,
        pal: &Palette,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let headline = CellStyle {
            bold: true,
            ..CellStyle::colors(pal.accent, pal.bg)
        };
        let body = CellStyle::colors(text_color(pal), pal.bg);
        let hint = CellStyle { dim: true, ..body };

        let mid_y = start_y.saturating_add(frame_h / 2);
        let lines: [(&str, CellStyle); 3] = [
            ("MISSION COMPLETE!", headline),
            ("you found your way to my heart ♥", body),
            ("r replay · n new maze", hint),
        ];

        for (i, (line, style)) in lines.iter().enumerate() {
            let y = mid_y.saturating_sub(1).saturating_add(i as u16);
            let text_w = line.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            fb.put_str(x, y, line, *style);
        }
    }
}

/// Pick a readable text color against the theme background.
fn text_color(pal: &Palette) -> Rgb {
    let luma = pal.bg.r as u32 * 3 + pal.bg.g as u32 * 6 + pal.bg.b as u32;
    if luma > 1200 {
        Rgb::new(70, 45, 70)
    } else {
        Rgb::new(235, 235, 235)
    }
}
