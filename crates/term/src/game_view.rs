//! GameView: maps a core `Frame` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{get_shape, Frame, ScoreEntry};
use crate::fb::{CellStyle, FrameBuffer};
use crate::palette;
use crate::types::{Rotation, Shape, Status, BOARD_HEIGHT, BOARD_WIDTH, HIDDEN_ROWS, VISIBLE_HEIGHT};

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

/// Host-owned extras drawn next to the board.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hud<'a> {
    /// High scores, best first
    pub scores: &'a [ScoreEntry],
    /// One-line status text such as "saved"
    pub message: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal view of the playfield.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render a frame into an existing framebuffer.
    ///
    /// Only the visible rows are drawn; the hidden spawn rows stay off screen.
    pub fn render_into(&self, frame: &Frame, hud: &Hud<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (VISIBLE_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        self.draw_border(fb, start_x, start_y, frame_w, frame_h, palette::border_style());

        for y in HIDDEN_ROWS..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                let code = frame.board[y as usize][x as usize];
                let style = Shape::from_code(code).map(palette::block_style);
                self.draw_board_cell(fb, start_x, start_y, x as i8, y as i8, style);
            }
        }

        if let Some(active) = frame.active {
            let style = palette::block_style(active.shape);
            for &(x, y) in active.cells.iter() {
                self.draw_board_cell(fb, start_x, start_y, x, y, Some(style));
            }
        }

        self.draw_side_panel(fb, frame, hud, viewport, start_x, start_y, frame_w);

        match frame.status {
            Status::Paused => self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED"),
            Status::GameOver => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER")
            }
            Status::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, frame: &Frame, hud: &Hud<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, hud, viewport, &mut fb);
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

    /// Draw one board square given in board coordinates; hidden rows are skipped.
    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: i8,
        y: i8,
        style: Option<CellStyle>,
    ) {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < HIDDEN_ROWS as i8 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = start_x + 1 + (x as u16) * self.cell_w;
        let py = start_y + 1 + (y as u16 - HIDDEN_ROWS as u16) * self.cell_h;
        match style {
            Some(style) => fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style),
            None => fb.fill_rect(px, py, self.cell_w, self.cell_h, '·', palette::empty_style()),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        frame: &Frame,
        hud: &Hud<'_>,
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
        if panel_w < 12 {
            return;
        }

        let label = palette::label_style();
        let value = palette::value_style();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, frame.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        self.draw_preview(fb, panel_x, y, frame.next);
        y = y.saturating_add(3);

        if let Some(message) = hud.message {
            fb.put_str(panel_x, y, message, value);
        }
        y = y.saturating_add(2);

        if hud.scores.is_empty() {
            return;
        }
        fb.put_str(panel_x, y, "HIGH SCORES", label);
        y = y.saturating_add(1);
        let dim = value.dim();
        for (rank, entry) in hud.scores.iter().enumerate() {
            if y >= viewport.height {
                break;
            }
            fb.put_u32(panel_x, y, (rank as u32) + 1, dim);
            fb.put_u32(panel_x + 3, y, entry.score, value);
            if panel_w >= 20 {
                let name: String = entry.name.chars().take((panel_w - 11) as usize).collect();
                fb.put_str(panel_x + 11, y, &name, dim);
            }
            y = y.saturating_add(1);
        }
    }

    /// Small picture of `shape` in its spawn orientation, two rows tall.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, shape: Shape) {
        let style = palette::block_style(shape);
        for &(dx, dy) in get_shape(shape, Rotation::North).iter() {
            // Spawn offsets span rows -1..=0 for every shape except I (0 only).
            let row = (dy + 1).clamp(0, 1) as u16;
            let col = (dx + 1).max(0) as u16;
            fb.fill_rect(x + col * 2, y + row, 2, 1, '█', style);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y, text, palette::overlay_style());
    }
}
