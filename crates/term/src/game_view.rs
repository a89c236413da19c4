//! GameView: paints a `GameSnapshot` into a framebuffer.
//!
//! Pure (no I/O), so layouts can be unit-tested cell by cell.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};
use crate::types::{Cell, ColorId, BOARD_HEIGHT, BOARD_WIDTH};

const BLOCK: char = '█';
const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);

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

/// Board layout in terminal cells
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Outer size of the bordered board
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let (frame_w, frame_h) = self.frame_size();
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Cell::Filled(color) => {
                        self.draw_block(fb, origin_x, origin_y, x as u16, y as u16, *color)
                    }
                    Cell::Empty => self.draw_empty(fb, origin_x, origin_y, x as u16, y as u16),
                }
            }
        }

        if let Some(active) = snap.active {
            for (x, y) in active.cells() {
                // Cells above the skyline are not drawn.
                if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                    self.draw_block(fb, origin_x, origin_y, x as u16, y as u16, active.color);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, origin_x + frame_w + 2, origin_y);

        if snap.game_over() {
            self.draw_game_over(fb, snap, origin_x, origin_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let (right, bottom) = (x + w - 1, y + h - 1);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, bottom, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(right, y + dy, '│', style);
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, x: u16, y: u16, color: ColorId) {
        let style = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::from(color), PLAYFIELD_BG)
        };
        self.fill_cell(fb, ox, oy, x, y, BLOCK, style);
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, x: u16, y: u16) {
        let style = CellStyle {
            dim: true,
            ..CellStyle::plain(Rgb::new(90, 90, 100), PLAYFIELD_BG)
        };
        self.fill_cell(fb, ox, oy, x, y, '·', style);
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        ox: u16,
        oy: u16,
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = ox + 1 + x * self.cell_w;
        let py = oy + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) {
        if x.saturating_add(8) > viewport.width {
            return;
        }
        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let rows: [(&str, u32); 3] = [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ];
        for (i, (name, n)) in rows.iter().enumerate() {
            let row = y + i as u16 * 3;
            fb.put_str(x, row, name, label);
            fb.put_u32(x, row + 1, *n, value);
        }
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        ox: u16,
        oy: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let style = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0))
        };
        let mid = oy + frame_h / 2;
        let centered = |text_w: u16| ox + frame_w.saturating_sub(text_w) / 2;

        fb.put_str(centered(9), mid - 1, "GAME OVER", style);

        let digits = digit_count(snap.score);
        let score_x = centered(7 + digits);
        fb.put_str(score_x, mid, "SCORE ", style);
        fb.put_u32(score_x + 6, mid, snap.score, style);

        fb.put_str(centered(11), mid + 1, "R: restart", style);
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_count_matches_decimal_width() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(4_294_967_295), 10);
    }

    #[test]
    fn frame_size_includes_border() {
        assert_eq!(GameView::default().frame_size(), (22, 22));
        assert_eq!(GameView::new(1, 1).frame_size(), (12, 22));
    }
}
