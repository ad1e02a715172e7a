//! Character-grid renderer for terminals and logs
//!
//! Rasterises draw calls into a downscaled grid: one cell covers
//! `SCREEN_WIDTH / cols` by `SCREEN_HEIGHT / rows` pixels and is painted when
//! its centre falls inside a shape.

use std::io::Write;

use super::{Color, Rect, Renderer, SpriteHandle};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

const EMPTY: char = ' ';
const BLOCK: char = '#';
const SPRITE: char = 'O';

pub struct AsciiRenderer {
    cols: usize,
    rows: usize,
    cells: Vec<char>,
    /// Print every N presents (0 = never)
    every: u32,
    presents: u64,
    out: Box<dyn Write>,
}

impl AsciiRenderer {
    pub fn new(cols: usize, rows: usize, every: u32, out: Box<dyn Write>) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            cells: vec![EMPTY; cols * rows],
            every,
            presents: 0,
            out,
        }
    }

    /// 64x18 grid printing to stdout
    pub fn stdout(every: u32) -> Self {
        Self::new(64, 18, every, Box::new(std::io::stdout()))
    }

    /// Current grid, one line per row
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity((self.cols + 1) * self.rows);
        for row in self.cells.chunks(self.cols) {
            text.extend(row.iter());
            text.push('\n');
        }
        text
    }

    fn cell_w(&self) -> i32 {
        (SCREEN_WIDTH / self.cols as i32).max(1)
    }

    fn cell_h(&self) -> i32 {
        (SCREEN_HEIGHT / self.rows as i32).max(1)
    }

    fn paint(&mut self, rect: Rect, ch: char) {
        let (cw, ch_h) = (self.cell_w(), self.cell_h());
        for row in 0..self.rows {
            let cy = row as i32 * ch_h + ch_h / 2;
            for col in 0..self.cols {
                let cx = col as i32 * cw + cw / 2;
                if rect.contains(cx, cy) {
                    self.cells[row * self.cols + col] = ch;
                }
            }
        }
    }
}

impl Renderer for AsciiRenderer {
    fn clear(&mut self, _color: Color) {
        self.cells.fill(EMPTY);
    }

    fn fill_rect(&mut self, rect: Rect, _color: Color) {
        self.paint(rect, BLOCK);
    }

    fn draw_sprite(&mut self, sprite: &SpriteHandle, x: i32, y: i32) {
        let rect = Rect::new(x, y, sprite.width as i32, sprite.height as i32);
        self.paint(rect, SPRITE);
    }

    fn present(&mut self) {
        self.presents += 1;
        if self.every == 0 || !self.presents.is_multiple_of(u64::from(self.every)) {
            return;
        }
        let border = "-".repeat(self.cols);
        let frame = format!("+{border}+\n{}+{border}+\n", self.to_text());
        // Terminal output is best effort, like every other draw call
        if self.out.write_all(frame.as_bytes()).is_err() {
            log::debug!("ASCII frame dropped");
        }
    }
}
