use std::fmt;

use glam::Vec2;

/// Character-cell drawing target
///
/// The frame loop owns one canvas and hands it to the renderer every frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    cols: usize,
    rows: usize,
    cells: Vec<char>,
}

impl Canvas {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![' '; cols * rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn get(&self, col: usize, row: usize) -> Option<char> {
        (col < self.cols && row < self.rows).then(|| self.cells[row * self.cols + col])
    }

    /// Write one cell; out-of-bounds writes are dropped
    pub fn set(&mut self, col: usize, row: usize, ch: char) {
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col] = ch;
        }
    }

    pub fn fill(&mut self, ch: char) {
        self.cells.fill(ch);
    }

    pub fn fill_rect(&mut self, col: usize, row: usize, width: usize, height: usize, ch: char) {
        for r in row..(row + height).min(self.rows) {
            for c in col..(col + width).min(self.cols) {
                self.set(c, r, ch);
            }
        }
    }

    /// Fill every cell whose center lies inside the ellipse at `center` with
    /// per-axis `radius`, both in cell units
    pub fn fill_circle(&mut self, center: Vec2, radius: Vec2, ch: char) {
        if radius.x <= 0.0 || radius.y <= 0.0 {
            return;
        }
        let min = (center - radius).floor().max(Vec2::ZERO);
        let max = (center + radius).ceil().max(Vec2::ZERO);

        for row in min.y as usize..(max.y as usize).min(self.rows) {
            for col in min.x as usize..(max.x as usize).min(self.cols) {
                let offset = (Vec2::new(col as f32, row as f32) + 0.5 - center) / radius;
                if offset.length_squared() <= 1.0 {
                    self.set(col, row, ch);
                }
            }
        }
    }

    /// Write `text` left to right starting at `(col, row)`, clipped at the edge
    pub fn put_text(&mut self, col: usize, row: usize, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            self.set(col + i, row, ch);
        }
    }

    pub fn row_string(&self, row: usize) -> Option<String> {
        (row < self.rows).then(|| {
            self.cells[row * self.cols..(row + 1) * self.cols]
                .iter()
                .collect()
        })
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            writeln!(f, "{}", self.row_string(row).unwrap_or_default())?;
        }
        Ok(())
    }
}
