use game_core::{Rect, Snapshot};
use glam::Vec2;

use super::Canvas;

pub const BACKGROUND: char = ' ';
pub const BALL: char = 'O';
pub const PADDLE: char = '#';

/// Arena position of the score text, one per player
pub const SCORE_LEFT_POS: Vec2 = Vec2::new(25.0, 0.0);
pub const SCORE_RIGHT_POS: Vec2 = Vec2::new(450.0, 0.0);

/// Maps arena coordinates onto canvas cells
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub arena: Vec2,
    pub cols: usize,
    pub rows: usize,
}

impl Viewport {
    pub fn new(arena: Vec2, canvas: &Canvas) -> Self {
        Self {
            arena,
            cols: canvas.cols(),
            rows: canvas.rows(),
        }
    }

    /// Arena extent of one canvas cell
    pub fn cell_size(&self) -> Vec2 {
        Vec2::new(
            self.arena.x / self.cols as f32,
            self.arena.y / self.rows as f32,
        )
    }

    /// Cell holding an arena point, clamped onto the canvas
    pub fn to_cell(&self, point: Vec2) -> (usize, usize) {
        let cell = point / self.cell_size();
        let col = (cell.x.max(0.0) as usize).min(self.cols.saturating_sub(1));
        let row = (cell.y.max(0.0) as usize).min(self.rows.saturating_sub(1));
        (col, row)
    }
}

/// Draw one frame of `snapshot` into `canvas`
pub fn draw_frame(canvas: &mut Canvas, snapshot: &Snapshot, arena: Vec2) {
    let view = Viewport::new(arena, canvas);

    // Clear the display surface first
    canvas.fill(BACKGROUND);

    draw_paddle(canvas, &view, &snapshot.paddle_left);
    draw_paddle(canvas, &view, &snapshot.paddle_right);
    draw_ball(canvas, &view, snapshot.ball_center, snapshot.ball_radius);

    let (col, row) = view.to_cell(SCORE_LEFT_POS);
    canvas.put_text(col, row, &snapshot.score_left.to_string());
    let (col, row) = view.to_cell(SCORE_RIGHT_POS);
    canvas.put_text(col, row, &snapshot.score_right.to_string());
}

/// Cells along one axis whose centers fall inside `[lo, hi)`, never empty
fn cell_span(lo: f32, hi: f32, cell: f32, count: usize) -> (usize, usize) {
    let start = ((lo / cell - 0.5).ceil().max(0.0) as usize).min(count.saturating_sub(1));
    let end = ((hi / cell - 0.5).ceil().max(0.0) as usize).min(count);
    (start, end.saturating_sub(start).max(1))
}

fn draw_paddle(canvas: &mut Canvas, view: &Viewport, rect: &Rect) {
    let cell = view.cell_size();
    let (col, width) = cell_span(rect.left(), rect.right(), cell.x, view.cols);
    let (row, height) = cell_span(rect.top(), rect.bottom(), cell.y, view.rows);
    canvas.fill_rect(col, row, width, height, PADDLE);
}

fn draw_ball(canvas: &mut Canvas, view: &Viewport, center: Vec2, radius: f32) {
    let cell = view.cell_size();
    canvas.fill_circle(center / cell, Vec2::splat(radius) / cell, BALL);

    // Always visible, even when smaller than a cell
    let (col, row) = view.to_cell(center);
    canvas.set(col, row, BALL);
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Match;

    fn arena() -> Vec2 {
        Vec2::new(500.0, 400.0)
    }

    #[test]
    fn test_viewport_mapping() {
        let canvas = Canvas::new(50, 20);
        let view = Viewport::new(arena(), &canvas);
        assert_eq!(view.cell_size(), Vec2::new(10.0, 20.0));
        assert_eq!(view.to_cell(Vec2::new(55.0, 200.0)), (5, 10));
        assert_eq!(view.to_cell(Vec2::new(-30.0, 900.0)), (0, 19), "Clamped");
    }

    #[test]
    fn test_draw_initial_frame() {
        let mut canvas = Canvas::new(50, 20);
        let snapshot = Match::default().snapshot();

        draw_frame(&mut canvas, &snapshot, arena());

        // Paddles span y 175..225, which covers rows 9..=10
        assert_eq!(canvas.get(5, 9), Some(PADDLE));
        assert_eq!(canvas.get(5, 10), Some(PADDLE));
        assert_eq!(canvas.get(5, 11), Some(BACKGROUND));
        assert_eq!(canvas.get(44, 10), Some(PADDLE));
        // Ball at (50, 50)
        assert_eq!(canvas.get(5, 2), Some(BALL));
        // Scores
        assert_eq!(canvas.get(2, 0), Some('0'));
        assert_eq!(canvas.get(45, 0), Some('0'));
    }

    #[test]
    fn test_cell_span() {
        // Paddle rows 175..225 at 20 per row: centers 190 and 210
        assert_eq!(cell_span(175.0, 225.0, 20.0, 20), (9, 2));
        // Thinner than a cell still takes one
        assert_eq!(cell_span(52.0, 54.0, 10.0, 50), (5, 1));
        // Off the far edge stays on the canvas
        assert_eq!(cell_span(600.0, 700.0, 10.0, 50), (49, 1));
    }

    #[test]
    fn test_draw_ball_shape() {
        let mut canvas = Canvas::new(50, 20);
        let mut game = Match::default();
        game.set_ball(game_core::Ball::new(
            Vec2::new(250.0, 200.0),
            20.0,
            Vec2::new(3.0, 3.0),
        ));

        draw_frame(&mut canvas, &game.snapshot(), arena());

        // Radius is two columns wide and one row tall
        for col in 23..27 {
            assert_eq!(canvas.get(col, 10), Some(BALL), "col {col}");
        }
        assert_eq!(canvas.get(22, 10), Some(BACKGROUND));
        assert_eq!(canvas.get(27, 10), Some(BACKGROUND));
        assert_eq!(canvas.get(25, 9), Some(BALL));
        assert_eq!(canvas.get(25, 8), Some(BACKGROUND));
    }

    #[test]
    fn test_draw_clears_previous_frame() {
        let mut canvas = Canvas::new(50, 20);
        canvas.fill('x');
        let snapshot = Match::default().snapshot();

        draw_frame(&mut canvas, &snapshot, arena());

        assert_eq!(canvas.get(25, 15), Some(BACKGROUND));
    }
}
