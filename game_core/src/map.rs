use glam::Vec2;

/// Axis-aligned rectangle anchored at its top-left corner
///
/// Y grows downward, so `top` is the smaller edge. Point containment is
/// half-open: a point on the right or bottom edge is outside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Move so the top edge sits at `top`, keeping the size
    pub fn set_top(&mut self, top: f32) {
        self.y = top;
    }

    /// Move so the bottom edge sits at `bottom`, keeping the size
    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.height;
    }

    /// Translate in place
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let rect = Rect::new(50.0, 175.0, 10.0, 50.0);
        assert_eq!(rect.left(), 50.0);
        assert_eq!(rect.right(), 60.0);
        assert_eq!(rect.top(), 175.0);
        assert_eq!(rect.bottom(), 225.0);
    }

    #[test]
    fn test_set_bottom_keeps_height() {
        let mut rect = Rect::new(0.0, 380.0, 10.0, 50.0);
        rect.set_bottom(400.0);
        assert_eq!(rect.top(), 350.0);
        assert_eq!(rect.height, 50.0);
    }

    #[test]
    fn test_contains_is_half_open() {
        let rect = Rect::new(50.0, 175.0, 10.0, 50.0);
        assert!(rect.contains(Vec2::new(50.0, 175.0)), "Top-left corner is inside");
        assert!(rect.contains(Vec2::new(59.9, 224.9)));
        assert!(!rect.contains(Vec2::new(60.0, 200.0)), "Right edge is outside");
        assert!(!rect.contains(Vec2::new(55.0, 225.0)), "Bottom edge is outside");
        assert!(!rect.contains(Vec2::new(49.9, 200.0)));
    }
}
