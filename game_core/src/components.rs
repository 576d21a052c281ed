use glam::Vec2;

use crate::config::Config;
use crate::map::Rect;

/// Which player a paddle or point belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Tri-state paddle command from the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddleCommand {
    Up,
    Down,
    #[default]
    Stop,
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub center: Vec2,
    pub radius: f32,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(center: Vec2, radius: f32, vel: Vec2) -> Self {
        Self {
            center,
            radius,
            vel,
        }
    }

    /// Advance one tick, bouncing each axis off the arena limits.
    ///
    /// The position is never clamped: a ball past a limit has its velocity
    /// flipped and walks back in on the next tick. Returns true if either
    /// axis bounced.
    pub fn move_ball(&mut self, near: f32, far: Vec2) -> bool {
        let mut bounced = false;
        for axis in 0..2 {
            self.center[axis] += self.vel[axis];
            if self.center[axis] > far[axis] || self.center[axis] < near {
                self.vel[axis] = -self.vel[axis];
                bounced = true;
            }
        }
        bounced
    }

    /// Scale horizontal velocity by `sign`; -1.0 sends the ball back the way it came
    pub fn reflect_horizontal(&mut self, sign: f32) {
        self.vel.x *= sign;
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    /// -1.0 when moving left, 1.0 when moving right, 0.0 when not moving horizontally
    pub fn horizontal_sign(&self) -> f32 {
        if self.vel.x > 0.0 {
            1.0
        } else if self.vel.x < 0.0 {
            -1.0
        } else {
            0.0
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub rect: Rect,
    pub velocity: f32, // Vertical only, positive = down
    pub speed: f32,
}

impl Paddle {
    pub fn new(side: Side, rect: Rect, speed: f32) -> Self {
        Self {
            side,
            rect,
            velocity: 0.0,
            speed,
        }
    }

    /// Build a resting paddle at its configured start position
    pub fn spawn(side: Side, config: &Config) -> Self {
        let origin = config.paddle_origin(side);
        let rect = Rect::new(
            origin.x,
            origin.y,
            config.paddle_width,
            config.paddle_height,
        );
        Self::new(side, rect, config.paddle_speed)
    }

    pub fn set_velocity(&mut self, command: PaddleCommand) {
        self.velocity = match command {
            PaddleCommand::Up => -self.speed,
            PaddleCommand::Down => self.speed,
            PaddleCommand::Stop => 0.0,
        };
    }

    /// Translate by the current velocity, then pin inside `[0, arena_height]`
    pub fn move_paddle(&mut self, arena_height: f32) {
        self.rect.move_by(0.0, self.velocity);

        if self.rect.bottom() > arena_height {
            self.rect.set_bottom(arena_height);
        }
        if self.rect.top() < 0.0 {
            self.rect.set_top(0.0);
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }
}
