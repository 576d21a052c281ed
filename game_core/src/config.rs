use std::path::Path;

use glam::Vec2;
use serde::Deserialize;

use crate::components::Side;
use crate::params::Params;

/// Errors raised while loading or validating a [`Config`]
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read config: {e}"),
            Self::Parse(e) => write!(f, "failed to parse config: {e}"),
            Self::Invalid(reason) => write!(f, "invalid config: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Game configuration
///
/// Every field has a default from [`Params`], so a TOML file only needs the
/// keys it wants to override.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub wall_margin: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_left_x: f32,
    pub paddle_right_x: f32,
    pub paddle_start_y: f32,
    pub ball_radius: f32,
    pub ball_start_x: f32,
    pub ball_start_y: f32,
    pub ball_start_vx: f32,
    pub ball_start_vy: f32,
    pub win_threshold: u32,
    pub tick_rate: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            wall_margin: Params::WALL_MARGIN,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_left_x: Params::PADDLE_LEFT_X,
            paddle_right_x: Params::PADDLE_RIGHT_X,
            paddle_start_y: Params::PADDLE_START_Y,
            ball_radius: Params::BALL_RADIUS,
            ball_start_x: Params::BALL_START_X,
            ball_start_y: Params::BALL_START_Y,
            ball_start_vx: Params::BALL_START_VX,
            ball_start_vy: Params::BALL_START_VY,
            win_threshold: Params::WIN_THRESHOLD,
            tick_rate: Params::TICK_RATE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load config from `path` if it exists, otherwise use defaults.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(cfg) => {
                    tracing::info!(path = %path.display(), "Loaded configuration");
                    cfg
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), "{e}, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                tracing::info!(path = %path.display(), "No config file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("wall_margin", self.wall_margin),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("paddle_left_x", self.paddle_left_x),
            ("paddle_right_x", self.paddle_right_x),
            ("paddle_start_y", self.paddle_start_y),
            ("ball_radius", self.ball_radius),
            ("ball_start_x", self.ball_start_x),
            ("ball_start_y", self.ball_start_y),
            ("ball_start_vx", self.ball_start_vx),
            ("ball_start_vy", self.ball_start_vy),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("{name} must be finite")));
            }
        }

        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_radius", self.ball_radius),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be > 0")));
            }
        }

        if self.paddle_speed < 0.0 {
            return Err(ConfigError::Invalid("paddle_speed must be >= 0".into()));
        }
        if self.wall_margin < 0.0 {
            return Err(ConfigError::Invalid("wall_margin must be >= 0".into()));
        }
        if self.wall_margin * 2.0 >= self.arena_width.min(self.arena_height) {
            return Err(ConfigError::Invalid(
                "wall_margin leaves no playfield".into(),
            ));
        }
        if self.paddle_height > self.arena_height {
            return Err(ConfigError::Invalid(
                "paddle_height must fit inside the arena".into(),
            ));
        }

        let max_paddle_x = self.arena_width - self.paddle_width;
        for (name, x) in [
            ("paddle_left_x", self.paddle_left_x),
            ("paddle_right_x", self.paddle_right_x),
        ] {
            if !(0.0..=max_paddle_x).contains(&x) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be within [0, {max_paddle_x}]"
                )));
            }
        }
        let max_paddle_y = self.arena_height - self.paddle_height;
        if !(0.0..=max_paddle_y).contains(&self.paddle_start_y) {
            return Err(ConfigError::Invalid(format!(
                "paddle_start_y must be within [0, {max_paddle_y}]"
            )));
        }

        if !(0.0..=self.arena_width).contains(&self.ball_start_x)
            || !(0.0..=self.arena_height).contains(&self.ball_start_y)
        {
            return Err(ConfigError::Invalid(
                "ball start must be inside the arena".into(),
            ));
        }

        if self.tick_rate == 0 {
            return Err(ConfigError::Invalid("tick_rate must be > 0".into()));
        }
        Ok(())
    }

    /// Top-left corner of a paddle at match start
    pub fn paddle_origin(&self, side: Side) -> Vec2 {
        match side {
            Side::Left => Vec2::new(self.paddle_left_x, self.paddle_start_y),
            Side::Right => Vec2::new(self.paddle_right_x, self.paddle_start_y),
        }
    }

    /// Far-side bounce limits for the ball center, per axis
    pub fn far_limit(&self) -> Vec2 {
        Vec2::new(
            self.arena_width - self.wall_margin,
            self.arena_height - self.wall_margin,
        )
    }

    pub fn ball_start(&self) -> (Vec2, Vec2) {
        (
            Vec2::new(self.ball_start_x, self.ball_start_y),
            Vec2::new(self.ball_start_vx, self.ball_start_vy),
        )
    }
}
