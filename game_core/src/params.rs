/// Game tuning parameters for Pong
///
/// Units are pixels and ticks: velocities are applied once per tick, not
/// scaled by elapsed time.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 500.0;
    pub const ARENA_HEIGHT: f32 = 400.0;
    pub const WALL_MARGIN: f32 = 10.0; // Ball bounces/scores this far from an edge

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 50.0;
    pub const PADDLE_SPEED: f32 = 2.0; // units per tick
    pub const PADDLE_LEFT_X: f32 = 50.0;
    pub const PADDLE_RIGHT_X: f32 = 440.0;
    pub const PADDLE_START_Y: f32 = 175.0; // Top edge

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_X: f32 = 50.0;
    pub const BALL_START_Y: f32 = 50.0;
    pub const BALL_START_VX: f32 = 3.0;
    pub const BALL_START_VY: f32 = 3.0;

    // Score
    pub const WIN_THRESHOLD: u32 = 10; // Match ends once a score exceeds this

    // Frame loop
    pub const TICK_RATE: u32 = 60; // Hz
}
