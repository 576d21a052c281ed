//! Deterministic two-player Pong simulation
//!
//! [`Match`] owns the ball, both paddles and the score, and advances them
//! one fixed tick at a time. Drawing and input polling live outside this
//! crate; they talk to a match through [`Match::command`] and
//! [`Match::snapshot`].

pub mod components;
pub mod config;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use map::*;
pub use params::*;
pub use resources::*;

use glam::Vec2;
use systems::*;

/// Read-only view of a match, taken between ticks for rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub tick: u64,
    pub ball_center: Vec2,
    pub ball_radius: f32,
    pub paddle_left: Rect,
    pub paddle_right: Rect,
    pub score_left: u32,
    pub score_right: u32,
    pub continue_game: bool,
    pub winner: Option<Side>,
}

/// A single match: one ball, two paddles, two scores
#[derive(Debug, Clone)]
pub struct Match {
    config: Config,
    ball: Ball,
    paddle_left: Paddle,
    paddle_right: Paddle,
    score: Score,
    state: MatchState,
    events: Events,
    input: InputQueue,
    tick: u64,
}

impl Match {
    pub fn new(config: Config) -> Self {
        let (center, vel) = config.ball_start();
        let ball = Ball::new(center, config.ball_radius, vel);
        let paddle_left = Paddle::spawn(Side::Left, &config);
        let paddle_right = Paddle::spawn(Side::Right, &config);

        Self {
            config,
            ball,
            paddle_left,
            paddle_right,
            score: Score::new(),
            state: MatchState::Playing,
            events: Events::new(),
            input: InputQueue::new(),
            tick: 0,
        }
    }

    /// Queue a velocity command for one paddle; applied on the next step
    pub fn command(&mut self, side: Side, command: PaddleCommand) {
        self.input.push_input(side, command);
    }

    pub fn command_left(&mut self, command: PaddleCommand) {
        self.command(Side::Left, command);
    }

    pub fn command_right(&mut self, command: PaddleCommand) {
        self.command(Side::Right, command);
    }

    /// Run one tick of the simulation and return the resulting state.
    ///
    /// Once the match has ended this does nothing.
    pub fn step(&mut self) -> MatchState {
        if self.state == MatchState::Ended {
            return self.state;
        }

        self.tick += 1;

        // Clear events at start of tick
        self.events.clear();

        // 1. Ingest inputs (apply to paddle velocities)
        ingest_inputs(&mut self.paddle_left, &mut self.paddle_right, &mut self.input);

        // 2. Ball vs paddles, on the pre-move position
        check_collisions(
            &mut self.ball,
            &self.paddle_left,
            &self.paddle_right,
            &mut self.events,
        );

        // 3. Move ball, then paddles
        move_ball(&mut self.ball, &self.config, &mut self.events);
        move_paddles(&mut self.paddle_left, &mut self.paddle_right, &self.config);

        // 4. Check scoring (ball past a side limit)
        check_scoring(&self.ball, &self.config, &mut self.score, &mut self.events);

        // 5. Check win
        check_win(&self.score, &self.config, &mut self.state, &mut self.events);

        self.state
    }

    pub fn continue_game(&self) -> bool {
        self.state == MatchState::Playing
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            MatchState::Ended => self.score.has_winner(self.config.win_threshold),
            MatchState::Playing => None,
        }
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.paddle_left,
            Side::Right => &self.paddle_right,
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Events raised by the most recent step
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick,
            ball_center: self.ball.center(),
            ball_radius: self.ball.radius(),
            paddle_left: self.paddle_left.rect(),
            paddle_right: self.paddle_right.rect(),
            score_left: self.score.left,
            score_right: self.score.right,
            continue_game: self.continue_game(),
            winner: self.winner(),
        }
    }

    /// Place the ball directly, bypassing the simulation
    #[doc(hidden)]
    pub fn set_ball(&mut self, ball: Ball) {
        self.ball = ball;
    }

    /// Overwrite the score, bypassing the simulation
    #[doc(hidden)]
    pub fn set_score(&mut self, score: Score) {
        self.score = score;
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
