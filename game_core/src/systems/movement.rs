use crate::{Ball, Config, Events, Paddle};

/// Move ball based on velocity, bouncing off the arena limits
pub fn move_ball(ball: &mut Ball, config: &Config, events: &mut Events) {
    if ball.move_ball(config.wall_margin, config.far_limit()) {
        tracing::debug!(center = ?ball.center, vel = ?ball.vel, "Ball bounced off wall");
        events.ball_hit_wall = true;
    }
}

/// Apply paddle movement based on velocity
pub fn move_paddles(left: &mut Paddle, right: &mut Paddle, config: &Config) {
    left.move_paddle(config.arena_height);
    right.move_paddle(config.arena_height);
}
