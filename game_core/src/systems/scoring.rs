use crate::{Ball, Config, Events, MatchState, Score, Side};

/// Award a point when the ball center is past a side limit
///
/// The ball is not reset. It is already bouncing back from the side wall,
/// and the point repeats on every tick its center stays past the limit.
pub fn check_scoring(ball: &Ball, config: &Config, score: &mut Score, events: &mut Events) {
    let x = ball.center().x;

    if x < config.wall_margin {
        // Right player scores
        score.increment(Side::Right);
        events.right_scored = true;
        tracing::info!(left = score.left, right = score.right, "Right player scored");
    }
    if x > config.far_limit().x {
        // Left player scores
        score.increment(Side::Left);
        events.left_scored = true;
        tracing::info!(left = score.left, right = score.right, "Left player scored");
    }
}

/// End the match once either score exceeds the threshold
pub fn check_win(score: &Score, config: &Config, state: &mut MatchState, events: &mut Events) {
    if *state == MatchState::Ended {
        return;
    }

    if let Some(winner) = score.has_winner(config.win_threshold) {
        *state = MatchState::Ended;
        events.match_ended = true;
        tracing::info!(
            ?winner,
            left = score.left,
            right = score.right,
            "Match ended"
        );
    }
}
