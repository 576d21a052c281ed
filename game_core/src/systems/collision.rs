use crate::{Ball, Events, Paddle, Side};

/// Check ball contact with the front of either paddle
///
/// Runs on the pre-move center. A ball only bounces off a paddle it is
/// approaching, so a ball still overlapping after the flip is left alone.
/// A ball fast enough to skip over a paddle in one tick is not caught.
pub fn check_collisions(ball: &mut Ball, left: &Paddle, right: &Paddle, events: &mut Events) {
    let center = ball.center();
    let moving = ball.horizontal_sign();

    let hit = if left.rect().contains(center) && moving < 0.0 {
        Some(Side::Left)
    } else if right.rect().contains(center) && moving > 0.0 {
        Some(Side::Right)
    } else {
        None
    };

    if let Some(side) = hit {
        ball.reflect_horizontal(-1.0);
        events.ball_hit_paddle = true;
        tracing::debug!(?side, center = ?center, "Ball hit paddle");
    }
}
