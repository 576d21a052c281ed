use crate::components::{PaddleCommand, Side};

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Left player score
    pub right: u32, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    /// The side whose score exceeds `threshold`, if any
    pub fn has_winner(&self, threshold: u32) -> Option<Side> {
        if self.left > threshold {
            Some(Side::Left)
        } else if self.right > threshold {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Match lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchState {
    #[default]
    Playing,
    /// Terminal: a score passed the win threshold
    Ended,
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub match_ended: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn any(&self) -> bool {
        self.left_scored
            || self.right_scored
            || self.ball_hit_paddle
            || self.ball_hit_wall
            || self.match_ended
    }
}

/// Pending paddle commands, applied at the start of the next tick
///
/// Commands are state sets, so only the latest one per paddle is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputQueue {
    pub left: Option<PaddleCommand>,
    pub right: Option<PaddleCommand>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_input(&mut self, side: Side, command: PaddleCommand) {
        match side {
            Side::Left => self.left = Some(command),
            Side::Right => self.right = Some(command),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Take the pending commands, leaving the queue empty
    pub fn pop_inputs(&mut self) -> (Option<PaddleCommand>, Option<PaddleCommand>) {
        let taken = std::mem::take(self);
        (taken.left, taken.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Left);
        score.increment(Side::Left);
        score.increment(Side::Right);
        assert_eq!(score.left, 2);
        assert_eq!(score.right, 1);
    }

    #[test]
    fn test_score_has_winner_above_threshold() {
        let mut score = Score::new();
        for _ in 0..11 {
            score.increment(Side::Right);
        }
        assert_eq!(score.has_winner(10), Some(Side::Right));
    }

    #[test]
    fn test_score_no_winner_at_threshold() {
        let mut score = Score::new();
        for _ in 0..10 {
            score.increment(Side::Left);
        }
        assert_eq!(
            score.has_winner(10),
            None,
            "Reaching the threshold is not enough, it must be exceeded"
        );
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events {
            left_scored: true,
            right_scored: true,
            ball_hit_paddle: true,
            ball_hit_wall: true,
            match_ended: true,
        };
        assert!(events.any());
        events.clear();
        assert!(!events.any());
    }

    #[test]
    fn test_input_queue_keeps_latest_command() {
        let mut queue = InputQueue::new();
        queue.push_input(Side::Left, PaddleCommand::Up);
        queue.push_input(Side::Left, PaddleCommand::Down);
        queue.push_input(Side::Right, PaddleCommand::Stop);

        assert_eq!(
            queue.pop_inputs(),
            (Some(PaddleCommand::Down), Some(PaddleCommand::Stop))
        );
        assert!(queue.is_empty(), "Popping drains the queue");
    }
}
