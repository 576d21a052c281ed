//! Keyboard input handling
//!
//! `w`/`s` drive the left paddle, `p`/`l` the right one. Releasing either
//! key of a pair stops that paddle.

use std::collections::VecDeque;

use game_core::{PaddleCommand, Side};

/// Input events delivered by the windowing layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(String),
    KeyUp(String),
    /// Close box pressed
    Quit,
}

/// Source of input events, polled once per frame
pub trait InputSource {
    fn poll(&mut self, frame: u64) -> Vec<InputEvent>;
}

/// Handle key down event
pub fn handle_key_down(key: &str) -> Option<(Side, PaddleCommand)> {
    match key {
        "w" | "W" => Some((Side::Left, PaddleCommand::Up)),
        "s" | "S" => Some((Side::Left, PaddleCommand::Down)),
        "p" | "P" => Some((Side::Right, PaddleCommand::Up)),
        "l" | "L" => Some((Side::Right, PaddleCommand::Down)),
        _ => None,
    }
}

/// Handle key up event
pub fn handle_key_up(key: &str) -> Option<(Side, PaddleCommand)> {
    match key {
        "w" | "W" | "s" | "S" => Some((Side::Left, PaddleCommand::Stop)),
        "p" | "P" | "l" | "L" => Some((Side::Right, PaddleCommand::Stop)),
        _ => None,
    }
}

/// Replays events at fixed frame numbers
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    events: VecDeque<(u64, InputEvent)>,
}

impl ScriptedInput {
    pub fn new(mut events: Vec<(u64, InputEvent)>) -> Self {
        events.sort_by_key(|(frame, _)| *frame);
        Self {
            events: events.into(),
        }
    }

    /// Append a quit event at `frame`
    pub fn quit_at(mut self, frame: u64) -> Self {
        let idx = self.events.partition_point(|(f, _)| *f <= frame);
        self.events.insert(idx, (frame, InputEvent::Quit));
        self
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, frame: u64) -> Vec<InputEvent> {
        let mut ready = Vec::new();
        while let Some((at, _)) = self.events.front() {
            if *at > frame {
                break;
            }
            if let Some((_, event)) = self.events.pop_front() {
                ready.push(event);
            }
        }
        ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_down_mapping() {
        assert_eq!(handle_key_down("w"), Some((Side::Left, PaddleCommand::Up)));
        assert_eq!(handle_key_down("s"), Some((Side::Left, PaddleCommand::Down)));
        assert_eq!(handle_key_down("P"), Some((Side::Right, PaddleCommand::Up)));
        assert_eq!(handle_key_down("l"), Some((Side::Right, PaddleCommand::Down)));
        assert_eq!(handle_key_down("ArrowUp"), None);
    }

    #[test]
    fn test_key_up_stops_the_pair() {
        assert_eq!(handle_key_up("w"), Some((Side::Left, PaddleCommand::Stop)));
        assert_eq!(handle_key_up("s"), Some((Side::Left, PaddleCommand::Stop)));
        assert_eq!(handle_key_up("p"), Some((Side::Right, PaddleCommand::Stop)));
        assert_eq!(handle_key_up("x"), None);
    }

    #[test]
    fn test_scripted_input_releases_in_order() {
        let mut input = ScriptedInput::new(vec![
            (3, InputEvent::KeyUp("w".into())),
            (1, InputEvent::KeyDown("w".into())),
        ]);

        assert!(input.poll(0).is_empty());
        assert_eq!(input.poll(1), vec![InputEvent::KeyDown("w".into())]);
        assert!(input.poll(2).is_empty());
        assert_eq!(input.poll(5), vec![InputEvent::KeyUp("w".into())]);
        assert!(input.poll(6).is_empty());
    }

    #[test]
    fn test_quit_at() {
        let mut input = ScriptedInput::new(vec![(4, InputEvent::KeyDown("p".into()))]).quit_at(2);

        assert_eq!(input.poll(2), vec![InputEvent::Quit]);
        assert_eq!(input.poll(4), vec![InputEvent::KeyDown("p".into())]);
    }
}
