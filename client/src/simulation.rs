use std::io;

use game_core::{Match, Snapshot};

use crate::clock::FrameClock;
use crate::input::{handle_key_down, handle_key_up, InputEvent, InputSource};
use crate::renderer::{Canvas, Renderer};

pub const CANVAS_COLS: usize = 50;
pub const CANVAS_ROWS: usize = 20;

/// Fixed-rate driver around a [`Match`]
///
/// Each frame: poll input, step the match while it is still playing, draw,
/// then wait out the frame budget. A finished match keeps being drawn until
/// the input source quits, unless `exit_when_ended` is set.
pub struct FrameLoop {
    game: Match,
    input: Box<dyn InputSource>,
    renderer: Box<dyn Renderer>,
    canvas: Canvas,
    clock: Option<FrameClock>,
    frame: u64,
    max_frames: Option<u64>,
    exit_when_ended: bool,
    close_clicked: bool,
}

impl FrameLoop {
    pub fn new(game: Match, input: Box<dyn InputSource>, renderer: Box<dyn Renderer>) -> Self {
        Self {
            game,
            input,
            renderer,
            canvas: Canvas::new(CANVAS_COLS, CANVAS_ROWS),
            clock: Some(FrameClock::new()),
            frame: 0,
            max_frames: None,
            exit_when_ended: false,
            close_clicked: false,
        }
    }

    /// Run as fast as possible instead of at the configured tick rate
    pub fn unthrottled(mut self) -> Self {
        self.clock = None;
        self
    }

    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = Some(max_frames);
        self
    }

    pub fn exit_when_ended(mut self, exit: bool) -> Self {
        self.exit_when_ended = exit;
        self
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn is_running(&self) -> bool {
        if self.close_clicked {
            return false;
        }
        if self.exit_when_ended && !self.game.continue_game() {
            return false;
        }
        self.max_frames.map_or(true, |max| self.frame < max)
    }

    /// Play frames until closed, then return the final state
    pub fn run(&mut self) -> io::Result<Snapshot> {
        tracing::info!(tick_rate = self.game.config().tick_rate, "Frame loop starting");

        while self.is_running() {
            self.run_frame()?;
        }

        let snapshot = self.game.snapshot();
        tracing::info!(
            frames = self.frame,
            ticks = snapshot.tick,
            left = snapshot.score_left,
            right = snapshot.score_right,
            "Frame loop stopped"
        );
        Ok(snapshot)
    }

    /// One frame: input, update, draw, wait
    pub fn run_frame(&mut self) -> io::Result<()> {
        self.handle_events();

        if self.game.continue_game() {
            self.game.step();
            let events = self.game.events();
            if events.any() {
                tracing::trace!(tick = self.game.tick(), ?events, "Tick events");
            }
            if events.match_ended {
                tracing::info!(winner = ?self.game.winner(), "Game over");
            }
        }

        let snapshot = self.game.snapshot();
        self.renderer.draw(&mut self.canvas, &snapshot)?;

        self.frame += 1;
        let tick_rate = self.game.config().tick_rate;
        if is_progress_frame(self.frame, tick_rate) {
            tracing::debug!(frame = self.frame, tick = snapshot.tick, "Game running");
        }

        if let Some(clock) = self.clock.as_mut() {
            clock.tick(tick_rate);
        }
        Ok(())
    }

    fn handle_events(&mut self) {
        for event in self.input.poll(self.frame) {
            let command = match &event {
                InputEvent::Quit => {
                    self.close_clicked = true;
                    None
                }
                InputEvent::KeyDown(key) => handle_key_down(key),
                InputEvent::KeyUp(key) => handle_key_up(key),
            };

            if let Some((side, cmd)) = command {
                tracing::trace!(?side, ?cmd, "Paddle command");
                self.game.command(side, cmd);
            }
        }
    }
}

/// Once a second at the configured rate
fn is_progress_frame(frame: u64, tick_rate: u32) -> bool {
    frame % u64::from(tick_rate.max(1)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedInput;
    use crate::renderer::NullRenderer;
    use game_core::Side;

    fn headless(input: ScriptedInput) -> FrameLoop {
        FrameLoop::new(Match::default(), Box::new(input), Box::new(NullRenderer)).unthrottled()
    }

    #[test]
    fn test_quit_closes_loop() {
        let mut frame_loop = headless(ScriptedInput::default().quit_at(5));

        let snapshot = frame_loop.run().unwrap();

        // Quit is seen at the start of frame 5, which still completes
        assert_eq!(frame_loop.frame(), 6);
        assert_eq!(snapshot.tick, 6);
    }

    #[test]
    fn test_max_frames() {
        let mut frame_loop = headless(ScriptedInput::default()).with_max_frames(10);
        frame_loop.run().unwrap();
        assert_eq!(frame_loop.game().tick(), 10);
    }

    #[test]
    fn test_keys_move_paddles() {
        let input = ScriptedInput::new(vec![
            (0, InputEvent::KeyDown("s".into())),
            (0, InputEvent::KeyDown("p".into())),
            (5, InputEvent::KeyUp("s".into())),
        ]);
        let mut frame_loop = headless(input).with_max_frames(10);

        frame_loop.run().unwrap();

        let game = frame_loop.game();
        assert_eq!(game.paddle(Side::Left).rect().top(), 175.0 + 2.0 * 5.0);
        assert_eq!(game.paddle(Side::Right).rect().top(), 175.0 - 2.0 * 10.0);
    }

    #[test]
    fn test_frozen_match_keeps_rendering() {
        let config = game_core::Config {
            win_threshold: 0,
            ..Default::default()
        };
        let mut frame_loop = FrameLoop::new(
            Match::new(config),
            Box::new(ScriptedInput::default()),
            Box::new(NullRenderer),
        )
        .unthrottled()
        .with_max_frames(200);

        let snapshot = frame_loop.run().unwrap();

        assert_eq!(frame_loop.frame(), 200);
        assert_eq!(snapshot.tick, 147, "Match stopped stepping at the first point");
        assert!(!snapshot.continue_game);
    }

    #[test]
    fn test_exit_when_ended() {
        let config = game_core::Config {
            win_threshold: 0,
            ..Default::default()
        };
        let mut frame_loop = FrameLoop::new(
            Match::new(config),
            Box::new(ScriptedInput::default()),
            Box::new(NullRenderer),
        )
        .unthrottled()
        .exit_when_ended(true);

        frame_loop.run().unwrap();

        assert_eq!(frame_loop.frame(), 147);
    }

    #[test]
    fn test_progress_follows_tick_rate() {
        assert!(is_progress_frame(30, 30));
        assert!(!is_progress_frame(45, 30));
        assert!(is_progress_frame(240, 120));
        assert!(!is_progress_frame(60, 120));
        assert!(is_progress_frame(7, 0), "Zero rate does not divide by zero");
    }
}
