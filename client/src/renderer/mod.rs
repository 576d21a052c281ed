pub mod canvas;
pub mod draw;

pub use canvas::Canvas;
pub use draw::draw_frame;

use std::io::{self, Write};

use game_core::Snapshot;
use glam::Vec2;

/// Draws match state once per frame
pub trait Renderer {
    fn draw(&mut self, canvas: &mut Canvas, snapshot: &Snapshot) -> io::Result<()>;
}

/// Draws into the canvas and writes it out as text
pub struct GridRenderer<W: Write> {
    out: W,
    arena: Vec2,
    /// Prefix each frame with an ANSI cursor-home so frames overwrite in place
    home_cursor: bool,
}

impl<W: Write> GridRenderer<W> {
    pub fn new(out: W, arena: Vec2) -> Self {
        Self {
            out,
            arena,
            home_cursor: true,
        }
    }

    /// Plain frames, one after another
    pub fn without_cursor_control(mut self) -> Self {
        self.home_cursor = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for GridRenderer<W> {
    fn draw(&mut self, canvas: &mut Canvas, snapshot: &Snapshot) -> io::Result<()> {
        draw_frame(canvas, snapshot, self.arena);

        if self.home_cursor {
            write!(self.out, "\x1b[H")?;
        }
        write!(self.out, "{canvas}")?;
        self.out.flush()
    }
}

/// Renders nothing; for headless runs
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _canvas: &mut Canvas, _snapshot: &Snapshot) -> io::Result<()> {
        Ok(())
    }
}
