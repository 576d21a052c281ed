//! Frame loop, input mapping and text rendering around `game_core`

pub mod clock;
pub mod input;
pub mod renderer;
pub mod simulation;

pub use clock::FrameClock;
pub use input::{InputEvent, InputSource, ScriptedInput};
pub use renderer::{Canvas, GridRenderer, NullRenderer, Renderer};
pub use simulation::FrameLoop;
