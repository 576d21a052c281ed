use std::path::PathBuf;

use client::{FrameLoop, GridRenderer, NullRenderer, Renderer, ScriptedInput};
use game_core::{Config, Match};
use glam::Vec2;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "pong.toml";
/// Idle paddles can trade returns forever, so headless runs stop here unless
/// told otherwise
const DEFAULT_HEADLESS_MAX_FRAMES: u64 = 20_000;

struct Args {
    config_path: PathBuf,
    headless: bool,
    max_frames: Option<u64>,
}

impl Args {
    fn frame_limit(&self) -> Option<u64> {
        match self.max_frames {
            Some(max) => Some(max),
            None if self.headless => Some(DEFAULT_HEADLESS_MAX_FRAMES),
            None => None,
        }
    }
}

fn parse_args() -> Args {
    let mut args = Args {
        config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        headless: false,
        max_frames: None,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--headless" => args.headless = true,
            "--config" => match iter.next() {
                Some(path) => args.config_path = PathBuf::from(path),
                None => tracing::warn!("--config needs a path, using {DEFAULT_CONFIG_PATH}"),
            },
            "--max-frames" => match iter.next().map(|n| n.parse::<u64>()) {
                Some(Ok(max)) => args.max_frames = Some(max),
                _ => tracing::warn!("--max-frames needs a frame count, ignoring"),
            },
            other => tracing::warn!("Ignoring unknown argument {other}"),
        }
    }
    args
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args();
    let config = Config::load(&args.config_path);
    if let Err(e) = config.validate() {
        tracing::error!("{e}");
        std::process::exit(1);
    }

    let arena = Vec2::new(config.arena_width, config.arena_height);
    let renderer: Box<dyn Renderer> = if args.headless {
        Box::new(NullRenderer)
    } else {
        // Clear the terminal once; frames then redraw in place
        print!("\x1b[2J");
        Box::new(GridRenderer::new(std::io::stdout(), arena))
    };

    let mut frame_loop = FrameLoop::new(
        Match::new(config),
        Box::new(ScriptedInput::default()),
        renderer,
    )
    .exit_when_ended(true);
    if args.headless {
        frame_loop = frame_loop.unthrottled();
    }
    if let Some(max) = args.frame_limit() {
        frame_loop = frame_loop.with_max_frames(max);
    }

    match frame_loop.run() {
        Ok(snapshot) => {
            if snapshot.continue_game {
                tracing::warn!(
                    frames = frame_loop.frame(),
                    "Frame limit reached before the match ended"
                );
            }
            println!(
                "Final score {} - {} after {} ticks",
                snapshot.score_left, snapshot.score_right, snapshot.tick
            );
        }
        Err(e) => {
            tracing::error!("Rendering failed: {e}");
            std::process::exit(1);
        }
    }
}
