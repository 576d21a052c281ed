use std::time::{Duration, Instant};

/// Frame-rate governor
///
/// `tick` sleeps away whatever is left of the frame budget, so the loop runs
/// at most `fps` frames per second.
#[derive(Debug)]
pub struct FrameClock {
    last_tick: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Wait until the current frame has lasted `1 / fps`, return its length
    pub fn tick(&mut self, fps: u32) -> Duration {
        let budget = frame_budget(fps);
        let elapsed = self.last_tick.elapsed();
        if elapsed < budget {
            std::thread::sleep(budget - elapsed);
        }

        let now = Instant::now();
        let frame_time = now - self.last_tick;
        self.last_tick = now;
        frame_time
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

pub fn frame_budget(fps: u32) -> Duration {
    Duration::from_secs(1) / fps.max(1)
}
