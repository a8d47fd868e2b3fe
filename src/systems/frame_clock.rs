//! Frame pacing and FPS measurement
//!
//! Blocks at the end of each frame until the target frame duration has
//! elapsed since the previous tick, capping the render rate, and keeps a
//! rolling frames-per-second measurement over the last ten frames.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Number of recent frames the FPS average is computed over
const FPS_WINDOW: usize = 10;

/// Caps the frame rate and measures FPS
pub struct FrameClock {
    target: Duration,
    last_tick: Instant,
    ticks: VecDeque<Instant>,
}

impl FrameClock {
    /// Create a clock targeting the given frame rate
    pub fn new(target_fps: u32) -> Self {
        Self {
            target: Duration::from_secs_f64(1.0 / target_fps.max(1) as f64),
            last_tick: Instant::now(),
            ticks: VecDeque::with_capacity(FPS_WINDOW + 1),
        }
    }

    /// Block until the target frame duration has elapsed, then record the tick
    ///
    /// Returns the rolling FPS measurement; 0.0 until enough frames have
    /// been observed.
    pub fn tick(&mut self) -> f32 {
        let elapsed = self.last_tick.elapsed();
        if elapsed < self.target {
            std::thread::sleep(self.target - elapsed);
        }

        let now = Instant::now();
        self.last_tick = now;

        self.ticks.push_back(now);
        if self.ticks.len() > FPS_WINDOW + 1 {
            self.ticks.pop_front();
        }
        self.fps()
    }

    /// Rolling average FPS over the last recorded frames
    pub fn fps(&self) -> f32 {
        if self.ticks.len() < 2 {
            return 0.0;
        }
        let span = *self.ticks.back().unwrap() - *self.ticks.front().unwrap();
        if span.is_zero() {
            return 0.0;
        }
        (self.ticks.len() - 1) as f32 / span.as_secs_f32()
    }
}
