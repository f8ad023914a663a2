//! Frame timer for the render loop.

use std::time::{Duration, Instant};

/// Largest delta handed out by [`Timer::delta_secs`].
///
/// A window drag or a debugger pause can stall the loop for seconds; the
/// first frame afterwards would otherwise integrate one enormous step.
pub const MAX_FRAME_DELTA: f32 = 0.25;

/// Measures wall-clock time between frames.
#[derive(Debug)]
pub struct Timer {
    start: Instant,
    last_tick: Instant,
    frames: u64,
}

impl Timer {
    /// Create a new timer, starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            frames: 0,
        }
    }

    /// Total elapsed time since the timer was created or reset.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Elapsed time in seconds since the timer was created or reset.
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed().as_secs_f32()
    }

    /// Time since the last call to `tick()`, counting one frame.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let delta = now - self.last_tick;
        self.last_tick = now;
        self.frames += 1;
        delta
    }

    /// Delta time in seconds since the last tick, clamped to [`MAX_FRAME_DELTA`].
    pub fn delta_secs(&mut self) -> f32 {
        self.tick().as_secs_f32().min(MAX_FRAME_DELTA)
    }

    /// Number of ticks since the timer was created or reset.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Average frames per second since the timer was created or reset.
    pub fn average_fps(&self) -> f32 {
        let secs = self.elapsed_secs();
        if secs > 0.0 {
            self.frames as f32 / secs
        } else {
            0.0
        }
    }

    /// Reset the timer to the current time.
    pub fn reset(&mut self) {
        let now = Instant::now();
        self.start = now;
        self.last_tick = now;
        self.frames = 0;
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_counts_frames() {
        let mut timer = Timer::new();
        timer.tick();
        timer.tick();
        timer.delta_secs();
        assert_eq!(timer.frame_count(), 3);
    }

    #[test]
    fn test_delta_is_clamped() {
        let mut timer = Timer::new();
        if let Some(past) = Instant::now().checked_sub(Duration::from_secs(5)) {
            timer.last_tick = past;
        }
        let dt = timer.delta_secs();
        assert!(dt <= MAX_FRAME_DELTA);
    }

    #[test]
    fn test_reset_clears_frames() {
        let mut timer = Timer::new();
        timer.tick();
        timer.reset();
        assert_eq!(timer.frame_count(), 0);
    }
}
