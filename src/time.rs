//! Frame timing for the runner's diagnostics.
//!
//! The simulation itself is frame-based (one step per callback, no delta
//! time), so this clock only measures; it never feeds the physics.
//!
//! ```ignore
//! let mut clock = FrameClock::new();
//! // In the frame callback:
//! if let Some(fps) = clock.tick() {
//!     tracing::debug!(fps, "frame rate");
//! }
//! ```

use std::time::{Duration, Instant};

/// Frame counter with periodic FPS sampling.
#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    last_frame: Instant,
    delta: Duration,
    frame_count: u64,
    fps: f32,
    /// Frame count at last FPS sample.
    sample_frames: u64,
    sample_time: Instant,
    sample_interval: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_interval(Duration::from_millis(500))
    }

    /// Clock producing an FPS sample every `interval`.
    pub fn with_interval(interval: Duration) -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            delta: Duration::ZERO,
            frame_count: 0,
            fps: 0.0,
            sample_frames: 0,
            sample_time: now,
            sample_interval: interval,
        }
    }

    /// Record a frame. Returns a fresh FPS value when a sample interval
    /// has elapsed.
    pub fn tick(&mut self) -> Option<f32> {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> Option<f32> {
        self.delta = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.frame_count += 1;

        let since_sample = now.saturating_duration_since(self.sample_time);
        if since_sample < self.sample_interval || since_sample.is_zero() {
            return None;
        }
        let frames = self.frame_count - self.sample_frames;
        self.fps = frames as f32 / since_sample.as_secs_f32();
        self.sample_frames = self.frame_count;
        self.sample_time = now;
        Some(self.fps)
    }

    /// Frames recorded so far.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Most recent FPS sample.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Time between the last two ticks.
    #[inline]
    pub fn delta(&self) -> Duration {
        self.delta
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clock() {
        let clock = FrameClock::new();
        assert_eq!(clock.frame(), 0);
        assert_eq!(clock.fps(), 0.0);
    }

    #[test]
    fn test_sample_after_interval() {
        let mut clock = FrameClock::with_interval(Duration::from_millis(500));
        let t0 = clock.start;
        for i in 1..30 {
            assert_eq!(clock.tick_at(t0 + Duration::from_millis(i * 16)), None);
        }
        // 30th frame at 480ms: still inside the interval
        assert_eq!(clock.tick_at(t0 + Duration::from_millis(480)), None);
        let fps = clock.tick_at(t0 + Duration::from_millis(500)).expect("sample due");
        assert!((fps - 62.0).abs() < 0.01);
        assert_eq!(clock.frame(), 31);
        assert_eq!(clock.delta(), Duration::from_millis(20));
    }
}
