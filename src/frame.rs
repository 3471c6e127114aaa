//! Animation-frame timing
//!
//! The browser hands each animation-frame callback a high resolution
//! timestamp in milliseconds. Elapsed time is the difference between two
//! consecutive timestamps; the callback is re-registered directly every
//! frame, never through a timer.

use crate::consts::MAX_FRAME_DT;

const FPS_WINDOW: usize = 60;

/// Converts frame timestamps into elapsed seconds and tracks FPS
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_time: Option<f64>,
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    frames_seen: usize,
    fps: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_time: None,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            frames_seen: 0,
            fps: 0,
        }
    }

    /// Record a frame timestamp (ms) and return seconds since the previous one.
    ///
    /// The first frame yields zero. Backwards timestamps yield zero and long
    /// gaps (background tabs) are clamped to `MAX_FRAME_DT`.
    pub fn advance(&mut self, time_ms: f64) -> f32 {
        let elapsed = match self.last_time {
            Some(last) => (((time_ms - last) / 1000.0) as f32).clamp(0.0, MAX_FRAME_DT),
            None => 0.0,
        };
        self.last_time = Some(time_ms);
        self.record(time_ms);
        elapsed
    }

    /// Forget the previous timestamp so the next frame starts from zero
    pub fn reset(&mut self) {
        self.last_time = None;
    }

    /// Frames per second averaged over the last 60 frames
    pub fn fps(&self) -> u32 {
        self.fps
    }

    fn record(&mut self, time_ms: f64) {
        self.frame_times[self.frame_index] = time_ms;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        self.frames_seen = (self.frames_seen + 1).min(FPS_WINDOW);

        if self.frames_seen < 2 {
            return;
        }
        let newest = time_ms;
        let oldest_index = if self.frames_seen < FPS_WINDOW {
            0
        } else {
            self.frame_index
        };
        let span = newest - self.frame_times[oldest_index];
        if span > 0.0 {
            self.fps = (((self.frames_seen - 1) as f64) * 1000.0 / span).round() as u32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(1234.5), 0.0);
    }

    #[test]
    fn test_consecutive_timestamps() {
        let mut clock = FrameClock::new();
        clock.advance(1000.0);
        let dt = clock.advance(1016.0);
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_long_gap_is_clamped() {
        let mut clock = FrameClock::new();
        clock.advance(0.0);
        assert_eq!(clock.advance(5000.0), MAX_FRAME_DT);
    }

    #[test]
    fn test_backwards_time_is_zero() {
        let mut clock = FrameClock::new();
        clock.advance(500.0);
        assert_eq!(clock.advance(400.0), 0.0);
    }

    #[test]
    fn test_reset() {
        let mut clock = FrameClock::new();
        clock.advance(100.0);
        clock.reset();
        assert_eq!(clock.advance(200.0), 0.0);
    }

    #[test]
    fn test_fps_estimate() {
        let mut clock = FrameClock::new();
        for i in 0..120 {
            clock.advance(i as f64 * 1000.0 / 60.0);
        }
        assert_eq!(clock.fps(), 60);
    }
}
