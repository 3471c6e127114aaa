//! Window position sampling

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Current and previous on-screen position of the host window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowTracker {
    pub current: Vec2,
    pub previous: Vec2,
}

impl WindowTracker {
    pub fn new(initial: Vec2) -> Self {
        Self {
            current: initial,
            previous: initial,
        }
    }

    /// Record a new sample. Returns false (and changes nothing) when the
    /// window has not moved since the last recorded sample.
    pub fn sample(&mut self, screen: Vec2) -> bool {
        if screen == self.current {
            return false;
        }
        self.previous = self.current;
        self.current = screen;
        true
    }

    /// Movement between the last two recorded samples
    pub fn delta(&self) -> Vec2 {
        self.current - self.previous
    }

    /// Adopt `screen` as the current position without producing a delta
    /// on the next sample. Used once a resize settles.
    pub fn rebase(&mut self, screen: Vec2) {
        self.current = screen;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_unchanged_is_noop() {
        let mut tracker = WindowTracker::new(Vec2::new(5.0, 5.0));
        assert!(!tracker.sample(Vec2::new(5.0, 5.0)));
        assert_eq!(tracker.current, Vec2::new(5.0, 5.0));
        assert_eq!(tracker.previous, Vec2::new(5.0, 5.0));
        assert_eq!(tracker.delta(), Vec2::ZERO);
    }

    #[test]
    fn test_sample_shifts_previous() {
        let mut tracker = WindowTracker::new(Vec2::ZERO);
        assert!(tracker.sample(Vec2::new(10.0, 0.0)));
        assert!(tracker.sample(Vec2::new(12.0, 3.0)));
        assert_eq!(tracker.previous, Vec2::new(10.0, 0.0));
        assert_eq!(tracker.delta(), Vec2::new(2.0, 3.0));
    }

    #[test]
    fn test_rebase_keeps_previous() {
        let mut tracker = WindowTracker::new(Vec2::ZERO);
        tracker.sample(Vec2::new(10.0, 10.0));
        tracker.rebase(Vec2::new(40.0, 40.0));
        assert_eq!(tracker.previous, Vec2::ZERO);
        // Sampling the rebased position again is not movement
        assert!(!tracker.sample(Vec2::new(40.0, 40.0)));
    }
}
