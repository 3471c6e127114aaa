//! Resize debounce
//!
//! A resize raises a flag that keeps the tick from sampling the window.
//! The flag drops once the latest resize's debounce timer fires; older
//! timers are ignored.

use glam::Vec2;

use super::window::WindowTracker;

#[derive(Debug, Clone, Default)]
pub struct ResizeGate {
    active: bool,
    generation: u32,
}

impl ResizeGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether motion is currently suppressed
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start (or restart) a debounce window. Returns the token the timer
    /// must hand back to `finish`.
    pub fn begin(&mut self) -> u32 {
        self.active = true;
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// End the debounce window started by `generation`, if it is still the
    /// latest one. Rebases the tracker on the settled window position so the
    /// sphere does not jump. Returns whether the gate opened.
    pub fn finish(&mut self, generation: u32, tracker: &mut WindowTracker, screen: Vec2) -> bool {
        if !self.active || generation != self.generation {
            return false;
        }
        self.active = false;
        tracker.rebase(screen);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_finish() {
        let mut gate = ResizeGate::new();
        let mut tracker = WindowTracker::new(Vec2::ZERO);
        assert!(!gate.is_active());

        let token = gate.begin();
        assert!(gate.is_active());
        assert!(gate.finish(token, &mut tracker, Vec2::new(30.0, 40.0)));
        assert!(!gate.is_active());
        assert_eq!(tracker.current, Vec2::new(30.0, 40.0));
    }

    #[test]
    fn test_stale_timer_is_ignored() {
        let mut gate = ResizeGate::new();
        let mut tracker = WindowTracker::new(Vec2::ZERO);

        let first = gate.begin();
        let second = gate.begin();
        assert!(!gate.finish(first, &mut tracker, Vec2::new(1.0, 1.0)));
        assert!(gate.is_active());
        assert_eq!(tracker.current, Vec2::ZERO);

        assert!(gate.finish(second, &mut tracker, Vec2::new(2.0, 2.0)));
        assert!(!gate.is_active());
    }

    #[test]
    fn test_finish_twice() {
        let mut gate = ResizeGate::new();
        let mut tracker = WindowTracker::new(Vec2::ZERO);
        let token = gate.begin();
        assert!(gate.finish(token, &mut tracker, Vec2::ZERO));
        assert!(!gate.finish(token, &mut tracker, Vec2::ONE));
        assert_eq!(tracker.current, Vec2::ZERO);
    }
}
