//! Per-frame motion update

use glam::{Vec2, Vec3};

use super::mapping::{VelocityVector, distance_and_angle, integrate, target_offset};
use super::state::{MotionState, SpherePose};

/// Tunables for the motion mapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionConfig {
    /// When false the window is still tracked but the sphere never moves
    pub enabled: bool,
    /// Divisor turning scaled distance into speed (higher = slower)
    pub damping: f32,
    /// Multiplier applied to window-space distances
    pub scale: f32,
}

/// Inputs sampled by the platform layer for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Window position on screen, in CSS pixels
    pub window: Vec2,
    /// Seconds since the previous frame
    pub elapsed: f32,
}

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A resize debounce is pending; nothing sampled
    Suppressed,
    /// Window did not move; nothing recomputed
    Idle,
    /// Sphere position was integrated toward a new target
    Moved,
    /// Motion mapping is turned off for this scene
    Disabled,
}

/// Run the motion pipeline once
pub fn tick(state: &mut MotionState, input: &TickInput, config: &MotionConfig) -> TickOutcome {
    if state.resize.is_active() {
        return TickOutcome::Suppressed;
    }

    if !state.tracker.sample(input.window) {
        return TickOutcome::Idle;
    }

    if !config.enabled {
        log::debug!("Window moved to ({}, {})", input.window.x, input.window.y);
        return TickOutcome::Disabled;
    }

    let from = state.pose.position;
    let target = target_offset(from, state.tracker.delta());
    state.target = target;

    let decomp = distance_and_angle(from, target, config.scale);
    let velocity = VelocityVector::damped(decomp, config.damping);
    state.pose.position = integrate(from, velocity, input.elapsed);

    log::trace!(
        "target=({:.2}, {:.2}) dist={:.2} angle={:.1} pos=({:.2}, {:.2})",
        target.x,
        target.y,
        decomp.distance,
        decomp.angle,
        state.pose.position.x,
        state.pose.position.y
    );

    TickOutcome::Moved
}

/// Advance the sphere's rotation by one frame's step
pub fn spin(pose: &mut SpherePose, step: Vec3) {
    pose.rotation += step;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::motion_scale;

    fn config() -> MotionConfig {
        MotionConfig {
            enabled: true,
            damping: 0.8,
            scale: motion_scale(70.0),
        }
    }

    #[test]
    fn test_target_matches_window_delta() {
        let mut state = MotionState::new(Vec2::ZERO);
        let input = TickInput {
            window: Vec2::new(10.0, 0.0),
            elapsed: 0.016,
        };
        assert_eq!(tick(&mut state, &input, &config()), TickOutcome::Moved);
        assert_eq!(state.target, Vec2::new(10.0, 0.0));
        assert!(state.pose.position.x > 0.0);
        assert!(state.pose.position.y.abs() < 1e-5);
    }

    #[test]
    fn test_unchanged_window_short_circuits() {
        let mut state = MotionState::new(Vec2::new(100.0, 100.0));
        state.pose.position = Vec2::new(4.0, 2.0);
        state.target = Vec2::new(-1.0, -1.0);
        let input = TickInput {
            window: Vec2::new(100.0, 100.0),
            elapsed: 0.5,
        };
        assert_eq!(tick(&mut state, &input, &config()), TickOutcome::Idle);
        assert_eq!(state.pose.position, Vec2::new(4.0, 2.0));
        assert_eq!(state.target, Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn test_zero_elapsed_keeps_position() {
        let mut state = MotionState::new(Vec2::ZERO);
        let input = TickInput {
            window: Vec2::new(300.0, -120.0),
            elapsed: 0.0,
        };
        assert_eq!(tick(&mut state, &input, &config()), TickOutcome::Moved);
        assert_eq!(state.pose.position, Vec2::ZERO);
    }

    #[test]
    fn test_window_moving_down_moves_sphere_down() {
        let mut state = MotionState::new(Vec2::ZERO);
        let input = TickInput {
            window: Vec2::new(0.0, 10.0),
            elapsed: 0.016,
        };
        tick(&mut state, &input, &config());
        assert!(state.pose.position.y < 0.0);
        assert!(state.pose.position.x.abs() < 1e-4);
    }

    #[test]
    fn test_integration_step_size() {
        // 10px right, scale 35, damping 0.8 -> 437.5 units/s
        let mut state = MotionState::new(Vec2::ZERO);
        let input = TickInput {
            window: Vec2::new(10.0, 0.0),
            elapsed: 0.1,
        };
        tick(&mut state, &input, &config());
        assert!((state.pose.position.x - 43.75).abs() < 1e-3);
    }

    #[test]
    fn test_resize_suppresses_motion() {
        let mut state = MotionState::new(Vec2::ZERO);
        let token = state.resize.begin();
        let input = TickInput {
            window: Vec2::new(50.0, 50.0),
            elapsed: 0.016,
        };
        assert_eq!(tick(&mut state, &input, &config()), TickOutcome::Suppressed);
        assert_eq!(state.pose.position, Vec2::ZERO);
        assert_eq!(state.tracker.current, Vec2::ZERO);

        // Window settled at (50, 50): no jump once the gate opens
        let MotionState { resize, tracker, .. } = &mut state;
        assert!(resize.finish(token, tracker, Vec2::new(50.0, 50.0)));
        assert_eq!(tick(&mut state, &input, &config()), TickOutcome::Idle);
        assert_eq!(state.pose.position, Vec2::ZERO);
    }

    #[test]
    fn test_disabled_tracks_but_does_not_move() {
        let mut state = MotionState::new(Vec2::ZERO);
        let cfg = MotionConfig {
            enabled: false,
            ..config()
        };
        let input = TickInput {
            window: Vec2::new(25.0, 5.0),
            elapsed: 0.016,
        };
        assert_eq!(tick(&mut state, &input, &cfg), TickOutcome::Disabled);
        assert_eq!(state.tracker.current, Vec2::new(25.0, 5.0));
        assert_eq!(state.pose.position, Vec2::ZERO);
    }

    #[test]
    fn test_spin() {
        let mut pose = SpherePose::default();
        spin(&mut pose, Vec3::splat(0.005));
        spin(&mut pose, Vec3::splat(0.005));
        assert!((pose.rotation.x - 0.01).abs() < 1e-6);
        assert!((pose.rotation.z - 0.01).abs() < 1e-6);
        assert_eq!(pose.position, Vec2::ZERO);
    }
}
