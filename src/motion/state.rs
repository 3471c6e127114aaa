//! Carried motion state

use glam::{Mat4, Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::resize::ResizeGate;
use super::window::WindowTracker;

/// Where the sphere mesh sits and how it is turned
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpherePose {
    /// Planar (x, y) offset in scene units
    pub position: Vec2,
    /// Depth; never written by the motion pipeline
    pub z: f32,
    /// Euler angles in radians (XYZ)
    pub rotation: Vec3,
}

impl Default for SpherePose {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            z: 0.0,
            rotation: Vec3::ZERO,
        }
    }
}

impl SpherePose {
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.position.x, self.position.y, self.z)
    }

    /// Model matrix for the mesh
    pub fn model_matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            glam::EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_rotation_translation(rotation, self.translation())
    }
}

/// Everything the per-frame tick reads and writes
#[derive(Debug, Clone)]
pub struct MotionState {
    pub tracker: WindowTracker,
    /// Last computed target (for logging/inspection)
    pub target: Vec2,
    pub pose: SpherePose,
    pub resize: ResizeGate,
}

impl MotionState {
    pub fn new(window: Vec2) -> Self {
        Self {
            tracker: WindowTracker::new(window),
            target: Vec2::ZERO,
            pose: SpherePose::default(),
            resize: ResizeGate::new(),
        }
    }

    /// Put the sphere back at the origin and forget the window history
    pub fn recenter(&mut self, window: Vec2) {
        self.tracker = WindowTracker::new(window);
        self.target = Vec2::ZERO;
        self.pose.position = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_matrix_translation() {
        let pose = SpherePose {
            position: Vec2::new(3.0, -4.0),
            z: 0.0,
            rotation: Vec3::new(0.3, 0.2, 0.1),
        };
        let m = pose.model_matrix();
        let origin = m.transform_point3(Vec3::ZERO);
        assert!((origin - Vec3::new(3.0, -4.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_recenter() {
        let mut state = MotionState::new(Vec2::new(100.0, 100.0));
        state.pose.position = Vec2::new(50.0, 20.0);
        state.pose.rotation = Vec3::ONE;
        state.recenter(Vec2::new(200.0, 0.0));
        assert_eq!(state.pose.position, Vec2::ZERO);
        assert_eq!(state.pose.rotation, Vec3::ONE);
        assert_eq!(state.tracker.current, Vec2::new(200.0, 0.0));
        assert_eq!(state.tracker.delta(), Vec2::ZERO);
    }
}
