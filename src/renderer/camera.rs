//! Scene camera
//!
//! Looks down -z at the origin with +y up.

use glam::{Mat4, Vec3};

use crate::consts::{CAMERA_FAR, CAMERA_NEAR};
use crate::scene::{Projection, SceneConfig};

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub projection: Projection,
    pub position: Vec3,
    pub near: f32,
    pub far: f32,
    /// Viewport in CSS pixels
    pub viewport: (f32, f32),
}

impl Camera {
    pub fn new(projection: Projection, camera_z: f32, width: f32, height: f32) -> Self {
        Self {
            projection,
            position: Vec3::new(0.0, 0.0, camera_z),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            viewport: (width.max(1.0), height.max(1.0)),
        }
    }

    pub fn for_scene(scene: &SceneConfig, width: f32, height: f32) -> Self {
        Self::new(scene.projection, scene.camera_z, width, height)
    }

    /// Track a new viewport size; the next `view_proj` uses the new frustum
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.viewport = (width, height);
        }
    }

    pub fn aspect(&self) -> f32 {
        self.viewport.0 / self.viewport.1
    }

    /// (left, right, bottom, top) for orthographic projections
    pub fn ortho_bounds(&self) -> Option<(f32, f32, f32, f32)> {
        match self.projection {
            Projection::Orthographic { divisor } => {
                let (w, h) = self.viewport;
                Some((-w / divisor, w / divisor, -h / divisor, h / divisor))
            }
            Projection::Perspective { .. } => None,
        }
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, Vec3::ZERO, Vec3::Y)
    }

    pub fn proj(&self) -> Mat4 {
        match self.projection {
            Projection::Orthographic { divisor } => {
                let (w, h) = self.viewport;
                Mat4::orthographic_rh(
                    -w / divisor,
                    w / divisor,
                    -h / divisor,
                    h / divisor,
                    self.near,
                    self.far,
                )
            }
            Projection::Perspective { fov_y_deg } => {
                Mat4::perspective_rh(fov_y_deg.to_radians(), self.aspect(), self.near, self.far)
            }
        }
    }

    pub fn view_proj(&self) -> Mat4 {
        self.proj() * self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ortho_bounds_follow_viewport() {
        let mut camera = Camera::new(Projection::Orthographic { divisor: 3.0 }, 100.0, 900.0, 600.0);
        assert_eq!(camera.ortho_bounds(), Some((-300.0, 300.0, -200.0, 200.0)));

        camera.resize(1200.0, 300.0);
        assert_eq!(camera.ortho_bounds(), Some((-400.0, 400.0, -100.0, 100.0)));
    }

    #[test]
    fn test_resize_ignores_zero() {
        let mut camera = Camera::new(Projection::Perspective { fov_y_deg: 75.0 }, 50.0, 800.0, 600.0);
        camera.resize(0.0, 600.0);
        assert_eq!(camera.viewport, (800.0, 600.0));
        assert!(camera.ortho_bounds().is_none());
    }

    #[test]
    fn test_ortho_edge_maps_to_ndc_edge() {
        let camera = Camera::new(Projection::Orthographic { divisor: 3.0 }, 100.0, 900.0, 600.0);
        let ndc = camera.view_proj().project_point3(Vec3::new(300.0, 200.0, 0.0));
        assert!((ndc.x - 1.0).abs() < 1e-4);
        assert!((ndc.y - 1.0).abs() < 1e-4);
        assert!(ndc.z >= 0.0 && ndc.z <= 1.0);
    }

    #[test]
    fn test_perspective_center_projects_to_origin() {
        let camera = Camera::new(Projection::Perspective { fov_y_deg: 75.0 }, 50.0, 800.0, 600.0);
        let ndc = camera.view_proj().project_point3(Vec3::ZERO);
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
    }
}
