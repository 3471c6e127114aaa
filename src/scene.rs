//! Scene presets
//!
//! Two looks are supported: a plain rotating green sphere, and the
//! orthographic, lit wireframe sphere that follows window movement.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::hex_color;
use crate::motion::{MotionConfig, motion_scale};
use crate::settings::Settings;

/// Which scene to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScenePreset {
    /// Perspective camera, flat green sphere, no window tracking
    Basic,
    /// Orthographic camera, lit wireframe, sphere follows the window
    #[default]
    Tracking,
}

impl ScenePreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenePreset::Basic => "Basic",
            ScenePreset::Tracking => "Tracking",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "basic" => Some(ScenePreset::Basic),
            "tracking" | "track" => Some(ScenePreset::Tracking),
            _ => None,
        }
    }
}

/// Camera projection kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Frustum spans `±viewport / divisor` so the sphere never distorts
    /// away from the center
    Orthographic { divisor: f32 },
    Perspective { fov_y_deg: f32 },
}

/// Surface appearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: [f32; 4],
    /// Color of the part unaffected by light
    pub emissive: [f32; 4],
    /// Highlight color
    pub specular: [f32; 4],
    pub shininess: f32,
    /// Whether lighting applies at all
    pub lit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub position: Vec3,
    pub color: [f32; 4],
    pub intensity: f32,
}

/// Everything needed to build and drive one scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub preset: ScenePreset,
    pub projection: Projection,
    pub camera_z: f32,
    pub sphere_radius: f32,
    pub sectors: u32,
    pub stacks: u32,
    pub material: Material,
    pub light: Option<DirectionalLight>,
    /// Rotation added every frame (radians)
    pub rotation_step: Vec3,
    pub motion: MotionConfig,
    pub clear_color: wgpu::Color,
}

impl SceneConfig {
    pub fn basic() -> Self {
        let radius = 25.0;
        Self {
            preset: ScenePreset::Basic,
            projection: Projection::Perspective { fov_y_deg: 75.0 },
            camera_z: 50.0,
            sphere_radius: radius,
            sectors: SPHERE_SECTORS,
            stacks: SPHERE_STACKS,
            material: Material {
                color: hex_color(0x00ff00),
                emissive: [0.0; 4],
                specular: [0.0; 4],
                shininess: 0.0,
                lit: false,
            },
            light: None,
            rotation_step: Vec3::new(0.01, 0.01, 0.0),
            motion: MotionConfig {
                enabled: false,
                damping: DEFAULT_DAMPING,
                scale: motion_scale(radius),
            },
            clear_color: wgpu::Color::BLACK,
        }
    }

    pub fn tracking() -> Self {
        let camera_z = 100.0;
        // Must stay inside the camera's z distance
        let radius = camera_z * 0.7;
        Self {
            preset: ScenePreset::Tracking,
            projection: Projection::Orthographic {
                divisor: ORTHO_DIVISOR,
            },
            camera_z,
            sphere_radius: radius,
            sectors: SPHERE_SECTORS,
            stacks: SPHERE_STACKS,
            material: Material {
                color: hex_color(0xc617de),
                emissive: hex_color(0x551f5c),
                specular: hex_color(0xb06abe),
                shininess: 30.0,
                lit: true,
            },
            light: Some(DirectionalLight {
                position: Vec3::new(80.0, 10.0, 80.0),
                color: [1.0; 4],
                intensity: 1.5,
            }),
            rotation_step: Vec3::splat(0.005),
            motion: MotionConfig {
                enabled: true,
                damping: DEFAULT_DAMPING,
                scale: motion_scale(radius),
            },
            clear_color: wgpu::Color::BLACK,
        }
    }

    pub fn from_preset(preset: ScenePreset) -> Self {
        match preset {
            ScenePreset::Basic => Self::basic(),
            ScenePreset::Tracking => Self::tracking(),
        }
    }

    /// Preset scene with user settings applied
    pub fn from_settings(settings: &Settings) -> Self {
        let mut scene = Self::from_preset(settings.preset);
        scene.motion.damping = settings.effective_damping();
        if !settings.effective_rotation() {
            scene.rotation_step = Vec3::ZERO;
        }
        scene
    }
}
