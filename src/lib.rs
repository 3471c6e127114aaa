//! Window Sphere - a wireframe sphere that drifts as the browser window moves
//!
//! Core modules:
//! - `motion`: Window tracking and the window-to-sphere motion mapping
//! - `scene`: Scene presets (camera, material, light, rotation)
//! - `renderer`: WebGPU rendering pipeline
//! - `frame`: Animation-frame timing
//! - `settings`: User preferences persisted to LocalStorage

pub mod error;
pub mod frame;
pub mod motion;
pub mod renderer;
pub mod scene;
pub mod settings;

pub use error::DemoError;
pub use frame::FrameClock;
pub use scene::{SceneConfig, ScenePreset};
pub use settings::Settings;

/// Demo configuration constants
pub mod consts {
    /// Longest frame step fed into the motion integrator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Damping divisor bounds (higher = slower sphere)
    pub const MIN_DAMPING: f32 = 0.3;
    pub const MAX_DAMPING: f32 = 1.0;
    pub const DEFAULT_DAMPING: f32 = 0.8;

    /// Default resize debounce before motion resumes
    pub const RESIZE_DEBOUNCE_MS: u32 = 10;

    /// Orthographic frustum is window size divided by this on each side
    pub const ORTHO_DIVISOR: f32 = 3.0;
    pub const CAMERA_NEAR: f32 = 0.1;
    pub const CAMERA_FAR: f32 = 1000.0;

    /// Sphere tessellation
    pub const SPHERE_SECTORS: u32 = 64;
    pub const SPHERE_STACKS: u32 = 32;
}

/// Parse a `0xRRGGBB` color into linear-ish RGBA floats
#[inline]
pub fn hex_color(rgb: u32) -> [f32; 4] {
    [
        ((rgb >> 16) & 0xff) as f32 / 255.0,
        ((rgb >> 8) & 0xff) as f32 / 255.0,
        (rgb & 0xff) as f32 / 255.0,
        1.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color(0x00ff00), [0.0, 1.0, 0.0, 1.0]);
        let c = hex_color(0xc617de);
        assert!((c[0] - 198.0 / 255.0).abs() < 1e-6);
        assert!((c[1] - 23.0 / 255.0).abs() < 1e-6);
        assert!((c[2] - 222.0 / 255.0).abs() < 1e-6);
    }
}
