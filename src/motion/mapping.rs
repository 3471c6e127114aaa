//! Distance/angle decomposition, velocity vectors and integration

use glam::Vec2;

/// Distance (already scaled) and direction in degrees between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceAngle {
    pub distance: f32,
    /// Degrees, counter-clockwise from +x, in (-180, 180]
    pub angle: f32,
}

/// Motion scale for a sphere of the given radius.
///
/// A raw pixel delta is far too small to be visible on a sphere tens of
/// units wide, so distances are multiplied by half the radius.
#[inline]
pub fn motion_scale(radius: f32) -> f32 {
    radius / 2.0
}

/// Where the sphere should head this tick: its last position plus the raw
/// window delta. Re-based every tick, never accumulated.
#[inline]
pub fn target_offset(last_position: Vec2, window_delta: Vec2) -> Vec2 {
    last_position + window_delta
}

/// Euclidean distance times `scale`, and the atan2 angle in degrees
pub fn distance_and_angle(from: Vec2, to: Vec2, scale: f32) -> DistanceAngle {
    let d = to - from;
    DistanceAngle {
        distance: d.length() * scale,
        angle: d.y.atan2(d.x).to_degrees(),
    }
}

/// Planar velocity built from a magnitude and an angle in degrees.
///
/// The y component is negated: window coordinates grow downward while
/// scene y grows upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityVector {
    pub x: f32,
    pub y: f32,
}

impl VelocityVector {
    pub fn from_polar(magnitude: f32, angle_deg: f32) -> Self {
        let theta = angle_deg.to_radians();
        Self {
            x: magnitude * theta.cos(),
            y: -magnitude * theta.sin(),
        }
    }

    /// Velocity toward `decomp.angle` at `decomp.distance / damping`
    pub fn damped(decomp: DistanceAngle, damping: f32) -> Self {
        Self::from_polar(decomp.distance / damping, decomp.angle)
    }

    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Advance `position` by `velocity` over `elapsed` seconds
#[inline]
pub fn integrate(position: Vec2, velocity: VelocityVector, elapsed: f32) -> Vec2 {
    if elapsed == 0.0 {
        return position;
    }
    position + velocity.as_vec2() * elapsed
}
