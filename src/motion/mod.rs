//! Window-to-sphere motion mapping
//!
//! Pure, platform-free logic run once per animation frame:
//! - Sample the window's screen position, short-circuit if unchanged
//! - Re-base a target on the sphere's last position plus the window delta
//! - Decompose into distance/angle, build a velocity vector, integrate
//! - Commit x/y to the sphere pose (z untouched)

pub mod mapping;
pub mod resize;
pub mod state;
pub mod tick;
pub mod window;

pub use mapping::{DistanceAngle, VelocityVector, distance_and_angle, integrate, motion_scale, target_offset};
pub use resize::ResizeGate;
pub use state::{MotionState, SpherePose};
pub use tick::{MotionConfig, TickInput, TickOutcome, spin, tick};
pub use window::WindowTracker;
