//! WebGPU rendering module
//!
//! Draws the sphere as a lit line-list mesh.

pub mod camera;
pub mod pipeline;
pub mod sphere;
pub mod vertex;

pub use camera::Camera;
pub use pipeline::SphereRenderState;
pub use sphere::{WireMesh, wire_sphere};
pub use vertex::Vertex;
