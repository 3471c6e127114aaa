//! Wireframe UV sphere generation
//!
//! A point on the sphere at stack angle φ (π/2 at the north pole down to
//! -π/2) and sector angle θ (0..2π):
//!   x = r·cos φ·cos θ, y = r·sin φ, z = r·cos φ·sin θ
//! with +y as the pole axis.

use std::f32::consts::PI;

use super::vertex::Vertex;

/// Vertices plus line-list indices
#[derive(Debug, Clone)]
pub struct WireMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl WireMesh {
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// Generate a UV sphere as latitude rings and longitude meridians
pub fn wire_sphere(radius: f32, sectors: u32, stacks: u32) -> WireMesh {
    let sectors = sectors.max(3);
    let stacks = stacks.max(2);
    let row = sectors + 1;

    let mut vertices = Vec::with_capacity(((stacks + 1) * row) as usize);
    let sector_step = 2.0 * PI / sectors as f32;
    let stack_step = PI / stacks as f32;

    for i in 0..=stacks {
        let phi = PI / 2.0 - i as f32 * stack_step;
        let ring = phi.cos();
        let y = phi.sin();

        // First and last vertex of each row coincide
        for j in 0..=sectors {
            let theta = j as f32 * sector_step;
            let n = [ring * theta.cos(), y, ring * theta.sin()];
            vertices.push(Vertex::new([n[0] * radius, n[1] * radius, n[2] * radius], n));
        }
    }

    let mut indices = Vec::with_capacity((stacks * sectors * 4) as usize);
    for i in 0..stacks {
        for j in 0..sectors {
            let k1 = i * row + j;
            let k2 = k1 + row;

            // Meridian segment
            indices.push(k1);
            indices.push(k2);

            // Latitude segment (the pole row is a single point)
            if i != 0 {
                indices.push(k1);
                indices.push(k1 + 1);
            }
        }
    }

    WireMesh { vertices, indices }
}
