//! Sphere mesh shared by every instance.
//!
//! One UV sphere is built at startup and drawn `count` times per frame with
//! per-instance transforms. Radius 1 with 32 sectors and 32 stacks is smooth
//! enough at the largest on-screen scale.

use bytemuck::{Pod, Zeroable};
use std::f32::consts::PI;

/// Mesh vertex: object-space position plus outward unit normal.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Indexed triangle mesh of a UV sphere.
pub struct SphereMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl SphereMesh {
    /// Build a UV sphere of the given radius with `sectors` longitudinal and
    /// `stacks` latitudinal subdivisions.
    pub fn uv_sphere(radius: f32, sectors: u32, stacks: u32) -> Self {
        let mut vertices = Vec::with_capacity(((stacks + 1) * (sectors + 1)) as usize);

        for stack in 0..=stacks {
            // From +Y pole (phi = pi/2) down to -Y pole.
            let phi = PI / 2.0 - stack as f32 * PI / stacks as f32;
            let xz = phi.cos();
            let y = phi.sin();

            for sector in 0..=sectors {
                let theta = sector as f32 * 2.0 * PI / sectors as f32;
                let x = xz * theta.cos();
                let z = xz * theta.sin();

                vertices.push(Vertex {
                    position: [radius * x, radius * y, radius * z],
                    normal: [x, y, z],
                });
            }
        }

        let mut indices = Vec::with_capacity((sectors * (stacks - 1) * 6) as usize);
        for stack in 0..stacks {
            let ring = stack * (sectors + 1);
            let next_ring = ring + sectors + 1;

            for sector in 0..sectors {
                // Two CCW triangles per quad, skipping the degenerate ones
                // that collapse onto the poles.
                if stack != 0 {
                    indices.push(ring + sector);
                    indices.push(ring + sector + 1);
                    indices.push(next_ring + sector);
                }
                if stack != stacks - 1 {
                    indices.push(ring + sector + 1);
                    indices.push(next_ring + sector + 1);
                    indices.push(next_ring + sector);
                }
            }
        }

        Self { vertices, indices }
    }

    /// Sphere used by the demo: radius 1, 32 x 32 subdivisions.
    pub fn unit() -> Self {
        Self::uv_sphere(1.0, 32, 32)
    }

    #[inline]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}
