//! Shader source and the uniform layout shared with it.

use bytemuck::{Pod, Zeroable};

pub const SHADER_SOURCE: &str = include_str!("shader.wgsl");

/// Uniforms consumed by `shader.wgsl`. Layout must match the WGSL struct.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Uniforms {
    pub view_proj: [[f32; 4]; 4],
    pub eye: [f32; 3],
    pub _padding: f32,
}
