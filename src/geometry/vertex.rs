//! Vertex type for asteroid meshes

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Position + normal, laid out for direct upload to a vertex buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl MeshVertex {
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.into(),
            normal: normal.into(),
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from(self.position)
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::from(self.normal)
    }
}

/// Colors for game elements
pub mod colors {
    pub const ASTEROID: [f32; 4] = [0.44, 0.44, 0.44, 1.0];
    pub const ASTEROID_RIM: [f32; 4] = [0.25, 0.25, 1.0, 1.0];
    pub const CRAFT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const EXHAUST: [f32; 4] = [1.0, 0.27, 0.0, 1.0];
    pub const BOUNDARY: [f32; 4] = [1.0, 0.0, 0.0, 0.5];
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}
