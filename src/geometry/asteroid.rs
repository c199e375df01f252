//! Rocky asteroid meshes from a displaced octahedron
//!
//! The displacement is a fixed trig noise, so the same parameters always produce the
//! same mesh. Vary [`AsteroidParams`] to get different-looking rocks.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::polyhedron::octahedron;
use super::vertex::MeshVertex;

/// Crater frequency and depth
const CRATER_FREQ: f32 = 15.0;
const CRATER_DEPTH: f32 = 0.3;
/// Ridge frequency and height
const SHARP_FREQ: f32 = 30.0;
const SHARP_HEIGHT: f32 = 0.2;

/// Shape inputs for one asteroid mesh
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AsteroidParams {
    /// Radius of the base octahedron
    pub radius: f32,
    /// Subdivision level of each octahedron face
    pub detail: u32,
    /// Scale on the crater + ridge offset (1.0 = full strength)
    pub amplitude: f32,
}

impl Default for AsteroidParams {
    fn default() -> Self {
        Self {
            radius: 0.8,
            detail: 2,
            amplitude: 1.0,
        }
    }
}

/// Offset added to each coordinate of a vertex at `p`
pub fn displacement(p: Vec3) -> f32 {
    let crater = (p.x * CRATER_FREQ).sin()
        * (p.y * CRATER_FREQ).sin()
        * (p.z * CRATER_FREQ).sin()
        * CRATER_DEPTH;
    let sharp = (p.x * SHARP_FREQ).sin().abs() * (p.y * SHARP_FREQ).sin().abs() * SHARP_HEIGHT;
    crater + sharp
}

/// Move a vertex by its displacement along the (1, 1, 1) diagonal.
///
/// The same offset goes to x, y, and z; it is not projected onto the surface normal.
pub fn displace(p: Vec3, amplitude: f32) -> Vec3 {
    p + Vec3::splat(displacement(p) * amplitude)
}

/// A generated asteroid, ready for upload
#[derive(Debug, Clone, PartialEq)]
pub struct AsteroidMesh {
    pub params: AsteroidParams,
    /// Triangle list, three vertices per face
    pub vertices: Vec<MeshVertex>,
}

impl AsteroidMesh {
    /// Displace every vertex of the base shape, then recompute flat normals
    pub fn generate(params: AsteroidParams) -> Self {
        let base = octahedron(params.radius, params.detail);
        let mut vertices = Vec::with_capacity(base.len() * 3);

        for tri in base {
            let [p1, p2, p3] = tri.map(|p| displace(p, params.amplitude));
            let normal = (p2 - p1).cross(p3 - p1).normalize_or_zero();
            vertices.push(MeshVertex::new(p1, normal));
            vertices.push(MeshVertex::new(p2, normal));
            vertices.push(MeshVertex::new(p3, normal));
        }

        Self { params, vertices }
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.vertices
            .chunks_exact(3)
            .map(|t| [t[0].position(), t[1].position(), t[2].position()])
    }

    /// Raw bytes for a vertex buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Largest distance of any vertex from the origin
    pub fn bounding_radius(&self) -> f32 {
        self.vertices
            .iter()
            .map(|v| v.position().length())
            .fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::polyhedron::triangle_count;
    use proptest::prelude::*;

    #[test]
    fn test_displacement_formula() {
        let p = Vec3::new(0.1, 0.2, 0.3);
        let crater = (1.5f32).sin() * (3.0f32).sin() * (4.5f32).sin() * 0.3;
        let sharp = (3.0f32).sin().abs() * (6.0f32).sin().abs() * 0.2;
        assert!((displacement(p) - (crater + sharp)).abs() < 1e-6);

        let moved = displace(p, 1.0);
        let d = crater + sharp;
        assert!((moved - (p + Vec3::splat(d))).length() < 1e-6);
    }

    #[test]
    fn test_axis_tips_unmoved() {
        // Two zero coordinates zero out both terms
        assert_eq!(displacement(Vec3::new(0.8, 0.0, 0.0)), 0.0);
        assert_eq!(displace(Vec3::new(0.0, 0.0, -0.8), 1.0), Vec3::new(0.0, 0.0, -0.8));
    }

    #[test]
    fn test_zero_amplitude_keeps_sphere() {
        let mesh = AsteroidMesh::generate(AsteroidParams {
            amplitude: 0.0,
            ..Default::default()
        });
        for v in &mesh.vertices {
            assert!((v.position().length() - 0.8).abs() < 1e-5);
        }
    }

    #[test]
    fn test_vertex_count() {
        let mesh = AsteroidMesh::generate(AsteroidParams::default());
        assert_eq!(mesh.vertex_count() as usize, triangle_count(2) * 3);
        assert_eq!(
            mesh.as_bytes().len(),
            mesh.vertices.len() * std::mem::size_of::<MeshVertex>()
        );
    }

    #[test]
    fn test_normals_match_faces() {
        let mesh = AsteroidMesh::generate(AsteroidParams::default());
        for (tri, verts) in mesh.triangles().zip(mesh.vertices.chunks_exact(3)) {
            let n = verts[0].normal();
            assert!(n == Vec3::ZERO || (n.length() - 1.0).abs() < 1e-4);
            // Flat shading: all three corners share the face normal
            assert_eq!(verts[0].normal, verts[1].normal);
            assert_eq!(verts[1].normal, verts[2].normal);
            if n != Vec3::ZERO {
                assert!(n.dot(tri[1] - tri[0]).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_shared_corners_stay_welded() {
        // Displacement depends only on position, so coincident corners still coincide
        let base = octahedron(0.8, 2);
        let mesh = AsteroidMesh::generate(AsteroidParams::default());
        for (i, a) in base.iter().flatten().enumerate() {
            for (j, b) in base.iter().flatten().enumerate().skip(i + 1) {
                if a == b {
                    assert_eq!(mesh.vertices[i].position, mesh.vertices[j].position);
                }
            }
        }
    }

    proptest! {
        #[test]
        fn prop_generation_is_deterministic(
            radius in 0.1f32..3.0,
            detail in 0u32..4,
            amplitude in 0.0f32..2.0,
        ) {
            let params = AsteroidParams { radius, detail, amplitude };
            prop_assert_eq!(AsteroidMesh::generate(params), AsteroidMesh::generate(params));
        }

        #[test]
        fn prop_offset_is_bounded(x in -2.0f32..2.0, y in -2.0f32..2.0, z in -2.0f32..2.0) {
            let d = displacement(Vec3::new(x, y, z));
            prop_assert!((-CRATER_DEPTH..=CRATER_DEPTH + SHARP_HEIGHT).contains(&d));
        }
    }
}
