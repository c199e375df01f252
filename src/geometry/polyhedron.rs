//! Subdivided octahedron, projected onto a sphere
//!
//! Output is a triangle soup (three positions per face, no index buffer), so each
//! face can carry its own flat normal later.

use glam::Vec3;

const OCTAHEDRON_VERTICES: [Vec3; 6] = [
    Vec3::X,
    Vec3::NEG_X,
    Vec3::Y,
    Vec3::NEG_Y,
    Vec3::Z,
    Vec3::NEG_Z,
];

const OCTAHEDRON_FACES: [[usize; 3]; 8] = [
    [0, 2, 4],
    [0, 4, 3],
    [0, 3, 5],
    [0, 5, 2],
    [1, 2, 5],
    [1, 5, 3],
    [1, 3, 4],
    [1, 4, 2],
];

/// Number of triangles produced for a subdivision level
pub fn triangle_count(detail: u32) -> usize {
    let cols = detail as usize + 1;
    OCTAHEDRON_FACES.len() * cols * cols
}

/// Build an octahedron of `radius`, each face split into `(detail + 1)^2` triangles.
///
/// Every vertex lies on the sphere of `radius`. Detail 0 is the plain octahedron.
pub fn octahedron(radius: f32, detail: u32) -> Vec<[Vec3; 3]> {
    let mut triangles = Vec::with_capacity(triangle_count(detail));

    for [a, b, c] in OCTAHEDRON_FACES {
        subdivide_face(
            OCTAHEDRON_VERTICES[a],
            OCTAHEDRON_VERTICES[b],
            OCTAHEDRON_VERTICES[c],
            detail,
            &mut triangles,
        );
    }

    for tri in &mut triangles {
        for v in tri.iter_mut() {
            *v = v.normalize() * radius;
        }
    }

    triangles
}

/// Split one face into a triangular grid of `detail + 1` rows
fn subdivide_face(a: Vec3, b: Vec3, c: Vec3, detail: u32, out: &mut Vec<[Vec3; 3]>) {
    let cols = detail as usize + 1;

    // grid[i] is the row i steps from edge ab toward c, with cols - i + 1 points
    let grid: Vec<Vec<Vec3>> = (0..=cols)
        .map(|i| {
            let t = i as f32 / cols as f32;
            let aj = a.lerp(c, t);
            let bj = b.lerp(c, t);
            let rows = cols - i;
            (0..=rows)
                .map(|j| {
                    if rows == 0 {
                        aj
                    } else {
                        aj.lerp(bj, j as f32 / rows as f32)
                    }
                })
                .collect()
        })
        .collect();

    for i in 0..cols {
        for j in 0..(2 * (cols - i) - 1) {
            let k = j / 2;
            if j % 2 == 0 {
                out.push([grid[i][k + 1], grid[i + 1][k], grid[i][k]]);
            } else {
                out.push([grid[i][k + 1], grid[i + 1][k + 1], grid[i + 1][k]]);
            }
        }
    }
}
