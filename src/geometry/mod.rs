//! Procedural obstacle geometry
//!
//! Pure functions only; nothing here touches simulation state.

pub mod asteroid;
pub mod polyhedron;
pub mod vertex;

pub use asteroid::{AsteroidMesh, AsteroidParams, displace, displacement};
pub use polyhedron::octahedron;
pub use vertex::MeshVertex;
