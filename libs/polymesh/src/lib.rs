//! # Polymesh
//!
//! Immutable polygon meshes with group metadata, plus the two engines that
//! derive new meshes from them.
//!
//! ## Architecture
//!
//! ```text
//! Mesh ──selection──▶ sub-mesh (reindexed faces, remapped groups)
//!      ──transform──▶ moved mesh (shared faces and groups)
//! ```
//!
//! - **Mesh**: vertices, uniform-arity faces, optional vertex / face groups
//! - **GroupMap**: named boolean masks over one dimension of a mesh
//! - **Selection**: vertex and face picking, axis thresholds, half-spaces
//! - **Transform**: composable affine transforms, winding flips
//!
//! Every operation returns a new mesh; the input is never modified.
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use polymesh::Mesh;
//!
//! let mesh = Mesh::from_quads(
//!     vec![DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y],
//!     vec![[0, 1, 2, 3]],
//! )
//! .unwrap();
//!
//! let picked = mesh.picking_vertices(vec![0usize, 1]).unwrap();
//! assert_eq!(picked.vertex_count(), 2);
//! assert_eq!(picked.face_count(), 0);
//!
//! let scaled = mesh.uniformly_scaled(10.0);
//! assert!(scaled.shares_faces_with(&mesh));
//! ```

pub mod axis;
pub mod error;
pub mod faces;
pub mod group_map;
pub mod mesh;
pub mod plane;
pub mod selection;
pub mod transform;

#[cfg(test)]
mod test_fixtures;

pub use axis::Axis;
pub use error::{Dimension, ErrorKind, MeshError, MeshResult};
pub use faces::Faces;
pub use group_map::GroupMap;
pub use mesh::Mesh;
pub use plane::{Classification, Plane};
pub use selection::{Boundary, Selection, Side};
pub use transform::Transform;
