//! # Selection Engine
//!
//! Derives sub-meshes restricted to a subset of vertices or faces while
//! keeping face indices valid and group maps aligned.
//!
//! ## Vertex-based selection
//!
//! Kept vertices come out in ascending original order. A face survives only
//! if every one of its vertices is kept; surviving faces keep their original
//! order. Selecting nothing yields an empty mesh.
//!
//! ## Face-based selection
//!
//! Kept faces come out in selection order. The vertices they reference come
//! out in ascending original order, independent of face traversal.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use polymesh::Mesh;
//!
//! let mesh = Mesh::from_triangles(
//!     vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z],
//!     vec![[0, 1, 2], [0, 2, 3]],
//! )
//! .unwrap();
//!
//! let lower = mesh.keeping_vertices_at_or_below(2, DVec3::ZERO).unwrap();
//! assert_eq!(lower.vertex_count(), 3);
//! assert_eq!(lower.face_count(), 1);
//! ```

pub mod index;

use std::sync::Arc;

use glam::DVec3;

use crate::axis::Axis;
use crate::error::{Dimension, MeshError, MeshResult};
use crate::faces::Faces;
use crate::mesh::Mesh;
use crate::plane::{Classification, Plane};

pub use index::Selection;

// =============================================================================
// PREDICATE PARAMETERS
// =============================================================================

/// Which side of a reference value a vertex must lie on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Greater than the reference (above / in front).
    Positive,
    /// Less than the reference (below / behind).
    Negative,
}

/// Whether a value equal to the reference passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Equality passes (`at_or_*`, `on_or_*`).
    Inclusive,
    /// Equality fails.
    Exclusive,
}

/// Scalar test behind the axis-threshold predicates.
#[inline]
fn passes(value: f64, reference: f64, side: Side, boundary: Boundary) -> bool {
    match (side, boundary) {
        (Side::Positive, Boundary::Inclusive) => value >= reference,
        (Side::Positive, Boundary::Exclusive) => value > reference,
        (Side::Negative, Boundary::Inclusive) => value <= reference,
        (Side::Negative, Boundary::Exclusive) => value < reference,
    }
}

impl Mesh {
    // =========================================================================
    // VERTEX PICKING
    // =========================================================================

    /// Keeps the selected vertices and every face all of whose vertices are
    /// kept.
    ///
    /// Output vertices are in ascending original order for both addressing
    /// modes.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Selection::resolve`].
    pub fn picking_vertices(&self, selection: impl Into<Selection>) -> MeshResult<Mesh> {
        let mut kept = selection
            .into()
            .resolve(Dimension::Vertex, self.vertex_count())?;
        kept.sort_unstable();
        Ok(self.selecting_vertices(&kept))
    }

    /// Keeps the vertices for which `predicate` returns true.
    pub fn keeping_vertices_where(&self, predicate: impl Fn(DVec3) -> bool) -> Mesh {
        let kept: Vec<usize> = self
            .vertices()
            .iter()
            .enumerate()
            .filter_map(|(index, &v)| predicate(v).then_some(index))
            .collect();
        self.selecting_vertices(&kept)
    }

    /// Keeps vertices by comparing coordinate `dim` with `point[dim]`.
    ///
    /// # Errors
    ///
    /// Returns a value-kind error unless `dim` is 0, 1, or 2.
    pub fn keeping_vertices_by_coordinate(
        &self,
        dim: usize,
        point: DVec3,
        side: Side,
        boundary: Boundary,
    ) -> MeshResult<Mesh> {
        let axis = Axis::from_dim(dim)?.index();
        let threshold = point[axis];
        Ok(self.keeping_vertices_where(|v| passes(v[axis], threshold, side, boundary)))
    }

    /// Keeps vertices by which side of `plane` they lie on.
    pub fn keeping_vertices_by_plane(&self, plane: &Plane, side: Side, boundary: Boundary) -> Mesh {
        self.keeping_vertices_where(|v| match plane.classify_point(v) {
            Classification::Front => side == Side::Positive,
            Classification::Back => side == Side::Negative,
            Classification::Coplanar => boundary == Boundary::Inclusive,
        })
    }

    // =========================================================================
    // AXIS THRESHOLDS
    // =========================================================================

    /// Keeps vertices whose coordinate `dim` is greater than `point[dim]`.
    ///
    /// # Errors
    ///
    /// Returns a value-kind error unless `dim` is 0, 1, or 2.
    pub fn keeping_vertices_above(&self, dim: usize, point: DVec3) -> MeshResult<Mesh> {
        self.keeping_vertices_by_coordinate(dim, point, Side::Positive, Boundary::Exclusive)
    }

    /// Keeps vertices whose coordinate `dim` is at least `point[dim]`.
    ///
    /// # Errors
    ///
    /// Returns a value-kind error unless `dim` is 0, 1, or 2.
    pub fn keeping_vertices_at_or_above(&self, dim: usize, point: DVec3) -> MeshResult<Mesh> {
        self.keeping_vertices_by_coordinate(dim, point, Side::Positive, Boundary::Inclusive)
    }

    /// Keeps vertices whose coordinate `dim` is less than `point[dim]`.
    ///
    /// # Errors
    ///
    /// Returns a value-kind error unless `dim` is 0, 1, or 2.
    pub fn keeping_vertices_below(&self, dim: usize, point: DVec3) -> MeshResult<Mesh> {
        self.keeping_vertices_by_coordinate(dim, point, Side::Negative, Boundary::Exclusive)
    }

    /// Keeps vertices whose coordinate `dim` is at most `point[dim]`.
    ///
    /// # Errors
    ///
    /// Returns a value-kind error unless `dim` is 0, 1, or 2.
    pub fn keeping_vertices_at_or_below(&self, dim: usize, point: DVec3) -> MeshResult<Mesh> {
        self.keeping_vertices_by_coordinate(dim, point, Side::Negative, Boundary::Inclusive)
    }

    // =========================================================================
    // PLANES
    // =========================================================================

    /// Keeps vertices strictly in front of `plane`.
    pub fn keeping_vertices_in_front_of_plane(&self, plane: &Plane) -> Mesh {
        self.keeping_vertices_by_plane(plane, Side::Positive, Boundary::Exclusive)
    }

    /// Keeps vertices on or in front of `plane`.
    pub fn keeping_vertices_on_or_in_front_of_plane(&self, plane: &Plane) -> Mesh {
        self.keeping_vertices_by_plane(plane, Side::Positive, Boundary::Inclusive)
    }

    /// Keeps vertices strictly behind `plane`.
    pub fn keeping_vertices_behind_plane(&self, plane: &Plane) -> Mesh {
        self.keeping_vertices_by_plane(plane, Side::Negative, Boundary::Exclusive)
    }

    /// Keeps vertices on or behind `plane`.
    pub fn keeping_vertices_on_or_behind_plane(&self, plane: &Plane) -> Mesh {
        self.keeping_vertices_by_plane(plane, Side::Negative, Boundary::Inclusive)
    }

    // =========================================================================
    // FACE PICKING
    // =========================================================================

    /// Keeps the selected faces, in selection order, and the vertices they
    /// reference, in ascending original order.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Selection::resolve`]; an out-of-range face
    /// index is an index-kind error.
    pub fn picking_faces(&self, selection: impl Into<Selection>) -> MeshResult<Mesh> {
        let kept = selection.into().resolve(Dimension::Face, self.face_count())?;
        Ok(self.selecting_faces(&kept))
    }

    /// Keeps the faces belonging to any of the named face groups.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::UnknownGroup`] for a name that is not a face
    /// group, including when the mesh has no face groups.
    pub fn picking_face_groups<I, S>(&self, names: I) -> MeshResult<Mesh>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names = names.into_iter().peekable();
        let mask = match self.face_groups() {
            Some(groups) => groups.union_mask(names)?,
            None => match names.peek() {
                Some(name) => return Err(MeshError::unknown_group(name.as_ref())),
                None => vec![false; self.face_count()],
            },
        };
        self.picking_faces(Selection::Mask(mask))
    }

    // =========================================================================
    // SHARED ALGORITHMS
    // =========================================================================

    /// Vertex selection over validated, duplicate-free indices.
    fn selecting_vertices(&self, kept: &[usize]) -> Mesh {
        let new_index = self.reindex(kept);
        let faces = self.faces();

        let mut indices = Vec::new();
        let mut kept_faces = Vec::new();
        for (face_index, face) in faces.iter().enumerate() {
            if face.iter().all(|&v| new_index[v as usize].is_some()) {
                indices.extend(face.iter().filter_map(|&v| new_index[v as usize]));
                kept_faces.push(face_index);
            }
        }

        log::trace!(
            "vertex selection kept {}/{} vertices, {}/{} faces",
            kept.len(),
            self.vertex_count(),
            kept_faces.len(),
            self.face_count()
        );

        self.assemble(kept, faces.with_arity_of(indices), &kept_faces)
    }

    /// Face selection over validated, duplicate-free face indices.
    fn selecting_faces(&self, kept_faces: &[usize]) -> Mesh {
        let faces = self.faces();

        let mut referenced = vec![false; self.vertex_count()];
        for face in kept_faces.iter().filter_map(|&f| faces.get(f)) {
            for &v in face {
                referenced[v as usize] = true;
            }
        }
        let kept = index::mask_to_indices(&referenced);
        let new_index = self.reindex(&kept);

        let indices: Vec<u32> = kept_faces
            .iter()
            .filter_map(|&f| faces.get(f))
            .flatten()
            .filter_map(|&v| new_index[v as usize])
            .collect();

        log::trace!(
            "face selection kept {}/{} faces, {}/{} vertices",
            kept_faces.len(),
            self.face_count(),
            kept.len(),
            self.vertex_count()
        );

        self.assemble(&kept, faces.with_arity_of(indices), kept_faces)
    }

    /// Old vertex index to new vertex index; `None` for dropped vertices.
    ///
    /// New indices fit `u32` because `Mesh::new` caps the vertex count.
    fn reindex(&self, kept: &[usize]) -> Vec<Option<u32>> {
        let mut new_index = vec![None; self.vertex_count()];
        for (new, &old) in kept.iter().enumerate() {
            new_index[old] = u32::try_from(new).ok();
        }
        new_index
    }

    /// Builds the derived mesh, remapping both group maps.
    fn assemble(&self, kept_vertices: &[usize], faces: Faces, kept_faces: &[usize]) -> Mesh {
        let vertices: Vec<DVec3> = kept_vertices.iter().map(|&i| self.vertices()[i]).collect();
        let vertex_groups = self
            .vertex_groups()
            .map(|groups| Arc::new(groups.restricted(kept_vertices)));
        let face_groups = self
            .face_groups()
            .map(|groups| Arc::new(groups.restricted(kept_faces)));
        Mesh::from_parts(vertices.into(), Arc::new(faces), vertex_groups, face_groups)
    }
}
