//! # Mesh Data Structure
//!
//! Core immutable mesh: vertex positions, uniform-arity faces and optional
//! vertex / face group maps.
//!
//! Every part sits behind an `Arc`. Operations that leave a part unchanged
//! return a mesh sharing it, so an affine transform never copies the face
//! table or the group maps.

use std::sync::Arc;

use glam::DVec3;

use crate::error::{Dimension, MeshError, MeshResult};
use crate::faces::Faces;
use crate::group_map::GroupMap;

/// An immutable polygon mesh.
///
/// All positions are f64. Face indices are validated against the vertex
/// count at construction and stay valid through every derived mesh.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use polymesh::Mesh;
///
/// let mesh = Mesh::from_triangles(
///     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
///     vec![[0, 1, 2]],
/// )
/// .unwrap();
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// assert!(mesh.is_triangles());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex positions; the index is the vertex identifier.
    vertices: Arc<[DVec3]>,
    /// Faces referencing `vertices`.
    faces: Arc<Faces>,
    /// Optional groups over vertices.
    vertex_groups: Option<Arc<GroupMap>>,
    /// Optional groups over faces.
    face_groups: Option<Arc<GroupMap>>,
}

impl Mesh {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Creates a mesh without groups.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::IndexOutOfRange`] if a face references a vertex
    /// that does not exist, or if there are more vertices than 32-bit face
    /// indices can address.
    pub fn new(vertices: Vec<DVec3>, faces: Faces) -> MeshResult<Self> {
        check_vertex_count(vertices.len())?;
        if let Some(max) = faces.max_index() {
            let index = max as usize;
            if index >= vertices.len() {
                return Err(MeshError::index_out_of_range(
                    Dimension::Vertex,
                    index,
                    vertices.len(),
                ));
            }
        }
        Ok(Self::from_parts(vertices.into(), Arc::new(faces), None, None))
    }

    /// Creates a triangle mesh.
    ///
    /// # Errors
    ///
    /// See [`Mesh::new`].
    pub fn from_triangles(vertices: Vec<DVec3>, triangles: Vec<[u32; 3]>) -> MeshResult<Self> {
        Self::new(vertices, Faces::from_triangles(triangles))
    }

    /// Creates a quad mesh.
    ///
    /// # Errors
    ///
    /// See [`Mesh::new`].
    pub fn from_quads(vertices: Vec<DVec3>, quads: Vec<[u32; 4]>) -> MeshResult<Self> {
        Self::new(vertices, Faces::from_quads(quads))
    }

    /// Attaches vertex groups.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::DimensionMismatch`] unless the map covers exactly
    /// the mesh's vertices.
    pub fn with_vertex_groups(mut self, groups: GroupMap) -> MeshResult<Self> {
        check_group_dimension(Dimension::Vertex, &groups, self.vertex_count())?;
        self.vertex_groups = Some(Arc::new(groups));
        Ok(self)
    }

    /// Attaches face groups.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::DimensionMismatch`] unless the map covers exactly
    /// the mesh's faces.
    pub fn with_face_groups(mut self, groups: GroupMap) -> MeshResult<Self> {
        check_group_dimension(Dimension::Face, &groups, self.face_count())?;
        self.face_groups = Some(Arc::new(groups));
        Ok(self)
    }

    /// Assembles a mesh from parts whose consistency the caller guarantees.
    pub(crate) fn from_parts(
        vertices: Arc<[DVec3]>,
        faces: Arc<Faces>,
        vertex_groups: Option<Arc<GroupMap>>,
        face_groups: Option<Arc<GroupMap>>,
    ) -> Self {
        debug_assert!(faces.max_index().map_or(true, |max| (max as usize) < vertices.len()));
        Self {
            vertices,
            faces,
            vertex_groups,
            face_groups,
        }
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Returns the vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the face table.
    #[inline]
    pub fn faces(&self) -> &Faces {
        &self.faces
    }

    /// Returns the vertex groups, if any.
    #[inline]
    pub fn vertex_groups(&self) -> Option<&GroupMap> {
        self.vertex_groups.as_deref()
    }

    /// Returns the face groups, if any.
    #[inline]
    pub fn face_groups(&self) -> Option<&GroupMap> {
        self.face_groups.as_deref()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices per face.
    #[inline]
    pub fn arity(&self) -> usize {
        self.faces.arity()
    }

    /// Returns true for a triangle mesh.
    pub fn is_triangles(&self) -> bool {
        self.arity() == config::constants::TRIANGLE_ARITY
    }

    /// Returns true for a quad mesh.
    pub fn is_quads(&self) -> bool {
        self.arity() == config::constants::QUAD_ARITY
    }

    /// Returns the vertex indices of a face.
    #[inline]
    pub fn face(&self, index: usize) -> Option<&[u32]> {
        self.faces.get(index)
    }

    /// Returns the vertex positions of a face, in winding order.
    pub fn face_vertices(&self, index: usize) -> Option<Vec<DVec3>> {
        self.face(index)
            .map(|face| face.iter().map(|&v| self.vertices[v as usize]).collect())
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box, or zero corners for
    /// an empty mesh.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        let mut min = *first;
        let mut max = *first;

        for v in rest {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Mean of the vertex positions, or `None` for an empty mesh.
    pub fn vertex_centroid(&self) -> Option<DVec3> {
        if self.vertices.is_empty() {
            return None;
        }
        let sum: DVec3 = self.vertices.iter().copied().sum();
        Some(sum / self.vertices.len() as f64)
    }

    // =========================================================================
    // STRUCTURAL SHARING
    // =========================================================================

    /// Returns true if both meshes hold the same vertex array.
    pub fn shares_vertices_with(&self, other: &Mesh) -> bool {
        Arc::ptr_eq(&self.vertices, &other.vertices)
    }

    /// Returns true if both meshes hold the same face table.
    pub fn shares_faces_with(&self, other: &Mesh) -> bool {
        Arc::ptr_eq(&self.faces, &other.faces)
    }

    /// Returns true if both meshes hold the same vertex group map, or both
    /// have none.
    pub fn shares_vertex_groups_with(&self, other: &Mesh) -> bool {
        same_group_map(&self.vertex_groups, &other.vertex_groups)
    }

    /// Returns true if both meshes hold the same face group map, or both
    /// have none.
    pub fn shares_face_groups_with(&self, other: &Mesh) -> bool {
        same_group_map(&self.face_groups, &other.face_groups)
    }

    // =========================================================================
    // DERIVATION HELPERS
    // =========================================================================

    /// Same topology and groups, new positions.
    pub(crate) fn with_vertices(&self, vertices: Vec<DVec3>) -> Self {
        debug_assert_eq!(vertices.len(), self.vertices.len());
        Self::from_parts(
            vertices.into(),
            Arc::clone(&self.faces),
            self.vertex_groups.clone(),
            self.face_groups.clone(),
        )
    }

    /// New faces of the same shape, with copies of the group maps that the
    /// result owns alone.
    pub(crate) fn with_vertices_and_faces(&self, vertices: Arc<[DVec3]>, faces: Faces) -> Self {
        let copy = |groups: &Option<Arc<GroupMap>>| {
            groups.as_deref().map(|groups| Arc::new(groups.clone()))
        };
        Self::from_parts(
            vertices,
            Arc::new(faces),
            copy(&self.vertex_groups),
            copy(&self.face_groups),
        )
    }

    pub(crate) fn vertices_arc(&self) -> &Arc<[DVec3]> {
        &self.vertices
    }
}

/// Face indices are `u32`, so every vertex must be addressable by one.
fn check_vertex_count(count: usize) -> MeshResult<()> {
    if u32::try_from(count).is_err() {
        return Err(MeshError::index_out_of_range(
            Dimension::Vertex,
            count - 1,
            u32::MAX as usize,
        ));
    }
    Ok(())
}

fn check_group_dimension(dimension: Dimension, groups: &GroupMap, expected: usize) -> MeshResult<()> {
    if groups.dimension() != expected {
        return Err(MeshError::DimensionMismatch {
            dimension,
            expected,
            got: groups.dimension(),
        });
    }
    Ok(())
}

fn same_group_map(a: &Option<Arc<GroupMap>>, b: &Option<Arc<GroupMap>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}
