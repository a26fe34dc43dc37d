//! Winding reversal and axis reflection.

use glam::DVec3;

use crate::axis::Axis;
use crate::error::MeshResult;
use crate::mesh::Mesh;

impl Mesh {
    /// Reverses the vertex order of every face. Positions are unchanged.
    pub fn faces_flipped(&self) -> Mesh {
        self.with_vertices_and_faces(self.vertices_arc().clone(), self.faces().flipped())
    }

    /// Reflects coordinate `dim` and reverses face winding to keep normals
    /// pointing outward.
    ///
    /// With `preserve_vertex_centroid`, the reflection is about the plane
    /// through the vertex centroid instead of the origin.
    ///
    /// # Errors
    ///
    /// Returns a value-kind error unless `dim` is 0, 1, or 2.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use polymesh::Mesh;
    ///
    /// let mesh = Mesh::from_triangles(
    ///     vec![DVec3::ZERO, DVec3::X, DVec3::new(0.0, 1.0, 2.0)],
    ///     vec![[0, 1, 2]],
    /// )
    /// .unwrap();
    ///
    /// let mirrored = mesh.flipped(2, false).unwrap();
    /// assert_eq!(mirrored.vertices()[2], DVec3::new(0.0, 1.0, -2.0));
    /// assert_eq!(mirrored.face(0), Some(&[2, 1, 0][..]));
    /// ```
    pub fn flipped(&self, dim: usize, preserve_vertex_centroid: bool) -> MeshResult<Mesh> {
        let axis = Axis::from_dim(dim)?.index();

        let offset = match self.vertex_centroid() {
            Some(centroid) if preserve_vertex_centroid => 2.0 * centroid[axis],
            _ => 0.0,
        };

        let vertices: Vec<DVec3> = self
            .vertices()
            .iter()
            .map(|&v| {
                let mut reflected = v;
                reflected[axis] = offset - v[axis];
                reflected
            })
            .collect();

        log::trace!(
            "flipped {} vertices on axis {dim} (offset {offset})",
            vertices.len()
        );

        Ok(self.with_vertices_and_faces(vertices.into(), self.faces().flipped()))
    }
}
