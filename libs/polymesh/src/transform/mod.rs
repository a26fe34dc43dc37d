//! # Transform Engine
//!
//! Two independent capabilities:
//!
//! - **Affine composition**: a [`Transform`] builder accumulates a 4×4 matrix
//!   and applies it once in [`Transform::end`]. The result shares the source
//!   mesh's faces and group maps.
//! - **Topological flips**: [`Mesh::faces_flipped`] and [`Mesh::flipped`]
//!   reverse face winding, the latter after reflecting an axis.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use polymesh::Mesh;
//!
//! let mesh = Mesh::from_triangles(
//!     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
//!     vec![[0, 1, 2]],
//! )
//! .unwrap();
//!
//! let moved = mesh
//!     .transform()
//!     .scale(2.0)
//!     .translate(DVec3::new(0.0, 0.0, 5.0))
//!     .end();
//! assert_eq!(moved.vertices()[1], DVec3::new(2.0, 0.0, 5.0));
//! assert!(moved.shares_faces_with(&mesh));
//! ```

mod flip;
pub mod matrices;

use glam::{DMat3, DMat4, DVec3};

use crate::error::MeshResult;
use crate::mesh::Mesh;

// =============================================================================
// BUILDER
// =============================================================================

/// Accumulated affine transform bound to a source mesh.
///
/// Each step consumes the builder and returns it, so chains never touch the
/// source mesh. Holding the source is cheap: a `Mesh` clone only bumps
/// reference counts.
#[derive(Debug, Clone)]
#[must_use = "a transform does nothing until `end` is called"]
pub struct Transform {
    /// Mesh the transform will be applied to.
    source: Mesh,
    /// Accumulated matrix, column-vector convention.
    matrix: DMat4,
}

impl Transform {
    /// Starts an identity transform on `source`.
    pub fn start(source: &Mesh) -> Self {
        Self {
            source: source.clone(),
            matrix: DMat4::IDENTITY,
        }
    }

    /// Appends a transform. If A then B are appended, points map to
    /// B(A(p)).
    pub fn append_transform(mut self, matrix: DMat4) -> Self {
        self.matrix = matrix * self.matrix;
        self
    }

    /// Appends a uniform scale.
    pub fn scale(self, factor: f64) -> Self {
        self.append_transform(matrices::uniform_scale(factor))
    }

    /// Appends a per-axis scale.
    pub fn scale_xyz(self, x: f64, y: f64, z: f64) -> Self {
        self.append_transform(matrices::scale(DVec3::new(x, y, z)))
    }

    /// Appends a translation.
    pub fn translate(self, offset: DVec3) -> Self {
        self.append_transform(matrices::translation(offset))
    }

    /// Appends a rotation from Euler angles in radians, about the fixed X,
    /// then Y, then Z axes.
    pub fn rotate(self, angles: DVec3) -> Self {
        self.append_transform(matrices::rotation(angles))
    }

    /// Appends a rotation given as a 3×3 matrix.
    pub fn rotate_matrix(self, rotation: DMat3) -> Self {
        self.append_transform(matrices::linear(rotation))
    }

    /// Appends a unit conversion, e.g. `("m", "cm")` scales by 100.
    ///
    /// # Errors
    ///
    /// Returns a value-kind error for an unknown unit name.
    pub fn convert_units(self, from: &str, to: &str) -> MeshResult<Self> {
        Ok(self.append_transform(matrices::unit_conversion(from, to)?))
    }

    /// Appends a rotation taking `up` to +Y and `look` to +Z.
    ///
    /// # Errors
    ///
    /// Returns a value-kind error if either vector is zero or they are
    /// collinear.
    pub fn reorient(self, up: DVec3, look: DVec3) -> MeshResult<Self> {
        Ok(self.append_transform(matrices::reorientation(up, look)?))
    }

    /// The accumulated matrix.
    pub fn matrix(&self) -> DMat4 {
        self.matrix
    }

    /// Applies the accumulated matrix to every vertex.
    ///
    /// The returned mesh shares the source's faces and group maps.
    pub fn end(self) -> Mesh {
        let vertices = self
            .source
            .vertices()
            .iter()
            .map(|&v| self.matrix.transform_point3(v))
            .collect();
        self.source.with_vertices(vertices)
    }
}

// =============================================================================
// SINGLE-SHOT WRAPPERS
// =============================================================================

impl Mesh {
    /// Starts a chain of affine transforms on this mesh.
    pub fn transform(&self) -> Transform {
        Transform::start(self)
    }

    /// Scales every vertex by `factor`.
    pub fn uniformly_scaled(&self, factor: f64) -> Mesh {
        self.transform().scale(factor).end()
    }

    /// Scales each axis independently.
    pub fn non_uniformly_scaled(&self, x: f64, y: f64, z: f64) -> Mesh {
        self.transform().scale_xyz(x, y, z).end()
    }

    /// Converts lengths from `from` units to `to` units.
    ///
    /// # Errors
    ///
    /// Returns a value-kind error for an unknown unit name.
    pub fn units_converted(&self, from: &str, to: &str) -> MeshResult<Mesh> {
        Ok(self.transform().convert_units(from, to)?.end())
    }

    /// Translates every vertex by `offset`.
    pub fn translated(&self, offset: DVec3) -> Mesh {
        self.transform().translate(offset).end()
    }

    /// Rotates by Euler angles in radians about the fixed X, then Y, then Z
    /// axes.
    pub fn rotated(&self, angles: DVec3) -> Mesh {
        self.transform().rotate(angles).end()
    }

    /// Rotates so that `up` points along +Y and `look` along +Z.
    ///
    /// # Errors
    ///
    /// Returns a value-kind error if either vector is zero or they are
    /// collinear.
    pub fn reoriented(&self, up: DVec3, look: DVec3) -> MeshResult<Mesh> {
        Ok(self.transform().reorient(up, look)?.end())
    }
}
