//! # Face Table
//!
//! Flat, uniform-arity face storage. Every face holds exactly `arity` vertex
//! indices; triangles and quads are supported.

use config::constants::{is_supported_arity, QUAD_ARITY, TRIANGLE_ARITY};

use crate::error::{MeshError, MeshResult};

/// Faces of one mesh, stored as a flat index array.
///
/// # Example
///
/// ```rust
/// use polymesh::Faces;
///
/// let faces = Faces::from_triangles(vec![[0, 1, 2], [0, 2, 3]]);
/// assert_eq!(faces.len(), 2);
/// assert_eq!(faces.get(1), Some(&[0, 2, 3][..]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faces {
    /// Vertices per face (3 or 4).
    arity: usize,
    /// `arity` indices per face, face after face.
    indices: Vec<u32>,
}

impl Faces {
    /// Creates an empty face table of the given arity.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidArity`] unless `arity` is 3 or 4.
    pub fn empty(arity: usize) -> MeshResult<Self> {
        Self::from_flat(arity, Vec::new())
    }

    /// Creates a triangle table.
    pub fn from_triangles(triangles: Vec<[u32; 3]>) -> Self {
        Self {
            arity: TRIANGLE_ARITY,
            indices: triangles.into_iter().flatten().collect(),
        }
    }

    /// Creates a quad table.
    pub fn from_quads(quads: Vec<[u32; 4]>) -> Self {
        Self {
            arity: QUAD_ARITY,
            indices: quads.into_iter().flatten().collect(),
        }
    }

    /// Creates a table from flat indices, `arity` per face.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidArity`] if `arity` is unsupported or
    /// `indices.len()` is not a multiple of it.
    pub fn from_flat(arity: usize, indices: Vec<u32>) -> MeshResult<Self> {
        if !is_supported_arity(arity) {
            return Err(MeshError::invalid_arity(format!(
                "faces must have 3 or 4 vertices, got {arity}"
            )));
        }
        if indices.len() % arity != 0 {
            return Err(MeshError::invalid_arity(format!(
                "{} indices do not divide into faces of {arity}",
                indices.len()
            )));
        }
        Ok(Self { arity, indices })
    }

    /// Vertices per face.
    #[inline]
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Number of faces.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len() / self.arity
    }

    /// Returns true if there are no faces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the vertex indices of face `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&[u32]> {
        let start = index.checked_mul(self.arity)?;
        let end = start.checked_add(self.arity)?;
        self.indices.get(start..end)
    }

    /// Iterates faces in order.
    pub fn iter(&self) -> std::slice::ChunksExact<'_, u32> {
        self.indices.chunks_exact(self.arity)
    }

    /// Flat index array.
    #[inline]
    pub fn as_flat(&self) -> &[u32] {
        &self.indices
    }

    /// Largest vertex index referenced, if any face exists.
    pub fn max_index(&self) -> Option<u32> {
        self.indices.iter().copied().max()
    }

    /// Returns a copy with the vertex order of every face reversed.
    ///
    /// `(a, b, c)` becomes `(c, b, a)`.
    pub fn flipped(&self) -> Self {
        let mut indices = self.indices.clone();
        for face in indices.chunks_exact_mut(self.arity) {
            face.reverse();
        }
        Self {
            arity: self.arity,
            indices,
        }
    }

    /// Builds a table of the same arity from already-validated flat indices.
    pub(crate) fn with_arity_of(&self, indices: Vec<u32>) -> Self {
        debug_assert_eq!(indices.len() % self.arity, 0);
        Self {
            arity: self.arity,
            indices,
        }
    }
}

impl<'a> IntoIterator for &'a Faces {
    type Item = &'a [u32];
    type IntoIter = std::slice::ChunksExact<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
