//! # Group Maps
//!
//! Named boolean masks over one fixed-size dimension (vertices or faces).
//!
//! ## Invariants
//!
//! - Every mask has exactly `dimension` entries
//! - Names are unique and case-sensitive
//! - Insertion order of names is preserved
//!
//! ## Example
//!
//! ```rust
//! use polymesh::GroupMap;
//!
//! let groups = GroupMap::from_dict([("top", vec![4, 5]), ("bottom", vec![0, 1])], 6).unwrap();
//! assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["top", "bottom"]);
//! assert_eq!(groups.get("top").unwrap(), &[false, false, false, false, true, true]);
//! assert!(groups.get("Top").is_err());
//! ```

use crate::error::{Dimension, MeshError, MeshResult};
use crate::selection::index::mask_to_indices;
use crate::selection::Selection;

// =============================================================================
// GROUP MAP
// =============================================================================

/// Ordered mapping from group name to a boolean mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMap {
    /// Length of every mask.
    dimension: usize,
    /// Groups in insertion order.
    groups: Vec<(String, Vec<bool>)>,
}

impl GroupMap {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Creates a map with no groups over `dimension` elements.
    pub fn empty(dimension: usize) -> Self {
        Self {
            dimension,
            groups: Vec::new(),
        }
    }

    /// Builds one mask per name with the listed indices set.
    ///
    /// # Errors
    ///
    /// - [`MeshError::IndexOutOfRange`] if an index is `>= dimension`
    /// - [`MeshError::InvalidValue`] if a name repeats
    pub fn from_dict<I, S, J>(groups: I, dimension: usize) -> MeshResult<Self>
    where
        I: IntoIterator<Item = (S, J)>,
        S: Into<String>,
        J: IntoIterator<Item = usize>,
    {
        let mut map = Self::empty(dimension);
        for (name, indices) in groups {
            let mut mask = vec![false; dimension];
            for index in indices {
                let slot = mask.get_mut(index).ok_or_else(|| {
                    MeshError::index_out_of_range(Dimension::Group, index, dimension)
                })?;
                *slot = true;
            }
            map.push(name.into(), mask)?;
        }
        Ok(map)
    }

    /// Builds a map from explicit masks.
    ///
    /// # Errors
    ///
    /// - [`MeshError::DimensionMismatch`] if a mask is not `dimension` long
    /// - [`MeshError::InvalidValue`] if a name repeats
    pub fn from_masks<I, S>(groups: I, dimension: usize) -> MeshResult<Self>
    where
        I: IntoIterator<Item = (S, Vec<bool>)>,
        S: Into<String>,
    {
        let mut map = Self::empty(dimension);
        for (name, mask) in groups {
            if mask.len() != dimension {
                return Err(MeshError::DimensionMismatch {
                    dimension: Dimension::Group,
                    expected: dimension,
                    got: mask.len(),
                });
            }
            map.push(name.into(), mask)?;
        }
        Ok(map)
    }

    fn push(&mut self, name: String, mask: Vec<bool>) -> MeshResult<()> {
        if self.contains(&name) {
            return Err(MeshError::invalid_value(format!("duplicate group name: {name}")));
        }
        self.groups.push((name, mask));
        Ok(())
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Length of every mask.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of groups.
    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if the map holds no groups.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns true if a group with this exact name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.groups.iter().any(|(key, _)| key == name)
    }

    /// Group names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(name, _)| name.as_str())
    }

    /// Groups in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[bool])> {
        self.groups
            .iter()
            .map(|(name, mask)| (name.as_str(), mask.as_slice()))
    }

    /// Returns the mask of a group.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::UnknownGroup`] if the name is absent.
    pub fn get(&self, name: &str) -> MeshResult<&[bool]> {
        self.groups
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, mask)| mask.as_slice())
            .ok_or_else(|| MeshError::unknown_group(name))
    }

    /// Ascending indices that belong to a group.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::UnknownGroup`] if the name is absent.
    pub fn indices_of(&self, name: &str) -> MeshResult<Vec<usize>> {
        self.get(name).map(mask_to_indices)
    }

    /// Union of several groups' masks.
    ///
    /// An empty name list yields an all-false mask.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::UnknownGroup`] for the first absent name.
    pub fn union_mask<I, S>(&self, names: I) -> MeshResult<Vec<bool>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut union = vec![false; self.dimension];
        for name in names {
            let mask = self.get(name.as_ref())?;
            for (out, &member) in union.iter_mut().zip(mask) {
                *out |= member;
            }
        }
        Ok(union)
    }

    // =========================================================================
    // REMAPPING
    // =========================================================================

    /// Returns a map whose masks are restricted to the selected indices, in
    /// selection order. Groups that become empty are kept.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Selection::resolve`].
    pub fn remapped(&self, selection: &Selection) -> MeshResult<Self> {
        let kept = selection.resolve(Dimension::Group, self.dimension)?;
        Ok(self.restricted(&kept))
    }

    /// Restriction to already-validated kept indices.
    pub(crate) fn restricted(&self, kept: &[usize]) -> Self {
        let groups = self
            .groups
            .iter()
            .map(|(name, mask)| (name.clone(), kept.iter().map(|&index| mask[index]).collect()))
            .collect();
        Self {
            dimension: kept.len(),
            groups,
        }
    }
}
