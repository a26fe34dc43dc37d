//! # Selection Addressing
//!
//! Both addressing modes resolve to one ordered list of kept original
//! indices before any selection algorithm runs.
//!
//! - **List mode**: explicit indices, each at most once, kept in list order
//! - **Mask mode**: one boolean per element, kept in ascending order

use crate::error::{Dimension, MeshError, MeshResult};

/// Which elements of a dimension to keep.
///
/// # Example
///
/// ```rust
/// use polymesh::{Dimension, Selection};
///
/// let by_list = Selection::from(vec![4usize, 1]);
/// assert_eq!(by_list.resolve(Dimension::Vertex, 5).unwrap(), vec![4, 1]);
///
/// let by_mask = Selection::from(vec![false, true, false, false, true]);
/// assert_eq!(by_mask.resolve(Dimension::Vertex, 5).unwrap(), vec![1, 4]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Ordered indices to keep.
    Indices(Vec<usize>),
    /// Boolean mask aligned to the dimension.
    Mask(Vec<bool>),
}

impl Selection {
    /// Resolves to the ordered list of kept indices for a dimension of `len`
    /// elements.
    ///
    /// # Errors
    ///
    /// - [`MeshError::IndexOutOfRange`] for a list index `>= len`
    /// - [`MeshError::InvalidValue`] for a repeated list index
    /// - [`MeshError::DimensionMismatch`] for a mask whose length is not `len`
    pub fn resolve(&self, dimension: Dimension, len: usize) -> MeshResult<Vec<usize>> {
        match self {
            Selection::Indices(indices) => {
                let mut seen = vec![false; len];
                for &index in indices {
                    let slot = seen
                        .get_mut(index)
                        .ok_or_else(|| MeshError::index_out_of_range(dimension, index, len))?;
                    if *slot {
                        return Err(MeshError::invalid_value(format!(
                            "{dimension} index {index} selected more than once"
                        )));
                    }
                    *slot = true;
                }
                Ok(indices.clone())
            }
            Selection::Mask(mask) => {
                if mask.len() != len {
                    return Err(MeshError::DimensionMismatch {
                        dimension,
                        expected: len,
                        got: mask.len(),
                    });
                }
                Ok(mask_to_indices(mask))
            }
        }
    }
}

/// Ascending indices of the set entries of `mask`.
pub(crate) fn mask_to_indices(mask: &[bool]) -> Vec<usize> {
    mask.iter()
        .enumerate()
        .filter_map(|(index, &keep)| keep.then_some(index))
        .collect()
}

impl From<Vec<usize>> for Selection {
    fn from(indices: Vec<usize>) -> Self {
        Selection::Indices(indices)
    }
}

impl From<&[usize]> for Selection {
    fn from(indices: &[usize]) -> Self {
        Selection::Indices(indices.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for Selection {
    fn from(indices: [usize; N]) -> Self {
        Selection::Indices(indices.to_vec())
    }
}

impl From<Vec<bool>> for Selection {
    fn from(mask: Vec<bool>) -> Self {
        Selection::Mask(mask)
    }
}

impl From<&[bool]> for Selection {
    fn from(mask: &[bool]) -> Self {
        Selection::Mask(mask.to_vec())
    }
}

impl<const N: usize> From<[bool; N]> for Selection {
    fn from(mask: [bool; N]) -> Self {
        Selection::Mask(mask.to_vec())
    }
}
