//! # Coordinate Axes
//!
//! Validated coordinate axis used by axis-threshold selection and flips.

use crate::error::{MeshError, MeshResult};

/// One of the three coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// X axis (dimension 0).
    X,
    /// Y axis (dimension 1).
    Y,
    /// Z axis (dimension 2).
    Z,
}

impl Axis {
    /// Resolves a dimension number to an axis.
    ///
    /// # Errors
    ///
    /// Returns a value-kind [`MeshError`] unless `dim` is 0, 1, or 2.
    ///
    /// # Example
    ///
    /// ```rust
    /// use polymesh::Axis;
    ///
    /// assert_eq!(Axis::from_dim(2).unwrap(), Axis::Z);
    /// assert!(Axis::from_dim(3).is_err());
    /// ```
    pub fn from_dim(dim: usize) -> MeshResult<Self> {
        match dim {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            _ => Err(MeshError::invalid_value(format!(
                "expected axis to be 0, 1, or 2, got {dim}"
            ))),
        }
    }

    /// Component index of this axis in a `DVec3`.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_axis_round_trips_through_index() {
        for dim in 0..3 {
            assert_eq!(Axis::from_dim(dim).unwrap().index(), dim);
        }
    }

    #[test]
    fn test_axis_rejects_out_of_range_dim() {
        let err = Axis::from_dim(3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert!(err.to_string().contains("expected axis to be 0, 1, or 2"));
        assert!(Axis::from_dim(usize::MAX).is_err());
    }
}
