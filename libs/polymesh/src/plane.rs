//! # Plane
//!
//! Plane through a reference point with a unit normal, used by the
//! plane-relative vertex selections.

use config::constants::approx_zero;
use glam::DVec3;

use crate::error::{MeshError, MeshResult};

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Side of a plane a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Positive signed distance (the side the normal points to).
    Front,
    /// Negative signed distance.
    Back,
    /// Exactly on the plane.
    Coplanar,
}

// =============================================================================
// PLANE
// =============================================================================

/// A plane defined by a point on it and a unit normal.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use polymesh::Plane;
///
/// let plane = Plane::new(DVec3::new(1.0, 1.0, 1.0), DVec3::Z).unwrap();
/// assert_eq!(plane.signed_distance(DVec3::new(0.0, 0.0, 3.0)), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Reference point on the plane.
    point: DVec3,
    /// Unit normal.
    normal: DVec3,
}

impl Plane {
    /// Creates a plane through `point` with the given normal. The normal is
    /// normalized.
    ///
    /// # Errors
    ///
    /// Returns a value-kind error for a zero-length or non-finite normal.
    pub fn new(point: DVec3, normal: DVec3) -> MeshResult<Self> {
        let length = normal.length();
        if !length.is_finite() || approx_zero(length) {
            return Err(MeshError::invalid_value(format!(
                "plane normal must be non-zero, got {normal}"
            )));
        }
        Ok(Self {
            point,
            normal: normal / length,
        })
    }

    /// Reference point on the plane.
    pub fn point(&self) -> DVec3 {
        self.point
    }

    /// Unit normal.
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Signed distance from point to plane.
    ///
    /// Positive = front, negative = back, zero = on plane.
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point - self.point)
    }

    /// Classify a point relative to this plane.
    pub fn classify_point(&self, point: DVec3) -> Classification {
        let dist = self.signed_distance(point);
        if dist > 0.0 {
            Classification::Front
        } else if dist < 0.0 {
            Classification::Back
        } else {
            Classification::Coplanar
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_plane_normalizes_normal() {
        let plane = Plane::new(DVec3::ZERO, DVec3::new(0.0, 0.0, 5.0)).unwrap();
        assert_eq!(plane.normal(), DVec3::Z);
    }

    #[test]
    fn test_plane_rejects_zero_normal() {
        assert!(Plane::new(DVec3::ZERO, DVec3::ZERO).is_err());
        assert!(Plane::new(DVec3::ZERO, DVec3::new(f64::NAN, 0.0, 1.0)).is_err());
    }

    #[test]
    fn test_plane_classify_point() {
        let plane = Plane::new(DVec3::ZERO, DVec3::Z).unwrap();

        assert_eq!(plane.classify_point(DVec3::new(0.0, 0.0, 1.0)), Classification::Front);
        assert_eq!(plane.classify_point(DVec3::new(0.0, 0.0, -1.0)), Classification::Back);
        assert_eq!(plane.classify_point(DVec3::new(1.0, 1.0, 0.0)), Classification::Coplanar);
    }

    #[test]
    fn test_signed_distance_uses_reference_point() {
        let plane = Plane::new(DVec3::new(5.0, 5.0, 1.0), DVec3::new(0.0, 0.0, 2.0)).unwrap();
        assert_relative_eq!(plane.signed_distance(DVec3::new(-3.0, 9.0, 4.0)), 3.0);
    }
}
