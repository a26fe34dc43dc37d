//! Standard 4×4 transform matrices.
//!
//! All matrices act on column vectors (`m * p`).

use config::constants::{approx_zero, unit_conversion_factor};
use glam::{DMat3, DMat4, DVec3};

use crate::error::{MeshError, MeshResult};

/// Uniform scale.
pub fn uniform_scale(factor: f64) -> DMat4 {
    DMat4::from_scale(DVec3::splat(factor))
}

/// Per-axis scale.
pub fn scale(factors: DVec3) -> DMat4 {
    DMat4::from_scale(factors)
}

/// Translation by `offset`.
pub fn translation(offset: DVec3) -> DMat4 {
    DMat4::from_translation(offset)
}

/// Rotation from Euler angles in radians, applied about the fixed X axis,
/// then Y, then Z.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use polymesh::transform::matrices::rotation;
///
/// let quarter_turn_around_y = rotation(DVec3::new(0.0, std::f64::consts::FRAC_PI_2, 0.0));
/// let p = quarter_turn_around_y.transform_point3(DVec3::new(3.0, 0.0, 0.0));
/// assert!(p.abs_diff_eq(DVec3::new(0.0, 0.0, -3.0), 1e-12));
/// ```
pub fn rotation(angles: DVec3) -> DMat4 {
    DMat4::from_rotation_z(angles.z) * DMat4::from_rotation_y(angles.y) * DMat4::from_rotation_x(angles.x)
}

/// Embeds a 3×3 rotation (or any linear map) into a 4×4 matrix.
pub fn linear(matrix: DMat3) -> DMat4 {
    DMat4::from_mat3(matrix)
}

/// Uniform scale converting lengths in `from` units to `to` units.
///
/// # Errors
///
/// Returns a value-kind error for a unit name the config table does not
/// know.
pub fn unit_conversion(from: &str, to: &str) -> MeshResult<DMat4> {
    Ok(uniform_scale(unit_conversion_factor(from, to)?))
}

/// Rotation taking `up` to +Y and `look` to +Z.
///
/// `look` is orthogonalized against `up` first, so it only needs to be
/// non-parallel to it.
///
/// # Errors
///
/// Returns a value-kind error if either vector is zero or they are
/// collinear.
pub fn reorientation(up: DVec3, look: DVec3) -> MeshResult<DMat4> {
    if approx_zero(up.length()) {
        return Err(MeshError::invalid_value("reorientation up vector must be non-zero"));
    }
    if approx_zero(look.length()) {
        return Err(MeshError::invalid_value("reorientation look vector must be non-zero"));
    }

    let y = up.normalize();
    let z = look - look.dot(y) * y;
    if approx_zero(z.length()) {
        return Err(MeshError::invalid_value(
            "reorientation up and look vectors must not be collinear",
        ));
    }
    let z = z.normalize();
    let x = y.cross(z);

    // Rows x, y, z: each output coordinate is the projection onto that axis.
    Ok(DMat4::from_mat3(DMat3::from_cols(x, y, z).transpose()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rotation_about_z_turns_x_into_y() {
        let m = rotation(DVec3::new(0.0, 0.0, std::f64::consts::FRAC_PI_2));
        let p = m.transform_point3(DVec3::X);
        assert!(p.abs_diff_eq(DVec3::Y, 1e-12), "got {p}");
    }

    #[test]
    fn rotation_applies_x_before_z() {
        // X quarter turn takes Y to Z; a Z quarter turn leaves Z alone.
        let m = rotation(DVec3::new(
            std::f64::consts::FRAC_PI_2,
            0.0,
            std::f64::consts::FRAC_PI_2,
        ));
        let p = m.transform_point3(DVec3::Y);
        assert!(p.abs_diff_eq(DVec3::Z, 1e-12), "got {p}");
    }

    #[test]
    fn reorientation_maps_up_and_look() {
        let m = reorientation(DVec3::new(0.0, 0.0, 2.0), DVec3::new(0.0, 5.0, 0.0)).unwrap();
        assert!(m.transform_point3(DVec3::Z).abs_diff_eq(DVec3::Y, 1e-12));
        assert!(m.transform_point3(DVec3::Y).abs_diff_eq(DVec3::Z, 1e-12));
        assert!(m.transform_point3(DVec3::X).abs_diff_eq(-DVec3::X, 1e-12));
    }

    #[test]
    fn reorientation_is_a_rotation() {
        let m = reorientation(DVec3::new(1.0, 2.0, 3.0), DVec3::new(-1.0, 0.5, 0.0)).unwrap();
        assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn reorientation_rejects_degenerate_input() {
        assert!(reorientation(DVec3::ZERO, DVec3::Y).is_err());
        assert!(reorientation(DVec3::Y, DVec3::ZERO).is_err());
        assert!(reorientation(DVec3::Y, DVec3::new(0.0, -3.0, 0.0)).is_err());
    }

    #[test]
    fn unit_conversion_scales() {
        let m = unit_conversion("m", "cm").unwrap();
        assert_eq!(m.transform_point3(DVec3::ONE), DVec3::splat(100.0));
        assert!(unit_conversion("m", "league").is_err());
    }
}
