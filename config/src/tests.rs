//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

// =============================================================================
// TOPOLOGY TESTS
// =============================================================================

#[test]
fn test_supported_arities_are_triangles_and_quads() {
    assert_eq!(SUPPORTED_FACE_ARITIES, [TRIANGLE_ARITY, QUAD_ARITY]);
    assert!(is_supported_arity(3));
    assert!(is_supported_arity(4));
}

#[test]
fn test_unsupported_arities_rejected() {
    for arity in [0, 1, 2, 5, 8] {
        assert!(!is_supported_arity(arity), "arity {arity} should be rejected");
    }
}

// =============================================================================
// IMPORT TESTS
// =============================================================================

#[test]
fn test_default_triangulate_is_off() {
    // Importers keep the source arity unless asked to triangulate
    assert!(!DEFAULT_TRIANGULATE);
}

#[test]
fn test_default_group_name_not_empty() {
    assert!(!DEFAULT_GROUP_NAME.is_empty());
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[test]
fn test_unit_names_are_unique() {
    for (i, (a, _)) in LENGTH_UNITS.iter().enumerate() {
        for (b, _) in &LENGTH_UNITS[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_meter_is_reference_unit() {
    assert_eq!(meters_per_unit("m").unwrap(), 1.0);
}

#[test]
fn test_meters_to_centimeters() {
    assert_eq!(unit_conversion_factor("m", "cm").unwrap(), 100.0);
}

#[test]
fn test_inches_to_millimeters() {
    let factor = unit_conversion_factor("in", "mm").unwrap();
    assert!(approx_zero(factor - 25.4), "got {factor}");
}

#[test]
fn test_feet_to_yards_round_trip() {
    let there = unit_conversion_factor("ft", "yd").unwrap();
    let back = unit_conversion_factor("yd", "ft").unwrap();
    assert!(approx_zero(there * back - 1.0));
}

#[test]
fn test_same_unit_is_identity() {
    for (name, _) in LENGTH_UNITS {
        assert_eq!(unit_conversion_factor(name, name).unwrap(), 1.0);
    }
}

#[test]
fn test_unknown_unit_is_error() {
    assert_eq!(
        unit_conversion_factor("m", "parsec").unwrap_err(),
        ConfigError::UnknownUnit("parsec".to_string())
    );
    assert!(meters_per_unit("M").is_err(), "unit names are case-sensitive");
}

#[test]
fn test_unknown_unit_message_lists_known_units() {
    let message = ConfigError::UnknownUnit("parsec".to_string()).to_string();
    assert!(message.contains("parsec"));
    assert!(message.contains("mm"));
}

// =============================================================================
// APPROX TESTS
// =============================================================================

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(-EPSILON / 2.0));
    assert!(!approx_zero(0.1));
}
