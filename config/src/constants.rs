//! # Configuration Constants
//!
//! Centralized constants for the polymesh libraries. Numeric tolerances,
//! face-arity rules, importer defaults and the length-unit table are defined
//! here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Topology**: Face arities a mesh may carry
//! - **Import**: Defaults for file-format ingestion
//! - **Units**: Length units understood by unit conversion

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used to reject degenerate input such as zero-length plane normals or
/// collinear reorientation vectors.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// TOPOLOGY CONSTANTS
// =============================================================================

/// Number of vertices in a triangular face.
pub const TRIANGLE_ARITY: usize = 3;

/// Number of vertices in a quadrilateral face.
pub const QUAD_ARITY: usize = 4;

/// Face arities a mesh may carry. Arity is uniform within one mesh.
///
/// # Example
///
/// ```rust
/// use config::constants::SUPPORTED_FACE_ARITIES;
///
/// assert!(SUPPORTED_FACE_ARITIES.contains(&3));
/// assert!(!SUPPORTED_FACE_ARITIES.contains(&5));
/// ```
pub const SUPPORTED_FACE_ARITIES: [usize; 2] = [TRIANGLE_ARITY, QUAD_ARITY];

/// Checks whether a face arity is supported.
///
/// # Example
///
/// ```rust
/// use config::constants::is_supported_arity;
///
/// assert!(is_supported_arity(4));
/// assert!(!is_supported_arity(2));
/// ```
#[inline]
pub fn is_supported_arity(arity: usize) -> bool {
    SUPPORTED_FACE_ARITIES.contains(&arity)
}

// =============================================================================
// IMPORT CONSTANTS
// =============================================================================

/// Whether the importer fan-triangulates polygons when the caller does not
/// say otherwise.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_TRIANGULATE;
///
/// let requested: Option<bool> = None;
/// assert!(!requested.unwrap_or(DEFAULT_TRIANGULATE));
/// ```
pub const DEFAULT_TRIANGULATE: bool = false;

/// Group name recorded for OBJ `g` statements that carry no name.
pub const DEFAULT_GROUP_NAME: &str = "default";

// =============================================================================
// UNIT CONSTANTS
// =============================================================================

/// Length units understood by unit conversion, with their size in meters.
///
/// Names are case-sensitive.
pub const LENGTH_UNITS: [(&str, f64); 8] = [
    ("mm", 0.001),
    ("cm", 0.01),
    ("m", 1.0),
    ("km", 1000.0),
    ("in", 0.0254),
    ("ft", 0.3048),
    ("yd", 0.9144),
    ("mi", 1609.344),
];

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Returns the size of one `unit` in meters.
///
/// # Example
///
/// ```rust
/// use config::constants::meters_per_unit;
///
/// assert_eq!(meters_per_unit("km").unwrap(), 1000.0);
/// assert!(meters_per_unit("furlong").is_err());
/// ```
pub fn meters_per_unit(unit: &str) -> Result<f64, ConfigError> {
    LENGTH_UNITS
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, meters)| *meters)
        .ok_or_else(|| ConfigError::UnknownUnit(unit.to_string()))
}

/// Returns the factor that converts a length in `from` units to `to` units.
///
/// # Example
///
/// ```rust
/// use config::constants::unit_conversion_factor;
///
/// assert_eq!(unit_conversion_factor("m", "cm").unwrap(), 100.0);
/// assert_eq!(unit_conversion_factor("mm", "mm").unwrap(), 1.0);
/// ```
pub fn unit_conversion_factor(from: &str, to: &str) -> Result<f64, ConfigError> {
    let from_meters = meters_per_unit(from)?;
    let to_meters = meters_per_unit(to)?;
    if from == to {
        return Ok(1.0);
    }
    Ok(from_meters / to_meters)
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

// =============================================================================
// ERRORS
// =============================================================================

/// Error returned when a configuration lookup fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when a length unit name is not in [`LENGTH_UNITS`].
    UnknownUnit(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownUnit(unit) => {
                let known: Vec<&str> = LENGTH_UNITS.iter().map(|(name, _)| *name).collect();
                write!(f, "unknown length unit '{unit}' (expected one of {})", known.join(", "))
            }
        }
    }
}

impl std::error::Error for ConfigError {}
