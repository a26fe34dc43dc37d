//! # Config Crate
//!
//! Centralized configuration constants for the polymesh libraries.
//! Tolerances, face-arity rules, importer defaults and the length-unit table
//! live here so the mesh core and the importers agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{unit_conversion_factor, EPSILON, SUPPORTED_FACE_ARITIES};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! // Triangles and quads are the only supported face arities
//! assert_eq!(SUPPORTED_FACE_ARITIES, [3, 4]);
//!
//! // Meters to centimeters
//! assert_eq!(unit_conversion_factor("m", "cm").unwrap(), 100.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure constants and small lookup helpers
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
