//! # Mesh Errors
//!
//! Error types for mesh construction, selection and transform operations.
//!
//! ## Error Policy
//!
//! - Errors surface at the call that caused them
//! - Indices are never clamped and unknown names never fall back
//! - Every error maps onto one [`ErrorKind`] so callers can branch on the
//!   category without matching each variant

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR KIND
// =============================================================================

/// Category of a [`MeshError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An index (vertex, face, or group entry) is out of bounds.
    Index,
    /// An unknown group name was requested.
    Key,
    /// An invalid parameter was supplied.
    Value,
}

/// Which indexed dimension an out-of-range index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Vertex indices.
    Vertex,
    /// Face indices.
    Face,
    /// Entries of a group map built from index lists.
    Group,
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Dimension::Vertex => "vertex",
            Dimension::Face => "face",
            Dimension::Group => "group",
        };
        f.write_str(name)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building or deriving meshes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Index outside `[0, len)`.
    #[error("{dimension} index {index} out of range for {len} elements")]
    IndexOutOfRange {
        dimension: Dimension,
        index: usize,
        len: usize,
    },

    /// Group name not present in the group map.
    #[error("Unknown group: {name}")]
    UnknownGroup { name: String },

    /// A mask or group map does not match the size of its dimension.
    #[error("{dimension} dimension mismatch: expected {expected} elements, got {got}")]
    DimensionMismatch {
        dimension: Dimension,
        expected: usize,
        got: usize,
    },

    /// Face arity other than 3 or 4, or faces whose length is not a
    /// multiple of the arity.
    #[error("Invalid face arity: {message}")]
    InvalidArity { message: String },

    /// Invalid parameter.
    #[error("Invalid value: {message}")]
    InvalidValue { message: String },
}

impl MeshError {
    /// Creates an out-of-range index error.
    pub fn index_out_of_range(dimension: Dimension, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            dimension,
            index,
            len,
        }
    }

    /// Creates an unknown group error.
    pub fn unknown_group(name: impl Into<String>) -> Self {
        Self::UnknownGroup { name: name.into() }
    }

    /// Creates an invalid value error.
    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self::InvalidValue {
            message: message.into(),
        }
    }

    /// Creates an invalid arity error.
    pub fn invalid_arity(message: impl Into<String>) -> Self {
        Self::InvalidArity {
            message: message.into(),
        }
    }

    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MeshError::IndexOutOfRange { .. } => ErrorKind::Index,
            MeshError::UnknownGroup { .. } => ErrorKind::Key,
            MeshError::DimensionMismatch { .. }
            | MeshError::InvalidArity { .. }
            | MeshError::InvalidValue { .. } => ErrorKind::Value,
        }
    }
}

impl From<ConfigError> for MeshError {
    fn from(err: ConfigError) -> Self {
        MeshError::invalid_value(err.to_string())
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

// =============================================================================
// TESTS
// =============================================================================
