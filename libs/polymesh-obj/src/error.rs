//! Error types for OBJ loading.

use std::path::PathBuf;

use polymesh::MeshError;
use thiserror::Error;

/// Result type for OBJ loading.
pub type ObjResult<T> = Result<T, ObjError>;

/// Category of an [`ObjError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjErrorKind {
    /// The file could not be read or parsed into a valid mesh.
    Load,
    /// The faces cannot be represented with one supported arity.
    Arity,
}

/// Errors that can occur while loading an OBJ file.
#[derive(Debug, Error)]
pub enum ObjError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A statement could not be parsed or references a missing vertex.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong.
        message: String,
    },

    /// Mixed face arity, or an arity other than 3 or 4 without
    /// triangulation.
    #[error("Invalid face arity: {message}")]
    Arity {
        /// What was wrong.
        message: String,
    },

    /// The parsed data did not form a valid mesh.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

impl ObjError {
    /// Creates a parse error at `line`.
    #[must_use]
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Creates an arity error.
    #[must_use]
    pub fn arity(message: impl Into<String>) -> Self {
        Self::Arity {
            message: message.into(),
        }
    }

    /// Returns the error category.
    pub fn kind(&self) -> ObjErrorKind {
        match self {
            Self::Io { .. } | Self::Parse { .. } | Self::Mesh(_) => ObjErrorKind::Load,
            Self::Arity { .. } => ObjErrorKind::Arity,
        }
    }
}
