//! # Polymesh OBJ
//!
//! Loads Wavefront OBJ files into [`polymesh::Mesh`].
//!
//! ## Behavior
//!
//! - Vertex positions and polygon faces are read; normals, texture
//!   coordinates and materials are ignored
//! - `g` statements become face groups, in order of first appearance
//! - Without triangulation every face must have the same arity, 3 or 4
//! - With triangulation polygons are fanned from their first vertex, so
//!   output vertex correspondence never depends on positions
//!
//! ## Usage
//!
//! ```rust
//! use polymesh_obj::{parse, ObjLoadOptions};
//!
//! let source = "
//! v 0 0 0
//! v 1 0 0
//! v 1 1 0
//! v 0 1 0
//! g square
//! f 1 2 3 4
//! ";
//!
//! let quads = parse(source, &ObjLoadOptions::default()).unwrap();
//! assert!(quads.is_quads());
//!
//! let triangles = parse(source, &ObjLoadOptions::triangulated()).unwrap();
//! assert_eq!(triangles.face(1), Some(&[0, 2, 3][..]));
//! ```

pub mod error;
mod parser;

use std::path::Path;

use config::constants::DEFAULT_TRIANGULATE;
use polymesh::Mesh;

pub use error::{ObjError, ObjErrorKind, ObjResult};

/// Options for [`load`] and [`parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjLoadOptions {
    /// Fan-triangulate every face instead of requiring a uniform arity.
    pub triangulate: bool,
}

impl ObjLoadOptions {
    /// Options that triangulate.
    pub fn triangulated() -> Self {
        Self { triangulate: true }
    }
}

impl Default for ObjLoadOptions {
    fn default() -> Self {
        Self {
            triangulate: DEFAULT_TRIANGULATE,
        }
    }
}

/// Loads a mesh from an OBJ file.
///
/// # Errors
///
/// - [`ObjErrorKind::Load`] if the file cannot be read or parsed, or a face
///   references a missing vertex
/// - [`ObjErrorKind::Arity`] if faces have mixed or unsupported arity and
///   triangulation is off
///
/// # Example
///
/// ```no_run
/// use polymesh_obj::{load, ObjLoadOptions};
///
/// let mesh = load("model.obj", &ObjLoadOptions::triangulated()).unwrap();
/// println!("Loaded {} vertices, {} faces", mesh.vertex_count(), mesh.face_count());
/// ```
pub fn load<P: AsRef<Path>>(path: P, options: &ObjLoadOptions) -> ObjResult<Mesh> {
    let path = path.as_ref();
    log::debug!("loading OBJ from {}", path.display());
    let source = std::fs::read_to_string(path).map_err(|source| ObjError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&source, options)
}

/// Parses OBJ source text.
///
/// # Errors
///
/// Same as [`load`], minus I/O failures.
pub fn parse(source: &str, options: &ObjLoadOptions) -> ObjResult<Mesh> {
    parser::parse_source(source, options)
}
