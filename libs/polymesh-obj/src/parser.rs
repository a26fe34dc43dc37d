//! # OBJ Parser
//!
//! Line-oriented reader for the geometry subset of Wavefront OBJ.
//!
//! ## Recognized statements
//!
//! - `v x y z [w]`: vertex position (`w` ignored)
//! - `f a b c ...`: polygon; each reference may be `v`, `v/vt`, `v//vn` or
//!   `v/vt/vn`, 1-based or negative (relative to the vertices read so far)
//! - `g name ...`: following faces belong to every listed group
//!
//! Everything else (`vt`, `vn`, `usemtl`, `s`, ...) is ignored.

use config::constants::{is_supported_arity, DEFAULT_GROUP_NAME, TRIANGLE_ARITY};
use glam::DVec3;
use polymesh::{Faces, GroupMap, Mesh, MeshError};

use crate::error::{ObjError, ObjResult};
use crate::ObjLoadOptions;

// =============================================================================
// INTERMEDIATE REPRESENTATION
// =============================================================================

/// A face statement before arity checks.
#[derive(Debug)]
struct Polygon {
    /// 0-based vertex indices.
    indices: Vec<usize>,
    /// Index into `ObjData::group_sets`, or `None` before any `g`.
    group_set: Option<usize>,
    /// Source line, for error reporting.
    line: usize,
}

/// Raw contents of an OBJ file.
#[derive(Debug, Default)]
struct ObjData {
    vertices: Vec<DVec3>,
    polygons: Vec<Polygon>,
    /// Group names in order of first appearance.
    group_names: Vec<String>,
    /// Distinct `g` statements, as indices into `group_names`.
    group_sets: Vec<Vec<usize>>,
    /// Whether any `g` statement was seen.
    has_groups: bool,
}

// =============================================================================
// ENTRY POINT
// =============================================================================

/// Parses OBJ source text into a mesh.
pub(crate) fn parse_source(source: &str, options: &ObjLoadOptions) -> ObjResult<Mesh> {
    let data = read_statements(source)?;
    check_references(&data)?;

    let (faces, face_sets) = if options.triangulate {
        triangulate(&data.polygons)?
    } else {
        uniform_faces(&data.polygons)?
    };

    log::debug!(
        "parsed OBJ: {} vertices, {} polygons -> {} faces (arity {}), {} groups",
        data.vertices.len(),
        data.polygons.len(),
        faces.len(),
        faces.arity(),
        data.group_names.len()
    );

    let face_count = faces.len();
    let mesh = Mesh::new(data.vertices, faces)?;
    if !data.has_groups {
        return Ok(mesh);
    }

    let mut masks: Vec<Vec<bool>> = vec![vec![false; face_count]; data.group_names.len()];
    for (face, set) in face_sets.iter().enumerate() {
        let Some(set) = set else { continue };
        for &group in &data.group_sets[*set] {
            masks[group][face] = true;
        }
    }
    let groups = GroupMap::from_masks(data.group_names.into_iter().zip(masks), face_count)?;
    Ok(mesh.with_face_groups(groups)?)
}

// =============================================================================
// STATEMENTS
// =============================================================================

fn read_statements(source: &str) -> ObjResult<ObjData> {
    let mut data = ObjData::default();
    let mut current_set = None;

    for (number, raw) in source.lines().enumerate() {
        let line = number + 1;
        let content = raw.split('#').next().unwrap_or_default().trim();
        let mut tokens = content.split_whitespace();
        let Some(keyword) = tokens.next() else { continue };

        match keyword {
            "v" => data.vertices.push(parse_vertex(tokens, line)?),
            "f" => {
                let indices = tokens
                    .map(|token| parse_reference(token, data.vertices.len(), line))
                    .collect::<ObjResult<Vec<_>>>()?;
                if indices.len() < TRIANGLE_ARITY {
                    return Err(ObjError::parse(
                        line,
                        format!("face needs at least 3 vertices, got {}", indices.len()),
                    ));
                }
                data.polygons.push(Polygon {
                    indices,
                    group_set: current_set,
                    line,
                });
            }
            "g" => {
                data.has_groups = true;
                let mut names: Vec<&str> = tokens.collect();
                if names.is_empty() {
                    names.push(DEFAULT_GROUP_NAME);
                }
                current_set = Some(data.register_group_set(&names));
            }
            other => log::trace!("line {line}: ignoring `{other}` statement"),
        }
    }

    Ok(data)
}

impl ObjData {
    /// Records a `g` statement and returns its set index.
    fn register_group_set(&mut self, names: &[&str]) -> usize {
        let mut set = Vec::with_capacity(names.len());
        for &name in names {
            let id = match self.group_names.iter().position(|known| known == name) {
                Some(id) => id,
                None => {
                    self.group_names.push(name.to_string());
                    self.group_names.len() - 1
                }
            };
            if !set.contains(&id) {
                set.push(id);
            }
        }
        self.group_sets.push(set);
        self.group_sets.len() - 1
    }
}

fn parse_vertex<'a>(mut tokens: impl Iterator<Item = &'a str>, line: usize) -> ObjResult<DVec3> {
    let mut coordinate = || -> ObjResult<f64> {
        let token = tokens
            .next()
            .ok_or_else(|| ObjError::parse(line, "vertex needs 3 coordinates"))?;
        token
            .parse::<f64>()
            .map_err(|e| ObjError::parse(line, format!("invalid coordinate `{token}`: {e}")))
    };
    Ok(DVec3::new(coordinate()?, coordinate()?, coordinate()?))
}

/// Resolves one face reference to a 0-based vertex index.
///
/// Only the position part of `v/vt/vn` is used. Positive references are
/// checked against the final vertex count later, since they may point
/// forward.
fn parse_reference(token: &str, vertices_so_far: usize, line: usize) -> ObjResult<usize> {
    let position = token.split('/').next().unwrap_or_default();
    let value: i64 = position
        .parse()
        .map_err(|e| ObjError::parse(line, format!("invalid vertex reference `{token}`: {e}")))?;

    match value {
        0 => Err(ObjError::parse(line, "vertex references are 1-based, got 0")),
        v if v > 0 => usize::try_from(v - 1)
            .map_err(|_| ObjError::parse(line, format!("vertex reference {v} too large"))),
        v => {
            let back = usize::try_from(v.unsigned_abs())
                .map_err(|_| ObjError::parse(line, format!("vertex reference {v} too large")))?;
            vertices_so_far.checked_sub(back).ok_or_else(|| {
                ObjError::parse(
                    line,
                    format!("relative reference {v} with only {vertices_so_far} vertices"),
                )
            })
        }
    }
}

fn check_references(data: &ObjData) -> ObjResult<()> {
    let count = data.vertices.len();
    for polygon in &data.polygons {
        if let Some(&bad) = polygon.indices.iter().find(|&&i| i >= count) {
            return Err(ObjError::parse(
                polygon.line,
                format!("face references vertex {} but only {count} exist", bad + 1),
            ));
        }
    }
    Ok(())
}

// =============================================================================
// FACE ASSEMBLY
// =============================================================================

/// Faces plus, for each output face, the group set it belongs to.
type Assembled = (Faces, Vec<Option<usize>>);

/// Keeps polygons as they are, requiring one supported arity.
fn uniform_faces(polygons: &[Polygon]) -> ObjResult<Assembled> {
    let arity = polygons.first().map_or(TRIANGLE_ARITY, |p| p.indices.len());

    if let Some(odd) = polygons.iter().find(|p| p.indices.len() != arity) {
        return Err(ObjError::arity(format!(
            "line {}: face has {} vertices but earlier faces have {arity}; load with triangulation",
            odd.line,
            odd.indices.len()
        )));
    }
    if !is_supported_arity(arity) {
        return Err(ObjError::arity(format!(
            "faces have {arity} vertices; expected 3 or 4, or load with triangulation"
        )));
    }

    let flat = polygons
        .iter()
        .flat_map(|p| p.indices.iter().map(|&i| to_u32(i)))
        .collect::<ObjResult<Vec<u32>>>()?;
    let sets = polygons.iter().map(|p| p.group_set).collect();
    Ok((Faces::from_flat(arity, flat)?, sets))
}

/// Fan-triangulates every polygon from its first vertex:
/// `[a, b, c, d]` becomes `[a, b, c]`, `[a, c, d]`.
fn triangulate(polygons: &[Polygon]) -> ObjResult<Assembled> {
    let mut triangles = Vec::new();
    let mut sets = Vec::new();

    for polygon in polygons {
        let first = polygon.indices[0];
        for pair in polygon.indices[1..].windows(2) {
            triangles.push([to_u32(first)?, to_u32(pair[0])?, to_u32(pair[1])?]);
            sets.push(polygon.group_set);
        }
    }

    if triangles.len() != polygons.len() {
        log::debug!(
            "triangulated {} polygons into {} triangles",
            polygons.len(),
            triangles.len()
        );
    }

    Ok((Faces::from_triangles(triangles), sets))
}

fn to_u32(index: usize) -> ObjResult<u32> {
    u32::try_from(index).map_err(|_| {
        MeshError::invalid_value(format!("vertex index {index} does not fit in 32 bits")).into()
    })
}

#[cfg(test)]
mod tests;
