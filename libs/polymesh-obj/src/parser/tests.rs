//! Tests for the OBJ parser.

use glam::DVec3;

use super::*;
use crate::ObjErrorKind;

fn parse(source: &str) -> ObjResult<Mesh> {
    parse_source(source, &ObjLoadOptions::default())
}

fn parse_triangulated(source: &str) -> ObjResult<Mesh> {
    parse_source(source, &ObjLoadOptions::triangulated())
}

fn faces_of(mesh: &Mesh) -> Vec<Vec<u32>> {
    mesh.faces().iter().map(<[u32]>::to_vec).collect()
}

const SQUARE: &str = "
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
";

// =============================================================================
// STATEMENTS
// =============================================================================

#[test]
fn test_parse_triangle() {
    let mesh = parse(&format!("{SQUARE}f 1 2 3\n")).unwrap();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.vertices()[2], DVec3::new(1.0, 1.0, 0.0));
    assert!(mesh.is_triangles());
    assert_eq!(faces_of(&mesh), vec![vec![0, 1, 2]]);
    assert!(mesh.face_groups().is_none());
}

#[test]
fn test_parse_reference_forms() {
    let source = format!("{SQUARE}vt 0 0\nvn 0 0 1\nf 1/1 2/1/1 3//1 4\n");
    let mesh = parse(&source).unwrap();
    assert_eq!(faces_of(&mesh), vec![vec![0, 1, 2, 3]]);
}

#[test]
fn test_parse_negative_references() {
    let mesh = parse(&format!("{SQUARE}f -4 -3 -2 -1\n")).unwrap();
    assert_eq!(faces_of(&mesh), vec![vec![0, 1, 2, 3]]);
}

#[test]
fn test_parse_ignores_comments_and_other_statements() {
    let source = format!(
        "# header\nmtllib cube.mtl\n{SQUARE}usemtl white\ns off\nf 1 2 3 # trailing\n"
    );
    let mesh = parse(&source).unwrap();
    assert_eq!(mesh.face_count(), 1);
}

#[test]
fn test_parse_vertex_with_weight() {
    let mesh = parse("v 1 2 3 1.0\nv 0 0 0\nv 1 1 1\nf 1 2 3\n").unwrap();
    assert_eq!(mesh.vertices()[0], DVec3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_parse_empty_source() {
    let mesh = parse("").unwrap();
    assert!(mesh.is_empty());
    assert_eq!(mesh.face_count(), 0);
}

// =============================================================================
// ERRORS
// =============================================================================

#[test]
fn test_parse_bad_vertex() {
    let err = parse("v 1 2\n").unwrap_err();
    assert_eq!(err.kind(), ObjErrorKind::Load);
    assert!(matches!(err, ObjError::Parse { line: 1, .. }));

    let err = parse("v 1 two 3\n").unwrap_err();
    assert_eq!(err.kind(), ObjErrorKind::Load);
}

#[test]
fn test_parse_out_of_range_reference() {
    let err = parse(&format!("{SQUARE}f 1 2 9\n")).unwrap_err();
    assert_eq!(err.kind(), ObjErrorKind::Load);
    assert!(matches!(err, ObjError::Parse { line: 6, .. }), "{err}");
}

#[test]
fn test_parse_zero_and_relative_underflow() {
    assert_eq!(parse(&format!("{SQUARE}f 0 1 2\n")).unwrap_err().kind(), ObjErrorKind::Load);
    assert_eq!(parse(&format!("{SQUARE}f -5 1 2\n")).unwrap_err().kind(), ObjErrorKind::Load);
}

#[test]
fn test_parse_degenerate_face() {
    let err = parse(&format!("{SQUARE}f 1 2\n")).unwrap_err();
    assert_eq!(err.kind(), ObjErrorKind::Load);
}

#[test]
fn test_parse_mixed_arity() {
    let err = parse(&format!("{SQUARE}f 1 2 3\nf 1 2 3 4\n")).unwrap_err();
    assert_eq!(err.kind(), ObjErrorKind::Arity);
}

#[test]
fn test_parse_unsupported_arity() {
    let source = "v 0 0 0\nv 1 0 0\nv 2 1 0\nv 1 2 0\nv 0 1 0\nf 1 2 3 4 5\n";
    let err = parse(source).unwrap_err();
    assert_eq!(err.kind(), ObjErrorKind::Arity);

    let mesh = parse_triangulated(source).unwrap();
    assert_eq!(faces_of(&mesh), vec![vec![0, 1, 2], vec![0, 2, 3], vec![0, 3, 4]]);
}

// =============================================================================
// TRIANGULATION
// =============================================================================

#[test]
fn test_triangulate_mixed_arity() {
    let mesh = parse_triangulated(&format!("{SQUARE}f 1 2 3\nf 1 2 3 4\n")).unwrap();
    assert_eq!(
        faces_of(&mesh),
        vec![vec![0, 1, 2], vec![0, 1, 2], vec![0, 2, 3]]
    );
}

#[test]
fn test_triangulate_keeps_triangles() {
    let mesh = parse_triangulated(&format!("{SQUARE}f 3 1 2\n")).unwrap();
    assert_eq!(faces_of(&mesh), vec![vec![2, 0, 1]]);
}

// =============================================================================
// GROUPS
// =============================================================================

#[test]
fn test_groups_in_first_appearance_order() {
    let source = format!("{SQUARE}g b shared\nf 1 2 3\ng a shared\nf 1 3 4\n");
    let mesh = parse(&source).unwrap();
    let groups = mesh.face_groups().unwrap();

    assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["b", "shared", "a"]);
    assert_eq!(groups.get("b").unwrap(), &[true, false]);
    assert_eq!(groups.get("shared").unwrap(), &[true, true]);
    assert_eq!(groups.get("a").unwrap(), &[false, true]);
}

#[test]
fn test_faces_before_first_group_are_ungrouped() {
    let source = format!("{SQUARE}f 1 2 3\ng top\nf 1 3 4\n");
    let mesh = parse(&source).unwrap();
    assert_eq!(mesh.face_groups().unwrap().get("top").unwrap(), &[false, true]);
}

#[test]
fn test_unnamed_group_uses_default_name() {
    let mesh = parse(&format!("{SQUARE}g\nf 1 2 3\n")).unwrap();
    let groups = mesh.face_groups().unwrap();
    assert_eq!(groups.get(DEFAULT_GROUP_NAME).unwrap(), &[true]);
}

#[test]
fn test_reopened_group_accumulates() {
    let source = format!("{SQUARE}g a\nf 1 2 3\ng b\nf 1 3 4\ng a\nf 2 3 4\n");
    let mesh = parse(&source).unwrap();
    let groups = mesh.face_groups().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups.get("a").unwrap(), &[true, false, true]);
}

#[test]
fn test_triangulated_faces_inherit_groups() {
    let source = format!("{SQUARE}g quad\nf 1 2 3 4\ng tri\nf 1 2 3\n");
    let mesh = parse_triangulated(&source).unwrap();
    let groups = mesh.face_groups().unwrap();
    assert_eq!(groups.get("quad").unwrap(), &[true, true, false]);
    assert_eq!(groups.get("tri").unwrap(), &[false, false, true]);
}

#[test]
fn test_group_without_faces_is_empty() {
    let mesh = parse(&format!("{SQUARE}g lonely\n")).unwrap();
    let groups = mesh.face_groups().unwrap();
    assert!(groups.contains("lonely"));
    assert!(groups.get("lonely").unwrap().is_empty());
}

#[test]
fn test_file_order_numbering_survives_groups() {
    // Unreferenced and duplicate vertices keep their file positions.
    let source = "v 0 0 0\nv 9 9 9\nv 0 0 0\nv 1 0 0\nv 0 1 0\n\
                  g a\nf 1 4 5\ng b\nf 3 4 5\n";
    let mesh = parse(source).unwrap();

    assert_eq!(mesh.vertex_count(), 5);
    assert_eq!(mesh.vertices()[1], DVec3::splat(9.0));
    assert_eq!(faces_of(&mesh), vec![vec![0, 3, 4], vec![2, 3, 4]]);
    let groups = mesh.face_groups().unwrap();
    assert_eq!(groups.get("a").unwrap(), &[true, false]);
    assert_eq!(groups.get("b").unwrap(), &[false, true]);
}
