//! Shared meshes for unit tests.

use glam::DVec3;

use crate::{GroupMap, Mesh};

/// Corners of a 3×3×3 cube at the origin.
pub(crate) fn cube_vertices() -> Vec<DVec3> {
    vec![
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(3.0, 0.0, 0.0),
        DVec3::new(3.0, 0.0, 3.0),
        DVec3::new(0.0, 0.0, 3.0),
        DVec3::new(0.0, 3.0, 0.0),
        DVec3::new(3.0, 3.0, 0.0),
        DVec3::new(3.0, 3.0, 3.0),
        DVec3::new(0.0, 3.0, 3.0),
    ]
}

/// Two triangles per cube side.
pub(crate) fn cube_faces() -> Vec<[u32; 3]> {
    vec![
        [0, 1, 2],
        [0, 2, 3],
        [7, 6, 5],
        [7, 5, 4],
        [4, 5, 1],
        [4, 1, 0],
        [5, 6, 2],
        [5, 2, 1],
        [6, 7, 3],
        [6, 3, 2],
        [3, 7, 4],
        [3, 4, 0],
    ]
}

pub(crate) fn cube() -> Mesh {
    Mesh::from_triangles(cube_vertices(), cube_faces()).unwrap()
}

/// Cube with face groups and vertex groups attached.
pub(crate) fn grouped_cube() -> Mesh {
    let face_groups = GroupMap::from_dict(
        [
            ("top", vec![10, 11]),
            ("bottom", vec![0, 1]),
            ("empty", vec![]),
        ],
        12,
    )
    .unwrap();
    let vertex_groups = GroupMap::from_dict(
        [("high", vec![2, 3, 6, 7]), ("origin", vec![0])],
        8,
    )
    .unwrap();
    cube()
        .with_face_groups(face_groups)
        .unwrap()
        .with_vertex_groups(vertex_groups)
        .unwrap()
}

/// Asserts that `submesh` holds exactly the given cube vertices, in order,
/// and faces whose positions match the given cube faces, in order.
pub(crate) fn assert_subcube(submesh: &Mesh, vertex_indices: &[usize], face_indices: &[usize]) {
    let vertices = cube_vertices();
    let faces = cube_faces();

    let expected_vertices: Vec<DVec3> = vertex_indices.iter().map(|&i| vertices[i]).collect();
    assert_eq!(submesh.vertices(), expected_vertices.as_slice());

    assert_eq!(submesh.face_count(), face_indices.len());
    for (new, &old) in face_indices.iter().enumerate() {
        let expected: Vec<DVec3> = faces[old].iter().map(|&v| vertices[v as usize]).collect();
        assert_eq!(submesh.face_vertices(new).unwrap(), expected, "face {new}");
    }
}
