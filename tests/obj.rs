// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::io::Cursor;

use polyseg::divide_edges_in_place;
use polyseg::geometry::Point3;
use polyseg::io::obj::{ObjError, load_obj, read_obj, save_obj, write_obj};
use polyseg::mesh::{Polyhedron, platonic};
use polyseg::numeric::ExactRational;

#[test]
fn test_write_obj_cube() {
    let cube = platonic::cube::<f64>();
    let mut buf = Vec::new();

    write_obj(&cube, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 8 + 6);
    assert_eq!(lines[0], "v -1 -1 -1");
    assert_eq!(lines[6], "v 1 1 1");
    assert_eq!(lines[8], "f 1 4 3 2");
    assert_eq!(lines[13], "f 2 3 7 6");
}

#[test]
fn test_read_obj_skips_other_records() {
    let src = "\
# a quad and a triangle
o thing
v 0 0 0
v 1 0 0
vn 0 0 1
v 1 1 0
v 0 1 0
vt 0.5 0.5
f 1/1/1 2/1/1 3/1/1 4/1/1
f -4//1 -2//1 -1//1
";
    let mesh: Polyhedron<f64, 3> = read_obj(Cursor::new(src)).unwrap();

    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.vertex_positions[2], Point3::from_vals([1.0, 1.0, 0.0]));
    assert_eq!(mesh.faces, vec![vec![0, 1, 2, 3], vec![0, 2, 3]]);
    assert_eq!(mesh.edge_count().unwrap(), 5);
}

#[test]
fn test_read_obj_reports_line_numbers() {
    let bad_coord = "v 0 0 0\nv 1 zero 0\n";
    match read_obj::<f64, _>(Cursor::new(bad_coord)) {
        Err(ObjError::Parse { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected parse error, got {other:?}"),
    }

    let missing_coord = "v 0 0\n";
    assert!(matches!(
        read_obj::<f64, _>(Cursor::new(missing_coord)),
        Err(ObjError::Parse { line: 1, .. })
    ));

    let forward_ref = "v 0 0 0\nv 1 0 0\nf 1 2 3\nv 0 1 0\n";
    assert!(matches!(
        read_obj::<f64, _>(Cursor::new(forward_ref)),
        Err(ObjError::Parse { line: 3, .. })
    ));

    let two_gon = "v 0 0 0\nv 1 0 0\nf 1 2\n";
    assert!(matches!(
        read_obj::<f64, _>(Cursor::new(two_gon)),
        Err(ObjError::Parse { line: 3, .. })
    ));
}

#[test]
fn test_read_obj_rejects_non_finite_coordinates() {
    let cases = [
        ("v nan inf 1\nv 0 0 0\nv 1 0 0\nf 1 2 3\n", 1),
        ("v 0 0 0\nv 1 -inf 0\n", 2),
        ("v 0 0 0\nv 1 0 0\nv 0 1 infinity\n", 3),
    ];

    for (src, bad_line) in cases {
        match read_obj::<ExactRational, _>(Cursor::new(src)) {
            Err(ObjError::Parse { line, message }) => {
                assert_eq!(line, bad_line);
                assert!(message.contains("non-finite"), "{message}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
        assert!(matches!(
            read_obj::<f64, _>(Cursor::new(src)),
            Err(ObjError::Parse { line, .. }) if line == bad_line
        ));
    }
}

#[test]
fn test_exact_scalar_survives_round_trip_through_f64() {
    let mut tet = platonic::tetrahedron::<ExactRational>();
    divide_edges_in_place(&mut tet, 4).unwrap();

    let mut buf = Vec::new();
    write_obj(&tet, &mut buf).unwrap();
    let back: Polyhedron<ExactRational, 3> = read_obj(Cursor::new(buf)).unwrap();

    // quarters are dyadic, so nothing is lost going through f64 text
    assert_eq!(back, tet);
}

#[test]
fn test_save_and_load_subdivided_icosahedron() {
    let mut ico = platonic::icosahedron::<f64>();
    divide_edges_in_place(&mut ico, 3).unwrap();

    let path = std::env::temp_dir().join(format!("polyseg_ico_{}.obj", std::process::id()));
    save_obj(&ico, &path).unwrap();
    let loaded: Polyhedron<f64, 3> = load_obj(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded.vertex_count(), 12 + 30 * 2);
    assert_eq!(loaded.faces, ico.faces);
    for (a, b) in loaded.vertex_positions.iter().zip(ico.vertex_positions.iter()) {
        assert_eq!(a, b);
    }
}

#[test]
fn test_load_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("polyseg_does_not_exist.obj");
    assert!(matches!(
        load_obj::<f64, _>(&path),
        Err(ObjError::Io(_))
    ));
}
