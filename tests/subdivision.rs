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

use std::collections::HashSet;

use polyseg::geometry::Point3;
use polyseg::mesh::{Edge, MeshError, Polyhedron, platonic};
use polyseg::numeric::{ExactRational, Scalar};
use polyseg::{
    DivideParams, EdgeKey, SubdivisionError, SubdivisionMap, divide_edges, divide_edges_in_place,
    divide_edges_with,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn edge<T: Scalar>(a: usize, b: usize, positions: &[Point3<T>]) -> Edge<T, 3> {
    Edge::resolve(a, b, positions).expect("test edge must resolve")
}

/// Checks count, symmetry, geometry and index order for one call.
fn assert_subdivision<T: Scalar>(
    edges: &[Edge<T, 3>],
    map: &SubdivisionMap,
    target: &[Point3<T>],
    initial_count: usize,
    segments: usize,
) {
    let interior = segments - 1;
    assert_eq!(target.len(), initial_count + interior * edges.len());
    assert_eq!(map.len(), 2 * edges.len());

    let mut expected_next = initial_count;
    for e in edges {
        let [a, b] = e.ends;
        let forward = map.get(a, b).expect("forward entry");
        let reverse = map.get(b, a).expect("reverse entry");
        assert_eq!(forward.len(), interior);
        let mut flipped = reverse.to_vec();
        flipped.reverse();
        assert_eq!(forward, &flipped[..]);

        let [p0, p1] = &e.end_locations;
        let diff = p0.vector_to(p1);
        for (k, &idx) in forward.iter().enumerate() {
            assert_eq!(idx, expected_next);
            expected_next += 1;

            let i = (k + 1) as i32;
            let t = T::from_num_den(i, segments as i32);
            let expected = p0.add_vector(&diff.scale(&t));
            assert!(
                target[idx].approx_eq(&expected),
                "vertex {idx} at {:?}, expected {:?}",
                target[idx],
                expected
            );
        }
    }
}

#[test]
fn test_single_edge_into_four_segments() {
    let mut target = vec![
        Point3::<f64>::from_vals([0.0, 0.0, 0.0]),
        Point3::<f64>::from_vals([4.0, 0.0, 0.0]),
    ];
    let source = vec![edge(0, 1, &target)];

    let map = divide_edges(&source, &mut target, 4).unwrap();

    assert_eq!(map.len(), 2);
    assert_eq!(map.get(0, 1), Some(&[2, 3, 4][..]));
    assert_eq!(map.get(1, 0), Some(&[4, 3, 2][..]));
    assert_eq!(target.len(), 5);
    assert_eq!(target[2], Point3::from_vals([1.0, 0.0, 0.0]));
    assert_eq!(target[3], Point3::from_vals([2.0, 0.0, 0.0]));
    assert_eq!(target[4], Point3::from_vals([3.0, 0.0, 0.0]));
}

#[test]
fn test_single_edge_exact_thirds() {
    let mut target = vec![
        Point3::<ExactRational>::from_vals([0, 0, 0]),
        Point3::<ExactRational>::from_vals([1, 2, -1]),
    ];
    let source = vec![edge(0, 1, &target)];

    let map = divide_edges(&source, &mut target, 3).unwrap();

    assert_eq!(map.get(0, 1), Some(&[2, 3][..]));
    assert_eq!(
        target[2],
        Point3::new([
            ExactRational::new(1, 3),
            ExactRational::new(2, 3),
            ExactRational::new(-1, 3),
        ])
    );
    assert_eq!(
        target[3],
        Point3::new([
            ExactRational::new(2, 3),
            ExactRational::new(4, 3),
            ExactRational::new(-2, 3),
        ])
    );
}

#[test]
fn test_two_disjoint_edges_midpoints() {
    let positions = vec![
        Point3::<f64>::from_vals([0.0, 0.0, 0.0]),
        Point3::<f64>::from_vals([2.0, 0.0, 0.0]),
        Point3::<f64>::from_vals([0.0, 4.0, 0.0]),
        Point3::<f64>::from_vals([0.0, 4.0, 6.0]),
    ];
    let source = vec![edge(0, 1, &positions), edge(2, 3, &positions)];
    let mut target = positions.clone();

    let map = divide_edges_with(&source, &mut target, &DivideParams::midpoints()).unwrap();

    assert_eq!(map.get(0, 1), Some(&[4][..]));
    assert_eq!(map.get(1, 0), Some(&[4][..]));
    assert_eq!(map.get(2, 3), Some(&[5][..]));
    assert_eq!(map.get(3, 2), Some(&[5][..]));
    assert_eq!(target[4], Point3::from_vals([1.0, 0.0, 0.0]));
    assert_eq!(target[5], Point3::from_vals([0.0, 4.0, 3.0]));
    assert_subdivision(&source, &map, &target, 4, 2);
}

#[test]
fn test_edge_orientation_is_kept() {
    let positions = vec![
        Point3::<f64>::from_vals([0.0, 0.0, 0.0]),
        Point3::<f64>::from_vals([3.0, 0.0, 0.0]),
    ];
    // stored as (1, 0): interpolation starts at vertex 1
    let source = vec![edge(1, 0, &positions)];
    let mut target: Vec<Point3<f64>> = Vec::new();

    let map = divide_edges(&source, &mut target, 3).unwrap();

    assert_eq!(map.get(1, 0), Some(&[0, 1][..]));
    assert_eq!(map.get(0, 1), Some(&[1, 0][..]));
    assert_eq!(target[0], Point3::from_vals([2.0, 0.0, 0.0]));
    assert_eq!(target[1], Point3::from_vals([1.0, 0.0, 0.0]));
}

#[test]
fn test_one_segment_adds_nothing() {
    let source = platonic::icosahedron::<f64>();
    let mut target = source.clone();

    let map = divide_edges(&source, &mut target, 1).unwrap();

    assert_eq!(map.len(), 60);
    assert!(map.iter().all(|(_, v)| v.is_empty()));
    assert_eq!(target.vertex_count(), 12);
}

#[test]
fn test_zero_segments_rejected_before_mutation() {
    let source = platonic::cube::<f64>();
    let mut target = source.clone();

    let err = divide_edges(&source, &mut target, 0).unwrap_err();

    assert_eq!(err, SubdivisionError::InvalidSegments(0));
    assert_eq!(target, source);

    let err = divide_edges_in_place(&mut target, 0).unwrap_err();
    assert_eq!(err, SubdivisionError::InvalidSegments(0));
    assert_eq!(target.vertex_count(), 8);
}

#[test]
fn test_params_entry_point_matches_plain_call() {
    let source = platonic::octahedron::<f64>();

    let mut rejected = source.clone();
    let err = divide_edges_with(&source, &mut rejected, &DivideParams::new(0)).unwrap_err();
    assert_eq!(err, SubdivisionError::InvalidSegments(0));
    assert_eq!(rejected, source);

    let mut plain = source.clone();
    let mut with_params = source.clone();
    let mut in_place = source.clone();
    let expected = divide_edges(&source, &mut plain, 3).unwrap();

    assert_eq!(
        divide_edges_with(&source, &mut with_params, &DivideParams::frequency(3)).unwrap(),
        expected
    );
    assert_eq!(divide_edges_in_place(&mut in_place, 3).unwrap(), expected);
    assert_eq!(with_params, plain);
    assert_eq!(in_place, plain);
}

#[test]
fn test_out_of_range_vertex_propagates() {
    let mut source = Polyhedron::<f64, 3>::new();
    source.add_vertex_position(Point3::from_vals([0.0, 0.0, 0.0]));
    source.add_vertex_position(Point3::from_vals([1.0, 0.0, 0.0]));
    source.add_face(&[0, 1, 5]);
    let mut target: Vec<Point3<f64>> = Vec::new();

    let err = divide_edges(&source, &mut target, 3).unwrap_err();

    assert_eq!(
        err,
        SubdivisionError::Mesh(MeshError::VertexOutOfRange { index: 5, len: 2 })
    );
    assert!(target.is_empty());
}

#[test]
fn test_coincident_endpoints() {
    let positions = vec![
        Point3::<f64>::from_vals([1.5, -2.0, 0.25]),
        Point3::<f64>::from_vals([1.5, -2.0, 0.25]),
    ];
    let source = vec![edge(0, 1, &positions)];
    let mut target = positions.clone();

    let map = divide_edges(&source, &mut target, 5).unwrap();

    assert_eq!(map.get(0, 1), Some(&[2, 3, 4, 5][..]));
    for p in &target[2..] {
        assert_eq!(p, &positions[0]);
    }
}

#[test]
fn test_repeated_edge_overwrites_entry() {
    let positions = vec![
        Point3::<f64>::from_vals([0.0, 0.0, 0.0]),
        Point3::<f64>::from_vals([2.0, 0.0, 0.0]),
    ];
    let source = vec![edge(0, 1, &positions), edge(1, 0, &positions)];
    let mut target = positions.clone();

    let map = divide_edges(&source, &mut target, 2).unwrap();

    // both edges append a vertex, the second one wins in the map
    assert_eq!(target.len(), 4);
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(1, 0), Some(&[3][..]));
    assert_eq!(map.get(0, 1), Some(&[3][..]));
}

#[test]
fn test_platonic_solids_exact() {
    let solids = [
        platonic::tetrahedron::<ExactRational>(),
        platonic::cube::<ExactRational>(),
        platonic::octahedron::<ExactRational>(),
        platonic::icosahedron::<ExactRational>(),
    ];

    for solid in &solids {
        let edges = solid.edges().unwrap();
        for segments in 1..=5 {
            let mut target = solid.vertex_positions.clone();
            let map = divide_edges(solid, &mut target, segments).unwrap();
            assert_subdivision(&edges, &map, &target, solid.vertex_count(), segments);
        }
    }
}

#[test]
fn test_tetrahedron_edge_order() {
    let tet = platonic::tetrahedron::<f64>();
    let mut target = tet.clone();

    let map = divide_edges(&tet, &mut target, 3).unwrap();

    // faces [0,1,2], [0,3,1], ... give edges (0,1), (1,2), (2,0), (0,3), (3,1), (2,3)
    assert_eq!(map.get(0, 1), Some(&[4, 5][..]));
    assert_eq!(map.get(1, 2), Some(&[6, 7][..]));
    assert_eq!(map.get(2, 0), Some(&[8, 9][..]));
    assert_eq!(map.get(0, 2), Some(&[9, 8][..]));
    assert_eq!(map.get(0, 3), Some(&[10, 11][..]));
    assert_eq!(map.get(3, 1), Some(&[12, 13][..]));
    assert_eq!(map.get(2, 3), Some(&[14, 15][..]));
    assert_eq!(target.vertex_count(), 16);
}

#[test]
fn test_in_place_icosahedron_frequency_four() {
    let mut ico = platonic::icosahedron::<f64>();
    let original = ico.clone();

    let map = divide_edges_in_place(&mut ico, 4).unwrap();

    assert_eq!(ico.vertex_count(), 12 + 30 * 3);
    assert_eq!(ico.faces, original.faces);
    assert_eq!(&ico.vertex_positions[..12], &original.vertex_positions[..]);
    assert_subdivision(
        &original.edges().unwrap(),
        &map,
        &ico.vertex_positions,
        12,
        4,
    );
}

#[test]
fn test_separate_source_and_target() {
    let source = platonic::octahedron::<f64>();
    let mut target = Polyhedron::<f64, 3>::new();
    target.add_vertex_position(Point3::from_vals([9.0, 9.0, 9.0]));

    let map = divide_edges(&source, &mut target, 2).unwrap();

    assert_eq!(source.vertex_count(), 6);
    assert_eq!(target.vertex_count(), 1 + 12);
    let indices: HashSet<usize> = map.iter().flat_map(|(_, v)| v.iter().copied()).collect();
    assert_eq!(indices, (1..13).collect());
}

#[test]
fn test_random_edge_sets() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..20 {
        let n = rng.random_range(2..30);
        let positions: Vec<Point3<f64>> = (0..n)
            .map(|_| {
                Point3::from_vals([
                    rng.random_range(-100.0..100.0),
                    rng.random_range(-100.0..100.0),
                    rng.random_range(-100.0..100.0),
                ])
            })
            .collect();

        let mut seen = HashSet::new();
        let mut source = Vec::new();
        for _ in 0..rng.random_range(1..60) {
            let a = rng.random_range(0..n);
            let b = rng.random_range(0..n);
            if a == b || !seen.insert((a.min(b), a.max(b))) {
                continue;
            }
            source.push(edge(a, b, &positions));
        }

        let segments = rng.random_range(1..8);
        let prefix = rng.random_range(0..5);
        let mut target = positions[..prefix.min(n)].to_vec();
        let initial = target.len();

        let map = divide_edges(&source, &mut target, segments).unwrap();
        assert_subdivision(&source, &map, &target, initial, segments);
    }
}

#[test]
fn test_map_lookup_by_key() {
    let cube = platonic::cube::<f64>();
    let mut target = cube.clone();

    let map = divide_edges(&cube, &mut target, 3).unwrap();

    let mut keys: Vec<EdgeKey> = map.keys().copied().collect();
    keys.sort();
    assert_eq!(keys.len(), 24);
    assert_eq!(keys[0], EdgeKey::new(0, 1));
    for key in &keys {
        assert!(map.contains(key.from, key.to));
        let back: Vec<usize> = map
            .get_key(&key.reversed())
            .unwrap()
            .iter()
            .rev()
            .copied()
            .collect();
        assert_eq!(map.get_key(key).unwrap(), &back[..]);
    }

    let raw = map.clone().into_inner();
    assert_eq!(raw.len(), map.len());
    assert_eq!((&map).into_iter().count(), 24);
}
