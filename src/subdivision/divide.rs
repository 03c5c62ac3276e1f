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

use tracing::{info, trace};

use crate::{
    mesh::{edge::Edge, traits::EdgeSource, traits::VertexSink},
    numeric::scalar::Scalar,
    subdivision::{
        error::SubdivisionResult,
        map::{EdgeKey, SubdivisionMap},
        params::DivideParams,
    },
};

/// Cuts every edge of `source` into `segments` equal pieces.
///
/// The `segments - 1` interior points of each edge are appended to `target`,
/// edge by edge in `source` order and from the first end towards the second
/// within an edge. The returned map holds, for each edge `(a, b)`, the new
/// indices under `(a, b)` and the same indices reversed under `(b, a)`.
///
/// `segments == 0` is rejected before `target` is touched. Any other failure
/// leaves the vertices appended so far in `target`.
pub fn divide_edges<T, const N: usize, S, M>(
    source: &S,
    target: &mut M,
    segments: usize,
) -> SubdivisionResult<SubdivisionMap>
where
    T: Scalar,
    S: EdgeSource<T, N> + ?Sized,
    M: VertexSink<T, N> + ?Sized,
{
    divide_edges_with(source, target, &DivideParams::new(segments))
}

/// Same as [`divide_edges`], with the segment count taken from `params`.
pub fn divide_edges_with<T, const N: usize, S, M>(
    source: &S,
    target: &mut M,
    params: &DivideParams,
) -> SubdivisionResult<SubdivisionMap>
where
    T: Scalar,
    S: EdgeSource<T, N> + ?Sized,
    M: VertexSink<T, N> + ?Sized,
{
    let edges = read_edges(source, params)?;
    Ok(divide_edge_list(&edges, target, params.segments))
}

/// Same as [`divide_edges`] with one mesh as both source and target.
///
/// Edges are read before the first vertex is appended; since only vertices
/// are added, the edge set and its end positions are unaffected.
pub fn divide_edges_in_place<T, const N: usize, M>(
    mesh: &mut M,
    segments: usize,
) -> SubdivisionResult<SubdivisionMap>
where
    T: Scalar,
    M: EdgeSource<T, N> + VertexSink<T, N> + ?Sized,
{
    let params = DivideParams::new(segments);
    let edges = read_edges(&*mesh, &params)?;
    Ok(divide_edge_list(&edges, mesh, params.segments))
}

/// Validates `params`, then snapshots the edge list of `source`.
fn read_edges<T, const N: usize, S>(
    source: &S,
    params: &DivideParams,
) -> SubdivisionResult<Vec<Edge<T, N>>>
where
    T: Scalar,
    S: EdgeSource<T, N> + ?Sized,
{
    params.validate()?;
    Ok(source.edges()?)
}

/// `segments` must already be validated.
fn divide_edge_list<T, const N: usize, M>(
    edges: &[Edge<T, N>],
    target: &mut M,
    segments: usize,
) -> SubdivisionMap
where
    T: Scalar,
    M: VertexSink<T, N> + ?Sized,
{
    let interior = segments - 1;
    let first_index = target.vertex_count();
    let mut next_index = first_index;
    let mut map = SubdivisionMap::with_capacity(edges.len() * 2);

    let divisor = T::from_usize(segments);

    for edge in edges {
        let [a, b] = edge.ends;
        let [p0, p1] = &edge.end_locations;
        let step = p0.vector_to(p1).div_scalar(&divisor);

        let mut forward = vec![0; interior];
        let mut reverse = vec![0; interior];

        for i in 1..segments {
            let offset = step.scale(&T::from_usize(i));
            let idx = target.add_vertex_position(p0.add_vector(&offset));
            debug_assert_eq!(idx, next_index, "vertex sink assigned an unexpected index");
            forward[i - 1] = idx;
            reverse[segments - i - 1] = idx;
            next_index = idx + 1;
        }

        trace!(a, b, new_vertices = ?forward, "divided edge");

        map.insert(EdgeKey::new(a, b), forward);
        map.insert(EdgeKey::new(b, a), reverse);
    }

    info!(
        edges = edges.len(),
        segments,
        added = next_index - first_index,
        "Edge subdivision complete"
    );

    map
}
