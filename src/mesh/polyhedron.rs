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

use crate::{
    geometry::point::Point,
    mesh::{
        edge::Edge,
        error::{MeshError, MeshResult},
        traits::{EdgeSource, VertexSink},
    },
    numeric::scalar::Scalar,
};

/// Polygon mesh: vertex positions plus faces as cyclic lists of vertex
/// indices. Vertex indices are assigned in insertion order and never reused.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyhedron<T: Scalar, const N: usize> {
    pub vertex_positions: Vec<Point<T, N>>,
    pub faces: Vec<Vec<usize>>,
}

impl<T: Scalar, const N: usize> Polyhedron<T, N> {
    pub fn new() -> Self {
        Self {
            vertex_positions: Vec::new(),
            faces: Vec::new(),
        }
    }

    pub fn from_parts(vertex_positions: Vec<Point<T, N>>, faces: Vec<Vec<usize>>) -> Self {
        Self {
            vertex_positions,
            faces,
        }
    }

    pub fn add_vertex_position(&mut self, position: Point<T, N>) -> usize {
        let idx = self.vertex_positions.len();
        self.vertex_positions.push(position);
        idx
    }

    pub fn add_vertex_positions<I>(&mut self, positions: I)
    where
        I: IntoIterator<Item = Point<T, N>>,
    {
        self.vertex_positions.extend(positions);
    }

    /// Stores a face as given. Indices are checked lazily, when edges are read.
    pub fn add_face(&mut self, face: &[usize]) -> usize {
        let idx = self.faces.len();
        self.faces.push(face.to_vec());
        idx
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_positions.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn vertex_position(&self, index: usize) -> MeshResult<&Point<T, N>> {
        self.vertex_positions
            .get(index)
            .ok_or(MeshError::VertexOutOfRange {
                index,
                len: self.vertex_positions.len(),
            })
    }

    /// Unique undirected edges, in the order they are first met walking the
    /// faces (each face cyclically). An edge keeps the direction it was first
    /// seen with. Repeated consecutive indices in a face do not form an edge.
    pub fn edges(&self) -> MeshResult<Vec<Edge<T, N>>> {
        let mut seen = HashSet::new();
        let mut edges = Vec::new();

        for face in &self.faces {
            let n = face.len();
            if n < 2 {
                continue;
            }
            for k in 0..n {
                let a = face[k];
                let b = face[(k + 1) % n];
                if a == b {
                    continue;
                }
                let key = if a < b { (a, b) } else { (b, a) };
                if !seen.insert(key) {
                    continue;
                }
                edges.push(Edge::resolve(a, b, &self.vertex_positions)?);
            }
        }

        Ok(edges)
    }

    pub fn edge_count(&self) -> MeshResult<usize> {
        Ok(self.edges()?.len())
    }
}

impl<T: Scalar, const N: usize> EdgeSource<T, N> for Polyhedron<T, N> {
    fn edges(&self) -> MeshResult<Vec<Edge<T, N>>> {
        Polyhedron::edges(self)
    }
}

impl<T: Scalar, const N: usize> VertexSink<T, N> for Polyhedron<T, N> {
    fn vertex_count(&self) -> usize {
        self.vertex_positions.len()
    }

    fn add_vertex_position(&mut self, position: Point<T, N>) -> usize {
        Polyhedron::add_vertex_position(self, position)
    }
}
