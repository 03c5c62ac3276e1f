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

use crate::{
    geometry::point::Point,
    mesh::error::{MeshError, MeshResult},
    numeric::scalar::Scalar,
};

/// An undirected edge together with the positions of its ends.
///
/// `ends` keeps the orientation the edge was first seen with; it is not
/// sorted. `end_locations[k]` is the position of vertex `ends[k]` at the
/// time the edge was read.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<T: Scalar, const N: usize> {
    pub ends: [usize; 2],
    pub end_locations: [Point<T, N>; 2],
}

impl<T: Scalar, const N: usize> Edge<T, N> {
    pub fn new(ends: [usize; 2], end_locations: [Point<T, N>; 2]) -> Self {
        Self {
            ends,
            end_locations,
        }
    }

    /// Looks both ends up in `positions`.
    pub fn resolve(a: usize, b: usize, positions: &[Point<T, N>]) -> MeshResult<Self> {
        let lookup = |index: usize| {
            positions
                .get(index)
                .cloned()
                .ok_or(MeshError::VertexOutOfRange {
                    index,
                    len: positions.len(),
                })
        };
        Ok(Self {
            ends: [a, b],
            end_locations: [lookup(a)?, lookup(b)?],
        })
    }

    /// Order-independent identity of the edge.
    pub fn canonical_ends(&self) -> (usize, usize) {
        let [a, b] = self.ends;
        if a < b { (a, b) } else { (b, a) }
    }
}
