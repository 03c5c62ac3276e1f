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
    mesh::{edge::Edge, error::MeshResult},
    numeric::scalar::Scalar,
};

/// A mesh whose edges can be enumerated.
///
/// The order of the returned edges must be stable for an unchanged mesh:
/// subdivision assigns new vertex indices in this order.
pub trait EdgeSource<T: Scalar, const N: usize> {
    fn edges(&self) -> MeshResult<Vec<Edge<T, N>>>;
}

/// A mesh that new vertex positions can be appended to.
pub trait VertexSink<T: Scalar, const N: usize> {
    fn vertex_count(&self) -> usize;

    /// Appends `position` and returns its index, which is always the
    /// `vertex_count()` observed just before the call.
    fn add_vertex_position(&mut self, position: Point<T, N>) -> usize;
}

impl<T: Scalar, const N: usize> EdgeSource<T, N> for [Edge<T, N>] {
    fn edges(&self) -> MeshResult<Vec<Edge<T, N>>> {
        Ok(self.to_vec())
    }
}

impl<T: Scalar, const N: usize> EdgeSource<T, N> for Vec<Edge<T, N>> {
    fn edges(&self) -> MeshResult<Vec<Edge<T, N>>> {
        Ok(self.clone())
    }
}

impl<T: Scalar, const N: usize> VertexSink<T, N> for Vec<Point<T, N>> {
    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn add_vertex_position(&mut self, position: Point<T, N>) -> usize {
        let idx = self.len();
        self.push(position);
        idx
    }
}
