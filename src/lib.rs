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

//! Uniform edge subdivision for polyhedral meshes.
//!
//! [`subdivision::divide_edges`] cuts every edge of a source mesh into equal
//! segments, appends the new points to a target mesh and returns a
//! [`subdivision::SubdivisionMap`] from each directed edge to its new
//! vertices. It is the first step of building geodesic tessellations from a
//! seed solid such as [`mesh::platonic::icosahedron`].

pub mod geometry;
pub mod io;
pub mod mesh;
pub mod numeric;
pub mod operations;
pub mod subdivision;

pub use subdivision::{
    DivideParams, EdgeKey, SubdivisionError, SubdivisionMap, SubdivisionResult, divide_edges,
    divide_edges_in_place, divide_edges_with,
};
