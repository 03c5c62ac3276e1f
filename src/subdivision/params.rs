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

//! Parameters for edge subdivision.

use crate::subdivision::error::{SubdivisionError, SubdivisionResult};

/// Parameters for [`divide_edges_with`](super::divide_edges_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivideParams {
    /// Number of equal pieces each edge is cut into. Each edge gains
    /// `segments - 1` interior vertices. Default: 2 (midpoints).
    pub segments: usize,
}

impl Default for DivideParams {
    fn default() -> Self {
        Self { segments: 2 }
    }
}

impl DivideParams {
    #[must_use]
    pub fn new(segments: usize) -> Self {
        Self { segments }
    }

    /// One new vertex at the middle of every edge.
    #[must_use]
    pub fn midpoints() -> Self {
        Self::default()
    }

    /// Geodesic frequency `v`: every edge split into `v` pieces.
    #[must_use]
    pub fn frequency(v: usize) -> Self {
        Self { segments: v }
    }

    /// Interior vertices created per edge.
    pub fn interior_count(&self) -> usize {
        self.segments.saturating_sub(1)
    }

    pub fn validate(&self) -> SubdivisionResult<()> {
        if self.segments == 0 {
            return Err(SubdivisionError::InvalidSegments(self.segments));
        }
        Ok(())
    }
}
