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

//! Error types for edge subdivision.

use thiserror::Error;

use crate::mesh::MeshError;

/// Errors that can occur while subdividing edges.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubdivisionError {
    /// Segment count below one.
    #[error("invalid segment count: {0} (must be at least 1)")]
    InvalidSegments(usize),

    /// The source mesh could not produce its edges.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Result type for subdivision operations.
pub type SubdivisionResult<T> = std::result::Result<T, SubdivisionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SubdivisionError::InvalidSegments(0);
        assert_eq!(
            format!("{err}"),
            "invalid segment count: 0 (must be at least 1)"
        );

        let err: SubdivisionError = MeshError::VertexOutOfRange { index: 5, len: 2 }.into();
        assert!(format!("{err}").contains("index 5"));
    }
}
