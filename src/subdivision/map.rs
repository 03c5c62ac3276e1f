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

use std::collections::{HashMap, hash_map};

/// Directed edge `from -> to` between two original vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    pub from: usize,
    pub to: usize,
}

impl EdgeKey {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

impl From<(usize, usize)> for EdgeKey {
    fn from((from, to): (usize, usize)) -> Self {
        Self { from, to }
    }
}

/// Interior vertices of every subdivided edge, looked up by direction.
///
/// `get(a, b)` lists the new vertices from the one nearest `a` to the one
/// nearest `b`; `get(b, a)` is the same list reversed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubdivisionMap {
    entries: HashMap<EdgeKey, Vec<usize>>,
}

impl SubdivisionMap {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Stores `vertices` under `key`, returning what was there before.
    pub fn insert(&mut self, key: EdgeKey, vertices: Vec<usize>) -> Option<Vec<usize>> {
        self.entries.insert(key, vertices)
    }

    pub fn get(&self, from: usize, to: usize) -> Option<&[usize]> {
        self.get_key(&EdgeKey::new(from, to))
    }

    pub fn get_key(&self, key: &EdgeKey) -> Option<&[usize]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn contains(&self, from: usize, to: usize) -> bool {
        self.entries.contains_key(&EdgeKey::new(from, to))
    }

    /// Number of directed entries, twice the number of subdivided edges.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, EdgeKey, Vec<usize>> {
        self.entries.iter()
    }

    pub fn keys(&self) -> hash_map::Keys<'_, EdgeKey, Vec<usize>> {
        self.entries.keys()
    }

    pub fn into_inner(self) -> HashMap<EdgeKey, Vec<usize>> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a SubdivisionMap {
    type Item = (&'a EdgeKey, &'a Vec<usize>);
    type IntoIter = hash_map::Iter<'a, EdgeKey, Vec<usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
