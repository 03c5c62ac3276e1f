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

use std::{array::from_fn, ops::Index};

use crate::{numeric::scalar::Scalar, operations::Zero};

#[derive(Clone, Debug, PartialEq)]
pub struct Vector<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    pub fn new(coords: [T; N]) -> Self {
        Vector { coords }
    }

    pub fn from_vals<V>(vals: [V; N]) -> Self
    where
        V: Into<T>,
    {
        Vector {
            coords: vals.map(|v| v.into()),
        }
    }

    pub fn scale(&self, k: &T) -> Self {
        Vector {
            coords: from_fn(|i| self.coords[i].clone() * k.clone()),
        }
    }

    /// Uniform division; callers guarantee `k` is non-zero.
    pub fn div_scalar(&self, k: &T) -> Self {
        Vector {
            coords: from_fn(|i| self.coords[i].clone() / k.clone()),
        }
    }

    pub fn dot(&self, other: &Self) -> T {
        let mut acc = T::zero();
        for i in 0..N {
            acc += &(self.coords[i].clone() * other.coords[i].clone());
        }
        acc
    }

    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

impl<T: Scalar, const N: usize> Zero for Vector<T, N> {
    fn zero() -> Self {
        Vector {
            coords: from_fn(|_| T::zero()),
        }
    }

    fn is_zero(&self) -> bool {
        self.coords.iter().all(|c| c.is_zero())
    }
    fn is_positive(&self) -> bool {
        self.coords.iter().all(|c| c.is_positive())
    }
    fn is_negative(&self) -> bool {
        self.coords.iter().all(|c| c.is_negative())
    }
}

pub type Vector3<T> = Vector<T, 3>;
