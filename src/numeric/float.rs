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
    numeric::scalar::Scalar,
    operations::{Abs, One, Zero},
};

pub const EPS: f64 = 1e-10;

impl Scalar for f64 {
    fn from_num_den(num: i32, den: i32) -> Self {
        num as f64 / den as f64
    }

    fn from_usize(n: usize) -> Self {
        n as f64
    }

    fn tolerance() -> Self {
        EPS
    }

    fn approx_eq(&self, other: &Self) -> bool {
        // relative for large magnitudes, absolute near zero
        let scale = self.abs().max(other.abs()).max(1.0);
        (self - other).abs() <= EPS * scale
    }
}

impl Zero for f64 {
    fn zero() -> Self {
        0.0
    }

    fn is_zero(&self) -> bool {
        f64::abs(*self) < EPS
    }
    fn is_positive(&self) -> bool {
        *self > EPS
    }
    fn is_negative(&self) -> bool {
        *self < -EPS
    }
}

impl One for f64 {
    fn one() -> Self {
        1.0
    }
}

impl Abs for f64 {
    fn abs(&self) -> Self {
        f64::abs(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_eq_scales_with_magnitude() {
        assert!(Scalar::approx_eq(&1.0e12, &(1.0e12 + 1.0e-3)));
        assert!(!Scalar::approx_eq(&1.0, &(1.0 + 1.0e-6)));
        assert!(Scalar::approx_eq(&0.1, &(0.3 - 0.2)));
    }

    #[test]
    fn sign_predicates_use_eps() {
        assert!(1e-12_f64.is_zero());
        assert!(!1e-12_f64.is_positive());
        assert!((-1.0_f64).is_negative());
        assert!(0.0_f64.is_positive_or_zero());
    }
}
