// Copyright (c) 2024  The cswsavings developers

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

// -----------------------------------------------------------------------------------
// Numeric utilities
// -----------------------------------------------------------------------------------

use num::Float;

// Polynomial value at x, coefficients in increasing degree order: c[0] + c[1]·x + c[2]·x² + ...
pub fn polyval<T: Float>(coefs: &[T], x: T) -> T {
    coefs
        .iter()
        .rev()
        .fold(T::zero(), |acc, &c| acc * x + c)
}

// Restrict value to [lo, hi]
pub fn clamp<T: Float>(value: T, lo: T, hi: T) -> T {
    value.max(lo).min(hi)
}

// Linear blend between two values at fraction t
pub fn lerp<T: Float>(from: T, to: T, t: T) -> T {
    from + t * (to - from)
}
