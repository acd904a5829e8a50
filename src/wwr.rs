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

/*!
Relación ventana-muro
=====================

Window-to-wall ratio of the CSW area over a square footprint building with
a fixed floor-to-floor height. A geometric proxy, not a measured value.
*/

use crate::defaults::FLOOR_TO_FLOOR_HEIGHT;

/// Exterior wall area of a square footprint building [sq ft]
///
/// Zero for zero floors or a non positive building area.
pub fn wall_area(building_area: f64, num_floors: u32) -> f64 {
    if num_floors == 0 || building_area <= 0.0 {
        return 0.0;
    }
    let floors = f64::from(num_floors);
    let floor_area = building_area / floors;
    floor_area.sqrt() * 4.0 * FLOOR_TO_FLOOR_HEIGHT * floors
}

/// Window-to-wall ratio of the CSW area [-]
///
/// Zero for zero floors or a non positive building area.
pub fn wwr(csw_area: f64, building_area: f64, num_floors: u32) -> f64 {
    let wall = wall_area(building_area, num_floors);
    if wall > 0.0 {
        csw_area / wall
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wwr_square_footprint() {
        // 5 floors of 10000 SF: 100 ft sides, 400 ft perimeter, 75 ft tall
        assert_eq!(wall_area(50_000.0, 5), 30_000.0);
        assert_eq!(wwr(6_000.0, 50_000.0, 5), 0.2);
    }

    #[test]
    fn wwr_degenerate() {
        assert_eq!(wwr(12_000.0, 0.0, 5), 0.0);
        assert_eq!(wwr(12_000.0, 75_000.0, 0), 0.0);
        assert_eq!(wwr(0.0, 0.0, 0), 0.0);
    }
}
