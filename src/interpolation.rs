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
Interpolación
=============

Clamped linear interpolation between the two brackets of the simulation
campaign that enclose the actual operating hours or occupancy.

Office brackets are piecewise: (2912, 2080) up to 2912 h and (8760, 2912)
above. Hotel brackets are fixed at (100, 33) %.
*/

use crate::{
    defaults::{HOTEL_OCCUPANCY_BRACKETS, OFFICE_HOURS_BRACKETS},
    error::{CswError, Result},
    mathops::lerp,
};

/// Bracket endpoints (high, low) for the given annual operating hours
pub fn hours_brackets(hours: f64) -> (u32, u32) {
    let [low, mid, high] = OFFICE_HOURS_BRACKETS;
    if hours > f64::from(mid) {
        (high, mid)
    } else {
        (mid, low)
    }
}

/// Bracket endpoints (high, low) for hotel occupancy
pub fn occupancy_brackets() -> (u32, u32) {
    let [low, high] = HOTEL_OCCUPANCY_BRACKETS;
    (high, low)
}

/// Value at `x` from the values at the high and low brackets
///
/// Below the low bracket the low value is returned, at or above the high
/// bracket the high value is returned. Endpoints are exact.
///
/// # Errors
///
/// Identical bracket endpoints
pub fn interpolate(x: f64, val_high: f64, val_low: f64, bracket_high: f64, bracket_low: f64) -> Result<f64> {
    if (bracket_high - bracket_low).abs() < std::f64::EPSILON {
        return Err(CswError::DegenerateBracket {
            high: bracket_high,
            low: bracket_low,
        });
    }
    if x < bracket_low {
        Ok(val_low)
    } else if x >= bracket_high {
        Ok(val_high)
    } else {
        let t = (x - bracket_low) / (bracket_high - bracket_low);
        Ok(lerp(val_low, val_high, t))
    }
}

/// Value at the actual operating hours
pub fn interpolate_hours(hours: f64, val_high: f64, val_low: f64, bracket_high: f64, bracket_low: f64) -> Result<f64> {
    interpolate(hours, val_high, val_low, bracket_high, bracket_low)
}

/// Value at the actual hotel occupancy, from the values at 100 % and 33 %
pub fn interpolate_occupancy(occupancy: f64, val_high: f64, val_low: f64) -> Result<f64> {
    let (high, low) = occupancy_brackets();
    interpolate(occupancy, val_high, val_low, f64::from(high), f64::from(low))
}
