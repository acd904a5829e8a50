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
Valores fijos y predefinidos
============================

- physical conversion factors
- assumptions of the simulation campaign (brackets, size threshold, geometry)
- default input values
*/

// ==================== Conversion factors

/// Site energy per unit of electricity [kBtu/kWh]
pub const KBTU_PER_KWH: f64 = 3.413;
/// Site energy per unit of natural gas [kBtu/therm]
pub const KBTU_PER_THERM: f64 = 100.0;

// ==================== Simulation campaign

/// Office bracket points [h/yr]. 2912 h is the 8 h x 7 d x 52 w nominal schedule.
pub const OFFICE_HOURS_BRACKETS: [u32; 3] = [2080, 2912, 8760];
/// Hotel occupancy bracket points [%]
pub const HOTEL_OCCUPANCY_BRACKETS: [u32; 2] = [33, 100];
/// Office area above which a built-up VAV building is Large [sq ft] (exclusive)
pub const LARGE_OFFICE_AREA_THRESHOLD: f64 = 30_000.0;
/// Assumed floor-to-floor height [ft]
pub const FLOOR_TO_FLOOR_HEIGHT: f64 = 15.0;

// ==================== Plausibility ranges (warnings only)

/// Typical window-to-wall ratio range [-]
pub const WWR_TYPICAL_RANGE: (f64, f64) = (0.10, 0.50);
/// Largest CSW area as a fraction of building area [-]
pub const MAX_CSW_AREA_FRACTION: f64 = 0.5;
/// Building area range [sq ft]
pub const BUILDING_AREA_RANGE: (f64, f64) = (15_000.0, 500_000.0);
/// Number of floors range [-]
pub const NUM_FLOORS_RANGE: (u32, u32) = (1, 50);
/// Electricity rate range [$/kWh]
pub const ELECTRIC_RATE_RANGE: (f64, f64) = (0.01, 1.0);
/// Natural gas rate range [$/therm]
pub const GAS_RATE_RANGE: (f64, f64) = (0.01, 10.0);
/// Annual operating hours range [h/yr]
pub const OPERATING_HOURS_RANGE: (f64, f64) = (1980.0, 8760.0);
/// Occupancy range [%]
pub const OCCUPANCY_RANGE: (f64, f64) = (0.0, 100.0);

// ==================== Default input values

/// Default building area [sq ft]
pub const BUILDING_AREA_DEFAULT: f64 = 75_000.0;
/// Default number of floors
pub const NUM_FLOORS_DEFAULT: u32 = 5;
/// Default CSW area [sq ft]
pub const CSW_AREA_DEFAULT: f64 = 12_000.0;
/// Default electricity rate [$/kWh]
pub const ELECTRIC_RATE_DEFAULT: f64 = 0.12;
/// Default natural gas rate [$/therm]
pub const GAS_RATE_DEFAULT: f64 = 0.80;
/// Default annual operating hours [h/yr]
pub const OPERATING_HOURS_DEFAULT: f64 = 8000.0;
/// Default hotel occupancy [%]
pub const OCCUPANCY_DEFAULT: f64 = 66.0;
