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
Comprobaciones de entrada
=========================

Plausibility checks of a savings input. They produce warnings only: the
savings engine never rejects an input for being out of these ranges.
*/

use std::fmt;

use crate::{
    defaults::{
        BUILDING_AREA_RANGE, ELECTRIC_RATE_RANGE, GAS_RATE_RANGE, MAX_CSW_AREA_FRACTION,
        NUM_FLOORS_RANGE, OCCUPANCY_RANGE, OPERATING_HOURS_RANGE, WWR_TYPICAL_RANGE,
    },
    types::{SavingsInput, Schedule},
    wwr::wwr,
};

/// Non fatal issue found in an input
#[derive(Debug, Clone, PartialEq)]
pub enum InputWarning {
    /// Building area outside the usual range [sq ft]
    BuildingArea(f64),
    /// Number of floors outside the usual range
    NumFloors(u32),
    /// CSW area larger than the allowed share of the building area [sq ft]
    CswArea {
        /// CSW area
        csw_area: f64,
        /// Largest expected CSW area
        max: f64,
    },
    /// Electricity rate outside the usual range [$/kWh]
    ElectricRate(f64),
    /// Natural gas rate outside the usual range [$/therm]
    GasRate(f64),
    /// Operating hours outside the usual range [h/yr]
    OperatingHours(f64),
    /// Occupancy outside [0, 100] %
    Occupancy(f64),
    /// Window-to-wall ratio outside the typical range
    WwrOutOfRange(f64),
    /// Window-to-wall ratio above 1, physically impossible
    WwrImpossible(f64),
}

fn outside<T: PartialOrd>(value: T, range: (T, T)) -> bool {
    value < range.0 || value > range.1
}

impl fmt::Display for InputWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use InputWarning::*;
        match self {
            BuildingArea(v) => write!(
                f,
                "Building area {} sq ft outside [{}, {}]",
                v, BUILDING_AREA_RANGE.0, BUILDING_AREA_RANGE.1
            ),
            NumFloors(v) => write!(
                f,
                "Number of floors {} outside [{}, {}]",
                v, NUM_FLOORS_RANGE.0, NUM_FLOORS_RANGE.1
            ),
            CswArea { csw_area, max } => write!(
                f,
                "CSW area {} sq ft exceeds {} sq ft ({:.0} % of the building area)",
                csw_area,
                max,
                MAX_CSW_AREA_FRACTION * 100.0
            ),
            ElectricRate(v) => write!(
                f,
                "Electric rate {} $/kWh outside [{}, {}]",
                v, ELECTRIC_RATE_RANGE.0, ELECTRIC_RATE_RANGE.1
            ),
            GasRate(v) => write!(
                f,
                "Gas rate {} $/therm outside [{}, {}]",
                v, GAS_RATE_RANGE.0, GAS_RATE_RANGE.1
            ),
            OperatingHours(v) => write!(
                f,
                "Operating hours {} h/yr outside [{}, {}]",
                v, OPERATING_HOURS_RANGE.0, OPERATING_HOURS_RANGE.1
            ),
            Occupancy(v) => write!(f, "Occupancy {} % outside [0, 100]", v),
            WwrOutOfRange(v) => write!(
                f,
                "Window-to-wall ratio {:.1} % outside the typical range ({:.0}-{:.0} %)",
                v * 100.0,
                WWR_TYPICAL_RANGE.0 * 100.0,
                WWR_TYPICAL_RANGE.1 * 100.0
            ),
            WwrImpossible(v) => write!(
                f,
                "Window-to-wall ratio {:.1} % above 100 %, not physically possible",
                v * 100.0
            ),
        }
    }
}

/// Warnings for an input, empty when every value is in its usual range
pub fn check_input(input: &SavingsInput) -> Vec<InputWarning> {
    let mut warnings = Vec::new();

    if outside(input.building_area, BUILDING_AREA_RANGE) {
        warnings.push(InputWarning::BuildingArea(input.building_area));
    }
    if outside(input.num_floors, NUM_FLOORS_RANGE) {
        warnings.push(InputWarning::NumFloors(input.num_floors));
    }
    let max_csw_area = input.building_area * MAX_CSW_AREA_FRACTION;
    if input.csw_area > max_csw_area {
        warnings.push(InputWarning::CswArea {
            csw_area: input.csw_area,
            max: max_csw_area,
        });
    }
    if outside(input.electric_rate, ELECTRIC_RATE_RANGE) {
        warnings.push(InputWarning::ElectricRate(input.electric_rate));
    }
    if outside(input.gas_rate, GAS_RATE_RANGE) {
        warnings.push(InputWarning::GasRate(input.gas_rate));
    }
    match input.resolved_schedule() {
        Schedule::Hours(h) if outside(h, OPERATING_HOURS_RANGE) => {
            warnings.push(InputWarning::OperatingHours(h))
        }
        Schedule::Occupancy(o) if outside(o, OCCUPANCY_RANGE) => {
            warnings.push(InputWarning::Occupancy(o))
        }
        _ => (),
    }

    if input.csw_area > 0.0 && input.num_floors > 0 && input.building_area > 0.0 {
        let ratio = wwr(input.csw_area, input.building_area, input.num_floors);
        if ratio > 1.0 {
            warnings.push(InputWarning::WwrImpossible(ratio));
        } else if outside(ratio, WWR_TYPICAL_RANGE) {
            warnings.push(InputWarning::WwrOutOfRange(ratio));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_input_is_plausible() {
        // 75000 SF, 5 floors: 7348 sq ft of wall per floor, WWR 0.33
        assert_eq!(check_input(&SavingsInput::default()), vec![]);
    }

    #[test]
    fn out_of_range_values() {
        let input = SavingsInput {
            building_area: 10_000.0,
            num_floors: 60,
            electric_rate: 2.0,
            gas_rate: 0.0,
            schedule: Some(Schedule::Hours(1000.0)),
            csw_area: 1_000.0,
            ..Default::default()
        };
        let warnings = check_input(&input);
        assert_eq!(
            &warnings[..5],
            &[
                InputWarning::BuildingArea(10_000.0),
                InputWarning::NumFloors(60),
                InputWarning::ElectricRate(2.0),
                InputWarning::GasRate(0.0),
                InputWarning::OperatingHours(1000.0),
            ]
        );
    }

    #[test]
    fn csw_area_and_wwr() {
        // 1 floor of 20000 SF: 8485 sq ft of wall
        let input = SavingsInput {
            building_area: 20_000.0,
            num_floors: 1,
            csw_area: 10_001.0,
            ..Default::default()
        };
        let warnings = check_input(&input);
        assert_eq!(
            warnings[0],
            InputWarning::CswArea {
                csw_area: 10_001.0,
                max: 10_000.0
            }
        );
        match warnings[1] {
            InputWarning::WwrImpossible(v) => assert!(v > 1.0),
            ref other => panic!("unexpected warning {:?}", other),
        }
    }

    #[test]
    fn occupancy_and_low_wwr() {
        let input = SavingsInput {
            schedule: Some(Schedule::Occupancy(120.0)),
            csw_area: 500.0,
            ..Default::default()
        };
        let warnings = check_input(&input);
        assert_eq!(warnings[0], InputWarning::Occupancy(120.0));
        match warnings[1] {
            InputWarning::WwrOutOfRange(v) => assert!(v < 0.10),
            ref other => panic!("unexpected warning {:?}", other),
        }
        assert!(warnings[1].to_string().starts_with("Window-to-wall ratio"));
    }
}
