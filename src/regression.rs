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
Regresiones
===========

Regression Evaluator: quadratic in degree days, `a + b·D + c·D²`, with D the
site HDD (heating) or CDD (cooling). The polynomial output is returned as is.
*/

use std::fmt;

use crate::{
    coefficients::CoefficientRow,
    curves::NoCoolingCurve,
    mathops::{clamp, polyval},
    weather::DegreeDays,
};

/// Regression to evaluate
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Heating, evaluated at HDD
    Heating,
    /// Cooling, evaluated at CDD
    Cooling,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Heating => write!(f, "heating"),
            Mode::Cooling => write!(f, "cooling"),
        }
    }
}

/// Value of the heating or cooling regression of a row at `degree_days`
pub fn evaluate(row: &CoefficientRow, degree_days: f64, mode: Mode) -> f64 {
    match mode {
        Mode::Heating => polyval(&row.heating_coefs(), degree_days),
        Mode::Cooling => polyval(&row.cooling_coefs(), degree_days),
    }
}

/// Heating and cooling values of a row at the site degree days
pub fn evaluate_site(row: &CoefficientRow, dd: DegreeDays) -> (f64, f64) {
    (evaluate(row, dd.hdd, Mode::Heating), evaluate(row, dd.cdd, Mode::Cooling))
}

/// Share of cooling savings kept without cooling, clamped to [0, 1]
pub fn no_cooling_multiplier(curve: &NoCoolingCurve, cdd: f64) -> f64 {
    clamp(polyval(&curve.coefs(), cdd), 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BaseWindow, BuildingType, CswType, Fuel, HvacFuelClass, SizeClass};
    use pretty_assertions::assert_eq;

    fn row(heat: [f64; 3], cool: [f64; 3]) -> CoefficientRow {
        CoefficientRow {
            building_type: BuildingType::Office,
            base: BaseWindow::Single,
            csw: CswType::Double,
            size: SizeClass::Mid,
            hvac_fuel: HvacFuelClass::PvavElec,
            fuel: Fuel::Electric,
            bracket: 8760,
            heat_a: heat[0],
            heat_b: heat[1],
            heat_c: heat[2],
            cool_a: cool[0],
            cool_b: cool[1],
            cool_c: cool[2],
            cool_mult_no_cooling: None,
        }
    }

    #[test]
    fn constant_regression() {
        let r = row([3.16, 0.0, 0.0], [0.0, 0.0, 0.0]);
        for hdd in &[0.0, 1.0, 4811.0, 12_000.0] {
            assert_eq!(evaluate(&r, *hdd, Mode::Heating), 3.16);
        }
    }

    #[test]
    fn quadratic_regression() {
        let r = row([1.0, 2.0, 3.0], [0.5, 0.1, 0.0]);
        assert_eq!(evaluate(&r, 2.0, Mode::Heating), 17.0);
        assert_eq!(evaluate(&r, 10.0, Mode::Cooling), 1.5);
        assert_eq!(evaluate_site(&r, DegreeDays { hdd: 2.0, cdd: 10.0 }), (17.0, 1.5));
    }

    #[test]
    fn negative_values_are_not_clamped() {
        let r = row([0.0, 0.0, -1.0e-6], [0.0, 0.0, 0.0]);
        assert!(evaluate(&r, 5000.0, Mode::Heating) < 0.0);
    }

    #[test]
    fn no_cooling_multiplier_is_clamped() {
        let curve = NoCoolingCurve { a: 0.5, b: 1.0e-3, c: 0.0, d: 0.0 };
        assert_eq!(no_cooling_multiplier(&curve, 0.0), 0.5);
        assert_eq!(no_cooling_multiplier(&curve, 100.0), 0.6);
        assert_eq!(no_cooling_multiplier(&curve, 1000.0), 1.0);
        let falling = NoCoolingCurve { a: 0.2, b: -1.0e-3, c: 0.0, d: 0.0 };
        assert_eq!(no_cooling_multiplier(&falling, 1000.0), 0.0);
    }
}
