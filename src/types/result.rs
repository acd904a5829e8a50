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
Resultados
==========

Output record of a savings calculation.
*/

use serde_derive::{Deserialize, Serialize};

/// Values retrieved and evaluated at one bracket
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BracketValues {
    /// Bracket (operating hours or occupancy)
    pub bracket: f64,
    /// Lookup key of the savings row
    pub key: String,
    /// Lookup key of the baseline row
    pub baseline_key: String,
    /// Heating savings at the site HDD [kWh/SF-CSW or therms/SF-CSW]
    pub heating: f64,
    /// Cooling savings at the site CDD [kWh/SF-CSW]
    pub cooling: f64,
    /// Baseline EUI at the site HDD/CDD [kBtu/SF-yr]
    pub baseline_eui: f64,
}

/// Intermediate values of a calculation, for diagnostics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationDetails {
    /// Actual operating hours or occupancy used for interpolation
    pub schedule_value: f64,
    /// Values at the high bracket
    pub high: BracketValues,
    /// Values at the low bracket
    pub low: BracketValues,
    /// Multiplier applied to cooling savings [0, 1]
    pub cooling_multiplier: f64,
}

/// Annual savings of a CSW retrofit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavingsResult {
    /// Electricity savings [kWh/yr]
    pub electric_savings_kwh: f64,
    /// Natural gas savings [therms/yr]
    pub gas_savings_therms: f64,
    /// Electricity cost savings [$/yr]
    pub electric_cost_savings: f64,
    /// Natural gas cost savings [$/yr]
    pub gas_cost_savings: f64,
    /// Total cost savings [$/yr]
    pub total_cost_savings: f64,
    /// Site energy savings per building area [kBtu/SF-yr]
    pub total_savings_kbtu_per_sf: f64,
    /// Pre-retrofit EUI [kBtu/SF-yr]
    pub baseline_eui: f64,
    /// Post-retrofit EUI [kBtu/SF-yr]
    pub new_eui: f64,
    /// EUI savings [%]
    pub percent_eui_savings: f64,
    /// Window-to-wall ratio [-], when CSW area and floors are positive
    pub window_to_wall_ratio: Option<f64>,
    /// Heating degree days, base 65°F
    pub hdd: f64,
    /// Cooling degree days, base 65°F
    pub cdd: f64,
    /// Electric heating savings [kWh/SF-CSW]
    pub heating_per_sf: f64,
    /// Cooling savings, after the cooling multiplier [kWh/SF-CSW]
    pub cooling_per_sf: f64,
    /// Gas heating savings [therms/SF-CSW]
    pub gas_per_sf: f64,
    /// Intermediate values
    pub details: CalculationDetails,
}
