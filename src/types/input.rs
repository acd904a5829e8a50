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
Datos de entrada
================

Fully resolved input record of one savings calculation.
*/

use serde_derive::{Deserialize, Serialize};

use super::basic::{BuildingType, CswProduct, ExistingWindow, HeatingFuel, HvacSystem};
use crate::{defaults, profile::profile_for};

/// Operating profile of the building: annual operating hours (Office) or
/// occupancy rate in percent (Hotel)
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Schedule {
    /// Annual operating hours [h/yr]
    Hours(f64),
    /// Occupancy rate [%]
    Occupancy(f64),
}

impl Schedule {
    /// Numeric value of the schedule (hours or percent)
    pub fn value(&self) -> f64 {
        match *self {
            Schedule::Hours(v) | Schedule::Occupancy(v) => v,
        }
    }
}

/// Input of a savings calculation
///
/// Assembled by the caller (CLI, form, file) and passed by value to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavingsInput {
    /// Building type
    pub building_type: BuildingType,
    /// State of the location
    pub state: String,
    /// City of the location
    pub city: String,
    /// Gross building area [sq ft]
    pub building_area: f64,
    /// Number of floors [-]
    pub num_floors: u32,
    /// Existing window type
    pub existing_window: ExistingWindow,
    /// CSW product
    pub csw_product: CswProduct,
    /// Installed CSW area [sq ft]
    pub csw_area: f64,
    /// HVAC system
    pub hvac_system: HvacSystem,
    /// Heating fuel
    pub heating_fuel: HeatingFuel,
    /// Is mechanical cooling installed?
    pub cooling_installed: bool,
    /// Electricity rate [$/kWh]
    pub electric_rate: f64,
    /// Natural gas rate [$/therm]
    pub gas_rate: f64,
    /// Operating hours or occupancy, the building type default when missing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,
}

impl SavingsInput {
    /// Schedule of the calculation
    ///
    /// The given schedule, or the default of the building type (8000 h for
    /// offices, 66 % occupancy for hotels) when there is none.
    pub fn resolved_schedule(&self) -> Schedule {
        self.schedule
            .unwrap_or_else(|| profile_for(self.building_type).default_schedule())
    }
}

impl Default for SavingsInput {
    fn default() -> Self {
        Self {
            building_type: BuildingType::Office,
            state: String::new(),
            city: String::new(),
            building_area: defaults::BUILDING_AREA_DEFAULT,
            num_floors: defaults::NUM_FLOORS_DEFAULT,
            existing_window: ExistingWindow::SinglePane,
            csw_product: CswProduct::Double,
            csw_area: defaults::CSW_AREA_DEFAULT,
            hvac_system: HvacSystem::PackagedVavElectricReheat,
            heating_fuel: HeatingFuel::Electric,
            cooling_installed: true,
            electric_rate: defaults::ELECTRIC_RATE_DEFAULT,
            gas_rate: defaults::GAS_RATE_DEFAULT,
            schedule: None,
        }
    }
}
