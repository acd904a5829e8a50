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
Cálculo de ahorros
==================

Savings Engine: builds the configuration keys at the two brackets that
enclose the operating profile, retrieves the savings and baseline rows,
evaluates their regressions at the site degree days, interpolates to the
actual operating hours or occupancy and aggregates energy, cost and EUI
savings.

Energy units:

- electricity in kWh, natural gas in therms
- site energy in kBtu (1 kWh = 3.413 kBtu, 1 therm = 100 kBtu)
- per square foot values are per SF of CSW, except EUI values which are per
  SF of building area
*/

use log::debug;

use crate::{
    coefficients::{CoefficientRow, CoefficientStore},
    curves::NoCoolingCurves,
    defaults::{KBTU_PER_KWH, KBTU_PER_THERM},
    error::{CswError, Result},
    interpolation::{interpolate_hours, interpolate_occupancy},
    key::{build_key, ConfigKey},
    mathops::clamp,
    profile::{profile_for, NoCoolingPolicy},
    regression::{evaluate_site, no_cooling_multiplier, Mode},
    types::{BracketValues, CalculationDetails, Fuel, SavingsInput, SavingsResult, Schedule},
    weather::{DegreeDays, WeatherStore},
    wwr::wwr,
};

/// Savings calculator over loaded weather, coefficient and no-cooling curve tables
///
/// Holds no mutable state and can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct SavingsEngine {
    weather: WeatherStore,
    coefficients: CoefficientStore,
    curves: NoCoolingCurves,
}

impl SavingsEngine {
    /// New engine from the reference tables, with no no-cooling curves
    pub fn new(weather: WeatherStore, coefficients: CoefficientStore) -> Self {
        Self {
            weather,
            coefficients,
            curves: NoCoolingCurves::default(),
        }
    }

    /// Engine using the given no-cooling curves
    pub fn with_curves(self, curves: NoCoolingCurves) -> Self {
        Self { curves, ..self }
    }

    /// Weather table
    pub fn weather(&self) -> &WeatherStore {
        &self.weather
    }

    /// Coefficient table
    pub fn coefficients(&self) -> &CoefficientStore {
        &self.coefficients
    }

    /// No-cooling curve table
    pub fn curves(&self) -> &NoCoolingCurves {
        &self.curves
    }

    /// Annual savings for an input
    pub fn calculate_savings(&self, input: &SavingsInput) -> Result<SavingsResult> {
        calculate_savings(input, &self.weather, &self.coefficients, &self.curves)
    }
}

/// Rows for the high and low bracket keys, with exactly one match each
fn lookup_pair<'a>(
    coefficients: &'a CoefficientStore,
    high: &ConfigKey,
    low: &ConfigKey,
) -> Result<(&'a CoefficientRow, &'a CoefficientRow)> {
    match (coefficients.get(high), coefficients.get(low)) {
        (Some(row_high), Some(row_low)) => Ok((row_high, row_low)),
        _ => Err(CswError::ConfigurationNotFound {
            kind: high.kind(),
            high: high.clone(),
            high_matches: coefficients.matching(high).len(),
            low: low.clone(),
            low_matches: coefficients.matching(low).len(),
        }),
    }
}

/// Baseline EUI of a baseline row at the site degree days [kBtu/SF-yr]
fn baseline_eui_at(row: &CoefficientRow, dd: DegreeDays) -> f64 {
    let (heating, cooling) = evaluate_site(row, dd);
    heating + cooling
}

/// Annual savings of a CSW retrofit
///
/// # Errors
///
/// - `WrongInput` for a non positive building area or a schedule that does not
///   match the building type
/// - `LocationNotFound` for a location missing in the weather table
/// - `ConfigurationNotFound` when a savings or baseline key does not match
///   exactly one row
/// - `MissingNoCoolingMultiplier` for a hotel without cooling whose rows have
///   no static multiplier
/// - `MissingNoCoolingCurve` for an office without cooling whose size class
///   has no curve
pub fn calculate_savings(
    input: &SavingsInput,
    weather: &WeatherStore,
    coefficients: &CoefficientStore,
    curves: &NoCoolingCurves,
) -> Result<SavingsResult> {
    if input.building_area <= 0.0 {
        return Err(CswError::WrongInput(format!(
            "building area must be positive and found {}",
            input.building_area
        )));
    }

    let dd = weather
        .degree_days(&input.state, &input.city)
        .ok_or_else(|| CswError::LocationNotFound {
            state: input.state.clone(),
            city: input.city.clone(),
        })?;

    let profile = profile_for(input.building_type);
    let schedule = input.resolved_schedule();
    let (bracket_high, bracket_low) = profile.brackets(schedule)?;
    let x = schedule.value();
    let blend = |val_high: f64, val_low: f64| match schedule {
        Schedule::Hours(hours) => interpolate_hours(
            hours,
            val_high,
            val_low,
            f64::from(bracket_high),
            f64::from(bracket_low),
        ),
        Schedule::Occupancy(occupancy) => interpolate_occupancy(occupancy, val_high, val_low),
    };

    let key_high = build_key(input, bracket_high);
    let key_low = build_key(input, bracket_low);
    let base_key_high = key_high.to_baseline();
    let base_key_low = key_low.to_baseline();
    debug!(
        "Brackets ({}, {}) for {}; keys {} / {}",
        bracket_high, bracket_low, x, key_high, key_low
    );

    let (row_high, row_low) = lookup_pair(coefficients, &key_high, &key_low)?;
    let (base_high, base_low) = lookup_pair(coefficients, &base_key_high, &base_key_low)?;

    // Per SF of CSW at each bracket
    let (heat_high, cool_high) = evaluate_site(row_high, dd);
    let (heat_low, cool_low) = evaluate_site(row_low, dd);
    let eui_high = baseline_eui_at(base_high, dd);
    let eui_low = baseline_eui_at(base_low, dd);
    debug!("{} at HDD {}: {} / {}", Mode::Heating, dd.hdd, heat_high, heat_low);
    debug!("{} at CDD {}: {} / {}", Mode::Cooling, dd.cdd, cool_high, cool_low);
    debug!("Baseline EUI: {} / {}", eui_high, eui_low);

    let heating = blend(heat_high, heat_low)?;
    let cooling = blend(cool_high, cool_low)?;
    let baseline_eui = blend(eui_high, eui_low)?;

    let cooling_multiplier = if input.cooling_installed {
        1.0
    } else {
        match profile.no_cooling_policy(key_high.size) {
            NoCoolingPolicy::Curve => {
                let curve = curves.get(input.building_type, key_high.size).ok_or(
                    CswError::MissingNoCoolingCurve {
                        building_type: input.building_type,
                        size: key_high.size,
                    },
                )?;
                no_cooling_multiplier(curve, dd.cdd)
            }
            NoCoolingPolicy::RowMultiplier => {
                let mult_high = row_high
                    .cool_mult_no_cooling
                    .ok_or_else(|| CswError::MissingNoCoolingMultiplier(key_high.clone()))?;
                let mult_low = row_low
                    .cool_mult_no_cooling
                    .ok_or_else(|| CswError::MissingNoCoolingMultiplier(key_low.clone()))?;
                clamp(blend(mult_high, mult_low)?, 0.0, 1.0)
            }
        }
    };
    debug!("Cooling multiplier: {}", cooling_multiplier);
    let cooling_per_sf = cooling * cooling_multiplier;

    // Heating savings go to a single fuel
    let (heating_per_sf, gas_per_sf) = match key_high.fuel {
        Fuel::NaturalGas => (0.0, heating),
        Fuel::Electric => (heating, 0.0),
    };

    let electric_savings_kwh = (heating_per_sf + cooling_per_sf) * input.csw_area;
    let gas_savings_therms = gas_per_sf * input.csw_area;
    let electric_cost_savings = electric_savings_kwh * input.electric_rate;
    let gas_cost_savings = gas_savings_therms * input.gas_rate;

    let total_savings_kbtu_per_sf = (electric_savings_kwh * KBTU_PER_KWH
        + gas_savings_therms * KBTU_PER_THERM)
        / input.building_area;
    let new_eui = baseline_eui - total_savings_kbtu_per_sf;
    let percent_eui_savings = if baseline_eui > 0.0 {
        total_savings_kbtu_per_sf / baseline_eui * 100.0
    } else {
        0.0
    };

    let window_to_wall_ratio = if input.csw_area > 0.0 && input.num_floors > 0 {
        Some(wwr(input.csw_area, input.building_area, input.num_floors))
    } else {
        None
    };
    debug!(
        "Savings: {} kWh, {} therms, {} kBtu/SF ({} %)",
        electric_savings_kwh, gas_savings_therms, total_savings_kbtu_per_sf, percent_eui_savings
    );

    Ok(SavingsResult {
        electric_savings_kwh,
        gas_savings_therms,
        electric_cost_savings,
        gas_cost_savings,
        total_cost_savings: electric_cost_savings + gas_cost_savings,
        total_savings_kbtu_per_sf,
        baseline_eui,
        new_eui,
        percent_eui_savings,
        window_to_wall_ratio,
        hdd: dd.hdd,
        cdd: dd.cdd,
        heating_per_sf,
        cooling_per_sf,
        gas_per_sf,
        details: CalculationDetails {
            schedule_value: x,
            high: BracketValues {
                bracket: f64::from(bracket_high),
                key: key_high.to_string(),
                baseline_key: base_key_high.to_string(),
                heating: heat_high,
                cooling: cool_high,
                baseline_eui: eui_high,
            },
            low: BracketValues {
                bracket: f64::from(bracket_low),
                key: key_low.to_string(),
                baseline_key: base_key_low.to_string(),
                heating: heat_low,
                cooling: cool_low,
                baseline_eui: eui_low,
            },
            cooling_multiplier,
        },
    })
}
