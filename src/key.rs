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
Claves de configuración
=======================

Configuration Key Builder: maps a savings input and a bracket value to the
categorical key of the coefficient table.

Every input maps to some key. A key with no matching row is a lookup
failure of the coefficient store, not of the builder.
*/

use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::{
    profile::profile_for,
    types::{
        BaseWindow, BuildingType, CswProduct, CswType, ExistingWindow, Fuel, HvacFuelClass,
        SavingsInput, SizeClass,
    },
};

/// Row set of the coefficient table
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowKind {
    /// Savings rows (a CSW product is installed)
    Savings,
    /// Baseline rows (csw = "N/A")
    Baseline,
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKind::Savings => write!(f, "savings"),
            RowKind::Baseline => write!(f, "baseline"),
        }
    }
}

/// Categorical key of a coefficient row
///
/// Displays as the spreadsheet lookup string, e.g.
/// `SingleDoubleMidOfficePVAV_ElecElectric8760`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfigKey {
    /// Building type
    pub building_type: BuildingType,
    /// Base window type
    pub base: BaseWindow,
    /// CSW type (`NotApplicable` for baseline rows)
    pub csw: CswType,
    /// Size class
    pub size: SizeClass,
    /// HVAC and fuel class. `None` when the HVAC system has no class.
    pub hvac_fuel: Option<HvacFuelClass>,
    /// Heating fuel
    pub fuel: Fuel,
    /// Bracket: operating hours (Office) or occupancy (Hotel)
    pub bracket: u32,
}

impl ConfigKey {
    /// Row set this key belongs to
    pub fn kind(&self) -> RowKind {
        if self.csw == CswType::NotApplicable {
            RowKind::Baseline
        } else {
            RowKind::Savings
        }
    }

    /// Key of the baseline (pre-retrofit) row with the same configuration
    pub fn to_baseline(&self) -> ConfigKey {
        ConfigKey {
            csw: CswType::NotApplicable,
            ..self.clone()
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hvac_fuel = self
            .hvac_fuel
            .map(|h| h.to_string())
            .unwrap_or_default();
        write!(
            f,
            "{}{}{}{}{}{}{}",
            self.base, self.csw, self.size, self.building_type, hvac_fuel, self.fuel, self.bracket
        )
    }
}

/// Base window type of the existing window
pub fn base_window(existing: ExistingWindow) -> BaseWindow {
    match existing {
        ExistingWindow::SinglePane => BaseWindow::Single,
        ExistingWindow::DoublePane | ExistingWindow::DoublePaneLowE => BaseWindow::Double,
    }
}

/// CSW type of a CSW product
pub fn csw_type(product: CswProduct) -> CswType {
    use CswProduct::*;
    match product {
        WinsertLite | Single => CswType::Single,
        WinsertPlus | Double | Triple | Quad => CswType::Double,
    }
}

/// Build the coefficient table key of an input at the given bracket
pub fn build_key(input: &SavingsInput, bracket: u32) -> ConfigKey {
    let profile = profile_for(input.building_type);
    let size = profile.size_class(input);
    ConfigKey {
        building_type: input.building_type,
        base: base_window(input.existing_window),
        csw: csw_type(input.csw_product),
        size,
        hvac_fuel: profile.hvac_fuel_class(input, size),
        fuel: profile.fuel(input),
        bracket,
    }
}
