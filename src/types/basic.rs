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
Tipos categóricos
=================

Categorical values of the user inputs and of the coefficient table keys.

User-facing values (existing window, CSW product, HVAC system, heating fuel)
display and parse as the strings shown to the user. Table values (base
window, CSW type, size class, HVAC fuel class, fuel) display and parse as the
strings stored in the coefficient table.
*/

use std::str::FromStr;

use serde_derive::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::{CswError, Result};

/// Parse a categorical value, reporting the kind of value on failure
pub fn parse_value<T: FromStr>(kind: &'static str, s: &str) -> Result<T> {
    s.trim().parse::<T>().map_err(|_| CswError::UnknownValue {
        kind,
        value: s.trim().to_string(),
    })
}

// == User inputs ==

/// Building type covered by the simulation campaign
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum BuildingType {
    /// Office building (hours based brackets)
    Office,
    /// Hotel building (occupancy based brackets)
    Hotel,
}

/// Existing (primary) window of the building
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum ExistingWindow {
    /// Single pane
    #[strum(to_string = "Single pane")]
    #[serde(rename = "Single pane")]
    SinglePane,
    /// Double pane
    #[strum(to_string = "Double pane")]
    #[serde(rename = "Double pane")]
    DoublePane,
    /// Double pane with low emissivity coating
    #[strum(to_string = "Double pane, low-e")]
    #[serde(rename = "Double pane, low-e")]
    DoublePaneLowE,
}

/// Commercial secondary window product, as named to the user
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum CswProduct {
    /// Single glazed insert
    #[strum(to_string = "Winsert Lite")]
    #[serde(rename = "Winsert Lite")]
    WinsertLite,
    /// Double glazed insert
    #[strum(to_string = "Winsert Plus")]
    #[serde(rename = "Winsert Plus")]
    WinsertPlus,
    /// Generic single glazed CSW
    Single,
    /// Generic double glazed CSW
    Double,
    /// Triple layer CSW
    Triple,
    /// Quad layer CSW
    Quad,
}

/// HVAC system of the building
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum HvacSystem {
    /// Office packaged VAV, electric reheat
    #[strum(to_string = "Packaged VAV with electric reheat")]
    #[serde(rename = "Packaged VAV with electric reheat")]
    PackagedVavElectricReheat,
    /// Office packaged VAV, hydronic reheat
    #[strum(to_string = "Packaged VAV with hydronic reheat")]
    #[serde(rename = "Packaged VAV with hydronic reheat")]
    PackagedVavHydronicReheat,
    /// Office built-up VAV, hydronic reheat
    #[strum(to_string = "Built-up VAV with hydronic reheat")]
    #[serde(rename = "Built-up VAV with hydronic reheat")]
    BuiltUpVavHydronicReheat,
    /// Hotel packaged terminal air conditioner
    #[strum(to_string = "PTAC")]
    #[serde(rename = "PTAC")]
    Ptac,
    /// Hotel packaged terminal heat pump
    #[strum(to_string = "PTHP")]
    #[serde(rename = "PTHP")]
    Pthp,
    /// Hotel fan coil units
    #[strum(to_string = "Fan Coil Unit")]
    #[serde(rename = "Fan Coil Unit")]
    FanCoilUnit,
    /// Any other system
    Other,
}

/// Heating fuel declared by the user
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum HeatingFuel {
    /// Electric heating
    Electric,
    /// Natural gas heating
    #[strum(to_string = "Natural Gas")]
    #[serde(rename = "Natural Gas")]
    NaturalGas,
    /// No heating system
    #[strum(to_string = "None")]
    #[serde(rename = "None")]
    NoHeating,
}

// == Coefficient table keys ==

/// Base window type of a coefficient row
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum BaseWindow {
    /// Single glazed base window
    Single,
    /// Double glazed base window
    Double,
}

/// CSW type of a coefficient row. `NotApplicable` marks baseline rows.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum CswType {
    /// Single glazed CSW
    Single,
    /// Double glazed CSW
    Double,
    /// No CSW (baseline, pre-retrofit row)
    #[strum(to_string = "N/A")]
    #[serde(rename = "N/A")]
    NotApplicable,
}

/// Building size class of a coefficient row
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum SizeClass {
    /// Small (hotel)
    Small,
    /// Mid size (office)
    Mid,
    /// Large (office and hotel)
    Large,
}

/// HVAC and fuel class of a coefficient row
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum HvacFuelClass {
    /// Packaged VAV, electric heating
    #[strum(to_string = "PVAV_Elec")]
    #[serde(rename = "PVAV_Elec")]
    PvavElec,
    /// Packaged VAV, gas heating
    #[strum(to_string = "PVAV_Gas")]
    #[serde(rename = "PVAV_Gas")]
    PvavGas,
    /// Built-up VAV
    #[strum(to_string = "VAV")]
    #[serde(rename = "VAV")]
    Vav,
    /// Packaged terminal air conditioner
    #[strum(to_string = "PTAC")]
    #[serde(rename = "PTAC")]
    Ptac,
    /// Packaged terminal heat pump
    #[strum(to_string = "PTHP")]
    #[serde(rename = "PTHP")]
    Pthp,
    /// Fan coil units
    #[strum(to_string = "FCU")]
    #[serde(rename = "FCU")]
    Fcu,
    /// Generic electric
    Electric,
    /// Generic gas
    Gas,
}

/// Heating fuel of a coefficient row
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum Fuel {
    /// Electricity
    Electric,
    /// Natural gas
    #[strum(to_string = "Natural Gas")]
    #[serde(rename = "Natural Gas")]
    NaturalGas,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn user_values_roundtrip() {
        let window: ExistingWindow = parse_value("existing window", "Double pane, low-e").unwrap();
        assert_eq!(window, ExistingWindow::DoublePaneLowE);
        assert_eq!(window.to_string(), "Double pane, low-e");
        let hvac: HvacSystem = parse_value("HVAC system", " Built-up VAV with hydronic reheat ").unwrap();
        assert_eq!(hvac, HvacSystem::BuiltUpVavHydronicReheat);
        assert_eq!(HeatingFuel::NoHeating.to_string(), "None");
        assert_eq!(CswProduct::WinsertPlus.to_string(), "Winsert Plus");
    }

    #[test]
    fn table_values() {
        assert_eq!(CswType::NotApplicable.to_string(), "N/A");
        assert_eq!(parse_value::<CswType>("csw", "N/A").unwrap(), CswType::NotApplicable);
        assert_eq!(parse_value::<HvacFuelClass>("hvac_fuel", "PVAV_Elec").unwrap(), HvacFuelClass::PvavElec);
        assert_eq!(parse_value::<Fuel>("fuel", "Natural Gas").unwrap(), Fuel::NaturalGas);
    }

    #[test]
    fn unknown_value() {
        assert_eq!(
            parse_value::<SizeClass>("size", "Huge"),
            Err(CswError::UnknownValue {
                kind: "size",
                value: "Huge".into()
            })
        );
    }
}
