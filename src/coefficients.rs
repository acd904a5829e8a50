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
Coeficientes de regresión
=========================

Coefficient Store: regression rows fit against whole building simulations,
one per configuration and bracket, indexed by their configuration key.

Table format (CSV, with header):

building_type,base,csw,size,hvac_fuel,fuel,bracket,heat_a,heat_b,heat_c,cool_a,cool_b,cool_c,cool_mult_no_cooling
Office,Single,Double,Mid,PVAV_Elec,Electric,8760,0.52,0.00105,-2.0e-8,0.21,0.0016,-1.0e-7,

Rows with csw = "N/A" are baseline rows (pre-retrofit energy use intensity).
*/

use std::collections::HashMap;
use std::fmt;
use std::str;

use csv::{ReaderBuilder, Trim};
use serde_derive::{Deserialize, Serialize};

use crate::{
    error::{CswError, Result},
    key::ConfigKey,
    types::{parse_value, BaseWindow, BuildingType, CswType, Fuel, HvacFuelClass, SizeClass},
};

/// Regression row of the simulation campaign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoefficientRow {
    /// Building type
    pub building_type: BuildingType,
    /// Base window type
    pub base: BaseWindow,
    /// CSW type
    pub csw: CswType,
    /// Size class
    pub size: SizeClass,
    /// HVAC and fuel class
    pub hvac_fuel: HvacFuelClass,
    /// Heating fuel
    pub fuel: Fuel,
    /// Operating hours or occupancy bracket
    pub bracket: u32,
    /// Heating regression, constant term
    pub heat_a: f64,
    /// Heating regression, HDD term
    pub heat_b: f64,
    /// Heating regression, HDD² term
    pub heat_c: f64,
    /// Cooling regression, constant term
    pub cool_a: f64,
    /// Cooling regression, CDD term
    pub cool_b: f64,
    /// Cooling regression, CDD² term
    pub cool_c: f64,
    /// Share of cooling savings kept when no cooling is installed
    pub cool_mult_no_cooling: Option<f64>,
}

impl CoefficientRow {
    /// Configuration key of the row
    pub fn key(&self) -> ConfigKey {
        ConfigKey {
            building_type: self.building_type,
            base: self.base,
            csw: self.csw,
            size: self.size,
            hvac_fuel: Some(self.hvac_fuel),
            fuel: self.fuel,
            bracket: self.bracket,
        }
    }

    /// Heating coefficients (a, b, c)
    pub fn heating_coefs(&self) -> [f64; 3] {
        [self.heat_a, self.heat_b, self.heat_c]
    }

    /// Cooling coefficients (a, b, c)
    pub fn cooling_coefs(&self) -> [f64; 3] {
        [self.cool_a, self.cool_b, self.cool_c]
    }
}

impl fmt::Display for CoefficientRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mult = self
            .cool_mult_no_cooling
            .map(|m| m.to_string())
            .unwrap_or_default();
        write!(
            f,
            "{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
            self.building_type,
            self.base,
            self.csw,
            self.size,
            self.hvac_fuel,
            self.fuel,
            self.bracket,
            self.heat_a,
            self.heat_b,
            self.heat_c,
            self.cool_a,
            self.cool_b,
            self.cool_c,
            mult
        )
    }
}

/// Table row as read from CSV, before checking categorical values
#[derive(Debug, Deserialize)]
struct RawCoefficientRow {
    building_type: String,
    base: String,
    csw: String,
    size: String,
    hvac_fuel: String,
    fuel: String,
    bracket: u32,
    heat_a: f64,
    heat_b: f64,
    heat_c: f64,
    cool_a: f64,
    cool_b: f64,
    cool_c: f64,
    #[serde(default)]
    cool_mult_no_cooling: Option<f64>,
}

impl RawCoefficientRow {
    fn into_row(self) -> Result<CoefficientRow> {
        Ok(CoefficientRow {
            building_type: parse_value("building type", &self.building_type)?,
            base: parse_value("base window", &self.base)?,
            csw: parse_value("CSW type", &self.csw)?,
            size: parse_value("size class", &self.size)?,
            hvac_fuel: parse_value("HVAC fuel class", &self.hvac_fuel)?,
            fuel: parse_value("fuel", &self.fuel)?,
            bracket: self.bracket,
            heat_a: self.heat_a,
            heat_b: self.heat_b,
            heat_c: self.heat_c,
            cool_a: self.cool_a,
            cool_b: self.cool_b,
            cool_c: self.cool_c,
            cool_mult_no_cooling: self.cool_mult_no_cooling,
        })
    }
}

/// Regression rows indexed by configuration key
///
/// Repeated keys are kept, so that an ambiguous configuration can be told
/// apart from a missing one.
#[derive(Debug, Clone, Default)]
pub struct CoefficientStore {
    index: HashMap<ConfigKey, Vec<CoefficientRow>>,
    num_rows: usize,
}

impl CoefficientStore {
    /// Build the store from a list of rows
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = CoefficientRow>,
    {
        let mut index: HashMap<ConfigKey, Vec<CoefficientRow>> = HashMap::new();
        let mut num_rows = 0;
        for row in rows {
            index.entry(row.key()).or_default().push(row);
            num_rows += 1;
        }
        Self { index, num_rows }
    }

    /// Rows matching a key
    pub fn matching(&self, key: &ConfigKey) -> &[CoefficientRow] {
        self.index.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The row matching a key, when there is exactly one
    pub fn get(&self, key: &ConfigKey) -> Option<&CoefficientRow> {
        match self.matching(key) {
            [row] => Some(row),
            _ => None,
        }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.num_rows
    }

    /// Is the store empty?
    pub fn is_empty(&self) -> bool {
        self.num_rows == 0
    }

    /// Keys that match more than one row
    pub fn ambiguous_keys(&self) -> Vec<&ConfigKey> {
        let mut keys: Vec<_> = self
            .index
            .iter()
            .filter(|(_, rows)| rows.len() > 1)
            .map(|(key, _)| key)
            .collect();
        keys.sort_by_key(|k| k.to_string());
        keys
    }
}

impl str::FromStr for CoefficientStore {
    type Err = CswError;

    fn from_str(s: &str) -> Result<CoefficientStore> {
        let s_nobom = s.trim_start_matches('\u{feff}');
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .comment(Some(b'#'))
            .from_reader(s_nobom.as_bytes());
        let rows = reader
            .deserialize::<RawCoefficientRow>()
            .map(|raw| raw.map_err(CswError::from).and_then(RawCoefficientRow::into_row))
            .collect::<Result<Vec<_>>>()?;
        Ok(CoefficientStore::from_rows(rows))
    }
}
