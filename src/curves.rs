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
Curvas sin refrigeración
========================

Share of the cooling savings kept by buildings without a cooling system, as a
cubic in CDD, `a + b·CDD + c·CDD² + d·CDD³`, clamped to [0, 1]. One curve per
building type and size class.

Table format (CSV, with header):

building_type,size,a,b,c,d
Office,Mid,0.0,2.0e-4,-4.0e-8,2.5e-12
*/

use std::collections::HashMap;
use std::str;

use csv::{ReaderBuilder, Trim};
use serde_derive::{Deserialize, Serialize};

use crate::{
    error::{CswError, Result},
    types::{parse_value, BuildingType, SizeClass},
};

/// Coefficients (a, b, c, d) of a no-cooling retention curve
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoCoolingCurve {
    /// Constant term
    pub a: f64,
    /// CDD term
    pub b: f64,
    /// CDD² term
    pub c: f64,
    /// CDD³ term
    pub d: f64,
}

impl NoCoolingCurve {
    /// Coefficients in increasing degree
    pub fn coefs(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }
}

#[derive(Debug, Deserialize)]
struct RawCurveRow {
    building_type: String,
    size: String,
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

/// No-cooling retention curves by building type and size class
#[derive(Debug, Clone, Default)]
pub struct NoCoolingCurves {
    curves: HashMap<(BuildingType, SizeClass), NoCoolingCurve>,
}

impl NoCoolingCurves {
    /// Build the table from (building type, size class, curve) entries
    ///
    /// # Errors
    ///
    /// The same building type and size class given twice
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (BuildingType, SizeClass, NoCoolingCurve)>,
    {
        let mut curves = HashMap::new();
        for (building_type, size, curve) in entries {
            if curves.insert((building_type, size), curve).is_some() {
                return Err(CswError::Parse {
                    from: format!("{},{}", building_type, size),
                    into: "NoCoolingCurves".into(),
                    desc: "duplicated building type and size class".into(),
                });
            }
        }
        Ok(Self { curves })
    }

    /// Curve of a building type and size class
    pub fn get(&self, building_type: BuildingType, size: SizeClass) -> Option<&NoCoolingCurve> {
        self.curves.get(&(building_type, size))
    }

    /// Number of curves
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

impl str::FromStr for NoCoolingCurves {
    type Err = CswError;

    fn from_str(s: &str) -> Result<NoCoolingCurves> {
        let s_nobom = s.trim_start_matches('\u{feff}');
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .comment(Some(b'#'))
            .from_reader(s_nobom.as_bytes());
        let entries = reader
            .deserialize::<RawCurveRow>()
            .map(|raw| -> Result<(BuildingType, SizeClass, NoCoolingCurve)> {
                let raw = raw?;
                Ok((
                    parse_value("building type", &raw.building_type)?,
                    parse_value("size class", &raw.size)?,
                    NoCoolingCurve {
                        a: raw.a,
                        b: raw.b,
                        c: raw.c,
                        d: raw.d,
                    },
                ))
            })
            .collect::<Result<Vec<_>>>()?;
        NoCoolingCurves::from_entries(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TCURVES: &str = "building_type,size,a,b,c,d
# offices
Office,Mid,0.1,2e-4,0,0
Office,Large,0.05,1e-4,-1e-8,0
";

    #[test]
    fn tcurves_parse() {
        let curves = TCURVES.parse::<NoCoolingCurves>().unwrap();
        assert_eq!(curves.len(), 2);
        assert_eq!(
            curves.get(BuildingType::Office, SizeClass::Mid).map(NoCoolingCurve::coefs),
            Some([0.1, 2e-4, 0.0, 0.0])
        );
        assert_eq!(curves.get(BuildingType::Hotel, SizeClass::Large), None);
        assert!(NoCoolingCurves::default().is_empty());
    }

    #[test]
    fn tcurves_duplicated() {
        let data = format!("{}Office,Mid,0.2,0,0,0\n", TCURVES);
        match data.parse::<NoCoolingCurves>() {
            Err(CswError::Parse { from, .. }) => assert_eq!(from, "Office,Mid"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn tcurves_unknown_size() {
        let data = "building_type,size,a,b,c,d\nOffice,Huge,0,0,0,0\n";
        assert_eq!(
            data.parse::<NoCoolingCurves>().err(),
            Some(CswError::UnknownValue {
                kind: "size class",
                value: "Huge".into()
            })
        );
    }
}
