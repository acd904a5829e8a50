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
Datos climáticos
================

Weather Store: annual heating and cooling degree days (base 65°F) by
(state, city), read once and queried read-only afterwards.

Table format (CSV, with header):

State,Cities,Heating Degree Days (HDD),Cooling Degree Days (CDD)
New York,New York City,4811,1089
*/

use std::collections::BTreeMap;
use std::str;

use csv::{ReaderBuilder, Trim};
use log::warn;
use serde_derive::{Deserialize, Serialize};

use crate::error::{CswError, Result};

/// Known misspellings of state names in the source table
const STATE_FIXES: [(&str, &str); 1] = [("Aklaska", "Alaska")];

/// Annual degree days of a location, base 65°F
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DegreeDays {
    /// Heating degree days
    pub hdd: f64,
    /// Cooling degree days
    pub cdd: f64,
}

/// Row of the weather table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// State
    #[serde(rename = "State")]
    pub state: String,
    /// City
    #[serde(rename = "Cities")]
    pub city: String,
    /// Heating degree days
    #[serde(rename = "Heating Degree Days (HDD)")]
    pub hdd: f64,
    /// Cooling degree days
    #[serde(rename = "Cooling Degree Days (CDD)")]
    pub cdd: f64,
}

/// Degree days by state and city
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherStore {
    data: BTreeMap<String, BTreeMap<String, DegreeDays>>,
}

impl WeatherStore {
    /// Build the store from weather records
    ///
    /// State names are normalized and negative degree days rejected.
    /// A (state, city) pair can only appear once.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = WeatherRecord>,
    {
        let mut data: BTreeMap<String, BTreeMap<String, DegreeDays>> = BTreeMap::new();
        for record in records {
            let state = normalize_state(record.state.trim());
            let city = record.city.trim().to_string();
            if record.hdd < 0.0 || record.cdd < 0.0 {
                return Err(CswError::Parse {
                    from: format!("{}, {}: {}, {}", state, city, record.hdd, record.cdd),
                    into: "DegreeDays".into(),
                    desc: "negative degree days".into(),
                });
            }
            let cities = data.entry(state.clone()).or_default();
            if cities.contains_key(&city) {
                return Err(CswError::DuplicateLocation { state, city });
            }
            cities.insert(
                city,
                DegreeDays {
                    hdd: record.hdd,
                    cdd: record.cdd,
                },
            );
        }
        Ok(Self { data })
    }

    /// Degree days of a location, if present
    pub fn degree_days(&self, state: &str, city: &str) -> Option<DegreeDays> {
        self.data
            .get(state)
            .and_then(|cities| cities.get(city))
            .cloned()
    }

    /// Sorted list of states
    pub fn states(&self) -> Vec<&str> {
        self.data.keys().map(String::as_str).collect()
    }

    /// Sorted list of cities of a state (empty for unknown states)
    pub fn cities(&self, state: &str) -> Vec<&str> {
        self.data
            .get(state)
            .map(|cities| cities.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Number of locations
    pub fn len(&self) -> usize {
        self.data.values().map(BTreeMap::len).sum()
    }

    /// Is the store empty?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl str::FromStr for WeatherStore {
    type Err = CswError;

    fn from_str(s: &str) -> Result<WeatherStore> {
        let s_nobom = s.trim_start_matches('\u{feff}');
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .comment(Some(b'#'))
            .from_reader(s_nobom.as_bytes());
        let records = reader
            .deserialize()
            .collect::<std::result::Result<Vec<WeatherRecord>, _>>()?;
        WeatherStore::from_records(records)
    }
}

fn normalize_state(state: &str) -> String {
    match STATE_FIXES.iter().find(|(wrong, _)| *wrong == state) {
        Some((wrong, right)) => {
            warn!("State name \"{}\" in weather data corrected to \"{}\"", wrong, right);
            right.to_string()
        }
        None => state.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TWEATHER: &str = "State,Cities,Heating Degree Days (HDD),Cooling Degree Days (CDD)
New York,New York City,4811,1089
New York,Buffalo,6692,548
Aklaska,Anchorage,10470,0
Florida,Miami,149,4361
";

    #[test]
    fn tweather_parse() {
        let store = TWEATHER.parse::<WeatherStore>().unwrap();
        assert_eq!(store.len(), 4);
        assert_eq!(
            store.degree_days("New York", "New York City"),
            Some(DegreeDays {
                hdd: 4811.0,
                cdd: 1089.0
            })
        );
        assert_eq!(store.degree_days("New York", "Albany"), None);
    }

    #[test]
    fn tweather_alaska_fix() {
        let store = TWEATHER.parse::<WeatherStore>().unwrap();
        assert_eq!(store.states(), vec!["Alaska", "Florida", "New York"]);
        assert_eq!(store.degree_days("Aklaska", "Anchorage"), None);
        assert_eq!(store.degree_days("Alaska", "Anchorage").unwrap().hdd, 10470.0);
    }

    #[test]
    fn tweather_cities_sorted() {
        let store = TWEATHER.parse::<WeatherStore>().unwrap();
        assert_eq!(store.cities("New York"), vec!["Buffalo", "New York City"]);
        assert!(store.cities("Texas").is_empty());
    }

    #[test]
    fn tweather_duplicate() {
        let data = format!("{}New York,Buffalo,1,1\n", TWEATHER);
        assert_eq!(
            data.parse::<WeatherStore>(),
            Err(CswError::DuplicateLocation {
                state: "New York".into(),
                city: "Buffalo".into()
            })
        );
    }

    #[test]
    fn tweather_bad_number() {
        let data = format!("{}Texas,Houston,abc,3059\n", TWEATHER);
        assert!(data.parse::<WeatherStore>().is_err());
    }
}
