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
Errores
=======

Error type of the savings calculation and its helpers.
*/

use std::fmt;

use crate::{
    key::{ConfigKey, RowKind},
    types::{BuildingType, SizeClass},
};

/// Errors raised while loading the reference tables or computing savings
#[derive(Debug, Clone, PartialEq)]
pub enum CswError {
    /// Text could not be parsed
    Parse {
        /// Offending text
        from: String,
        /// Target type
        into: String,
        /// Description
        desc: String,
    },
    /// A categorical value is not part of its vocabulary
    UnknownValue {
        /// Kind of value (building type, hvac system...)
        kind: &'static str,
        /// Offending value
        value: String,
    },
    /// The same (state, city) appears more than once in the weather table
    DuplicateLocation {
        /// State
        state: String,
        /// City
        city: String,
    },
    /// The (state, city) pair is not in the weather table
    LocationNotFound {
        /// State
        state: String,
        /// City
        city: String,
    },
    /// Zero or more than one coefficient row matches a configuration key
    ConfigurationNotFound {
        /// Row set that was queried
        kind: RowKind,
        /// Key for the high bracket
        high: ConfigKey,
        /// Number of rows found for the high bracket key
        high_matches: usize,
        /// Key for the low bracket
        low: ConfigKey,
        /// Number of rows found for the low bracket key
        low_matches: usize,
    },
    /// Interpolation endpoints are identical
    DegenerateBracket {
        /// High bracket
        high: f64,
        /// Low bracket
        low: f64,
    },
    /// A row used without cooling lacks its static cooling multiplier
    MissingNoCoolingMultiplier(ConfigKey),
    /// No retention curve for a building without cooling
    MissingNoCoolingCurve {
        /// Building type
        building_type: BuildingType,
        /// Size class
        size: SizeClass,
    },
    /// Mathematically invalid input
    WrongInput(String),
}

/// Result type of the crate
pub type Result<T> = std::result::Result<T, CswError>;

impl fmt::Display for CswError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CswError::*;
        match self {
            Parse { from, into, desc } => {
                write!(f, "Could not parse {} from \"{}\" ({})", into, from, desc)
            }
            UnknownValue { kind, value } => write!(f, "Unknown {}: \"{}\"", kind, value),
            DuplicateLocation { state, city } => {
                write!(f, "Duplicated location in weather data: {}, {}", city, state)
            }
            LocationNotFound { state, city } => {
                write!(f, "Location not found in weather data: {}, {}", city, state)
            }
            ConfigurationNotFound {
                kind,
                high,
                high_matches,
                low,
                low_matches,
            } => write!(
                f,
                "No unique {} coefficient row for keys {} ({} matches) and {} ({} matches)",
                kind, high, high_matches, low, low_matches
            ),
            DegenerateBracket { high, low } => write!(
                f,
                "Degenerate interpolation bracket (high = {}, low = {})",
                high, low
            ),
            MissingNoCoolingMultiplier(key) => write!(
                f,
                "Coefficient row {} has no cooling multiplier for buildings without cooling",
                key
            ),
            MissingNoCoolingCurve { building_type, size } => write!(
                f,
                "Missing no-cooling retention curve for {} {} buildings",
                size, building_type
            ),
            WrongInput(desc) => write!(f, "Wrong input: {}", desc),
        }
    }
}

impl std::error::Error for CswError {}

impl From<std::num::ParseFloatError> for CswError {
    fn from(err: std::num::ParseFloatError) -> Self {
        CswError::Parse {
            from: err.to_string(),
            into: "Number".into(),
            desc: "wrong number format".into(),
        }
    }
}

impl From<std::num::ParseIntError> for CswError {
    fn from(err: std::num::ParseIntError) -> Self {
        CswError::Parse {
            from: err.to_string(),
            into: "Integer".into(),
            desc: "wrong integer format".into(),
        }
    }
}

impl From<csv::Error> for CswError {
    fn from(err: csv::Error) -> Self {
        CswError::Parse {
            from: err.to_string(),
            into: "Table".into(),
            desc: "wrong CSV format".into(),
        }
    }
}
