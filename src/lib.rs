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
CswSavings
==========

This crate provides a library and binary that **estimate the annual energy and
cost savings of commercial secondary windows (CSW)** installed on Office and
Hotel buildings.

Savings are not simulated. They are reproduced from a table of regression
coefficients fit against whole building simulations run at fixed operating
profiles (2080, 2912 and 8760 operating hours for offices, 33 % and 100 %
occupancy for hotels):

- a configuration key is built from the window, CSW, size, HVAC and fuel of the building
- the heating (HDD) and cooling (CDD) regressions of the matching rows are evaluated at the site
- values are interpolated between the two brackets enclosing the actual operating profile
- results are aggregated into electricity, natural gas, cost and EUI savings

It also holds the following assumptions:

- 1 kWh = 3.413 kBtu and 1 therm = 100 kBtu
- a building without heating is modelled as an electrically heated building
- without cooling, office cooling savings are reduced by a CDD dependent curve
  read from a table of curves per size class, and hotel cooling savings by the
  static multiplier of the coefficient rows
- without an explicit schedule, offices run 8000 h/yr and hotels are at 66 %
  occupancy

# Ejemplo

```rust
use std::fs::read_to_string;
use cswsavings::*;

// Tablas de datos climáticos y coeficientes de regresión
let weather = read_to_string("test_data/weather_information.csv")
    .unwrap()
    .parse::<WeatherStore>()
    .unwrap();
let coefficients = read_to_string("test_data/savings_coefficients.csv")
    .unwrap()
    .parse::<CoefficientStore>()
    .unwrap();
let curves = read_to_string("test_data/no_cooling_curves.csv")
    .unwrap()
    .parse::<NoCoolingCurves>()
    .unwrap();
let engine = SavingsEngine::new(weather, coefficients).with_curves(curves);

// Oficina en Nueva York con los valores por defecto
let input = SavingsInput {
    state: "New York".into(),
    city: "New York City".into(),
    ..Default::default()
};

let savings = engine.calculate_savings(&input).unwrap();
assert!(savings.percent_eui_savings > 0.0);

// Visualización compacta
println!("{}", savings.to_plain());
```

*/

#![warn(missing_docs)]

mod asplain;
mod mathops;
mod savings;

pub mod coefficients;
pub mod curves;
pub mod defaults;
pub mod error;
pub mod interpolation;
pub mod key;
pub mod profile;
pub mod regression;
pub mod types;
pub mod validation;
pub mod weather;
pub mod wwr;

pub use asplain::*;
pub use coefficients::{CoefficientRow, CoefficientStore};
pub use curves::{NoCoolingCurve, NoCoolingCurves};
pub use error::CswError;
pub use key::{build_key, ConfigKey};
pub use savings::*;
pub use types::*;
pub use validation::{check_input, InputWarning};
pub use weather::{DegreeDays, WeatherStore};

/// Número de versión de la librería
///
/// Version number
pub static VERSION: &str = env!("CARGO_PKG_VERSION");
