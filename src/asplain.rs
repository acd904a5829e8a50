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

// ==================== Conversión a formato simple

use crate::types::{BracketValues, SavingsResult};

/// Muestra en formato simple
///
/// Compact plain text report of the savings, the energy use intensity and the
/// intermediate values of the calculation
pub trait AsPlain {
    /// Get in plain format
    fn to_plain(&self) -> String;
}

/// Muestra un valor opcional con la precisión deseada o como un guion si no está presente
fn value_or_dash(v: Option<f64>, precision: usize) -> String {
    match v {
        Some(v) => format!("{:.*}", precision, v),
        None => "-".to_string(),
    }
}

fn bracket2string(label: &str, v: &BracketValues) -> String {
    format!(
        "- Tramo {label} ({bracket}): calefacción {heating:.4}, refrigeración {cooling:.4}, EUI inicial {eui:.2}
  clave: {key}
  clave de referencia: {baseline_key}",
        label = label,
        bracket = v.bracket,
        heating = v.heating,
        cooling = v.cooling,
        eui = v.baseline_eui,
        key = v.key,
        baseline_key = v.baseline_key,
    )
}

impl AsPlain for SavingsResult {
    fn to_plain(&self) -> String {
        let total_cost = self.total_cost_savings;
        let elec_cost = self.electric_cost_savings;
        let gas_cost = self.gas_cost_savings;
        let kwh = self.electric_savings_kwh;
        let therms = self.gas_savings_therms;
        let kbtu_sf = self.total_savings_kbtu_per_sf;
        let baseline_eui = self.baseline_eui;
        let new_eui = self.new_eui;
        let pct = self.percent_eui_savings;
        let heating = self.heating_per_sf;
        let cooling = self.cooling_per_sf;
        let gas = self.gas_per_sf;
        let hdd = self.hdd;
        let cdd = self.cdd;
        let wwr = value_or_dash(self.window_to_wall_ratio.map(|v| v * 100.0), 1);

        let d = &self.details;
        let schedule = d.schedule_value;
        let mult = d.cooling_multiplier;
        let high = bracket2string("superior", &d.high);
        let low = bracket2string("inferior", &d.low);

        format!(
            "** Ahorros anuales

Ahorro económico total: {total_cost:.2} [$/año]

- Electricidad: {kwh:.0} [kWh/año], {elec_cost:.2} [$/año]
- Gas natural: {therms:.0} [therms/año], {gas_cost:.2} [$/año]

** Intensidad de uso de energía (EUI) [kBtu/SF.año]

EUI inicial: {baseline_eui:.2}
EUI con CSW: {new_eui:.2}
Ahorro: {kbtu_sf:.3} ({pct:.1} %)

** Ahorros por superficie de CSW

- Calefacción eléctrica: {heating:.4} [kWh/SF.año]
- Refrigeración: {cooling:.4} [kWh/SF.año]
- Calefacción con gas: {gas:.4} [therms/SF.año]

** Clima

HDD = {hdd:.0}
CDD = {cdd:.0}

** Geometría

WWR = {wwr} [%]

** Detalles del cálculo

Horas de funcionamiento / ocupación: {schedule}
Multiplicador de refrigeración: {mult:.3}
{high}
{low}
"
        )
    }
}
