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

#[macro_use]
extern crate clap;

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::process::exit;
use std::str::FromStr;

use clap::{App, AppSettings, Arg, ArgMatches};
use failure::Error;
use failure::ResultExt;
use itertools::Itertools;
use log::{debug, LevelFilter};

use cswsavings::*;

// Funciones auxiliares -----------------------------------------------------------------------

fn readfile(path: &Path) -> Result<String, Error> {
    let mut f = File::open(path).context(format!("Archivo {} no encontrado", path.display()))?;
    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .context("Error al leer el archivo")?;
    Ok(contents)
}

fn writefile(path: &Path, content: &[u8]) -> Result<(), Error> {
    let mut file = File::create(&path)
        .context(format!("No se ha podido crear el archivo {}", path.display()))?;
    file.write_all(content)
        .context(format!("No se ha podido escribir en {}", path.display()))?;
    Ok(())
}

/// Nivel de registro a partir de la verbosidad
fn log_level(verbosity: u64) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Lee y convierte una tabla de datos o termina el programa
fn load_table<T>(filename: &str, descr: &str, verbosity: u64) -> T
where
    T: FromStr<Err = CswError>,
{
    let path = Path::new(filename);
    let content = readfile(path).unwrap_or_else(|err| {
        eprintln!(
            "ERROR: No se ha podido leer el archivo de {} \"{}\" -> {}",
            descr,
            path.display(),
            err.as_fail()
        );
        exit(exitcode::IOERR);
    });
    let table = content.parse::<T>().unwrap_or_else(|err| {
        eprintln!(
            "ERROR: Formato incorrecto del archivo de {} \"{}\" ({})",
            descr,
            path.display(),
            err
        );
        exit(exitcode::DATAERR);
    });
    if verbosity > 0 {
        println!("Archivo de {}: \"{}\"", descr, path.display());
    }
    table
}

/// Valor numérico de la CLI, si se ha indicado
fn number_arg(matches: &ArgMatches<'_>, name: &str, verbosity: u64) -> Option<f64> {
    if !matches.is_present(name) {
        return None;
    }
    let value = value_t!(matches, name, f64).unwrap_or_else(|error| {
        eprintln!("ERROR: El valor de {} no es un valor numérico válido", name);
        if verbosity > 2 {
            println!("{}", error)
        };
        exit(exitcode::DATAERR);
    });
    Some(value)
}

/// Valor categórico de la CLI, si se ha indicado
fn enum_arg<T: FromStr>(matches: &ArgMatches<'_>, name: &str, kind: &'static str) -> Option<T> {
    matches.value_of(name).map(|v| {
        parse_value::<T>(kind, v).unwrap_or_else(|error| {
            eprintln!("ERROR: {}", error);
            exit(exitcode::DATAERR);
        })
    })
}

/// Datos de entrada: argumentos de CLI > archivo de entrada (JSON) > valores por defecto
fn get_input(matches: &ArgMatches<'_>, verbosity: u64) -> SavingsInput {
    let from_file = matches.value_of("input").map(|archivo| {
        let path = Path::new(archivo);
        let content = readfile(path).unwrap_or_else(|err| {
            eprintln!(
                "ERROR: No se ha podido leer el archivo de datos de entrada \"{}\" -> {}",
                path.display(),
                err.as_fail()
            );
            exit(exitcode::IOERR);
        });
        let input: SavingsInput = serde_json::from_str(&content).unwrap_or_else(|err| {
            eprintln!(
                "ERROR: Formato incorrecto del archivo de datos de entrada \"{}\" ({})",
                path.display(),
                err
            );
            exit(exitcode::DATAERR);
        });
        println!("Datos de entrada (archivo): \"{}\"", path.display());
        input
    });
    let mut input = from_file.unwrap_or_default();

    if let Some(v) = enum_arg(matches, "building_type", "building type") {
        input.building_type = v;
    }
    if let Some(v) = matches.value_of("state") {
        input.state = v.to_string();
    }
    if let Some(v) = matches.value_of("city") {
        input.city = v.to_string();
    }
    if let Some(v) = number_arg(matches, "area", verbosity) {
        input.building_area = v;
    }
    if matches.is_present("floors") {
        input.num_floors = value_t!(matches, "floors", u32).unwrap_or_else(|_| {
            eprintln!("ERROR: El número de plantas debe ser un número entero no negativo");
            exit(exitcode::DATAERR);
        });
    }
    if let Some(v) = enum_arg(matches, "window", "existing window") {
        input.existing_window = v;
    }
    if let Some(v) = enum_arg(matches, "csw", "CSW product") {
        input.csw_product = v;
    }
    if let Some(v) = number_arg(matches, "csw_area", verbosity) {
        input.csw_area = v;
    }
    if let Some(v) = enum_arg(matches, "hvac", "HVAC system") {
        input.hvac_system = v;
    }
    if let Some(v) = enum_arg(matches, "heating_fuel", "heating fuel") {
        input.heating_fuel = v;
    }
    if let Some(v) = matches.value_of("cooling") {
        input.cooling_installed = v == "Yes";
    }
    if let Some(v) = number_arg(matches, "electric_rate", verbosity) {
        input.electric_rate = v;
    }
    if let Some(v) = number_arg(matches, "gas_rate", verbosity) {
        input.gas_rate = v;
    }

    // Sin horario se usa el del tipo de edificio
    if let Some(v) = number_arg(matches, "hours", verbosity) {
        input.schedule = Some(Schedule::Hours(v));
    } else if let Some(v) = number_arg(matches, "occupancy", verbosity) {
        input.schedule = Some(Schedule::Occupancy(v));
    }

    if input.state.is_empty() || input.city.is_empty() {
        eprintln!("ERROR: Es necesario indicar el estado y la ciudad del edificio");
        exit(exitcode::USAGE);
    }
    input
}

/// Muestra las localizaciones disponibles
fn list_locations(weather: &WeatherStore) {
    println!("** Localizaciones ({})", weather.len());
    for state in weather.states() {
        println!("{}: {}", state, weather.cities(state).iter().join(", "));
    }
}

// Función principal ------------------------------------------------------------------------------

fn main() {
    let matches = App::new("CswCalc")
        .bin_name("cswcalc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("CswCalc - Ahorros energéticos de ventanas secundarias (CSW) en oficinas y hoteles.")
        .setting(AppSettings::NextLineHelp)
        .arg(Arg::with_name("weather")
            .short("w")
            .long("weather")
            .value_name("ARCHIVO_CLIMA")
            .required(true)
            .help("Archivo de grados-día por estado y ciudad (CSV)")
            .takes_value(true)
            .display_order(1))
        .arg(Arg::with_name("coefficients")
            .short("c")
            .long("coefficients")
            .value_name("ARCHIVO_COEFICIENTES")
            .required_unless("list_locations")
            .help("Archivo de coeficientes de regresión (CSV)")
            .takes_value(true)
            .display_order(2))
        .arg(Arg::with_name("curves")
            .short("n")
            .long("curves")
            .value_name("ARCHIVO_CURVAS")
            .help("Archivo de curvas de ahorro sin refrigeración por tipo y tamaño de edificio (CSV)")
            .takes_value(true)
            .display_order(3))
        .arg(Arg::with_name("input")
            .short("i")
            .long("input")
            .value_name("ARCHIVO_ENTRADA")
            .help("Archivo de datos de entrada (JSON)")
            .takes_value(true)
            .display_order(4))
        .arg(Arg::with_name("list_locations")
            .long("list-locations")
            .help("Muestra los estados y ciudades disponibles")
            .display_order(5))
        .arg(Arg::with_name("building_type")
            .short("b")
            .long("building-type")
            .value_name("TIPO")
            .possible_values(&["Office", "Hotel"])
            .help("Tipo de edificio")
            .takes_value(true))
        .arg(Arg::with_name("state")
            .long("state")
            .value_name("ESTADO")
            .help("Estado")
            .takes_value(true))
        .arg(Arg::with_name("city")
            .long("city")
            .value_name("CIUDAD")
            .help("Ciudad")
            .takes_value(true))
        .arg(Arg::with_name("area")
            .short("a")
            .long("area")
            .value_name("AREA")
            .help("Superficie del edificio [sq ft]")
            .takes_value(true))
        .arg(Arg::with_name("floors")
            .long("floors")
            .value_name("PLANTAS")
            .help("Número de plantas")
            .takes_value(true))
        .arg(Arg::with_name("window")
            .long("window")
            .value_name("VENTANA")
            .possible_values(&["Single pane", "Double pane", "Double pane, low-e"])
            .help("Tipo de ventana existente")
            .takes_value(true))
        .arg(Arg::with_name("csw")
            .long("csw")
            .value_name("PRODUCTO")
            .possible_values(&["Winsert Lite", "Winsert Plus", "Single", "Double", "Triple", "Quad"])
            .help("Producto CSW")
            .takes_value(true))
        .arg(Arg::with_name("csw_area")
            .long("csw-area")
            .value_name("AREA_CSW")
            .help("Superficie de CSW instalada [sq ft]")
            .takes_value(true))
        .arg(Arg::with_name("hvac")
            .long("hvac")
            .value_name("SISTEMA")
            .help("Sistema de climatización (p.e. \"Packaged VAV with electric reheat\", PTAC, PTHP)")
            .takes_value(true))
        .arg(Arg::with_name("heating_fuel")
            .long("heating-fuel")
            .value_name("COMBUSTIBLE")
            .possible_values(&["Electric", "Natural Gas", "None"])
            .help("Combustible de calefacción")
            .takes_value(true))
        .arg(Arg::with_name("cooling")
            .long("cooling")
            .value_name("REFRIGERACION")
            .possible_values(&["Yes", "No"])
            .help("Existe sistema de refrigeración")
            .takes_value(true))
        .arg(Arg::with_name("electric_rate")
            .long("electric-rate")
            .value_name("PRECIO_ELEC")
            .help("Precio de la electricidad [$/kWh]")
            .takes_value(true))
        .arg(Arg::with_name("gas_rate")
            .long("gas-rate")
            .value_name("PRECIO_GAS")
            .help("Precio del gas natural [$/therm]")
            .takes_value(true))
        .arg(Arg::with_name("hours")
            .long("hours")
            .value_name("HORAS")
            .conflicts_with("occupancy")
            .help("Horas anuales de funcionamiento (oficinas)")
            .takes_value(true))
        .arg(Arg::with_name("occupancy")
            .long("occupancy")
            .value_name("OCUPACION")
            .help("Tasa de ocupación [%] (hoteles)")
            .takes_value(true))
        .arg(Arg::with_name("archivo_salida_json")
            .long("json")
            .value_name("ARCHIVO_SALIDA_JSON")
            .help("Archivo de salida de resultados detallados en formato JSON")
            .takes_value(true))
        .arg(Arg::with_name("showlicense")
            .short("L")
            .long("licencia")
            .help("Muestra la licencia del programa (MIT)"))
        .arg(Arg::with_name("v")
            .short("v")
            .multiple(true)
            .help("Sets the level of verbosity"))
        .get_matches();

    if matches.is_present("showlicense") {
        println!(
            "
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the 'Software'), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED 'AS IS', WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE."
        );
        exit(exitcode::OK);
    }

    // Prólogo ------------------------------------------------------------------------------------

    let verbosity = matches.occurrences_of("v");

    env_logger::Builder::new()
        .filter_level(log_level(verbosity))
        .init();

    if verbosity > 2 {
        println!("Opciones indicadas: ----------");
        println!("{:#?}", matches);
        println!("------------------------------");
    }

    // Datos climáticos ---------------------------------------------------------------------------
    // El argumento es obligatorio
    let weather: WeatherStore = load_table(
        matches.value_of("weather").unwrap_or_default(),
        "datos climáticos",
        verbosity,
    );

    if matches.is_present("list_locations") {
        list_locations(&weather);
        exit(exitcode::OK);
    }

    // Coeficientes de regresión ------------------------------------------------------------------
    let coefficients: CoefficientStore = load_table(
        matches.value_of("coefficients").unwrap_or_default(),
        "coeficientes",
        verbosity,
    );
    for key in coefficients.ambiguous_keys() {
        println!("AVISO: Configuración con varias filas de coeficientes: {}", key);
    }
    let curves: NoCoolingCurves = match matches.value_of("curves") {
        Some(archivo) => load_table(archivo, "curvas sin refrigeración", verbosity),
        None => NoCoolingCurves::default(),
    };
    debug!(
        "Cargadas {} localizaciones, {} filas de coeficientes y {} curvas sin refrigeración",
        weather.len(),
        coefficients.len(),
        curves.len()
    );

    // Datos de entrada ---------------------------------------------------------------------------
    println!("** Datos de entrada");
    let input = get_input(&matches, verbosity);
    println!(
        "{}, {}, {}: {} sq ft, {} plantas",
        input.building_type, input.city, input.state, input.building_area, input.num_floors
    );
    if verbosity > 0 {
        println!(
            "Ventana: {}, CSW: {} ({} sq ft), Climatización: {}, Calefacción: {}, Refrigeración: {}",
            input.existing_window,
            input.csw_product,
            input.csw_area,
            input.hvac_system,
            input.heating_fuel,
            if input.cooling_installed { "Yes" } else { "No" }
        );
    }
    println!("Horas de funcionamiento / ocupación: {}", input.resolved_schedule().value());
    for warning in check_input(&input) {
        println!("AVISO: Dato de entrada fuera del rango habitual -> {}", warning);
    }

    // Cálculo de ahorros -------------------------------------------------------------------------
    let engine = SavingsEngine::new(weather, coefficients).with_curves(curves);
    let savings = engine.calculate_savings(&input).unwrap_or_else(|error| {
        eprintln!("ERROR: No se han podido calcular los ahorros -> {}", error);
        exit(exitcode::DATAERR);
    });

    // Salida de resultados ------------------------------------------------------------------------
    if let Some(archivo) = matches.value_of("archivo_salida_json") {
        let path = Path::new(archivo);
        if verbosity > 0 {
            println!("Resultados en formato JSON: {:?}", path.display());
        }
        let json = serde_json::to_string_pretty(&savings).unwrap_or_else(|error| {
            eprintln!("ERROR: No se han podido convertir los resultados al formato JSON");
            if verbosity > 2 {
                println!("{:?}", error)
            };
            exit(exitcode::DATAERR);
        });
        if let Err(err) = writefile(path, json.as_bytes()) {
            eprintln!("ERROR: {}", err.as_fail());
            exit(exitcode::IOERR);
        }
    }
    // Mostrar siempre en formato plain
    println!("{}", savings.to_plain());
}
