use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use pretty_assertions::assert_eq;

use cswsavings::{key::RowKind, *};

fn read_test_file(path: &str) -> String {
    let path = Path::new(path);
    let mut f = File::open(path).unwrap();
    let mut content = String::new();
    f.read_to_string(&mut content).unwrap();
    content
}

fn get_engine() -> SavingsEngine {
    let weather = read_test_file("test_data/weather_information.csv")
        .parse::<WeatherStore>()
        .unwrap();
    let coefficients = read_test_file("test_data/savings_coefficients.csv")
        .parse::<CoefficientStore>()
        .unwrap();
    let curves = read_test_file("test_data/no_cooling_curves.csv")
        .parse::<NoCoolingCurves>()
        .unwrap();
    SavingsEngine::new(weather, coefficients).with_curves(curves)
}

fn input_from_file(path: &str) -> SavingsInput {
    serde_json::from_str(&read_test_file(path)).unwrap()
}

fn office_nyc() -> SavingsInput {
    SavingsInput {
        state: "New York".into(),
        city: "New York City".into(),
        csw_product: CswProduct::WinsertPlus,
        ..Default::default()
    }
}

/// Approximate equality with relative tolerance
pub fn approx_equal(expected: f64, got: f64) -> bool {
    let res = (expected - got).abs() <= 1e-6 * expected.abs().max(1.0);
    if !res {
        eprintln!("Expected: {}, Got: {}, Diff: {}", expected, got, expected - got);
    }
    res
}

#[test]
fn tables_load() {
    let engine = get_engine();
    assert_eq!(engine.weather().len(), 15);
    assert_eq!(engine.coefficients().len(), 132);
    assert!(engine.coefficients().ambiguous_keys().is_empty());
    assert_eq!(engine.curves().len(), 2);
    // Fixed state name
    assert_eq!(engine.weather().cities("Alaska"), vec!["Anchorage", "Fairbanks"]);
    assert_eq!(engine.weather().cities("Aklaska"), Vec::<&str>::new());
}

#[test]
fn office_new_york_city() {
    let res = get_engine().calculate_savings(&office_nyc()).unwrap();
    assert_eq!(res.details.high.key, "SingleDoubleMidOfficePVAV_ElecElectric8760");
    assert_eq!(res.details.low.key, "SingleDoubleMidOfficePVAV_ElecElectric2912");
    assert_eq!(res.hdd, 4811.0);
    assert_eq!(res.cdd, 1089.0);
    assert!(res.percent_eui_savings > 0.0 && res.percent_eui_savings < 100.0);
    assert!(approx_equal(49_975.40306, res.electric_savings_kwh));
    assert_eq!(res.gas_savings_therms, 0.0);
    assert!(approx_equal(5_997.048367, res.total_cost_savings));
    assert!(approx_equal(2.274214, res.total_savings_kbtu_per_sf));
    assert!(approx_equal(60.543095, res.baseline_eui));
    assert!(approx_equal(58.268881, res.new_eui));
    assert!(approx_equal(3.756356, res.percent_eui_savings));
    assert!(approx_equal(0.32659863, res.window_to_wall_ratio.unwrap()));
}

#[test]
fn office_input_file_matches_defaults() {
    let engine = get_engine();
    let from_file = engine
        .calculate_savings(&input_from_file("test_data/input_office.json"))
        .unwrap();
    let from_code = engine.calculate_savings(&office_nyc()).unwrap();
    assert_eq!(from_file, from_code);
}

#[test]
fn office_no_cooling_curve() {
    let input = SavingsInput {
        cooling_installed: false,
        ..office_nyc()
    };
    let engine = get_engine();
    let with_cooling = engine.calculate_savings(&office_nyc()).unwrap();
    let res = engine.calculate_savings(&input).unwrap();
    assert!(approx_equal(0.173592, res.details.cooling_multiplier));
    assert!(approx_equal(42_676.392901, res.electric_savings_kwh));
    assert!(res.cooling_per_sf < with_cooling.cooling_per_sf);
    assert_eq!(res.heating_per_sf, with_cooling.heating_per_sf);
    assert_eq!(res.baseline_eui, with_cooling.baseline_eui);
}

#[test]
fn office_no_cooling_needs_curve() {
    let engine = get_engine();
    let without_curves = SavingsEngine::new(engine.weather().clone(), engine.coefficients().clone());
    let input = SavingsInput {
        cooling_installed: false,
        ..office_nyc()
    };
    assert_eq!(
        without_curves.calculate_savings(&input),
        Err(CswError::MissingNoCoolingCurve {
            building_type: BuildingType::Office,
            size: SizeClass::Mid,
        })
    );
}

#[test]
fn office_large_gas_chicago() {
    let input = SavingsInput {
        state: "Illinois".into(),
        city: "Chicago".into(),
        building_area: 200_000.0,
        num_floors: 10,
        existing_window: ExistingWindow::DoublePane,
        csw_product: CswProduct::Triple,
        csw_area: 30_000.0,
        hvac_system: HvacSystem::BuiltUpVavHydronicReheat,
        heating_fuel: HeatingFuel::NaturalGas,
        electric_rate: 0.10,
        gas_rate: 0.9,
        schedule: Some(Schedule::Hours(2500.0)),
        ..Default::default()
    };
    let res = get_engine().calculate_savings(&input).unwrap();
    assert_eq!(res.details.high.key, "DoubleDoubleLargeOfficeVAVNatural Gas2912");
    assert_eq!(res.details.low.baseline_key, "DoubleN/ALargeOfficeVAVNatural Gas2080");
    // Heating savings only in the gas channel
    assert_eq!(res.heating_per_sf, 0.0);
    assert!(approx_equal(958.570371, res.gas_savings_therms));
    assert!(approx_equal(4_158.844714, res.electric_savings_kwh));
    assert!(approx_equal(1_278.597805, res.total_cost_savings));
    assert!(approx_equal(1.775231, res.percent_eui_savings));
}

#[test]
fn hotel_miami_without_cooling() {
    let res = get_engine()
        .calculate_savings(&input_from_file("test_data/input_hotel.json"))
        .unwrap();
    assert_eq!(res.details.high.bracket, 100.0);
    assert_eq!(res.details.low.bracket, 33.0);
    let blend = |v100: f64, v33: f64| v33 + (v100 - v33) * (66.0 - 33.0) / (100.0 - 33.0);
    assert!(approx_equal(blend(0.6, 0.45), res.details.cooling_multiplier));
    assert!(approx_equal(
        blend(res.details.high.heating, res.details.low.heating),
        res.gas_per_sf
    ));
    assert!(approx_equal(
        blend(res.details.high.cooling, res.details.low.cooling) * res.details.cooling_multiplier,
        res.cooling_per_sf
    ));
    assert!(approx_equal(57.462463, res.gas_savings_therms));
    assert!(approx_equal(3_795.226436, res.electric_savings_kwh));
    assert!(approx_equal(41.684164, res.baseline_eui));
}

#[test]
fn hotel_input_file_without_schedule() {
    let engine = get_engine();
    let input = input_from_file("test_data/input_hotel_default.json");
    assert_eq!(input.schedule, None);
    assert_eq!(input.resolved_schedule(), Schedule::Occupancy(66.0));
    let res = engine.calculate_savings(&input).unwrap();
    let explicit = engine
        .calculate_savings(&input_from_file("test_data/input_hotel.json"))
        .unwrap();
    assert_eq!(res, explicit);
}

#[test]
fn hotel_heat_pump_is_electric() {
    let input = SavingsInput {
        building_type: BuildingType::Hotel,
        state: "Alaska".into(),
        city: "Anchorage".into(),
        building_area: 60_000.0,
        num_floors: 4,
        csw_area: 8_000.0,
        hvac_system: HvacSystem::Pthp,
        heating_fuel: HeatingFuel::NaturalGas,
        electric_rate: 0.2,
        gas_rate: 1.2,
        schedule: Some(Schedule::Occupancy(50.0)),
        ..Default::default()
    };
    let res = get_engine().calculate_savings(&input).unwrap();
    assert_eq!(res.details.high.key, "SingleDoubleSmallHotelPTHPElectric100");
    assert_eq!(res.gas_savings_therms, 0.0);
    assert!(approx_equal(18_066.575662, res.electric_savings_kwh));
    assert!(approx_equal(1.842301, res.percent_eui_savings));
}

#[test]
fn fuel_channels_are_exclusive() {
    let engine = get_engine();
    for &heating_fuel in &[HeatingFuel::Electric, HeatingFuel::NaturalGas, HeatingFuel::NoHeating] {
        for &hours in &[1500.0, 2500.0, 2912.0, 5000.0, 8760.0] {
            let input = SavingsInput {
                heating_fuel,
                schedule: Some(Schedule::Hours(hours)),
                ..office_nyc()
            };
            let res = engine.calculate_savings(&input).unwrap();
            assert!(res.gas_per_sf == 0.0 || res.heating_per_sf == 0.0);
            assert!(approx_equal(
                res.total_savings_kbtu_per_sf / res.baseline_eui * 100.0,
                res.percent_eui_savings
            ));
        }
    }
}

#[test]
fn unmapped_hotel_hvac_is_reported() {
    let input = SavingsInput {
        building_type: BuildingType::Hotel,
        hvac_system: HvacSystem::Other,
        schedule: Some(Schedule::Occupancy(70.0)),
        ..office_nyc()
    };
    match get_engine().calculate_savings(&input) {
        Err(CswError::ConfigurationNotFound {
            kind,
            high,
            high_matches,
            low,
            low_matches,
        }) => {
            assert_eq!(kind, RowKind::Savings);
            assert_eq!(high.to_string(), "SingleDoubleLargeHotelElectric100");
            assert_eq!(low.to_string(), "SingleDoubleLargeHotelElectric33");
            assert_eq!((high_matches, low_matches), (0, 0));
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn unknown_location() {
    let input = SavingsInput {
        state: "Aklaska".into(),
        city: "Anchorage".into(),
        ..office_nyc()
    };
    assert_eq!(
        get_engine().calculate_savings(&input),
        Err(CswError::LocationNotFound {
            state: "Aklaska".into(),
            city: "Anchorage".into(),
        })
    );
}

#[test]
fn input_warnings() {
    assert!(check_input(&office_nyc()).is_empty());
    let input = SavingsInput {
        csw_area: 60_000.0,
        ..office_nyc()
    };
    let warnings = check_input(&input);
    assert_eq!(
        warnings[0],
        InputWarning::CswArea {
            csw_area: 60_000.0,
            max: 37_500.0
        }
    );
    assert_eq!(warnings.len(), 2);
}
