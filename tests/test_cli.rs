const WEATHER: &str = "test_data/weather_information.csv";
const COEFFICIENTS: &str = "test_data/savings_coefficients.csv";
const CURVES: &str = "test_data/no_cooling_curves.csv";

#[test]
fn office_defaults_new_york() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-w",
            WEATHER,
            "-c",
            COEFFICIENTS,
            "--state",
            "New York",
            "--city",
            "New York City",
        ])
        .stdout()
        .contains("Ahorro económico total: 5997.05 [$/año]")
        .stdout()
        .contains("Ahorro: 2.274 (3.8 %)")
        .stdout()
        .contains("WWR = 32.7 [%]")
        .unwrap();
}

#[test]
fn office_input_file() {
    assert_cli::Assert::main_binary()
        .with_args(&["-w", WEATHER, "-c", COEFFICIENTS, "-i", "test_data/input_office.json"])
        .stdout()
        .contains("- Electricidad: 49975 [kWh/año], 5997.05 [$/año]")
        .stdout()
        .contains("EUI inicial: 60.54")
        .unwrap();
}

#[test]
fn office_cli_overrides_input_file() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-w",
            WEATHER,
            "-c",
            COEFFICIENTS,
            "-n",
            CURVES,
            "-i",
            "test_data/input_office.json",
            "--cooling",
            "No",
        ])
        .stdout()
        .contains("Multiplicador de refrigeración: 0.174")
        .stdout()
        .contains("Ahorro económico total: 5121.17 [$/año]")
        .unwrap();
}

#[test]
fn office_without_cooling_needs_curves() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-w",
            WEATHER,
            "-c",
            COEFFICIENTS,
            "-i",
            "test_data/input_office.json",
            "--cooling",
            "No",
        ])
        .fails_with(65)
        .stderr()
        .contains("Missing no-cooling retention curve for Mid Office buildings")
        .unwrap();
}

#[test]
fn office_large_gas() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-w",
            WEATHER,
            "-c",
            COEFFICIENTS,
            "--state",
            "Illinois",
            "--city",
            "Chicago",
            "--area",
            "200000",
            "--floors",
            "10",
            "--window",
            "Double pane",
            "--csw",
            "Triple",
            "--csw-area",
            "30000",
            "--hvac",
            "Built-up VAV with hydronic reheat",
            "--heating-fuel",
            "Natural Gas",
            "--electric-rate",
            "0.10",
            "--gas-rate",
            "0.9",
            "--hours",
            "2500",
        ])
        .stdout()
        .contains("- Gas natural: 959 [therms/año], 862.71 [$/año]")
        .stdout()
        .contains("clave: DoubleDoubleLargeOfficeVAVNatural Gas2912")
        .unwrap();
}

#[test]
fn hotel_input_file() {
    assert_cli::Assert::main_binary()
        .with_args(&["-w", WEATHER, "-c", COEFFICIENTS, "-i", "test_data/input_hotel.json"])
        .stdout()
        .contains("Ahorro económico total: 594.54 [$/año]")
        .stdout()
        .contains("Multiplicador de refrigeración: 0.524")
        .unwrap();
}

#[test]
fn hotel_input_file_default_occupancy() {
    assert_cli::Assert::main_binary()
        .with_args(&["-w", WEATHER, "-c", COEFFICIENTS, "-i", "test_data/input_hotel_default.json"])
        .stdout()
        .contains("Horas de funcionamiento / ocupación: 66")
        .stdout()
        .contains("Ahorro económico total: 594.54 [$/año]")
        .unwrap();
}

#[test]
fn hotel_default_occupancy() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-w",
            WEATHER,
            "-c",
            COEFFICIENTS,
            "-b",
            "Hotel",
            "--state",
            "Florida",
            "--city",
            "Miami",
            "--hvac",
            "PTAC",
        ])
        .stdout()
        .contains("Horas de funcionamiento / ocupación: 66")
        .unwrap();
}

#[test]
fn list_locations() {
    assert_cli::Assert::main_binary()
        .with_args(&["-w", WEATHER, "--list-locations"])
        .stdout()
        .contains("Alaska: Anchorage, Fairbanks")
        .stdout()
        .contains("New York: Buffalo, New York City")
        .unwrap();
}

#[test]
fn warnings_are_shown() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-w",
            WEATHER,
            "-c",
            COEFFICIENTS,
            "--state",
            "New York",
            "--city",
            "New York City",
            "--electric-rate",
            "1.5",
        ])
        .stdout()
        .contains("AVISO: Dato de entrada fuera del rango habitual -> Electric rate 1.5 $/kWh outside [0.01, 1]")
        .unwrap();
}

#[test]
fn unknown_location_fails() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-w",
            WEATHER,
            "-c",
            COEFFICIENTS,
            "--state",
            "Nevada",
            "--city",
            "Reno",
        ])
        .fails_with(65)
        .stderr()
        .contains("Location not found in weather data: Reno, Nevada")
        .unwrap();
}

#[test]
fn missing_location_is_usage_error() {
    assert_cli::Assert::main_binary()
        .with_args(&["-w", WEATHER, "-c", COEFFICIENTS])
        .fails_with(64)
        .unwrap();
}
