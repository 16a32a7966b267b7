//! 단위 변환과 설정 파일 회귀 테스트.
use shell_tube_toolbox::config::{self, Config, DisplayUnits, UnitSystem};
use shell_tube_toolbox::conversion::{convert_by_name, ConversionError};
use shell_tube_toolbox::units::*;

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual} (tol {tol})"
    );
}

#[test]
fn temperature_round_trip_all_units() {
    let units = [
        TemperatureUnit::Kelvin,
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Rankine,
    ];
    for &u in &units {
        for &t in &[-40.0, 0.0, 25.0, 100.0, 350.0] {
            let k = to_kelvin(t, u);
            assert_close(from_kelvin(k, u), t, 1e-9);
        }
    }
}

#[test]
fn temperature_reference_points() {
    assert_close(convert_temperature(100.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit), 212.0, 1e-9);
    assert_close(convert_temperature(-40.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius), -40.0, 1e-9);
    assert_close(convert_temperature(0.0, TemperatureUnit::Celsius, TemperatureUnit::Rankine), 491.67, 1e-9);
}

#[test]
fn temperature_difference_scales_only() {
    let df = convert_temperature_diff(10.0, TemperatureDiffUnit::Kelvin, TemperatureDiffUnit::Fahrenheit);
    assert_close(df, 18.0, 1e-9);
    let dc = convert_temperature_diff(18.0, TemperatureDiffUnit::Rankine, TemperatureDiffUnit::Celsius);
    assert_close(dc, 10.0, 1e-9);
}

#[test]
fn temperature_difference_symbols() {
    assert_eq!(TemperatureDiffUnit::Kelvin.symbol(), "K");
    assert_eq!(TemperatureDiffUnit::Celsius.symbol(), "°C");
    assert_eq!(TemperatureDiffUnit::Fahrenheit.symbol(), "°F");
    assert_eq!(TemperatureDiffUnit::Rankine.symbol(), "°R");
}

#[test]
fn pressure_conversions() {
    assert_close(convert_pressure(1.0, PressureUnit::Atm, PressureUnit::Bar), 1.01325, 1e-9);
    assert_close(convert_pressure(760.0, PressureUnit::MmHg, PressureUnit::Atm), 1.0, 1e-9);
    assert_close(convert_pressure(1.0, PressureUnit::Psi, PressureUnit::KiloPascal), 6.894757, 1e-6);
}

#[test]
fn mixed_unit_conversions() {
    assert_close(convert_length(1.0, LengthUnit::Inch, LengthUnit::Millimeter), 25.4, 1e-9);
    assert_close(convert_area(1.0, AreaUnit::SquareFoot, AreaUnit::SquareMeter), 0.09290304, 1e-12);
    assert_close(convert_mass_flow(3600.0, MassFlowUnit::KgPerHour, MassFlowUnit::KgPerSecond), 1.0, 1e-12);
    assert_close(convert_viscosity(1.0, ViscosityUnit::Centipoise, ViscosityUnit::PascalSecond), 1e-3, 1e-12);
    assert_close(convert_power(1.0, PowerUnit::Megawatt, PowerUnit::Kilowatt), 1000.0, 1e-9);
    assert_close(convert_density(1.0, DensityUnit::GramPerCubicCentimeter, DensityUnit::KgPerCubicMeter), 1000.0, 1e-9);
}

#[test]
fn convert_by_name_parses_unit_strings() {
    let bar = convert_by_name("pressure", 101.325, "kPa", "bar").unwrap();
    assert_close(bar, 1.01325, 1e-9);
    let f = convert_by_name("temp", 0.0, "C", "F").unwrap();
    assert_close(f, 32.0, 1e-9);
}

#[test]
fn convert_by_name_reports_unknown_names() {
    assert!(matches!(
        convert_by_name("pressure", 1.0, "furlong", "bar"),
        Err(ConversionError::UnknownUnit(_))
    ));
    assert!(matches!(
        convert_by_name("luminance", 1.0, "cd", "nit"),
        Err(ConversionError::UnknownQuantity(_))
    ));
}

#[test]
fn config_toml_round_trip() {
    let mut cfg = Config::default();
    cfg.apply_unit_system(UnitSystem::Imperial);
    cfg.design.design_margin_pct = 20.0;
    let text = toml::to_string_pretty(&cfg).unwrap();
    let parsed = config::parse(&text).unwrap();
    assert_eq!(parsed, cfg);
    assert_eq!(parsed.display_units, DisplayUnits::for_system(UnitSystem::Imperial));
}

#[test]
fn config_missing_design_section_uses_defaults() {
    let mut cfg = Config::default();
    let text = toml::to_string_pretty(&cfg).unwrap();
    let without_design: String = text
        .split("[design]")
        .next()
        .unwrap()
        .to_string();
    let parsed = config::parse(&without_design).unwrap();
    cfg.design = Default::default();
    assert_eq!(parsed, cfg);
    assert_close(parsed.design.fei_safety_factor, 0.8, 1e-12);
}
