//! 유체 물성 라이브러리 테스트.
use shell_tube_toolbox::fluids::{
    properties_at, properties_at_pressure, speed_of_sound, water, FluidPhase, FluidType,
};

#[test]
fn water_properties_near_reference() {
    let v = properties_at(FluidType::Water, 20.0);
    assert!(!v.clamped);
    assert!(v.warning.is_none());
    assert!((v.properties.density - 998.2).abs() < 1e-9);
    // 20°C 물 점도 약 1.0 cP
    assert!((v.properties.viscosity - 1.0e-3).abs() < 5e-5, "mu={}", v.properties.viscosity);
    let pr = v.properties.prandtl();
    assert!(pr > 6.0 && pr < 7.5, "Pr={pr}");
}

#[test]
fn water_viscosity_falls_with_temperature() {
    let cold = properties_at(FluidType::Water, 20.0).properties;
    let hot = properties_at(FluidType::Water, 80.0).properties;
    assert!(hot.viscosity < cold.viscosity);
    assert!(hot.density < cold.density);
}

#[test]
fn out_of_range_temperature_is_clamped_with_warning() {
    let v = properties_at(FluidType::Water, 250.0);
    assert!(v.clamped);
    assert!((v.source_temp_c - 180.0).abs() < 1e-9);
    assert!(v.warning.is_some());
}

#[test]
fn gas_density_scales_with_pressure() {
    let atm = properties_at(FluidType::Air, 20.0);
    let p10 = properties_at_pressure(FluidType::Air, 20.0, 1_013_250.0);
    assert_eq!(atm.properties.phase, FluidPhase::Gas);
    assert!((p10.properties.density / atm.properties.density - 10.0).abs() < 1e-9);
    // 액체 밀도는 압력 보정 없음
    let w = properties_at_pressure(FluidType::Water, 20.0, 1_000_000.0);
    assert!((w.properties.density - 998.2).abs() < 1e-9);
}

#[test]
fn air_speed_of_sound() {
    let c = speed_of_sound(FluidType::Air, 20.0);
    assert!((c - 343.0).abs() < 2.0, "c={c}");
}

#[test]
fn water_speed_of_sound_is_liquid_like() {
    let c = speed_of_sound(FluidType::Water, 20.0);
    assert!(c > 1400.0 && c < 1550.0, "c={c}");
}

#[test]
fn unknown_name_maps_to_custom() {
    assert_eq!(FluidType::from_name("sea-water"), FluidType::SeaWater);
    assert_eq!(FluidType::from_name("unobtainium"), FluidType::Custom);
}

#[test]
fn saturation_line_at_atmospheric_pressure() {
    let p = water::saturation_pressure_pa(100.0).unwrap();
    assert!((p - 101_418.0).abs() < 50.0, "psat={p}");
    let t = water::saturation_temperature_c(101_325.0).unwrap();
    assert!((t - 99.97).abs() < 0.05, "tsat={t}");
}

#[test]
fn saturation_out_of_range() {
    assert!(water::saturation_pressure_pa(400.0).is_err());
    assert!(water::saturation_temperature_c(0.0).is_err());
}

#[test]
fn if97_liquid_density() {
    let rho = water::density_kg_m3(1.0e6, 20.0).unwrap();
    assert!((rho - 998.6).abs() < 1.0, "rho={rho}");
}
