//! 펌프 NPSH와 배관 압력손실 테스트.
use shell_tube_toolbox::auxiliary::pipe::darcy_friction;
use shell_tube_toolbox::auxiliary::{
    compute_pump, pipe_pressure_loss, pipe_size_for_velocity, PipeLossInput, PumpInput,
};
use shell_tube_toolbox::fluids::FluidType;

const G: f64 = 9.80665;

fn pump() -> PumpInput {
    PumpInput {
        fluid: FluidType::Water,
        suction_pressure_pa: 101_325.0,
        discharge_pressure_pa: 401_325.0,
        liquid_temp_c: 25.0,
        static_head_m: 2.0,
        suction_friction_loss_m: 0.5,
        npshr_m: 3.0,
        flow_m3_per_h: 36.0,
        efficiency: 0.75,
        density_kg_m3: Some(997.0),
        vapor_pressure_pa: Some(3_170.0),
    }
}

#[test]
fn npsh_available_from_pressure_head() {
    let r = compute_pump(&pump());
    assert!(r.is_valid);
    let expected = (101_325.0 - 3_170.0) / (997.0 * G) + 2.0 - 0.5;
    assert!((r.npsha_m - expected).abs() < 1e-9);
    assert!((r.margin_ratio - expected / 3.0).abs() < 1e-9);
    assert!(r.warnings.is_empty());
}

#[test]
fn pump_power() {
    let r = compute_pump(&pump());
    // 0.01 m³/s × 300 kPa
    assert!((r.hydraulic_power_w - 3_000.0).abs() < 1e-6);
    assert!((r.shaft_power_w - 4_000.0).abs() < 1e-6);
}

#[test]
fn water_vapor_pressure_from_saturation() {
    let mut i = pump();
    i.vapor_pressure_pa = None;
    i.density_kg_m3 = None;
    let r = compute_pump(&i);
    assert!(r.is_valid);
    assert!((r.vapor_pressure_pa - 3_169.9).abs() < 20.0);
    assert!((r.density_kg_m3 - 997.0).abs() < 1.0);
}

#[test]
fn low_npsh_margin_warns() {
    let mut i = pump();
    i.npshr_m = 11.0;
    let r = compute_pump(&i);
    assert!(r.is_valid);
    assert!(r.margin_ratio < 1.1);
    assert!(r.warnings.iter().any(|w| w.contains("공동현상")));
}

#[test]
fn non_water_requires_vapor_pressure() {
    let mut i = pump();
    i.fluid = FluidType::ThermalOil;
    i.vapor_pressure_pa = None;
    let r = compute_pump(&i);
    assert!(!r.is_valid);
    assert_eq!(r.errors.len(), 1);
    assert_eq!(r.shaft_power_w, 0.0);
}

#[test]
fn friction_factor_regimes() {
    assert!((darcy_friction(1000.0, 0.0) - 0.064).abs() < 1e-12);
    let smooth = darcy_friction(1.0e5, 0.0);
    assert!(smooth > 0.017 && smooth < 0.0185, "f = {smooth}");
    assert!(darcy_friction(1.0e5, 0.001) > smooth);
    assert_eq!(darcy_friction(0.0, 0.0), 0.0);
}

#[test]
fn pipe_loss_darcy_weisbach() {
    let input = PipeLossInput {
        mass_flow_kg_s: 10.0,
        density_kg_m3: 1000.0,
        viscosity_pa_s: 0.001,
        diameter_m: 0.1,
        length_m: 100.0,
        roughness_m: 4.5e-5,
        fittings_k: 2.0,
    };
    let r = pipe_pressure_loss(&input);
    assert!(r.errors.is_empty());
    let area = std::f64::consts::PI * 0.01 / 4.0;
    assert!((r.velocity_m_s - 10.0 / (1000.0 * area)).abs() < 1e-9);
    assert!((r.reynolds - 1000.0 * r.velocity_m_s * 0.1 / 0.001).abs() < 1e-6);
    let dynamic = 1000.0 * r.velocity_m_s.powi(2) / 2.0;
    let expected = (r.friction_factor * 1000.0 + 2.0) * dynamic;
    assert!((r.pressure_drop_pa - expected).abs() < 1e-6);
    assert!(r.friction_factor > 0.015 && r.friction_factor < 0.025);
}

#[test]
fn pipe_loss_rejects_zero_diameter() {
    let input = PipeLossInput {
        mass_flow_kg_s: 1.0,
        density_kg_m3: 1000.0,
        viscosity_pa_s: 0.001,
        diameter_m: 0.0,
        length_m: 10.0,
        roughness_m: 4.5e-5,
        fittings_k: 0.0,
    };
    let r = pipe_pressure_loss(&input);
    assert_eq!(r.errors.len(), 1);
    assert_eq!(r.pressure_drop_pa, 0.0);
}

#[test]
fn pipe_size_for_target_velocity() {
    let d = pipe_size_for_velocity(10.0, 1000.0, 2.0);
    assert!((d - (0.02 / std::f64::consts::PI).sqrt()).abs() < 1e-12);
    assert_eq!(pipe_size_for_velocity(10.0, 0.0, 2.0), 0.0);
}
