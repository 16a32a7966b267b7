//! 열-수력 상관식과 통합 열설계 테스트.
use shell_tube_toolbox::fluids::{properties_at, FluidType};
use shell_tube_toolbox::geometry::{
    MechanicalGeometry, ShellType, TubeCountMethod, TubeMaterialProps, TubePattern,
};
use shell_tube_toolbox::process::{
    FlowArrangement, FluidSide, ProcessConditions, ProcessStream, ShellSideMethod,
};
use shell_tube_toolbox::thermal::{
    analyze_thermal, bell_delaware, classify_regime, correction_factor, kern, lmtd, log_mean, ntu,
    overall_u, pressure_drop, tube_nusselt, tube_side_htc, FlowRegime, OverallInput,
    ShellSideInput, ThermalOptions, TubeSideInput,
};
use shell_tube_toolbox::thermal::tube_side::{
    TubeCorrelation, LAMINAR_NUSSELT, LAMINAR_RE_LIMIT, TURBULENT_CORRELATION_RE,
};

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual} (tol {tol})"
    );
}

fn water_stream(flow: f64, t_in: f64, t_out: f64, fouling: f64) -> ProcessStream {
    ProcessStream {
        fluid: FluidType::Water,
        mass_flow_kg_s: flow,
        inlet_temp_c: t_in,
        outlet_temp_c: t_out,
        pressure_pa: 500_000.0,
        phase: None,
        allowable_dp_pa: None,
        fouling_m2k_w: fouling,
        properties: None,
    }
}

fn water_case() -> ProcessConditions {
    ProcessConditions {
        hot: water_stream(20.0, 90.0, 60.0, 0.000_176),
        cold: water_stream(30.0, 25.0, 45.0, 0.000_176),
        hot_side: FluidSide::Shell,
        arrangement: FlowArrangement::ShellTube12,
        shell_method: ShellSideMethod::BellDelaware,
    }
}

fn geometry() -> MechanicalGeometry {
    MechanicalGeometry {
        tube_od_m: 0.01905,
        tube_wall_m: 0.002108,
        tube_length_m: 4.877,
        tube_pitch_m: 0.02381,
        pattern: TubePattern::Triangular30,
        tube_passes: 2,
        shell_id_m: 0.489,
        shell_type: ShellType::FixedTubesheet,
        baffle_cut: 0.25,
        baffle_spacing_m: 0.2,
        inlet_baffle_spacing_m: None,
        outlet_baffle_spacing_m: None,
        tube_count: None,
        tube_material: TubeMaterialProps::default(),
        tube_baffle_clearance_m: None,
        shell_baffle_clearance_m: None,
        sealing_strip_pairs: 0,
    }
}

#[test]
fn regime_boundaries() {
    assert_eq!(classify_regime(2299.0), FlowRegime::Laminar);
    assert_eq!(classify_regime(2301.0), FlowRegime::Transitional);
    assert_eq!(classify_regime(4001.0), FlowRegime::Turbulent);
}

#[test]
fn nusselt_continuous_at_laminar_boundary() {
    let (below, c_below) = tube_nusselt(LAMINAR_RE_LIMIT - 1e-6, 5.0, true);
    let (at, c_at) = tube_nusselt(LAMINAR_RE_LIMIT, 5.0, true);
    assert_eq!(c_below, TubeCorrelation::LaminarConstantWall);
    assert_eq!(c_at, TubeCorrelation::Gnielinski);
    assert_close(below, LAMINAR_NUSSELT, 1e-12);
    assert_close(at, below, 1e-3);
}

#[test]
fn nusselt_continuous_at_turbulent_boundary() {
    for &pr in &[0.7, 5.0, 50.0] {
        let (below, _) = tube_nusselt(TURBULENT_CORRELATION_RE - 1e-6, pr, false);
        let (at, corr) = tube_nusselt(TURBULENT_CORRELATION_RE, pr, false);
        assert_eq!(corr, TubeCorrelation::DittusBoelter);
        assert!((at - below).abs() / at < 1e-6, "Pr={pr}: {below} vs {at}");
    }
}

#[test]
fn nusselt_increases_through_transition() {
    let mut last = 0.0;
    for re in [2500.0, 4000.0, 6000.0, 8000.0, 9900.0, 20_000.0] {
        let (nu, _) = tube_nusselt(re, 4.0, true);
        assert!(nu > last, "Re={re} Nu={nu}");
        last = nu;
    }
}

#[test]
fn dittus_boelter_reference_value() {
    let htc = tube_side_htc(&TubeSideInput {
        reynolds: 50_000.0,
        prandtl: 5.0,
        conductivity_w_mk: 0.6,
        inner_diameter_m: 0.02,
        heating: true,
        viscosity_ratio: None,
    });
    let expected_nu = 0.023 * 50_000f64.powf(0.8) * 5f64.powf(0.4);
    assert_close(htc.nusselt, expected_nu, 1e-9);
    assert_close(htc.htc_w_m2k, expected_nu * 0.6 / 0.02, 1e-6);
    assert_eq!(htc.regime, FlowRegime::Turbulent);
}

#[test]
fn sieder_tate_correction_only_for_turbulent() {
    let base = TubeSideInput {
        reynolds: 50_000.0,
        prandtl: 5.0,
        conductivity_w_mk: 0.6,
        inner_diameter_m: 0.02,
        heating: true,
        viscosity_ratio: Some(2.0),
    };
    let plain = tube_side_htc(&TubeSideInput { viscosity_ratio: None, ..base });
    let corrected = tube_side_htc(&base);
    assert_close(corrected.nusselt / plain.nusselt, 2f64.powf(0.14), 1e-9);

    let laminar = tube_side_htc(&TubeSideInput { reynolds: 1000.0, ..base });
    assert_close(laminar.nusselt, LAMINAR_NUSSELT, 1e-12);
}

#[test]
fn lmtd_counter_and_parallel() {
    let counter = lmtd::lmtd(150.0, 90.0, 30.0, 70.0, FlowArrangement::CounterFlow).unwrap();
    let expected = (80.0 - 60.0) / (80.0f64 / 60.0).ln();
    assert_close(counter, expected, 1e-9);
    let parallel = lmtd::lmtd(150.0, 90.0, 30.0, 70.0, FlowArrangement::ParallelFlow).unwrap();
    assert!(parallel < counter);
    assert_close(log_mean(20.0, 20.0).unwrap(), 20.0, 1e-12);
    assert!(lmtd::lmtd(60.0, 30.0, 25.0, 70.0, FlowArrangement::CounterFlow).is_none());
}

#[test]
fn correction_factor_is_one_for_pure_flows() {
    for arrangement in [FlowArrangement::CounterFlow, FlowArrangement::ParallelFlow] {
        let cf = correction_factor(arrangement, 150.0, 90.0, 30.0, 70.0);
        assert_eq!(cf.factor, 1.0);
        assert!(cf.warnings.is_empty());
    }
}

#[test]
fn correction_factor_bounded_for_shell_and_cross() {
    let cases = [
        (150.0, 90.0, 30.0, 70.0),
        (90.0, 60.0, 25.0, 45.0),
        (200.0, 80.0, 20.0, 150.0),
        (100.0, 40.0, 30.0, 95.0),
    ];
    for arrangement in [
        FlowArrangement::ShellTube12,
        FlowArrangement::ShellTube14,
        FlowArrangement::CrossFlow,
    ] {
        for &(thi, tho, tci, tco) in &cases {
            let cf = correction_factor(arrangement, thi, tho, tci, tco);
            assert!(
                (0.5..=1.0).contains(&cf.factor),
                "{arrangement:?} F={}",
                cf.factor
            );
        }
    }
}

#[test]
fn shell_tube_f_reference_point() {
    // P = 0.333, R = 1.5 → F ≈ 0.91 (TEMA 도표)
    let cf = correction_factor(FlowArrangement::ShellTube12, 150.0, 90.0, 30.0, 70.0);
    assert_close(cf.p, 40.0 / 120.0, 1e-12);
    assert_close(cf.r, 1.5, 1e-12);
    assert!(cf.factor > 0.85 && cf.factor < 0.95, "F={}", cf.factor);
}

#[test]
fn temperature_cross_falls_back_with_warning() {
    let cf = correction_factor(FlowArrangement::ShellTube12, 100.0, 40.0, 30.0, 95.0);
    assert!(!cf.warnings.is_empty());
    assert!(cf.factor >= 0.5);
}

#[test]
fn effectiveness_bounded_for_all_arrangements() {
    let arrangements = [
        FlowArrangement::CounterFlow,
        FlowArrangement::ParallelFlow,
        FlowArrangement::ShellTube12,
        FlowArrangement::ShellTube14,
        FlowArrangement::CrossFlow,
    ];
    for arrangement in arrangements {
        for &n in &[0.0, 0.1, 1.0, 3.0, 10.0, 50.0] {
            for &cr in &[0.0, 0.25, 0.5, 1.0] {
                let e = ntu::effectiveness(n, cr, arrangement);
                assert!((0.0..=1.0).contains(&e), "{arrangement:?} NTU={n} Cr={cr} e={e}");
            }
        }
    }
}

#[test]
fn counter_flow_effectiveness_approaches_one() {
    let e = ntu::effectiveness(50.0, 0.5, FlowArrangement::CounterFlow);
    assert!(e > 0.999_999);
    let balanced = ntu::effectiveness(4.0, 1.0, FlowArrangement::CounterFlow);
    assert_close(balanced, 0.8, 1e-12);
    let parallel = ntu::effectiveness(50.0, 1.0, FlowArrangement::ParallelFlow);
    assert_close(parallel, 0.5, 1e-9);
}

#[test]
fn capacity_rates_and_ntu() {
    let (c_min, c_max, cr) = ntu::capacity_rates(8000.0, 4000.0);
    assert_eq!((c_min, c_max), (4000.0, 8000.0));
    assert_close(cr, 0.5, 1e-12);
    assert_close(ntu::ntu(500.0, 16.0, c_min), 2.0, 1e-12);
    assert_close(ntu::duty_from_effectiveness(0.5, 4000.0, 100.0, 20.0), 160_000.0, 1e-6);
}

#[test]
fn overall_u_series_resistance() {
    let input = OverallInput {
        tube_htc_w_m2k: 5000.0,
        shell_htc_w_m2k: 2000.0,
        tube_id_m: 0.015,
        tube_od_m: 0.019,
        wall_conductivity_w_mk: 50.0,
        tube_fouling_m2k_w: 0.0002,
        shell_fouling_m2k_w: 0.0003,
    };
    let u = overall_u(&input);
    assert!(u.errors.is_empty());
    let wall = 0.019 * (0.019f64 / 0.015).ln() / 100.0;
    let clean = 0.019 / (5000.0 * 0.015) + wall + 1.0 / 2000.0;
    assert_close(u.clean_u_w_m2k, 1.0 / clean, 1e-9);
    assert_close(u.fouled_u_w_m2k, 1.0 / (clean + 0.0003 + 0.0002 * 0.019 / 0.015), 1e-9);
    assert!(u.fouled_u_w_m2k < u.clean_u_w_m2k);
}

#[test]
fn overall_u_rejects_non_positive_inputs() {
    let u = overall_u(&OverallInput {
        tube_htc_w_m2k: 0.0,
        shell_htc_w_m2k: 2000.0,
        tube_id_m: 0.015,
        tube_od_m: 0.019,
        wall_conductivity_w_mk: 50.0,
        tube_fouling_m2k_w: 0.0,
        shell_fouling_m2k_w: 0.0,
    });
    assert_eq!(u.clean_u_w_m2k, 0.0);
    assert_eq!(u.fouled_u_w_m2k, 0.0);
    assert_eq!(u.errors.len(), 1);
}

#[test]
fn tube_pressure_drop_components() {
    let dp = pressure_drop::tube_side_pressure_drop(30_000.0, 1.5, 1000.0, 0.015, 5.0, 2);
    let f = 0.079 * 30_000f64.powf(-0.25);
    assert_close(dp.friction_factor, f, 1e-12);
    assert_close(dp.return_pa, 4.0 * 2.0 * 1125.0, 1e-9);
    assert_close(dp.total_pa, dp.straight_pa + dp.return_pa, 1e-9);
    assert_close(pressure_drop::fanning_friction(1000.0), 0.016, 1e-12);
}

#[test]
fn bell_delaware_factors_in_expected_range() {
    let g = geometry();
    let props = properties_at(FluidType::Water, 75.0).properties;
    let r = bell_delaware(&ShellSideInput {
        geometry: &g,
        tube_count: 244,
        bundle_diameter_m: 0.477,
        mass_flow_kg_s: 20.0,
        properties: &props,
    });
    assert!(r.errors.is_empty());
    let f = r.factors.expect("Bell-Delaware factors");
    for (name, j) in [("jc", f.jc), ("jl", f.jl), ("jb", f.jb), ("jr", f.jr)] {
        assert!(j > 0.3 && j <= 1.2, "{name}={j}");
    }
    // 입출구 간격이 중앙 간격과 같으면 Js = Rs = 1
    assert_close(f.js, 1.0, 1e-9);
    assert_close(f.rs, 1.0, 1e-9);
    assert!(r.htc_w_m2k > 0.0 && r.htc_w_m2k < f.h_ideal_w_m2k * 1.2);
    assert!(r.pressure_drop_pa > 0.0);
    assert!(r.reynolds > 1000.0);
}

#[test]
fn kern_gives_positive_results() {
    let g = geometry();
    let props = properties_at(FluidType::Water, 75.0).properties;
    let r = kern(&ShellSideInput {
        geometry: &g,
        tube_count: 244,
        bundle_diameter_m: 0.477,
        mass_flow_kg_s: 20.0,
        properties: &props,
    });
    assert!(r.errors.is_empty());
    assert!(r.factors.is_none());
    assert!(r.htc_w_m2k > 500.0);
    assert!(r.pressure_drop_pa > 0.0);
}

#[test]
fn deep_baffle_cut_floors_crossflow_rows() {
    let mut g = geometry();
    g.baffle_cut = 0.49;
    let props = properties_at(FluidType::Water, 75.0).properties;
    let r = bell_delaware(&ShellSideInput {
        geometry: &g,
        tube_count: 244,
        bundle_diameter_m: 0.477,
        mass_flow_kg_s: 20.0,
        properties: &props,
    });
    assert!(r.errors.is_empty());
    let f = r.factors.expect("Bell-Delaware factors");
    assert_eq!(f.crossflow_rows, 1.0);
    assert!(r.warnings.iter().any(|w| w.contains("관열 수")));
    assert!(r.pressure_drop_pa.is_finite() && r.pressure_drop_pa > 0.0);
}

#[test]
fn kern_warns_outside_reynolds_range() {
    let g = geometry();
    let props = properties_at(FluidType::Water, 75.0).properties;
    let r = kern(&ShellSideInput {
        geometry: &g,
        tube_count: 244,
        bundle_diameter_m: 0.477,
        mass_flow_kg_s: 0.2,
        properties: &props,
    });
    assert!(r.errors.is_empty());
    assert!(r.reynolds < 2_000.0, "Re = {}", r.reynolds);
    assert!(r.warnings.iter().any(|w| w.contains("Kern")));
}

#[test]
fn shell_side_rejects_zero_flow() {
    let g = geometry();
    let props = properties_at(FluidType::Water, 75.0).properties;
    let r = bell_delaware(&ShellSideInput {
        geometry: &g,
        tube_count: 244,
        bundle_diameter_m: 0.477,
        mass_flow_kg_s: 0.0,
        properties: &props,
    });
    assert!(!r.errors.is_empty());
    assert_eq!(r.htc_w_m2k, 0.0);
}

#[test]
fn water_cooler_analysis() {
    let r = analyze_thermal(&water_case(), &geometry(), &ThermalOptions::default());
    assert!(r.is_valid, "errors: {:?}", r.errors);
    assert!(r.errors.is_empty());
    assert_eq!(r.tube_count, 244);
    assert_eq!(r.tube_count_method, Some(TubeCountMethod::TemaTable));
    assert_eq!(r.tube_regime, FlowRegime::Turbulent);
    assert!(r.heat_duty_w > 2.0e6 && r.heat_duty_w < 3.0e6, "Q={}", r.heat_duty_w);
    assert!((0.5..=1.0).contains(&r.correction_factor));
    assert_close(r.effective_mtd_k, r.correction_factor * r.lmtd_k, 1e-9);
    assert!(r.fouled_u_w_m2k < r.clean_u_w_m2k);
    assert!(r.required_area_m2 > 0.0);
    assert_close(
        r.actual_area_m2,
        std::f64::consts::PI * 0.01905 * 4.877 * 244.0,
        1e-9,
    );
    assert!((0.0..=1.0).contains(&r.effectiveness));
    assert!(r.tube_velocity_m_s > 0.9 && r.tube_velocity_m_s < 3.0);
    assert!(r.tube_pressure_drop_pa > 0.0);
    assert!(r.shell_pressure_drop_pa > 0.0);
    assert!(r.bell_delaware.is_some());
}

#[test]
fn kern_method_selectable() {
    let mut case = water_case();
    case.shell_method = ShellSideMethod::Kern;
    let r = analyze_thermal(&case, &geometry(), &ThermalOptions::default());
    assert!(r.is_valid, "errors: {:?}", r.errors);
    assert_eq!(r.shell_method, ShellSideMethod::Kern);
    assert!(r.bell_delaware.is_none());
}

#[test]
fn user_tube_count_is_respected() {
    let mut g = geometry();
    g.tube_count = Some(200);
    let r = analyze_thermal(&water_case(), &g, &ThermalOptions::default());
    assert!(r.is_valid);
    assert_eq!(r.tube_count, 200);
    assert_eq!(r.tube_count_method, Some(TubeCountMethod::UserSpecified));
}

#[test]
fn invalid_temperatures_are_rejected() {
    let mut case = water_case();
    case.hot.inlet_temp_c = 20.0;
    let r = analyze_thermal(&case, &geometry(), &ThermalOptions::default());
    assert!(!r.is_valid);
    assert!(!r.errors.is_empty());
    assert_eq!(r.heat_duty_w, 0.0);
    assert_eq!(r.fouled_u_w_m2k, 0.0);
}

#[test]
fn invalid_geometry_is_rejected() {
    let mut g = geometry();
    g.tube_passes = 3;
    let r = analyze_thermal(&water_case(), &g, &ThermalOptions::default());
    assert!(!r.is_valid);
    assert!(r.errors.iter().any(|e| e.contains('3')));
}

#[test]
fn zero_end_baffle_spacing_is_rejected() {
    let mut g = geometry();
    g.inlet_baffle_spacing_m = Some(0.0);
    let r = analyze_thermal(&water_case(), &g, &ThermalOptions::default());
    assert!(!r.is_valid);
    assert!(r.errors.iter().any(|e| e.contains("입구 배플 간격")));
    assert_eq!(r.shell_pressure_drop_pa, 0.0);

    let mut g = geometry();
    g.outlet_baffle_spacing_m = Some(-0.1);
    let r = analyze_thermal(&water_case(), &g, &ThermalOptions::default());
    assert!(!r.is_valid);
    assert!(r.errors.iter().any(|e| e.contains("출구 배플 간격")));
}

#[test]
fn user_properties_must_be_positive() {
    let mut case = water_case();
    let mut props = properties_at(FluidType::Water, 40.0).properties;
    props.viscosity = 0.0;
    props.thermal_conductivity = 0.0;
    case.cold.properties = Some(props);
    let r = analyze_thermal(&case, &geometry(), &ThermalOptions::default());
    assert!(!r.is_valid);
    assert_eq!(r.errors.len(), 2, "{:?}", r.errors);
    assert!(r.errors.iter().all(|e| e.starts_with("저온측")));
    assert_eq!(r.fouled_u_w_m2k, 0.0);
}

#[test]
fn allowable_pressure_drop_is_checked() {
    let mut case = water_case();
    case.cold.allowable_dp_pa = Some(1.0);
    let r = analyze_thermal(&case, &geometry(), &ThermalOptions::default());
    assert!(r.is_valid);
    assert!(r.warnings.iter().any(|w| w.contains("허용값")));
}
