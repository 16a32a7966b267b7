//! 통합 해석 테스트.
use shell_tube_toolbox::analysis::{analyze, analyze_with, AnalysisOptions, DesignCase};
use shell_tube_toolbox::fluids::FluidType;
use shell_tube_toolbox::geometry::{MechanicalGeometry, ShellType, TubeMaterialProps, TubePattern};
use shell_tube_toolbox::materials::MaterialEnvironment;
use shell_tube_toolbox::process::{
    FlowArrangement, FluidSide, ProcessConditions, ProcessStream, ShellSideMethod,
};

fn water_stream(flow: f64, t_in: f64, t_out: f64) -> ProcessStream {
    ProcessStream {
        fluid: FluidType::Water,
        mass_flow_kg_s: flow,
        inlet_temp_c: t_in,
        outlet_temp_c: t_out,
        pressure_pa: 500_000.0,
        phase: None,
        allowable_dp_pa: None,
        fouling_m2k_w: 0.000_176,
        properties: None,
    }
}

fn water_cooler() -> DesignCase {
    DesignCase {
        name: Some("냉각수 냉각기".into()),
        process: ProcessConditions {
            hot: water_stream(20.0, 90.0, 60.0),
            cold: water_stream(30.0, 25.0, 45.0),
            hot_side: FluidSide::Shell,
            arrangement: FlowArrangement::ShellTube12,
            shell_method: ShellSideMethod::BellDelaware,
        },
        geometry: MechanicalGeometry {
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
        },
        two_phase: None,
        material: None,
        damping_ratio: None,
    }
}

#[test]
fn water_cooler_full_analysis() {
    let report = analyze(&water_cooler());
    assert!(report.thermal.is_valid, "{:?}", report.errors);
    let vibration = report.vibration.as_ref().expect("vibration result");
    assert!(vibration.is_valid);
    assert!(vibration.natural_frequency_hz > 0.0);
    assert!(report.is_valid);
    assert_eq!(report.name.as_deref(), Some("냉각수 냉각기"));
    assert!(report.two_phase.is_none());
    assert!(report.material.is_none());
}

#[test]
fn messages_are_tagged() {
    let mut case = water_cooler();
    case.process.cold.allowable_dp_pa = Some(1.0);
    let report = analyze(&case);
    assert!(report
        .warnings
        .iter()
        .any(|w| w.starts_with("[열수력]") && w.contains("허용값")));
    assert!(report.warnings.iter().all(|w| w.starts_with('[')));
}

#[test]
fn invalid_thermal_skips_vibration() {
    let mut case = water_cooler();
    case.process.hot.inlet_temp_c = 20.0;
    let report = analyze(&case);
    assert!(!report.is_valid);
    assert!(report.vibration.is_none());
    assert!(!report.errors.is_empty());
    assert!(report.errors.iter().all(|e| e.starts_with("[열수력]")));
}

#[test]
fn material_selection_included() {
    let mut case = water_cooler();
    case.material = Some(MaterialEnvironment {
        design_temp_c: 90.0,
        min_design_temp_c: None,
        h2s_partial_pressure_kpa: 0.0,
        ph: 7.0,
        chlorides_ppm: 0.0,
        ammonia_present: false,
        hydrogen_partial_pressure_kpa: 0.0,
        design_life_years: 20.0,
        corrosion_allowance_mm: 1.5,
        mating_material: None,
    });
    let report = analyze(&case);
    let material = report.material.as_ref().expect("material result");
    assert!(material.is_valid);
    assert!(material.recommended.is_some());
    assert!(report.is_valid);
}

#[test]
fn options_follow_design_defaults() {
    let options = AnalysisOptions::default();
    assert_eq!(options.fei_safety_factor, 0.8);
    assert_eq!(options.min_speed_of_sound_m_s, 150.0);
    assert!(options.viscosity_correction);

    let strict = AnalysisOptions {
        fei_safety_factor: 1.0e-6,
        ..options
    };
    let base = analyze_with(&water_cooler(), &options);
    let tight = analyze_with(&water_cooler(), &strict);
    let (Some(b), Some(t)) = (base.vibration, tight.vibration) else {
        panic!("vibration result missing");
    };
    assert_eq!(t.critical_velocity_m_s, b.critical_velocity_m_s);
    assert!(t.is_fei_risk);
    assert!(t.is_vibration_risk);
    assert!(tight.warnings.iter().any(|w| w.starts_with("[진동]")));
}

#[test]
fn design_case_from_toml() {
    let text = r#"
name = "toml case"

[process]
arrangement = "shell_tube12"
hot_side = "shell"

[process.hot]
fluid = "water"
mass_flow_kg_s = 20.0
inlet_temp_c = 90.0
outlet_temp_c = 60.0
pressure_pa = 500000.0
fouling_m2k_w = 0.000176

[process.cold]
fluid = "water"
mass_flow_kg_s = 30.0
inlet_temp_c = 25.0
outlet_temp_c = 45.0
pressure_pa = 500000.0

[geometry]
tube_od_m = 0.01905
tube_wall_m = 0.002108
tube_length_m = 4.877
tube_pitch_m = 0.02381
pattern = "triangular30"
tube_passes = 2
shell_id_m = 0.489
baffle_cut = 0.25
baffle_spacing_m = 0.2
"#;
    let case: DesignCase = toml::from_str(text).expect("parse design case");
    assert_eq!(case.name.as_deref(), Some("toml case"));
    assert_eq!(case.process.shell_method, ShellSideMethod::BellDelaware);
    assert_eq!(case.geometry.shell_type, ShellType::FixedTubesheet);
    assert_eq!(case.process.cold.fouling_m2k_w, 0.0);
    assert!(analyze(&case).thermal.is_valid);
}
