//! 형상 검증, 튜브 개수, 배플 간격 테스트.
use shell_tube_toolbox::geometry::{
    bundle_diameter_from_count, palen_tube_count, recommended_baffle_spacing, table_tube_count,
    tables, tube_count, GeometryError, MechanicalGeometry, ShellType, TubeCountMethod,
    TubeMaterialProps, TubePattern,
};
use shell_tube_toolbox::process::ServiceType;

fn base_geometry() -> MechanicalGeometry {
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
fn table_count_for_standard_layout() {
    // 307 mm 쉘, 19.05 mm 관, 23.81 mm 삼각 피치, 1 패스
    let n = table_tube_count(0.307, 0.01905, 0.02381, TubePattern::Triangular30, 1);
    assert_eq!(n, Some(100));
    let n2 = table_tube_count(0.307, 0.01905, 0.02381, TubePattern::Triangular30, 2);
    assert_eq!(n2, Some(90));
}

#[test]
fn tube_count_prefers_table() {
    let r = tube_count(0.307, 0.01905, 0.02381, TubePattern::Triangular30, 1, ShellType::FixedTubesheet);
    assert_eq!(r.count, 100);
    assert_eq!(r.method, TubeCountMethod::TemaTable);
    assert!(r.warnings.is_empty());
    assert!(r.bundle_diameter_m < 0.307);
}

#[test]
fn tube_count_falls_back_to_palen() {
    // 표에 없는 피치
    let r = tube_count(0.5, 0.01905, 0.028, TubePattern::Square90, 2, ShellType::FixedTubesheet);
    assert_eq!(r.method, TubeCountMethod::PalenCorrelation);
    assert!(r.count > 0);
    assert!(!r.warnings.is_empty());
}

#[test]
fn floating_head_shell_is_flagged() {
    let r = tube_count(
        0.307,
        0.01905,
        0.02381,
        TubePattern::Triangular30,
        1,
        ShellType::PullThroughFloatingHead,
    );
    assert_eq!(r.method, TubeCountMethod::TemaTable);
    assert!(!r.warnings.is_empty());
}

#[test]
fn palen_count_grows_with_bundle() {
    let small = palen_tube_count(0.3, 0.025, TubePattern::Square90, 1);
    let large = palen_tube_count(0.6, 0.025, TubePattern::Square90, 1);
    assert!(large > 3 * small);
    assert_eq!(palen_tube_count(0.0, 0.025, TubePattern::Square90, 1), 0);
}

#[test]
fn bundle_diameter_inverse_is_reasonable() {
    let db = bundle_diameter_from_count(100, 0.01905, TubePattern::Triangular30, 1);
    // 307 mm 쉘에 100개 → 번들 약 0.29 m
    assert!(db > 0.25 && db < 0.31, "db={db}");
    assert_eq!(bundle_diameter_from_count(0, 0.01905, TubePattern::Triangular30, 1), 0.0);
}

#[test]
fn baffle_spacing_by_service() {
    let liquid = recommended_baffle_spacing(0.5, 4.877, ServiceType::Liquid);
    assert!((liquid.recommended_spacing_m - 0.2).abs() < 1e-9);
    assert!((liquid.min_spacing_m - 0.1).abs() < 1e-9);
    assert!((liquid.max_spacing_m - 0.5).abs() < 1e-9);
    assert_eq!(liquid.baffle_count, 23);

    let gas = recommended_baffle_spacing(0.5, 4.877, ServiceType::Gas);
    assert!((gas.recommended_spacing_m - 0.25).abs() < 1e-9);
    assert!(gas.recommended_spacing_m > liquid.recommended_spacing_m);
}

#[test]
fn baffle_spacing_respects_minimum() {
    let r = recommended_baffle_spacing(0.15, 3.0, ServiceType::Liquid);
    assert!(r.recommended_spacing_m >= r.min_spacing_m);
    assert!(r.min_spacing_m >= 0.05);
}

#[test]
fn valid_geometry_has_no_errors() {
    let g = base_geometry();
    assert!(g.validate().is_empty());
    assert!((g.tube_id_m() - (0.01905 - 2.0 * 0.002108)).abs() < 1e-12);
    assert!(g.baffle_count() >= 20);
}

#[test]
fn validation_catches_bad_inputs() {
    let mut g = base_geometry();
    g.tube_pitch_m = 0.015;
    g.baffle_cut = 0.6;
    g.tube_passes = 3;
    let errors = g.validate();
    assert!(errors.iter().any(|e| matches!(e, GeometryError::PitchNotGreaterThanOd { .. })));
    assert!(errors.contains(&GeometryError::BaffleCutOutOfRange(0.6)));
    assert!(errors.contains(&GeometryError::InvalidPassCount(3)));
}

#[test]
fn end_baffle_spacings_must_be_positive() {
    let mut g = base_geometry();
    g.inlet_baffle_spacing_m = Some(0.0);
    g.outlet_baffle_spacing_m = Some(-0.1);
    let errors = g.validate();
    assert!(errors.contains(&GeometryError::NonPositive("입구 배플 간격")));
    assert!(errors.contains(&GeometryError::NonPositive("출구 배플 간격")));

    g.inlet_baffle_spacing_m = Some(0.3);
    g.outlet_baffle_spacing_m = None;
    assert!(g.validate().is_empty());
}

#[test]
fn long_span_triggers_advisory() {
    let mut g = base_geometry();
    g.inlet_baffle_spacing_m = Some(1.8);
    assert!((g.longest_span_m() - 1.8).abs() < 1e-12);
    let advisories = g.advisories();
    assert!(advisories.iter().any(|w| w.contains("스팬")));
}

#[test]
fn span_table_interpolates() {
    assert!((tables::max_unsupported_span_m(0.01905) - 1.524).abs() < 1e-9);
    let mid = tables::max_unsupported_span_m(0.0222);
    assert!(mid > 1.524 && mid < 1.880);
    let wall = tables::bwg_wall_m(14).unwrap();
    assert!((wall - 0.002108).abs() < 1e-12);
    assert!(tables::bwg_wall_m(13).is_none());
}
