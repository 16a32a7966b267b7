//! 재료 선정, NACE 판정, 튜브 두께 검토 테스트.
use shell_tube_toolbox::materials::{
    allowable_stress, find_material, galvanic_incompatible, nace, select_material,
    sour_service_region, tube_wall_check, MaterialEnvironment, MaterialError,
    SOUR_H2S_THRESHOLD_KPA,
};

fn environment(design_temp_c: f64) -> MaterialEnvironment {
    MaterialEnvironment {
        design_temp_c,
        min_design_temp_c: None,
        h2s_partial_pressure_kpa: 0.0,
        ph: 7.0,
        chlorides_ppm: 0.0,
        ammonia_present: false,
        hydrogen_partial_pressure_kpa: 0.0,
        design_life_years: 20.0,
        corrosion_allowance_mm: 1.5,
        mating_material: None,
    }
}

#[test]
fn sour_service_regions() {
    assert_eq!(sour_service_region(0.3, 7.0), 0);
    assert_eq!(sour_service_region(SOUR_H2S_THRESHOLD_KPA, 6.0), 1);
    assert_eq!(sour_service_region(50.0, 4.0), 2);
    assert_eq!(sour_service_region(2000.0, 3.0), 3);
}

#[test]
fn nace_actions_accumulate_by_region() {
    let r1 = nace::assess(1.0, 6.0, find_material("TP316L"));
    assert!(r1.sour_service && r1.compliant);
    assert_eq!(r1.required_actions.len(), 1);
    let r3 = nace::assess(2000.0, 3.0, find_material("C70600"));
    assert_eq!(r3.region, 3);
    assert_eq!(r3.required_actions.len(), 3);
    assert!(!r3.compliant);
    let sweet = nace::assess(0.0, 7.0, None);
    assert!(!sweet.sour_service && sweet.compliant);
}

#[test]
fn sour_service_rejects_copper_nickel() {
    let mut env = environment(100.0);
    env.h2s_partial_pressure_kpa = 1.0;
    env.ph = 6.0;
    let r = select_material(&env);
    assert!(r.is_valid);
    let cuni = r
        .candidates
        .iter()
        .find(|c| c.code == "C70600")
        .expect("C70600 candidate");
    assert_eq!(cuni.score, 0.0);
    assert!(cuni.rejection.as_deref().unwrap_or("").contains("NACE"));
    let best = r.recommended.as_ref().expect("recommended");
    assert_ne!(best.code, "C70600");
    assert!(r.nace.sour_service);
    assert!(r.nace.compliant);
}

#[test]
fn clean_water_prefers_duplex() {
    let r = select_material(&environment(40.0));
    assert!(r.is_valid);
    let best = r.recommended.as_ref().unwrap();
    assert_eq!(best.code, "S32205");
    assert!(r.alternatives.len() <= 3);
    assert!(r.alternatives.iter().all(|a| a.score <= best.score && a.score > 0.0));
    assert!(r.expected_life_years >= 20.0);
    // 후보는 점수 내림차순
    assert!(r.candidates.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn high_chloride_prefers_titanium() {
    let mut env = environment(40.0);
    env.chlorides_ppm = 20_000.0;
    let r = select_material(&env);
    assert_eq!(r.recommended.as_ref().unwrap().code, "TIGR2");
}

#[test]
fn no_material_above_all_temperature_limits() {
    let r = select_material(&environment(700.0));
    assert!(!r.is_valid);
    assert!(r.recommended.is_none());
    assert!(r.message.contains("재료 전문가"));
    assert!(!r.errors.is_empty());
}

#[test]
fn galvanic_pair_is_flagged() {
    let mut env = environment(40.0);
    env.mating_material = Some("SA179".into());
    let r = select_material(&env);
    assert!(r.galvanic_risk);
    assert!(!r.warnings.is_empty());

    let ss = find_material("TP316L").unwrap();
    let duplex = find_material("S32205").unwrap();
    let cs = find_material("sa179").unwrap();
    assert!(!galvanic_incompatible(ss, duplex));
    assert!(galvanic_incompatible(ss, cs));
}

#[test]
fn allowable_stress_interpolates_and_clamps() {
    let mid = allowable_stress("SA179", 357.0).unwrap();
    assert!(!mid.clamped);
    assert!((mid.value_mpa - (92.4 + 89.0) / 2.0).abs() < 1e-9);
    let hot = allowable_stress("SA179", 500.0).unwrap();
    assert!(hot.clamped);
    assert_eq!(hot.value_mpa, 70.0);
    assert!(allowable_stress("XYZ", 100.0).is_none());
}

#[test]
fn tube_wall_check_for_typical_tube() {
    let check = tube_wall_check("SA179", 100.0, 2.0e6, 0.01905, 0.002108, 1.0).unwrap();
    let expected = 2.0e6 * 0.009525 / (92.4e6 + 0.4 * 2.0e6);
    assert!((check.required_thickness_m - expected).abs() < 1e-12);
    assert!(check.is_adequate);
    assert!(check.margin_pct > 100.0);
}

#[test]
fn tube_wall_check_errors() {
    assert!(matches!(
        tube_wall_check("XYZ", 100.0, 1.0e6, 0.019, 0.002, 1.0),
        Err(MaterialError::UnknownMaterial(_))
    ));
    assert!(matches!(
        tube_wall_check("SA179", 100.0, 1.0e6, 0.0, 0.002, 1.0),
        Err(MaterialError::InvalidInput(_))
    ));
}

#[test]
fn tube_props_convert_modulus() {
    let props = find_material("SA179").unwrap().tube_props();
    assert_eq!(props.elastic_modulus_pa, 203.0e9);
    assert_eq!(props.density_kg_m3, 7850.0);
}
