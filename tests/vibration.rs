//! 유동 유발 진동 검토 테스트.
use shell_tube_toolbox::geometry::TubePattern;
use shell_tube_toolbox::process::ServiceType;
use shell_tube_toolbox::vibration::{
    added_mass_coefficient, analyze_vibration, natural_frequency, strouhal_number,
    vortex_shedding_risk, VibrationInput, VibrationResult, ACOUSTIC_RECOMMENDATION,
    BUFFETING_RECOMMENDATION, DEFAULT_FEI_SAFETY_FACTOR, DEFAULT_MIN_SPEED_OF_SOUND,
    FEI_RECOMMENDATION, MAX_ADDED_MASS_COEFFICIENT, VORTEX_RECOMMENDATION,
};

fn liquid_input(span_m: f64, velocity: f64) -> VibrationInput {
    VibrationInput {
        tube_od_m: 0.01905,
        tube_id_m: 0.014834,
        unsupported_span_m: span_m,
        tube_pitch_m: 0.02381,
        pattern: TubePattern::Triangular30,
        elastic_modulus_pa: 200.0e9,
        tube_density_kg_m3: 7850.0,
        shell_fluid_density_kg_m3: 975.0,
        tube_fluid_density_kg_m3: 992.0,
        crossflow_velocity_m_s: velocity,
        service: ServiceType::Liquid,
        shell_id_m: 0.489,
        speed_of_sound_m_s: None,
        damping_ratio: None,
        fei_safety_factor: DEFAULT_FEI_SAFETY_FACTOR,
        min_speed_of_sound_m_s: DEFAULT_MIN_SPEED_OF_SOUND,
    }
}

#[test]
fn vortex_lock_in_window() {
    assert!(vortex_shedding_risk(10.0, 10.0));
    assert!(!vortex_shedding_risk(10.0, 5.0));
    assert!(!vortex_shedding_risk(10.0, 13.0));
    assert!(!vortex_shedding_risk(0.0, 5.0));
}

#[test]
fn natural_frequency_scales_with_span() {
    let f1 = natural_frequency(200e9, 4.0e-9, 1.5, 0.5);
    let f2 = natural_frequency(200e9, 4.0e-9, 1.5, 1.0);
    assert!((f1 / f2 - 4.0).abs() < 1e-9);
    assert_eq!(natural_frequency(200e9, 4.0e-9, 0.0, 1.0), 0.0);
}

#[test]
fn added_mass_is_capped() {
    // 관군 등가직경이 관경 이하가 되는 비현실적 피치는 상한값
    assert_eq!(added_mass_coefficient(0.7, TubePattern::Triangular30), MAX_ADDED_MASS_COEFFICIENT);
    let mut last = f64::INFINITY;
    for ratio in [1.0, 1.25, 1.5, 2.0] {
        let cm = added_mass_coefficient(ratio, TubePattern::Square90);
        assert!(cm > 1.0 && cm <= MAX_ADDED_MASS_COEFFICIENT, "ratio={ratio} cm={cm}");
        assert!(cm < last);
        last = cm;
    }
    assert!(strouhal_number(TubePattern::Square90) < strouhal_number(TubePattern::RotatedTriangular60));
}

#[test]
fn short_span_low_velocity_is_safe() {
    let r = analyze_vibration(&liquid_input(0.2, 0.5));
    assert!(r.errors.is_empty());
    assert!(r.is_valid);
    assert!(!r.is_vibration_risk);
    assert!(r.natural_frequency_hz > 1000.0);
    assert!((r.damping_ratio - 0.03).abs() < 1e-12);
    assert!(r.velocity_ratio < 0.1);
    assert_eq!(r.acoustic_frequency_hz, 0.0);
}

#[test]
fn long_span_high_velocity_triggers_fei() {
    let r = analyze_vibration(&liquid_input(1.8, 3.0));
    assert!(r.is_fei_risk, "Vc={} V/Vc={}", r.critical_velocity_m_s, r.velocity_ratio);
    assert!(!r.is_valid);
    assert!(r.velocity_ratio > DEFAULT_FEI_SAFETY_FACTOR);
    assert!(!r.recommendations.is_empty());
    assert!(r.warnings.iter().any(|w| w.contains("스팬")));
}

#[test]
fn explicit_damping_overrides_default() {
    let mut input = liquid_input(1.8, 3.0);
    input.damping_ratio = Some(0.06);
    let base = analyze_vibration(&liquid_input(1.8, 3.0));
    let damped = analyze_vibration(&input);
    assert!((damped.damping_ratio - 0.06).abs() < 1e-12);
    assert!((damped.critical_velocity_m_s / base.critical_velocity_m_s - 2f64.sqrt()).abs() < 1e-9);
}

#[test]
fn gas_service_uses_speed_of_sound_floor() {
    let mut input = liquid_input(0.5, 10.0);
    input.service = ServiceType::Gas;
    input.shell_fluid_density_kg_m3 = 5.0;
    input.tube_fluid_density_kg_m3 = 1000.0;
    input.speed_of_sound_m_s = Some(100.0);
    let r = analyze_vibration(&input);
    assert!(r.errors.is_empty());
    assert!((r.acoustic_frequency_hz - 150.0 / (2.0 * 0.489)).abs() < 1e-9);
    assert!(r.warnings.iter().any(|w| w.contains("음속")));
    assert!((r.damping_ratio - 0.01).abs() < 1e-12);
}

#[test]
fn invalid_input_reports_errors() {
    let mut input = liquid_input(0.5, 1.0);
    input.tube_od_m = 0.0;
    let r = analyze_vibration(&input);
    assert!(!r.errors.is_empty());
    assert!(!r.is_valid);
    assert_eq!(r.natural_frequency_hz, 0.0);
}

const OD: f64 = 0.01905;
const SOUND_SPEED: f64 = 340.0;

/// 기체 서비스, 스팬 0.5 m. 유속과 쉘 폭은 호출측에서 정한다.
fn gas_input() -> VibrationInput {
    let mut input = liquid_input(0.5, 0.1);
    input.service = ServiceType::Gas;
    input.shell_fluid_density_kg_m3 = 5.0;
    input.tube_fluid_density_kg_m3 = 1000.0;
    input.speed_of_sound_m_s = Some(SOUND_SPEED);
    input
}

/// 환산유속 `reduced`와 목표 음향 주파수비 `fvs / fa`로 기체 케이스를 계산한다.
fn gas_case(reduced: f64, shedding_to_acoustic: f64) -> VibrationResult {
    let fn_hz = analyze_vibration(&gas_input()).natural_frequency_hz;
    let mut input = gas_input();
    input.crossflow_velocity_m_s = reduced * fn_hz * OD;
    let fvs = strouhal_number(input.pattern) * input.crossflow_velocity_m_s / OD;
    let fa = fvs / shedding_to_acoustic;
    input.shell_id_m = SOUND_SPEED / (2.0 * fa);
    analyze_vibration(&input)
}

fn expected_recommendations(r: &VibrationResult) -> Vec<String> {
    [
        (r.is_fei_risk, FEI_RECOMMENDATION),
        (r.is_vortex_shedding_risk, VORTEX_RECOMMENDATION),
        (r.is_acoustic_risk, ACOUSTIC_RECOMMENDATION),
        (r.is_buffeting_risk, BUFFETING_RECOMMENDATION),
    ]
    .into_iter()
    .filter(|(active, _)| *active)
    .map(|(_, text)| text.to_string())
    .collect()
}

#[test]
fn acoustic_resonance_at_fundamental() {
    // 환산유속 2: 와류 공진(fvs/fn 0.44)과 버페팅 모두 없음
    let r = gas_case(2.0, 1.0);
    assert!(r.errors.is_empty());
    assert!(r.is_acoustic_risk);
    assert!(!r.is_vortex_shedding_risk);
    assert!(!r.is_buffeting_risk);
    assert!(!r.is_fei_risk);
    assert!(r.is_vibration_risk);
    assert!(r.message.contains("음향"));
    assert_eq!(r.recommendations, vec![ACOUSTIC_RECOMMENDATION.to_string()]);
}

#[test]
fn acoustic_resonance_at_first_harmonic() {
    let r = gas_case(2.0, 2.0);
    assert!(r.is_acoustic_risk);
    assert!((r.vortex_shedding_frequency_hz / r.acoustic_frequency_hz - 2.0).abs() < 1e-6);
}

#[test]
fn acoustic_frequency_far_from_shedding_is_safe() {
    let r = gas_case(2.0, 0.1);
    assert!(!r.is_acoustic_risk);
    assert!(!r.is_vibration_risk);
    assert!(r.recommendations.is_empty());
}

#[test]
fn high_reduced_velocity_is_buffeting() {
    // 환산유속 7: fvs/fn = 1.54로 와류 공진 범위 밖
    let r = gas_case(7.0, 0.1);
    assert!(r.reduced_velocity > 3.3);
    assert!(r.is_buffeting_risk);
    assert!(!r.is_vortex_shedding_risk);
    assert!(!r.is_fei_risk);
    assert!(r.message.contains("버페팅"));
    assert_eq!(r.recommendations, vec![BUFFETING_RECOMMENDATION.to_string()]);
}

#[test]
fn every_active_risk_gets_a_recommendation() {
    // 환산유속 4.5: 와류 공진(fvs/fn 0.99)과 버페팅이 함께 발생
    let r = gas_case(4.5, 0.1);
    assert!(r.is_vortex_shedding_risk && r.is_buffeting_risk);
    assert!(!r.is_fei_risk && !r.is_acoustic_risk);
    assert!(r.message.contains("와류"));
    assert_eq!(
        r.recommendations,
        vec![VORTEX_RECOMMENDATION.to_string(), BUFFETING_RECOMMENDATION.to_string()]
    );

    // 와류 + 음향 + 버페팅
    let r = gas_case(4.5, 1.0);
    assert!(r.is_vortex_shedding_risk && r.is_acoustic_risk && r.is_buffeting_risk);
    assert_eq!(r.recommendations.len(), 3);
    assert_eq!(r.recommendations, expected_recommendations(&r));
}

#[test]
fn recommendations_follow_priority_order() {
    let fei = analyze_vibration(&liquid_input(1.8, 3.0));
    assert!(fei.is_fei_risk);
    assert_eq!(fei.recommendations[0], FEI_RECOMMENDATION);
    assert!(fei.message.contains("유체탄성"));
    for velocity in [0.5, 1.0, 2.0, 3.0, 5.0] {
        for span in [0.3, 0.8, 1.8] {
            let r = analyze_vibration(&liquid_input(span, velocity));
            assert_eq!(r.recommendations, expected_recommendations(&r), "span={span} v={velocity}");
        }
    }
}
