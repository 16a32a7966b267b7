//! 쉘 자동 크기 선정 테스트.
use shell_tube_toolbox::geometry::{ShellType, TubePattern};
use shell_tube_toolbox::sizing::{
    optimize_shell, score_candidate, SizingInput, LD_ACCEPTABLE, MAX_OPTIONS,
};

fn input(area: f64, margin: f64) -> SizingInput {
    SizingInput {
        required_area_m2: area,
        design_margin_pct: margin,
        tube_od_m: 0.01905,
        tube_pitch_m: 0.02381,
        pattern: TubePattern::Triangular30,
        tube_passes: 2,
        shell_type: ShellType::FixedTubesheet,
        fixed_tube_length_m: None,
    }
}

#[test]
fn options_meet_area_and_slenderness() {
    let r = optimize_shell(&input(50.0, 15.0));
    assert!(r.is_valid, "{:?}", r.errors);
    assert!(!r.options.is_empty());
    assert!(r.options.len() <= MAX_OPTIONS);
    assert!(r.evaluated > r.options.len());
    for o in &r.options {
        assert!(o.actual_area_m2 >= 57.5 - 1e-9, "area {}", o.actual_area_m2);
        assert!(o.l_over_d >= LD_ACCEPTABLE.0 && o.l_over_d <= LD_ACCEPTABLE.1);
        assert!(o.score > 0.0);
    }
}

#[test]
fn options_sorted_by_score() {
    let r = optimize_shell(&input(50.0, 15.0));
    for pair in r.options.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    assert!(r.message.contains("최적 후보"));
}

#[test]
fn fixed_length_limits_candidates() {
    let mut i = input(50.0, 15.0);
    i.fixed_tube_length_m = Some(4.877);
    let r = optimize_shell(&i);
    assert!(r.is_valid);
    assert_eq!(r.evaluated, 22);
    assert!(r.options.iter().all(|o| o.tube_length_m == 4.877));
}

#[test]
fn oversized_duty_has_no_candidate() {
    let r = optimize_shell(&input(1.0e6, 15.0));
    assert!(!r.is_valid);
    assert!(r.options.is_empty());
    assert!(!r.errors.is_empty());
    assert!(r.message.contains("다중 쉘"));
}

#[test]
fn invalid_input_is_rejected() {
    let mut i = input(0.0, 15.0);
    i.tube_passes = 3;
    let r = optimize_shell(&i);
    assert!(!r.is_valid);
    assert_eq!(r.errors.len(), 2);
    assert_eq!(r.evaluated, 0);
}

#[test]
fn score_ideal_candidate() {
    // L/D 8, 여유 20%, 쉘 0.5 m, 길이 4.877 m
    assert_eq!(score_candidate(8.0, 20.0, 0.5, 4.877, 200, 15.0), 100.0);
    // 튜브 1000개 초과 시 정비성 감점
    assert_eq!(score_candidate(8.0, 20.0, 0.5, 4.877, 1200, 15.0), 90.0);
}

#[test]
fn score_penalties() {
    assert_eq!(score_candidate(8.0, 10.0, 0.5, 4.877, 200, 15.0), 0.0);
    assert_eq!(score_candidate(20.0, 20.0, 0.5, 4.877, 200, 15.0), 0.0);
    assert_eq!(score_candidate(8.0, 60.0, 0.5, 4.877, 200, 15.0), 0.0);
    let ideal = score_candidate(8.0, 20.0, 0.5, 4.877, 200, 15.0);
    let slender = score_candidate(12.5, 20.0, 0.5, 4.877, 200, 15.0);
    assert!(slender < ideal);
    // L/D 12.5는 최적 상한에서 허용 상한까지 절반 → 15점 감점
    assert!((ideal - slender - 15.0).abs() < 1e-9);
}
