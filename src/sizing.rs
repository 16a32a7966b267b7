//! 쉘 자동 크기 선정.
//!
//! 표준 튜브 길이 × 표준 쉘 내경 조합을 모두 평가해 점수순 상위 5개를 돌려준다.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::geometry::tables::{STANDARD_SHELL_ID_MM, STANDARD_TUBE_LENGTH_M};
use crate::geometry::{self, ShellType, TubeCountMethod, TubePattern};

/// 반환할 최대 후보 수
pub const MAX_OPTIONS: usize = 5;

/// L/D 최적 범위와 허용 범위
pub const LD_OPTIMAL: (f64, f64) = (6.0, 10.0);
pub const LD_ACCEPTABLE: (f64, f64) = (3.0, 15.0);
/// 면적 여유 최적 범위와 허용 범위 [%]
pub const MARGIN_OPTIMAL: (f64, f64) = (15.0, 25.0);
pub const MARGIN_ACCEPTABLE: (f64, f64) = (5.0, 50.0);

const LD_MAX_DEDUCTION: f64 = 30.0;
const MARGIN_MAX_DEDUCTION: f64 = 40.0;
const SHELL_COST_WEIGHT: f64 = 20.0;
const PRACTICAL_LENGTH_M: (f64, f64) = (3.0, 6.0);
const PRACTICAL_LENGTH_BONUS: f64 = 5.0;
const MAINTENANCE_TUBE_COUNT: u32 = 1_000;
const MAINTENANCE_PENALTY: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingInput {
    /// 소요 전열면적 [m²]
    pub required_area_m2: f64,
    /// 설계 여유 [%]
    pub design_margin_pct: f64,
    pub tube_od_m: f64,
    pub tube_pitch_m: f64,
    pub pattern: TubePattern,
    pub tube_passes: u32,
    #[serde(default)]
    pub shell_type: ShellType,
    /// 고정 튜브 길이. 없으면 표준 길이를 모두 평가한다.
    #[serde(default)]
    pub fixed_tube_length_m: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizingOption {
    pub shell_id_m: f64,
    pub tube_length_m: f64,
    pub tube_count: u32,
    pub count_method: TubeCountMethod,
    pub actual_area_m2: f64,
    pub area_margin_pct: f64,
    pub l_over_d: f64,
    pub score: f64,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SizingResult {
    /// 점수 내림차순
    pub options: Vec<SizingOption>,
    /// 평가한 조합 수
    pub evaluated: usize,
    pub message: String,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub is_valid: bool,
}

/// 최적 범위 밖 거리에 비례해 감점한다. 허용 범위 밖이면 `None`.
fn band_deduction(value: f64, optimal: (f64, f64), acceptable: (f64, f64), max: f64) -> Option<f64> {
    if value < acceptable.0 || value > acceptable.1 {
        None
    } else if value < optimal.0 {
        Some(max * (optimal.0 - value) / (optimal.0 - acceptable.0))
    } else if value > optimal.1 {
        Some(max * (value - optimal.1) / (acceptable.1 - optimal.1))
    } else {
        Some(0.0)
    }
}

/// 후보 하나의 종합 점수. 0이면 제외 대상이다.
pub fn score_candidate(
    l_over_d: f64,
    area_margin_pct: f64,
    shell_id_m: f64,
    tube_length_m: f64,
    tube_count: u32,
    min_margin_pct: f64,
) -> f64 {
    if area_margin_pct < min_margin_pct {
        return 0.0;
    }
    let Some(ld_penalty) = band_deduction(l_over_d, LD_OPTIMAL, LD_ACCEPTABLE, LD_MAX_DEDUCTION)
    else {
        return 0.0;
    };
    let Some(margin_penalty) = band_deduction(
        area_margin_pct,
        MARGIN_OPTIMAL,
        MARGIN_ACCEPTABLE,
        MARGIN_MAX_DEDUCTION,
    ) else {
        return 0.0;
    };

    let mut score = 100.0 - ld_penalty - margin_penalty;
    score -= SHELL_COST_WEIGHT * shell_id_m * shell_id_m;
    if (PRACTICAL_LENGTH_M.0..=PRACTICAL_LENGTH_M.1).contains(&tube_length_m) {
        score += PRACTICAL_LENGTH_BONUS;
    }
    if tube_count > MAINTENANCE_TUBE_COUNT {
        score -= MAINTENANCE_PENALTY;
    }
    score.max(0.0)
}

/// 표준 형상 중에서 소요 면적에 맞는 쉘을 찾는다.
pub fn optimize_shell(input: &SizingInput) -> SizingResult {
    let mut errors = Vec::new();
    if !(input.required_area_m2 > 0.0) {
        errors.push("소요 면적은 0보다 커야 합니다.".to_string());
    }
    if !(input.tube_od_m > 0.0) || input.tube_pitch_m <= input.tube_od_m {
        errors.push("튜브 외경은 양수이고 피치는 외경보다 커야 합니다.".to_string());
    }
    if !geometry::ALLOWED_PASSES.contains(&input.tube_passes) {
        errors.push(format!("관측 패스 수 {}은(는) 지원하지 않습니다.", input.tube_passes));
    }
    if let Some(length) = input.fixed_tube_length_m {
        if !(length > 0.0) {
            errors.push("고정 튜브 길이는 0보다 커야 합니다.".to_string());
        }
    }
    if !errors.is_empty() {
        return SizingResult {
            message: "입력 오류로 크기 선정을 수행하지 못했습니다.".into(),
            errors,
            ..SizingResult::default()
        };
    }

    let lengths: Vec<f64> = match input.fixed_tube_length_m {
        Some(length) => vec![length],
        None => STANDARD_TUBE_LENGTH_M.to_vec(),
    };
    let target_area = input.required_area_m2 * (1.0 + input.design_margin_pct / 100.0);

    let mut candidates = Vec::new();
    for &length in &lengths {
        for &shell_mm in STANDARD_SHELL_ID_MM.iter() {
            let shell_id_m = shell_mm / 1000.0;
            let count = geometry::tube_count(
                shell_id_m,
                input.tube_od_m,
                input.tube_pitch_m,
                input.pattern,
                input.tube_passes,
                input.shell_type,
            );
            let actual_area_m2 = PI * input.tube_od_m * length * count.count as f64;
            let area_margin_pct = (actual_area_m2 / input.required_area_m2 - 1.0) * 100.0;
            let l_over_d = length / shell_id_m;
            let score = score_candidate(
                l_over_d,
                area_margin_pct,
                shell_id_m,
                length,
                count.count,
                input.design_margin_pct,
            );

            let mut warnings = count.warnings;
            if !(LD_OPTIMAL.0..=LD_OPTIMAL.1).contains(&l_over_d) {
                warnings.push(format!("L/D {l_over_d:.1}가 최적 범위(6~10) 밖입니다."));
            }
            if !(MARGIN_OPTIMAL.0..=MARGIN_OPTIMAL.1).contains(&area_margin_pct) {
                warnings.push(format!(
                    "면적 여유 {area_margin_pct:.1}%가 최적 범위(15~25%) 밖입니다."
                ));
            }
            candidates.push(SizingOption {
                shell_id_m,
                tube_length_m: length,
                tube_count: count.count,
                count_method: count.method,
                actual_area_m2,
                area_margin_pct,
                l_over_d,
                score,
                warnings,
            });
        }
    }

    let evaluated = candidates.len();
    candidates.retain(|c| c.score > 0.0 && c.actual_area_m2 >= target_area);
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates.truncate(MAX_OPTIONS);

    if candidates.is_empty() {
        return SizingResult {
            evaluated,
            message: format!(
                "소요 면적 {:.1} m²(여유 {:.0}%)를 만족하는 표준 쉘이 없습니다. 다중 쉘 또는 튜브 규격 변경을 검토하십시오.",
                input.required_area_m2, input.design_margin_pct
            ),
            errors: vec!["적합한 크기 후보가 없습니다.".into()],
            is_valid: false,
            ..SizingResult::default()
        };
    }

    let best = &candidates[0];
    let message = format!(
        "최적 후보: 쉘 {:.0} mm × 튜브 {:.2} m, {}개 (여유 {:.1}%)",
        best.shell_id_m * 1000.0,
        best.tube_length_m,
        best.tube_count,
        best.area_margin_pct
    );
    SizingResult {
        options: candidates,
        evaluated,
        message,
        warnings: Vec::new(),
        errors: Vec::new(),
        is_valid: true,
    }
}
