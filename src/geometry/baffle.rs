use serde::Serialize;

use crate::process::ServiceType;

/// 배플 간격 권장 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaffleRecommendation {
    /// TEMA 최소 간격 max(50 mm, Ds/5) [m]
    pub min_spacing_m: f64,
    /// 최대 간격(쉘 내경) [m]
    pub max_spacing_m: f64,
    /// 권장 간격 (25 mm 단위 반올림) [m]
    pub recommended_spacing_m: f64,
    pub baffle_count: u32,
    pub warnings: Vec<String>,
}

/// 서비스별 권장 간격 비율 (Ds 대비)
fn spacing_fraction(service: ServiceType) -> f64 {
    match service {
        ServiceType::Liquid => 0.40,
        ServiceType::TwoPhase => 0.45,
        ServiceType::Gas => 0.50,
    }
}

/// 쉘 내경과 튜브 길이로 배플 간격과 매수를 권장한다.
pub fn recommended_baffle_spacing(
    shell_id_m: f64,
    tube_length_m: f64,
    service: ServiceType,
) -> BaffleRecommendation {
    let mut warnings = Vec::new();
    let min_spacing_m = (0.050_f64).max(shell_id_m / 5.0);
    let max_spacing_m = shell_id_m.max(min_spacing_m);

    let raw_mm = spacing_fraction(service) * shell_id_m * 1000.0;
    let rounded_mm = (raw_mm / 25.0).round() * 25.0;
    let recommended_spacing_m = (rounded_mm / 1000.0).clamp(min_spacing_m, max_spacing_m);

    let baffle_count = if recommended_spacing_m > 0.0 {
        let n = (tube_length_m / recommended_spacing_m).floor() - 1.0;
        n.max(1.0) as u32
    } else {
        1
    };

    if tube_length_m < 2.0 * recommended_spacing_m {
        warnings.push("튜브 길이가 짧아 배플을 1매만 둘 수 있습니다.".into());
    }

    BaffleRecommendation {
        min_spacing_m,
        max_spacing_m,
        recommended_spacing_m,
        baffle_count,
        warnings,
    }
}
