use serde::Serialize;

use crate::process::FlowArrangement;

/// 보정계수 하한
pub const MIN_CORRECTION_FACTOR: f64 = 0.5;
/// TEMA 권장 최소 보정계수. 이보다 작으면 쉘 수 증가를 검토한다.
pub const CORRECTION_WARNING_LIMIT: f64 = 0.75;
/// 폐형식이 물리 범위를 벗어날 때 쓰는 대체값
pub const FALLBACK_CORRECTION_FACTOR: f64 = 0.9;

/// 양단 온도차로부터 로그평균 온도차를 구한다. 어느 한쪽이라도 0 이하이면 `None`.
pub fn log_mean(delta1: f64, delta2: f64) -> Option<f64> {
    if delta1 <= 0.0 || delta2 <= 0.0 {
        return None;
    }
    if (delta1 - delta2).abs() < 1e-9 * delta1.max(delta2) {
        return Some(delta1);
    }
    Some((delta1 - delta2) / (delta1 / delta2).ln())
}

/// 유동 배열에 맞는 LMTD. 병류만 병류 온도차를 쓰고 나머지는 향류 기준이다.
pub fn lmtd(
    hot_in_c: f64,
    hot_out_c: f64,
    cold_in_c: f64,
    cold_out_c: f64,
    arrangement: FlowArrangement,
) -> Option<f64> {
    match arrangement {
        FlowArrangement::ParallelFlow => log_mean(hot_in_c - cold_in_c, hot_out_c - cold_out_c),
        _ => log_mean(hot_in_c - cold_out_c, hot_out_c - cold_in_c),
    }
}

/// LMTD 보정계수 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrectionFactor {
    pub factor: f64,
    /// 온도 효율 P = (tco - tci)/(Thi - tci)
    pub p: f64,
    /// 열용량비 R = (Thi - Tho)/(tco - tci)
    pub r: f64,
    pub warnings: Vec<String>,
}

/// 온도 조건으로부터 P, R을 구한다.
pub fn p_r(hot_in_c: f64, hot_out_c: f64, cold_in_c: f64, cold_out_c: f64) -> (f64, f64) {
    let cold_rise = cold_out_c - cold_in_c;
    let span = hot_in_c - cold_in_c;
    let p = if span.abs() > 0.0 { cold_rise / span } else { 0.0 };
    let r = if cold_rise.abs() > 0.0 {
        (hot_in_c - hot_out_c) / cold_rise
    } else {
        0.0
    };
    (p, r)
}

/// 1-2(및 1-4) 쉘앤튜브 보정계수 (Bowman-Mueller-Nagle). 물리 범위 밖이면 `None`.
pub fn shell_tube_one_pass_f(p: f64, r: f64) -> Option<f64> {
    if p <= 0.0 {
        return Some(1.0);
    }
    if (r - 1.0).abs() < 1e-3 {
        let s2 = std::f64::consts::SQRT_2;
        if p >= 1.0 {
            return None;
        }
        let num = s2 * p / (1.0 - p);
        let arg = (2.0 - p * (2.0 - s2)) / (2.0 - p * (2.0 + s2));
        if arg <= 0.0 {
            return None;
        }
        let f = num / arg.ln();
        return f.is_finite().then_some(f);
    }
    let s = (r * r + 1.0).sqrt();
    let ratio = (1.0 - p) / (1.0 - r * p);
    let arg = (2.0 - p * (r + 1.0 - s)) / (2.0 - p * (r + 1.0 + s));
    if ratio <= 0.0 || arg <= 0.0 {
        return None;
    }
    let f = s * ratio.ln() / ((r - 1.0) * arg.ln());
    (f.is_finite() && f > 0.0).then_some(f)
}

/// 향류 교환기의 P, R에 대한 NTU (P 기준 유체)
fn counter_flow_ntu(p: f64, r: f64) -> Option<f64> {
    if p <= 0.0 {
        return Some(0.0);
    }
    if (r - 1.0).abs() < 1e-6 {
        return (p < 1.0).then(|| p / (1.0 - p));
    }
    let arg = (1.0 - r * p) / (1.0 - p);
    if arg <= 0.0 || p >= 1.0 {
        return None;
    }
    let ntu = arg.ln() / (1.0 - r);
    (ntu.is_finite() && ntu > 0.0).then_some(ntu)
}

/// 양쪽 비혼합 직교류 보정계수. 같은 P, R에서 향류 NTU와 직교류 NTU의 비로 구한다.
pub fn crossflow_f(p: f64, r: f64) -> Option<f64> {
    if p <= 0.0 {
        return Some(1.0);
    }
    // R > 1이면 두 유체를 바꿔 P·R, 1/R 로 계산한다 (F는 대칭).
    let (p, r) = if r > 1.0 { (p * r, 1.0 / r) } else { (p, r) };
    let ntu_counter = counter_flow_ntu(p, r)?;

    const NTU_MAX: f64 = 50.0;
    if super::ntu::crossflow_unmixed(NTU_MAX, r) <= p {
        return None;
    }
    let (mut lo, mut hi) = (0.0_f64, NTU_MAX);
    for _ in 0..100 {
        let mid = 0.5 * (lo + hi);
        if super::ntu::crossflow_unmixed(mid, r) < p {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    let ntu_cross = 0.5 * (lo + hi);
    if ntu_cross <= 0.0 {
        return None;
    }
    let f = ntu_counter / ntu_cross;
    f.is_finite().then_some(f)
}

/// 유동 배열에 따른 LMTD 보정계수 F.
///
/// 향류/병류는 항상 1.0이다. 나머지는 [0.5, 1.0]으로 제한하고,
/// 폐형식이 물리 범위를 벗어나면 0.9로 대체하고 경고를 남긴다.
pub fn correction_factor(
    arrangement: FlowArrangement,
    hot_in_c: f64,
    hot_out_c: f64,
    cold_in_c: f64,
    cold_out_c: f64,
) -> CorrectionFactor {
    let (p, r) = p_r(hot_in_c, hot_out_c, cold_in_c, cold_out_c);
    let mut warnings = Vec::new();

    let raw = match arrangement {
        FlowArrangement::CounterFlow | FlowArrangement::ParallelFlow => {
            return CorrectionFactor {
                factor: 1.0,
                p,
                r,
                warnings,
            };
        }
        FlowArrangement::ShellTube12 | FlowArrangement::ShellTube14 => {
            shell_tube_one_pass_f(p, r)
        }
        FlowArrangement::CrossFlow => crossflow_f(p, r),
    };

    let factor = match raw {
        Some(f) => f,
        None => {
            warnings.push(format!(
                "P = {p:.3}, R = {r:.3}에서 보정계수 식이 물리 범위를 벗어나 F = {FALLBACK_CORRECTION_FACTOR}로 가정했습니다. 온도 교차 여부를 확인하십시오."
            ));
            FALLBACK_CORRECTION_FACTOR
        }
    };
    let factor = factor.clamp(MIN_CORRECTION_FACTOR, 1.0);
    if factor < CORRECTION_WARNING_LIMIT {
        warnings.push(format!(
            "LMTD 보정계수 F = {factor:.3}가 {CORRECTION_WARNING_LIMIT}보다 작습니다. 쉘 직렬 배치를 검토하십시오."
        ));
    }

    CorrectionFactor {
        factor,
        p,
        r,
        warnings,
    }
}
