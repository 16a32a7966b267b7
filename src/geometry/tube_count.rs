use serde::Serialize;

use super::tables::{tube_count_tables, TubeCountTable};
use super::{ShellType, TubePattern};

/// 표 매칭 허용 오차 [mm]
const OD_TOLERANCE_MM: f64 = 0.5;
const PITCH_TOLERANCE_MM: f64 = 0.5;
const SHELL_TOLERANCE_MM: f64 = 25.0;

/// 튜브 개수를 산정한 방법.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TubeCountMethod {
    /// 사용자가 직접 입력
    UserSpecified,
    /// TEMA 튜브 개수 표
    TemaTable,
    /// Palen 상관식 (표 범위 밖)
    PalenCorrelation,
}

/// 튜브 개수 산정 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TubeCountResult {
    pub count: u32,
    pub method: TubeCountMethod,
    /// 번들 외경(OTL) [m]
    pub bundle_diameter_m: f64,
    pub warnings: Vec<String>,
}

fn pass_column(passes: u32) -> usize {
    match passes {
        0 | 1 => 0,
        2 => 1,
        _ => 2,
    }
}

/// 패스 수에 따른 관 개수 보정계수 CTP
fn tube_count_constant(passes: u32) -> f64 {
    match passes {
        0 | 1 => 0.93,
        2 => 0.90,
        3 | 4 => 0.85,
        5 | 6 => 0.80,
        _ => 0.75,
    }
}

fn matching_table(tube_od_mm: f64, pitch_mm: f64, triangular: bool) -> Option<&'static TubeCountTable> {
    tube_count_tables()
        .iter()
        .filter(|t| t.triangular == triangular)
        .filter(|t| (t.tube_od_mm - tube_od_mm).abs() <= OD_TOLERANCE_MM)
        .filter(|t| (t.pitch_mm - pitch_mm).abs() <= PITCH_TOLERANCE_MM)
        .min_by(|a, b| {
            let da = (a.tube_od_mm - tube_od_mm).abs() + (a.pitch_mm - pitch_mm).abs();
            let db = (b.tube_od_mm - tube_od_mm).abs() + (b.pitch_mm - pitch_mm).abs();
            da.total_cmp(&db)
        })
}

/// TEMA 표에서 튜브 개수를 찾는다. 허용 오차 안에 맞는 표/행이 없으면 `None`.
pub fn table_tube_count(
    shell_id_m: f64,
    tube_od_m: f64,
    pitch_m: f64,
    pattern: TubePattern,
    passes: u32,
) -> Option<u32> {
    let table = matching_table(tube_od_m * 1000.0, pitch_m * 1000.0, pattern.is_triangular())?;
    let shell_mm = shell_id_m * 1000.0;
    let nearest = table.rows.iter().min_by(|a, b| {
        (a.shell_id_mm - shell_mm)
            .abs()
            .total_cmp(&(b.shell_id_mm - shell_mm).abs())
    })?;
    if (nearest.shell_id_mm - shell_mm).abs() > SHELL_TOLERANCE_MM {
        return None;
    }
    Some(nearest.counts[pass_column(passes)])
}

/// Palen 상관식으로 튜브 개수를 추정한다.
///
/// `Nt = geomFactor·CTP·(Db/Pt)²/CL`
pub fn palen_tube_count(
    bundle_diameter_m: f64,
    pitch_m: f64,
    pattern: TubePattern,
    passes: u32,
) -> u32 {
    if bundle_diameter_m <= 0.0 || pitch_m <= 0.0 {
        return 0;
    }
    let (geom_factor, layout_constant) = if pattern.is_triangular() {
        (0.907, 0.866)
    } else {
        (0.785, 1.0)
    };
    let ratio = bundle_diameter_m / pitch_m;
    let nt = geom_factor * tube_count_constant(passes) * ratio * ratio / layout_constant;
    nt.floor().max(1.0) as u32
}

/// 쉘 내경과 튜브 배열로부터 튜브 개수를 산정한다.
///
/// 먼저 TEMA 표를 찾고, 허용 오차 안의 표가 없으면 Palen 상관식으로 대체한다.
/// 번들 외경은 쉘 형식별 간극을 뺀 값이다.
pub fn tube_count(
    shell_id_m: f64,
    tube_od_m: f64,
    pitch_m: f64,
    pattern: TubePattern,
    passes: u32,
    shell_type: ShellType,
) -> TubeCountResult {
    let bundle_diameter_m = (shell_id_m - shell_type.bundle_clearance_m(shell_id_m)).max(0.0);
    let mut warnings = Vec::new();

    if let Some(count) = table_tube_count(shell_id_m, tube_od_m, pitch_m, pattern, passes) {
        if passes > 4 {
            warnings.push(format!(
                "{passes}패스는 표의 4패스 값을 사용했습니다. 실제 개수는 더 적을 수 있습니다."
            ));
        }
        if shell_type != ShellType::FixedTubesheet {
            warnings.push(
                "튜브 개수 표는 고정관판 기준입니다. 부동두/U-튜브는 레이아웃으로 확인하십시오."
                    .into(),
            );
        }
        return TubeCountResult {
            count,
            method: TubeCountMethod::TemaTable,
            bundle_diameter_m,
            warnings,
        };
    }

    let count = palen_tube_count(bundle_diameter_m, pitch_m, pattern, passes);
    warnings.push(format!(
        "표준 튜브 개수 표에 맞는 조합이 없어 Palen 상관식으로 {count}개를 추정했습니다."
    ));
    TubeCountResult {
        count,
        method: TubeCountMethod::PalenCorrelation,
        bundle_diameter_m,
        warnings,
    }
}

/// 튜브 개수로부터 번들 외경을 역산한다 (TEMA K1/n1 상수).
///
/// `Db = Do·(Nt/K1)^(1/n1)`
pub fn bundle_diameter_from_count(
    count: u32,
    tube_od_m: f64,
    pattern: TubePattern,
    passes: u32,
) -> f64 {
    if count == 0 || tube_od_m <= 0.0 {
        return 0.0;
    }
    let (k1, n1) = if pattern.is_triangular() {
        match passes {
            0 | 1 => (0.319, 2.142),
            2 => (0.249, 2.207),
            3 | 4 => (0.175, 2.285),
            5 | 6 => (0.0743, 2.499),
            _ => (0.0365, 2.675),
        }
    } else {
        match passes {
            0 | 1 => (0.215, 2.207),
            2 => (0.156, 2.291),
            3 | 4 => (0.158, 2.263),
            5 | 6 => (0.0402, 2.617),
            _ => (0.0331, 2.643),
        }
    };
    tube_od_m * (count as f64 / k1).powf(1.0 / n1)
}
