//! 관/쉘 기하 형상, 표준 치수 표, 튜브 개수 및 배플 간격 계산.

pub mod baffle;
pub mod tables;
pub mod tube_count;

use serde::{Deserialize, Serialize};

pub use baffle::{recommended_baffle_spacing, BaffleRecommendation};
pub use tube_count::{
    bundle_diameter_from_count, palen_tube_count, table_tube_count, tube_count, TubeCountMethod,
    TubeCountResult,
};

/// TEMA 최소 피치비
pub const MIN_PITCH_RATIO: f64 = 1.25;
/// 허용되는 관측 패스 수
pub const ALLOWED_PASSES: [u32; 5] = [1, 2, 4, 6, 8];

/// 튜브 배열 형식. 각도는 유동 방향 기준이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TubePattern {
    Triangular30,
    RotatedTriangular60,
    Square90,
    RotatedSquare45,
}

impl TubePattern {
    pub fn is_triangular(self) -> bool {
        matches!(self, TubePattern::Triangular30 | TubePattern::RotatedTriangular60)
    }

    /// 유동 방향과 평행한 관열 간 거리 Lpp [m]
    pub fn pitch_parallel(self, pitch_m: f64) -> f64 {
        match self {
            TubePattern::Triangular30 => 0.866 * pitch_m,
            TubePattern::RotatedTriangular60 => 0.5 * pitch_m,
            TubePattern::Square90 => pitch_m,
            TubePattern::RotatedSquare45 => 0.707 * pitch_m,
        }
    }

    /// 직교류 유로 면적 계산에 쓰는 유효 피치 [m]
    pub fn pitch_normal_effective(self, pitch_m: f64) -> f64 {
        match self {
            TubePattern::RotatedSquare45 => 0.707 * pitch_m,
            _ => pitch_m,
        }
    }
}

/// 쉘 형식(TEMA). 쉘 내경과 번들 외경 사이 간극을 결정한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShellType {
    #[default]
    FixedTubesheet,
    UTube,
    SplitRingFloatingHead,
    PullThroughFloatingHead,
}

impl ShellType {
    /// 쉘 내경 - 번들 외경 간극 [m]. 직경 구간별 대표값을 쓴다.
    pub fn bundle_clearance_m(self, shell_id_m: f64) -> f64 {
        let band = if shell_id_m <= 0.6 {
            0
        } else if shell_id_m <= 1.0 {
            1
        } else {
            2
        };
        let table_mm: [f64; 3] = match self {
            ShellType::FixedTubesheet => [12.0, 15.0, 18.0],
            ShellType::UTube => [15.0, 18.0, 22.0],
            ShellType::SplitRingFloatingHead => [45.0, 55.0, 65.0],
            ShellType::PullThroughFloatingHead => [88.0, 95.0, 105.0],
        };
        table_mm[band] / 1000.0
    }
}

/// 진동/열전도 계산에 필요한 튜브 재질 물성.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TubeMaterialProps {
    /// 탄성계수 [Pa]
    pub elastic_modulus_pa: f64,
    /// 밀도 [kg/m³]
    pub density_kg_m3: f64,
    /// 열전도율 [W/(m·K)]
    pub thermal_conductivity_w_mk: f64,
}

impl Default for TubeMaterialProps {
    /// 탄소강 기본값
    fn default() -> Self {
        Self {
            elastic_modulus_pa: 200.0e9,
            density_kg_m3: 7850.0,
            thermal_conductivity_w_mk: 50.0,
        }
    }
}

/// 열교환기 기계적 형상 입력. 모든 길이는 m 단위이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MechanicalGeometry {
    pub tube_od_m: f64,
    pub tube_wall_m: f64,
    pub tube_length_m: f64,
    pub tube_pitch_m: f64,
    pub pattern: TubePattern,
    pub tube_passes: u32,
    pub shell_id_m: f64,
    #[serde(default)]
    pub shell_type: ShellType,
    /// 배플 컷 (쉘 내경 대비 분율, 0~0.5)
    pub baffle_cut: f64,
    /// 중앙 배플 간격
    pub baffle_spacing_m: f64,
    /// 입구 배플 간격. 없으면 중앙 간격과 같다.
    #[serde(default)]
    pub inlet_baffle_spacing_m: Option<f64>,
    /// 출구 배플 간격. 없으면 중앙 간격과 같다.
    #[serde(default)]
    pub outlet_baffle_spacing_m: Option<f64>,
    /// 튜브 개수. 없으면 표/상관식으로 산정한다.
    #[serde(default)]
    pub tube_count: Option<u32>,
    #[serde(default)]
    pub tube_material: TubeMaterialProps,
    /// 튜브-배플 구멍 직경 간극. 기본 0.8 mm.
    #[serde(default)]
    pub tube_baffle_clearance_m: Option<f64>,
    /// 쉘-배플 직경 간극. 기본 3.1 mm + 0.004·Ds.
    #[serde(default)]
    pub shell_baffle_clearance_m: Option<f64>,
    /// 실링 스트립 쌍 수
    #[serde(default)]
    pub sealing_strip_pairs: u32,
}

/// 형상 입력 검증 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// 0 이하의 치수
    NonPositive(&'static str),
    /// 관 두께가 반경 이상
    WallTooThick { od_m: f64, wall_m: f64 },
    /// 피치가 관 외경 이하
    PitchNotGreaterThanOd { pitch_m: f64, od_m: f64 },
    /// 배플 컷이 (0, 0.5) 밖
    BaffleCutOutOfRange(f64),
    /// 지원하지 않는 패스 수
    InvalidPassCount(u32),
}

impl std::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::NonPositive(name) => write!(f, "{name}은(는) 0보다 커야 합니다."),
            GeometryError::WallTooThick { od_m, wall_m } => write!(
                f,
                "관 두께 {:.2} mm가 외경 {:.2} mm에 비해 너무 큽니다.",
                wall_m * 1000.0,
                od_m * 1000.0
            ),
            GeometryError::PitchNotGreaterThanOd { pitch_m, od_m } => write!(
                f,
                "튜브 피치 {:.2} mm는 외경 {:.2} mm보다 커야 합니다.",
                pitch_m * 1000.0,
                od_m * 1000.0
            ),
            GeometryError::BaffleCutOutOfRange(cut) => {
                write!(f, "배플 컷 {cut:.3}은(는) 0과 0.5 사이여야 합니다.")
            }
            GeometryError::InvalidPassCount(n) => {
                write!(f, "관측 패스 수 {n}은(는) 1, 2, 4, 6, 8 중 하나여야 합니다.")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

impl MechanicalGeometry {
    pub fn tube_id_m(&self) -> f64 {
        self.tube_od_m - 2.0 * self.tube_wall_m
    }

    pub fn pitch_ratio(&self) -> f64 {
        self.tube_pitch_m / self.tube_od_m
    }

    pub fn inlet_spacing_m(&self) -> f64 {
        self.inlet_baffle_spacing_m.unwrap_or(self.baffle_spacing_m)
    }

    pub fn outlet_spacing_m(&self) -> f64 {
        self.outlet_baffle_spacing_m.unwrap_or(self.baffle_spacing_m)
    }

    /// 최장 무지지 스팬. 입·출구 간격이 더 넓으면 그 값을 쓴다.
    pub fn longest_span_m(&self) -> f64 {
        self.baffle_spacing_m
            .max(self.inlet_spacing_m())
            .max(self.outlet_spacing_m())
    }

    /// 배플 매수. 입·출구 구간을 제외한 길이를 중앙 간격으로 나눈다 (최소 1).
    pub fn baffle_count(&self) -> u32 {
        if self.baffle_spacing_m <= 0.0 {
            return 1;
        }
        let central = self.tube_length_m - self.inlet_spacing_m() - self.outlet_spacing_m();
        let n = (central / self.baffle_spacing_m).floor() + 1.0;
        if n.is_finite() && n >= 1.0 {
            n as u32
        } else {
            1
        }
    }

    pub fn tube_baffle_clearance(&self) -> f64 {
        self.tube_baffle_clearance_m.unwrap_or(0.8e-3)
    }

    pub fn shell_baffle_clearance(&self) -> f64 {
        self.shell_baffle_clearance_m
            .unwrap_or(3.1e-3 + 0.004 * self.shell_id_m)
    }

    /// 계산 전에 형상 입력을 검증한다. 비어 있으면 유효하다.
    pub fn validate(&self) -> Vec<GeometryError> {
        let mut errors = Vec::new();
        let positives = [
            ("튜브 외경", self.tube_od_m),
            ("튜브 두께", self.tube_wall_m),
            ("튜브 길이", self.tube_length_m),
            ("튜브 피치", self.tube_pitch_m),
            ("쉘 내경", self.shell_id_m),
            ("배플 간격", self.baffle_spacing_m),
            ("탄성계수", self.tube_material.elastic_modulus_pa),
            ("튜브 밀도", self.tube_material.density_kg_m3),
            ("튜브 열전도율", self.tube_material.thermal_conductivity_w_mk),
        ];
        for (name, value) in positives {
            if !(value > 0.0) {
                errors.push(GeometryError::NonPositive(name));
            }
        }
        let end_spacings = [
            ("입구 배플 간격", self.inlet_baffle_spacing_m),
            ("출구 배플 간격", self.outlet_baffle_spacing_m),
        ];
        for (name, value) in end_spacings {
            if value.is_some_and(|v| !(v > 0.0)) {
                errors.push(GeometryError::NonPositive(name));
            }
        }
        if let Some(0) = self.tube_count {
            errors.push(GeometryError::NonPositive("튜브 개수"));
        }
        if self.tube_od_m > 0.0 && self.tube_wall_m >= self.tube_od_m / 2.0 {
            errors.push(GeometryError::WallTooThick {
                od_m: self.tube_od_m,
                wall_m: self.tube_wall_m,
            });
        }
        if self.tube_od_m > 0.0 && self.tube_pitch_m <= self.tube_od_m {
            errors.push(GeometryError::PitchNotGreaterThanOd {
                pitch_m: self.tube_pitch_m,
                od_m: self.tube_od_m,
            });
        }
        if !(self.baffle_cut > 0.0 && self.baffle_cut < 0.5) {
            errors.push(GeometryError::BaffleCutOutOfRange(self.baffle_cut));
        }
        if !ALLOWED_PASSES.contains(&self.tube_passes) {
            errors.push(GeometryError::InvalidPassCount(self.tube_passes));
        }
        errors
    }

    /// 계산은 가능하지만 설계 지침을 벗어난 항목에 대한 경고.
    pub fn advisories(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let ratio = self.pitch_ratio();
        if ratio > 1.0 && ratio < MIN_PITCH_RATIO {
            warnings.push(format!(
                "피치비 {ratio:.3}가 TEMA 최소값 {MIN_PITCH_RATIO}보다 작습니다. 관판 리가먼트 강도를 확인하십시오."
            ));
        }
        if self.baffle_cut > 0.0 && !(0.15..=0.45).contains(&self.baffle_cut) {
            warnings.push(format!(
                "배플 컷 {:.0}%는 일반 범위(15~45%)를 벗어납니다.",
                self.baffle_cut * 100.0
            ));
        }
        let min_spacing = (0.050_f64).max(self.shell_id_m / 5.0);
        if self.baffle_spacing_m > 0.0 && self.baffle_spacing_m < min_spacing {
            warnings.push(format!(
                "배플 간격 {:.0} mm가 TEMA 최소값 {:.0} mm보다 작습니다.",
                self.baffle_spacing_m * 1000.0,
                min_spacing * 1000.0
            ));
        }
        let max_span = tables::max_unsupported_span_m(self.tube_od_m);
        if self.longest_span_m() > max_span {
            warnings.push(format!(
                "무지지 스팬 {:.0} mm가 TEMA 최대 허용 {:.0} mm를 초과합니다.",
                self.longest_span_m() * 1000.0,
                max_span * 1000.0
            ));
        }
        warnings
    }
}
