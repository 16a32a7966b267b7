//! 유동 유발 진동 검토 (TEMA RGP T-4 방식).
//!
//! 배플 사이 스팬을 양단 고정 보로 보고 고유진동수를 구한 뒤 와류 방출 공진,
//! 유체탄성 불안정(Connors), 음향 공진, 난류 버페팅을 각각 독립적으로 판정한다.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::geometry::{tables, MechanicalGeometry, TubePattern};
use crate::process::ServiceType;

/// 양단 고정 1차 모드 계수
pub const FIXED_FIXED_MODE_CONSTANT: f64 = 22.4;
/// 부가질량계수 상한
pub const MAX_ADDED_MASS_COEFFICIENT: f64 = 3.0;
/// 와류 공진 판정 주파수비 범위 (양끝 제외)
pub const VORTEX_LOCK_IN_RANGE: (f64, f64) = (0.7, 1.3);
/// 음향 공진 판정 허용 폭
pub const ACOUSTIC_TOLERANCE: f64 = 0.15;
/// 난류 버페팅 판정 환산유속
pub const BUFFETING_REDUCED_VELOCITY: f64 = 3.3;
/// FEI 기본 안전계수
pub const DEFAULT_FEI_SAFETY_FACTOR: f64 = 0.8;
/// 음속 하한 [m/s]
pub const DEFAULT_MIN_SPEED_OF_SOUND: f64 = 150.0;

pub const FEI_RECOMMENDATION: &str =
    "배플 간격을 줄여 고유진동수를 높이거나 쉘측 유속을 낮추십시오(이중 분할 배플 검토).";
pub const VORTEX_RECOMMENDATION: &str =
    "배플 간격을 조정해 고유진동수를 와류 방출 주파수에서 멀리하십시오.";
pub const ACOUSTIC_RECOMMENDATION: &str = "디튜닝 배플(음향 차단판) 설치를 검토하십시오.";
pub const BUFFETING_RECOMMENDATION: &str = "입구 충돌판과 스팬 지지를 보강하십시오.";

/// 진동 검토 입력. 모두 SI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VibrationInput {
    pub tube_od_m: f64,
    pub tube_id_m: f64,
    /// 최장 무지지 스팬 [m]
    pub unsupported_span_m: f64,
    pub tube_pitch_m: f64,
    pub pattern: TubePattern,
    pub elastic_modulus_pa: f64,
    pub tube_density_kg_m3: f64,
    /// 쉘측 유체 밀도
    pub shell_fluid_density_kg_m3: f64,
    /// 관내 유체 밀도
    pub tube_fluid_density_kg_m3: f64,
    /// 직교류 유속 [m/s]
    pub crossflow_velocity_m_s: f64,
    pub service: ServiceType,
    /// 음향 공진 폭 (쉘 내경) [m]
    pub shell_id_m: f64,
    /// 쉘측 음속 [m/s]. 기체 서비스에서만 쓴다.
    #[serde(default)]
    pub speed_of_sound_m_s: Option<f64>,
    /// 감쇠비. 없으면 서비스별 기본값.
    #[serde(default)]
    pub damping_ratio: Option<f64>,
    #[serde(default = "default_fei_safety_factor")]
    pub fei_safety_factor: f64,
    #[serde(default = "default_min_speed_of_sound")]
    pub min_speed_of_sound_m_s: f64,
}

fn default_fei_safety_factor() -> f64 {
    DEFAULT_FEI_SAFETY_FACTOR
}

fn default_min_speed_of_sound() -> f64 {
    DEFAULT_MIN_SPEED_OF_SOUND
}

impl VibrationInput {
    /// 형상 입력과 운전 조건으로 진동 입력을 구성한다.
    pub fn from_geometry(
        geometry: &MechanicalGeometry,
        shell_fluid_density_kg_m3: f64,
        tube_fluid_density_kg_m3: f64,
        crossflow_velocity_m_s: f64,
        service: ServiceType,
        speed_of_sound_m_s: Option<f64>,
    ) -> Self {
        Self {
            tube_od_m: geometry.tube_od_m,
            tube_id_m: geometry.tube_id_m(),
            unsupported_span_m: geometry.longest_span_m(),
            tube_pitch_m: geometry.tube_pitch_m,
            pattern: geometry.pattern,
            elastic_modulus_pa: geometry.tube_material.elastic_modulus_pa,
            tube_density_kg_m3: geometry.tube_material.density_kg_m3,
            shell_fluid_density_kg_m3,
            tube_fluid_density_kg_m3,
            crossflow_velocity_m_s,
            service,
            shell_id_m: geometry.shell_id_m,
            speed_of_sound_m_s,
            damping_ratio: None,
            fei_safety_factor: DEFAULT_FEI_SAFETY_FACTOR,
            min_speed_of_sound_m_s: DEFAULT_MIN_SPEED_OF_SOUND,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct VibrationResult {
    pub natural_frequency_hz: f64,
    pub vortex_shedding_frequency_hz: f64,
    /// 음향 기본 주파수 (기체 서비스 외에는 0)
    pub acoustic_frequency_hz: f64,
    pub critical_velocity_m_s: f64,
    pub reduced_velocity: f64,
    /// fvs/fn
    pub frequency_ratio: f64,
    /// V/Vcrit
    pub velocity_ratio: f64,
    pub damage_number: f64,
    pub effective_mass_kg_m: f64,
    pub added_mass_coefficient: f64,
    pub damping_ratio: f64,
    pub is_vortex_shedding_risk: bool,
    pub is_fei_risk: bool,
    pub is_acoustic_risk: bool,
    pub is_buffeting_risk: bool,
    pub is_vibration_risk: bool,
    pub is_valid: bool,
    pub message: String,
    pub recommendations: Vec<String>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

/// 배열별 Strouhal 수
pub fn strouhal_number(pattern: TubePattern) -> f64 {
    match pattern {
        TubePattern::Triangular30 => 0.22,
        TubePattern::RotatedTriangular60 => 0.25,
        TubePattern::Square90 => 0.20,
        TubePattern::RotatedSquare45 => 0.23,
    }
}

/// 배열별 Connors 상수 K
pub fn connors_constant(pattern: TubePattern) -> f64 {
    match pattern {
        TubePattern::Triangular30 => 3.3,
        TubePattern::RotatedTriangular60 => 4.0,
        TubePattern::Square90 => 3.4,
        TubePattern::RotatedSquare45 => 3.0,
    }
}

/// 서비스별 기본 감쇠비
pub fn default_damping_ratio(service: ServiceType) -> f64 {
    match service {
        ServiceType::Gas => 0.01,
        ServiceType::Liquid => 0.03,
        ServiceType::TwoPhase => 0.04,
    }
}

/// 부가질량계수 Cm. 관군 구속 등가직경 De/do로부터 구하고 3.0으로 제한한다.
pub fn added_mass_coefficient(pitch_ratio: f64, pattern: TubePattern) -> f64 {
    let de_ratio = if pattern.is_triangular() {
        (0.96 + 0.5 * pitch_ratio) * pitch_ratio
    } else {
        (1.07 + 0.56 * pitch_ratio) * pitch_ratio
    };
    let sq = de_ratio * de_ratio;
    if sq <= 1.0 {
        return MAX_ADDED_MASS_COEFFICIENT;
    }
    ((sq + 1.0) / (sq - 1.0)).min(MAX_ADDED_MASS_COEFFICIENT)
}

/// 양단 고정 보의 1차 고유진동수 [Hz]
pub fn natural_frequency(
    elastic_modulus_pa: f64,
    moment_of_inertia_m4: f64,
    mass_per_length_kg_m: f64,
    span_m: f64,
) -> f64 {
    if mass_per_length_kg_m <= 0.0 || span_m <= 0.0 {
        return 0.0;
    }
    FIXED_FIXED_MODE_CONSTANT / (2.0 * PI)
        * (elastic_modulus_pa * moment_of_inertia_m4 / (mass_per_length_kg_m * span_m.powi(4))).sqrt()
}

/// 와류 방출 공진 여부: 0.7 < fvs/fn < 1.3
pub fn vortex_shedding_risk(natural_frequency_hz: f64, shedding_frequency_hz: f64) -> bool {
    if natural_frequency_hz <= 0.0 {
        return false;
    }
    let ratio = shedding_frequency_hz / natural_frequency_hz;
    ratio > VORTEX_LOCK_IN_RANGE.0 && ratio < VORTEX_LOCK_IN_RANGE.1
}

fn near(value: f64, target: f64) -> bool {
    target > 0.0 && (value / target - 1.0).abs() <= ACOUSTIC_TOLERANCE
}

/// 유동 유발 진동을 검토한다.
pub fn analyze_vibration(input: &VibrationInput) -> VibrationResult {
    let mut warnings = Vec::new();
    let required = [
        ("튜브 외경", input.tube_od_m),
        ("무지지 스팬", input.unsupported_span_m),
        ("튜브 피치", input.tube_pitch_m),
        ("탄성계수", input.elastic_modulus_pa),
        ("튜브 밀도", input.tube_density_kg_m3),
        ("쉘측 유체 밀도", input.shell_fluid_density_kg_m3),
    ];
    let mut errors: Vec<String> = required
        .iter()
        .filter(|(_, v)| !(*v > 0.0))
        .map(|(name, _)| format!("{name}은(는) 0보다 커야 합니다."))
        .collect();
    if input.tube_id_m < 0.0 || input.tube_id_m >= input.tube_od_m {
        errors.push("튜브 내경은 0 이상, 외경 미만이어야 합니다.".into());
    }
    if input.crossflow_velocity_m_s < 0.0 {
        errors.push("직교류 유속은 음수일 수 없습니다.".into());
    }
    if !errors.is_empty() {
        return VibrationResult {
            message: "입력 오류로 진동 검토를 수행하지 못했습니다.".into(),
            errors,
            ..VibrationResult::default()
        };
    }

    let d_o = input.tube_od_m;
    let d_i = input.tube_id_m;
    let rho_s = input.shell_fluid_density_kg_m3;
    let v = input.crossflow_velocity_m_s;

    // 단면 성질과 유효 질량
    let inertia = PI * (d_o.powi(4) - d_i.powi(4)) / 64.0;
    let cm = added_mass_coefficient(input.tube_pitch_m / d_o, input.pattern);
    let metal = input.tube_density_kg_m3 * PI / 4.0 * (d_o * d_o - d_i * d_i);
    let inside = input.tube_fluid_density_kg_m3.max(0.0) * PI / 4.0 * d_i * d_i;
    let added = cm * rho_s * PI / 4.0 * d_o * d_o;
    let mass = metal + inside + added;

    let fn_hz = natural_frequency(input.elastic_modulus_pa, inertia, mass, input.unsupported_span_m);
    let fvs = strouhal_number(input.pattern) * v / d_o;

    let zeta = input
        .damping_ratio
        .filter(|z| *z > 0.0)
        .unwrap_or_else(|| default_damping_ratio(input.service));
    let log_dec = 2.0 * PI * zeta;
    let mass_ratio = mass / (rho_s * d_o * d_o);
    let v_crit = connors_constant(input.pattern) * fn_hz * d_o * (mass_ratio * log_dec).sqrt();
    let reduced_velocity = if fn_hz > 0.0 { v / (fn_hz * d_o) } else { 0.0 };
    let damage_number = if fn_hz > 0.0 {
        rho_s * v * v * d_o / (mass * fn_hz * log_dec)
    } else {
        0.0
    };

    // 음향 공진 (기체만)
    let acoustic_hz = if input.service == ServiceType::Gas && input.shell_id_m > 0.0 {
        let mut c = input.speed_of_sound_m_s.unwrap_or(0.0);
        if c < input.min_speed_of_sound_m_s {
            warnings.push(format!(
                "음속 {c:.1} m/s가 신뢰 하한 {:.0} m/s보다 작아 하한값을 사용했습니다.",
                input.min_speed_of_sound_m_s
            ));
            c = input.min_speed_of_sound_m_s;
        }
        c / (2.0 * input.shell_id_m)
    } else {
        0.0
    };

    let max_span = tables::max_unsupported_span_m(d_o);
    if input.unsupported_span_m > max_span {
        warnings.push(format!(
            "무지지 스팬 {:.0} mm가 TEMA 최대 {:.0} mm를 초과합니다.",
            input.unsupported_span_m * 1000.0,
            max_span * 1000.0
        ));
    }

    // 위험 판정
    let is_vortex = vortex_shedding_risk(fn_hz, fvs);
    let is_fei = v_crit > 0.0 && v > input.fei_safety_factor * v_crit;
    let is_acoustic = acoustic_hz > 0.0 && (near(fvs, acoustic_hz) || near(fvs, 2.0 * acoustic_hz));
    let is_buffeting = reduced_velocity > BUFFETING_REDUCED_VELOCITY;
    let frequency_ratio = if fn_hz > 0.0 { fvs / fn_hz } else { 0.0 };
    let velocity_ratio = if v_crit > 0.0 { v / v_crit } else { 0.0 };

    // 우선순위: FEI > 와류 > 음향 > 버페팅. 메시지는 최우선 위험, 권고는 활성 위험 전부.
    let recommendations: Vec<String> = [
        (is_fei, FEI_RECOMMENDATION),
        (is_vortex, VORTEX_RECOMMENDATION),
        (is_acoustic, ACOUSTIC_RECOMMENDATION),
        (is_buffeting, BUFFETING_RECOMMENDATION),
    ]
    .into_iter()
    .filter(|(active, _)| *active)
    .map(|(_, text)| text.to_string())
    .collect();

    let message = if is_fei {
        format!(
            "유체탄성 불안정 위험: 유속 {v:.2} m/s가 임계 유속 {v_crit:.2} m/s의 {:.0}%를 초과합니다.",
            input.fei_safety_factor * 100.0
        )
    } else if is_vortex {
        format!("와류 방출 공진 위험: fvs/fn = {frequency_ratio:.2}")
    } else if is_acoustic {
        format!(
            "음향 공진 위험: 와류 주파수 {fvs:.1} Hz가 음향 주파수 {acoustic_hz:.1} Hz 부근입니다."
        )
    } else if is_buffeting {
        format!("난류 버페팅 가능: 환산유속 {reduced_velocity:.2} > {BUFFETING_REDUCED_VELOCITY}")
    } else {
        format!(
            "진동 위험 없음: 임계 유속 대비 {:.0}%, 주파수비 {frequency_ratio:.2}",
            velocity_ratio * 100.0
        )
    };

    VibrationResult {
        natural_frequency_hz: fn_hz,
        vortex_shedding_frequency_hz: fvs,
        acoustic_frequency_hz: acoustic_hz,
        critical_velocity_m_s: v_crit,
        reduced_velocity,
        frequency_ratio,
        velocity_ratio,
        damage_number,
        effective_mass_kg_m: mass,
        added_mass_coefficient: cm,
        damping_ratio: zeta,
        is_vortex_shedding_risk: is_vortex,
        is_fei_risk: is_fei,
        is_acoustic_risk: is_acoustic,
        is_buffeting_risk: is_buffeting,
        is_vibration_risk: is_vortex || is_fei || is_acoustic || is_buffeting,
        is_valid: !is_vortex && !is_fei,
        message,
        recommendations,
        warnings,
        errors,
    }
}
