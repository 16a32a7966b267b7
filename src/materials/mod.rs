//! 튜브 재료 선정과 NACE MR0175 적합성 검토.
//!
//! 카탈로그의 각 재료를 100점에서 시작해 감점/가점한다.
//! 온도 한계 위반이나 산성 환경의 비등재 재료는 0점으로 제외한다.

pub mod catalog;
pub mod nace;
pub mod wall;

use serde::{Deserialize, Serialize};

pub use catalog::{allowable_stress, find_material, materials, MaterialClass, MaterialData, MaterialValue};
pub use nace::{sour_service_region, NaceAssessment, SOUR_H2S_THRESHOLD_KPA};
pub use wall::{tube_wall_check, TubeWallCheck};

/// 갈바닉 부식 판정 전위차 [V]
pub const GALVANIC_LIMIT_V: f64 = 0.25;
/// 고염화물 환경 기준 [ppm]
const HIGH_CHLORIDE_PPM: f64 = 1_000.0;
/// 오스테나이트계 염화물 SCC 기준
const SCC_CHLORIDE_PPM: f64 = 50.0;
const SCC_TEMP_C: f64 = 60.0;

/// 재료 조회/계산 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum MaterialError {
    UnknownMaterial(String),
    NoStressData(String),
    InvalidInput(String),
}

impl std::fmt::Display for MaterialError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaterialError::UnknownMaterial(code) => write!(f, "알 수 없는 재료 코드: {code}"),
            MaterialError::NoStressData(code) => write!(f, "{code} 허용응력 데이터가 없습니다."),
            MaterialError::InvalidInput(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for MaterialError {}

/// 재료 선정 환경 조건.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialEnvironment {
    /// 최고 설계 온도 [°C]
    pub design_temp_c: f64,
    /// 최저 설계 금속 온도 [°C]. 없으면 설계 온도와 같다.
    #[serde(default)]
    pub min_design_temp_c: Option<f64>,
    /// H₂S 분압 [kPa]
    #[serde(default)]
    pub h2s_partial_pressure_kpa: f64,
    #[serde(default = "default_ph")]
    pub ph: f64,
    #[serde(default)]
    pub chlorides_ppm: f64,
    #[serde(default)]
    pub ammonia_present: bool,
    /// 수소 분압 [kPa]
    #[serde(default)]
    pub hydrogen_partial_pressure_kpa: f64,
    #[serde(default = "default_design_life")]
    pub design_life_years: f64,
    #[serde(default = "default_corrosion_allowance")]
    pub corrosion_allowance_mm: f64,
    /// 쉘/관판 등 접촉 재료 코드
    #[serde(default)]
    pub mating_material: Option<String>,
}

fn default_ph() -> f64 {
    7.0
}

fn default_design_life() -> f64 {
    20.0
}

fn default_corrosion_allowance() -> f64 {
    1.5
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialScore {
    pub code: &'static str,
    pub name: &'static str,
    pub class: MaterialClass,
    pub score: f64,
    pub corrosion_rate_mm_y: f64,
    pub expected_life_years: f64,
    /// 제외 사유 (점수 0)
    pub rejection: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MaterialSelectionResult {
    pub recommended: Option<MaterialScore>,
    pub alternatives: Vec<MaterialScore>,
    /// 전체 후보 (점수 내림차순)
    pub candidates: Vec<MaterialScore>,
    pub corrosion_rate_mm_y: f64,
    pub expected_life_years: f64,
    pub nace: NaceAssessment,
    pub galvanic_risk: bool,
    pub scc_risk: bool,
    pub hydrogen_embrittlement_risk: bool,
    pub message: String,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub is_valid: bool,
}

/// 환경을 반영한 부식속도 [mm/y]
pub fn corrosion_rate(material: &MaterialData, env: &MaterialEnvironment) -> f64 {
    let chloride_factor = match material.class {
        MaterialClass::CarbonSteel | MaterialClass::LowAlloy => (env.chlorides_ppm / 10_000.0).min(2.0),
        MaterialClass::AusteniticStainless if material.pren < 25.0 => {
            (env.chlorides_ppm / 20_000.0).min(2.0)
        }
        _ => 0.0,
    };
    let temp_factor = 1.0 + (env.design_temp_c - 50.0).max(0.0) / 100.0;
    let sour_factor = match material.class {
        MaterialClass::CarbonSteel | MaterialClass::LowAlloy => {
            1.0 + 0.5 * sour_service_region(env.h2s_partial_pressure_kpa, env.ph) as f64
        }
        _ => 1.0,
    };
    material.base_corrosion_mm_y * (1.0 + chloride_factor) * temp_factor * sour_factor
}

/// 단일 재료 점수를 계산한다.
pub fn score_material(material: &'static MaterialData, env: &MaterialEnvironment) -> MaterialScore {
    let rate = corrosion_rate(material, env);
    let expected_life_years = if rate > 0.0 {
        (env.corrosion_allowance_mm / rate).min(100.0)
    } else {
        100.0
    };
    let min_temp = env.min_design_temp_c.unwrap_or(env.design_temp_c);
    let sour = sour_service_region(env.h2s_partial_pressure_kpa, env.ph) > 0;

    let rejection = if env.design_temp_c > material.max_temp_c {
        Some(format!("최고 사용 온도 {:.0}°C 초과", material.max_temp_c))
    } else if min_temp < material.min_temp_c {
        Some(format!("최저 사용 온도 {:.0}°C 미만", material.min_temp_c))
    } else if sour && !material.nace_listed {
        Some("산성 환경에서 NACE MR0175 비등재 재료".to_string())
    } else {
        None
    };

    let score = if rejection.is_some() {
        0.0
    } else {
        let mut score = 100.0;
        if env.corrosion_allowance_mm > 0.0 {
            let consumption = rate * env.design_life_years / env.corrosion_allowance_mm;
            score -= (60.0 * consumption).min(100.0);
        } else if rate > 0.01 {
            score -= 40.0;
        }
        score -= (3.0 * (material.cost_factor - 1.0)).min(30.0);
        if env.chlorides_ppm > HIGH_CHLORIDE_PPM {
            let bonus = if material.class == MaterialClass::Titanium {
                15.0
            } else {
                (material.pren / 3.0).min(15.0)
            };
            score += bonus;
        }
        score.clamp(0.0, 100.0)
    };

    MaterialScore {
        code: material.code,
        name: material.name,
        class: material.class,
        score,
        corrosion_rate_mm_y: rate,
        expected_life_years,
        rejection,
    }
}

fn scc_risk(material: &MaterialData, env: &MaterialEnvironment) -> bool {
    match material.class {
        MaterialClass::AusteniticStainless => {
            env.chlorides_ppm > SCC_CHLORIDE_PPM && env.design_temp_c > SCC_TEMP_C
        }
        MaterialClass::CopperNickel => env.ammonia_present,
        MaterialClass::CarbonSteel | MaterialClass::LowAlloy => {
            sour_service_region(env.h2s_partial_pressure_kpa, env.ph) >= 2
        }
        _ => false,
    }
}

fn hydrogen_embrittlement_risk(material: &MaterialData, env: &MaterialEnvironment) -> bool {
    match material.class {
        MaterialClass::Titanium => env.hydrogen_partial_pressure_kpa > 0.0 && env.design_temp_c > 80.0,
        MaterialClass::CarbonSteel | MaterialClass::LowAlloy => {
            sour_service_region(env.h2s_partial_pressure_kpa, env.ph) > 0
                || (env.hydrogen_partial_pressure_kpa > 700.0 && env.design_temp_c > 200.0)
        }
        MaterialClass::DuplexStainless => env.hydrogen_partial_pressure_kpa > 0.0,
        _ => false,
    }
}

/// 두 재료의 갈바닉 부식 위험 여부 (|ΔE| > 0.25 V)
pub fn galvanic_incompatible(a: &MaterialData, b: &MaterialData) -> bool {
    (a.galvanic_potential_v - b.galvanic_potential_v).abs() > GALVANIC_LIMIT_V
}

/// 환경 조건에 맞는 튜브 재료를 선정한다.
pub fn select_material(env: &MaterialEnvironment) -> MaterialSelectionResult {
    let mut warnings = Vec::new();
    let mut candidates: Vec<MaterialScore> =
        materials().iter().map(|m| score_material(m, env)).collect();
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut positive = candidates.iter().filter(|c| c.score > 0.0);
    let recommended = positive.next().cloned();
    let alternatives: Vec<MaterialScore> = positive.take(3).cloned().collect();

    let recommended_data = recommended.as_ref().and_then(|r| find_material(r.code));
    let nace = nace::assess(env.h2s_partial_pressure_kpa, env.ph, recommended_data);

    let Some(data) = recommended_data else {
        return MaterialSelectionResult {
            candidates,
            nace,
            message: "조건을 만족하는 재료가 없습니다. 재료 전문가와 협의하십시오.".into(),
            errors: vec!["선정 가능한 튜브 재료가 없습니다.".into()],
            is_valid: false,
            ..MaterialSelectionResult::default()
        };
    };

    let mut galvanic_risk = false;
    if let Some(code) = env.mating_material.as_deref() {
        match find_material(code) {
            Some(mating) => {
                galvanic_risk = galvanic_incompatible(data, mating);
                if galvanic_risk {
                    warnings.push(format!(
                        "{}와(과) {} 사이 갈바닉 전위차가 {GALVANIC_LIMIT_V} V를 넘습니다. 절연 또는 희생 양극을 검토하십시오.",
                        data.name, mating.name
                    ));
                }
            }
            None => warnings.push(format!("접촉 재료 {code}을(를) 카탈로그에서 찾을 수 없습니다.")),
        }
    }

    let scc = scc_risk(data, env);
    if scc {
        warnings.push(format!("{}: 응력부식균열(SCC) 위험이 있습니다.", data.name));
    }
    let hydrogen = hydrogen_embrittlement_risk(data, env);
    if hydrogen {
        warnings.push(format!("{}: 수소 취화 위험이 있습니다.", data.name));
    }

    let (rate, life) = recommended
        .as_ref()
        .map(|r| (r.corrosion_rate_mm_y, r.expected_life_years))
        .unwrap_or_default();
    if life < env.design_life_years {
        warnings.push(format!(
            "예상 수명 {life:.1}년이 설계 수명 {:.0}년보다 짧습니다. 부식 여유를 늘리십시오.",
            env.design_life_years
        ));
    }
    let message = format!("권장 재료: {} (부식속도 {rate:.3} mm/y)", data.name);

    MaterialSelectionResult {
        recommended,
        alternatives,
        candidates,
        corrosion_rate_mm_y: rate,
        expected_life_years: life,
        nace,
        galvanic_risk,
        scc_risk: scc,
        hydrogen_embrittlement_risk: hydrogen,
        message,
        warnings,
        errors: Vec::new(),
        is_valid: true,
    }
}
