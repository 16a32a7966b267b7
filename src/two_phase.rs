//! 2상 유동 영역 분류와 압력강하 (Lockhart-Martinelli / Chisholm).
//!
//! 단열 유동을 가정하므로 가속 항은 0이다.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::fluids::{water, FluidType};

const GRAVITY: f64 = 9.80665;
/// 수평으로 보는 경사각 [deg]
const HORIZONTAL_LIMIT_DEG: f64 = 10.0;
/// 증발 위험 판정: 포화온도와의 여유 [K], 저압 기준 [Pa]
const FLASHING_MARGIN_K: f64 = 5.0;
const FLASHING_PRESSURE_LIMIT_PA: f64 = 5.0e5;
/// Ledinegg 판정 기준
const LEDINEGG_PRESSURE_DENSITY_RATIO: f64 = 5.0e3;
const LEDINEGG_VELOCITY_LIMIT: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoPhaseInput {
    pub liquid_mass_flow_kg_s: f64,
    pub gas_mass_flow_kg_s: f64,
    pub liquid_density_kg_m3: f64,
    pub gas_density_kg_m3: f64,
    pub liquid_viscosity_pa_s: f64,
    pub gas_viscosity_pa_s: f64,
    /// 표면장력 [N/m]
    pub surface_tension_n_m: f64,
    pub pipe_diameter_m: f64,
    pub length_m: f64,
    /// 경사각 [deg]. 양수는 상향류.
    #[serde(default)]
    pub inclination_deg: f64,
    /// 운전 압력 [Pa abs]
    pub pressure_pa: f64,
    pub temperature_c: f64,
    /// 포화온도 [°C]. 없고 유체가 물/증기면 IF97로 구한다.
    #[serde(default)]
    pub saturation_temp_c: Option<f64>,
    #[serde(default)]
    pub fluid: Option<FluidType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowPattern {
    Stratified,
    StratifiedWavy,
    Slug,
    Churn,
    #[default]
    Bubble,
    DispersedBubble,
    Annular,
    Mist,
}

impl FlowPattern {
    /// Chisholm C 상수
    pub fn chisholm_c(self) -> f64 {
        match self {
            FlowPattern::Stratified => 5.0,
            FlowPattern::StratifiedWavy => 10.0,
            FlowPattern::Slug | FlowPattern::Bubble => 12.0,
            FlowPattern::Churn => 15.0,
            FlowPattern::DispersedBubble | FlowPattern::Annular | FlowPattern::Mist => 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InstabilityType {
    SlugOscillation,
    Ledinegg,
    Flashing,
    ChurnOscillation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InstabilitySeverity {
    #[default]
    None,
    Moderate,
    High,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TwoPhasePressureDrop {
    pub frictional_pa: f64,
    pub gravitational_pa: f64,
    /// 단열 가정으로 0
    pub acceleration_pa: f64,
    pub total_pa: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TwoPhaseResult {
    pub flow_pattern: FlowPattern,
    pub void_fraction: f64,
    pub liquid_holdup: f64,
    pub liquid_superficial_velocity_m_s: f64,
    pub gas_superficial_velocity_m_s: f64,
    pub mixture_velocity_m_s: f64,
    pub mixture_density_kg_m3: f64,
    pub froude_number: f64,
    pub weber_number: f64,
    pub lockhart_martinelli_x: f64,
    pub chisholm_c: f64,
    /// 액상 기준 2상 마찰 승수 φL²
    pub friction_multiplier: f64,
    pub pressure_drop: TwoPhasePressureDrop,
    pub is_unstable: bool,
    pub instability_type: Option<InstabilityType>,
    pub instabilities: Vec<InstabilityType>,
    pub severity: InstabilitySeverity,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub is_valid: bool,
}

/// 단상 Fanning 마찰계수. Re < 2300은 층류, 그 이상은 Blasius.
fn single_phase_fanning(reynolds: f64) -> f64 {
    if reynolds <= 0.0 {
        0.0
    } else if reynolds < 2_300.0 {
        16.0 / reynolds
    } else {
        0.079 * reynolds.powf(-0.25)
    }
}

/// 단상 마찰 압력구배 [Pa/m]
fn friction_gradient(density: f64, velocity: f64, viscosity: f64, diameter: f64) -> f64 {
    let reynolds = density * velocity * diameter / viscosity;
    2.0 * single_phase_fanning(reynolds) * density * velocity * velocity / diameter
}

/// Chisholm 보이드율 α = 1/(1 + 0.28·X^0.71)
pub fn chisholm_void_fraction(x: f64) -> f64 {
    1.0 / (1.0 + 0.28 * x.max(0.0).powf(0.71))
}

/// Chisholm 2상 승수 φL² = 1 + C/X + 1/X²
pub fn two_phase_multiplier(x: f64, c: f64) -> f64 {
    if x <= 0.0 {
        return 1.0;
    }
    1.0 + c / x + 1.0 / (x * x)
}

/// 유동 영역 판정에 쓰는 무차원수.
#[derive(Debug, Clone, Copy)]
pub struct PatternGroups {
    pub liquid_superficial_velocity: f64,
    pub gas_superficial_velocity: f64,
    /// 혼합 Froude 수 Um/√(gD)
    pub froude: f64,
    /// Taitel-Dukler 수정 기체 Froude 수
    pub gas_froude: f64,
    /// ρL·Um²·D/σ
    pub weber: f64,
    pub void_fraction: f64,
    /// Taitel 환상류 기체 겉보기 유속 기준 [m/s]
    pub annular_gas_velocity: f64,
    pub inclination_deg: f64,
}

/// 경사 방향별 결정 트리로 유동 영역을 분류한다.
pub fn classify_pattern(g: &PatternGroups) -> FlowPattern {
    let um = g.liquid_superficial_velocity + g.gas_superficial_velocity;
    let liquid_fraction = if um > 0.0 {
        g.liquid_superficial_velocity / um
    } else {
        0.0
    };
    if liquid_fraction < 0.01 && g.gas_froude > 1.5 {
        return FlowPattern::Mist;
    }

    if g.inclination_deg.abs() <= HORIZONTAL_LIMIT_DEG {
        if g.gas_froude > 1.0 && g.void_fraction > 0.75 {
            FlowPattern::Annular
        } else if g.weber > 1_000.0 && g.void_fraction < 0.3 {
            FlowPattern::DispersedBubble
        } else if g.froude < 1.0 {
            if g.gas_froude < 0.2 {
                FlowPattern::Stratified
            } else {
                FlowPattern::StratifiedWavy
            }
        } else if g.void_fraction < 0.25 {
            FlowPattern::Bubble
        } else {
            FlowPattern::Slug
        }
    } else if g.inclination_deg > 0.0 {
        if g.gas_superficial_velocity >= g.annular_gas_velocity {
            FlowPattern::Annular
        } else if g.weber > 1_000.0 && g.void_fraction < 0.52 {
            FlowPattern::DispersedBubble
        } else if g.void_fraction < 0.25 {
            FlowPattern::Bubble
        } else if g.void_fraction > 0.6 {
            FlowPattern::Churn
        } else {
            FlowPattern::Slug
        }
    } else if g.gas_superficial_velocity >= g.annular_gas_velocity || g.void_fraction > 0.75 {
        FlowPattern::Annular
    } else if g.weber > 1_000.0 && g.void_fraction < 0.3 {
        FlowPattern::DispersedBubble
    } else if g.froude < 0.5 {
        FlowPattern::Stratified
    } else if g.void_fraction < 0.25 {
        FlowPattern::Bubble
    } else {
        FlowPattern::Slug
    }
}

fn saturation_temperature(input: &TwoPhaseInput) -> Option<f64> {
    input.saturation_temp_c.or_else(|| match input.fluid {
        Some(FluidType::Water | FluidType::Steam) => {
            water::saturation_temperature_c(input.pressure_pa).ok()
        }
        _ => None,
    })
}

fn invalid(errors: Vec<String>) -> TwoPhaseResult {
    TwoPhaseResult {
        errors,
        is_valid: false,
        ..TwoPhaseResult::default()
    }
}

/// 2상 유동을 분류하고 압력강하와 불안정성을 평가한다.
pub fn classify(input: &TwoPhaseInput) -> TwoPhaseResult {
    let mut errors = Vec::new();
    let positives = [
        ("배관 내경", input.pipe_diameter_m),
        ("액체 밀도", input.liquid_density_kg_m3),
        ("기체 밀도", input.gas_density_kg_m3),
        ("액체 점도", input.liquid_viscosity_pa_s),
        ("기체 점도", input.gas_viscosity_pa_s),
        ("표면장력", input.surface_tension_n_m),
        ("압력", input.pressure_pa),
    ];
    for (name, value) in positives {
        if !(value > 0.0) {
            errors.push(format!("{name}은(는) 0보다 커야 합니다."));
        }
    }
    if input.length_m < 0.0 {
        errors.push("배관 길이는 음수일 수 없습니다.".into());
    }
    let liquid = input.liquid_mass_flow_kg_s.max(0.0);
    let gas = input.gas_mass_flow_kg_s.max(0.0);
    if liquid <= 0.0 && gas <= 0.0 {
        errors.push("액체와 기체 유량이 모두 0입니다.".into());
    }
    if !errors.is_empty() {
        return invalid(errors);
    }

    let mut warnings = Vec::new();
    let d = input.pipe_diameter_m;
    let area = PI / 4.0 * d * d;
    let rho_l = input.liquid_density_kg_m3;
    let rho_g = input.gas_density_kg_m3;
    let usl = liquid / (rho_l * area);
    let usg = gas / (rho_g * area);
    let um = usl + usg;

    let dp_l = friction_gradient(rho_l, usl, input.liquid_viscosity_pa_s, d);
    let dp_g = friction_gradient(rho_g, usg, input.gas_viscosity_pa_s, d);

    // 단상 퇴화 조건
    let (x, void_fraction, pattern) = if gas <= 0.0 {
        warnings.push("기체 유량이 0이라 단상 액체 퇴화 조건(X = 0, α = 1, 기포류)으로 처리했습니다.".into());
        (0.0, 1.0, Some(FlowPattern::Bubble))
    } else if liquid <= 0.0 {
        warnings.push("액체 유량이 0이라 단상 기체(분무류)로 처리했습니다.".into());
        (0.0, 1.0, Some(FlowPattern::Mist))
    } else {
        let x = if dp_g > 0.0 { (dp_l / dp_g).sqrt() } else { 0.0 };
        (x, chisholm_void_fraction(x), None)
    };

    let density_diff = (rho_l - rho_g).max(1e-9);
    let froude = um / (GRAVITY * d).sqrt();
    let gas_froude = usg / (GRAVITY * d).sqrt() * (rho_g / density_diff).sqrt();
    let weber = rho_l * um * um * d / input.surface_tension_n_m;
    let annular_gas_velocity =
        3.1 * (input.surface_tension_n_m * GRAVITY * density_diff).powf(0.25) / rho_g.sqrt();

    let flow_pattern = pattern.unwrap_or_else(|| {
        classify_pattern(&PatternGroups {
            liquid_superficial_velocity: usl,
            gas_superficial_velocity: usg,
            froude,
            gas_froude,
            weber,
            void_fraction,
            annular_gas_velocity,
            inclination_deg: input.inclination_deg,
        })
    });

    // 압력강하
    let sin_theta = input.inclination_deg.to_radians().sin();
    let chisholm_c = flow_pattern.chisholm_c();
    let (friction_multiplier, frictional_pa, mixture_density) = if gas <= 0.0 {
        (1.0, dp_l * input.length_m, rho_l)
    } else if liquid <= 0.0 {
        (1.0, dp_g * input.length_m, rho_g)
    } else {
        let phi2 = two_phase_multiplier(x, chisholm_c);
        let rho_m = void_fraction * rho_g + (1.0 - void_fraction) * rho_l;
        (phi2, dp_l * phi2 * input.length_m, rho_m)
    };
    let gravitational_pa = mixture_density * GRAVITY * input.length_m * sin_theta;
    let pressure_drop = TwoPhasePressureDrop {
        frictional_pa,
        gravitational_pa,
        acceleration_pa: 0.0,
        total_pa: frictional_pa + gravitational_pa,
    };

    // 불안정성
    let mut instabilities = Vec::new();
    if flow_pattern == FlowPattern::Slug {
        instabilities.push(InstabilityType::SlugOscillation);
    }
    if input.pressure_pa / mixture_density > LEDINEGG_PRESSURE_DENSITY_RATIO
        && um < LEDINEGG_VELOCITY_LIMIT
    {
        instabilities.push(InstabilityType::Ledinegg);
    }
    match saturation_temperature(input) {
        Some(tsat) => {
            if input.temperature_c >= tsat - FLASHING_MARGIN_K
                && input.pressure_pa < FLASHING_PRESSURE_LIMIT_PA
            {
                instabilities.push(InstabilityType::Flashing);
            }
        }
        None => warnings.push("포화온도를 알 수 없어 플래싱 검토를 생략했습니다.".into()),
    }
    if flow_pattern == FlowPattern::Churn {
        instabilities.push(InstabilityType::ChurnOscillation);
    }
    let severity = match instabilities.len() {
        0 => InstabilitySeverity::None,
        1 => InstabilitySeverity::Moderate,
        _ => InstabilitySeverity::High,
    };

    TwoPhaseResult {
        flow_pattern,
        void_fraction,
        liquid_holdup: 1.0 - void_fraction,
        liquid_superficial_velocity_m_s: usl,
        gas_superficial_velocity_m_s: usg,
        mixture_velocity_m_s: um,
        mixture_density_kg_m3: mixture_density,
        froude_number: froude,
        weber_number: weber,
        lockhart_martinelli_x: x,
        chisholm_c,
        friction_multiplier,
        pressure_drop,
        is_unstable: !instabilities.is_empty(),
        instability_type: instabilities.first().copied(),
        instabilities,
        severity,
        warnings,
        errors,
        is_valid: true,
    }
}
