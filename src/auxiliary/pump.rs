use serde::{Deserialize, Serialize};

use crate::fluids::{water, FluidType};

const G: f64 = 9.80665;
/// NPSH 여유비 경고 기준
const NPSH_MARGIN_LIMIT: f64 = 1.1;

/// 펌프 NPSH/동력 계산 입력. 압력은 절대압 Pa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PumpInput {
    pub fluid: FluidType,
    /// 흡입 측 압력 [Pa abs]
    pub suction_pressure_pa: f64,
    /// 토출 측 압력 [Pa abs]
    pub discharge_pressure_pa: f64,
    pub liquid_temp_c: f64,
    /// 액면에서 펌프 중심까지 높이 [m] (+ 압입, - 흡상)
    pub static_head_m: f64,
    /// 흡입 배관 마찰손실 [m]
    #[serde(default)]
    pub suction_friction_loss_m: f64,
    /// 요구 NPSH (제조사 값) [m]
    pub npshr_m: f64,
    /// 체적 유량 [m³/h]
    pub flow_m3_per_h: f64,
    /// 펌프 효율 (0~1)
    #[serde(default = "default_efficiency")]
    pub efficiency: f64,
    /// 유체 밀도 [kg/m³]. 없으면 물은 IF97, 그 외는 물성 라이브러리 값을 쓴다.
    #[serde(default)]
    pub density_kg_m3: Option<f64>,
    /// 증기압 [Pa abs]. 물이 아니면 필수.
    #[serde(default)]
    pub vapor_pressure_pa: Option<f64>,
}

fn default_efficiency() -> f64 {
    0.75
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PumpResult {
    pub npsha_m: f64,
    /// NPSHa / NPSHr
    pub margin_ratio: f64,
    pub vapor_pressure_pa: f64,
    pub density_kg_m3: f64,
    pub differential_head_m: f64,
    pub hydraulic_power_w: f64,
    pub shaft_power_w: f64,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub is_valid: bool,
}

fn water_like(fluid: FluidType) -> bool {
    matches!(fluid, FluidType::Water | FluidType::Steam)
}

/// 펌프 NPSH와 동력을 계산한다.
pub fn compute_pump(input: &PumpInput) -> PumpResult {
    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    let density = match input.density_kg_m3 {
        Some(rho) => rho,
        None if water_like(input.fluid) => {
            water::density_kg_m3(input.suction_pressure_pa, input.liquid_temp_c).unwrap_or_else(|| {
                warnings.push("IF97 밀도 계산에 실패해 물성 라이브러리 값을 사용했습니다.".into());
                crate::fluids::properties_at(input.fluid, input.liquid_temp_c).properties.density
            })
        }
        None => {
            let value = crate::fluids::properties_at(input.fluid, input.liquid_temp_c);
            warnings.extend(value.warning);
            value.properties.density
        }
    };
    let vapor_pressure = match input.vapor_pressure_pa {
        Some(pv) => Some(pv),
        None if water_like(input.fluid) => match water::saturation_pressure_pa(input.liquid_temp_c) {
            Ok(pv) => Some(pv),
            Err(e) => {
                errors.push(e.to_string());
                None
            }
        },
        None => {
            errors.push(format!("{} 증기압을 입력해야 합니다.", input.fluid.name()));
            None
        }
    };
    if !(density > 0.0) {
        errors.push("유체 밀도가 0 이하입니다.".into());
    }
    if input.suction_pressure_pa <= 0.0 {
        errors.push("흡입 압력(abs)은 0보다 커야 합니다.".into());
    }
    let Some(pv) = vapor_pressure.filter(|_| errors.is_empty()) else {
        return PumpResult {
            warnings,
            errors,
            ..PumpResult::default()
        };
    };

    // 압력차를 수두로 환산
    let head_from_pressure = (input.suction_pressure_pa - pv) / (density * G);
    let npsha_m = head_from_pressure + input.static_head_m - input.suction_friction_loss_m;
    let margin_ratio = if input.npshr_m > 0.0 {
        npsha_m / input.npshr_m
    } else {
        f64::INFINITY
    };
    if margin_ratio < NPSH_MARGIN_LIMIT {
        warnings.push(format!(
            "NPSH 여유비 {margin_ratio:.2} (<{NPSH_MARGIN_LIMIT}). 공동현상 위험."
        ));
    }

    let differential_head_m =
        (input.discharge_pressure_pa - input.suction_pressure_pa) / (density * G);
    let flow_m3_s = input.flow_m3_per_h / 3600.0;
    let hydraulic_power_w = density * G * flow_m3_s * differential_head_m;
    let efficiency = input.efficiency.clamp(0.05, 1.0);
    if (input.efficiency - efficiency).abs() > f64::EPSILON {
        warnings.push(format!("펌프 효율 {}을(를) {efficiency}로 보정했습니다.", input.efficiency));
    }

    PumpResult {
        npsha_m,
        margin_ratio,
        vapor_pressure_pa: pv,
        density_kg_m3: density,
        differential_head_m,
        hydraulic_power_w,
        shaft_power_w: hydraulic_power_w / efficiency,
        warnings,
        errors,
        is_valid: true,
    }
}
