//! 유체 물성 라이브러리.
//!
//! 기준 온도의 물성에 온도 보정식을 적용해 운전 온도의 물성을 만든다.
//! - 밀도(액체)/비열/열전도율: `P(T) = P_ref·(1 + B·ΔT/1000)`
//! - 점도: Andrade형 `μ(T) = A·exp(B/(T + C))` (T는 K)
//! - 기체 밀도: 기준 상태에서 이상기체 비례식으로 보정
//!
//! 온도는 유체별 유효 범위로 클램프하며, 클램프 여부와 경고 문구를 함께 돌려준다.

mod catalog;
pub mod water;

use serde::{Deserialize, Serialize};

pub use catalog::{definition, fluid_definitions};

/// 범용 기체상수 [J/(kmol·K)]
pub const UNIVERSAL_GAS_CONSTANT: f64 = 8_314.462;
/// 기체 물성 기준 압력 [Pa abs]
pub const REFERENCE_PRESSURE_PA: f64 = 101_325.0;

/// 라이브러리에 정의된 유체 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FluidType {
    Water,
    SeaWater,
    EthyleneGlycol50,
    ThermalOil,
    CrudeOil,
    LightHydrocarbon,
    Air,
    NaturalGas,
    Nitrogen,
    Steam,
    /// 알 수 없는 유체에 쓰는 일반 액체 정의
    Custom,
}

impl FluidType {
    /// 이름 문자열로 유체를 찾는다. 알 수 없는 이름은 `Custom`으로 처리한다.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().replace(['-', ' '], "_").as_str() {
            "water" | "cooling_water" => FluidType::Water,
            "sea_water" | "seawater" => FluidType::SeaWater,
            "ethylene_glycol_50" | "glycol" | "eg50" => FluidType::EthyleneGlycol50,
            "thermal_oil" | "hot_oil" => FluidType::ThermalOil,
            "crude_oil" | "crude" => FluidType::CrudeOil,
            "light_hydrocarbon" | "diesel" | "kerosene" => FluidType::LightHydrocarbon,
            "air" => FluidType::Air,
            "natural_gas" | "methane" => FluidType::NaturalGas,
            "nitrogen" | "n2" => FluidType::Nitrogen,
            "steam" => FluidType::Steam,
            _ => FluidType::Custom,
        }
    }

    pub fn name(self) -> &'static str {
        definition(self).name
    }

    pub fn phase(self) -> FluidPhase {
        definition(self).phase
    }
}

/// 물성 모델이 가정하는 상.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FluidPhase {
    Liquid,
    Gas,
}

/// Andrade형 점도식 계수. `μ = a·exp(b/(T_K + c))` [Pa·s]
#[derive(Debug, Clone, Copy)]
pub struct AndradeCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl AndradeCoefficients {
    pub fn viscosity_at(&self, temp_k: f64) -> f64 {
        self.a * (self.b / (temp_k + self.c)).exp()
    }
}

/// 유체 정의. 정적 표로만 존재하며 변경되지 않는다.
#[derive(Debug)]
pub struct FluidDefinition {
    pub fluid: FluidType,
    pub name: &'static str,
    pub phase: FluidPhase,
    pub reference_temp_c: f64,
    pub density_kg_m3: f64,
    /// 액체 밀도 온도계수 B (기체는 이상기체 보정을 쓰므로 사용하지 않음)
    pub density_coeff: f64,
    pub specific_heat_j_kgk: f64,
    pub specific_heat_coeff: f64,
    pub thermal_conductivity_w_mk: f64,
    pub conductivity_coeff: f64,
    pub viscosity: AndradeCoefficients,
    pub min_temp_c: f64,
    pub max_temp_c: f64,
    pub molecular_weight: Option<f64>,
    pub gamma: Option<f64>,
    pub bulk_modulus_pa: Option<f64>,
    pub critical_temp_k: Option<f64>,
    pub critical_pressure_pa: Option<f64>,
}

/// 특정 온도에서 계산된 유체 물성 (모두 SI).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FluidProperties {
    pub phase: FluidPhase,
    /// 밀도 [kg/m³]
    pub density: f64,
    /// 동점도(dynamic viscosity) [Pa·s]
    pub viscosity: f64,
    /// 정압비열 [J/(kg·K)]
    pub specific_heat: f64,
    /// 열전도율 [W/(m·K)]
    pub thermal_conductivity: f64,
    pub molecular_weight: Option<f64>,
    pub gamma: Option<f64>,
    pub bulk_modulus: Option<f64>,
    pub critical_temp_k: Option<f64>,
    pub critical_pressure_pa: Option<f64>,
}

impl FluidProperties {
    /// 프란틀 수 Pr = μ·Cp/k
    pub fn prandtl(&self) -> f64 {
        self.viscosity * self.specific_heat / self.thermal_conductivity
    }

    /// 동점성계수 ν = μ/ρ [m²/s]
    pub fn kinematic_viscosity(&self) -> f64 {
        self.viscosity / self.density
    }
}

/// 물성 조회 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FluidPropertyValue {
    pub properties: FluidProperties,
    /// 실제로 물성을 평가한 온도(°C). 클램프되면 범위 경계값이다.
    pub source_temp_c: f64,
    /// true면 요청 온도가 유효 범위 밖이라 가장자리 값으로 클램프됨을 의미한다.
    pub clamped: bool,
    pub warning: Option<String>,
}

fn linear_adjust(reference: f64, coeff: f64, delta_t: f64) -> f64 {
    reference * (1.0 + coeff * delta_t / 1000.0)
}

/// 기준 압력(1 atm)에서 유체 물성을 계산한다.
pub fn properties_at(fluid: FluidType, temp_c: f64) -> FluidPropertyValue {
    let def = definition(fluid);
    let t = temp_c.clamp(def.min_temp_c, def.max_temp_c);
    let clamped = (t - temp_c).abs() > f64::EPSILON;
    let delta_t = t - def.reference_temp_c;
    let temp_k = t + 273.15;

    let density = match def.phase {
        FluidPhase::Liquid => linear_adjust(def.density_kg_m3, def.density_coeff, delta_t),
        FluidPhase::Gas => def.density_kg_m3 * (def.reference_temp_c + 273.15) / temp_k,
    };

    let properties = FluidProperties {
        phase: def.phase,
        density,
        viscosity: def.viscosity.viscosity_at(temp_k),
        specific_heat: linear_adjust(def.specific_heat_j_kgk, def.specific_heat_coeff, delta_t),
        thermal_conductivity: linear_adjust(
            def.thermal_conductivity_w_mk,
            def.conductivity_coeff,
            delta_t,
        ),
        molecular_weight: def.molecular_weight,
        gamma: def.gamma,
        bulk_modulus: def.bulk_modulus_pa,
        critical_temp_k: def.critical_temp_k,
        critical_pressure_pa: def.critical_pressure_pa,
    };

    let warning = clamped.then(|| {
        format!(
            "{} 물성: 요청 온도 {:.1}°C가 유효 범위({:.0}~{:.0}°C) 밖이라 {:.1}°C 값으로 계산했습니다.",
            def.name, temp_c, def.min_temp_c, def.max_temp_c, t
        )
    });

    FluidPropertyValue {
        properties,
        source_temp_c: t,
        clamped,
        warning,
    }
}

/// 운전 압력을 반영해 물성을 계산한다. 기체 밀도만 압력에 비례해 보정한다.
pub fn properties_at_pressure(fluid: FluidType, temp_c: f64, pressure_pa: f64) -> FluidPropertyValue {
    let mut value = properties_at(fluid, temp_c);
    if value.properties.phase == FluidPhase::Gas && pressure_pa > 0.0 {
        value.properties.density *= pressure_pa / REFERENCE_PRESSURE_PA;
    }
    value
}

/// 유체의 음속 [m/s].
///
/// 기체는 `c = √(γRT/M)`, 액체는 Newton-Laplace 식 `c = √(K/ρ)`를 쓴다.
pub fn speed_of_sound(fluid: FluidType, temp_c: f64) -> f64 {
    let value = properties_at(fluid, temp_c);
    speed_of_sound_for(&value.properties, value.source_temp_c)
}

/// 이미 계산된 물성으로부터 음속을 구한다. 필요한 물성이 없으면 0을 돌려준다.
pub fn speed_of_sound_for(props: &FluidProperties, temp_c: f64) -> f64 {
    match props.phase {
        FluidPhase::Gas => match (props.gamma, props.molecular_weight) {
            (Some(gamma), Some(mw)) if mw > 0.0 => {
                (gamma * UNIVERSAL_GAS_CONSTANT * (temp_c + 273.15) / mw).sqrt()
            }
            _ => 0.0,
        },
        FluidPhase::Liquid => match props.bulk_modulus {
            Some(k) if props.density > 0.0 => (k / props.density).sqrt(),
            _ => 0.0,
        },
    }
}
