//! 공정 유체 조건 입력.

use serde::{Deserialize, Serialize};

use crate::fluids::{self, FluidPhase, FluidProperties, FluidPropertyValue, FluidType};

/// 유체 상태 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamPhase {
    Liquid,
    Gas,
    TwoPhase,
    Supercritical,
}

/// 진동/배플 판단에 쓰는 서비스 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Liquid,
    Gas,
    TwoPhase,
}

impl From<StreamPhase> for ServiceType {
    fn from(phase: StreamPhase) -> Self {
        match phase {
            StreamPhase::Liquid => ServiceType::Liquid,
            // 초임계 유체는 밀도가 낮아 기체 기준으로 판단한다.
            StreamPhase::Gas | StreamPhase::Supercritical => ServiceType::Gas,
            StreamPhase::TwoPhase => ServiceType::TwoPhase,
        }
    }
}

/// 한쪽 유체(고온 또는 저온)의 공정 조건. 단위는 모두 SI(압력은 절대압 Pa).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessStream {
    pub fluid: FluidType,
    pub mass_flow_kg_s: f64,
    pub inlet_temp_c: f64,
    pub outlet_temp_c: f64,
    pub pressure_pa: f64,
    /// 없으면 유체 정의의 상을 따른다.
    #[serde(default)]
    pub phase: Option<StreamPhase>,
    /// 허용 압력강하 [Pa]
    #[serde(default)]
    pub allowable_dp_pa: Option<f64>,
    /// 오염계수 [m²·K/W]
    #[serde(default)]
    pub fouling_m2k_w: f64,
    /// 사용자 지정 물성. 있으면 물성 라이브러리 대신 사용한다.
    #[serde(default)]
    pub properties: Option<FluidProperties>,
}

/// 유체 조건 검증 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamError {
    NegativeFlow(f64),
    NonPositivePressure(f64),
    NegativeFouling(f64),
    NotFinite(&'static str),
    /// 사용자 지정 물성이 0 이하
    NonPositiveProperty(&'static str),
}

impl std::fmt::Display for StreamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StreamError::NegativeFlow(v) => write!(f, "유량 {v} kg/s는 음수일 수 없습니다."),
            StreamError::NonPositivePressure(v) => {
                write!(f, "압력 {v} Pa(abs)은 0보다 커야 합니다.")
            }
            StreamError::NegativeFouling(v) => write!(f, "오염계수 {v}는 음수일 수 없습니다."),
            StreamError::NotFinite(name) => write!(f, "{name} 값이 유효한 숫자가 아닙니다."),
            StreamError::NonPositiveProperty(name) => {
                write!(f, "사용자 지정 {name}은(는) 0보다 커야 합니다.")
            }
        }
    }
}

impl std::error::Error for StreamError {}

impl ProcessStream {
    pub fn mean_temp_c(&self) -> f64 {
        0.5 * (self.inlet_temp_c + self.outlet_temp_c)
    }

    pub fn phase(&self) -> StreamPhase {
        self.phase.unwrap_or(match self.fluid.phase() {
            FluidPhase::Liquid => StreamPhase::Liquid,
            FluidPhase::Gas => StreamPhase::Gas,
        })
    }

    pub fn service(&self) -> ServiceType {
        self.phase().into()
    }

    pub fn validate(&self) -> Vec<StreamError> {
        let mut errors = Vec::new();
        let values = [
            ("유량", self.mass_flow_kg_s),
            ("입구 온도", self.inlet_temp_c),
            ("출구 온도", self.outlet_temp_c),
            ("압력", self.pressure_pa),
        ];
        for (name, value) in values {
            if !value.is_finite() {
                errors.push(StreamError::NotFinite(name));
            }
        }
        if self.mass_flow_kg_s < 0.0 {
            errors.push(StreamError::NegativeFlow(self.mass_flow_kg_s));
        }
        if self.pressure_pa <= 0.0 {
            errors.push(StreamError::NonPositivePressure(self.pressure_pa));
        }
        if self.fouling_m2k_w < 0.0 {
            errors.push(StreamError::NegativeFouling(self.fouling_m2k_w));
        }
        if let Some(p) = &self.properties {
            let required = [
                ("밀도", p.density),
                ("점도", p.viscosity),
                ("비열", p.specific_heat),
                ("열전도율", p.thermal_conductivity),
            ];
            for (name, value) in required {
                if !(value > 0.0) {
                    errors.push(StreamError::NonPositiveProperty(name));
                }
            }
        }
        errors
    }

    /// 주어진 온도에서의 물성. 사용자 지정 물성이 있으면 그대로 쓴다.
    pub fn properties_at(&self, temp_c: f64) -> FluidPropertyValue {
        match self.properties {
            Some(properties) => FluidPropertyValue {
                properties,
                source_temp_c: temp_c,
                clamped: false,
                warning: None,
            },
            None => fluids::properties_at_pressure(self.fluid, temp_c, self.pressure_pa),
        }
    }

    /// 평균 온도에서의 물성
    pub fn mean_properties(&self) -> FluidPropertyValue {
        self.properties_at(self.mean_temp_c())
    }
}

/// 고온 유체가 흐르는 쪽.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FluidSide {
    #[default]
    Shell,
    Tube,
}

/// 유동 배열.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowArrangement {
    CounterFlow,
    ParallelFlow,
    /// 쉘 1패스, 튜브 2패스
    #[default]
    ShellTube12,
    /// 쉘 1패스, 튜브 4패스
    ShellTube14,
    /// 양쪽 비혼합 직교류
    CrossFlow,
}

/// 쉘측 계산 방법.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShellSideMethod {
    #[default]
    BellDelaware,
    Kern,
}

/// 열교환기 공정 조건.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessConditions {
    pub hot: ProcessStream,
    pub cold: ProcessStream,
    #[serde(default)]
    pub hot_side: FluidSide,
    #[serde(default)]
    pub arrangement: FlowArrangement,
    #[serde(default)]
    pub shell_method: ShellSideMethod,
}

impl ProcessConditions {
    pub fn shell_stream(&self) -> &ProcessStream {
        match self.hot_side {
            FluidSide::Shell => &self.hot,
            FluidSide::Tube => &self.cold,
        }
    }

    pub fn tube_stream(&self) -> &ProcessStream {
        match self.hot_side {
            FluidSide::Shell => &self.cold,
            FluidSide::Tube => &self.hot,
        }
    }

    /// 관내 유체가 가열되는지 여부 (Dittus-Boelter 지수 선택)
    pub fn tube_fluid_heated(&self) -> bool {
        self.hot_side == FluidSide::Shell
    }
}
