use serde::{Deserialize, Serialize};

/// 속도 단위. 내부 기준은 m/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VelocityUnit {
    MeterPerSecond,
    FootPerSecond,
}

impl VelocityUnit {
    fn mps_per_unit(self) -> f64 {
        match self {
            VelocityUnit::MeterPerSecond => 1.0,
            VelocityUnit::FootPerSecond => 0.3048,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            VelocityUnit::MeterPerSecond => "m/s",
            VelocityUnit::FootPerSecond => "ft/s",
        }
    }
}

/// 속도를 변환한다.
pub fn convert_velocity(value: f64, from: VelocityUnit, to: VelocityUnit) -> f64 {
    value * from.mps_per_unit() / to.mps_per_unit()
}
