use serde::{Deserialize, Serialize};

/// 열전도율 단위. 내부 기준은 W/m·K이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConductivityUnit {
    WPerMeterK,
    BtuPerHourFootF,
}

impl ConductivityUnit {
    fn base_per_unit(self) -> f64 {
        match self {
            ConductivityUnit::WPerMeterK => 1.0,
            ConductivityUnit::BtuPerHourFootF => 1.730_735,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ConductivityUnit::WPerMeterK => "W/m·K",
            ConductivityUnit::BtuPerHourFootF => "Btu/h·ft·°F",
        }
    }
}

/// 열전도율을 변환한다.
pub fn convert_conductivity(value: f64, from: ConductivityUnit, to: ConductivityUnit) -> f64 {
    value * from.base_per_unit() / to.base_per_unit()
}
