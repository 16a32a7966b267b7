use serde::{Deserialize, Serialize};

/// 열전달계수(U, h) 단위. 내부 기준은 W/m²·K이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeatTransferUnit {
    WPerSquareMeterK,
    BtuPerHourSquareFootF,
}

impl HeatTransferUnit {
    fn base_per_unit(self) -> f64 {
        match self {
            HeatTransferUnit::WPerSquareMeterK => 1.0,
            HeatTransferUnit::BtuPerHourSquareFootF => 5.678_263,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            HeatTransferUnit::WPerSquareMeterK => "W/m²·K",
            HeatTransferUnit::BtuPerHourSquareFootF => "Btu/h·ft²·°F",
        }
    }
}

/// 열전달계수를 변환한다.
pub fn convert_heat_transfer(value: f64, from: HeatTransferUnit, to: HeatTransferUnit) -> f64 {
    value * from.base_per_unit() / to.base_per_unit()
}
