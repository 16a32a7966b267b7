use serde::{Deserialize, Serialize};

/// 오염저항(fouling factor) 단위. 내부 기준은 m²·K/W이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoulingUnit {
    SquareMeterKPerW,
    HourSquareFootFPerBtu,
}

impl FoulingUnit {
    fn base_per_unit(self) -> f64 {
        match self {
            FoulingUnit::SquareMeterKPerW => 1.0,
            // 열전달계수 환산의 역수
            FoulingUnit::HourSquareFootFPerBtu => 1.0 / 5.678_263,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            FoulingUnit::SquareMeterKPerW => "m²·K/W",
            FoulingUnit::HourSquareFootFPerBtu => "h·ft²·°F/Btu",
        }
    }
}

/// 오염저항을 변환한다.
pub fn convert_fouling(value: f64, from: FoulingUnit, to: FoulingUnit) -> f64 {
    value * from.base_per_unit() / to.base_per_unit()
}
