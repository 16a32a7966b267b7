use serde::{Deserialize, Serialize};

/// 면적 단위. 내부 기준은 제곱미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    SquareMeter,
    SquareFoot,
    SquareInch,
}

impl AreaUnit {
    fn square_meter_per_unit(self) -> f64 {
        match self {
            AreaUnit::SquareMeter => 1.0,
            AreaUnit::SquareFoot => 0.092_903_04,
            AreaUnit::SquareInch => 6.4516e-4,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            AreaUnit::SquareMeter => "m²",
            AreaUnit::SquareFoot => "ft²",
            AreaUnit::SquareInch => "in²",
        }
    }
}

/// 면적을 변환한다.
pub fn convert_area(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    value * from.square_meter_per_unit() / to.square_meter_per_unit()
}
