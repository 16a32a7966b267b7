use serde::{Deserialize, Serialize};

/// 열량(동력) 단위. 내부 기준은 W이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Watt,
    Kilowatt,
    Megawatt,
    BtuPerHour,
    MmBtuPerHour,
    Horsepower,
}

impl PowerUnit {
    fn watt_per_unit(self) -> f64 {
        match self {
            PowerUnit::Watt => 1.0,
            PowerUnit::Kilowatt => 1.0e3,
            PowerUnit::Megawatt => 1.0e6,
            PowerUnit::BtuPerHour => 0.293_071_1,
            PowerUnit::MmBtuPerHour => 293_071.1,
            PowerUnit::Horsepower => 745.699_9,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            PowerUnit::Watt => "W",
            PowerUnit::Kilowatt => "kW",
            PowerUnit::Megawatt => "MW",
            PowerUnit::BtuPerHour => "Btu/h",
            PowerUnit::MmBtuPerHour => "MMBtu/h",
            PowerUnit::Horsepower => "hp",
        }
    }
}

/// 열량을 변환한다.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    value * from.watt_per_unit() / to.watt_per_unit()
}
