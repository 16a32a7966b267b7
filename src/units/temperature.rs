use serde::{Deserialize, Serialize};

/// 온도 단위를 정의한다. 내부 기준은 켈빈이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
    Rankine,
}

impl TemperatureUnit {
    /// 표시용 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Rankine => "°R",
        }
    }
}

/// 온도차 단위를 정의한다. 스케일만 고려한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureDiffUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
    Rankine,
}

impl TemperatureDiffUnit {
    /// 표시용 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureDiffUnit::Kelvin => "K",
            TemperatureDiffUnit::Celsius => "°C",
            TemperatureDiffUnit::Fahrenheit => "°F",
            TemperatureDiffUnit::Rankine => "°R",
        }
    }

    fn kelvin_per_unit(self) -> f64 {
        match self {
            TemperatureDiffUnit::Kelvin | TemperatureDiffUnit::Celsius => 1.0,
            TemperatureDiffUnit::Fahrenheit | TemperatureDiffUnit::Rankine => 5.0 / 9.0,
        }
    }
}

/// 주어진 온도를 켈빈으로 변환한다.
pub fn to_kelvin(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value,
        TemperatureUnit::Celsius => value + 273.15,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0 + 273.15,
        TemperatureUnit::Rankine => value * 5.0 / 9.0,
    }
}

/// 켈빈 값을 원하는 단위로 되돌린다.
pub fn from_kelvin(value_k: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value_k,
        TemperatureUnit::Celsius => value_k - 273.15,
        TemperatureUnit::Fahrenheit => (value_k - 273.15) * 9.0 / 5.0 + 32.0,
        TemperatureUnit::Rankine => value_k * 9.0 / 5.0,
    }
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    from_kelvin(to_kelvin(value, from), to)
}

/// 온도차를 변환한다. 절대 기준점 없이 배율만 적용한다.
pub fn convert_temperature_diff(
    value: f64,
    from: TemperatureDiffUnit,
    to: TemperatureDiffUnit,
) -> f64 {
    value * from.kelvin_per_unit() / to.kelvin_per_unit()
}
