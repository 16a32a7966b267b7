use serde::{Deserialize, Serialize};

/// 압력 단위. 내부 기준은 절대압 Pa이다.
/// 엔진은 게이지압을 다루지 않으므로 모든 단위는 절대압으로 해석한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    Bar,
    MegaPascal,
    Psi,
    Atm,
    KgPerCm2,
    MmHg,
}

impl PressureUnit {
    fn pascal_per_unit(self) -> f64 {
        match self {
            PressureUnit::Pascal => 1.0,
            PressureUnit::KiloPascal => 1_000.0,
            PressureUnit::Bar => 100_000.0,
            PressureUnit::MegaPascal => 1.0e6,
            PressureUnit::Psi => 6_894.757,
            PressureUnit::Atm => 101_325.0,
            PressureUnit::KgPerCm2 => 98_066.5,
            // 760 mmHg = 1 atm (절대)
            PressureUnit::MmHg => 101_325.0 / 760.0,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Pa",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::Bar => "bar",
            PressureUnit::MegaPascal => "MPa",
            PressureUnit::Psi => "psia",
            PressureUnit::Atm => "atm",
            PressureUnit::KgPerCm2 => "kgf/cm²",
            PressureUnit::MmHg => "mmHg",
        }
    }
}

/// 압력을 Pa(abs)로 변환한다.
pub fn to_pascal(value: f64, unit: PressureUnit) -> f64 {
    value * unit.pascal_per_unit()
}

/// Pa(abs) 값을 원하는 단위로 변환한다.
pub fn from_pascal(value_pa: f64, unit: PressureUnit) -> f64 {
    value_pa / unit.pascal_per_unit()
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    from_pascal(to_pascal(value, from), to)
}
