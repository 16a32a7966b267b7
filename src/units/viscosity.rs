use serde::{Deserialize, Serialize};

/// 점도 단위. 내부 기준은 Pa·s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViscosityUnit {
    PascalSecond,
    Centipoise,
    PoundPerFootHour,
}

impl ViscosityUnit {
    fn pas_per_unit(self) -> f64 {
        match self {
            ViscosityUnit::PascalSecond => 1.0,
            ViscosityUnit::Centipoise => 0.001,
            // 1 lb/(ft·h) = 4.1338e-4 Pa·s
            ViscosityUnit::PoundPerFootHour => 4.133_789e-4,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ViscosityUnit::PascalSecond => "Pa·s",
            ViscosityUnit::Centipoise => "cP",
            ViscosityUnit::PoundPerFootHour => "lb/(ft·h)",
        }
    }
}

/// 점도를 변환한다.
pub fn convert_viscosity(value: f64, from: ViscosityUnit, to: ViscosityUnit) -> f64 {
    value * from.pas_per_unit() / to.pas_per_unit()
}
