use serde::{Deserialize, Serialize};

/// 밀도 단위. 내부 기준은 kg/m³이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DensityUnit {
    KgPerCubicMeter,
    GramPerCubicCentimeter,
    PoundPerCubicFoot,
}

impl DensityUnit {
    fn base_per_unit(self) -> f64 {
        match self {
            DensityUnit::KgPerCubicMeter => 1.0,
            DensityUnit::GramPerCubicCentimeter => 1000.0,
            DensityUnit::PoundPerCubicFoot => 16.018_463,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            DensityUnit::KgPerCubicMeter => "kg/m³",
            DensityUnit::GramPerCubicCentimeter => "g/cm³",
            DensityUnit::PoundPerCubicFoot => "lb/ft³",
        }
    }
}

/// 밀도를 변환한다.
pub fn convert_density(value: f64, from: DensityUnit, to: DensityUnit) -> f64 {
    value * from.base_per_unit() / to.base_per_unit()
}
