use serde::{Deserialize, Serialize};

/// 질량유량 단위. 내부 기준은 kg/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassFlowUnit {
    KgPerSecond,
    KgPerHour,
    TonnePerHour,
    PoundPerSecond,
    PoundPerHour,
}

impl MassFlowUnit {
    fn kg_s_per_unit(self) -> f64 {
        match self {
            MassFlowUnit::KgPerSecond => 1.0,
            MassFlowUnit::KgPerHour => 1.0 / 3600.0,
            MassFlowUnit::TonnePerHour => 1000.0 / 3600.0,
            MassFlowUnit::PoundPerSecond => 0.453_592_37,
            MassFlowUnit::PoundPerHour => 0.453_592_37 / 3600.0,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            MassFlowUnit::KgPerSecond => "kg/s",
            MassFlowUnit::KgPerHour => "kg/h",
            MassFlowUnit::TonnePerHour => "t/h",
            MassFlowUnit::PoundPerSecond => "lb/s",
            MassFlowUnit::PoundPerHour => "lb/h",
        }
    }
}

/// 질량유량을 변환한다.
pub fn convert_mass_flow(value: f64, from: MassFlowUnit, to: MassFlowUnit) -> f64 {
    value * from.kg_s_per_unit() / to.kg_s_per_unit()
}
