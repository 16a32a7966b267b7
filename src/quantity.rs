/// 단위 변환 표가 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Temperature,
    TemperatureDifference,
    Pressure,
    Length,
    Area,
    Velocity,
    MassFlow,
    Density,
    Viscosity,
    Power,
    HeatTransferCoeff,
    ThermalConductivity,
    FoulingResistance,
}

impl QuantityKind {
    /// CLI 인자 등에서 쓰는 짧은 이름으로부터 물리량을 찾는다.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "temperature" | "temp" | "t" => Some(QuantityKind::Temperature),
            "temperature-diff" | "dt" => Some(QuantityKind::TemperatureDifference),
            "pressure" | "p" => Some(QuantityKind::Pressure),
            "length" | "l" => Some(QuantityKind::Length),
            "area" | "a" => Some(QuantityKind::Area),
            "velocity" | "v" => Some(QuantityKind::Velocity),
            "mass-flow" | "flow" | "m" => Some(QuantityKind::MassFlow),
            "density" | "rho" => Some(QuantityKind::Density),
            "viscosity" | "mu" => Some(QuantityKind::Viscosity),
            "power" | "duty" | "q" => Some(QuantityKind::Power),
            "htc" | "u" => Some(QuantityKind::HeatTransferCoeff),
            "conductivity" | "k" => Some(QuantityKind::ThermalConductivity),
            "fouling" | "rf" => Some(QuantityKind::FoulingResistance),
            _ => None,
        }
    }
}
