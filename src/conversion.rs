use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
    /// 알 수 없는 물리량 이름
    UnknownQuantity(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
            ConversionError::UnknownQuantity(q) => write!(f, "알 수 없는 물리량: {q}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `C`, `bar`, `mm`, `kg/h`, `Btu/h`, `ft/s` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    let converted = match kind {
        QuantityKind::Temperature => convert_temperature(
            value,
            parse_temperature_unit(from_unit_str)?,
            parse_temperature_unit(to_unit_str)?,
        ),
        QuantityKind::TemperatureDifference => convert_temperature_diff(
            value,
            parse_temperature_diff_unit(from_unit_str)?,
            parse_temperature_diff_unit(to_unit_str)?,
        ),
        QuantityKind::Pressure => convert_pressure(
            value,
            parse_pressure_unit(from_unit_str)?,
            parse_pressure_unit(to_unit_str)?,
        ),
        QuantityKind::Length => convert_length(
            value,
            parse_length_unit(from_unit_str)?,
            parse_length_unit(to_unit_str)?,
        ),
        QuantityKind::Area => convert_area(
            value,
            parse_area_unit(from_unit_str)?,
            parse_area_unit(to_unit_str)?,
        ),
        QuantityKind::Velocity => convert_velocity(
            value,
            parse_velocity_unit(from_unit_str)?,
            parse_velocity_unit(to_unit_str)?,
        ),
        QuantityKind::MassFlow => convert_mass_flow(
            value,
            parse_mass_flow_unit(from_unit_str)?,
            parse_mass_flow_unit(to_unit_str)?,
        ),
        QuantityKind::Density => convert_density(
            value,
            parse_density_unit(from_unit_str)?,
            parse_density_unit(to_unit_str)?,
        ),
        QuantityKind::Viscosity => convert_viscosity(
            value,
            parse_viscosity_unit(from_unit_str)?,
            parse_viscosity_unit(to_unit_str)?,
        ),
        QuantityKind::Power => convert_power(
            value,
            parse_power_unit(from_unit_str)?,
            parse_power_unit(to_unit_str)?,
        ),
        QuantityKind::HeatTransferCoeff => convert_heat_transfer(
            value,
            parse_heat_transfer_unit(from_unit_str)?,
            parse_heat_transfer_unit(to_unit_str)?,
        ),
        QuantityKind::ThermalConductivity => convert_conductivity(
            value,
            parse_conductivity_unit(from_unit_str)?,
            parse_conductivity_unit(to_unit_str)?,
        ),
        QuantityKind::FoulingResistance => convert_fouling(
            value,
            parse_fouling_unit(from_unit_str)?,
            parse_fouling_unit(to_unit_str)?,
        ),
    };
    Ok(converted)
}

/// 물리량 이름 문자열까지 받아 변환한다. CLI에서 사용한다.
pub fn convert_by_name(
    kind_name: &str,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    let kind = QuantityKind::from_name(kind_name)
        .ok_or_else(|| ConversionError::UnknownQuantity(kind_name.to_string()))?;
    convert(kind, value, from_unit_str, to_unit_str)
}

pub fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        "c" | "celsius" | "°c" | "degc" => Ok(TemperatureUnit::Celsius),
        "f" | "fahrenheit" | "°f" | "degf" => Ok(TemperatureUnit::Fahrenheit),
        "r" | "rankine" | "°r" => Ok(TemperatureUnit::Rankine),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_temperature_diff_unit(s: &str) -> Result<TemperatureDiffUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "k" | "kelvin" => Ok(TemperatureDiffUnit::Kelvin),
        "c" | "celsius" | "°c" => Ok(TemperatureDiffUnit::Celsius),
        "f" | "fahrenheit" | "°f" => Ok(TemperatureDiffUnit::Fahrenheit),
        "r" | "rankine" => Ok(TemperatureDiffUnit::Rankine),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "pa" | "pascal" => Ok(PressureUnit::Pascal),
        "kpa" => Ok(PressureUnit::KiloPascal),
        "bar" | "bara" => Ok(PressureUnit::Bar),
        "mpa" => Ok(PressureUnit::MegaPascal),
        "psi" | "psia" => Ok(PressureUnit::Psi),
        "atm" => Ok(PressureUnit::Atm),
        "kg/cm2" | "kgf/cm2" => Ok(PressureUnit::KgPerCm2),
        "mmhg" | "torr" => Ok(PressureUnit::MmHg),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "mm" => Ok(LengthUnit::Millimeter),
        "cm" => Ok(LengthUnit::Centimeter),
        "in" | "inch" => Ok(LengthUnit::Inch),
        "ft" | "foot" => Ok(LengthUnit::Foot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_area_unit(s: &str) -> Result<AreaUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m2" | "m^2" | "sqm" => Ok(AreaUnit::SquareMeter),
        "ft2" | "ft^2" | "sqft" => Ok(AreaUnit::SquareFoot),
        "in2" | "in^2" => Ok(AreaUnit::SquareInch),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_velocity_unit(s: &str) -> Result<VelocityUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m/s" | "mps" => Ok(VelocityUnit::MeterPerSecond),
        "ft/s" | "fps" => Ok(VelocityUnit::FootPerSecond),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_mass_flow_unit(s: &str) -> Result<MassFlowUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "kg/s" => Ok(MassFlowUnit::KgPerSecond),
        "kg/h" | "kg/hr" => Ok(MassFlowUnit::KgPerHour),
        "t/h" | "tph" => Ok(MassFlowUnit::TonnePerHour),
        "lb/s" => Ok(MassFlowUnit::PoundPerSecond),
        "lb/h" | "lb/hr" => Ok(MassFlowUnit::PoundPerHour),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_density_unit(s: &str) -> Result<DensityUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "kg/m3" | "kg/m^3" => Ok(DensityUnit::KgPerCubicMeter),
        "g/cm3" | "g/cc" => Ok(DensityUnit::GramPerCubicCentimeter),
        "lb/ft3" | "lb/ft^3" => Ok(DensityUnit::PoundPerCubicFoot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_viscosity_unit(s: &str) -> Result<ViscosityUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "pa·s" | "pa.s" | "pas" => Ok(ViscosityUnit::PascalSecond),
        "cp" | "cps" => Ok(ViscosityUnit::Centipoise),
        "lb/ft-h" | "lb/(ft·h)" => Ok(ViscosityUnit::PoundPerFootHour),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_power_unit(s: &str) -> Result<PowerUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "w" => Ok(PowerUnit::Watt),
        "kw" => Ok(PowerUnit::Kilowatt),
        "mw" => Ok(PowerUnit::Megawatt),
        "btu/h" | "btu/hr" => Ok(PowerUnit::BtuPerHour),
        "mmbtu/h" | "mmbtu/hr" => Ok(PowerUnit::MmBtuPerHour),
        "hp" => Ok(PowerUnit::Horsepower),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_heat_transfer_unit(s: &str) -> Result<HeatTransferUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "w/m2k" | "w/m^2k" => Ok(HeatTransferUnit::WPerSquareMeterK),
        "btu/h-ft2-f" | "btu/(h·ft2·f)" => Ok(HeatTransferUnit::BtuPerHourSquareFootF),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_conductivity_unit(s: &str) -> Result<ConductivityUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "w/mk" | "w/(m·k)" => Ok(ConductivityUnit::WPerMeterK),
        "btu/h-ft-f" | "btu/(h·ft·f)" => Ok(ConductivityUnit::BtuPerHourFootF),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_fouling_unit(s: &str) -> Result<FoulingUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m2k/w" | "m^2k/w" => Ok(FoulingUnit::SquareMeterKPerW),
        "h-ft2-f/btu" | "hft2f/btu" => Ok(FoulingUnit::HourSquareFootFPerBtu),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
