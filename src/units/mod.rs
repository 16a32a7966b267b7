//! 단위 정의 및 변환 모듈 모음. 엔진 내부 계산은 항상 SI 기준이며,
//! 여기의 변환은 입력/출력 표시용으로만 사용한다.

pub mod area;
pub mod conductivity;
pub mod density;
pub mod fouling;
pub mod heat_transfer;
pub mod length;
pub mod mass_flow;
pub mod power;
pub mod pressure;
pub mod temperature;
pub mod velocity;
pub mod viscosity;

pub use area::{convert_area, AreaUnit};
pub use conductivity::{convert_conductivity, ConductivityUnit};
pub use density::{convert_density, DensityUnit};
pub use fouling::{convert_fouling, FoulingUnit};
pub use heat_transfer::{convert_heat_transfer, HeatTransferUnit};
pub use length::{convert_length, LengthUnit};
pub use mass_flow::{convert_mass_flow, MassFlowUnit};
pub use power::{convert_power, PowerUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use temperature::{
    convert_temperature, convert_temperature_diff, from_kelvin, to_kelvin, TemperatureDiffUnit,
    TemperatureUnit,
};
pub use velocity::{convert_velocity, VelocityUnit};
pub use viscosity::{convert_viscosity, ViscosityUnit};
