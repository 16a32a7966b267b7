use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::units::*;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 표시용 단위 시스템 프리셋. 엔진 내부 계산은 항상 SI로 수행한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// SI 미터법 (°C, bar, mm, kg/h, kW)
    Metric,
    /// 영국식/야드파운드법 (°F, psia, in, lb/h, Btu/h)
    Imperial,
}

/// 물리량별 표시 단위 표. 결과를 출력할 때 SI 값을 이 단위로 환산한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayUnits {
    pub temperature: TemperatureUnit,
    pub temperature_diff: TemperatureDiffUnit,
    pub pressure: PressureUnit,
    pub pressure_drop: PressureUnit,
    pub length: LengthUnit,
    pub tube_dimension: LengthUnit,
    pub area: AreaUnit,
    pub velocity: VelocityUnit,
    pub mass_flow: MassFlowUnit,
    pub density: DensityUnit,
    pub viscosity: ViscosityUnit,
    pub power: PowerUnit,
    pub heat_transfer: HeatTransferUnit,
    pub conductivity: ConductivityUnit,
    pub fouling: FoulingUnit,
}

impl DisplayUnits {
    /// 프리셋에 해당하는 단위 표를 만든다.
    pub fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Metric => Self {
                temperature: TemperatureUnit::Celsius,
                temperature_diff: TemperatureDiffUnit::Kelvin,
                pressure: PressureUnit::Bar,
                pressure_drop: PressureUnit::KiloPascal,
                length: LengthUnit::Meter,
                tube_dimension: LengthUnit::Millimeter,
                area: AreaUnit::SquareMeter,
                velocity: VelocityUnit::MeterPerSecond,
                mass_flow: MassFlowUnit::KgPerHour,
                density: DensityUnit::KgPerCubicMeter,
                viscosity: ViscosityUnit::Centipoise,
                power: PowerUnit::Kilowatt,
                heat_transfer: HeatTransferUnit::WPerSquareMeterK,
                conductivity: ConductivityUnit::WPerMeterK,
                fouling: FoulingUnit::SquareMeterKPerW,
            },
            UnitSystem::Imperial => Self {
                temperature: TemperatureUnit::Fahrenheit,
                temperature_diff: TemperatureDiffUnit::Fahrenheit,
                pressure: PressureUnit::Psi,
                pressure_drop: PressureUnit::Psi,
                length: LengthUnit::Foot,
                tube_dimension: LengthUnit::Inch,
                area: AreaUnit::SquareFoot,
                velocity: VelocityUnit::FootPerSecond,
                mass_flow: MassFlowUnit::PoundPerHour,
                density: DensityUnit::PoundPerCubicFoot,
                viscosity: ViscosityUnit::Centipoise,
                power: PowerUnit::BtuPerHour,
                heat_transfer: HeatTransferUnit::BtuPerHourSquareFootF,
                conductivity: ConductivityUnit::BtuPerHourFootF,
                fouling: FoulingUnit::HourSquareFootFPerBtu,
            },
        }
    }
}

impl Default for DisplayUnits {
    fn default() -> Self {
        Self::for_system(UnitSystem::Metric)
    }
}

/// 계산 입력에서 생략된 설계 기본값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignDefaults {
    /// 유체탄성 불안정 판정 안전계수 (운전 유속 / 임계 유속 허용 비)
    pub fei_safety_factor: f64,
    /// 쉘 자동 사이징 기본 설계 여유(%)
    pub design_margin_pct: f64,
    /// 음향 공명 계산에 허용하는 최소 음속(m/s)
    pub min_speed_of_sound_m_s: f64,
    /// 관내 Sieder-Tate 점도 보정 사용 여부
    pub viscosity_correction: bool,
}

impl Default for DesignDefaults {
    fn default() -> Self {
        Self {
            fei_safety_factor: 0.8,
            design_margin_pct: 15.0,
            min_speed_of_sound_m_s: 150.0,
            viscosity_correction: true,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub unit_system: UnitSystem,
    pub display_units: DisplayUnits,
    #[serde(default)]
    pub design: DesignDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::Metric,
            display_units: DisplayUnits::default(),
            design: DesignDefaults::default(),
        }
    }
}

impl Config {
    /// 단위 시스템을 바꾸고 표시 단위 표를 프리셋으로 재설정한다.
    pub fn apply_unit_system(&mut self, system: UnitSystem) {
        self.unit_system = system;
        self.display_units = DisplayUnits::for_system(system);
    }

    /// 설정을 기본 경로(config.toml)에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_to(self, Path::new(DEFAULT_CONFIG_PATH))
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Parse(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Parse(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Parse(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new(DEFAULT_CONFIG_PATH);
    if path.exists() {
        load_from(path)
    } else {
        let cfg = Config::default();
        save_to(&cfg, path)?;
        Ok(cfg)
    }
}

/// 지정한 경로의 설정 파일을 읽는다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// TOML 문자열을 설정으로 해석한다.
pub fn parse(content: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// 설정을 지정한 경로에 저장한다.
pub fn save_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}
