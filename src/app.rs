use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use crate::analysis::{self, AnalysisOptions, DesignCase};
use crate::auxiliary::{self, PipeLossInput, PumpInput};
use crate::config::{self, Config, UnitSystem};
use crate::conversion;
use crate::fluids::{self, FluidType};
use crate::geometry::{self, ShellType, TubePattern};
use crate::materials::{self, MaterialEnvironment, MaterialError};
use crate::process::ServiceType;
use crate::sizing::{self, SizingInput};
use crate::two_phase::{self, TwoPhaseInput};
use crate::ui_cli;
use crate::units::{self, LengthUnit, TemperatureUnit};

/// 쉘앤튜브 열교환기 설계 검토 도구
#[derive(Parser, Debug)]
#[command(name = "shell_tube_toolbox", version, about = "쉘앤튜브 열교환기 설계 검토 도구")]
pub struct Cli {
    /// 로그 레벨 (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    /// 설정 파일 경로 (기본: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// 입력 수치는 설정 파일의 표시 단위로 해석한다.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 단위 변환
    Convert {
        /// 물리량 (temperature, pressure, length, ...)
        quantity: String,
        value: f64,
        from: String,
        to: String,
    },

    /// 유체 물성 조회
    Props {
        fluid: String,
        /// 온도 (표시 온도 단위)
        #[arg(short, long)]
        temperature: f64,
        /// 압력 (표시 압력 단위, 물/증기에만 사용)
        #[arg(short, long)]
        pressure: Option<f64>,
    },

    /// 쉘 내경과 튜브 배열로 튜브 개수 산정
    TubeCount {
        /// 쉘 내경 (튜브 치수 단위)
        #[arg(long)]
        shell_id: f64,
        #[arg(long)]
        tube_od: f64,
        #[arg(long)]
        pitch: f64,
        #[arg(long, default_value = "triangular30")]
        pattern: String,
        #[arg(long, default_value_t = 1)]
        passes: u32,
        #[arg(long, default_value = "fixed")]
        shell_type: String,
    },

    /// 권장 배플 간격
    Baffle {
        /// 쉘 내경 (튜브 치수 단위)
        #[arg(long)]
        shell_id: f64,
        /// 튜브 길이 (길이 단위)
        #[arg(long)]
        tube_length: f64,
        #[arg(long, default_value = "liquid")]
        service: String,
    },

    /// 설계 케이스(TOML) 통합 해석
    Analyze {
        input: PathBuf,
        /// 결과를 TOML로 출력
        #[arg(long)]
        toml: bool,
    },

    /// 소요 면적으로 쉘 크기 후보 탐색
    Size {
        /// 소요 전열면적 (면적 단위)
        #[arg(long)]
        area: f64,
        /// 설계 여유 [%], 생략 시 설정값
        #[arg(long)]
        margin: Option<f64>,
        #[arg(long)]
        tube_od: f64,
        #[arg(long)]
        pitch: f64,
        #[arg(long, default_value = "triangular30")]
        pattern: String,
        #[arg(long, default_value_t = 2)]
        passes: u32,
        #[arg(long, default_value = "fixed")]
        shell_type: String,
        /// 튜브 길이 고정 (길이 단위)
        #[arg(long)]
        tube_length: Option<f64>,
    },

    /// 2상 유동 영역/압력강하 (TOML 입력)
    TwoPhase { input: PathBuf },

    /// 튜브 재료 선정 (TOML 입력)
    Material { input: PathBuf },

    /// 내압 튜브 두께 검토
    WallCheck {
        /// 재료 코드 (SA179, TP316L, ...)
        #[arg(long)]
        material: String,
        /// 설계 온도 (표시 온도 단위)
        #[arg(long)]
        temperature: f64,
        /// 설계 압력 (표시 압력 단위)
        #[arg(long)]
        pressure: f64,
        #[arg(long)]
        tube_od: f64,
        /// 튜브 두께 (튜브 치수 단위)
        #[arg(long)]
        wall: f64,
        #[arg(long, default_value_t = 1.0)]
        joint_efficiency: f64,
    },

    /// 펌프 NPSH/동력 (TOML 입력)
    Pump { input: PathBuf },

    /// 배관 압력손실 (TOML 입력)
    Pipe { input: PathBuf },

    /// 기본 설정 파일 생성
    InitConfig {
        /// 영국 단위계로 생성
        #[arg(long)]
        imperial: bool,
    },
}

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(config::ConfigError),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
    /// 입력 TOML 해석 오류
    Input(toml::de::Error),
    /// 결과 직렬화 오류
    Output(toml::ser::Error),
    /// 명령행 인수 오류
    InvalidArgument(String),
    /// 재료 데이터 오류
    Material(MaterialError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
            AppError::Input(e) => write!(f, "입력 파일 오류: {e}"),
            AppError::Output(e) => write!(f, "결과 출력 오류: {e}"),
            AppError::InvalidArgument(msg) => write!(f, "잘못된 인수: {msg}"),
            AppError::Material(e) => write!(f, "재료 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(value: config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(value: toml::de::Error) -> Self {
        AppError::Input(value)
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(value: toml::ser::Error) -> Self {
        AppError::Output(value)
    }
}

impl From<MaterialError> for AppError {
    fn from(value: MaterialError) -> Self {
        AppError::Material(value)
    }
}

/// `--config` 경로가 있으면 그 파일을, 없으면 기본 경로의 설정을 불러온다.
pub fn load_config(path: Option<&Path>) -> Result<Config, AppError> {
    match path {
        Some(p) => {
            info!("설정 파일 로드: {}", p.display());
            Ok(config::load_from(p)?)
        }
        None => Ok(config::load_or_default()?),
    }
}

pub fn parse_pattern(s: &str) -> Result<TubePattern, AppError> {
    match s.to_lowercase().replace(['-', ' '], "_").as_str() {
        "triangular30" | "triangular" | "tri" | "30" => Ok(TubePattern::Triangular30),
        "rotated_triangular60" | "rotated_triangular" | "60" => Ok(TubePattern::RotatedTriangular60),
        "square90" | "square" | "90" => Ok(TubePattern::Square90),
        "rotated_square45" | "rotated_square" | "45" => Ok(TubePattern::RotatedSquare45),
        _ => Err(AppError::InvalidArgument(format!("튜브 배열 '{s}'"))),
    }
}

pub fn parse_shell_type(s: &str) -> Result<ShellType, AppError> {
    match s.to_lowercase().replace(['-', ' '], "_").as_str() {
        "fixed" | "fixed_tubesheet" => Ok(ShellType::FixedTubesheet),
        "u_tube" | "utube" => Ok(ShellType::UTube),
        "split_ring" | "split_ring_floating_head" => Ok(ShellType::SplitRingFloatingHead),
        "pull_through" | "pull_through_floating_head" => Ok(ShellType::PullThroughFloatingHead),
        _ => Err(AppError::InvalidArgument(format!("쉘 형식 '{s}'"))),
    }
}

pub fn parse_service(s: &str) -> Result<ServiceType, AppError> {
    match s.to_lowercase().replace(['-', ' '], "_").as_str() {
        "liquid" => Ok(ServiceType::Liquid),
        "gas" | "vapor" => Ok(ServiceType::Gas),
        "two_phase" | "twophase" => Ok(ServiceType::TwoPhase),
        _ => Err(AppError::InvalidArgument(format!("운전 조건 '{s}'"))),
    }
}

fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    debug!("입력 파일 읽기: {}", path.display());
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// 선택한 하위 명령을 실행한다.
pub fn run(command: Commands, cfg: &mut Config) -> Result<(), AppError> {
    let du = cfg.display_units.clone();
    let tube_dim_m = |v: f64| units::convert_length(v, du.tube_dimension, LengthUnit::Meter);
    let length_m = |v: f64| units::convert_length(v, du.length, LengthUnit::Meter);

    match command {
        Commands::Convert { quantity, value, from, to } => {
            let converted = conversion::convert_by_name(&quantity, value, &from, &to)?;
            println!("{value} {from} = {converted:.6} {to}");
        }
        Commands::Props { fluid, temperature, pressure } => {
            let fluid = FluidType::from_name(&fluid);
            if fluid == FluidType::Custom {
                warn!("등록되지 않은 유체 이름, 사용자 정의 물성으로 계산합니다.");
            }
            let temp_c = units::convert_temperature(temperature, du.temperature, TemperatureUnit::Celsius);
            let value = match pressure {
                Some(p) => fluids::properties_at_pressure(fluid, temp_c, units::pressure::to_pascal(p, du.pressure)),
                None => fluids::properties_at(fluid, temp_c),
            };
            ui_cli::print_properties(fluid.name(), &value, &du);
        }
        Commands::TubeCount { shell_id, tube_od, pitch, pattern, passes, shell_type } => {
            let result = geometry::tube_count(
                tube_dim_m(shell_id),
                tube_dim_m(tube_od),
                tube_dim_m(pitch),
                parse_pattern(&pattern)?,
                passes,
                parse_shell_type(&shell_type)?,
            );
            info!("튜브 개수 {} ({:?})", result.count, result.method);
            ui_cli::print_tube_count(&result, &du);
        }
        Commands::Baffle { shell_id, tube_length, service } => {
            let result = geometry::recommended_baffle_spacing(
                tube_dim_m(shell_id),
                length_m(tube_length),
                parse_service(&service)?,
            );
            ui_cli::print_baffle(&result, &du);
        }
        Commands::Analyze { input, toml } => {
            let case: DesignCase = read_toml(&input)?;
            let options = AnalysisOptions::from(&cfg.design);
            info!("설계 케이스 해석 시작: {}", case.name.as_deref().unwrap_or("(이름 없음)"));
            let report = analysis::analyze_with(&case, &options);
            if !report.is_valid {
                warn!("해석 결과 부적합: 오류 {}건", report.errors.len());
            }
            if toml {
                println!("{}", toml::to_string_pretty(&report)?);
            } else {
                ui_cli::print_report(&report, &du);
            }
        }
        Commands::Size {
            area,
            margin,
            tube_od,
            pitch,
            pattern,
            passes,
            shell_type,
            tube_length,
        } => {
            let input = SizingInput {
                required_area_m2: units::convert_area(area, du.area, units::AreaUnit::SquareMeter),
                design_margin_pct: margin.unwrap_or(cfg.design.design_margin_pct),
                tube_od_m: tube_dim_m(tube_od),
                tube_pitch_m: tube_dim_m(pitch),
                pattern: parse_pattern(&pattern)?,
                tube_passes: passes,
                shell_type: parse_shell_type(&shell_type)?,
                fixed_tube_length_m: tube_length.map(length_m),
            };
            let result = sizing::optimize_shell(&input);
            ui_cli::print_sizing(&result, &du);
        }
        Commands::TwoPhase { input } => {
            let input: TwoPhaseInput = read_toml(&input)?;
            ui_cli::print_two_phase(&two_phase::classify(&input), &du);
        }
        Commands::Material { input } => {
            let env: MaterialEnvironment = read_toml(&input)?;
            if let Some(code) = &env.mating_material {
                if materials::find_material(code).is_none() {
                    return Err(MaterialError::UnknownMaterial(code.clone()).into());
                }
            }
            ui_cli::print_material(&materials::select_material(&env));
        }
        Commands::WallCheck {
            material,
            temperature,
            pressure,
            tube_od,
            wall,
            joint_efficiency,
        } => {
            let check = materials::tube_wall_check(
                &material,
                units::convert_temperature(temperature, du.temperature, TemperatureUnit::Celsius),
                units::pressure::to_pascal(pressure, du.pressure),
                tube_dim_m(tube_od),
                tube_dim_m(wall),
                joint_efficiency,
            )?;
            ui_cli::print_wall_check(&material, &check, &du);
        }
        Commands::Pump { input } => {
            let input: PumpInput = read_toml(&input)?;
            ui_cli::print_pump(&auxiliary::compute_pump(&input), &du);
        }
        Commands::Pipe { input } => {
            let input: PipeLossInput = read_toml(&input)?;
            ui_cli::print_pipe(&auxiliary::pipe_pressure_loss(&input), &du);
        }
        Commands::InitConfig { imperial } => {
            let system = if imperial { UnitSystem::Imperial } else { UnitSystem::Metric };
            cfg.apply_unit_system(system);
            cfg.save()?;
            println!("설정 파일을 저장했습니다 ({system:?}).");
        }
    }
    Ok(())
}
