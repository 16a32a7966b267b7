//! 통합 해석: 물성 → 튜브 개수 → 열-수력 → 진동 → (선택) 2상/재료.

use serde::{Deserialize, Serialize};

use crate::config::DesignDefaults;
use crate::fluids;
use crate::geometry::MechanicalGeometry;
use crate::materials::{select_material, MaterialEnvironment, MaterialSelectionResult};
use crate::process::{ProcessConditions, ServiceType};
use crate::thermal::{analyze_thermal, ThermalHydraulicResult, ThermalOptions};
use crate::two_phase::{classify, TwoPhaseInput, TwoPhaseResult};
use crate::vibration::{analyze_vibration, VibrationInput, VibrationResult};

/// 한 건의 설계 검토 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignCase {
    #[serde(default)]
    pub name: Option<String>,
    pub process: ProcessConditions,
    pub geometry: MechanicalGeometry,
    #[serde(default)]
    pub two_phase: Option<TwoPhaseInput>,
    #[serde(default)]
    pub material: Option<MaterialEnvironment>,
    /// 감쇠비 직접 지정
    #[serde(default)]
    pub damping_ratio: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisOptions {
    pub fei_safety_factor: f64,
    pub min_speed_of_sound_m_s: f64,
    pub viscosity_correction: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        (&DesignDefaults::default()).into()
    }
}

impl From<&DesignDefaults> for AnalysisOptions {
    fn from(d: &DesignDefaults) -> Self {
        Self {
            fei_safety_factor: d.fei_safety_factor,
            min_speed_of_sound_m_s: d.min_speed_of_sound_m_s,
            viscosity_correction: d.viscosity_correction,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub name: Option<String>,
    pub thermal: ThermalHydraulicResult,
    /// 열-수력 계산이 실패하면 `None`
    pub vibration: Option<VibrationResult>,
    pub two_phase: Option<TwoPhaseResult>,
    pub material: Option<MaterialSelectionResult>,
    /// 항목 표시가 붙은 전체 경고
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub is_valid: bool,
}

fn tagged<'a>(tag: &'a str, items: &'a [String]) -> impl Iterator<Item = String> + 'a {
    items.iter().map(move |m| format!("[{tag}] {m}"))
}

/// 기본 설계값으로 통합 해석을 수행한다.
pub fn analyze(case: &DesignCase) -> AnalysisReport {
    analyze_with(case, &AnalysisOptions::default())
}

pub fn analyze_with(case: &DesignCase, options: &AnalysisOptions) -> AnalysisReport {
    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    let thermal = analyze_thermal(
        &case.process,
        &case.geometry,
        &ThermalOptions {
            viscosity_correction: options.viscosity_correction,
        },
    );
    warnings.extend(tagged("열수력", &thermal.warnings));
    errors.extend(tagged("열수력", &thermal.errors));

    // 진동: 쉘측 직교류 유속과 형상 사용
    let vibration = thermal.is_valid.then(|| {
        let shell = case.process.shell_stream();
        let tube = case.process.tube_stream();
        let shell_value = shell.mean_properties();
        let tube_value = tube.mean_properties();
        let service = shell.service();
        let speed_of_sound = (service == ServiceType::Gas).then(|| {
            fluids::speed_of_sound_for(&shell_value.properties, shell_value.source_temp_c)
        });
        let mut input = VibrationInput::from_geometry(
            &case.geometry,
            shell_value.properties.density,
            tube_value.properties.density,
            thermal.shell_velocity_m_s,
            service,
            speed_of_sound,
        );
        input.damping_ratio = case.damping_ratio;
        input.fei_safety_factor = options.fei_safety_factor;
        input.min_speed_of_sound_m_s = options.min_speed_of_sound_m_s;
        analyze_vibration(&input)
    });
    if let Some(v) = &vibration {
        warnings.extend(tagged("진동", &v.warnings));
        errors.extend(tagged("진동", &v.errors));
        if v.is_vibration_risk {
            warnings.push(format!("[진동] {}", v.message));
        }
    }

    let two_phase = case.two_phase.as_ref().map(classify);
    if let Some(tp) = &two_phase {
        warnings.extend(tagged("2상", &tp.warnings));
        errors.extend(tagged("2상", &tp.errors));
    }

    let material = case.material.as_ref().map(select_material);
    if let Some(m) = &material {
        warnings.extend(tagged("재료", &m.warnings));
        errors.extend(tagged("재료", &m.errors));
    }

    let is_valid = thermal.is_valid
        && vibration.as_ref().is_some_and(|v| v.is_valid)
        && two_phase.as_ref().map_or(true, |t| t.is_valid)
        && material.as_ref().map_or(true, |m| m.is_valid);

    AnalysisReport {
        name: case.name.clone(),
        thermal,
        vibration,
        two_phase,
        material,
        warnings,
        errors,
        is_valid,
    }
}
