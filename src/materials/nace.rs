//! NACE MR0175 / ISO 15156 산성(H₂S) 환경 판정.

use serde::Serialize;

use super::catalog::MaterialData;

/// 산성 환경 판정 H₂S 분압 하한 [kPa] (0.05 psia)
pub const SOUR_H2S_THRESHOLD_KPA: f64 = 0.345;

/// H₂S 분압과 pH로 산성 환경 등급(0~3)을 정한다. 0은 비산성 환경.
pub fn sour_service_region(h2s_partial_pressure_kpa: f64, ph: f64) -> u8 {
    if h2s_partial_pressure_kpa < SOUR_H2S_THRESHOLD_KPA {
        0
    } else if ph >= 5.5 && h2s_partial_pressure_kpa < 100.0 {
        1
    } else if ph >= 3.5 && h2s_partial_pressure_kpa < 1000.0 {
        2
    } else {
        3
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NaceAssessment {
    pub sour_service: bool,
    pub region: u8,
    /// 권장 재료가 NACE 등재 재료인지 (비산성이면 항상 true)
    pub compliant: bool,
    pub required_actions: Vec<String>,
}

/// 산성 환경 요구사항을 정리한다.
pub fn assess(h2s_partial_pressure_kpa: f64, ph: f64, material: Option<&MaterialData>) -> NaceAssessment {
    let region = sour_service_region(h2s_partial_pressure_kpa, ph);
    let sour_service = region > 0;
    let mut required_actions = Vec::new();
    if region >= 1 {
        required_actions.push("모재/용접부 경도 22 HRC(248 HV) 이하 관리".to_string());
    }
    if region >= 2 {
        required_actions.push("탄소강/저합금강 용접부 PWHT 시행".to_string());
    }
    if region >= 3 {
        required_actions.push("SSC 시험(NACE TM0177) 및 HIC 시험(NACE TM0284) 시행".to_string());
    }
    let compliant = !sour_service || material.is_some_and(|m| m.nace_listed);
    NaceAssessment {
        sour_service,
        region,
        compliant,
        required_actions,
    }
}
