use serde::Serialize;

use super::catalog::{allowable_stress, find_material};
use super::MaterialError;

/// 내압 튜브 두께 검토 결과 (ASME Sec. VIII UG-27, App. 1-1 외경 기준식).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TubeWallCheck {
    pub required_thickness_m: f64,
    pub actual_thickness_m: f64,
    pub allowable_stress_mpa: f64,
    /// 실제 두께 / 소요 두께 - 1 [%]
    pub margin_pct: f64,
    pub is_adequate: bool,
    pub warnings: Vec<String>,
}

/// 내압에 대한 튜브 소요 두께. `t = P·Ro/(S·E + 0.4P)`
pub fn tube_wall_check(
    material_code: &str,
    design_temp_c: f64,
    design_pressure_pa: f64,
    tube_od_m: f64,
    tube_wall_m: f64,
    joint_efficiency: f64,
) -> Result<TubeWallCheck, MaterialError> {
    let material = find_material(material_code)
        .ok_or_else(|| MaterialError::UnknownMaterial(material_code.to_string()))?;
    let stress = allowable_stress(material.code, design_temp_c)
        .ok_or_else(|| MaterialError::NoStressData(material.code.to_string()))?;
    if tube_od_m <= 0.0 || tube_wall_m <= 0.0 {
        return Err(MaterialError::InvalidInput("튜브 외경과 두께는 0보다 커야 합니다.".into()));
    }

    let mut warnings = Vec::new();
    if stress.clamped {
        warnings.push(format!(
            "{} 허용응력 표 범위 밖 온도 {design_temp_c:.0}°C라 {:.0}°C 값을 사용했습니다.",
            material.name, stress.source_temp_c
        ));
    }
    if design_temp_c > material.max_temp_c || design_temp_c < material.min_temp_c {
        warnings.push(format!(
            "설계 온도 {design_temp_c:.0}°C가 {} 사용 범위({:.0}~{:.0}°C)를 벗어납니다.",
            material.name, material.min_temp_c, material.max_temp_c
        ));
    }

    let s_pa = stress.value_mpa * 1.0e6;
    let e = joint_efficiency.clamp(0.0, 1.0);
    let p = design_pressure_pa.max(0.0);
    let ro = tube_od_m / 2.0;
    let required = p * ro / (s_pa * e + 0.4 * p);
    let margin_pct = if required > 0.0 {
        (tube_wall_m / required - 1.0) * 100.0
    } else {
        f64::INFINITY
    };
    let is_adequate = tube_wall_m >= required;
    if !is_adequate {
        warnings.push(format!(
            "튜브 두께 {:.2} mm가 소요 두께 {:.2} mm보다 얇습니다.",
            tube_wall_m * 1000.0,
            required * 1000.0
        ));
    }

    Ok(TubeWallCheck {
        required_thickness_m: required,
        actual_thickness_m: tube_wall_m,
        allowable_stress_mpa: stress.value_mpa,
        margin_pct,
        is_adequate,
        warnings,
    })
}
