//! 열-수력 상관식 엔진.
//!
//! 관내/쉘측 열전달계수, LMTD 보정, NTU-유용도, 총괄 U, 소요/실제 면적,
//! 양측 압력강하를 한 번에 계산한다.

pub mod lmtd;
pub mod ntu;
pub mod overall;
pub mod pressure_drop;
pub mod shell_side;
pub mod tube_side;

use std::f64::consts::PI;

use serde::Serialize;

use crate::geometry::{self, MechanicalGeometry, TubeCountMethod};
use crate::process::{ProcessConditions, ShellSideMethod, StreamPhase};

pub use lmtd::{correction_factor, log_mean, CorrectionFactor};
pub use overall::{overall_u, OverallCoefficient, OverallInput};
pub use shell_side::{bell_delaware, kern, BellDelawareFactors, ShellSideInput, ShellSideResult};
pub use tube_side::{classify_regime, tube_nusselt, tube_side_htc, FlowRegime, TubeSideHtc, TubeSideInput};

/// 고온/저온 열량 불일치 경고 기준
const DUTY_MISMATCH_LIMIT: f64 = 0.05;
/// 관내 액체 권장 유속 범위 [m/s]
const TUBE_LIQUID_VELOCITY_MIN: f64 = 0.9;
const TUBE_LIQUID_VELOCITY_MAX: f64 = 3.0;

/// 계산 옵션.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalOptions {
    /// Re ≥ 10⁴에서 관내 Sieder-Tate 점도 보정 적용
    pub viscosity_correction: bool,
}

impl Default for ThermalOptions {
    fn default() -> Self {
        Self {
            viscosity_correction: true,
        }
    }
}

/// 열-수력 계산 결과. 입력 오류 시 수치는 0이고 `errors`가 채워진다.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ThermalHydraulicResult {
    /// 설계 열량 [W] (고온측 열수지)
    pub heat_duty_w: f64,
    pub hot_duty_w: f64,
    pub cold_duty_w: f64,
    pub lmtd_k: f64,
    pub correction_factor: f64,
    /// F·LMTD [K]
    pub effective_mtd_k: f64,
    pub tube_htc_w_m2k: f64,
    pub shell_htc_w_m2k: f64,
    pub clean_u_w_m2k: f64,
    pub fouled_u_w_m2k: f64,
    pub required_area_m2: f64,
    pub actual_area_m2: f64,
    /// 실제 면적 / 소요 면적 - 1 [%]
    pub over_design_pct: f64,
    pub ntu: f64,
    pub effectiveness: f64,
    pub capacity_ratio: f64,
    /// ε·Cmin·(Th,in - Tc,in) 기준 열량 [W]
    pub rated_duty_w: f64,
    pub tube_pressure_drop_pa: f64,
    pub shell_pressure_drop_pa: f64,
    pub tube_velocity_m_s: f64,
    pub shell_velocity_m_s: f64,
    pub tube_reynolds: f64,
    pub shell_reynolds: f64,
    pub tube_regime: FlowRegime,
    pub tube_count: u32,
    pub tube_count_method: Option<TubeCountMethod>,
    pub bundle_diameter_m: f64,
    pub shell_method: ShellSideMethod,
    pub bell_delaware: Option<BellDelawareFactors>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub is_valid: bool,
}

impl ThermalHydraulicResult {
    fn rejected(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            errors,
            warnings,
            is_valid: false,
            ..Self::default()
        }
    }
}

/// 튜브 개수를 결정한다. 입력값이 있으면 그대로, 없으면 표/상관식으로 산정한다.
pub fn resolve_tube_count(geometry: &MechanicalGeometry) -> geometry::TubeCountResult {
    let bundle = geometry.shell_id_m - geometry.shell_type.bundle_clearance_m(geometry.shell_id_m);
    match geometry.tube_count {
        Some(count) => geometry::TubeCountResult {
            count,
            method: TubeCountMethod::UserSpecified,
            bundle_diameter_m: bundle.max(0.0),
            warnings: Vec::new(),
        },
        None => geometry::tube_count(
            geometry.shell_id_m,
            geometry.tube_od_m,
            geometry.tube_pitch_m,
            geometry.pattern,
            geometry.tube_passes,
            geometry.shell_type,
        ),
    }
}

/// 공정 조건과 형상으로 열-수력 성능을 계산한다.
pub fn analyze_thermal(
    conditions: &ProcessConditions,
    geometry: &MechanicalGeometry,
    options: &ThermalOptions,
) -> ThermalHydraulicResult {
    let mut warnings = geometry.advisories();
    let mut errors: Vec<String> = geometry.validate().iter().map(|e| e.to_string()).collect();
    for (label, stream) in [("고온측", &conditions.hot), ("저온측", &conditions.cold)] {
        errors.extend(stream.validate().iter().map(|e| format!("{label}: {e}")));
    }
    let hot = &conditions.hot;
    let cold = &conditions.cold;
    if hot.inlet_temp_c <= cold.inlet_temp_c {
        errors.push("고온측 입구 온도가 저온측 입구 온도보다 높아야 합니다.".into());
    }
    if hot.inlet_temp_c < hot.outlet_temp_c {
        errors.push("고온측 출구 온도가 입구 온도보다 높습니다.".into());
    }
    if cold.outlet_temp_c < cold.inlet_temp_c {
        errors.push("저온측 출구 온도가 입구 온도보다 낮습니다.".into());
    }
    for stream in [hot, cold] {
        if stream.phase() == StreamPhase::TwoPhase {
            warnings.push(format!(
                "{} 스트림이 2상으로 지정되었습니다. 단상 상관식 결과는 참고용이며 2상 해석을 병행하십시오.",
                stream.fluid.name()
            ));
        }
    }
    if !errors.is_empty() {
        return ThermalHydraulicResult::rejected(errors, warnings);
    }

    // 물성 (평균 온도)
    let hot_value = hot.mean_properties();
    let cold_value = cold.mean_properties();
    warnings.extend(hot_value.warning.clone());
    warnings.extend(cold_value.warning.clone());
    let hot_props = hot_value.properties;
    let cold_props = cold_value.properties;

    // 열수지
    let hot_capacity = hot.mass_flow_kg_s * hot_props.specific_heat;
    let cold_capacity = cold.mass_flow_kg_s * cold_props.specific_heat;
    let hot_duty_w = hot_capacity * (hot.inlet_temp_c - hot.outlet_temp_c);
    let cold_duty_w = cold_capacity * (cold.outlet_temp_c - cold.inlet_temp_c);
    let heat_duty_w = if hot_duty_w > 0.0 { hot_duty_w } else { cold_duty_w };
    if heat_duty_w <= 0.0 {
        errors.push("열부하가 0입니다. 유량과 입출구 온도를 확인하십시오.".into());
        return ThermalHydraulicResult::rejected(errors, warnings);
    }
    let mismatch = (hot_duty_w - cold_duty_w).abs() / hot_duty_w.max(cold_duty_w);
    if mismatch > DUTY_MISMATCH_LIMIT {
        warnings.push(format!(
            "고온측 열량 {:.1} kW와 저온측 열량 {:.1} kW가 {:.1}% 차이 납니다.",
            hot_duty_w / 1000.0,
            cold_duty_w / 1000.0,
            mismatch * 100.0
        ));
    }

    // LMTD와 보정계수
    let Some(lmtd_k) = lmtd::lmtd(
        hot.inlet_temp_c,
        hot.outlet_temp_c,
        cold.inlet_temp_c,
        cold.outlet_temp_c,
        conditions.arrangement,
    ) else {
        errors.push("온도 교차가 있어 LMTD를 계산할 수 없습니다.".into());
        return ThermalHydraulicResult::rejected(errors, warnings);
    };
    let correction = correction_factor(
        conditions.arrangement,
        hot.inlet_temp_c,
        hot.outlet_temp_c,
        cold.inlet_temp_c,
        cold.outlet_temp_c,
    );
    warnings.extend(correction.warnings.iter().cloned());
    let effective_mtd_k = correction.factor * lmtd_k;

    // 튜브 개수
    let count = resolve_tube_count(geometry);
    warnings.extend(count.warnings.iter().cloned());
    let nt = count.count;
    if nt == 0 {
        errors.push("튜브 개수를 산정할 수 없습니다.".into());
        return ThermalHydraulicResult::rejected(errors, warnings);
    }

    // 관내측
    let tube_stream = conditions.tube_stream();
    let shell_stream = conditions.shell_stream();
    let (tube_props, shell_props) = match conditions.hot_side {
        crate::process::FluidSide::Shell => (cold_props, hot_props),
        crate::process::FluidSide::Tube => (hot_props, cold_props),
    };
    let d_i = geometry.tube_id_m();
    let d_o = geometry.tube_od_m;
    let tubes_per_pass = nt as f64 / geometry.tube_passes as f64;
    let tube_flow_area = PI / 4.0 * d_i * d_i * tubes_per_pass;
    let tube_velocity = tube_stream.mass_flow_kg_s / (tube_props.density * tube_flow_area);
    let tube_reynolds = tube_props.density * tube_velocity * d_i / tube_props.viscosity;
    let wall_temp_c = 0.5 * (hot.mean_temp_c() + cold.mean_temp_c());
    let viscosity_ratio = options.viscosity_correction.then(|| {
        let wall = tube_stream.properties_at(wall_temp_c).properties.viscosity;
        tube_props.viscosity / wall
    });
    let tube_htc = tube_side_htc(&TubeSideInput {
        reynolds: tube_reynolds,
        prandtl: tube_props.prandtl(),
        conductivity_w_mk: tube_props.thermal_conductivity,
        inner_diameter_m: d_i,
        heating: conditions.tube_fluid_heated(),
        viscosity_ratio,
    });
    if tube_stream.service() == crate::process::ServiceType::Liquid
        && !(TUBE_LIQUID_VELOCITY_MIN..=TUBE_LIQUID_VELOCITY_MAX).contains(&tube_velocity)
    {
        warnings.push(format!(
            "관내 액체 유속 {tube_velocity:.2} m/s가 권장 범위({TUBE_LIQUID_VELOCITY_MIN}~{TUBE_LIQUID_VELOCITY_MAX} m/s)를 벗어납니다."
        ));
    }
    if tube_htc.regime == FlowRegime::Transitional {
        warnings.push(format!(
            "관내 유동이 천이 영역입니다 (Re = {tube_reynolds:.0}). 열전달계수 불확실성이 큽니다."
        ));
    }

    // 쉘측
    let shell_input = ShellSideInput {
        geometry,
        tube_count: nt,
        bundle_diameter_m: count.bundle_diameter_m,
        mass_flow_kg_s: shell_stream.mass_flow_kg_s,
        properties: &shell_props,
    };
    let shell = match conditions.shell_method {
        ShellSideMethod::BellDelaware => bell_delaware(&shell_input),
        ShellSideMethod::Kern => kern(&shell_input),
    };
    warnings.extend(shell.warnings.iter().cloned());
    if !shell.errors.is_empty() {
        errors.extend(shell.errors.iter().cloned());
        return ThermalHydraulicResult::rejected(errors, warnings);
    }

    // 총괄 U
    let overall = overall_u(&OverallInput {
        tube_htc_w_m2k: tube_htc.htc_w_m2k,
        shell_htc_w_m2k: shell.htc_w_m2k,
        tube_id_m: d_i,
        tube_od_m: d_o,
        wall_conductivity_w_mk: geometry.tube_material.thermal_conductivity_w_mk,
        tube_fouling_m2k_w: tube_stream.fouling_m2k_w,
        shell_fouling_m2k_w: shell_stream.fouling_m2k_w,
    });
    if !overall.errors.is_empty() {
        errors.extend(overall.errors.iter().cloned());
        return ThermalHydraulicResult::rejected(errors, warnings);
    }

    // 면적
    let required_area_m2 = heat_duty_w / (overall.fouled_u_w_m2k * effective_mtd_k);
    let actual_area_m2 = PI * d_o * geometry.tube_length_m * nt as f64;
    let over_design_pct = (actual_area_m2 / required_area_m2 - 1.0) * 100.0;
    if over_design_pct < 0.0 {
        warnings.push(format!(
            "실제 면적 {actual_area_m2:.1} m²가 소요 면적 {required_area_m2:.1} m²보다 작습니다."
        ));
    }

    // NTU-유용도
    let (c_min, _, cr) = ntu::capacity_rates(hot_capacity, cold_capacity);
    let ntu_value = ntu::ntu(overall.fouled_u_w_m2k, actual_area_m2, c_min);
    let effectiveness = ntu::effectiveness(ntu_value, cr, conditions.arrangement);
    let rated_duty_w =
        ntu::duty_from_effectiveness(effectiveness, c_min, hot.inlet_temp_c, cold.inlet_temp_c);

    // 압력강하
    let tube_dp = pressure_drop::tube_side_pressure_drop(
        tube_reynolds,
        tube_velocity,
        tube_props.density,
        d_i,
        geometry.tube_length_m,
        geometry.tube_passes,
    );
    for (label, stream, dp) in [
        ("관측", tube_stream, tube_dp.total_pa),
        ("쉘측", shell_stream, shell.pressure_drop_pa),
    ] {
        if let Some(allowable) = stream.allowable_dp_pa {
            if dp > allowable {
                warnings.push(format!(
                    "{label} 압력강하 {:.1} kPa가 허용값 {:.1} kPa를 초과합니다.",
                    dp / 1000.0,
                    allowable / 1000.0
                ));
            }
        }
    }

    ThermalHydraulicResult {
        heat_duty_w,
        hot_duty_w,
        cold_duty_w,
        lmtd_k,
        correction_factor: correction.factor,
        effective_mtd_k,
        tube_htc_w_m2k: tube_htc.htc_w_m2k,
        shell_htc_w_m2k: shell.htc_w_m2k,
        clean_u_w_m2k: overall.clean_u_w_m2k,
        fouled_u_w_m2k: overall.fouled_u_w_m2k,
        required_area_m2,
        actual_area_m2,
        over_design_pct,
        ntu: ntu_value,
        effectiveness,
        capacity_ratio: cr,
        rated_duty_w,
        tube_pressure_drop_pa: tube_dp.total_pa,
        shell_pressure_drop_pa: shell.pressure_drop_pa,
        tube_velocity_m_s: tube_velocity,
        shell_velocity_m_s: shell.velocity_m_s,
        tube_reynolds,
        shell_reynolds: shell.reynolds,
        tube_regime: tube_htc.regime,
        tube_count: nt,
        tube_count_method: Some(count.method),
        bundle_diameter_m: count.bundle_diameter_m,
        shell_method: conditions.shell_method,
        bell_delaware: shell.factors,
        warnings,
        errors,
        is_valid: true,
    }
}
