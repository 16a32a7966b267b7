//! 계산 결과를 설정된 표시 단위로 출력한다.

use crate::analysis::AnalysisReport;
use crate::auxiliary::{PipeLossResult, PumpResult};
use crate::config::DisplayUnits;
use crate::fluids::FluidPropertyValue;
use crate::geometry::{BaffleRecommendation, TubeCountResult};
use crate::materials::{MaterialSelectionResult, TubeWallCheck};
use crate::sizing::SizingResult;
use crate::thermal::ThermalHydraulicResult;
use crate::two_phase::TwoPhaseResult;
use crate::units::*;
use crate::vibration::VibrationResult;

/// SI 값을 표시 단위 문자열로 바꾸는 도우미.
pub struct Formatter<'a> {
    du: &'a DisplayUnits,
}

impl<'a> Formatter<'a> {
    pub fn new(du: &'a DisplayUnits) -> Self {
        Self { du }
    }

    pub fn temperature(&self, c: f64) -> String {
        let u = self.du.temperature;
        format!("{:.1} {}", convert_temperature(c, TemperatureUnit::Celsius, u), u.symbol())
    }

    pub fn temperature_diff(&self, k: f64) -> String {
        let u = self.du.temperature_diff;
        format!(
            "{:.2} {}",
            convert_temperature_diff(k, TemperatureDiffUnit::Kelvin, u),
            u.symbol()
        )
    }

    pub fn pressure(&self, pa: f64) -> String {
        let u = self.du.pressure;
        format!("{:.4} {}", pressure::from_pascal(pa, u), u.symbol())
    }

    pub fn pressure_drop(&self, pa: f64) -> String {
        let u = self.du.pressure_drop;
        format!("{:.3} {}", pressure::from_pascal(pa, u), u.symbol())
    }

    pub fn length(&self, m: f64) -> String {
        let u = self.du.length;
        format!("{:.3} {}", convert_length(m, LengthUnit::Meter, u), u.symbol())
    }

    pub fn tube_dimension(&self, m: f64) -> String {
        let u = self.du.tube_dimension;
        format!("{:.2} {}", convert_length(m, LengthUnit::Meter, u), u.symbol())
    }

    pub fn area(&self, m2: f64) -> String {
        let u = self.du.area;
        format!("{:.2} {}", convert_area(m2, AreaUnit::SquareMeter, u), u.symbol())
    }

    pub fn velocity(&self, m_s: f64) -> String {
        let u = self.du.velocity;
        format!("{:.2} {}", convert_velocity(m_s, VelocityUnit::MeterPerSecond, u), u.symbol())
    }

    pub fn mass_flow(&self, kg_s: f64) -> String {
        let u = self.du.mass_flow;
        format!("{:.1} {}", convert_mass_flow(kg_s, MassFlowUnit::KgPerSecond, u), u.symbol())
    }

    pub fn density(&self, kg_m3: f64) -> String {
        let u = self.du.density;
        format!("{:.3} {}", convert_density(kg_m3, DensityUnit::KgPerCubicMeter, u), u.symbol())
    }

    pub fn viscosity(&self, pa_s: f64) -> String {
        let u = self.du.viscosity;
        format!("{:.4} {}", convert_viscosity(pa_s, ViscosityUnit::PascalSecond, u), u.symbol())
    }

    pub fn power(&self, w: f64) -> String {
        let u = self.du.power;
        format!("{:.2} {}", convert_power(w, PowerUnit::Watt, u), u.symbol())
    }

    pub fn heat_transfer(&self, w_m2k: f64) -> String {
        let u = self.du.heat_transfer;
        format!(
            "{:.1} {}",
            convert_heat_transfer(w_m2k, HeatTransferUnit::WPerSquareMeterK, u),
            u.symbol()
        )
    }

    pub fn conductivity(&self, w_mk: f64) -> String {
        let u = self.du.conductivity;
        format!(
            "{:.4} {}",
            convert_conductivity(w_mk, ConductivityUnit::WPerMeterK, u),
            u.symbol()
        )
    }
}

fn print_messages(warnings: &[String], errors: &[String]) {
    for e in errors {
        println!("  [오류] {e}");
    }
    for w in warnings {
        println!("  [경고] {w}");
    }
}

pub fn print_properties(name: &str, value: &FluidPropertyValue, du: &DisplayUnits) {
    let f = Formatter::new(du);
    let p = &value.properties;
    println!("\n-- {name} 물성 @ {} --", f.temperature(value.source_temp_c));
    println!("밀도: {}", f.density(p.density));
    println!("점도: {}", f.viscosity(p.viscosity));
    println!("비열: {:.1} J/(kg·K)", p.specific_heat);
    println!("열전도율: {}", f.conductivity(p.thermal_conductivity));
    println!("Pr: {:.3}", p.prandtl());
    if let Some(w) = &value.warning {
        println!("  [경고] {w}");
    }
}

pub fn print_tube_count(result: &TubeCountResult, du: &DisplayUnits) {
    let f = Formatter::new(du);
    println!("\n-- 튜브 개수 --");
    println!("튜브 개수: {} ({:?})", result.count, result.method);
    println!("번들 외경: {}", f.tube_dimension(result.bundle_diameter_m));
    print_messages(&result.warnings, &[]);
}

pub fn print_baffle(result: &BaffleRecommendation, du: &DisplayUnits) {
    let f = Formatter::new(du);
    println!("\n-- 배플 간격 --");
    println!(
        "허용 범위: {} ~ {}",
        f.tube_dimension(result.min_spacing_m),
        f.tube_dimension(result.max_spacing_m)
    );
    println!("권장 간격: {}", f.tube_dimension(result.recommended_spacing_m));
    println!("배플 매수: {}", result.baffle_count);
    print_messages(&result.warnings, &[]);
}

pub fn print_thermal(r: &ThermalHydraulicResult, du: &DisplayUnits) {
    let f = Formatter::new(du);
    println!("\n-- 열-수력 ({:?}) --", r.shell_method);
    if r.is_valid {
        println!("열부하: {}", f.power(r.heat_duty_w));
        println!(
            "LMTD: {}, F = {:.3}, 유효 MTD: {}",
            f.temperature_diff(r.lmtd_k),
            r.correction_factor,
            f.temperature_diff(r.effective_mtd_k)
        );
        println!(
            "hi: {}, ho: {}",
            f.heat_transfer(r.tube_htc_w_m2k),
            f.heat_transfer(r.shell_htc_w_m2k)
        );
        println!(
            "U(청정): {}, U(오염): {}",
            f.heat_transfer(r.clean_u_w_m2k),
            f.heat_transfer(r.fouled_u_w_m2k)
        );
        println!(
            "소요 면적: {}, 실제 면적: {} (여유 {:.1}%)",
            f.area(r.required_area_m2),
            f.area(r.actual_area_m2),
            r.over_design_pct
        );
        println!(
            "NTU: {:.3}, ε: {:.3}, Cr: {:.3}",
            r.ntu, r.effectiveness, r.capacity_ratio
        );
        println!(
            "관측: {} ({:?}, Re = {:.0}), ΔP {}",
            f.velocity(r.tube_velocity_m_s),
            r.tube_regime,
            r.tube_reynolds,
            f.pressure_drop(r.tube_pressure_drop_pa)
        );
        println!(
            "쉘측: {} (Re = {:.0}), ΔP {}",
            f.velocity(r.shell_velocity_m_s),
            r.shell_reynolds,
            f.pressure_drop(r.shell_pressure_drop_pa)
        );
        println!("튜브 개수: {}", r.tube_count);
        if let Some(bd) = &r.bell_delaware {
            println!(
                "Jc {:.3}, Jl {:.3}, Jb {:.3}, Jr {:.3}, Js {:.3}",
                bd.jc, bd.jl, bd.jb, bd.jr, bd.js
            );
        }
    }
    print_messages(&r.warnings, &r.errors);
}

pub fn print_vibration(r: &VibrationResult, du: &DisplayUnits) {
    let f = Formatter::new(du);
    println!("\n-- 유동 유발 진동 --");
    println!(
        "fn: {:.2} Hz, fvs: {:.2} Hz, fa: {:.2} Hz",
        r.natural_frequency_hz, r.vortex_shedding_frequency_hz, r.acoustic_frequency_hz
    );
    println!(
        "임계 유속: {} (V/Vc = {:.2}), 환산유속: {:.2}, 손상수: {:.3}",
        f.velocity(r.critical_velocity_m_s),
        r.velocity_ratio,
        r.reduced_velocity,
        r.damage_number
    );
    println!("{}", r.message);
    for rec in &r.recommendations {
        println!("  - {rec}");
    }
    print_messages(&r.warnings, &r.errors);
}

pub fn print_two_phase(r: &TwoPhaseResult, du: &DisplayUnits) {
    let f = Formatter::new(du);
    println!("\n-- 2상 유동 --");
    if r.is_valid {
        println!("유동 영역: {:?}", r.flow_pattern);
        println!(
            "X = {:.4}, α = {:.3}, φL² = {:.2}",
            r.lockhart_martinelli_x, r.void_fraction, r.friction_multiplier
        );
        println!(
            "ΔP 마찰 {}, 중력 {}, 합계 {}",
            f.pressure_drop(r.pressure_drop.frictional_pa),
            f.pressure_drop(r.pressure_drop.gravitational_pa),
            f.pressure_drop(r.pressure_drop.total_pa)
        );
        if r.is_unstable {
            println!("불안정성: {:?} ({:?})", r.instabilities, r.severity);
        }
    }
    print_messages(&r.warnings, &r.errors);
}

pub fn print_material(r: &MaterialSelectionResult) {
    println!("\n-- 재료 선정 --");
    println!("{}", r.message);
    for alt in &r.alternatives {
        println!("  대안: {} ({:.0}점)", alt.name, alt.score);
    }
    if r.nace.sour_service {
        println!("산성 환경 Region {} (NACE 적합: {})", r.nace.region, r.nace.compliant);
        for action in &r.nace.required_actions {
            println!("  - {action}");
        }
    }
    print_messages(&r.warnings, &r.errors);
}

pub fn print_wall_check(code: &str, r: &TubeWallCheck, du: &DisplayUnits) {
    let f = Formatter::new(du);
    println!("\n-- 튜브 두께 검토 ({code}) --");
    println!("허용응력: {:.1} MPa", r.allowable_stress_mpa);
    println!(
        "소요 두께: {}, 실제 두께: {} (여유 {:.1}%)",
        f.tube_dimension(r.required_thickness_m),
        f.tube_dimension(r.actual_thickness_m),
        r.margin_pct
    );
    println!("판정: {}", if r.is_adequate { "적합" } else { "두께 부족" });
    print_messages(&r.warnings, &[]);
}

pub fn print_sizing(r: &SizingResult, du: &DisplayUnits) {
    let f = Formatter::new(du);
    println!("\n-- 쉘 크기 선정 ({}개 조합 평가) --", r.evaluated);
    println!("{}", r.message);
    for (i, o) in r.options.iter().enumerate() {
        println!(
            "{}) 쉘 {} × L {} | {}개 | 면적 {} (여유 {:.1}%) | L/D {:.1} | 점수 {:.1}",
            i + 1,
            f.tube_dimension(o.shell_id_m),
            f.length(o.tube_length_m),
            o.tube_count,
            f.area(o.actual_area_m2),
            o.area_margin_pct,
            o.l_over_d,
            o.score
        );
    }
    print_messages(&r.warnings, &r.errors);
}

pub fn print_pump(r: &PumpResult, du: &DisplayUnits) {
    let f = Formatter::new(du);
    println!("\n-- 펌프 --");
    if r.is_valid {
        println!("NPSHa: {:.2} m (여유비 {:.2})", r.npsha_m, r.margin_ratio);
        println!("증기압: {}", f.pressure(r.vapor_pressure_pa));
        println!(
            "양정: {:.1} m, 수동력: {}, 축동력: {}",
            r.differential_head_m,
            f.power(r.hydraulic_power_w),
            f.power(r.shaft_power_w)
        );
    }
    print_messages(&r.warnings, &r.errors);
}

pub fn print_pipe(r: &PipeLossResult, du: &DisplayUnits) {
    let f = Formatter::new(du);
    println!("\n-- 배관 압력손실 --");
    if r.errors.is_empty() {
        println!(
            "유속: {}, Re = {:.0}, f = {:.4}, ΔP = {}",
            f.velocity(r.velocity_m_s),
            r.reynolds,
            r.friction_factor,
            f.pressure_drop(r.pressure_drop_pa)
        );
    }
    print_messages(&r.warnings, &r.errors);
}

pub fn print_report(report: &AnalysisReport, du: &DisplayUnits) {
    if let Some(name) = &report.name {
        println!("=== {name} ===");
    }
    print_thermal(&report.thermal, du);
    if let Some(v) = &report.vibration {
        print_vibration(v, du);
    }
    if let Some(tp) = &report.two_phase {
        print_two_phase(tp, du);
    }
    if let Some(m) = &report.material {
        print_material(m);
    }
    println!(
        "\n종합 판정: {}",
        if report.is_valid { "적합" } else { "부적합 (검토 필요)" }
    );
}
