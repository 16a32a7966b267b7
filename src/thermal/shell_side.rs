//! 쉘측 열전달계수와 압력강하.
//!
//! Bell-Delaware: 이상 관군 j/f 계수(Taborek)에 배플 컷, 누설, 바이패스, 층류,
//! 불균등 간격 보정을 곱한다. Kern: 등가직경 기반 단일 상관식.

use std::f64::consts::PI;

use serde::Serialize;

use crate::fluids::FluidProperties;
use crate::geometry::{MechanicalGeometry, TubePattern};

/// 쉘측 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct ShellSideInput<'a> {
    pub geometry: &'a MechanicalGeometry,
    pub tube_count: u32,
    /// 번들 외경(OTL) [m]
    pub bundle_diameter_m: f64,
    pub mass_flow_kg_s: f64,
    pub properties: &'a FluidProperties,
}

/// Bell-Delaware 중간값과 보정계수.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BellDelawareFactors {
    pub j_ideal: f64,
    pub f_ideal: f64,
    pub h_ideal_w_m2k: f64,
    /// 배플 컷 보정
    pub jc: f64,
    /// 누설 보정
    pub jl: f64,
    /// 번들 바이패스 보정
    pub jb: f64,
    /// 층류 보정
    pub jr: f64,
    /// 입출구 간격 보정
    pub js: f64,
    /// 압력강하 누설 보정
    pub rl: f64,
    /// 압력강하 바이패스 보정
    pub rb: f64,
    /// 압력강하 입출구 보정
    pub rs: f64,
    pub crossflow_area_m2: f64,
    pub window_area_m2: f64,
    /// 배플 사이 유효 직교류 관열 수
    pub crossflow_rows: f64,
    /// 윈도우 영역 유효 관열 수
    pub window_rows: f64,
    pub baffle_count: u32,
}

/// 쉘측 계산 결과.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ShellSideResult {
    pub htc_w_m2k: f64,
    pub pressure_drop_pa: f64,
    /// 직교류 기준 유속 [m/s]
    pub velocity_m_s: f64,
    pub reynolds: f64,
    pub mass_velocity_kg_m2s: f64,
    pub factors: Option<BellDelawareFactors>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl ShellSideResult {
    fn failed(message: String) -> Self {
        Self {
            errors: vec![message],
            ..Self::default()
        }
    }
}

/// Taborek 이상 관군 계수. (a1, a2, b1, b2) Re 구간별.
struct IdealBankCoefficients {
    bands: [(f64, f64, f64, f64); 4],
    a3: f64,
    a4: f64,
    b3: f64,
    b4: f64,
}

const TRIANGULAR_COEFFS: IdealBankCoefficients = IdealBankCoefficients {
    bands: [
        (0.321, -0.388, 0.372, -0.123),
        (0.321, -0.388, 0.486, -0.152),
        (0.593, -0.477, 4.570, -0.476),
        (1.360, -0.657, 45.100, -0.973),
    ],
    a3: 1.450,
    a4: 0.519,
    b3: 7.00,
    b4: 0.500,
};

const SQUARE_COEFFS: IdealBankCoefficients = IdealBankCoefficients {
    bands: [
        (0.370, -0.396, 0.391, -0.148),
        (0.107, -0.266, 0.0815, 0.022),
        (0.408, -0.460, 6.0900, -0.602),
        (0.900, -0.631, 32.100, -0.963),
    ],
    a3: 1.187,
    a4: 0.370,
    b3: 6.30,
    b4: 0.378,
};

/// 이상 관군 j, f 계수.
pub fn ideal_bank_factors(reynolds: f64, pitch_ratio: f64, pattern: TubePattern) -> (f64, f64) {
    let coeffs = if pattern.is_triangular() {
        &TRIANGULAR_COEFFS
    } else {
        &SQUARE_COEFFS
    };
    let band = if reynolds > 10_000.0 {
        0
    } else if reynolds > 1_000.0 {
        1
    } else if reynolds > 100.0 {
        2
    } else {
        3
    };
    let (a1, a2, b1, b2) = coeffs.bands[band];
    let re = reynolds.max(1.0);
    let a = coeffs.a3 / (1.0 + 0.14 * re.powf(coeffs.a4));
    let b = coeffs.b3 / (1.0 + 0.14 * re.powf(coeffs.b4));
    let pitch_term = 1.33 / pitch_ratio;
    let j = a1 * pitch_term.powf(a) * re.powf(a2);
    let f = b1 * pitch_term.powf(b) * re.powf(b2);
    (j, f)
}

fn safe_acos(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).acos()
}

/// Bell-Delaware 방법.
pub fn bell_delaware(input: &ShellSideInput<'_>) -> ShellSideResult {
    let g = input.geometry;
    let props = input.properties;
    let ds = g.shell_id_m;
    let d_o = g.tube_od_m;
    let pt = g.tube_pitch_m;
    let lbc = g.baffle_spacing_m;
    let bc = g.baffle_cut;
    let nt = input.tube_count as f64;
    let dotl = input.bundle_diameter_m.min(ds);
    let dctl = dotl - d_o;
    let mut warnings = Vec::new();

    if nt <= 0.0 || dctl <= 0.0 || input.mass_flow_kg_s <= 0.0 {
        return ShellSideResult::failed(
            "쉘측 계산에 필요한 튜브 개수/번들 직경/유량이 유효하지 않습니다.".into(),
        );
    }

    // 직교류 면적과 레이놀즈수
    let ptef = g.pattern.pitch_normal_effective(pt);
    let sm = lbc * ((ds - dotl) + dctl / ptef * (pt - d_o));
    if sm <= 0.0 {
        return ShellSideResult::failed("쉘측 직교류 면적이 0 이하입니다.".into());
    }
    let gs = input.mass_flow_kg_s / sm;
    let reynolds = d_o * gs / props.viscosity;
    let prandtl = props.prandtl();

    let (j_ideal, f_ideal) = ideal_bank_factors(reynolds, pt / d_o, g.pattern);
    let h_ideal = j_ideal * props.specific_heat * gs * prandtl.powf(-2.0 / 3.0);

    // 배플 컷 보정 Jc
    let theta_ctl = 2.0 * safe_acos(ds * (1.0 - 2.0 * bc) / dctl);
    let fw = theta_ctl / (2.0 * PI) - theta_ctl.sin() / (2.0 * PI);
    let fc = 1.0 - 2.0 * fw;
    let jc = 0.55 + 0.72 * fc;

    // 누설 보정 Jl
    let theta_ds = 2.0 * safe_acos(1.0 - 2.0 * bc);
    let lsb = g.shell_baffle_clearance();
    let ltb = g.tube_baffle_clearance();
    let ssb = PI * ds * (lsb / 2.0) * (2.0 * PI - theta_ds) / (2.0 * PI);
    let stb = PI / 4.0 * ((d_o + ltb).powi(2) - d_o * d_o) * nt * (1.0 - fw);
    let leak = ssb + stb;
    let rs_leak = if leak > 0.0 { ssb / leak } else { 0.0 };
    let rlm = leak / sm;
    let jl = 0.44 * (1.0 - rs_leak) + (1.0 - 0.44 * (1.0 - rs_leak)) * (-2.2 * rlm).exp();
    let p_exp = -0.15 * (1.0 + rs_leak) + 0.8;
    let rl = (-1.33 * (1.0 + rs_leak) * rlm.powf(p_exp)).exp();

    // 바이패스 보정 Jb
    let lpp = g.pattern.pitch_parallel(pt);
    let mut ntcc = ds * (1.0 - 2.0 * bc) / lpp;
    if ntcc < 1.0 {
        warnings.push(format!(
            "배플 사이 직교류 관열 수 {ntcc:.2}가 1보다 작아 1로 간주했습니다. 배플 컷을 확인하십시오."
        ));
        ntcc = 1.0;
    }
    let sb = lbc * (ds - dotl);
    let fsbp = sb / sm;
    let rss = g.sealing_strip_pairs as f64 / ntcc;
    let laminar = reynolds < 100.0;
    let (cbh, cbp) = if laminar { (1.25, 4.5) } else { (1.35, 3.7) };
    let (jb, rb) = if rss >= 0.5 {
        (1.0, 1.0)
    } else {
        let strip_term = 1.0 - (2.0 * rss).cbrt();
        (
            (-cbh * fsbp * strip_term).exp(),
            (-cbp * fsbp * strip_term).exp(),
        )
    };

    // 층류 보정 Jr
    let ntcw = 0.8 / lpp * (ds * bc - (ds - dctl) / 2.0);
    let ntcw = ntcw.max(0.0);
    let nb = g.baffle_count();
    let nc = (ntcc + ntcw) * (nb as f64 + 1.0);
    let jrl = (10.0 / nc).powf(0.18);
    let jr_raw = if reynolds >= 100.0 {
        1.0
    } else if reynolds <= 20.0 {
        jrl
    } else {
        jrl + (20.0 - reynolds) / 80.0 * (jrl - 1.0)
    };
    let jr = jr_raw.max(0.4);

    // 입출구 간격 보정 Js, Rs
    let li = g.inlet_spacing_m() / lbc;
    let lo = g.outlet_spacing_m() / lbc;
    let n_h = if laminar { 1.0 / 3.0 } else { 0.6 };
    let nbm1 = nb as f64 - 1.0;
    let js = (nbm1 + li.powf(1.0 - n_h) + lo.powf(1.0 - n_h)) / (nbm1 + li + lo);
    let n_p = if laminar { 1.0 } else { 0.2 };
    let rs = 0.5 * ((1.0 / lo).powf(2.0 - n_p) + (1.0 / li).powf(2.0 - n_p));

    let htc = h_ideal * jc * jl * jb * jr * js;

    // 압력강하
    let swg = PI / 4.0 * ds * ds * (theta_ds / (2.0 * PI) - theta_ds.sin() / (2.0 * PI));
    let swt = nt * fw * PI / 4.0 * d_o * d_o;
    let sw = swg - swt;
    if sw <= 0.0 {
        return ShellSideResult::failed("배플 윈도우 유로 면적이 0 이하입니다.".into());
    }
    let rho = props.density;
    let dp_bi = 2.0 * f_ideal * ntcc * gs * gs / rho;
    let gw = input.mass_flow_kg_s / (sm * sw).sqrt();
    let dp_wi = if laminar {
        let dw = 4.0 * sw / (PI * d_o * nt * fw + ds * theta_ds / 2.0);
        26.0 * props.viscosity * gw / rho * (ntcw / (pt - d_o) + lbc / (dw * dw))
            + gw * gw / rho
    } else {
        (2.0 + 0.6 * ntcw) * gw * gw / (2.0 * rho)
    };
    let dp_e = dp_bi * (1.0 + ntcw / ntcc) * rb * rs;
    let nbf = nb as f64;
    let pressure_drop_pa = ((nbf - 1.0) * dp_bi * rb + nbf * dp_wi) * rl + 2.0 * dp_e;

    ShellSideResult {
        htc_w_m2k: htc,
        pressure_drop_pa,
        velocity_m_s: gs / rho,
        reynolds,
        mass_velocity_kg_m2s: gs,
        factors: Some(BellDelawareFactors {
            j_ideal,
            f_ideal,
            h_ideal_w_m2k: h_ideal,
            jc,
            jl,
            jb,
            jr,
            js,
            rl,
            rb,
            rs,
            crossflow_area_m2: sm,
            window_area_m2: sw,
            crossflow_rows: ntcc,
            window_rows: ntcw,
            baffle_count: nb,
        }),
        warnings,
        errors: Vec::new(),
    }
}

/// Kern 방법 쉘측 등가직경 [m]
pub fn kern_equivalent_diameter(tube_od_m: f64, pitch_m: f64, pattern: TubePattern) -> f64 {
    let d2 = tube_od_m * tube_od_m;
    if pattern.is_triangular() {
        4.0 * (0.43 * pitch_m * pitch_m - 0.5 * PI * d2 / 4.0) / (0.5 * PI * tube_od_m)
    } else {
        4.0 * (pitch_m * pitch_m - PI * d2 / 4.0) / (PI * tube_od_m)
    }
}

/// Kern 방법. 보정계수 없이 단일 상관식을 쓴다.
pub fn kern(input: &ShellSideInput<'_>) -> ShellSideResult {
    let g = input.geometry;
    let props = input.properties;
    if input.mass_flow_kg_s <= 0.0 {
        return ShellSideResult::failed("쉘측 유량이 0 이하입니다.".into());
    }
    let area = g.shell_id_m * (g.tube_pitch_m - g.tube_od_m) * g.baffle_spacing_m / g.tube_pitch_m;
    let de = kern_equivalent_diameter(g.tube_od_m, g.tube_pitch_m, g.pattern);
    if area <= 0.0 || de <= 0.0 {
        return ShellSideResult::failed("Kern 유로 면적 또는 등가직경이 0 이하입니다.".into());
    }
    let gs = input.mass_flow_kg_s / area;
    let reynolds = gs * de / props.viscosity;
    let prandtl = props.prandtl();
    let htc = 0.36 * props.thermal_conductivity / de * reynolds.powf(0.55) * prandtl.cbrt();

    let friction = (0.576 - 0.19 * reynolds.ln()).exp();
    let nb = g.baffle_count() as f64;
    let pressure_drop_pa =
        friction * gs * gs * (nb + 1.0) * g.shell_id_m / (2.0 * props.density * de);

    let mut warnings = Vec::new();
    if !(2_000.0..=1_000_000.0).contains(&reynolds) {
        warnings.push(format!(
            "Kern 상관식 적용 범위(Re 2×10³~10⁶) 밖입니다 (Re = {reynolds:.0})."
        ));
    }

    ShellSideResult {
        htc_w_m2k: htc,
        pressure_drop_pa,
        velocity_m_s: gs / props.density,
        reynolds,
        mass_velocity_kg_m2s: gs,
        factors: None,
        warnings,
        errors: Vec::new(),
    }
}
