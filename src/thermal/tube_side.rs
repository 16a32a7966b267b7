use serde::Serialize;

/// 층류 상한 레이놀즈수
pub const LAMINAR_RE_LIMIT: f64 = 2_300.0;
/// 천이 영역 상한 (유동 영역 분류 기준)
pub const TRANSITION_RE_LIMIT: f64 = 4_000.0;
/// Dittus-Boelter 적용 하한
pub const TURBULENT_CORRELATION_RE: f64 = 10_000.0;
/// 층류 완전발달 Nu (벽면 온도 일정)
pub const LAMINAR_NUSSELT: f64 = 3.66;

/// 관내 유동 영역.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowRegime {
    #[default]
    Laminar,
    Transitional,
    Turbulent,
}

/// 레이놀즈수로 유동 영역을 분류한다.
pub fn classify_regime(reynolds: f64) -> FlowRegime {
    if reynolds < LAMINAR_RE_LIMIT {
        FlowRegime::Laminar
    } else if reynolds < TRANSITION_RE_LIMIT {
        FlowRegime::Transitional
    } else {
        FlowRegime::Turbulent
    }
}

/// Nu 계산에 쓰인 상관식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TubeCorrelation {
    #[default]
    LaminarConstantWall,
    Gnielinski,
    DittusBoelter,
}

/// 관내 열전달 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct TubeSideInput {
    pub reynolds: f64,
    pub prandtl: f64,
    /// 유체 열전도율 [W/(m·K)]
    pub conductivity_w_mk: f64,
    /// 관 내경 [m]
    pub inner_diameter_m: f64,
    /// true면 유체가 가열됨 (Pr 지수 0.4), false면 냉각 (0.3)
    pub heating: bool,
    /// 벌크/벽면 점도비 μb/μw. `Some`이면 Sieder-Tate 보정을 적용한다.
    pub viscosity_ratio: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TubeSideHtc {
    pub nusselt: f64,
    pub htc_w_m2k: f64,
    pub regime: FlowRegime,
    pub correlation: TubeCorrelation,
}

fn dittus_boelter(reynolds: f64, prandtl: f64, heating: bool) -> f64 {
    let n = if heating { 0.4 } else { 0.3 };
    0.023 * reynolds.powf(0.8) * prandtl.powf(n)
}

fn gnielinski(reynolds: f64, prandtl: f64) -> f64 {
    let f = (0.79 * reynolds.ln() - 1.64).powi(-2);
    let f8 = f / 8.0;
    f8 * (reynolds - 1000.0) * prandtl / (1.0 + 12.7 * f8.sqrt() * (prandtl.powf(2.0 / 3.0) - 1.0))
}

/// 관내 누셀수.
///
/// - Re < 2300: 3.66
/// - 2300 ≤ Re < 10⁴: Gnielinski. 양 끝에서 층류값과 Dittus-Boelter 값에 이어지도록
///   Re=10⁴ 기준으로 척도를 맞추고 층류값과 선형 가중한다.
/// - Re ≥ 10⁴: Dittus-Boelter
pub fn tube_nusselt(reynolds: f64, prandtl: f64, heating: bool) -> (f64, TubeCorrelation) {
    if reynolds < LAMINAR_RE_LIMIT {
        return (LAMINAR_NUSSELT, TubeCorrelation::LaminarConstantWall);
    }
    if reynolds < TURBULENT_CORRELATION_RE {
        let scale = dittus_boelter(TURBULENT_CORRELATION_RE, prandtl, heating)
            / gnielinski(TURBULENT_CORRELATION_RE, prandtl);
        let gamma = (reynolds - LAMINAR_RE_LIMIT) / (TURBULENT_CORRELATION_RE - LAMINAR_RE_LIMIT);
        let nu = (1.0 - gamma) * LAMINAR_NUSSELT + gamma * gnielinski(reynolds, prandtl) * scale;
        return (nu, TubeCorrelation::Gnielinski);
    }
    (dittus_boelter(reynolds, prandtl, heating), TubeCorrelation::DittusBoelter)
}

/// 관내 열전달계수 h = Nu·k/Di.
pub fn tube_side_htc(input: &TubeSideInput) -> TubeSideHtc {
    let (mut nusselt, correlation) = tube_nusselt(input.reynolds, input.prandtl, input.heating);
    if correlation == TubeCorrelation::DittusBoelter {
        if let Some(ratio) = input.viscosity_ratio.filter(|r| *r > 0.0 && r.is_finite()) {
            nusselt *= ratio.powf(0.14);
        }
    }
    let htc_w_m2k = if input.inner_diameter_m > 0.0 {
        nusselt * input.conductivity_w_mk / input.inner_diameter_m
    } else {
        0.0
    };
    TubeSideHtc {
        nusselt,
        htc_w_m2k,
        regime: classify_regime(input.reynolds),
        correlation,
    }
}
