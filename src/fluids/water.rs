//! 물/증기 포화 물성. IAPWS-IF97 Region 4 포화선 식과 seuif97 크레이트를 사용한다.
//! 입력: 압력(Pa abs), 온도(°C)

use seuif97::{pt, OV};

const P4_STAR_MPA: f64 = 22.064;
const T4_STAR_K: f64 = 647.096;
const R4_N: [f64; 6] = [
    -7.859_517_83,
    1.844_082_59,
    -11.786_649_7,
    22.680_741_1,
    -15.961_871_9,
    1.801_225_02,
];

/// 포화선 계산 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum SaturationError {
    /// 0~374°C(임계점) 범위를 벗어난 온도
    TemperatureOutOfRange(f64),
    /// 0 이하 또는 임계압 초과 압력
    PressureOutOfRange(f64),
}

impl std::fmt::Display for SaturationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaturationError::TemperatureOutOfRange(t) => {
                write!(f, "포화 온도 범위(0~374°C)를 벗어났습니다: {t:.1}°C")
            }
            SaturationError::PressureOutOfRange(p) => {
                write!(f, "포화 압력 범위(0~22.064 MPa)를 벗어났습니다: {p:.0} Pa")
            }
        }
    }
}

impl std::error::Error for SaturationError {}

// ln(p/p*) = (T*/T)·Σ nᵢ·θ^eᵢ, θ = 1 - T/T*
fn region4_series(theta: f64) -> f64 {
    R4_N[0] * theta
        + R4_N[1] * theta.powf(1.5)
        + R4_N[2] * theta.powi(3)
        + R4_N[3] * theta.powf(3.5)
        + R4_N[4] * theta.powi(4)
        + R4_N[5] * theta.powf(7.5)
}

fn region4_series_derivative(theta: f64) -> f64 {
    R4_N[0]
        + 1.5 * R4_N[1] * theta.powf(0.5)
        + 3.0 * R4_N[2] * theta.powi(2)
        + 3.5 * R4_N[3] * theta.powf(2.5)
        + 4.0 * R4_N[4] * theta.powi(3)
        + 7.5 * R4_N[5] * theta.powf(6.5)
}

/// 물의 포화압력 [Pa abs].
pub fn saturation_pressure_pa(temp_c: f64) -> Result<f64, SaturationError> {
    let t_k = temp_c + 273.15;
    if t_k < 273.15 || t_k > T4_STAR_K {
        return Err(SaturationError::TemperatureOutOfRange(temp_c));
    }
    let theta = 1.0 - t_k / T4_STAR_K;
    let p_mpa = P4_STAR_MPA * ((T4_STAR_K / t_k) * region4_series(theta)).exp();
    Ok(p_mpa * 1.0e6)
}

/// 물의 포화온도 [°C]. 뉴턴 반복으로 포화압력 식을 역산한다.
pub fn saturation_temperature_c(pressure_pa: f64) -> Result<f64, SaturationError> {
    if pressure_pa <= 0.0 || pressure_pa > P4_STAR_MPA * 1.0e6 {
        return Err(SaturationError::PressureOutOfRange(pressure_pa));
    }
    let target = (pressure_pa / 1.0e6 / P4_STAR_MPA).ln();
    let mut t_k = 373.15_f64;
    for _ in 0..50 {
        let theta = 1.0 - t_k / T4_STAR_K;
        let series = region4_series(theta);
        let f = (T4_STAR_K / t_k) * series - target;
        let dfd_t = -(T4_STAR_K / t_k.powi(2)) * series
            - (1.0 / t_k) * region4_series_derivative(theta);
        let delta = f / dfd_t;
        t_k = (t_k - delta).clamp(273.16, T4_STAR_K);
        if delta.abs() < 1e-8 {
            break;
        }
    }
    Ok(t_k - 273.15)
}

/// IF97로 계산한 물(액체/증기) 밀도 [kg/m³]. 계산 실패 시 `None`.
pub fn density_kg_m3(pressure_pa: f64, temp_c: f64) -> Option<f64> {
    let v = pt(pressure_pa / 1.0e6, temp_c, OV);
    (v.is_finite() && v > 0.0).then(|| 1.0 / v)
}
