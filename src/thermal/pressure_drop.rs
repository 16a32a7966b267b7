use serde::Serialize;

use super::tube_side::LAMINAR_RE_LIMIT;

/// 관내 Fanning 마찰계수.
///
/// 층류 16/Re, 2300 ≤ Re < 10⁵ 0.079·Re^-0.25, 그 이상 0.046·Re^-0.2
pub fn fanning_friction(reynolds: f64) -> f64 {
    if reynolds <= 0.0 {
        return 0.0;
    }
    if reynolds < LAMINAR_RE_LIMIT {
        16.0 / reynolds
    } else if reynolds < 1.0e5 {
        0.079 * reynolds.powf(-0.25)
    } else {
        0.046 * reynolds.powf(-0.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TubePressureDrop {
    pub friction_factor: f64,
    /// 직관 마찰 손실 [Pa]
    pub straight_pa: f64,
    /// 패스 반환 손실 [Pa]
    pub return_pa: f64,
    pub total_pa: f64,
}

/// 관측 압력강하 (Kern). `ΔP = (4f·L·Np/Di + 4Np)·ρV²/2`
pub fn tube_side_pressure_drop(
    reynolds: f64,
    velocity_m_s: f64,
    density_kg_m3: f64,
    tube_id_m: f64,
    tube_length_m: f64,
    passes: u32,
) -> TubePressureDrop {
    if tube_id_m <= 0.0 {
        return TubePressureDrop::default();
    }
    let f = fanning_friction(reynolds);
    let np = passes.max(1) as f64;
    let dynamic = density_kg_m3 * velocity_m_s * velocity_m_s / 2.0;
    let straight_pa = 4.0 * f * tube_length_m * np / tube_id_m * dynamic;
    let return_pa = 4.0 * np * dynamic;
    TubePressureDrop {
        friction_factor: f,
        straight_pa,
        return_pa,
        total_pa: straight_pa + return_pa,
    }
}
