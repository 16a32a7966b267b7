use serde::{Deserialize, Serialize};

/// Darcy-Weisbach 배관 압력손실 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipeLossInput {
    /// 질량 유량 [kg/s]
    pub mass_flow_kg_s: f64,
    pub density_kg_m3: f64,
    /// 점도 [Pa·s]
    pub viscosity_pa_s: f64,
    /// 내경 [m]
    pub diameter_m: f64,
    /// 길이 [m]
    pub length_m: f64,
    /// 절대 거칠기 [m]. 기본 상용강관 0.045 mm.
    #[serde(default = "default_roughness")]
    pub roughness_m: f64,
    /// 국부손실계수 합 ΣK
    #[serde(default)]
    pub fittings_k: f64,
}

fn default_roughness() -> f64 {
    4.5e-5
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PipeLossResult {
    pub velocity_m_s: f64,
    pub reynolds: f64,
    /// Darcy 마찰계수
    pub friction_factor: f64,
    pub pressure_drop_pa: f64,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

/// Darcy 마찰계수. 층류 64/Re, 난류 Haaland 식.
pub fn darcy_friction(reynolds: f64, relative_roughness: f64) -> f64 {
    if reynolds <= 0.0 {
        0.0
    } else if reynolds < 2300.0 {
        64.0 / reynolds
    } else {
        let log_term = ((relative_roughness / 3.7).powf(1.11) + 6.9 / reynolds).log10();
        1.0 / (1.8 * log_term).powi(2)
    }
}

/// Darcy-Weisbach 식으로 배관 압력손실을 계산한다.
pub fn pipe_pressure_loss(input: &PipeLossInput) -> PipeLossResult {
    let mut errors = Vec::new();
    for (name, value) in [
        ("밀도", input.density_kg_m3),
        ("점도", input.viscosity_pa_s),
        ("내경", input.diameter_m),
    ] {
        if !(value > 0.0) {
            errors.push(format!("{name}은(는) 0보다 커야 합니다."));
        }
    }
    if input.mass_flow_kg_s < 0.0 || input.length_m < 0.0 {
        errors.push("유량과 길이는 음수일 수 없습니다.".into());
    }
    if !errors.is_empty() {
        return PipeLossResult {
            errors,
            ..PipeLossResult::default()
        };
    }

    let area = std::f64::consts::PI * input.diameter_m * input.diameter_m / 4.0;
    let velocity = input.mass_flow_kg_s / (input.density_kg_m3 * area);
    let reynolds = input.density_kg_m3 * velocity * input.diameter_m / input.viscosity_pa_s;
    let friction_factor = darcy_friction(reynolds, input.roughness_m / input.diameter_m);
    let dynamic = input.density_kg_m3 * velocity * velocity / 2.0;
    let pressure_drop_pa =
        (friction_factor * input.length_m / input.diameter_m + input.fittings_k) * dynamic;

    let mut warnings = Vec::new();
    if (2300.0..4000.0).contains(&reynolds) {
        warnings.push(format!("천이 영역(Re = {reynolds:.0})으로 마찰계수 불확실성이 큽니다."));
    }

    PipeLossResult {
        velocity_m_s: velocity,
        reynolds,
        friction_factor,
        pressure_drop_pa,
        warnings,
        errors,
    }
}

/// 목표 유속을 만족하는 배관 내경 [m].
pub fn pipe_size_for_velocity(mass_flow_kg_s: f64, density_kg_m3: f64, target_velocity_m_s: f64) -> f64 {
    if density_kg_m3 <= 0.0 {
        return 0.0;
    }
    let flow_m3_s = mass_flow_kg_s / density_kg_m3;
    let area = flow_m3_s / target_velocity_m_s.max(0.1);
    (4.0 * area / std::f64::consts::PI).sqrt()
}
