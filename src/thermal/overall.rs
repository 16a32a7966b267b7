use serde::Serialize;

/// 총괄 전열계수 계산 입력. 모두 관 외면적 기준이다.
#[derive(Debug, Clone, Copy)]
pub struct OverallInput {
    /// 관내 열전달계수 [W/(m²·K)]
    pub tube_htc_w_m2k: f64,
    /// 쉘측 열전달계수 [W/(m²·K)]
    pub shell_htc_w_m2k: f64,
    pub tube_id_m: f64,
    pub tube_od_m: f64,
    /// 관 재질 열전도율 [W/(m·K)]
    pub wall_conductivity_w_mk: f64,
    /// 관내측 오염계수 [m²·K/W]
    pub tube_fouling_m2k_w: f64,
    /// 관외측(쉘측) 오염계수 [m²·K/W]
    pub shell_fouling_m2k_w: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct OverallCoefficient {
    pub clean_u_w_m2k: f64,
    pub fouled_u_w_m2k: f64,
    /// 관벽 저항 [m²·K/W]
    pub wall_resistance_m2k_w: f64,
    pub errors: Vec<String>,
}

/// 깨끗한 U와 오염 U를 계산한다. 0 이하 입력은 0 결과와 오류를 돌려준다.
pub fn overall_u(input: &OverallInput) -> OverallCoefficient {
    let required = [
        ("관내 열전달계수", input.tube_htc_w_m2k),
        ("쉘측 열전달계수", input.shell_htc_w_m2k),
        ("관 내경", input.tube_id_m),
        ("관 외경", input.tube_od_m),
        ("관 열전도율", input.wall_conductivity_w_mk),
    ];
    let errors: Vec<String> = required
        .iter()
        .filter(|(_, v)| !(*v > 0.0) || !v.is_finite())
        .map(|(name, v)| format!("총괄 전열계수 계산 불가: {name} = {v}"))
        .collect();
    if !errors.is_empty() {
        return OverallCoefficient {
            errors,
            ..OverallCoefficient::default()
        };
    }

    let d_o = input.tube_od_m;
    let d_i = input.tube_id_m;
    let wall = d_o * (d_o / d_i).ln() / (2.0 * input.wall_conductivity_w_mk);
    let clean = d_o / (input.tube_htc_w_m2k * d_i) + wall + 1.0 / input.shell_htc_w_m2k;
    let fouling = input.shell_fouling_m2k_w.max(0.0) + input.tube_fouling_m2k_w.max(0.0) * d_o / d_i;

    OverallCoefficient {
        clean_u_w_m2k: 1.0 / clean,
        fouled_u_w_m2k: 1.0 / (clean + fouling),
        wall_resistance_m2k_w: wall,
        errors: Vec::new(),
    }
}
