use crate::process::FlowArrangement;

fn clamp_unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// 향류 유용도. Cr = 1에서는 NTU/(1+NTU).
pub fn counter_flow(ntu: f64, cr: f64) -> f64 {
    if ntu <= 0.0 {
        return 0.0;
    }
    if (1.0 - cr).abs() < 1e-9 {
        return clamp_unit(ntu / (1.0 + ntu));
    }
    let e = (-ntu * (1.0 - cr)).exp();
    clamp_unit((1.0 - e) / (1.0 - cr * e))
}

/// 병류 유용도
pub fn parallel_flow(ntu: f64, cr: f64) -> f64 {
    if ntu <= 0.0 {
        return 0.0;
    }
    clamp_unit((1.0 - (-ntu * (1.0 + cr)).exp()) / (1.0 + cr))
}

/// 쉘 1패스, 튜브 짝수 패스 유용도
pub fn shell_tube_one_pass(ntu: f64, cr: f64) -> f64 {
    if ntu <= 0.0 {
        return 0.0;
    }
    let s = (1.0 + cr * cr).sqrt();
    let e = (-ntu * s).exp();
    clamp_unit(2.0 / (1.0 + cr + s * (1.0 + e) / (1.0 - e)))
}

/// 양쪽 비혼합 직교류 유용도 (근사식)
pub fn crossflow_unmixed(ntu: f64, cr: f64) -> f64 {
    if ntu <= 0.0 {
        return 0.0;
    }
    if cr <= 1e-9 {
        return clamp_unit(1.0 - (-ntu).exp());
    }
    let value = 1.0 - ((ntu.powf(0.22) / cr) * ((-cr * ntu.powf(0.78)).exp() - 1.0)).exp();
    clamp_unit(value)
}

/// 유동 배열별 유용도 ε. 결과는 항상 [0, 1] 범위이다.
pub fn effectiveness(ntu: f64, cr: f64, arrangement: FlowArrangement) -> f64 {
    let cr = cr.clamp(0.0, 1.0);
    match arrangement {
        FlowArrangement::CounterFlow => counter_flow(ntu, cr),
        FlowArrangement::ParallelFlow => parallel_flow(ntu, cr),
        FlowArrangement::ShellTube12 | FlowArrangement::ShellTube14 => {
            shell_tube_one_pass(ntu, cr)
        }
        FlowArrangement::CrossFlow => crossflow_unmixed(ntu, cr),
    }
}

/// 열용량 유량으로부터 (Cmin, Cmax, Cr)을 구한다.
pub fn capacity_rates(hot_capacity_w_k: f64, cold_capacity_w_k: f64) -> (f64, f64, f64) {
    let c_min = hot_capacity_w_k.min(cold_capacity_w_k);
    let c_max = hot_capacity_w_k.max(cold_capacity_w_k);
    let cr = if c_max > 0.0 { c_min / c_max } else { 0.0 };
    (c_min, c_max, cr)
}

/// NTU = UA/Cmin
pub fn ntu(u_w_m2k: f64, area_m2: f64, c_min_w_k: f64) -> f64 {
    if c_min_w_k > 0.0 {
        u_w_m2k * area_m2 / c_min_w_k
    } else {
        0.0
    }
}

/// 유용도 기준 열량 Q = ε·Cmin·(Th,in - Tc,in) [W]
pub fn duty_from_effectiveness(effectiveness: f64, c_min_w_k: f64, hot_in_c: f64, cold_in_c: f64) -> f64 {
    effectiveness * c_min_w_k * (hot_in_c - cold_in_c)
}
