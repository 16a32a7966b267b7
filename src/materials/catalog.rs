//! 튜브 재료 카탈로그와 온도별 허용응력 표.
//! 값은 ASME Sec. II-D 근사 참고치이며 설계 시 최신 코드로 검증해야 한다.

use serde::Serialize;

use crate::geometry::TubeMaterialProps;

#[derive(Debug, Clone, Copy)]
pub struct TempPoint {
    pub temp_c: f64,
    pub value_mpa: f64,
}

impl TempPoint {
    pub const fn new(temp_c: f64, value_mpa: f64) -> Self {
        Self { temp_c, value_mpa }
    }
}

const fn tp(temp_c: f64, value_mpa: f64) -> TempPoint {
    TempPoint::new(temp_c, value_mpa)
}

/// 재료 계열.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialClass {
    CarbonSteel,
    LowAlloy,
    AusteniticStainless,
    DuplexStainless,
    NickelAlloy,
    Titanium,
    CopperNickel,
}

#[derive(Debug)]
pub struct MaterialData {
    pub code: &'static str,
    pub name: &'static str,
    pub class: MaterialClass,
    pub min_temp_c: f64,
    pub max_temp_c: f64,
    /// NACE MR0175/ISO 15156 등재 여부
    pub nace_listed: bool,
    /// 기준 부식속도 [mm/y]
    pub base_corrosion_mm_y: f64,
    /// 공식 저항 당량수 PREN
    pub pren: f64,
    /// 탄소강 대비 상대 가격
    pub cost_factor: f64,
    /// 해수 중 갈바닉 전위 [V vs SCE]
    pub galvanic_potential_v: f64,
    pub elastic_modulus_gpa: f64,
    pub density_kg_m3: f64,
    pub conductivity_w_mk: f64,
    pub allowable: &'static [TempPoint],
}

impl MaterialData {
    /// 진동/열전도 계산용 물성
    pub fn tube_props(&self) -> TubeMaterialProps {
        TubeMaterialProps {
            elastic_modulus_pa: self.elastic_modulus_gpa * 1.0e9,
            density_kg_m3: self.density_kg_m3,
            thermal_conductivity_w_mk: self.conductivity_w_mk,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaterialValue {
    pub value_mpa: f64,
    pub source_temp_c: f64,
    /// true면 테이블 범위 밖이라 가장자리 값으로 클램프됨을 의미한다.
    pub clamped: bool,
}

pub fn materials() -> &'static [MaterialData] {
    MATERIALS
}

pub fn find_material(code: &str) -> Option<&'static MaterialData> {
    MATERIALS
        .iter()
        .find(|m| m.code.eq_ignore_ascii_case(code) || m.name.eq_ignore_ascii_case(code))
}

pub fn allowable_stress(code: &str, temp_c: f64) -> Option<MaterialValue> {
    let mat = find_material(code)?;
    interpolate(mat.allowable, temp_c)
}

fn edge(p: TempPoint) -> MaterialValue {
    MaterialValue {
        value_mpa: p.value_mpa,
        source_temp_c: p.temp_c,
        clamped: true,
    }
}

fn interpolate(points: &[TempPoint], temp_c: f64) -> Option<MaterialValue> {
    let first = *points.first()?;
    let last = *points.last()?;
    if points.len() == 1 || temp_c <= first.temp_c {
        return Some(MaterialValue {
            clamped: temp_c < first.temp_c || points.len() == 1,
            ..edge(first)
        });
    }
    if temp_c >= last.temp_c {
        return Some(MaterialValue {
            clamped: temp_c > last.temp_c,
            ..edge(last)
        });
    }
    points.windows(2).find_map(|win| {
        let (a, b) = (win[0], win[1]);
        (temp_c >= a.temp_c && temp_c <= b.temp_c).then(|| {
            let frac = (temp_c - a.temp_c) / (b.temp_c - a.temp_c);
            MaterialValue {
                value_mpa: a.value_mpa + frac * (b.value_mpa - a.value_mpa),
                source_temp_c: temp_c,
                clamped: false,
            }
        })
    })
}

const MATERIALS: &[MaterialData] = &[
    MaterialData {
        code: "SA179",
        name: "SA-179 Carbon Steel",
        class: MaterialClass::CarbonSteel,
        min_temp_c: -29.0,
        max_temp_c: 425.0,
        nace_listed: true,
        base_corrosion_mm_y: 0.25,
        pren: 0.0,
        cost_factor: 1.0,
        galvanic_potential_v: -0.61,
        elastic_modulus_gpa: 203.0,
        density_kg_m3: 7850.0,
        conductivity_w_mk: 51.0,
        allowable: &[
            tp(-29.0, 92.4),
            tp(343.0, 92.4),
            tp(371.0, 89.0),
            tp(399.0, 81.0),
            tp(425.0, 70.0),
        ],
    },
    MaterialData {
        code: "SA213T11",
        name: "SA-213 T11 1.25Cr-0.5Mo",
        class: MaterialClass::LowAlloy,
        min_temp_c: -29.0,
        max_temp_c: 593.0,
        nace_listed: true,
        base_corrosion_mm_y: 0.15,
        pren: 2.9,
        cost_factor: 1.6,
        galvanic_potential_v: -0.58,
        elastic_modulus_gpa: 204.0,
        density_kg_m3: 7860.0,
        conductivity_w_mk: 41.0,
        allowable: &[
            tp(-29.0, 118.0),
            tp(300.0, 112.0),
            tp(400.0, 104.0),
            tp(450.0, 99.0),
            tp(500.0, 78.0),
            tp(550.0, 45.0),
            tp(593.0, 26.0),
        ],
    },
    MaterialData {
        code: "TP304L",
        name: "SA-213 TP304L",
        class: MaterialClass::AusteniticStainless,
        min_temp_c: -196.0,
        max_temp_c: 425.0,
        nace_listed: true,
        base_corrosion_mm_y: 0.02,
        pren: 18.0,
        cost_factor: 2.5,
        galvanic_potential_v: -0.08,
        elastic_modulus_gpa: 195.0,
        density_kg_m3: 7900.0,
        conductivity_w_mk: 16.2,
        allowable: &[
            tp(-196.0, 115.0),
            tp(100.0, 115.0),
            tp(200.0, 107.0),
            tp(300.0, 98.0),
            tp(425.0, 89.0),
        ],
    },
    MaterialData {
        code: "TP316L",
        name: "SA-213 TP316L",
        class: MaterialClass::AusteniticStainless,
        min_temp_c: -196.0,
        max_temp_c: 454.0,
        nace_listed: true,
        base_corrosion_mm_y: 0.01,
        pren: 24.0,
        cost_factor: 3.0,
        galvanic_potential_v: -0.05,
        elastic_modulus_gpa: 193.0,
        density_kg_m3: 8000.0,
        conductivity_w_mk: 16.3,
        allowable: &[
            tp(-196.0, 115.0),
            tp(100.0, 115.0),
            tp(200.0, 105.0),
            tp(300.0, 96.0),
            tp(454.0, 85.0),
        ],
    },
    MaterialData {
        code: "S32205",
        name: "Duplex 2205 (UNS S32205)",
        class: MaterialClass::DuplexStainless,
        min_temp_c: -50.0,
        max_temp_c: 315.0,
        nace_listed: true,
        base_corrosion_mm_y: 0.005,
        pren: 35.0,
        cost_factor: 4.0,
        galvanic_potential_v: -0.03,
        elastic_modulus_gpa: 200.0,
        density_kg_m3: 7800.0,
        conductivity_w_mk: 19.0,
        allowable: &[
            tp(-50.0, 207.0),
            tp(100.0, 200.0),
            tp(200.0, 186.0),
            tp(315.0, 179.0),
        ],
    },
    MaterialData {
        code: "N06625",
        name: "Alloy 625 (UNS N06625)",
        class: MaterialClass::NickelAlloy,
        min_temp_c: -196.0,
        max_temp_c: 645.0,
        nace_listed: true,
        base_corrosion_mm_y: 0.002,
        pren: 51.0,
        cost_factor: 10.0,
        galvanic_potential_v: -0.02,
        elastic_modulus_gpa: 207.0,
        density_kg_m3: 8440.0,
        conductivity_w_mk: 9.8,
        allowable: &[
            tp(-196.0, 241.0),
            tp(300.0, 229.0),
            tp(500.0, 218.0),
            tp(645.0, 200.0),
        ],
    },
    MaterialData {
        code: "TIGR2",
        name: "Titanium Grade 2",
        class: MaterialClass::Titanium,
        min_temp_c: -60.0,
        max_temp_c: 315.0,
        nace_listed: true,
        base_corrosion_mm_y: 0.001,
        pren: 0.0,
        cost_factor: 6.0,
        galvanic_potential_v: 0.0,
        elastic_modulus_gpa: 107.0,
        density_kg_m3: 4510.0,
        conductivity_w_mk: 21.9,
        allowable: &[
            tp(-60.0, 99.0),
            tp(100.0, 86.0),
            tp(200.0, 66.0),
            tp(315.0, 50.0),
        ],
    },
    MaterialData {
        code: "C70600",
        name: "90/10 Copper-Nickel (C70600)",
        class: MaterialClass::CopperNickel,
        min_temp_c: -196.0,
        max_temp_c: 232.0,
        nace_listed: false,
        base_corrosion_mm_y: 0.025,
        pren: 0.0,
        cost_factor: 2.0,
        galvanic_potential_v: -0.27,
        elastic_modulus_gpa: 135.0,
        density_kg_m3: 8940.0,
        conductivity_w_mk: 50.0,
        allowable: &[
            tp(-196.0, 68.9),
            tp(100.0, 66.0),
            tp(150.0, 64.0),
            tp(232.0, 58.0),
        ],
    },
];
