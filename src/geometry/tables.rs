/// 표준 튜브/쉘 치수와 TEMA 튜브 개수 표.
/// 값은 스크리닝 참고용이며 최종 설계는 제작사 레이아웃으로 확인해야 한다.

/// 표준 튜브 외경 [mm] (1/4" ~ 2")
pub const STANDARD_TUBE_OD_MM: [f64; 9] = [6.35, 9.525, 12.7, 15.875, 19.05, 25.4, 31.75, 38.1, 50.8];

/// BWG 게이지와 관 두께 [mm]
pub const BWG_WALL_MM: [(u32, f64); 6] = [
    (10, 3.404),
    (12, 2.769),
    (14, 2.108),
    (16, 1.651),
    (18, 1.245),
    (20, 0.889),
];

/// 표준 쉘 내경 [mm]
pub const STANDARD_SHELL_ID_MM: [f64; 22] = [
    205.0, 257.0, 307.0, 337.0, 387.0, 438.0, 489.0, 540.0, 591.0, 635.0, 686.0, 737.0, 787.0,
    838.0, 889.0, 940.0, 991.0, 1067.0, 1143.0, 1219.0, 1372.0, 1524.0,
];

/// 표준 튜브 길이 [m] (6, 8, 10, 12, 16, 20, 24 ft)
pub const STANDARD_TUBE_LENGTH_M: [f64; 7] = [1.829, 2.438, 3.048, 3.658, 4.877, 6.096, 7.315];

/// BWG 게이지에 해당하는 관 두께 [m]
pub fn bwg_wall_m(gauge: u32) -> Option<f64> {
    BWG_WALL_MM
        .iter()
        .find(|(g, _)| *g == gauge)
        .map(|(_, mm)| mm / 1000.0)
}

#[derive(Debug, Clone, Copy)]
pub struct SpanPoint {
    pub tube_od_mm: f64,
    pub span_mm: f64,
}

const fn sp(tube_od_mm: f64, span_mm: f64) -> SpanPoint {
    SpanPoint { tube_od_mm, span_mm }
}

/// TEMA RCB-4.52 강관 최대 무지지 스팬
const MAX_UNSUPPORTED_SPAN: &[SpanPoint] = &[
    sp(6.35, 660.0),
    sp(9.525, 889.0),
    sp(12.7, 1118.0),
    sp(15.875, 1321.0),
    sp(19.05, 1524.0),
    sp(25.4, 1880.0),
    sp(31.75, 2235.0),
    sp(38.1, 2540.0),
    sp(50.8, 3175.0),
];

/// 튜브 외경에 대한 최대 무지지 스팬 [m]. 표 범위 밖은 경계값을 쓴다.
pub fn max_unsupported_span_m(tube_od_m: f64) -> f64 {
    let od_mm = tube_od_m * 1000.0;
    let first = MAX_UNSUPPORTED_SPAN[0];
    let last = MAX_UNSUPPORTED_SPAN[MAX_UNSUPPORTED_SPAN.len() - 1];
    if od_mm <= first.tube_od_mm {
        return first.span_mm / 1000.0;
    }
    if od_mm >= last.tube_od_mm {
        return last.span_mm / 1000.0;
    }
    for win in MAX_UNSUPPORTED_SPAN.windows(2) {
        let (a, b) = (win[0], win[1]);
        if od_mm >= a.tube_od_mm && od_mm <= b.tube_od_mm {
            let frac = (od_mm - a.tube_od_mm) / (b.tube_od_mm - a.tube_od_mm);
            return (a.span_mm + frac * (b.span_mm - a.span_mm)) / 1000.0;
        }
    }
    last.span_mm / 1000.0
}

/// 튜브 개수 표의 한 행: 쉘 내경과 1/2/4 패스 튜브 개수.
#[derive(Debug, Clone, Copy)]
pub struct TubeCountRow {
    pub shell_id_mm: f64,
    pub counts: [u32; 3],
}

/// 특정 튜브 외경/피치/배열 조합의 튜브 개수 표.
#[derive(Debug)]
pub struct TubeCountTable {
    pub tube_od_mm: f64,
    pub pitch_mm: f64,
    pub triangular: bool,
    pub rows: &'static [TubeCountRow],
}

const fn row(shell_id_mm: f64, one: u32, two: u32, four: u32) -> TubeCountRow {
    TubeCountRow {
        shell_id_mm,
        counts: [one, two, four],
    }
}

pub fn tube_count_tables() -> &'static [TubeCountTable] {
    TUBE_COUNT_TABLES
}

const TUBE_COUNT_TABLES: &[TubeCountTable] = &[
    // 3/4" OD, 15/16" 삼각 피치
    TubeCountTable {
        tube_od_mm: 19.05,
        pitch_mm: 23.81,
        triangular: true,
        rows: &[
            row(205.0, 37, 30, 24),
            row(257.0, 61, 52, 40),
            row(307.0, 100, 90, 76),
            row(337.0, 109, 96, 84),
            row(387.0, 151, 138, 122),
            row(438.0, 203, 188, 166),
            row(489.0, 262, 244, 220),
            row(540.0, 316, 296, 270),
            row(591.0, 384, 362, 332),
            row(635.0, 470, 448, 410),
            row(686.0, 559, 526, 488),
            row(737.0, 630, 600, 560),
            row(787.0, 745, 708, 662),
            row(838.0, 856, 818, 770),
            row(889.0, 970, 932, 872),
            row(940.0, 1074, 1032, 972),
            row(991.0, 1206, 1160, 1098),
        ],
    },
    // 3/4" OD, 1" 정사각 피치
    TubeCountTable {
        tube_od_mm: 19.05,
        pitch_mm: 25.4,
        triangular: false,
        rows: &[
            row(205.0, 32, 26, 20),
            row(257.0, 52, 48, 40),
            row(307.0, 81, 76, 68),
            row(337.0, 97, 90, 82),
            row(387.0, 137, 124, 116),
            row(438.0, 177, 166, 158),
            row(489.0, 224, 220, 204),
            row(540.0, 277, 270, 246),
            row(591.0, 341, 324, 308),
            row(635.0, 413, 394, 370),
            row(686.0, 481, 460, 432),
            row(737.0, 553, 526, 498),
            row(787.0, 657, 640, 600),
            row(838.0, 749, 718, 688),
            row(889.0, 845, 824, 780),
            row(940.0, 934, 914, 868),
            row(991.0, 1049, 1024, 982),
        ],
    },
    // 1" OD, 1-1/4" 삼각 피치
    TubeCountTable {
        tube_od_mm: 25.4,
        pitch_mm: 31.75,
        triangular: true,
        rows: &[
            row(205.0, 21, 16, 16),
            row(257.0, 32, 32, 26),
            row(307.0, 55, 52, 48),
            row(337.0, 68, 66, 58),
            row(387.0, 91, 86, 80),
            row(438.0, 131, 118, 106),
            row(489.0, 163, 152, 140),
            row(540.0, 199, 188, 170),
            row(591.0, 241, 232, 212),
            row(635.0, 294, 282, 256),
            row(686.0, 349, 334, 302),
            row(737.0, 397, 376, 342),
            row(787.0, 472, 454, 420),
            row(838.0, 538, 522, 482),
            row(889.0, 608, 592, 550),
            row(940.0, 674, 664, 614),
            row(991.0, 766, 736, 688),
        ],
    },
    // 1" OD, 1-1/4" 정사각 피치
    TubeCountTable {
        tube_od_mm: 25.4,
        pitch_mm: 31.75,
        triangular: false,
        rows: &[
            row(205.0, 21, 16, 14),
            row(257.0, 32, 32, 26),
            row(307.0, 48, 45, 40),
            row(337.0, 61, 56, 52),
            row(387.0, 81, 76, 68),
            row(438.0, 112, 112, 96),
            row(489.0, 138, 132, 128),
            row(540.0, 177, 166, 158),
            row(591.0, 213, 208, 192),
            row(635.0, 260, 252, 238),
            row(686.0, 300, 288, 278),
            row(737.0, 341, 326, 300),
            row(787.0, 406, 398, 380),
            row(838.0, 465, 460, 432),
            row(889.0, 522, 518, 488),
            row(940.0, 596, 574, 546),
            row(991.0, 665, 644, 614),
        ],
    },
];

// NOTE:
// - Tube counts follow the usual fixed-tubesheet layout tables (Kern / Perry style) for screening.
// - Six and eight pass layouts use the four-pass column; expect a few percent fewer tubes in practice.
