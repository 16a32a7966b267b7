//! 쉘앤튜브 열교환기 설계 검토 엔진. 계산 로직은 라이브러리에 두고
//! CLI(`app`, `ui_cli`)는 입출력만 담당한다. 내부 계산은 모두 SI 단위다.

pub mod analysis;
pub mod app;
pub mod auxiliary;
pub mod config;
pub mod conversion;
pub mod fluids;
pub mod geometry;
pub mod materials;
pub mod process;
pub mod quantity;
pub mod sizing;
pub mod thermal;
pub mod two_phase;
pub mod ui_cli;
pub mod units;
pub mod vibration;
