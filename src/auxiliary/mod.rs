//! 열교환기 주변 보조 계산기: 펌프 NPSH/동력, 배관 압력손실/관경.

pub mod pipe;
pub mod pump;

pub use pipe::{pipe_pressure_loss, pipe_size_for_velocity, PipeLossInput, PipeLossResult};
pub use pump::{compute_pump, PumpInput, PumpResult};
