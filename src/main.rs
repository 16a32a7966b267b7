use std::io::Write;

use clap::Parser;
use env_logger::{Builder, Target};
use log::LevelFilter;
use shell_tube_toolbox::app::{self, Cli};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 선택한 명령을 실행한다.
fn main() {
    let cli = Cli::parse();
    init_logging(Some(&cli.log_level));

    if let Err(err) = try_run(cli) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = app::load_config(cli.config.as_deref())?;
    app::run(cli.command, &mut cfg)?;
    Ok(())
}

/// 로그 레벨 문자열이 해석되지 않으면 `RUST_LOG`, 그마저 없으면 warn을 쓴다.
/// 결과 출력과 섞이지 않도록 로그는 stderr로 보낸다.
fn init_logging(level: Option<&str>) {
    let log_level = level
        .and_then(|l| l.parse::<LevelFilter>().ok())
        .or_else(|| {
            std::env::var("RUST_LOG")
                .ok()
                .and_then(|v| v.parse::<LevelFilter>().ok())
        })
        .unwrap_or(LevelFilter::Warn);

    Builder::new()
        .filter_level(log_level)
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {:5} {}] {}",
                buf.timestamp_seconds(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    log::debug!("로그 초기화 (Level: {log_level})");
}
