// crates/cli/src/logging.rs
//! 端末ロガーの初期化
//!
//! 標準出力はレポート用なので、ログはすべて標準エラーに出す。

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use crate::options::LogLevel;

/// `--log-level` があればそれを、なければ `-v` の回数からレベルを決める
#[must_use]
pub fn resolve_level(explicit: Option<LogLevel>, verbose: u8) -> LevelFilter {
    if let Some(level) = explicit {
        return level.into();
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize the terminal logger.
///
/// Safely no-ops if a logger has already been installed.
pub fn initialize(level: LevelFilter) {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();

    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}
