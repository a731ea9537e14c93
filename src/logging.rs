use std::env;

use log::{LevelFilter, Metadata, Record};

/// Writes `LEVEL [target] message` lines to stderr.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the broadside logger.
///
/// `BROADSIDE_LOG` picks the level (`warn`, `debug`, `trace`, ...); anything
/// unset or unreadable means `info`. At `debug` the factory reports layout
/// restarts and `simulate` reports every game; `trace` adds each placement,
/// turn and hunt decision. Records go to stderr so the JSON printed by `sim`
/// and `simulate --json` stays clean on stdout.
///
/// Calling this more than once keeps the first logger.
pub fn init_logging() {
    let level = env::var("BROADSIDE_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
