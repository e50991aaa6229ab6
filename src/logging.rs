use std::env;

use log::{self, LevelFilter, Metadata, Record};

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Initialize logging with a level taken from the `BROADSIDE_LOG` environment
/// variable. Defaults to `warn`; records go to stderr so the board grids on
/// stdout stay clean.
pub fn init_logging() {
    let level = env::var("BROADSIDE_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
