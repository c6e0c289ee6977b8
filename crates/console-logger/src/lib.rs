//! Console Logger
//!
//! `log` backend for browser apps. Lines go to `console.error`,
//! `console.warn` or `console.log` depending on level; on native targets
//! (unit tests) they go to stderr instead.

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger was already installed.
pub fn init(max_level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(max_level);
    Ok(())
}

/// Format one log line: `HH:MM:SS.mmm LEVEL [target] message`
pub fn format_line(now: DateTime<Utc>, level: Level, target: &str, message: &str) -> String {
    format!(
        "{} {:<5} [{}] {}",
        now.format("%H:%M:%S%.3f"),
        level,
        target,
        message
    )
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            Utc::now(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        write_line(record.level(), line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: String) {
    let value = wasm_bindgen::JsValue::from(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: String) {
    eprintln!("{}", line);
}
