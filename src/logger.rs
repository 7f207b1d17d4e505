//! Browser Console Logger
//!
//! Forwards `log` records to `web_sys::console`.

use std::fmt;

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

#[cfg(debug_assertions)]
const MAX_LEVEL: LevelFilter = LevelFilter::Debug;
#[cfg(not(debug_assertions))]
const MAX_LEVEL: LevelFilter = LevelFilter::Info;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_record(record.level(), record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Safe to call more than once.
pub fn init() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(MAX_LEVEL);
    }
}

/// `LEVEL crate: message`, with the module path cut to its crate name
fn format_record(level: Level, target: &str, args: &fmt::Arguments) -> String {
    let krate = target.split("::").next().unwrap_or(target);
    format!("{:<5} {}: {}", level, krate, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record() {
        let line = format_record(Level::Warn, "todomvc_core::filter", &format_args!("[FILTER] x"));
        assert_eq!(line, "WARN  todomvc_core: [FILTER] x");
    }

    #[test]
    fn test_format_record_plain_target() {
        let line = format_record(Level::Debug, "todomvc_ui", &format_args!("{}", 3));
        assert_eq!(line, "DEBUG todomvc_ui: 3");
    }
}
