//! Browser console sink for the `log` facade and the panic hook.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

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
        let line = JsValue::from_str(&format_record(record));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug | Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

fn format_record(record: &Record) -> String {
    format!("[{}] {}: {}", record.level(), record.target(), record.args())
}

/// Routes `log` records at or above `level` to the console. Only the first
/// call has an effect.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Prints panic payloads and locations untruncated.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let payload = info
            .payload()
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| info.payload().downcast_ref::<&str>().copied())
            .unwrap_or("Unknown panic");
        console::error_1(&format!("Panic: {payload}").into());
        if let Some(location) = info.location() {
            console::error_1(
                &format!(
                    "  at {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
                .into(),
            );
        }
    }));
}
