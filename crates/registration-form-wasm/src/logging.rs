// File: src/logging.rs
// Purpose: Route `tracing` output to the browser console

use std::io;
use std::str::FromStr;

use tracing_subscriber::filter::LevelFilter;
use wasm_bindgen::JsValue;

struct ConsoleWriter;

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let line = String::from_utf8_lossy(buf);
        web_sys::console::log_1(&JsValue::from_str(line.trim_end()));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Install the console subscriber. Later calls are ignored.
///
/// No timestamps: the clock is unavailable on `wasm32-unknown-unknown`.
pub fn init(level: &str) {
    let level = LevelFilter::from_str(level).unwrap_or(LevelFilter::INFO);

    let _ = tracing_subscriber::fmt()
        .with_writer(|| ConsoleWriter)
        .with_max_level(level)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .try_init();
}
