//! Console Logger
//!
//! A `tracing` subscriber for browser frontends. Formatted events go to the
//! devtools console on wasm32 (one console method per level) and to stderr
//! everywhere else, so native test runs still show the output.

use std::fmt;
use std::io;

use thiserror::Error;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("failed to install the global tracing subscriber")]
    Install(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Install the console subscriber as the global default.
///
/// Must be called once, early in `main`. A second call returns
/// [`LoggerError::Install`].
pub fn init_logger(app_name: &str, level: Level) -> Result<(), LoggerError> {
    tracing_subscriber::fmt()
        .with_writer(MakeConsoleWriter)
        .with_timer(LocalClock)
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(LoggerError::Install)?;

    tracing::info!(app = app_name, %level, "logger initialized");
    Ok(())
}

/// Browser console method an event is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Debug,
    Log,
    Warn,
    Error,
}

impl ConsoleMethod {
    pub fn for_level(level: &Level) -> Self {
        match *level {
            Level::TRACE | Level::DEBUG => ConsoleMethod::Debug,
            Level::INFO => ConsoleMethod::Log,
            Level::WARN => ConsoleMethod::Warn,
            Level::ERROR => ConsoleMethod::Error,
        }
    }
}

/// Local wall-clock timer, `HH:MM:SS.mmm`.
///
/// The default `SystemTime` timer panics on wasm32-unknown-unknown; chrono
/// reads the clock through `js_sys::Date` there.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl FormatTime for LocalClock {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// `MakeWriter` handing out one [`ConsoleWriter`] per event.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::for_level(meta.level()))
    }
}

/// Buffers one formatted event and emits it as a single console line on drop.
#[derive(Debug)]
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    pub fn new(method: ConsoleMethod) -> Self {
        Self { method, buf: Vec::new() }
    }

    pub fn method(&self) -> ConsoleMethod {
        self.method
    }

    /// Buffered text without the trailing newline the formatter appends.
    pub fn line(&self) -> String {
        String::from_utf8_lossy(&self.buf).trim_end().to_string()
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        emit(self.method, &self.line());
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(method: ConsoleMethod, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match method {
        ConsoleMethod::Debug => console::debug_1(&value),
        ConsoleMethod::Log => console::log_1(&value),
        ConsoleMethod::Warn => console::warn_1(&value),
        ConsoleMethod::Error => console::error_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_method: ConsoleMethod, line: &str) {
    eprintln!("{}", line);
}
