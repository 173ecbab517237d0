//! Global logging.
//!
//! Engine events go through `tracing`. In the browser they are formatted by
//! `tracing_subscriber::fmt` and written to the devtools console at the
//! matching console level; native builds (tests, benches) write to stdout.

use std::io;

use tracing::{Level, Metadata};
use tracing::subscriber::NoSubscriber;
use tracing_subscriber::fmt::MakeWriter;

/// Most verbose level that reaches the console. The per-step `debug!`
/// summary would otherwise fire every frame.
pub const MAX_LEVEL: Level = Level::INFO;

/// Install the global subscriber. Safe to call more than once; later calls
/// leave the first subscriber in place and return `false`.
pub fn init_logging() -> bool {
    let builder = tracing_subscriber::fmt()
        .with_max_level(MAX_LEVEL)
        .with_target(false)
        .without_time();

    #[cfg(target_arch = "wasm32")]
    let installed = builder.with_writer(ConsoleMakeWriter).try_init().is_ok();
    #[cfg(not(target_arch = "wasm32"))]
    let installed = builder.try_init().is_ok();

    if installed {
        tracing::info!(max_level = %MAX_LEVEL, "installed log subscriber");
    }
    installed
}

/// False while events still go to the no-op dispatcher
pub fn logging_installed() -> bool {
    tracing::dispatcher::get_default(|dispatch| !dispatch.is::<NoSubscriber>())
}

/// Hands out one `ConsoleWriter` per formatted event
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted line and emits it on drop
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self { level, buf: Vec::with_capacity(128) }
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
        let line = String::from_utf8_lossy(&self.buf);
        let msg = wasm_bindgen::JsValue::from_str(line.trim_end());
        match self.level {
            Level::ERROR => web_sys::console::error_1(&msg),
            Level::WARN => web_sys::console::warn_1(&msg),
            Level::INFO => web_sys::console::info_1(&msg),
            _ => web_sys::console::debug_1(&msg),
        }
    }
}
