//! Serial-console sinks.
//!
//! [`FmtSink`] writes CRLF-terminated lines to anything implementing
//! `core::fmt::Write` (a HAL UART wrapper, a `heapless::String` in tests).
//! [`NullSink`] is for builds without a console.

use core::fmt::Write;

use crate::ports::DiagnosticSink;

/// Line sink over a `core::fmt::Write` console.
///
/// Write errors are dropped: a wedged console must not stall the relay.
pub struct FmtSink<W> {
    writer: W,
    baud: Option<u32>,
}

impl<W: Write> FmtSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, baud: None }
    }

    /// Baud rate requested by the last `open`, if any. Applying it to the
    /// UART is the caller's job.
    pub fn baud(&self) -> Option<u32> {
        self.baud
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagnosticSink for FmtSink<W> {
    fn open(&mut self, baud: u32) {
        self.baud = Some(baud);
    }

    fn write_line(&mut self, line: &str) {
        let _ = self.writer.write_str(line);
        let _ = self.writer.write_str("\r\n");
    }
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn open(&mut self, _baud: u32) {}

    fn write_line(&mut self, _line: &str) {}
}
