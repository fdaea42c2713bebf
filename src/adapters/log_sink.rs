//! Log-based diagnostic sink adapter.
//!
//! Implements [`DiagnosticSink`] by forwarding every diagnostic line to
//! the `log` facade (which goes to UART / RTT / USB-CDC in production,
//! depending on the logger the firmware installs). The baud rate is only
//! recorded; the logger owns the console.

use log::{debug, info};

use crate::ports::DiagnosticSink;

/// Log target used for relay diagnostic lines.
pub const TARGET: &str = "onoff";

/// Adapter that logs every diagnostic line at `info` level.
pub struct LogSink {
    baud: Option<u32>,
}

impl LogSink {
    pub fn new() -> Self {
        Self { baud: None }
    }

    /// Baud rate requested by the last `open`, if any.
    pub fn baud(&self) -> Option<u32> {
        self.baud
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for LogSink {
    fn open(&mut self, baud: u32) {
        self.baud = Some(baud);
        debug!(target: TARGET, "diagnostic console opened at {} baud", baud);
    }

    fn write_line(&mut self, line: &str) {
        info!(target: TARGET, "{}", line);
    }
}
