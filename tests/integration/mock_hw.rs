//! Mock hardware adapters for integration tests.
//!
//! Records every backend call and every diagnostic line so tests can
//! assert on the full history without touching real GPIO registers.

use embedded_hal::digital::ErrorKind;
use onoff::{DiagnosticSink, DigitalIo, Level, PinId};
use std::collections::HashMap;

// ── Backend call record ───────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinCall {
    Configure(PinId),
    Write(PinId, Level),
    Read(PinId),
}

// ── MockPins ──────────────────────────────────────────────────

pub struct MockPins {
    pub calls: Vec<PinCall>,
    pub levels: HashMap<PinId, Level>,
    pub fail_writes: bool,
    pub fail_reads: bool,
}

#[allow(dead_code)]
impl MockPins {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            levels: HashMap::new(),
            fail_writes: false,
            fail_reads: false,
        }
    }

    /// Simulate something else driving the line (e.g. a reset glitch).
    pub fn force_level(&mut self, pin: PinId, level: Level) {
        self.levels.insert(pin, level);
    }

    pub fn level(&self, pin: PinId) -> Option<Level> {
        self.levels.get(&pin).copied()
    }

    pub fn writes(&self) -> Vec<(PinId, Level)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                PinCall::Write(pin, level) => Some((*pin, *level)),
                _ => None,
            })
            .collect()
    }

    pub fn last_write(&self) -> Option<(PinId, Level)> {
        self.writes().last().copied()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Default for MockPins {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitalIo for MockPins {
    type Error = ErrorKind;

    fn configure_output(&mut self, pin: PinId) -> Result<(), ErrorKind> {
        self.calls.push(PinCall::Configure(pin));
        Ok(())
    }

    fn write_level(&mut self, pin: PinId, level: Level) -> Result<(), ErrorKind> {
        if self.fail_writes {
            return Err(ErrorKind::Other);
        }
        self.calls.push(PinCall::Write(pin, level));
        self.levels.insert(pin, level);
        Ok(())
    }

    fn read_level(&mut self, pin: PinId) -> Result<Level, ErrorKind> {
        if self.fail_reads {
            return Err(ErrorKind::Other);
        }
        self.calls.push(PinCall::Read(pin));
        Ok(self.level(pin).unwrap_or(Level::Low))
    }
}

// ── Console ───────────────────────────────────────────────────

pub struct Console {
    pub baud: Option<u32>,
    pub lines: Vec<String>,
}

impl Console {
    pub fn new() -> Self {
        Self {
            baud: None,
            lines: Vec::new(),
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for Console {
    fn open(&mut self, baud: u32) {
        self.baud = Some(baud);
    }

    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_owned());
    }
}
