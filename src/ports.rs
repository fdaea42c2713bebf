//! Port traits — the boundary between the relay logic and the hardware.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ RelayController
//! ```
//!
//! The pin backend and the diagnostic console are owned and implemented
//! outside the controller. [`RelayController`](crate::RelayController)
//! consumes them via generics, so the control logic never touches
//! registers directly and runs unchanged on the host under test.

use core::ops::Not;

use embedded_hal::digital;

/// Identifier of a digital output line.
pub type PinId = u8;

/// Pin id carried by a controller that has not been bound yet.
///
/// Reserved: binding to it is rejected.
pub const UNBOUND_PIN: PinId = 255;

// ───────────────────────────────────────────────────────────────
// Electrical level
// ───────────────────────────────────────────────────────────────

/// Electrical level driven onto (or read back from) a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Low,
    High,
}

impl Level {
    pub const fn is_high(self) -> bool {
        matches!(self, Self::High)
    }

    pub const fn is_low(self) -> bool {
        matches!(self, Self::Low)
    }

    /// Numeric form, as a serial console would print a raw `digitalRead`.
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::High => 1,
        }
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Self::High } else { Self::Low }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level.is_high()
    }
}

impl Not for Level {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::High => Self::Low,
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Digital I/O port (driven adapter: controller ↔ pin hardware)
// ───────────────────────────────────────────────────────────────

/// Pin backend: direction setup plus level write and read-back.
///
/// The controller only reads a pin while binding or attaching the
/// diagnostic console; otherwise the pin is write-only from its side.
pub trait DigitalIo {
    /// Backend failure, reduced to an `embedded-hal` error kind by the
    /// controller.
    type Error: digital::Error;

    /// Put `pin` into output mode.
    fn configure_output(&mut self, pin: PinId) -> Result<(), Self::Error>;

    /// Drive `pin` to `level`.
    fn write_level(&mut self, pin: PinId, level: Level) -> Result<(), Self::Error>;

    /// Sample the level currently present on `pin`.
    fn read_level(&mut self, pin: PinId) -> Result<Level, Self::Error>;
}

impl<T: DigitalIo + ?Sized> DigitalIo for &mut T {
    type Error = T::Error;

    fn configure_output(&mut self, pin: PinId) -> Result<(), Self::Error> {
        T::configure_output(self, pin)
    }

    fn write_level(&mut self, pin: PinId, level: Level) -> Result<(), Self::Error> {
        T::write_level(self, pin, level)
    }

    fn read_level(&mut self, pin: PinId) -> Result<Level, Self::Error> {
        T::read_level(self, pin)
    }
}

// ───────────────────────────────────────────────────────────────
// Diagnostic sink port (driven adapter: controller → console)
// ───────────────────────────────────────────────────────────────

/// Line-oriented diagnostic output, typically a serial console.
///
/// Both methods are infallible: diagnostics are best-effort and must never
/// influence relay state. A sink that drops everything is a valid
/// implementation.
pub trait DiagnosticSink {
    /// Open the console at `baud` bits per second.
    fn open(&mut self, baud: u32);

    /// Emit one line of text (without terminator).
    fn write_line(&mut self, line: &str);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &mut T {
    fn open(&mut self, baud: u32) {
        T::open(self, baud);
    }

    fn write_line(&mut self, line: &str) {
        T::write_line(self, line);
    }
}
