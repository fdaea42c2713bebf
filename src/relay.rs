//! Single-pin relay controller.
//!
//! ## State model
//!
//! The controller tracks a logical ON/OFF state and treats it as the only
//! source of truth for [`RelayController::status`]. The level driven onto
//! the pin is always `physical_level(on, active_low)`. Whether the
//! controller is bound to a pin is a separate lifecycle flag, not a control
//! state.
//!
//! ## Unbound controllers
//!
//! A default-constructed controller has no pin. `turn_on`, `turn_off` and
//! `toggle` on it are fail-safe no-ops: they return `Ok(())`, leave the
//! state at OFF, never touch the backend, and log a warning.
//! [`attach_diagnostics`](RelayController::attach_diagnostics) is the only
//! operation that reports the missing binding on the console.
//!
//! ## Diagnostics
//!
//! With diagnostics enabled every driven transition writes one line,
//! prefixed with the pin number, describing the *electrical* action:
//!
//! | Operation               | Line                                  |
//! |-------------------------|---------------------------------------|
//! | bind                    | `PIN NO: 5 ---> 1` (raw read-back)    |
//! | `turn_on`, active-high  | `PIN NO: 5 ---> Turning ON`           |
//! | `turn_on`, active-low   | `PIN NO: 5 ---> Turning OFF`          |
//! | `toggle` to a high pin  | `PIN NO: 5 ---> Toggle state: ON`     |
//!
//! Calls that drive nothing (disallowed, or already in the requested
//! state) emit no line.

use core::fmt::Write as _;

use heapless::String;
use log::{debug, info, warn};

use crate::config::{DEFAULT_BAUD, RelayConfig};
use crate::error::{Error, Result};
use crate::polarity::{logical_state, physical_level};
use crate::ports::{DiagnosticSink, DigitalIo, Level, PinId, UNBOUND_PIN};

/// Console line written by `attach_diagnostics` on a bound controller.
pub const MOUNTED_LINE: &str = "relay mounted";
/// Console line written by `attach_diagnostics` on an unbound controller.
pub const NOT_INITIALIZED_LINE: &str = "relay not initialized!";
/// Console line written when the attach read-back fails.
pub const READ_FAILED_LINE: &str = "relay read-back failed";

const LINE_CAPACITY: usize = 48;

/// Logical relay state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayStatus {
    On,
    Off,
}

impl RelayStatus {
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => "ON",
            Self::Off => "OFF",
        }
    }
}

impl From<bool> for RelayStatus {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

/// Diagnostic line kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Diagnostic {
    /// `turn_on` / `turn_off` about to drive this level.
    Driving(Level),
    /// `toggle` about to drive this level.
    Toggle(Level),
    /// Raw level read back after binding.
    PinLevel(Level),
    /// Read-back after binding failed.
    PinReadFailed,
}

/// Relay bound to one digital output line.
///
/// Single-owner, single-thread: there is no internal synchronisation.
/// Dropping the controller leaves the pin at its last driven level.
pub struct RelayController<IO, S> {
    io: IO,
    sink: S,
    pin: PinId,
    active_low: bool,
    on: bool,
    bound: bool,
    diagnostics: bool,
}

impl<IO: DigitalIo, S: DiagnosticSink> RelayController<IO, S> {
    /// Unbound controller. Control operations are no-ops until
    /// [`bind`](Self::bind) succeeds.
    pub fn new(io: IO, sink: S) -> Self {
        Self {
            io,
            sink,
            pin: UNBOUND_PIN,
            active_low: false,
            on: false,
            bound: false,
            diagnostics: false,
        }
    }

    /// Controller bound at construction.
    ///
    /// Accepts a bare pin id (all defaults) or a full [`RelayConfig`].
    pub fn bound(io: IO, sink: S, config: impl Into<RelayConfig>) -> Result<Self> {
        let mut relay = Self::new(io, sink);
        relay.bind(config)?;
        Ok(relay)
    }

    /// Bind (or rebind) to a pin: configure it as output and drive the level
    /// for `start_on` under the configured polarity.
    ///
    /// Rebinding an already-bound controller is allowed and simply replaces
    /// the previous binding. The previous pin is left as it was. On error
    /// the previous binding, if any, stays in effect.
    pub fn bind(&mut self, config: impl Into<RelayConfig>) -> Result<()> {
        let config = config.into();
        config.validate()?;

        let level = physical_level(config.start_on, config.active_low);
        self.io.configure_output(config.pin).map_err(Error::gpio)?;
        self.io.write_level(config.pin, level).map_err(Error::gpio)?;

        if self.bound && self.pin != config.pin {
            debug!("relay: rebinding pin {} -> {}", self.pin, config.pin);
        }
        self.pin = config.pin;
        self.active_low = config.active_low;
        self.on = config.start_on;
        self.diagnostics = config.diagnostics;
        self.bound = true;

        info!(
            "relay: bound pin {} ({}, start {})",
            self.pin,
            if self.active_low { "active-low" } else { "active-high" },
            self.status().as_str(),
        );

        if self.diagnostics {
            let diag = match self.io.read_level(self.pin) {
                Ok(level) => Diagnostic::PinLevel(level),
                Err(_) => Diagnostic::PinReadFailed,
            };
            self.emit(diag);
        }
        Ok(())
    }

    /// Open the diagnostic console at [`DEFAULT_BAUD`] and resynchronise.
    pub fn attach(&mut self) {
        self.attach_diagnostics(DEFAULT_BAUD);
    }

    /// Open the diagnostic console at `baud`.
    ///
    /// On a bound controller the logical state is resynchronised from the
    /// level currently on the pin and [`MOUNTED_LINE`] is written. On an
    /// unbound one [`NOT_INITIALIZED_LINE`] is written and nothing else
    /// changes. These lines ignore the diagnostics flag. Never fails.
    pub fn attach_diagnostics(&mut self, baud: u32) {
        self.sink.open(baud);

        if !self.bound {
            warn!("relay: diagnostics attached before bind");
            self.sink.write_line(NOT_INITIALIZED_LINE);
            return;
        }

        match self.io.read_level(self.pin) {
            Ok(level) => {
                self.on = logical_state(level, self.active_low);
                debug!("relay: pin {} reads {:?}, state {}", self.pin, level, self.status().as_str());
                self.sink.write_line(MOUNTED_LINE);
            }
            Err(e) => {
                warn!("relay: pin {} read-back failed: {}", self.pin, Error::gpio(e));
                self.sink.write_line(READ_FAILED_LINE);
            }
        }
    }

    /// Switch ON if `allow` and currently OFF; otherwise do nothing.
    pub fn turn_on(&mut self, allow: bool) -> Result<()> {
        self.switch(true, allow)
    }

    /// Switch OFF if `allow` and currently ON; otherwise do nothing.
    pub fn turn_off(&mut self, allow: bool) -> Result<()> {
        self.switch(false, allow)
    }

    /// Flip the logical state if `allow`. Unlike `turn_on`/`turn_off` there
    /// is no "already there" guard: every allowed call drives the pin.
    pub fn toggle(&mut self, allow: bool) -> Result<()> {
        if !allow || !self.ensure_bound("toggle") {
            return Ok(());
        }

        let next = !self.on;
        let level = physical_level(next, self.active_low);
        self.emit(Diagnostic::Toggle(level));
        self.io.write_level(self.pin, level).map_err(Error::gpio)?;
        self.on = next;
        Ok(())
    }

    /// Current logical state. Never touches the backend.
    pub fn status(&self) -> RelayStatus {
        RelayStatus::from(self.on)
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Bound pin, or `None` before the first successful bind.
    pub fn pin(&self) -> Option<PinId> {
        self.bound.then_some(self.pin)
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    pub fn is_active_low(&self) -> bool {
        self.active_low
    }

    pub fn diagnostics_enabled(&self) -> bool {
        self.diagnostics
    }

    /// Gate per-operation diagnostic lines without rebinding.
    pub fn set_diagnostics(&mut self, enabled: bool) {
        self.diagnostics = enabled;
    }

    pub fn io(&self) -> &IO {
        &self.io
    }

    /// Direct backend access. Anything driven through here is invisible to
    /// the controller until the next `attach_diagnostics` read-back.
    pub fn io_mut(&mut self) -> &mut IO {
        &mut self.io
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Give back the backend and sink. The pin keeps its last level.
    pub fn release(self) -> (IO, S) {
        (self.io, self.sink)
    }

    fn switch(&mut self, on: bool, allow: bool) -> Result<()> {
        let op = if on { "turn_on" } else { "turn_off" };
        if !self.ensure_bound(op) || !allow || self.on == on {
            return Ok(());
        }

        let level = physical_level(on, self.active_low);
        self.emit(Diagnostic::Driving(level));
        self.io.write_level(self.pin, level).map_err(Error::gpio)?;
        self.on = on;
        Ok(())
    }

    fn ensure_bound(&self, op: &str) -> bool {
        if !self.bound {
            warn!("relay: {} ignored, relay not bound", op);
        }
        self.bound
    }

    fn emit(&mut self, diag: Diagnostic) {
        if !self.diagnostics {
            return;
        }

        let mut line: String<LINE_CAPACITY> = String::new();
        // Capacity covers the longest line; a failed write only truncates.
        let _ = write!(line, "PIN NO: {} ---> ", self.pin);
        let _ = match diag {
            Diagnostic::Driving(Level::High) => line.push_str("Turning ON"),
            Diagnostic::Driving(Level::Low) => line.push_str("Turning OFF"),
            Diagnostic::Toggle(level) => {
                write!(line, "Toggle state: {}", if level.is_high() { "ON" } else { "OFF" })
                    .map_err(|_| ())
            }
            Diagnostic::PinLevel(level) => write!(line, "{}", level.as_u8()).map_err(|_| ()),
            Diagnostic::PinReadFailed => line.push_str("read failed"),
        };
        self.sink.write_line(&line);
    }
}
