//! Relay binding configuration.
//!
//! The four-field record handed to a controller when it is bound. Only the
//! pin is required; the remaining fields default to an active-high relay
//! that starts OFF with diagnostics silenced, so a stored or provisioned
//! config may omit them.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ports::{PinId, UNBOUND_PIN};

/// Baud rate used when the diagnostic console is opened without one.
pub const DEFAULT_BAUD: u32 = 9600;

/// Binding parameters for a [`RelayController`](crate::RelayController).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Output line the relay coil (or driver transistor) is wired to.
    pub pin: PinId,
    /// Logical state driven at bind time.
    #[serde(default)]
    pub start_on: bool,
    /// `true` when a low pin energises the relay.
    #[serde(default)]
    pub active_low: bool,
    /// Emit per-operation diagnostic lines.
    #[serde(default)]
    pub diagnostics: bool,
}

impl RelayConfig {
    pub const fn new(pin: PinId) -> Self {
        Self {
            pin,
            start_on: false,
            active_low: false,
            diagnostics: false,
        }
    }

    pub const fn start_on(mut self, on: bool) -> Self {
        self.start_on = on;
        self
    }

    pub const fn active_low(mut self, active_low: bool) -> Self {
        self.active_low = active_low;
        self
    }

    pub const fn diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
    }

    /// Reject configurations that cannot be bound.
    pub fn validate(&self) -> Result<()> {
        if self.pin == UNBOUND_PIN {
            return Err(Error::Config("pin 255 is reserved for unbound relays"));
        }
        Ok(())
    }
}

impl From<PinId> for RelayConfig {
    fn from(pin: PinId) -> Self {
        Self::new(pin)
    }
}
