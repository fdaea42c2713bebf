//! OnOff relay controller library.
//!
//! Drives a single digital output pin that switches a relay (or any other
//! on/off actuator). The controller keeps a *logical* ON/OFF state and maps
//! it onto the *physical* pin level through the wiring polarity, so
//! active-low relay boards read the same as active-high ones from the
//! caller's side.
//!
//! ```text
//!   caller ──▶ RelayController ──▶ DigitalIo       (pin backend)
//!                      │
//!                      └────────▶ DiagnosticSink  (serial console)
//! ```
//!
//! Hardware never appears in this crate directly: the pin backend and the
//! diagnostic console are port traits (see [`ports`]), with ready-made
//! adapters for `embedded-hal` pins and the `log` facade in [`adapters`].
//!
//! ## Ownership
//!
//! A controller is single-owner, single-thread. It holds no internal
//! synchronisation; every operation takes `&mut self`. Two controllers must
//! not be bound to the same pin id (not enforced).

#![cfg_attr(not(test), no_std)]
#![deny(unused_must_use)]

pub mod adapters;
pub mod config;
pub mod polarity;
pub mod ports;
pub mod relay;

mod error;

pub use config::{DEFAULT_BAUD, RelayConfig};
pub use error::{Error, Result};
pub use polarity::{logical_state, physical_level};
pub use ports::{DiagnosticSink, DigitalIo, Level, PinId, UNBOUND_PIN};
pub use relay::{RelayController, RelayStatus};
