//! Unified error type for the relay controller.
//!
//! Backend failures are reduced to an [`ErrorKind`] so the controller stays
//! independent of whichever pin driver sits behind [`DigitalIo`]. All
//! variants are `Copy` so they can be returned from control paths without
//! allocation.
//!
//! [`DigitalIo`]: crate::ports::DigitalIo

use core::fmt;

use embedded_hal::digital::{self, ErrorKind};

/// Every fallible relay operation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The pin backend rejected a configure, write or read request.
    Gpio(ErrorKind),
    /// A [`RelayConfig`](crate::RelayConfig) failed validation.
    Config(&'static str),
}

impl Error {
    /// Collapse any `embedded-hal` digital error into [`Error::Gpio`].
    pub fn gpio<E: digital::Error>(e: E) -> Self {
        Self::Gpio(e.kind())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpio(kind) => write!(f, "gpio: {kind}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::Gpio(kind)
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
