//! `embedded-hal` pin adapter.
//!
//! Wraps one HAL output pin as a [`DigitalIo`] backend. The HAL type-state
//! already guarantees output mode, so `configure_output` only checks the
//! pin id. Read-back uses the output latch (`is_set_high`), which is what a
//! relay controller resynchronises from.

use embedded_hal::digital::{Error as _, ErrorKind, StatefulOutputPin};

use crate::ports::{DigitalIo, Level, PinId};

/// A single HAL output pin addressed as `id`.
pub struct HalPin<P> {
    pin: P,
    id: PinId,
}

impl<P: StatefulOutputPin> HalPin<P> {
    pub fn new(id: PinId, pin: P) -> Self {
        Self { pin, id }
    }

    pub fn id(&self) -> PinId {
        self.id
    }

    /// Give back the HAL pin.
    pub fn free(self) -> P {
        self.pin
    }

    fn check(&self, pin: PinId) -> Result<(), ErrorKind> {
        if pin == self.id {
            Ok(())
        } else {
            log::warn!("hal_pin: request for pin {} on adapter for pin {}", pin, self.id);
            Err(ErrorKind::Other)
        }
    }
}

impl<P: StatefulOutputPin> DigitalIo for HalPin<P> {
    type Error = ErrorKind;

    fn configure_output(&mut self, pin: PinId) -> Result<(), ErrorKind> {
        self.check(pin)
    }

    fn write_level(&mut self, pin: PinId, level: Level) -> Result<(), ErrorKind> {
        self.check(pin)?;
        let res = match level {
            Level::High => self.pin.set_high(),
            Level::Low => self.pin.set_low(),
        };
        res.map_err(|e| e.kind())
    }

    fn read_level(&mut self, pin: PinId) -> Result<Level, ErrorKind> {
        self.check(pin)?;
        self.pin.is_set_high().map(Level::from).map_err(|e| e.kind())
    }
}
