//! Fuzz target: arbitrary `RelayController` operation sequences
//!
//! The first byte picks the binding (pin, polarity, start state,
//! diagnostics); every following byte is one operation. After each step
//! the pin must carry the level that represents the logical state, and no
//! operation may panic, bound or unbound.
//!
//! cargo fuzz run fuzz_relay_ops

#![no_main]

use core::convert::Infallible;

use libfuzzer_sys::fuzz_target;
use onoff::adapters::FmtSink;
use onoff::{DigitalIo, Level, PinId, RelayConfig, RelayController, physical_level};

#[derive(Default)]
struct Line {
    level: Option<Level>,
}

impl DigitalIo for Line {
    type Error = Infallible;

    fn configure_output(&mut self, _pin: PinId) -> Result<(), Infallible> {
        Ok(())
    }

    fn write_level(&mut self, _pin: PinId, level: Level) -> Result<(), Infallible> {
        self.level = Some(level);
        Ok(())
    }

    fn read_level(&mut self, _pin: PinId) -> Result<Level, Infallible> {
        Ok(self.level.unwrap_or(Level::Low))
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((&setup, ops)) = data.split_first() else {
        return;
    };

    // Small console so long runs exercise the full-buffer path.
    let sink = FmtSink::new(heapless::String::<64>::new());
    let mut relay = RelayController::new(Line::default(), sink);
    let active_low = setup & 0b10 != 0;

    for &op in ops {
        let allow = op & 0x80 == 0;
        match op & 0x07 {
            0 => relay.turn_on(allow).unwrap(),
            1 => relay.turn_off(allow).unwrap(),
            2 => relay.toggle(allow).unwrap(),
            3 => relay.attach_diagnostics(u32::from(op)),
            4 => {
                let config = RelayConfig::new(setup >> 4)
                    .start_on(setup & 0b01 != 0)
                    .active_low(active_low)
                    .diagnostics(setup & 0b100 != 0);
                relay.bind(config).unwrap();
            }
            5 => relay.set_diagnostics(allow),
            _ => {
                let _ = relay.status();
            }
        }

        if relay.is_bound() {
            assert_eq!(
                relay.io().level,
                Some(physical_level(relay.is_on(), active_low)),
                "pin level diverged from logical state"
            );
        } else {
            assert!(relay.io().level.is_none(), "unbound relay touched the pin");
            assert!(!relay.is_on(), "unbound relay must stay OFF");
        }
    }
});
