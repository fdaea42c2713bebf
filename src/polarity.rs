//! Logical ↔ physical level mapping.
//!
//! With active-high wiring a logical ON is a high pin; with active-low
//! wiring it is a low pin. Every call site that needs the mapping goes
//! through these two functions.

use crate::ports::Level;

/// Pin level that represents `logical_on` under the given wiring.
pub const fn physical_level(logical_on: bool, active_low: bool) -> Level {
    if logical_on ^ active_low {
        Level::High
    } else {
        Level::Low
    }
}

/// Logical state represented by a sampled pin `level` under the given wiring.
pub const fn logical_state(level: Level, active_low: bool) -> bool {
    level.is_high() ^ active_low
}
