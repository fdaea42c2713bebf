//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter    | Implements      | Connects to                               |
//! |------------|-----------------|-------------------------------------------|
//! | `hal_pin`  | DigitalIo       | any `embedded-hal` stateful output pin    |
//! | `log_sink` | DiagnosticSink  | `log` facade (UART / RTT in production)   |
//! | `serial`   | DiagnosticSink  | any `core::fmt::Write` console, or nothing|

pub mod hal_pin;
pub mod log_sink;
pub mod serial;

pub use hal_pin::HalPin;
pub use log_sink::LogSink;
pub use serial::{FmtSink, NullSink};
