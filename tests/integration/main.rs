//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the relay controller
//! against mock adapters. All tests run on the host with no real hardware
//! required.

mod mock_hw;
