//! Integration test driver for `tests/integration/` submodules.
//!
//! Each `mod` below exercises one task or the startup path against the
//! mock pins, simulated delay and recording scheduler in `mock_hw`. All
//! tests run on the host with `cargo test --no-default-features`.

mod mock_hw;
