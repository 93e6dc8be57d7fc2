//! Button LED Queue - two-task button to LED firmware for RP2040
//!
//! A sampler task reads a pulled-up push button every 100 ms and queues the
//! level; an actuator task waits on the queue and drives an LED from it.
//!
//! ## Architecture
//! - **Tasks**: Sampler and Actuator, both run-forever [`task::Task`]s
//! - **Channel**: one bounded FIFO (depth 5) shared through explicit handles
//! - **Startup**: queue creation gates task registration; failure parks the core
//! - **Hardware**: Embassy on RP2040 behind the `rp2040` feature; everything
//!   else builds on the host for testing

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod actuator;
pub mod channels;
pub mod config;
pub mod error;
pub mod sampler;
pub mod startup;
pub mod task;
pub mod types;

#[cfg(feature = "rp2040")]
pub mod hardware;

pub use error::Error;
