//! Startup sequence
//!
//! Claims the state queue, builds both task contexts around it and hands
//! them to a [`Scheduler`]. The scheduler is a port: the firmware backs it
//! with the Embassy executor, host tests with a recording mock.
//!
//! If the queue cannot be created nothing is registered and the scheduler is
//! never started. The caller is expected to park the core in that case.

use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal_async::delay::DelayNs;
use static_cell::StaticCell;

use crate::actuator::Actuator;
use crate::channels::{self, StateQueue};
use crate::config::*;
use crate::error::Error;
use crate::sampler::Sampler;
use crate::types::APP_VERSION;

/// Task registration and start, as consumed by [`launch`]
pub trait Scheduler {
    type Button: InputPin;
    type Led: OutputPin;
    type Delay: DelayNs;

    /// Register the sampler task.
    fn spawn_sampler(
        &mut self,
        sampler: Sampler<'static, Self::Button, Self::Delay>,
    ) -> Result<(), Error>;

    /// Register the actuator task.
    fn spawn_actuator(&mut self, actuator: Actuator<'static, Self::Led>) -> Result<(), Error>;

    /// Hand control to the scheduler. Executor-backed implementations do
    /// not return from here.
    fn start(&mut self);
}

/// Create the queue, register both tasks at equal priority and start the
/// scheduler.
///
/// Returns only on failure, or when `scheduler.start()` itself returns.
pub fn launch<S: Scheduler>(
    scheduler: &mut S,
    queue: &'static StaticCell<StateQueue>,
    button: S::Button,
    led: S::Led,
    delay: S::Delay,
) -> Result<(), Error> {
    let queue = match channels::create(queue) {
        Ok(queue) => queue,
        Err(e) => {
            error!("State queue creation failed: {:?}", e);
            return Err(e);
        }
    };
    info!("State queue created (depth {})", queue.capacity());

    scheduler.spawn_sampler(Sampler::new(button, queue.producer(), delay))?;
    scheduler.spawn_actuator(Actuator::new(led, queue.consumer()))?;

    info!("Starting scheduler");
    scheduler.start();
    Ok(())
}

/// Print startup banner with pin and timing information
pub fn print_startup_banner() {
    info!("========================================");
    info!("{} v{}", FIRMWARE_NAME, APP_VERSION.as_str());
    info!("Hardware: {}", TARGET_NAME);
    info!("Button: GPIO {} (pull-up, active low)", BUTTON_PIN);
    info!("LED: GPIO {} (active high)", LED_PIN);
    info!("Sample period: {} ms", SAMPLE_PERIOD_MS);
    info!("Queue depth: {}", QUEUE_DEPTH);
    info!(
        "Tasks: 2 at priority {} ({} word stack budget)",
        TASK_PRIORITY,
        TASK_STACK_WORDS
    );
    info!("========================================");
}
