//! Hardware abstraction and initialization
//!
//! Pin setup for the Pico and an Embassy-backed [`Scheduler`]. Tasks are
//! registered first and spawned when the executor starts, so a failed
//! startup leaves the executor untouched.

use embassy_executor::Executor;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::Peripherals;
use embassy_time::Delay;
use static_cell::StaticCell;

use crate::actuator::Actuator;
use crate::config::{BUTTON_PIN, LED_PIN};
use crate::error::Error;
use crate::sampler::Sampler;
use crate::startup::Scheduler;
use crate::task::Task;

pub type RpSampler = Sampler<'static, Input<'static>, Delay>;
pub type RpActuator = Actuator<'static, Output<'static>>;

static EXECUTOR: StaticCell<Executor> = StaticCell::new();

/// Button and LED lines
pub struct Board {
    pub button: Input<'static>,
    pub led: Output<'static>,
}

impl Board {
    /// Configure the button as a pulled-up input and the LED as an output
    /// driven low.
    pub fn new(p: Peripherals) -> Self {
        info!("Button on GPIO {}, LED on GPIO {}", BUTTON_PIN, LED_PIN);

        Self {
            button: Input::new(p.PIN_5, Pull::Up),
            led: Output::new(p.PIN_12, Level::Low),
        }
    }
}

/// Thread-mode Embassy executor on core 0
pub struct RpScheduler {
    sampler: Option<RpSampler>,
    actuator: Option<RpActuator>,
}

impl RpScheduler {
    pub const fn new() -> Self {
        Self {
            sampler: None,
            actuator: None,
        }
    }
}

impl Default for RpScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for RpScheduler {
    type Button = Input<'static>;
    type Led = Output<'static>;
    type Delay = Delay;

    fn spawn_sampler(&mut self, sampler: RpSampler) -> Result<(), Error> {
        if self.sampler.is_some() {
            return Err(Error::Spawn);
        }
        self.sampler = Some(sampler);
        Ok(())
    }

    fn spawn_actuator(&mut self, actuator: RpActuator) -> Result<(), Error> {
        if self.actuator.is_some() {
            return Err(Error::Spawn);
        }
        self.actuator = Some(actuator);
        Ok(())
    }

    fn start(&mut self) {
        let sampler = self.sampler.take();
        let actuator = self.actuator.take();

        let executor = EXECUTOR.init(Executor::new());
        executor.run(move |spawner| {
            if let Some(sampler) = sampler {
                if let Err(e) = spawner.spawn(sampler_task(sampler)) {
                    error!("Failed to spawn sampler task: {:?}", e);
                }
            }
            if let Some(actuator) = actuator {
                if let Err(e) = spawner.spawn(actuator_task(actuator)) {
                    error!("Failed to spawn actuator task: {:?}", e);
                }
            }
        })
    }
}

#[embassy_executor::task]
async fn sampler_task(mut sampler: RpSampler) {
    sampler.run().await;
}

#[embassy_executor::task]
async fn actuator_task(mut actuator: RpActuator) {
    actuator.run().await;
}

/// Park the core. Used when startup fails; the LED never changes again.
pub fn idle() -> ! {
    loop {
        cortex_m::asm::nop();
    }
}
