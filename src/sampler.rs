//! Button sampling task
//!
//! Reads the button line once per period and pushes the result onto the
//! state queue. The line is active-low with a pull-up. There is no debouncing
//! and no change detection: every period produces exactly one queued state.

use embedded_hal::digital::InputPin;
use embedded_hal_async::delay::DelayNs;

use crate::channels::{Producer, Wait};
use crate::config::SAMPLE_PERIOD_MS;
use crate::task::Task;
use crate::types::InputState;

/// Sampler task context
pub struct Sampler<'a, I, D> {
    button: I,
    producer: Producer<'a>,
    delay: D,
    samples: u32,
}

impl<'a, I, D> Sampler<'a, I, D>
where
    I: InputPin,
    D: DelayNs,
{
    pub fn new(button: I, producer: Producer<'a>, delay: D) -> Self {
        Self {
            button,
            producer,
            delay,
            samples: 0,
        }
    }

    /// Read the button line. Returns `None` if the pin reports a fault.
    pub fn sample(&mut self) -> Option<InputState> {
        match self.button.is_high() {
            Ok(is_high) => {
                let state = InputState::from_level(is_high);
                self.samples = self.samples.wrapping_add(1);
                trace!("Button sample {}: {:?}", self.samples, state);
                Some(state)
            }
            Err(_) => {
                warn!("Button read failed, skipping this period");
                None
            }
        }
    }

    /// Number of successful reads since construction
    pub fn samples(&self) -> u32 {
        self.samples
    }
}

impl<I, D> Task for Sampler<'_, I, D>
where
    I: InputPin,
    D: DelayNs,
{
    const NAME: &'static str = "Sampler";

    async fn step(&mut self) {
        if let Some(state) = self.sample() {
            // Blocks while the queue is full; never drops a sample.
            if let Err(e) = self.producer.send(state, Wait::Forever).await {
                warn!("Button state not queued: {:?}", e);
            }
        }

        self.delay.delay_ms(SAMPLE_PERIOD_MS).await;
    }
}
