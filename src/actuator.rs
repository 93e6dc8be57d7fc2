//! LED driver task
//!
//! Waits on the state queue and drives the LED from each received button
//! state, with no delay between receives.

use embedded_hal::digital::OutputPin;

use crate::channels::{Consumer, Wait};
use crate::task::Task;
use crate::types::{InputState, OutputState};

/// Actuator task context
pub struct Actuator<'a, O> {
    led: O,
    consumer: Consumer<'a>,
    current: Option<OutputState>,
    applied: u32,
}

impl<'a, O> Actuator<'a, O>
where
    O: OutputPin,
{
    pub fn new(led: O, consumer: Consumer<'a>) -> Self {
        Self {
            led,
            consumer,
            current: None,
            applied: 0,
        }
    }

    /// Drive the LED for a received button state.
    ///
    /// Pressed (0) lights the LED and released (1) turns it off. Returns the
    /// output that was requested, whether or not the pin write succeeded.
    pub fn apply(&mut self, input: InputState) -> OutputState {
        let output = OutputState::from(input);

        match self.led.set_state(output.level()) {
            Ok(()) => {
                if self.current != Some(output) {
                    debug!("LED {:?} (button {:?})", output, input);
                }
                self.current = Some(output);
                self.applied = self.applied.wrapping_add(1);
            }
            Err(_) => warn!("LED write failed for {:?}", output),
        }

        output
    }

    /// Last output successfully written to the LED
    pub fn current(&self) -> Option<OutputState> {
        self.current
    }

    /// Number of states written to the LED since construction
    pub fn applied(&self) -> u32 {
        self.applied
    }
}

impl<O> Task for Actuator<'_, O>
where
    O: OutputPin,
{
    const NAME: &'static str = "Actuator";

    async fn step(&mut self) {
        match self.consumer.receive(Wait::Forever).await {
            Ok(state) => {
                self.apply(state);
            }
            Err(e) => warn!("State queue receive failed: {:?}", e),
        }
    }
}
