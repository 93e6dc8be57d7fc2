//! Mock hardware for host tests.
//!
//! Pins and the delay source share a simulated clock. Delays yield once to
//! let the other task run, then advance the clock, so a whole run completes
//! instantly under `embassy_futures::block_on`. Every pin access is recorded
//! with its timestamp so tests can assert on timing and order.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use button_led_queue::actuator::Actuator;
use button_led_queue::error::Error;
use button_led_queue::sampler::Sampler;
use button_led_queue::startup::Scheduler;
use embedded_hal::digital::{self, ErrorKind, ErrorType, InputPin, OutputPin};
use embedded_hal_async::delay::DelayNs;

// ── Simulated clock ───────────────────────────────────────────

#[derive(Clone, Default)]
pub struct SimClock {
    now_ns: Rc<Cell<u64>>,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ns.get() / 1_000_000
    }

    pub fn advance_ns(&self, ns: u64) {
        self.now_ns.set(self.now_ns.get() + ns);
    }
}

// ── Delay ─────────────────────────────────────────────────────

pub struct SimDelay {
    clock: SimClock,
    pub requested_ms: Rc<RefCell<Vec<u32>>>,
}

impl SimDelay {
    pub fn new(clock: &SimClock) -> Self {
        Self {
            clock: clock.clone(),
            requested_ms: Rc::default(),
        }
    }
}

impl DelayNs for SimDelay {
    async fn delay_ns(&mut self, ns: u32) {
        embassy_futures::yield_now().await;
        self.clock.advance_ns(u64::from(ns));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.requested_ms.borrow_mut().push(ms);
        embassy_futures::yield_now().await;
        self.clock.advance_ns(u64::from(ms) * 1_000_000);
    }
}

// ── Pin fault ─────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinFault;

impl digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

// ── Button ────────────────────────────────────────────────────

enum Script {
    /// Line level as a function of simulated time (ms); true = high.
    Timed(Box<dyn Fn(u64) -> bool>),
    /// One level per read; the last level repeats once exhausted.
    Levels(VecDeque<bool>, bool),
}

pub struct MockButton {
    clock: SimClock,
    script: Script,
    faults: usize,
    /// Timestamp (ms) of every successful read.
    pub reads: Rc<RefCell<Vec<u64>>>,
}

impl MockButton {
    pub fn timed(clock: &SimClock, level: impl Fn(u64) -> bool + 'static) -> Self {
        Self {
            clock: clock.clone(),
            script: Script::Timed(Box::new(level)),
            faults: 0,
            reads: Rc::default(),
        }
    }

    pub fn levels(clock: &SimClock, levels: impl IntoIterator<Item = bool>) -> Self {
        Self {
            clock: clock.clone(),
            script: Script::Levels(levels.into_iter().collect(), true),
            faults: 0,
            reads: Rc::default(),
        }
    }

    /// Released button: the pull-up holds the line high.
    pub fn released(clock: &SimClock) -> Self {
        Self::timed(clock, |_| true)
    }

    /// Fail the next `n` reads.
    pub fn with_faults(mut self, n: usize) -> Self {
        self.faults = n;
        self
    }
}

impl ErrorType for MockButton {
    type Error = PinFault;
}

impl InputPin for MockButton {
    fn is_high(&mut self) -> Result<bool, PinFault> {
        if self.faults > 0 {
            self.faults -= 1;
            return Err(PinFault);
        }

        let now = self.clock.now_ms();
        self.reads.borrow_mut().push(now);
        let level = match &mut self.script {
            Script::Timed(level) => level(now),
            Script::Levels(levels, last) => {
                if let Some(next) = levels.pop_front() {
                    *last = next;
                }
                *last
            }
        };
        Ok(level)
    }

    fn is_low(&mut self) -> Result<bool, PinFault> {
        self.is_high().map(|high| !high)
    }
}

// ── LED ───────────────────────────────────────────────────────

pub struct MockLed {
    clock: SimClock,
    fail: Rc<Cell<bool>>,
    /// (timestamp ms, line high) for every successful write.
    pub writes: Rc<RefCell<Vec<(u64, bool)>>>,
}

impl MockLed {
    pub fn new(clock: &SimClock) -> Self {
        Self {
            clock: clock.clone(),
            fail: Rc::default(),
            writes: Rc::default(),
        }
    }

    /// Handle that makes subsequent writes fail while set.
    pub fn fault_switch(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.fail)
    }

    fn write(&mut self, high: bool) -> Result<(), PinFault> {
        if self.fail.get() {
            return Err(PinFault);
        }
        self.writes.borrow_mut().push((self.clock.now_ms(), high));
        Ok(())
    }
}

impl ErrorType for MockLed {
    type Error = PinFault;
}

impl OutputPin for MockLed {
    fn set_low(&mut self) -> Result<(), PinFault> {
        self.write(false)
    }

    fn set_high(&mut self) -> Result<(), PinFault> {
        self.write(true)
    }
}

// ── Scheduler ─────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SchedulerCall {
    SpawnSampler,
    SpawnActuator,
    Start,
}

/// Records registrations instead of running anything. Tasks stay available
/// so a test can drive them after `launch` returns.
#[derive(Default)]
pub struct MockScheduler {
    pub calls: Vec<SchedulerCall>,
    pub sampler: Option<Sampler<'static, MockButton, SimDelay>>,
    pub actuator: Option<Actuator<'static, MockLed>>,
    pub reject_actuator: bool,
}

impl MockScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn started(&self) -> bool {
        self.calls.contains(&SchedulerCall::Start)
    }
}

impl Scheduler for MockScheduler {
    type Button = MockButton;
    type Led = MockLed;
    type Delay = SimDelay;

    fn spawn_sampler(&mut self, sampler: Sampler<'static, MockButton, SimDelay>) -> Result<(), Error> {
        self.calls.push(SchedulerCall::SpawnSampler);
        self.sampler = Some(sampler);
        Ok(())
    }

    fn spawn_actuator(&mut self, actuator: Actuator<'static, MockLed>) -> Result<(), Error> {
        if self.reject_actuator {
            return Err(Error::Spawn);
        }
        self.calls.push(SchedulerCall::SpawnActuator);
        self.actuator = Some(actuator);
        Ok(())
    }

    fn start(&mut self) {
        self.calls.push(SchedulerCall::Start);
    }
}
