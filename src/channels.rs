//! Inter-task communication channel
//!
//! The sampler and the actuator share a single bounded FIFO of
//! [`InputState`] values. The queue lives in a [`StaticCell`] claimed once at
//! startup and handed to each task as a [`Producer`] or [`Consumer`] handle,
//! so neither task reaches for a global.
//!
//! Every blocking operation takes a [`Wait`]. The task loops always pass
//! [`Wait::Forever`]: a full queue stalls the sampler and an empty queue
//! parks the actuator, and no sample is ever dropped.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_time::{with_timeout, Duration};
use static_cell::StaticCell;

use crate::config::QUEUE_DEPTH;
use crate::error::Error;
use crate::types::InputState;

/// Mutex guarding the queue. Host tests poll both ends from plain threads,
/// which rules out the thread-mode mutex.
pub type QueueMutex = CriticalSectionRawMutex;

/// How long a queue operation may block
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Wait {
    /// Block until the operation can complete.
    Forever,
    /// Give up with [`Error::Timeout`] once the duration elapses. The queue
    /// is left untouched when that happens.
    Timeout(Duration),
}

/// Bounded FIFO of sampled button states
pub struct StateQueue {
    channel: Channel<QueueMutex, InputState, QUEUE_DEPTH>,
}

impl StateQueue {
    pub const fn new() -> Self {
        Self {
            channel: Channel::new(),
        }
    }

    pub fn producer(&self) -> Producer<'_> {
        Producer {
            sender: self.channel.sender(),
        }
    }

    pub fn consumer(&self) -> Consumer<'_> {
        Consumer {
            receiver: self.channel.receiver(),
        }
    }

    pub const fn capacity(&self) -> usize {
        QUEUE_DEPTH
    }

    pub fn len(&self) -> usize {
        self.channel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.channel.is_full()
    }
}

impl Default for StateQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Claim the queue storage. Fails if the cell has already been claimed.
pub fn create(cell: &'static StaticCell<StateQueue>) -> Result<&'static StateQueue, Error> {
    match cell.try_init(StateQueue::new()) {
        Some(queue) => Ok(&*queue),
        None => Err(Error::QueueUnavailable),
    }
}

/// Sending end of the state queue, owned by the sampler
#[derive(Clone, Copy)]
pub struct Producer<'a> {
    sender: Sender<'a, QueueMutex, InputState, QUEUE_DEPTH>,
}

impl Producer<'_> {
    /// Push a state, blocking for at most `wait` while the queue is full.
    pub async fn send(&self, state: InputState, wait: Wait) -> Result<(), Error> {
        match wait {
            Wait::Forever => {
                self.sender.send(state).await;
                Ok(())
            }
            Wait::Timeout(timeout) => Ok(with_timeout(timeout, self.sender.send(state)).await?),
        }
    }

    /// Push without blocking. Hands the state back if the queue is full.
    pub fn try_send(&self, state: InputState) -> Result<(), InputState> {
        self.sender.try_send(state).map_err(|e| match e {
            embassy_sync::channel::TrySendError::Full(state) => state,
        })
    }
}

/// Receiving end of the state queue, owned by the actuator
#[derive(Clone, Copy)]
pub struct Consumer<'a> {
    receiver: Receiver<'a, QueueMutex, InputState, QUEUE_DEPTH>,
}

impl Consumer<'_> {
    /// Pop the oldest state, blocking for at most `wait` while the queue is empty.
    pub async fn receive(&self, wait: Wait) -> Result<InputState, Error> {
        match wait {
            Wait::Forever => Ok(self.receiver.receive().await),
            Wait::Timeout(timeout) => Ok(with_timeout(timeout, self.receiver.receive()).await?),
        }
    }

    pub fn try_receive(&self) -> Option<InputState> {
        self.receiver.try_receive().ok()
    }
}
