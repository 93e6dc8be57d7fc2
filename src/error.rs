//! Error types for the button → LED firmware
//!
//! Only startup can fail in a way the caller has to handle. Queue waits are
//! unbounded on the task paths, so `Timeout` is reachable only through an
//! explicit [`Wait::Timeout`](crate::channels::Wait::Timeout).

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Storage for the state queue could not be claimed.
    QueueUnavailable,
    /// The scheduler refused to register a task.
    Spawn,
    /// A bounded queue wait elapsed before the operation completed.
    Timeout,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QueueUnavailable => write!(f, "state queue unavailable"),
            Self::Spawn => write!(f, "task spawn failed"),
            Self::Timeout => write!(f, "queue wait timed out"),
        }
    }
}

impl From<embassy_time::TimeoutError> for Error {
    fn from(_: embassy_time::TimeoutError) -> Self {
        Self::Timeout
    }
}
