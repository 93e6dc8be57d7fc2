//! Run-forever task abstraction
//!
//! A task is a context struct (pins, queue handle, delay source) plus a loop
//! body. [`Task::step`] runs one iteration; [`Task::run`] is the entry point
//! handed to the scheduler and never returns.

#[allow(async_fn_in_trait)]
pub trait Task {
    /// Name used in log output
    const NAME: &'static str;

    /// One iteration of the task loop.
    async fn step(&mut self);

    /// Loop on [`Task::step`] forever.
    async fn run(&mut self) {
        info!("{} task started", Self::NAME);
        loop {
            self.step().await;
        }
    }
}
