//! Repeating tasks with cancellation handles.

use std::time::Duration;

use tokio::task::JoinHandle;

/// A repeating background task.
///
/// Runs `tick` once per `period` on the tokio runtime until cancelled.
/// Dropping the handle cancels the task, so a ticker cannot outlive the
/// component that owns it.
#[derive(Debug)]
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawn a task calling `tick` once per `period`.
    ///
    /// The first call happens one full period after spawning.
    pub fn spawn<F>(period: Duration, mut tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The interval yields immediately on its first tick.
            interval.tick().await;
            loop {
                interval.tick().await;
                tick();
            }
        });

        Self { handle }
    }

    /// Stop the task. Idempotent.
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
