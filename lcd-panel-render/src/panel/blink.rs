//! Cancellable periodic blink task.
//!
//! Wraps a single tokio task that calls a tick callback once per period. The
//! first tick fires one full period after `start`, and ticks never overlap
//! because one task awaits one interval.

use crate::error::RenderError;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

#[derive(Debug)]
pub struct BlinkTimer {
    period: Duration,
    task: Option<JoinHandle<()>>,
}

impl BlinkTimer {
    pub fn new(period: Duration) -> Self {
        Self { period, task: None }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Spawn the periodic task on the current tokio runtime.
    ///
    /// Does nothing if a task is already running; an existing task is only
    /// ever replaced after [`BlinkTimer::stop`].
    pub fn start<F>(&mut self, mut on_tick: F) -> Result<(), RenderError>
    where
        F: FnMut() + Send + 'static,
    {
        if self.is_running() {
            return Ok(());
        }

        let runtime = Handle::try_current().map_err(|_| RenderError::NoRuntime)?;
        let period = self.period;
        let handle = runtime.spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                on_tick();
            }
        });

        self.task = Some(handle);
        Ok(())
    }

    /// Abort the task. Returns whether one was running; calling again is a
    /// no-op.
    pub fn stop(&mut self) -> bool {
        match self.task.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }
}

impl Drop for BlinkTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
