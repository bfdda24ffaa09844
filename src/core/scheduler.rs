//! Periodic driver for the refresh cycle.
//!
//! Ticks come from a [`Ticker`]: a real interval in production, a channel in
//! tests so ticks can be fired deterministically.

use crate::errors::{AppError, AppResult};
use std::future::Future;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Interval, MissedTickBehavior};
use tracing::debug;

pub trait Ticker: Send + 'static {
    /// Wait for the next tick. `None` ends the schedule.
    fn tick(&mut self) -> impl Future<Output = Option<()>> + Send;
}

/// Ticks every `period`, the first tick fires immediately.
pub struct IntervalTicker {
    interval: Interval,
}

impl IntervalTicker {
    /// Must be called from within the tokio runtime.
    pub fn new(period: Duration) -> Self {
        let mut interval = tokio::time::interval(period.max(Duration::from_secs(1)));
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }
}

impl Ticker for IntervalTicker {
    async fn tick(&mut self) -> Option<()> {
        self.interval.tick().await;
        Some(())
    }
}

/// Ticks whenever the paired [`TickSender`] fires; ends when it is dropped.
pub struct ChannelTicker {
    rx: mpsc::UnboundedReceiver<()>,
}

#[derive(Clone)]
pub struct TickSender {
    tx: mpsc::UnboundedSender<()>,
}

impl TickSender {
    /// Returns false once the scheduler is gone.
    pub fn fire(&self) -> bool {
        self.tx.send(()).is_ok()
    }
}

impl ChannelTicker {
    pub fn channel() -> (TickSender, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (TickSender { tx }, Self { rx })
    }
}

impl Ticker for ChannelTicker {
    async fn tick(&mut self) -> Option<()> {
        self.rx.recv().await
    }
}

pub struct Scheduler<T> {
    ticker: T,
}

impl<T: Ticker> Scheduler<T> {
    pub fn new(ticker: T) -> Self {
        Self { ticker }
    }

    /// Spawn the schedule: `job` runs to completion once per tick.
    pub fn start<F, Fut>(self, mut job: F) -> SchedulerHandle
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let mut ticker = self.ticker;
        let (stop_tx, mut stop_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            let mut ticks = 0usize;
            loop {
                tokio::select! {
                    biased;
                    _ = stop_rx.changed() => break,
                    tick = ticker.tick() => match tick {
                        Some(()) => {
                            ticks += 1;
                            job().await;
                        }
                        None => break,
                    },
                }
            }
            debug!(ticks, "scheduler stopped");
            ticks
        });

        SchedulerHandle {
            stop: stop_tx,
            task,
        }
    }
}

/// Owns a running schedule. Dropping the handle stops it as well.
pub struct SchedulerHandle {
    stop: watch::Sender<bool>,
    task: JoinHandle<usize>,
}

impl SchedulerHandle {
    /// Request a stop; a job already running finishes first.
    pub fn stop(&self) {
        self.stop.send_replace(true);
    }

    /// Wait for the schedule to end and return the number of ticks run.
    pub async fn join(self) -> AppResult<usize> {
        let SchedulerHandle { stop, task } = self;
        let ticks = task
            .await
            .map_err(|e| AppError::Other(format!("scheduler task failed: {e}")))?;
        drop(stop);
        Ok(ticks)
    }
}
