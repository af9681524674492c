//! Cancellable one-second wake-up for a running [`super::SessionClock`].
//!
//! The ticker owns at most one tokio task. Every signal carries the
//! generation of the task that sent it; cancelling bumps the generation, so
//! signals already queued by an old task are rejected by the host instead of
//! double-decrementing the clock.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Period used by the widget host.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

const CHANNEL_CAPACITY: usize = 16;

/// One elapsed period, stamped with the generation that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSignal {
    pub generation: u64,
}

#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    generation: u64,
    tx: mpsc::Sender<TickSignal>,
    task: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Create a stopped ticker and the receiving end of its signals.
    pub fn new(period: Duration) -> (Self, mpsc::Receiver<TickSignal>) {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        let ticker = Self {
            period,
            generation: 0,
            tx,
            task: None,
        };
        (ticker, rx)
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Spawn the periodic task unless one is already running.
    ///
    /// The first signal arrives one full period after this call. Must be
    /// called from within a tokio runtime.
    pub fn ensure_running(&mut self) {
        if self.task.is_some() {
            return;
        }
        let generation = self.generation;
        let period = self.period;
        let tx = self.tx.clone();
        self.task = Some(tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(TickSignal { generation }).await.is_err() {
                    break;
                }
            }
        }));
        tracing::trace!(generation, "ticker started");
    }

    /// Abort the task. Signals it already queued become stale.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            self.generation += 1;
            tracing::trace!(generation = self.generation, "ticker cancelled");
        }
    }

    /// Start or cancel so the ticker matches the clock's running flag.
    pub fn sync(&mut self, running: bool) {
        if running {
            self.ensure_running();
        } else {
            self.cancel();
        }
    }

    /// Whether a received signal comes from the live task.
    pub fn is_current(&self, signal: TickSignal) -> bool {
        self.task.is_some() && signal.generation == self.generation
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
