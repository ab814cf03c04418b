// Slide list refresh signal and the periodic scheduler that fires it

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Notification to the slide list view that the collection changed
///
/// Clones share one signal. Triggers that arrive while the consumer is
/// busy coalesce into a single pending wake-up.
#[derive(Debug, Clone, Default)]
pub struct ListRefreshSignal {
    inner: Arc<SignalInner>,
}

#[derive(Debug, Default)]
struct SignalInner {
    notify: Notify,
    fired: AtomicU64,
}

impl ListRefreshSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a list refresh
    pub fn trigger(&self) {
        self.inner.fired.fetch_add(1, Ordering::SeqCst);
        self.inner.notify.notify_one();
    }

    /// Wait until a refresh has been requested
    pub async fn requested(&self) {
        self.inner.notify.notified().await;
    }

    /// Number of triggers since creation
    pub fn fired_count(&self) -> u64 {
        self.inner.fired.load(Ordering::SeqCst)
    }
}

/// Source of periodic ticks
#[allow(async_fn_in_trait)]
pub trait Ticker {
    /// Resolve at the next tick
    async fn tick(&mut self);
}

#[cfg(feature = "runtime")]
impl Ticker for tokio::time::Interval {
    async fn tick(&mut self) {
        tokio::time::Interval::tick(self).await;
    }
}

/// Fires the list refresh signal on every tick, independent of user action
///
/// There is no back-pressure; coalescing happens in [`ListRefreshSignal`].
pub struct PeriodicRefreshScheduler<T: Ticker> {
    ticker: T,
    signal: ListRefreshSignal,
}

impl<T: Ticker> PeriodicRefreshScheduler<T> {
    pub fn new(ticker: T, signal: ListRefreshSignal) -> Self {
        Self { ticker, signal }
    }

    /// Run forever; drop the future to stop
    pub async fn run(mut self) {
        loop {
            self.ticker.tick().await;
            tracing::trace!("periodic slide list refresh");
            self.signal.trigger();
        }
    }
}

#[cfg(feature = "runtime")]
impl PeriodicRefreshScheduler<tokio::time::Interval> {
    /// Scheduler on a tokio interval; the first tick fires immediately
    pub fn every(period: std::time::Duration, signal: ListRefreshSignal) -> Self {
        Self::new(tokio::time::interval(period), signal)
    }

    /// Spawn onto the current tokio runtime
    pub fn spawn(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(self.run())
    }
}
