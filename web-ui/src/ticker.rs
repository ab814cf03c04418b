// Browser timer ticker for the periodic slide list refresh

use gloo_timers::future::TimeoutFuture;
use signage_editor_core::Ticker;
use std::time::Duration;

/// Ticks once immediately, then every `period`
pub struct TimeoutTicker {
    period_ms: u32,
    started: bool,
}

impl TimeoutTicker {
    pub fn new(period: Duration) -> Self {
        Self {
            period_ms: u32::try_from(period.as_millis()).unwrap_or(u32::MAX),
            started: false,
        }
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }
}

impl Ticker for TimeoutTicker {
    async fn tick(&mut self) {
        if !self.started {
            self.started = true;
            return;
        }
        TimeoutFuture::new(self.period_ms).await;
    }
}
