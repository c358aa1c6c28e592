//! Periodic data refresh
//!
//! Refresh is time-driven, never failure-driven: a cycle that errors is
//! logged and dropped, and the driver simply waits for the next tick. Cycles
//! run one at a time on a dedicated tokio task.

use crate::Result;
use futures::future::BoxFuture;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Handle to a running refresh loop. Dropping the handle stops the loop.
pub struct RefreshTask {
    handle: JoinHandle<()>,
}

impl RefreshTask {
    /// Spawns a loop that runs `cycle` every `interval`, starting one
    /// interval from now.
    pub fn spawn<F>(interval: Duration, mut cycle: F) -> Self
    where
        F: FnMut() -> BoxFuture<'static, Result<()>> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // the first tick completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if let Err(e) = cycle().await {
                    log::warn!("refresh cycle failed: {}", e);
                }
            }
        });
        Self { handle }
    }

    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for RefreshTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
