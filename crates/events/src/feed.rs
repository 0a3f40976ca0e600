//! Dashboard activity feed service.
//!
//! [`ActivityFeed`] keeps a most-recent-first, capped list of activity
//! entries. While [`run`](ActivityFeed::run) is active it prepends a synthetic
//! entry every interval and a "You created ..." entry for every creation seen
//! on the event bus.

use std::sync::Arc;
use std::time::Duration;

use teamspace_core::activity::{
    entry_for_change, pick_synthetic, ActivityEntry, ActivityLog, DEFAULT_ACTIVITY_INTERVAL_SECS,
    DEFAULT_FEED_CAP,
};
use tokio::sync::{broadcast, RwLock};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::bus::TeamEvent;

// ---------------------------------------------------------------------------
// ActivityFeed
// ---------------------------------------------------------------------------

pub struct ActivityFeed {
    log: RwLock<ActivityLog>,
    interval: Duration,
}

impl ActivityFeed {
    /// Feed starting from the initial dashboard entries, capped at `cap`.
    pub fn new(cap: usize, interval: Duration) -> Self {
        Self {
            log: RwLock::new(ActivityLog::seeded(cap)),
            interval,
        }
    }

    /// Current entries, newest first.
    pub async fn snapshot(&self) -> Vec<ActivityEntry> {
        self.log.read().await.entries().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.log.read().await.len()
    }

    pub async fn record(&self, entry: ActivityEntry) {
        self.log.write().await.push(entry);
    }

    /// Run the feed until `cancel` fires.
    ///
    /// The first synthetic entry arrives one full interval after start. If
    /// the bus closes the ticker keeps running.
    pub async fn run(&self, mut events: broadcast::Receiver<TeamEvent>, cancel: CancellationToken) {
        let mut ticker = interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut bus_open = true;

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Activity feed cancelled");
                    break;
                }
                _ = ticker.tick() => {
                    let entry = {
                        let mut rng = rand::rng();
                        pick_synthetic(&mut rng)
                    };
                    tracing::debug!(user = %entry.user, action = %entry.action, "Synthetic activity");
                    self.record(entry).await;
                }
                received = events.recv(), if bus_open => match received {
                    Ok(event) => {
                        if let Some(entry) = event.change.as_ref().and_then(entry_for_change) {
                            tracing::debug!(event_type = %event.event_type, "Recorded activity");
                            self.record(entry).await;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!(skipped = n, "Activity feed lagged, some events were missed");
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        tracing::info!("Event bus closed, activity feed continues without it");
                        bus_open = false;
                    }
                },
            }
        }
    }
}

impl Default for ActivityFeed {
    fn default() -> Self {
        Self::new(
            DEFAULT_FEED_CAP,
            Duration::from_secs(DEFAULT_ACTIVITY_INTERVAL_SECS),
        )
    }
}

/// Spawn `feed` on the current runtime, listening to `events`.
pub fn spawn(
    feed: Arc<ActivityFeed>,
    events: broadcast::Receiver<TeamEvent>,
    cancel: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move { feed.run(events, cancel).await })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
