//! Background task publishing simulated metric snapshots.

use crate::LiveMetricSimulator;
use luminous_core::MetricSnapshot;
use luminous_error::{LiveError, LiveErrorKind};
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, instrument};

/// Interval between simulated updates.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(3);

/// Immutable set of metrics published on each tick.
pub type MetricSet = Arc<[MetricSnapshot]>;

type Publisher = Arc<Mutex<Option<watch::Sender<MetricSet>>>>;

/// Spawns live metric feeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveFeed;

impl LiveFeed {
    /// Start publishing a new metric set every `interval`.
    ///
    /// The initial set is visible to subscribers immediately. The first
    /// update lands one full interval after spawning. Must be called from
    /// within a tokio runtime.
    #[instrument(skip(simulator, initial), fields(metrics = initial.len()))]
    pub fn spawn<R>(
        mut simulator: LiveMetricSimulator<R>,
        initial: Vec<MetricSnapshot>,
        interval: Duration,
    ) -> Result<LiveFeedHandle, LiveError>
    where
        R: Rng + Send + 'static,
    {
        if interval.is_zero() {
            return Err(LiveErrorKind::InvalidInterval.into());
        }

        let (sender, receiver) = watch::channel::<MetricSet>(initial.into());
        let publisher: Publisher = Arc::new(Mutex::new(Some(sender)));
        let ticks = Arc::new(AtomicU64::new(0));

        let task = {
            let publisher = Arc::clone(&publisher);
            let ticks = Arc::clone(&ticks);
            tokio::spawn(async move {
                let mut timer = tokio::time::interval(interval);
                timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
                // First tick completes immediately
                timer.tick().await;
                loop {
                    timer.tick().await;
                    let guard = match lock(&publisher) {
                        Ok(guard) => guard,
                        Err(e) => {
                            error!(error = %e, "Live feed publisher unavailable");
                            break;
                        }
                    };
                    // Detached by stop(); never publish after that.
                    let Some(sender) = guard.as_ref() else {
                        break;
                    };
                    let current = sender.borrow().clone();
                    let next: MetricSet = simulator.tick(&current).into();
                    sender.send_replace(next);
                    let tick = ticks.fetch_add(1, Ordering::Relaxed) + 1;
                    debug!(tick, "Published metric snapshot");
                }
            })
        };

        info!(?interval, "Live feed started");
        Ok(LiveFeedHandle {
            receiver,
            publisher,
            ticks,
            task: Some(task),
        })
    }
}

/// Owner of a running feed.
///
/// Dropping the handle stops the feed.
#[derive(Debug)]
pub struct LiveFeedHandle {
    receiver: watch::Receiver<MetricSet>,
    publisher: Publisher,
    ticks: Arc<AtomicU64>,
    task: Option<JoinHandle<()>>,
}

impl LiveFeedHandle {
    /// Receiver notified on every published set.
    ///
    /// Once the feed stops, `changed()` on the receiver returns an error.
    pub fn subscribe(&self) -> watch::Receiver<MetricSet> {
        self.receiver.clone()
    }

    /// Most recently published set.
    pub fn latest(&self) -> MetricSet {
        self.receiver.borrow().clone()
    }

    /// Number of updates published so far.
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }

    /// Whether updates are still being published.
    pub fn is_running(&self) -> bool {
        lock(&self.publisher)
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }

    /// Stop publishing.
    ///
    /// No update is published once this returns. Stopping an already
    /// stopped feed returns [`LiveErrorKind::NotRunning`].
    #[instrument(skip(self))]
    pub fn stop(&mut self) -> Result<(), LiveError> {
        let sender = lock(&self.publisher)?.take();
        if sender.is_none() {
            return Err(LiveErrorKind::NotRunning.into());
        }
        if let Some(task) = self.task.take() {
            task.abort();
        }
        info!(ticks = self.ticks(), "Live feed stopped");
        Ok(())
    }
}

impl Drop for LiveFeedHandle {
    fn drop(&mut self) {
        if self.is_running() {
            let _ = self.stop();
        }
    }
}

fn lock(
    publisher: &Publisher,
) -> Result<MutexGuard<'_, Option<watch::Sender<MetricSet>>>, LiveError> {
    publisher
        .lock()
        .map_err(|e| LiveError::new(LiveErrorKind::Publish(e.to_string())))
}
