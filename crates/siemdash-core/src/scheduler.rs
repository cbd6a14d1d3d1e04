//! Periodic refresh loop driving the remote source and publishing
//! consolidated snapshots.

use crate::defaults::{default_alerts, default_stats};
use crate::lock_store;
use crate::reconcile::reconcile;
use crate::store::AlertStore;
use siemdash_client::DashboardSource;
use siemdash_common::types::{DashboardSnapshot, TimeRange};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Refresh period matching the original 30-second dashboard poll.
pub const DEFAULT_REFRESH_PERIOD: Duration = Duration::from_secs(30);

enum Command {
    SetRange(TimeRange),
    Stop,
}

/// Drives the refresh loop on a single tokio task. Cycles alternate
/// Idle → Refreshing → Idle and never overlap: the next timer is armed
/// only after the current cycle has published, and range changes are
/// picked up between cycles, each starting an immediate refresh with a
/// restarted timer.
pub struct RefreshScheduler {
    cmd_tx: mpsc::UnboundedSender<Command>,
    snapshot_rx: watch::Receiver<DashboardSnapshot>,
    handle: JoinHandle<()>,
}

impl RefreshScheduler {
    /// Spawn the refresh loop. The first cycle begins immediately.
    pub fn start(
        source: Arc<dyn DashboardSource>,
        store: Arc<Mutex<AlertStore>>,
        initial_range: TimeRange,
        period: Duration,
    ) -> Self {
        let (cmd_tx, mut cmd_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(DashboardSnapshot {
            stats: default_stats(),
            alerts: Vec::new(),
            is_loading: true,
            last_error: None,
        });

        let handle = tokio::spawn(async move {
            let mut range = initial_range;
            loop {
                run_cycle(source.as_ref(), &store, &snapshot_tx, range).await;

                tokio::select! {
                    _ = tokio::time::sleep(period) => {}
                    cmd = cmd_rx.recv() => match cmd {
                        Some(Command::SetRange(new_range)) => {
                            tracing::info!(range = %new_range, "time range changed, refreshing now");
                            range = new_range;
                        }
                        Some(Command::Stop) | None => break,
                    }
                }
            }
            tracing::debug!("refresh loop stopped");
        });

        Self {
            cmd_tx,
            snapshot_rx,
            handle,
        }
    }

    /// Receiver for published snapshots. The current value is always a
    /// complete, renderable snapshot.
    pub fn subscribe(&self) -> watch::Receiver<DashboardSnapshot> {
        self.snapshot_rx.clone()
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> DashboardSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Switch the time range. Invalidates the current snapshot and
    /// forces an immediate out-of-cycle refresh.
    pub fn set_range(&self, range: TimeRange) {
        let _ = self.cmd_tx.send(Command::SetRange(range));
    }

    /// Stop the loop. An in-flight cycle completes and publishes; no
    /// further timer is armed. Awaits the task so callers observe a
    /// clean shutdown.
    pub async fn stop(self) {
        let _ = self.cmd_tx.send(Command::Stop);
        let _ = self.handle.await;
    }
}

/// One refresh cycle: mark loading (prior data stays visible), fetch,
/// reconcile, seed the store, publish.
async fn run_cycle(
    source: &dyn DashboardSource,
    store: &Mutex<AlertStore>,
    snapshot_tx: &watch::Sender<DashboardSnapshot>,
    range: TimeRange,
) {
    snapshot_tx.send_modify(|snapshot| snapshot.is_loading = true);

    match source.fetch_dashboard(range).await {
        Ok(payload) => {
            let stats = reconcile(payload.stats);
            let alerts = payload.alerts.unwrap_or_else(default_alerts);
            let alerts = {
                let mut store = lock_store(store);
                store.seed(alerts);
                store.active_alerts().to_vec()
            };
            tracing::debug!(
                range = %range,
                total_alerts = stats.total_alerts,
                alerts = alerts.len(),
                "dashboard refreshed"
            );
            snapshot_tx.send_replace(DashboardSnapshot {
                stats,
                alerts,
                is_loading: false,
                last_error: None,
            });
        }
        Err(e) => {
            tracing::warn!(range = %range, error = %e, "dashboard fetch failed, serving fallback data");
            let alerts = default_alerts();
            lock_store(store).seed(alerts.clone());
            snapshot_tx.send_replace(DashboardSnapshot {
                stats: default_stats(),
                alerts,
                is_loading: false,
                last_error: Some(format!("using fallback data: {e}")),
            });
        }
    }
}
