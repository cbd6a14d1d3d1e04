mod config;

use anyhow::Result;
use siemdash_client::ApiClient;
use siemdash_core::scheduler::RefreshScheduler;
use siemdash_core::store::AlertStore;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("siemdash=info".parse()?))
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/dashboard.toml".to_string());

    let config = config::DashboardConfig::load(&config_path)?;
    tracing::info!(
        backend = %config.api_base_url,
        interval_secs = config.refresh_interval_secs,
        range = %config.initial_range,
        "siemdash starting"
    );

    let source: Arc<dyn siemdash_client::DashboardSource> =
        Arc::new(ApiClient::new(&config.api_base_url)?);
    let store = Arc::new(Mutex::new(AlertStore::new()));

    let scheduler = RefreshScheduler::start(
        source,
        store,
        config.initial_range,
        Duration::from_secs(config.refresh_interval_secs),
    );
    let mut snapshots = scheduler.subscribe();

    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                if snapshot.is_loading {
                    continue;
                }
                match &snapshot.last_error {
                    Some(error) => tracing::warn!(
                        alerts = snapshot.alerts.len(),
                        total = snapshot.stats.total_alerts,
                        error = %error,
                        "snapshot published (fallback data)"
                    ),
                    None => tracing::info!(
                        alerts = snapshot.alerts.len(),
                        total = snapshot.stats.total_alerts,
                        critical = snapshot.stats.critical_alerts,
                        events_per_sec = snapshot.stats.events_per_sec,
                        "snapshot published"
                    ),
                }
            }
            _ = signal::ctrl_c() => {
                tracing::info!("Shutting down gracefully");
                scheduler.stop().await;
                break;
            }
        }
    }

    Ok(())
}
