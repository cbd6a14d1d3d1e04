//! User-intent orchestration: investigate and resolve alerts.

use crate::lock_store;
use crate::store::AlertStore;
use siemdash_client::DashboardSource;
use siemdash_common::types::Alert;
use std::sync::{Arc, Mutex};

/// Handles investigate/resolve intents against the store and the remote
/// source. Resolution is optimistic and local-first: the backend call is
/// a side effect to keep, not a gate, so the UI is never held hostage by
/// backend availability.
pub struct AlertLifecycleController {
    source: Arc<dyn DashboardSource>,
    store: Arc<Mutex<AlertStore>>,
    selected: Option<Alert>,
}

impl AlertLifecycleController {
    pub fn new(source: Arc<dyn DashboardSource>, store: Arc<Mutex<AlertStore>>) -> Self {
        Self {
            source,
            store,
            selected: None,
        }
    }

    /// Select an alert for detailed view. Replaces any prior selection;
    /// does not mutate the store.
    pub fn investigate(&mut self, alert: Alert) {
        self.selected = Some(alert);
    }

    /// The alert currently under investigation, if any.
    pub fn selected(&self) -> Option<&Alert> {
        self.selected.as_ref()
    }

    /// Close the detail view without resolving.
    pub fn close_investigation(&mut self) {
        self.selected = None;
    }

    /// Resolve an alert: notify the backend best-effort, then remove it
    /// locally regardless of the outcome, clearing the selection if it
    /// pointed at this alert. Never fails.
    pub async fn resolve(&mut self, alert_id: &str) {
        match self.source.submit_resolution(alert_id).await {
            Ok(status) if (200..300).contains(&status) => {
                tracing::debug!(alert_id, status, "resolution acknowledged by backend");
            }
            Ok(status) => {
                tracing::warn!(alert_id, status, "backend rejected resolution, resolving locally");
            }
            Err(e) => {
                tracing::warn!(alert_id, error = %e, "resolution submit failed, resolving locally");
            }
        }

        lock_store(&self.store).resolve(alert_id);

        if self
            .selected
            .as_ref()
            .is_some_and(|a| a.alert_id == alert_id)
        {
            self.selected = None;
        }
    }
}
