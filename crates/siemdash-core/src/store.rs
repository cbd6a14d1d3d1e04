//! In-memory store of active alerts and the session's resolved set.

use siemdash_common::types::Alert;
use std::collections::HashSet;

/// Holds the current active alert collection and the set of alert ids
/// resolved during this process lifetime. No persistence: the resolved
/// set resets on restart, and the active collection is rebuilt from the
/// backend (or fallback) on every refresh.
#[derive(Debug, Default)]
pub struct AlertStore {
    active: Vec<Alert>,
    resolved: HashSet<String>,
}

impl AlertStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active collection wholesale. The server is the source
    /// of truth for what is active: ids in the resolved set are NOT
    /// filtered out here, so a seed may reintroduce an alert the server
    /// still reports until its resolution propagates.
    pub fn seed(&mut self, alerts: Vec<Alert>) {
        self.active = alerts;
    }

    /// Remove the alert with this id from the active collection (no-op
    /// if absent) and record the id as resolved. Idempotent.
    pub fn resolve(&mut self, alert_id: &str) {
        self.active.retain(|a| a.alert_id != alert_id);
        self.resolved.insert(alert_id.to_string());
    }

    /// Active alerts in original insertion order, never re-sorted.
    pub fn active_alerts(&self) -> &[Alert] {
        &self.active
    }

    pub fn is_resolved(&self, alert_id: &str) -> bool {
        self.resolved.contains(alert_id)
    }

    /// Ids resolved during this session.
    pub fn resolved_ids(&self) -> &HashSet<String> {
        &self.resolved
    }
}
