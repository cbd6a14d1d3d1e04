//! Per-field reconciliation of partial backend statistics against the
//! fallback dataset.

use crate::defaults::default_stats;
use siemdash_common::types::{DashboardStats, PartialStats};

/// Merge a possibly-partial statistics payload into a complete snapshot.
///
/// Absent input (the request failed entirely) yields the defaults
/// verbatim. Otherwise each field is taken from the payload when present
/// and well-typed, falling back per field: a response carrying only
/// `total_alerts` still produces complete, displayable series for
/// everything else. Never fails.
pub fn reconcile(remote: Option<PartialStats>) -> DashboardStats {
    let defaults = default_stats();
    let Some(remote) = remote else {
        return defaults;
    };

    DashboardStats {
        total_alerts: remote.total_alerts.unwrap_or(defaults.total_alerts),
        critical_alerts: remote.critical_alerts.unwrap_or(defaults.critical_alerts),
        events_per_sec: remote.events_per_sec.unwrap_or(defaults.events_per_sec),
        failed_logins: remote.failed_logins.unwrap_or(defaults.failed_logins),
        timeline: remote.timeline.unwrap_or(defaults.timeline),
        by_severity: remote.by_severity.unwrap_or(defaults.by_severity),
        top_ips: remote.top_ips.unwrap_or(defaults.top_ips),
        auth_events: remote.auth_events.unwrap_or(defaults.auth_events),
    }
}
