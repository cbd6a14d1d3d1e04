//! Synthetic fallback dataset shown whenever the backend is unreachable
//! or returns a partial payload. Fully populated so every chart and
//! table stays renderable with no backend at all.

use chrono::{DateTime, Duration, Utc};
use siemdash_common::types::{
    Alert, AuthBucket, DashboardStats, Evidence, IpCount, Severity, SeverityCount, TimelineBucket,
};

/// Complete default statistics snapshot.
pub fn default_stats() -> DashboardStats {
    DashboardStats {
        total_alerts: 42,
        critical_alerts: 8,
        events_per_sec: 127,
        failed_logins: 156,
        timeline: vec![
            timeline("00:00", 2, 5, 8),
            timeline("04:00", 1, 3, 12),
            timeline("08:00", 3, 7, 15),
            timeline("12:00", 5, 9, 18),
            timeline("16:00", 4, 6, 14),
            timeline("20:00", 2, 4, 10),
        ],
        by_severity: vec![
            severity_count(Severity::Critical, 8),
            severity_count(Severity::High, 15),
            severity_count(Severity::Medium, 12),
            severity_count(Severity::Low, 7),
        ],
        top_ips: vec![
            ip_count("192.168.1.100", 45),
            ip_count("10.0.0.25", 32),
            ip_count("172.16.0.50", 28),
            ip_count("192.168.1.75", 19),
            ip_count("10.0.0.100", 15),
        ],
        auth_events: vec![
            auth("00:00", 5, 120),
            auth("04:00", 3, 45),
            auth("08:00", 12, 250),
            auth("12:00", 8, 310),
            auth("16:00", 15, 280),
            auth("20:00", 7, 190),
        ],
    }
}

/// Sample alert set with timestamps relative to now.
pub fn default_alerts() -> Vec<Alert> {
    vec![
        alert(
            "1",
            minutes_ago(5),
            "Multiple Failed Login Attempts",
            Severity::Critical,
            "192.168.1.100",
            "admin",
        ),
        alert(
            "2",
            minutes_ago(15),
            "Suspicious Port Scan Detected",
            Severity::High,
            "10.0.0.25",
            "N/A",
        ),
        alert(
            "3",
            minutes_ago(30),
            "Unusual Outbound Traffic",
            Severity::Medium,
            "172.16.0.50",
            "service_account",
        ),
        alert(
            "4",
            minutes_ago(45),
            "Unauthorized Access Attempt",
            Severity::High,
            "192.168.1.75",
            "guest",
        ),
        alert(
            "5",
            minutes_ago(60),
            "Config File Modified",
            Severity::Low,
            "10.0.0.100",
            "root",
        ),
    ]
}

fn minutes_ago(minutes: i64) -> DateTime<Utc> {
    Utc::now() - Duration::minutes(minutes)
}

fn alert(
    alert_id: &str,
    timestamp: DateTime<Utc>,
    rule_name: &str,
    severity: Severity,
    source_ip: &str,
    user: &str,
) -> Alert {
    Alert {
        alert_id: alert_id.to_string(),
        timestamp,
        rule_name: rule_name.to_string(),
        severity,
        evidence: Evidence {
            source_ip: source_ip.to_string(),
            user: user.to_string(),
            extra: serde_json::Map::new(),
        },
    }
}

fn timeline(time: &str, critical: u64, high: u64, medium: u64) -> TimelineBucket {
    TimelineBucket {
        time: time.to_string(),
        critical,
        high,
        medium,
    }
}

fn severity_count(severity: Severity, count: u64) -> SeverityCount {
    SeverityCount { severity, count }
}

fn ip_count(ip: &str, count: u64) -> IpCount {
    IpCount {
        ip: ip.to_string(),
        count,
    }
}

fn auth(hour: &str, failed: u64, success: u64) -> AuthBucket {
    AuthBucket {
        hour: hour.to_string(),
        failed,
        success,
    }
}
