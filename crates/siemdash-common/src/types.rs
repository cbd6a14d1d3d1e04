use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Alert severity level, ordered from lowest to highest.
///
/// # Examples
///
/// ```
/// use siemdash_common::types::Severity;
///
/// let sev: Severity = "critical".parse().unwrap();
/// assert_eq!(sev, Severity::Critical);
/// assert_eq!(sev.to_string(), "critical");
/// assert!(Severity::Critical > Severity::Low);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            "critical" => Ok(Severity::Critical),
            _ => Err(format!("unknown severity: {s}")),
        }
    }
}

/// Time range selector for dashboard queries.
///
/// # Examples
///
/// ```
/// use siemdash_common::types::TimeRange;
///
/// let range: TimeRange = "7d".parse().unwrap();
/// assert_eq!(range, TimeRange::Last7Days);
/// assert_eq!(range.as_str(), "7d");
/// assert_eq!(TimeRange::default(), TimeRange::Last24Hours);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "1h")]
    LastHour,
    #[serde(rename = "24h")]
    Last24Hours,
    #[serde(rename = "7d")]
    Last7Days,
    #[serde(rename = "30d")]
    Last30Days,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::LastHour => "1h",
            TimeRange::Last24Hours => "24h",
            TimeRange::Last7Days => "7d",
            TimeRange::Last30Days => "30d",
        }
    }
}

impl Default for TimeRange {
    fn default() -> Self {
        TimeRange::Last24Hours
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1h" => Ok(TimeRange::LastHour),
            "24h" => Ok(TimeRange::Last24Hours),
            "7d" => Ok(TimeRange::Last7Days),
            "30d" => Ok(TimeRange::Last30Days),
            _ => Err(format!("unknown time range: {s}")),
        }
    }
}

fn not_available() -> String {
    "N/A".to_string()
}

/// Evidence attached to an alert. `source_ip` and `user` are always
/// present after deserialization (defaulting to "N/A"); any other
/// fields the detection pipeline attaches are preserved untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evidence {
    #[serde(default = "not_available")]
    pub source_ip: String,
    #[serde(default = "not_available")]
    pub user: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Default for Evidence {
    fn default() -> Self {
        Self {
            source_ip: not_available(),
            user: not_available(),
            extra: serde_json::Map::new(),
        }
    }
}

/// A single detected security event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub alert_id: String,
    pub timestamp: DateTime<Utc>,
    pub rule_name: String,
    pub severity: Severity,
    #[serde(default)]
    pub evidence: Evidence,
}

/// Severity counts for one timeline bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineBucket {
    pub time: String,
    pub critical: u64,
    pub high: u64,
    pub medium: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityCount {
    pub severity: Severity,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpCount {
    pub ip: String,
    pub count: u64,
}

/// Failed/successful login counts for one hourly bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthBucket {
    pub hour: String,
    pub failed: u64,
    pub success: u64,
}

/// Complete aggregate statistics snapshot. Series are ordered
/// (chronological or rank order) and that order is display-significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_alerts: u64,
    pub critical_alerts: u64,
    pub events_per_sec: u64,
    pub failed_logins: u64,
    pub timeline: Vec<TimelineBucket>,
    pub by_severity: Vec<SeverityCount>,
    pub top_ips: Vec<IpCount>,
    pub auth_events: Vec<AuthBucket>,
}

/// Deserialize a field tolerantly: a missing or malformed value becomes
/// `None` instead of failing the surrounding struct.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Statistics as the backend actually returned them: every field may be
/// absent or malformed. Reconciliation fills the gaps from defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialStats {
    #[serde(default, deserialize_with = "lenient")]
    pub total_alerts: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub critical_alerts: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub events_per_sec: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub failed_logins: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub timeline: Option<Vec<TimelineBucket>>,
    #[serde(default, deserialize_with = "lenient")]
    pub by_severity: Option<Vec<SeverityCount>>,
    #[serde(default, deserialize_with = "lenient")]
    pub top_ips: Option<Vec<IpCount>>,
    #[serde(default, deserialize_with = "lenient")]
    pub auth_events: Option<Vec<AuthBucket>>,
}

/// Body of a dashboard fetch. Both fields are optional and tolerant:
/// a malformed `alerts` or `stats` value degrades to `None` rather than
/// failing the whole response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardPayload {
    #[serde(default, deserialize_with = "lenient")]
    pub alerts: Option<Vec<Alert>>,
    #[serde(default, deserialize_with = "lenient")]
    pub stats: Option<PartialStats>,
}

/// Consolidated state published after every refresh cycle. Consumers
/// treat a snapshot as immutable once published.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub stats: DashboardStats,
    pub alerts: Vec<Alert>,
    pub is_loading: bool,
    pub last_error: Option<String>,
}
