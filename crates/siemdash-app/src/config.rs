use serde::Deserialize;
use siemdash_common::types::TimeRange;

#[derive(Debug, Deserialize)]
pub struct DashboardConfig {
    /// Base URL of the analytics backend (e.g. http://localhost:8000)
    pub api_base_url: String,
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,
    /// Time range selected at startup
    #[serde(default)]
    pub initial_range: TimeRange,
}

fn default_refresh_interval() -> u64 {
    30
}

impl DashboardConfig {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
