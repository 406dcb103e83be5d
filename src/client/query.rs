//! Typed query parameters for the backend gateway.

use crate::client::types::{AgentStatus, LogLevel, LogStatus, TraceStatus};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bounds applied to the logs page size before the request is sent.
pub const LOG_LIMIT_MIN: u32 = 10;
pub const LOG_LIMIT_MAX: u32 = 200;

/// Tri-state agent status filter. `All` short-circuits filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Idle,
    Error,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Idle => "idle",
            StatusFilter::Error => "error",
        }
    }

    /// Whether an agent status passes this filter.
    pub fn matches(&self, status: AgentStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == AgentStatus::Active,
            StatusFilter::Idle => status == AgentStatus::Idle,
            StatusFilter::Error => status == AgentStatus::Error,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "idle" => Ok(StatusFilter::Idle),
            "error" => Ok(StatusFilter::Error),
            _ => Err(format!("Invalid status filter: {}", s)),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Log level filter for the logs listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelFilter {
    #[default]
    All,
    Info,
    Warning,
    Error,
    Debug,
}

impl LevelFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            LevelFilter::All => "all",
            LevelFilter::Info => "info",
            LevelFilter::Warning => "warning",
            LevelFilter::Error => "error",
            LevelFilter::Debug => "debug",
        }
    }

    pub fn matches(&self, level: LogLevel) -> bool {
        match self {
            LevelFilter::All => true,
            LevelFilter::Info => level == LogLevel::Info,
            LevelFilter::Warning => level == LogLevel::Warning,
            LevelFilter::Error => level == LogLevel::Error,
            LevelFilter::Debug => level == LogLevel::Debug,
        }
    }
}

impl FromStr for LevelFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(LevelFilter::All),
            "info" => Ok(LevelFilter::Info),
            "warning" => Ok(LevelFilter::Warning),
            "error" => Ok(LevelFilter::Error),
            "debug" => Ok(LevelFilter::Debug),
            _ => Err(format!("Invalid level filter: {}", s)),
        }
    }
}

impl fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome filter for the logs listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeFilter {
    #[default]
    All,
    Success,
    Error,
    Pending,
}

impl OutcomeFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeFilter::All => "all",
            OutcomeFilter::Success => "success",
            OutcomeFilter::Error => "error",
            OutcomeFilter::Pending => "pending",
        }
    }

    pub fn matches(&self, status: LogStatus) -> bool {
        match self {
            OutcomeFilter::All => true,
            OutcomeFilter::Success => status == LogStatus::Success,
            OutcomeFilter::Error => status == LogStatus::Error,
            OutcomeFilter::Pending => status == LogStatus::Pending,
        }
    }
}

impl FromStr for OutcomeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(OutcomeFilter::All),
            "success" => Ok(OutcomeFilter::Success),
            "error" => Ok(OutcomeFilter::Error),
            "pending" => Ok(OutcomeFilter::Pending),
            _ => Err(format!("Invalid status filter: {}", s)),
        }
    }
}

impl fmt::Display for OutcomeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trace status filter, applied client-side to a fetched page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceFilter {
    #[default]
    All,
    Completed,
    Error,
    Active,
}

impl TraceFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            TraceFilter::All => "all",
            TraceFilter::Completed => "completed",
            TraceFilter::Error => "error",
            TraceFilter::Active => "active",
        }
    }

    pub fn matches(&self, status: TraceStatus) -> bool {
        match self {
            TraceFilter::All => true,
            TraceFilter::Completed => status == TraceStatus::Completed,
            TraceFilter::Error => status == TraceStatus::Error,
            TraceFilter::Active => status == TraceStatus::Active,
        }
    }
}

impl FromStr for TraceFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(TraceFilter::All),
            "completed" => Ok(TraceFilter::Completed),
            "error" => Ok(TraceFilter::Error),
            "active" => Ok(TraceFilter::Active),
            _ => Err(format!("Invalid trace filter: {}", s)),
        }
    }
}

impl fmt::Display for TraceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metric series selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Tokens,
    Costs,
    Latency,
}

impl MetricKind {
    /// Path segment under /api/v1/metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Tokens => "tokens",
            MetricKind::Costs => "costs",
            MetricKind::Latency => "latency",
        }
    }
}

impl FromStr for MetricKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tokens" => Ok(MetricKind::Tokens),
            "costs" => Ok(MetricKind::Costs),
            "latency" => Ok(MetricKind::Latency),
            _ => Err(format!("Invalid metric kind: {}", s)),
        }
    }
}

/// Aggregation window for metrics and activity queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1h")]
    Hour,
    #[serde(rename = "6h")]
    SixHours,
    #[default]
    #[serde(rename = "24h")]
    Day,
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Hour => "1h",
            Period::SixHours => "6h",
            Period::Day => "24h",
            Period::Week => "7d",
            Period::Month => "30d",
        }
    }

    /// Number of points a synthetic series carries for this window.
    pub fn bucket_count(&self) -> usize {
        match self {
            Period::Hour => 12,
            Period::SixHours => 24,
            Period::Day => 24,
            Period::Week => 28,
            Period::Month => 30,
        }
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1h" => Ok(Period::Hour),
            "6h" => Ok(Period::SixHours),
            "24h" => Ok(Period::Day),
            "7d" => Ok(Period::Week),
            "30d" => Ok(Period::Month),
            _ => Err(format!("Invalid period: {}", s)),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query parameters for the paginated logs listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    /// Page size, clamped to [LOG_LIMIT_MIN, LOG_LIMIT_MAX] before sending.
    pub limit: u32,
    pub offset: u32,
    pub level: LevelFilter,
    pub status: OutcomeFilter,
    pub agent_id: Option<String>,
    pub search: String,
}

impl Default for LogQuery {
    fn default() -> Self {
        Self {
            limit: 50,
            offset: 0,
            level: LevelFilter::All,
            status: OutcomeFilter::All,
            agent_id: None,
            search: String::new(),
        }
    }
}

impl LogQuery {
    /// Page size after applying the [10, 200] bound.
    pub fn clamped_limit(&self) -> u32 {
        self.limit.clamp(LOG_LIMIT_MIN, LOG_LIMIT_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filter_all_matches_everything() {
        for status in [
            AgentStatus::Active,
            AgentStatus::Idle,
            AgentStatus::Error,
            AgentStatus::Offline,
        ] {
            assert!(StatusFilter::All.matches(status));
        }
    }

    #[test]
    fn test_status_filter_specific() {
        assert!(StatusFilter::Active.matches(AgentStatus::Active));
        assert!(!StatusFilter::Active.matches(AgentStatus::Idle));
        assert!(!StatusFilter::Idle.matches(AgentStatus::Offline));
    }

    #[test]
    fn test_status_filter_from_str() {
        assert_eq!(StatusFilter::from_str("active").unwrap(), StatusFilter::Active);
        assert_eq!(StatusFilter::from_str("ALL").unwrap(), StatusFilter::All);
        assert!(StatusFilter::from_str("busy").is_err());
    }

    #[test]
    fn test_period_round_trip() {
        for period in [
            Period::Hour,
            Period::SixHours,
            Period::Day,
            Period::Week,
            Period::Month,
        ] {
            assert_eq!(Period::from_str(period.as_str()).unwrap(), period);
        }
    }

    #[test]
    fn test_period_default_is_24h() {
        assert_eq!(Period::default().as_str(), "24h");
    }

    #[test]
    fn test_log_query_limit_clamped() {
        let mut query = LogQuery::default();
        assert_eq!(query.clamped_limit(), 50);

        query.limit = 5;
        assert_eq!(query.clamped_limit(), LOG_LIMIT_MIN);

        query.limit = 1000;
        assert_eq!(query.clamped_limit(), LOG_LIMIT_MAX);
    }

    #[test]
    fn test_metric_kind_path_segments() {
        assert_eq!(MetricKind::Tokens.as_str(), "tokens");
        assert_eq!(MetricKind::Costs.as_str(), "costs");
        assert_eq!(MetricKind::Latency.as_str(), "latency");
    }

    #[test]
    fn test_trace_filter_matches() {
        assert!(TraceFilter::All.matches(TraceStatus::Active));
        assert!(TraceFilter::Completed.matches(TraceStatus::Completed));
        assert!(!TraceFilter::Error.matches(TraceStatus::Completed));
    }
}
