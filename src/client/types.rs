//! Wire types exchanged with the monitoring backend.
//!
//! All records are plain serde structs in the backend's camelCase JSON
//! convention. The dashboard never mutates them beyond request-scoped
//! transformation; the backend is the source of truth.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lifecycle status of a monitored agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Active,
    Idle,
    Error,
    Offline,
}

impl AgentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Active => "active",
            AgentStatus::Idle => "idle",
            AgentStatus::Error => "error",
            AgentStatus::Offline => "offline",
        }
    }
}

/// A monitored autonomous worker unit with performance and cost telemetry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub agent_type: String,
    pub status: AgentStatus,
    #[serde(default)]
    pub description: String,
    pub model: String,
    pub last_active: DateTime<Utc>,
    pub total_requests: u64,
    /// Success percentage in [0, 100].
    pub success_rate: f64,
    /// Average request latency in milliseconds.
    pub avg_latency: u64,
    pub total_tokens: u64,
    pub total_cost: f64,
    pub is_connected_to_orchestrator: bool,
    #[serde(default)]
    pub current_task: Option<String>,
}

/// Roster response for GET /api/v1/agents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentsResponse {
    pub agents: Vec<Agent>,
    pub total: usize,
    /// Count of agents currently in the active state.
    pub active: usize,
}

/// Per-agent telemetry block in the agent detail response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgentMetricsBlock {
    pub total_requests: u64,
    pub success_rate: f64,
    pub avg_latency: u64,
    pub total_tokens: u64,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub total_cost: f64,
    pub error_count: u64,
}

/// Hourly activity point in the agent detail response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgentActivityPoint {
    pub time: String,
    pub requests: u64,
    pub tokens: u64,
}

/// Detailed agent view for GET /api/v1/agents/{id}.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDetail {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub agent_type: String,
    pub status: AgentStatus,
    #[serde(default)]
    pub description: String,
    pub model: String,
    pub last_active: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub metrics: AgentMetricsBlock,
    #[serde(default)]
    pub recent_activity: Vec<AgentActivityPoint>,
}

/// Severity of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warning,
    Error,
    Debug,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
            LogLevel::Debug => "debug",
        }
    }
}

/// Outcome recorded on a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    Success,
    Error,
    Pending,
}

impl LogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogStatus::Success => "success",
            LogStatus::Error => "error",
            LogStatus::Pending => "pending",
        }
    }
}

/// One execution log entry emitted by an agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    pub agent_id: String,
    #[serde(default)]
    pub agent_name: String,
    #[serde(default)]
    pub trace_id: String,
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
    #[serde(default)]
    pub total_tokens: u64,
    /// Request latency in milliseconds.
    #[serde(default)]
    pub latency: u64,
    #[serde(default)]
    pub cost: f64,
    pub status: LogStatus,
    /// Free-text request payload, present only on the detail endpoint.
    #[serde(default)]
    pub input: Option<String>,
    /// Free-text response payload, present only on the detail endpoint.
    #[serde(default)]
    pub output: Option<String>,
    /// Open key-value map of backend-specific annotations.
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

/// Paginated response for GET /api/v1/logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsResponse {
    pub logs: Vec<LogEntry>,
    pub total: u64,
    pub has_more: bool,
}

/// Completion state of a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceStatus {
    Completed,
    Error,
    Active,
}

impl TraceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TraceStatus::Completed => "completed",
            TraceStatus::Error => "error",
            TraceStatus::Active => "active",
        }
    }
}

/// One end-to-end execution session, possibly spanning multiple agents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trace {
    pub id: String,
    pub name: String,
    pub start_time: DateTime<Utc>,
    /// Total duration in milliseconds.
    pub duration: u64,
    pub status: TraceStatus,
    pub total_spans: u32,
    pub total_tokens: u64,
    pub total_cost: f64,
    /// Ids of the agents that participated in this trace.
    #[serde(default)]
    pub agents: Vec<String>,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

/// Paginated response for GET /api/v1/traces.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TracesResponse {
    pub traces: Vec<Trace>,
    pub total: u64,
    pub has_more: bool,
}

/// Headline statistics for GET /api/v1/overview/stats.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverviewStats {
    pub total_agents: u64,
    pub active_agents: u64,
    pub total_requests: u64,
    pub success_rate: f64,
    pub total_tokens: u64,
    pub total_cost: f64,
    pub avg_latency: u64,
    pub active_traces: u64,
}

/// One point of the overview activity chart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityPoint {
    pub time: String,
    pub requests: u64,
    pub tokens: u64,
    pub cost: f64,
}

/// Response for GET /api/v1/overview/activity. Points are time-ascending.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityResponse {
    #[serde(default)]
    pub data: Vec<ActivityPoint>,
}

/// One point of the token-usage series.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenPoint {
    pub time: String,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub total_tokens: u64,
}

/// Aggregate token totals for a metrics period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenTotals {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub total_tokens: u64,
}

/// Response for GET /api/v1/metrics/tokens.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenMetricsResponse {
    #[serde(default)]
    pub data: Vec<TokenPoint>,
    /// Server-side totals; absent when the backend leaves aggregation to us.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub totals: Option<TokenTotals>,
}

/// One point of the cost series.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CostPoint {
    pub time: String,
    pub cost: f64,
    pub requests: u64,
}

/// Aggregate cost totals for a metrics period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CostTotals {
    pub cost: f64,
    pub requests: u64,
}

/// Response for GET /api/v1/metrics/costs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CostMetricsResponse {
    #[serde(default)]
    pub data: Vec<CostPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub totals: Option<CostTotals>,
}

/// One point of the latency-percentile series (all values in milliseconds).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LatencyPoint {
    pub time: String,
    pub avg: u64,
    pub p50: u64,
    pub p95: u64,
    pub p99: u64,
}

/// Aggregate latency summary for a metrics period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LatencySummary {
    pub avg: u64,
    pub p50: u64,
    pub p95: u64,
    pub p99: u64,
    pub max: u64,
}

/// Response for GET /api/v1/metrics/latency.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LatencyMetricsResponse {
    #[serde(default)]
    pub data: Vec<LatencyPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<LatencySummary>,
}

/// Run state reported by the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrchestratorState {
    Active,
    Degraded,
    Offline,
    #[serde(other)]
    Unknown,
}

/// Singleton snapshot for GET /api/v1/orchestrator/status. No history is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrchestratorStatus {
    pub status: OrchestratorState,
    /// Uptime in milliseconds.
    pub uptime: u64,
    #[serde(default)]
    pub connected_agents: Vec<String>,
    pub pending_tasks: u64,
    pub active_tasks: u64,
    pub completed_tasks: u64,
    pub queue_length: u64,
}

/// Overall backend health state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
    Degraded,
    Unhealthy,
    #[serde(other)]
    Unknown,
}

/// Response for GET /api/v1/health.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: HealthState,
    #[serde(default)]
    pub version: String,
}
