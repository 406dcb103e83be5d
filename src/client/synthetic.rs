//! Deterministic synthetic payloads substituted when the backend is unreachable.
//!
//! Every generator is shaped identically to the corresponding live response and
//! is fully deterministic, so tests can assert on exact contents. Filter and
//! pagination parameters are honored the same way the server honors them,
//! keeping filter semantics intact while offline.

use crate::client::query::{LogQuery, Period, StatusFilter};
use crate::client::types::*;
use chrono::{DateTime, Utc};

/// Parse a fixed RFC 3339 timestamp, falling back to "now" for malformed input.
fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|d| d.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

/// Bucket labels for a synthetic series, evenly spaced over the period.
fn bucket_labels(period: Period) -> Vec<String> {
    let count = period.bucket_count();
    (0..count)
        .map(|i| match period {
            Period::Hour => format!("{:02}:{:02}", i * 5 / 60, (i * 5) % 60),
            Period::SixHours => format!("{:02}:{:02}", i * 15 / 60, (i * 15) % 60),
            Period::Day => format!("{:02}:00", i),
            Period::Week => format!("day {} {:02}:00", i / 4 + 1, (i % 4) * 6),
            Period::Month => format!("2024-01-{:02}", i + 1),
        })
        .collect()
}

pub fn overview_stats() -> OverviewStats {
    OverviewStats {
        total_agents: 8,
        active_agents: 6,
        total_requests: 15847,
        success_rate: 98.5,
        total_tokens: 2_458_900,
        total_cost: 45.67,
        avg_latency: 245,
        active_traces: 23,
    }
}

pub fn activity(period: Period) -> ActivityResponse {
    let data = bucket_labels(period)
        .into_iter()
        .enumerate()
        .map(|(i, time)| ActivityPoint {
            time,
            requests: 50 + ((i as u64 * 37) % 150),
            tokens: 5000 + ((i as u64 * 1973) % 10000),
            cost: 0.1 + (i as f64 * 0.017) % 0.4,
        })
        .collect();
    ActivityResponse { data }
}

/// Fixed three-agent sample roster.
pub fn agent_roster() -> Vec<Agent> {
    vec![
        Agent {
            id: "agent-001".to_string(),
            name: "Research Agent".to_string(),
            agent_type: "researcher".to_string(),
            status: AgentStatus::Active,
            description: "Handles web research".to_string(),
            model: "gpt-4".to_string(),
            last_active: ts("2024-01-15T10:30:00Z"),
            total_requests: 1250,
            success_rate: 99.2,
            avg_latency: 320,
            total_tokens: 450_000,
            total_cost: 12.50,
            is_connected_to_orchestrator: true,
            current_task: Some("Analyzing trends".to_string()),
        },
        Agent {
            id: "agent-002".to_string(),
            name: "Analysis Agent".to_string(),
            agent_type: "analyzer".to_string(),
            status: AgentStatus::Active,
            description: "Data analysis".to_string(),
            model: "gpt-4".to_string(),
            last_active: ts("2024-01-15T10:25:00Z"),
            total_requests: 850,
            success_rate: 98.9,
            avg_latency: 280,
            total_tokens: 320_000,
            total_cost: 9.80,
            is_connected_to_orchestrator: true,
            current_task: Some("Processing dataset".to_string()),
        },
        Agent {
            id: "agent-003".to_string(),
            name: "Writer Agent".to_string(),
            agent_type: "writer".to_string(),
            status: AgentStatus::Idle,
            description: "Content writing".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            last_active: ts("2024-01-15T10:00:00Z"),
            total_requests: 650,
            success_rate: 97.5,
            avg_latency: 200,
            total_tokens: 250_000,
            total_cost: 5.20,
            is_connected_to_orchestrator: false,
            current_task: None,
        },
    ]
}

/// Sample roster with the server's status/search filtering applied, so the
/// offline payload obeys the same query semantics as a live one.
pub fn agents(status: StatusFilter, search: &str) -> AgentsResponse {
    let needle = search.to_lowercase();
    let agents: Vec<Agent> = agent_roster()
        .into_iter()
        .filter(|a| status.matches(a.status))
        .filter(|a| needle.is_empty() || a.name.to_lowercase().contains(&needle))
        .collect();
    let active = agents
        .iter()
        .filter(|a| a.status == AgentStatus::Active)
        .count();
    AgentsResponse {
        total: agents.len(),
        active,
        agents,
    }
}

pub fn agent_detail(agent_id: &str) -> AgentDetail {
    AgentDetail {
        id: agent_id.to_string(),
        name: "Research Agent".to_string(),
        agent_type: "researcher".to_string(),
        status: AgentStatus::Active,
        description: "Handles web research and data gathering".to_string(),
        model: "gpt-4".to_string(),
        last_active: ts("2024-01-15T10:30:00Z"),
        created_at: ts("2024-01-01T00:00:00Z"),
        metrics: AgentMetricsBlock {
            total_requests: 1250,
            success_rate: 99.2,
            avg_latency: 320,
            total_tokens: 450_000,
            input_tokens: 200_000,
            output_tokens: 250_000,
            total_cost: 12.50,
            error_count: 10,
        },
        recent_activity: (0..24)
            .map(|i| AgentActivityPoint {
                time: format!("{:02}:00", i),
                requests: 45,
                tokens: 5600,
            })
            .collect(),
    }
}

const LOG_MESSAGES: [&str; 5] = [
    "Task execution completed",
    "Delegating subtask to worker",
    "Retrieved context from memory store",
    "Rate limit approaching for model endpoint",
    "Tool call returned partial result",
];

const LOG_LEVELS: [LogLevel; 4] = [
    LogLevel::Info,
    LogLevel::Info,
    LogLevel::Warning,
    LogLevel::Error,
];

const LOG_STATUSES: [LogStatus; 3] = [LogStatus::Success, LogStatus::Success, LogStatus::Error];

fn log_entry(i: u64) -> LogEntry {
    let agent_idx = (i % 3) + 1;
    LogEntry {
        id: format!("log-{:03}", i),
        timestamp: ts(&format!(
            "2024-01-15T{:02}:{:02}:00Z",
            i % 24,
            (i * 7) % 60
        )),
        level: LOG_LEVELS[(i % 4) as usize],
        message: LOG_MESSAGES[(i % 5) as usize].to_string(),
        agent_id: format!("agent-{:03}", agent_idx),
        agent_name: ["Research", "Analysis", "Writer"][(i % 3) as usize].to_string(),
        trace_id: format!("trace-{:03}", (i % 20) + 1),
        input_tokens: 50 + (i * 13) % 450,
        output_tokens: 100 + (i * 29) % 900,
        total_tokens: 200 + (i * 41) % 1300,
        latency: 100 + (i * 97) % 4900,
        cost: 0.001 + (i as f64 * 0.0023) % 0.099,
        status: LOG_STATUSES[(i % 3) as usize],
        input: None,
        output: None,
        metadata: std::collections::HashMap::from([(
            "taskType".to_string(),
            serde_json::Value::String("research".to_string()),
        )]),
    }
}

/// 50-entry deterministic log set, filtered and paginated per the query.
pub fn logs(query: &LogQuery) -> LogsResponse {
    let needle = query.search.to_lowercase();
    let filtered: Vec<LogEntry> = (0..50u64)
        .map(log_entry)
        .filter(|l| query.level.matches(l.level))
        .filter(|l| query.status.matches(l.status))
        .filter(|l| {
            query
                .agent_id
                .as_deref()
                .map(|id| l.agent_id == id)
                .unwrap_or(true)
        })
        .filter(|l| needle.is_empty() || l.message.to_lowercase().contains(&needle))
        .collect();

    let total = 15847;
    let logs: Vec<LogEntry> = filtered
        .into_iter()
        .take(query.clamped_limit() as usize)
        .collect();
    let has_more = u64::from(query.offset) + (logs.len() as u64) < total;
    LogsResponse {
        has_more,
        total,
        logs,
    }
}

pub fn log_detail(log_id: &str) -> LogEntry {
    let mut entry = log_entry(7);
    entry.id = log_id.to_string();
    entry.input = Some("Summarize the latest market research findings for the quarterly report, focusing on competitor pricing movement.".to_string());
    entry.output = Some("The research indicates three significant pricing shifts this quarter. Competitor A reduced entry-tier pricing by 12%...".to_string());
    entry
}

fn trace(i: u64) -> Trace {
    Trace {
        id: format!("trace-{:03}", i),
        name: format!("User Query Session {}", i),
        start_time: ts(&format!(
            "2024-01-15T{:02}:{:02}:00Z",
            i % 24,
            (i * 11) % 60
        )),
        duration: 1000 + (i * 14767) % 299_000,
        status: if i % 5 == 4 {
            TraceStatus::Error
        } else {
            TraceStatus::Completed
        },
        total_spans: 1 + ((i * 3) % 10) as u32,
        total_tokens: 500 + (i * 311) % 4500,
        total_cost: 0.01 + (i as f64 * 0.013) % 0.49,
        agents: if i % 2 == 0 {
            vec!["agent-001".to_string(), "agent-002".to_string()]
        } else {
            vec!["agent-003".to_string()]
        },
        metadata: std::collections::HashMap::new(),
    }
}

/// 20-entry deterministic trace page with the sample fleet's backlog total.
pub fn traces(limit: u32, offset: u32) -> TracesResponse {
    let total = 500;
    let traces: Vec<Trace> = (0..20u64).map(trace).take(limit as usize).collect();
    let has_more = u64::from(offset) + (traces.len() as u64) < total;
    TracesResponse {
        has_more,
        total,
        traces,
    }
}

pub fn trace_detail(trace_id: &str) -> Trace {
    let mut t = trace(3);
    t.id = trace_id.to_string();
    t.metadata.insert(
        "entryPoint".to_string(),
        serde_json::Value::String("user-query".to_string()),
    );
    t
}

pub fn token_metrics(period: Period) -> TokenMetricsResponse {
    let data: Vec<TokenPoint> = bucket_labels(period)
        .into_iter()
        .enumerate()
        .map(|(i, time)| {
            let input = 5000 + ((i as u64 * 4391) % 45000);
            let output = 10000 + ((i as u64 * 7457) % 70000);
            TokenPoint {
                time,
                input_tokens: input,
                output_tokens: output,
                total_tokens: input + output,
            }
        })
        .collect();

    let totals = TokenTotals {
        input_tokens: data.iter().map(|p| p.input_tokens).sum(),
        output_tokens: data.iter().map(|p| p.output_tokens).sum(),
        total_tokens: data.iter().map(|p| p.total_tokens).sum(),
    };
    TokenMetricsResponse {
        data,
        totals: Some(totals),
    }
}

pub fn cost_metrics(period: Period) -> CostMetricsResponse {
    let data: Vec<CostPoint> = bucket_labels(period)
        .into_iter()
        .enumerate()
        .map(|(i, time)| CostPoint {
            time,
            cost: 0.5 + (i as f64 * 0.37) % 4.5,
            requests: 50 + ((i as u64 * 83) % 450),
        })
        .collect();

    let totals = CostTotals {
        cost: data.iter().map(|p| p.cost).sum(),
        requests: data.iter().map(|p| p.requests).sum(),
    };
    CostMetricsResponse {
        data,
        totals: Some(totals),
    }
}

pub fn latency_metrics(period: Period) -> LatencyMetricsResponse {
    let data: Vec<LatencyPoint> = bucket_labels(period)
        .into_iter()
        .enumerate()
        .map(|(i, time)| LatencyPoint {
            time,
            avg: 200 + ((i as u64 * 31) % 200),
            p50: 150 + ((i as u64 * 23) % 150),
            p95: 400 + ((i as u64 * 61) % 400),
            p99: 800 + ((i as u64 * 113) % 700),
        })
        .collect();

    let summary = LatencySummary {
        avg: data.iter().map(|p| p.avg).sum::<u64>() / data.len().max(1) as u64,
        p50: data.iter().map(|p| p.p50).max().unwrap_or(0),
        p95: data.iter().map(|p| p.p95).max().unwrap_or(0),
        p99: data.iter().map(|p| p.p99).max().unwrap_or(0),
        max: data.iter().map(|p| p.p99).max().unwrap_or(0),
    };
    LatencyMetricsResponse {
        data,
        summary: Some(summary),
    }
}

pub fn orchestrator_status() -> OrchestratorStatus {
    OrchestratorStatus {
        status: OrchestratorState::Active,
        uptime: 86_400_000,
        connected_agents: vec!["agent-001".to_string(), "agent-002".to_string()],
        pending_tasks: 3,
        active_tasks: 2,
        completed_tasks: 1547,
        queue_length: 5,
    }
}

/// Health fallback reports the backend as unreachable rather than pretending
/// it is fine.
pub fn health() -> HealthReport {
    HealthReport {
        status: HealthState::Unhealthy,
        version: "unknown".to_string(),
    }
}
