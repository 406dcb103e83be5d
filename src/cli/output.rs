//! Output formatting helpers for CLI commands

use crate::client::types::{
    ActivityPoint, Agent, AgentDetail, AgentStatus, CostMetricsResponse, CostTotals, HealthReport,
    HealthState, LatencyMetricsResponse, LatencySummary, LogEntry, LogLevel, LogStatus,
    OrchestratorState, OrchestratorStatus, TokenMetricsResponse, TokenTotals, Trace, TraceStatus,
};
use crate::client::{DataOrigin, Fetched};
use crate::views::logs::preview;
use crate::views::overview::StatCard;
use crate::views::traces::duration_display;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde::Serialize;

/// Notice printed above command output when the payload is synthetic.
pub fn synthetic_notice(origin: &DataOrigin) -> Option<String> {
    match origin {
        DataOrigin::Live => None,
        DataOrigin::Synthetic { reason } => Some(
            format!("⚠ Backend unavailable, showing sample data ({})", reason)
                .yellow()
                .to_string(),
        ),
    }
}

/// Format any fetched payload as pretty JSON, origin tag included.
pub fn format_json<T: Serialize>(fetched: &Fetched<T>) -> String {
    serde_json::to_string_pretty(fetched).unwrap()
}

fn agent_status_cell(status: AgentStatus) -> String {
    match status {
        AgentStatus::Active => "active".green().to_string(),
        AgentStatus::Idle => "idle".yellow().to_string(),
        AgentStatus::Error => "error".red().to_string(),
        AgentStatus::Offline => "offline".dimmed().to_string(),
    }
}

fn log_level_cell(level: LogLevel) -> String {
    match level {
        LogLevel::Info => "info".green().to_string(),
        LogLevel::Warning => "warning".yellow().to_string(),
        LogLevel::Error => "error".red().to_string(),
        LogLevel::Debug => "debug".dimmed().to_string(),
    }
}

fn log_status_cell(status: LogStatus) -> String {
    match status {
        LogStatus::Success => "success".green().to_string(),
        LogStatus::Error => "error".red().to_string(),
        LogStatus::Pending => "pending".yellow().to_string(),
    }
}

fn trace_status_cell(status: TraceStatus) -> String {
    match status {
        TraceStatus::Completed => "completed".green().to_string(),
        TraceStatus::Error => "error".red().to_string(),
        TraceStatus::Active => "active".cyan().to_string(),
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Format the agent roster as a table.
pub fn format_agents_table(agents: &[&Agent]) -> String {
    let mut table = new_table();
    table.set_header(vec![
        "ID", "Name", "Type", "Status", "Model", "Requests", "Success", "Latency", "Cost",
    ]);

    for a in agents {
        table.add_row(vec![
            Cell::new(&a.id),
            Cell::new(&a.name),
            Cell::new(&a.agent_type),
            Cell::new(agent_status_cell(a.status)),
            Cell::new(&a.model),
            Cell::new(a.total_requests),
            Cell::new(format!("{:.1}%", a.success_rate)),
            Cell::new(format!("{}ms", a.avg_latency)),
            Cell::new(format!("${:.2}", a.total_cost)),
        ]);
    }

    table.to_string()
}

/// Format one agent's detail view, metrics block and recent activity included.
pub fn format_agent_detail(detail: &AgentDetail) -> String {
    let mut table = new_table();
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec![Cell::new("ID"), Cell::new(&detail.id)]);
    table.add_row(vec![Cell::new("Name"), Cell::new(&detail.name)]);
    table.add_row(vec![Cell::new("Type"), Cell::new(&detail.agent_type)]);
    table.add_row(vec![
        Cell::new("Status"),
        Cell::new(agent_status_cell(detail.status)),
    ]);
    table.add_row(vec![Cell::new("Model"), Cell::new(&detail.model)]);
    table.add_row(vec![
        Cell::new("Description"),
        Cell::new(&detail.description),
    ]);
    table.add_row(vec![
        Cell::new("Last active"),
        Cell::new(detail.last_active.to_rfc3339()),
    ]);
    table.add_row(vec![
        Cell::new("Created"),
        Cell::new(detail.created_at.to_rfc3339()),
    ]);
    table.add_row(vec![
        Cell::new("Requests"),
        Cell::new(detail.metrics.total_requests),
    ]);
    table.add_row(vec![
        Cell::new("Success rate"),
        Cell::new(format!("{:.1}%", detail.metrics.success_rate)),
    ]);
    table.add_row(vec![
        Cell::new("Avg latency"),
        Cell::new(format!("{}ms", detail.metrics.avg_latency)),
    ]);
    table.add_row(vec![
        Cell::new("Tokens (in/out)"),
        Cell::new(format!(
            "{} / {}",
            detail.metrics.input_tokens, detail.metrics.output_tokens
        )),
    ]);
    table.add_row(vec![
        Cell::new("Total cost"),
        Cell::new(format!("${:.2}", detail.metrics.total_cost)),
    ]);
    table.add_row(vec![
        Cell::new("Errors"),
        Cell::new(detail.metrics.error_count),
    ]);

    if detail.recent_activity.is_empty() {
        return table.to_string();
    }

    let mut activity = new_table();
    activity.set_header(vec!["Time", "Requests", "Tokens"]);
    for p in &detail.recent_activity {
        activity.add_row(vec![
            Cell::new(&p.time),
            Cell::new(p.requests),
            Cell::new(p.tokens),
        ]);
    }

    format!("{}\n\nRecent activity:\n{}", table, activity)
}

/// Format a page of log entries as a table, with a pagination footer.
pub fn format_logs_table(logs: &[LogEntry], total: u64, has_more: bool) -> String {
    let mut table = new_table();
    table.set_header(vec![
        "ID", "Time", "Level", "Agent", "Message", "Tokens", "Latency", "Status",
    ]);

    for log in logs {
        table.add_row(vec![
            Cell::new(&log.id),
            Cell::new(log.timestamp.format("%H:%M:%S").to_string()),
            Cell::new(log_level_cell(log.level)),
            Cell::new(&log.agent_name),
            Cell::new(&log.message),
            Cell::new(log.total_tokens),
            Cell::new(format!("{}ms", log.latency)),
            Cell::new(log_status_cell(log.status)),
        ]);
    }

    let footer = if has_more {
        format!("Showing {} of {} entries (more available)", logs.len(), total)
    } else {
        format!("Showing {} of {} entries", logs.len(), total)
    };
    format!("{}\n{}", table, footer)
}

/// Format one log entry with bounded payload previews.
pub fn format_log_detail(log: &LogEntry) -> String {
    let mut table = new_table();
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec![Cell::new("ID"), Cell::new(&log.id)]);
    table.add_row(vec![
        Cell::new("Timestamp"),
        Cell::new(log.timestamp.to_rfc3339()),
    ]);
    table.add_row(vec![Cell::new("Level"), Cell::new(log_level_cell(log.level))]);
    table.add_row(vec![Cell::new("Agent"), Cell::new(&log.agent_name)]);
    table.add_row(vec![Cell::new("Trace"), Cell::new(&log.trace_id)]);
    table.add_row(vec![Cell::new("Message"), Cell::new(&log.message)]);
    table.add_row(vec![
        Cell::new("Tokens (in/out)"),
        Cell::new(format!("{} / {}", log.input_tokens, log.output_tokens)),
    ]);
    table.add_row(vec![
        Cell::new("Latency"),
        Cell::new(format!("{}ms", log.latency)),
    ]);
    table.add_row(vec![Cell::new("Cost"), Cell::new(format!("${:.4}", log.cost))]);
    table.add_row(vec![
        Cell::new("Status"),
        Cell::new(log_status_cell(log.status)),
    ]);
    table.add_row(vec![
        Cell::new("Input"),
        Cell::new(preview(log.input.as_deref())),
    ]);
    table.add_row(vec![
        Cell::new("Output"),
        Cell::new(preview(log.output.as_deref())),
    ]);

    table.to_string()
}

/// Format a page of traces as a table.
pub fn format_traces_table(traces: &[&Trace], total: u64, has_more: bool) -> String {
    let mut table = new_table();
    table.set_header(vec![
        "ID", "Name", "Start", "Duration", "Status", "Spans", "Tokens", "Cost", "Agents",
    ]);

    for t in traces {
        table.add_row(vec![
            Cell::new(&t.id),
            Cell::new(&t.name),
            Cell::new(t.start_time.format("%Y-%m-%d %H:%M:%S").to_string()),
            Cell::new(duration_display(t.duration)),
            Cell::new(trace_status_cell(t.status)),
            Cell::new(t.total_spans),
            Cell::new(t.total_tokens),
            Cell::new(format!("${:.2}", t.total_cost)),
            Cell::new(t.agents.join(", ")),
        ]);
    }

    let footer = if has_more {
        format!("Showing {} of {} traces (more available)", traces.len(), total)
    } else {
        format!("Showing {} of {} traces", traces.len(), total)
    };
    format!("{}\n{}", table, footer)
}

/// Format one trace's detail view.
pub fn format_trace_detail(trace: &Trace) -> String {
    let mut table = new_table();
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec![Cell::new("ID"), Cell::new(&trace.id)]);
    table.add_row(vec![Cell::new("Name"), Cell::new(&trace.name)]);
    table.add_row(vec![
        Cell::new("Start"),
        Cell::new(trace.start_time.to_rfc3339()),
    ]);
    table.add_row(vec![
        Cell::new("Duration"),
        Cell::new(duration_display(trace.duration)),
    ]);
    table.add_row(vec![
        Cell::new("Status"),
        Cell::new(trace_status_cell(trace.status)),
    ]);
    table.add_row(vec![Cell::new("Spans"), Cell::new(trace.total_spans)]);
    table.add_row(vec![Cell::new("Tokens"), Cell::new(trace.total_tokens)]);
    table.add_row(vec![
        Cell::new("Cost"),
        Cell::new(format!("${:.2}", trace.total_cost)),
    ]);
    table.add_row(vec![Cell::new("Agents"), Cell::new(trace.agents.join(", "))]);

    table.to_string()
}

/// Format the overview headline cards.
pub fn format_stat_cards(cards: &[StatCard]) -> String {
    let mut table = new_table();
    table.set_header(vec!["Stat", "Value", ""]);
    for card in cards {
        table.add_row(vec![
            Cell::new(&card.label),
            Cell::new(&card.value),
            Cell::new(&card.subtext),
        ]);
    }
    table.to_string()
}

/// Format the overview activity series.
pub fn format_activity_table(points: &[ActivityPoint]) -> String {
    let mut table = new_table();
    table.set_header(vec!["Time", "Requests", "Tokens", "Cost"]);
    for p in points {
        table.add_row(vec![
            Cell::new(&p.time),
            Cell::new(p.requests),
            Cell::new(p.tokens),
            Cell::new(format!("${:.2}", p.cost)),
        ]);
    }
    table.to_string()
}

/// Format the token series with its summary totals.
pub fn format_token_metrics(resp: &TokenMetricsResponse, totals: &TokenTotals) -> String {
    let mut table = new_table();
    table.set_header(vec!["Time", "Input", "Output", "Total"]);
    for p in &resp.data {
        table.add_row(vec![
            Cell::new(&p.time),
            Cell::new(p.input_tokens),
            Cell::new(p.output_tokens),
            Cell::new(p.total_tokens),
        ]);
    }
    format!(
        "{}\nTotals: {} in / {} out / {} total",
        table, totals.input_tokens, totals.output_tokens, totals.total_tokens
    )
}

/// Format the cost series with its summary totals.
pub fn format_cost_metrics(resp: &CostMetricsResponse, totals: &CostTotals) -> String {
    let mut table = new_table();
    table.set_header(vec!["Time", "Cost", "Requests"]);
    for p in &resp.data {
        table.add_row(vec![
            Cell::new(&p.time),
            Cell::new(format!("${:.2}", p.cost)),
            Cell::new(p.requests),
        ]);
    }
    format!(
        "{}\nTotals: ${:.2} over {} requests",
        table, totals.cost, totals.requests
    )
}

/// Format the latency percentile series with its summary.
pub fn format_latency_metrics(resp: &LatencyMetricsResponse, summary: &LatencySummary) -> String {
    let mut table = new_table();
    table.set_header(vec!["Time", "Avg", "p50", "p95", "p99"]);
    for p in &resp.data {
        table.add_row(vec![
            Cell::new(&p.time),
            Cell::new(format!("{}ms", p.avg)),
            Cell::new(format!("{}ms", p.p50)),
            Cell::new(format!("{}ms", p.p95)),
            Cell::new(format!("{}ms", p.p99)),
        ]);
    }
    format!(
        "{}\nSummary: avg {}ms, p50 {}ms, p95 {}ms, p99 {}ms, max {}ms",
        table, summary.avg, summary.p50, summary.p95, summary.p99, summary.max
    )
}

/// Render an uptime given in milliseconds in a human-readable way.
pub fn format_uptime(uptime_ms: u64) -> String {
    let seconds = uptime_ms / 1000;
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

/// Format the orchestrator and backend health snapshot.
pub fn format_status(orchestrator: &OrchestratorStatus, health: &HealthReport) -> String {
    let orch_state = match orchestrator.status {
        OrchestratorState::Active => "active".green().to_string(),
        OrchestratorState::Degraded => "degraded".yellow().to_string(),
        OrchestratorState::Offline => "offline".red().to_string(),
        OrchestratorState::Unknown => "unknown".dimmed().to_string(),
    };
    let health_state = match health.status {
        HealthState::Healthy => "healthy".green().to_string(),
        HealthState::Degraded => "degraded".yellow().to_string(),
        HealthState::Unhealthy => "unhealthy".red().to_string(),
        HealthState::Unknown => "unknown".dimmed().to_string(),
    };

    let mut table = new_table();
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec![Cell::new("Orchestrator"), Cell::new(orch_state)]);
    table.add_row(vec![
        Cell::new("Uptime"),
        Cell::new(format_uptime(orchestrator.uptime)),
    ]);
    table.add_row(vec![
        Cell::new("Connected agents"),
        Cell::new(orchestrator.connected_agents.len()),
    ]);
    table.add_row(vec![
        Cell::new("Tasks (pending/active/done)"),
        Cell::new(format!(
            "{} / {} / {}",
            orchestrator.pending_tasks, orchestrator.active_tasks, orchestrator.completed_tasks
        )),
    ]);
    table.add_row(vec![
        Cell::new("Queue length"),
        Cell::new(orchestrator.queue_length),
    ]);
    table.add_row(vec![Cell::new("Backend health"), Cell::new(health_state)]);
    table.add_row(vec![Cell::new("Backend version"), Cell::new(&health.version)]);

    table.to_string()
}
