//! Overview page shaping: headline stat cards plus short agent and log lists.

use crate::client::types::{Agent, LogEntry, OverviewStats};
use serde::Serialize;

/// Number of agents/logs shown on the overview page.
pub const OVERVIEW_LIST_LEN: usize = 6;

/// One headline statistic, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub label: String,
    pub value: String,
    pub subtext: String,
}

/// The four headline cards of the overview page.
pub fn stat_cards(stats: &OverviewStats) -> Vec<StatCard> {
    vec![
        StatCard {
            label: "Active Agents".to_string(),
            value: stats.active_agents.to_string(),
            subtext: format!("of {}", stats.total_agents),
        },
        StatCard {
            label: "Success Rate".to_string(),
            value: format!("{:.1}%", stats.success_rate),
            subtext: format!("{} requests", stats.total_requests),
        },
        StatCard {
            label: "Avg Latency".to_string(),
            value: format!("{}ms", stats.avg_latency),
            subtext: format!("{} active traces", stats.active_traces),
        },
        StatCard {
            label: "Total Cost".to_string(),
            value: format!("${:.2}", stats.total_cost),
            subtext: format!("{} tokens", stats.total_tokens),
        },
    ]
}

/// Leading slice of the roster for the overview agent list.
pub fn top_agents(agents: &[Agent]) -> &[Agent] {
    &agents[..agents.len().min(OVERVIEW_LIST_LEN)]
}

/// Leading slice of the log page for the overview recent-logs list.
pub fn recent_logs(logs: &[LogEntry]) -> &[LogEntry] {
    &logs[..logs.len().min(OVERVIEW_LIST_LEN)]
}
