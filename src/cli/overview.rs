//! Overview command implementation

use crate::cli::output;
use crate::cli::OverviewArgs;
use crate::client::{ApiClient, LogQuery, StatusFilter};
use crate::views::agents::active_count;
use crate::views::overview::{recent_logs, stat_cards, top_agents};
use crate::views::ViewState;
use anyhow::Result;
use serde_json::json;

/// Handle `overview`.
///
/// Combines the four fetches the overview page is built from. Each fetch
/// applies its own fallback, so a partially reachable backend yields a mixed
/// page rather than a failed one.
pub async fn handle_overview(args: &OverviewArgs, client: &ApiClient) -> Result<String> {
    let mut state = ViewState::new();
    state.period = args.period;

    let stats = client.fetch_overview_stats().await?;
    let activity = client.fetch_overview_activity(state.period).await?;
    let agents = client.fetch_agents(StatusFilter::All, "").await?;
    let logs = client
        .fetch_logs(&LogQuery {
            limit: 10,
            ..Default::default()
        })
        .await?;

    if args.common.json {
        return Ok(serde_json::to_string_pretty(&json!({
            "stats": stats,
            "activity": activity,
            "agents": agents,
            "recentLogs": logs,
        }))?);
    }

    let cards = stat_cards(&stats.data);
    let agent_refs: Vec<&crate::client::Agent> = top_agents(&agents.data.agents).iter().collect();
    let recent = recent_logs(&logs.data.logs);

    let origins = [&stats.origin, &activity.origin, &agents.origin, &logs.origin];
    let mut sections = Vec::new();
    if let Some(notice) = origins.iter().find_map(|o| output::synthetic_notice(o)) {
        sections.push(notice);
    }
    sections.push(output::format_stat_cards(&cards));
    sections.push(format!(
        "Activity ({}):\n{}",
        state.period,
        output::format_activity_table(&activity.data.data)
    ));
    sections.push(format!(
        "Agents:\n{}\n{} of {} active",
        output::format_agents_table(&agent_refs),
        active_count(&agents.data.agents),
        agents.data.agents.len()
    ));
    sections.push(format!(
        "Recent logs:\n{}",
        output::format_logs_table(recent, logs.data.total, false)
    ));

    Ok(sections.join("\n\n"))
}
