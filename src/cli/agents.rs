//! Agents command implementation

use crate::cli::output;
use crate::cli::{AgentsListArgs, AgentsShowArgs};
use crate::client::ApiClient;
use crate::views::agents::filter_agents;
use crate::views::ViewState;
use anyhow::Result;

/// Handle `agents list`.
///
/// Status and search go to the server; the same filter is re-applied locally
/// so a page rendered from fallback data obeys identical semantics.
pub async fn handle_agents_list(args: &AgentsListArgs, client: &ApiClient) -> Result<String> {
    let mut state = ViewState::new();
    state.agent_status = args.status;
    state.agent_search = args.search.clone();

    let fetched = client
        .fetch_agents(state.agent_status, &state.agent_search)
        .await?;

    if args.common.json {
        return Ok(output::format_json(&fetched));
    }

    let visible = filter_agents(&fetched.data.agents, state.agent_status, &state.agent_search);
    let table = output::format_agents_table(&visible);
    let summary = format!(
        "{} of {} agents active",
        fetched.data.active, fetched.data.total
    );

    Ok(match output::synthetic_notice(&fetched.origin) {
        Some(notice) => format!("{}\n{}\n{}", notice, table, summary),
        None => format!("{}\n{}", table, summary),
    })
}

/// Handle `agents show <id>`.
pub async fn handle_agents_show(args: &AgentsShowArgs, client: &ApiClient) -> Result<String> {
    let mut state = ViewState::new();
    state.select_agent(&args.id);

    let id = state.selected_agent.as_deref().unwrap_or(&args.id);
    let fetched = client.fetch_agent_detail(id).await?;

    if args.common.json {
        return Ok(output::format_json(&fetched));
    }

    let detail = output::format_agent_detail(&fetched.data);
    Ok(match output::synthetic_notice(&fetched.origin) {
        Some(notice) => format!("{}\n{}", notice, detail),
        None => detail,
    })
}
