//! Status command implementation

use crate::cli::output;
use crate::cli::StatusArgs;
use crate::client::ApiClient;
use anyhow::Result;
use serde_json::json;

/// Handle `status`: orchestrator snapshot plus backend health in one view.
pub async fn handle_status(args: &StatusArgs, client: &ApiClient) -> Result<String> {
    let orchestrator = client.fetch_orchestrator_status().await?;
    let health = client.fetch_health().await?;

    if args.common.json {
        return Ok(serde_json::to_string_pretty(&json!({
            "orchestrator": orchestrator,
            "health": health,
        }))?);
    }

    let table = output::format_status(&orchestrator.data, &health.data);
    Ok(
        match output::synthetic_notice(&orchestrator.origin)
            .or_else(|| output::synthetic_notice(&health.origin))
        {
            Some(notice) => format!("{}\n{}", notice, table),
            None => table,
        },
    )
}
