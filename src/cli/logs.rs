//! Logs command implementation

use crate::cli::output;
use crate::cli::{LogsListArgs, LogsShowArgs};
use crate::client::{ApiClient, LogQuery};
use crate::views::ViewState;
use anyhow::Result;

/// Handle `logs list`.
pub async fn handle_logs_list(args: &LogsListArgs, client: &ApiClient) -> Result<String> {
    let mut state = ViewState::new();
    state.log_query = LogQuery {
        limit: args.limit,
        offset: args.offset,
        level: args.level,
        status: args.status,
        agent_id: args.agent.clone(),
        search: args.search.clone(),
    };

    let fetched = client.fetch_logs(&state.log_query).await?;

    if args.common.json {
        return Ok(output::format_json(&fetched));
    }

    let table = output::format_logs_table(&fetched.data.logs, fetched.data.total, fetched.data.has_more);
    Ok(match output::synthetic_notice(&fetched.origin) {
        Some(notice) => format!("{}\n{}", notice, table),
        None => table,
    })
}

/// Handle `logs show <id>`.
pub async fn handle_logs_show(args: &LogsShowArgs, client: &ApiClient) -> Result<String> {
    let mut state = ViewState::new();
    state.select_log(&args.id);

    let id = state.selected_log.as_deref().unwrap_or(&args.id);
    let fetched = client.fetch_log_detail(id).await?;

    if args.common.json {
        return Ok(output::format_json(&fetched));
    }

    let detail = output::format_log_detail(&fetched.data);
    Ok(match output::synthetic_notice(&fetched.origin) {
        Some(notice) => format!("{}\n{}", notice, detail),
        None => detail,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CommonArgs;
    use crate::client::{LevelFilter, OutcomeFilter};
    use std::path::PathBuf;

    fn common(json: bool) -> CommonArgs {
        CommonArgs {
            config: PathBuf::from("agentmon.toml"),
            api_url: None,
            no_fallback: false,
            json,
        }
    }

    fn offline_client() -> ApiClient {
        ApiClient::with_base_url("http://127.0.0.1:9")
    }

    fn list_args(limit: u32, level: LevelFilter, json: bool) -> LogsListArgs {
        LogsListArgs {
            limit,
            offset: 0,
            level,
            status: OutcomeFilter::All,
            agent: None,
            search: String::new(),
            common: common(json),
        }
    }

    #[tokio::test]
    async fn test_logs_list_offline_renders_page() {
        let args = list_args(50, LevelFilter::All, false);
        let output = handle_logs_list(&args, &offline_client()).await.unwrap();

        assert!(output.contains("sample data"));
        assert!(output.contains("Task execution completed"));
        assert!(output.contains("more available"));
    }

    #[tokio::test]
    async fn test_logs_list_level_filter_applies_offline() {
        let args = list_args(50, LevelFilter::Error, true);
        let output = handle_logs_list(&args, &offline_client()).await.unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        for entry in parsed["data"]["logs"].as_array().unwrap() {
            assert_eq!(entry["level"], "error");
        }
    }

    #[tokio::test]
    async fn test_logs_show_offline_includes_payload_previews() {
        let args = LogsShowArgs {
            id: "log-042".to_string(),
            common: common(false),
        };
        let output = handle_logs_show(&args, &offline_client()).await.unwrap();

        assert!(output.contains("log-042"));
        assert!(output.contains("quarterly report"));
    }
}
