//! Traces command implementation

use crate::cli::output;
use crate::cli::{TracesListArgs, TracesShowArgs};
use crate::client::ApiClient;
use crate::views::traces::filter_traces;
use crate::views::ViewState;
use anyhow::Result;

/// Handle `traces list`.
///
/// The backend paginates but does not filter by status, so the status filter
/// narrows the fetched page locally.
pub async fn handle_traces_list(args: &TracesListArgs, client: &ApiClient) -> Result<String> {
    let mut state = ViewState::new();
    state.trace_limit = args.limit;
    state.trace_offset = args.offset;
    state.trace_status = args.status;

    let fetched = client
        .fetch_traces(state.trace_limit, state.trace_offset)
        .await?;

    if args.common.json {
        return Ok(output::format_json(&fetched));
    }

    let visible = filter_traces(&fetched.data.traces, state.trace_status);
    let table = output::format_traces_table(&visible, fetched.data.total, fetched.data.has_more);
    Ok(match output::synthetic_notice(&fetched.origin) {
        Some(notice) => format!("{}\n{}", notice, table),
        None => table,
    })
}

/// Handle `traces show <id>`.
pub async fn handle_traces_show(args: &TracesShowArgs, client: &ApiClient) -> Result<String> {
    let mut state = ViewState::new();
    state.select_trace(&args.id);

    let id = state.selected_trace.as_deref().unwrap_or(&args.id);
    let fetched = client.fetch_trace_detail(id).await?;

    if args.common.json {
        return Ok(output::format_json(&fetched));
    }

    let detail = output::format_trace_detail(&fetched.data);
    Ok(match output::synthetic_notice(&fetched.origin) {
        Some(notice) => format!("{}\n{}", notice, detail),
        None => detail,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CommonArgs;
    use crate::client::TraceFilter;
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

    #[tokio::test]
    async fn test_traces_list_offline_renders_page() {
        let args = TracesListArgs {
            limit: 20,
            offset: 0,
            status: TraceFilter::All,
            common: common(false),
        };
        let output = handle_traces_list(&args, &offline_client()).await.unwrap();

        assert!(output.contains("sample data"));
        assert!(output.contains("User Query Session"));
        assert!(output.contains("Showing 20 of 500 traces"));
    }

    #[tokio::test]
    async fn test_traces_list_status_filter_narrows_page() {
        let args = TracesListArgs {
            limit: 20,
            offset: 0,
            status: TraceFilter::Error,
            common: common(false),
        };
        let output = handle_traces_list(&args, &offline_client()).await.unwrap();

        // The synthetic page has 4 error traces out of 20; footer still
        // reports the full backlog.
        assert!(output.contains("Showing 4 of 500 traces"));
    }

    #[tokio::test]
    async fn test_traces_show_offline_renders_detail() {
        let args = TracesShowArgs {
            id: "trace-099".to_string(),
            common: common(false),
        };
        let output = handle_traces_show(&args, &offline_client()).await.unwrap();

        assert!(output.contains("trace-099"));
        assert!(output.contains("Duration"));
    }
}
