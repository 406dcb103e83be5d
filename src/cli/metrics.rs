//! Metrics command implementation

use crate::cli::output;
use crate::cli::MetricsArgs;
use crate::client::{ApiClient, MetricKind};
use crate::views::metrics::{cost_summary, latency_summary, token_summary};
use crate::views::ViewState;
use anyhow::Result;

/// Handle `metrics <kind>`.
pub async fn handle_metrics(args: &MetricsArgs, client: &ApiClient) -> Result<String> {
    let mut state = ViewState::new();
    state.period = args.period;

    let (origin, body) = match args.kind {
        MetricKind::Tokens => {
            let fetched = client.fetch_token_metrics(state.period).await?;
            if args.common.json {
                return Ok(output::format_json(&fetched));
            }
            let totals = token_summary(&fetched.data);
            (
                fetched.origin.clone(),
                output::format_token_metrics(&fetched.data, &totals),
            )
        }
        MetricKind::Costs => {
            let fetched = client.fetch_cost_metrics(state.period).await?;
            if args.common.json {
                return Ok(output::format_json(&fetched));
            }
            let totals = cost_summary(&fetched.data);
            (
                fetched.origin.clone(),
                output::format_cost_metrics(&fetched.data, &totals),
            )
        }
        MetricKind::Latency => {
            let fetched = client.fetch_latency_metrics(state.period).await?;
            if args.common.json {
                return Ok(output::format_json(&fetched));
            }
            let summary = latency_summary(&fetched.data);
            (
                fetched.origin.clone(),
                output::format_latency_metrics(&fetched.data, &summary),
            )
        }
    };

    Ok(match output::synthetic_notice(&origin) {
        Some(notice) => format!("{}\n{}", notice, body),
        None => body,
    })
}
