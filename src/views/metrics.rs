//! Metrics summary shaping.
//!
//! Summary cards pass through server-side aggregates when present and compute
//! them from the series otherwise. An empty series always yields zero-valued
//! defaults rather than an error.

use crate::client::types::{
    CostMetricsResponse, CostTotals, LatencyMetricsResponse, LatencySummary,
    TokenMetricsResponse, TokenTotals,
};

/// Token totals for the summary cards.
pub fn token_summary(resp: &TokenMetricsResponse) -> TokenTotals {
    if let Some(totals) = &resp.totals {
        return totals.clone();
    }
    TokenTotals {
        input_tokens: resp.data.iter().map(|p| p.input_tokens).sum(),
        output_tokens: resp.data.iter().map(|p| p.output_tokens).sum(),
        total_tokens: resp.data.iter().map(|p| p.total_tokens).sum(),
    }
}

/// Cost totals for the summary cards.
pub fn cost_summary(resp: &CostMetricsResponse) -> CostTotals {
    if let Some(totals) = &resp.totals {
        return totals.clone();
    }
    CostTotals {
        cost: resp.data.iter().map(|p| p.cost).sum(),
        requests: resp.data.iter().map(|p| p.requests).sum(),
    }
}

/// Latency summary for the summary cards.
///
/// When computed locally: avg is the mean of per-bucket averages, the
/// percentile columns report their worst bucket, and max mirrors the worst
/// p99 since raw samples are not available here.
pub fn latency_summary(resp: &LatencyMetricsResponse) -> LatencySummary {
    if let Some(summary) = &resp.summary {
        return summary.clone();
    }
    if resp.data.is_empty() {
        return LatencySummary::default();
    }
    let worst_p99 = resp.data.iter().map(|p| p.p99).max().unwrap_or(0);
    LatencySummary {
        avg: resp.data.iter().map(|p| p.avg).sum::<u64>() / resp.data.len() as u64,
        p50: resp.data.iter().map(|p| p.p50).max().unwrap_or(0),
        p95: resp.data.iter().map(|p| p.p95).max().unwrap_or(0),
        p99: worst_p99,
        max: worst_p99,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::types::{CostPoint, LatencyPoint, TokenPoint};

    #[test]
    fn test_token_summary_empty_series_is_zeroed() {
        let resp = TokenMetricsResponse::default();
        let totals = token_summary(&resp);
        assert_eq!(totals, TokenTotals::default());
    }

    #[test]
    fn test_token_summary_computed_from_series() {
        let resp = TokenMetricsResponse {
            data: vec![
                TokenPoint {
                    time: "00:00".into(),
                    input_tokens: 100,
                    output_tokens: 200,
                    total_tokens: 300,
                },
                TokenPoint {
                    time: "01:00".into(),
                    input_tokens: 50,
                    output_tokens: 75,
                    total_tokens: 125,
                },
            ],
            totals: None,
        };
        let totals = token_summary(&resp);
        assert_eq!(totals.input_tokens, 150);
        assert_eq!(totals.output_tokens, 275);
        assert_eq!(totals.total_tokens, 425);
    }

    #[test]
    fn test_token_summary_prefers_server_totals() {
        let resp = TokenMetricsResponse {
            data: vec![TokenPoint {
                time: "00:00".into(),
                input_tokens: 1,
                output_tokens: 1,
                total_tokens: 2,
            }],
            totals: Some(TokenTotals {
                input_tokens: 999,
                output_tokens: 999,
                total_tokens: 1998,
            }),
        };
        assert_eq!(token_summary(&resp).total_tokens, 1998);
    }

    #[test]
    fn test_cost_summary_empty_series_is_zeroed() {
        let resp = CostMetricsResponse::default();
        let totals = cost_summary(&resp);
        assert_eq!(totals.cost, 0.0);
        assert_eq!(totals.requests, 0);
    }

    #[test]
    fn test_cost_summary_computed_from_series() {
        let resp = CostMetricsResponse {
            data: vec![
                CostPoint {
                    time: "00:00".into(),
                    cost: 1.5,
                    requests: 100,
                },
                CostPoint {
                    time: "01:00".into(),
                    cost: 2.25,
                    requests: 50,
                },
            ],
            totals: None,
        };
        let totals = cost_summary(&resp);
        assert!((totals.cost - 3.75).abs() < f64::EPSILON);
        assert_eq!(totals.requests, 150);
    }

    #[test]
    fn test_latency_summary_empty_series_is_zeroed() {
        let resp = LatencyMetricsResponse::default();
        assert_eq!(latency_summary(&resp), LatencySummary::default());
    }

    #[test]
    fn test_latency_summary_computed_from_series() {
        let resp = LatencyMetricsResponse {
            data: vec![
                LatencyPoint {
                    time: "00:00".into(),
                    avg: 200,
                    p50: 150,
                    p95: 400,
                    p99: 800,
                },
                LatencyPoint {
                    time: "01:00".into(),
                    avg: 300,
                    p50: 250,
                    p95: 600,
                    p99: 1200,
                },
            ],
            summary: None,
        };
        let summary = latency_summary(&resp);
        assert_eq!(summary.avg, 250);
        assert_eq!(summary.p95, 600);
        assert_eq!(summary.p99, 1200);
        assert_eq!(summary.max, 1200);
    }
}
