//! Backend gateway client.
//!
//! Translates dashboard-level queries into HTTP calls against the monitoring
//! backend and normalizes failures into an explicit fallback: when the
//! backend is unreachable (and fallback is enabled), each operation returns a
//! deterministic synthetic payload tagged [`DataOrigin::Synthetic`] instead of
//! propagating the error, so the presentation layer always has something to
//! render. Callers and tests can always tell live data from fallback data.

pub mod error;
pub mod query;
pub mod synthetic;
pub mod types;

pub use error::FetchError;
pub use query::{
    LevelFilter, LogQuery, MetricKind, OutcomeFilter, Period, StatusFilter, TraceFilter,
};
pub use types::*;

use crate::config::MonitorConfig;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::warn;

/// Provenance of a fetched payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum DataOrigin {
    /// Payload came from the live backend.
    Live,
    /// Payload was generated locally after a fetch failure; `reason` records
    /// the discarded error.
    Synthetic { reason: String },
}

/// A payload tagged with its provenance.
#[derive(Debug, Clone, Serialize)]
pub struct Fetched<T> {
    pub origin: DataOrigin,
    pub data: T,
}

impl<T> Fetched<T> {
    pub fn live(data: T) -> Self {
        Self {
            origin: DataOrigin::Live,
            data,
        }
    }

    pub fn synthetic(data: T, reason: String) -> Self {
        Self {
            origin: DataOrigin::Synthetic { reason },
            data,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        matches!(self.origin, DataOrigin::Synthetic { .. })
    }
}

/// HTTP client for the monitoring backend REST API.
///
/// One instance is shared across all pages; `reqwest::Client` pools
/// connections internally. Every navigation re-fetches; there is no caching
/// layer and no concurrent in-flight de-duplication.
pub struct ApiClient {
    base_url: String,
    client: Client,
    timeout: Duration,
    fallback_enabled: bool,
}

impl ApiClient {
    pub fn new(config: &MonitorConfig) -> Self {
        Self {
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            timeout: Duration::from_secs(config.api.request_timeout_seconds),
            fallback_enabled: config.fallback.enabled,
        }
    }

    /// Client pointed at an explicit base URL with defaults otherwise.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut config = MonitorConfig::default();
        config.api.base_url = base_url.into();
        Self::new(&config)
    }

    /// Disable the synthetic fallback so fetch errors propagate.
    pub fn without_fallback(mut self) -> Self {
        self.fallback_enabled = false;
        self
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        let timeout_ms = self.timeout.as_millis() as u64;

        let response = self
            .client
            .get(&url)
            .query(params)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(e, timeout_ms))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FetchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::InvalidResponse(format!("Failed to read body: {}", e)))?;

        serde_json::from_str(&body)
            .map_err(|e| FetchError::InvalidResponse(format!("Failed to parse body: {}", e)))
    }

    /// Apply the fallback policy to a failed fetch.
    fn recover<T>(
        &self,
        path: &str,
        err: FetchError,
        substitute: impl FnOnce() -> T,
    ) -> Result<Fetched<T>, FetchError> {
        if !self.fallback_enabled {
            return Err(err);
        }
        warn!(path, error = %err, "backend fetch failed, substituting synthetic data");
        Ok(Fetched::synthetic(substitute(), err.to_string()))
    }

    /// GET /api/v1/overview/stats
    pub async fn fetch_overview_stats(&self) -> Result<Fetched<OverviewStats>, FetchError> {
        let path = "/api/v1/overview/stats";
        match self.get_json(path, &[]).await {
            Ok(stats) => Ok(Fetched::live(stats)),
            Err(err) => self.recover(path, err, synthetic::overview_stats),
        }
    }

    /// GET /api/v1/overview/activity
    pub async fn fetch_overview_activity(
        &self,
        period: Period,
    ) -> Result<Fetched<ActivityResponse>, FetchError> {
        let path = "/api/v1/overview/activity";
        let params = [("period", period.as_str().to_string())];
        match self.get_json(path, &params).await {
            Ok(activity) => Ok(Fetched::live(activity)),
            Err(err) => self.recover(path, err, || synthetic::activity(period)),
        }
    }

    /// GET /api/v1/agents
    ///
    /// Status and search filtering are server-side; the synthetic substitute
    /// applies the same filter semantics locally.
    pub async fn fetch_agents(
        &self,
        status: StatusFilter,
        search: &str,
    ) -> Result<Fetched<AgentsResponse>, FetchError> {
        let path = "/api/v1/agents";
        let params = [
            ("status", status.as_str().to_string()),
            ("search", search.to_string()),
        ];
        match self.get_json(path, &params).await {
            Ok(agents) => Ok(Fetched::live(agents)),
            Err(err) => self.recover(path, err, || synthetic::agents(status, search)),
        }
    }

    /// GET /api/v1/agents/{id}
    pub async fn fetch_agent_detail(
        &self,
        agent_id: &str,
    ) -> Result<Fetched<AgentDetail>, FetchError> {
        let path = format!("/api/v1/agents/{}", agent_id);
        match self.get_json(&path, &[]).await {
            Ok(detail) => Ok(Fetched::live(detail)),
            Err(err) => self.recover(&path, err, || synthetic::agent_detail(agent_id)),
        }
    }

    /// GET /api/v1/logs
    ///
    /// The page size is clamped to [10, 200] before the request is sent.
    pub async fn fetch_logs(&self, query: &LogQuery) -> Result<Fetched<LogsResponse>, FetchError> {
        let path = "/api/v1/logs";
        let mut params = vec![
            ("limit", query.clamped_limit().to_string()),
            ("offset", query.offset.to_string()),
            ("level", query.level.as_str().to_string()),
            ("status", query.status.as_str().to_string()),
            ("search", query.search.clone()),
        ];
        if let Some(agent_id) = &query.agent_id {
            params.push(("agentId", agent_id.clone()));
        }
        match self.get_json(path, &params).await {
            Ok(logs) => Ok(Fetched::live(logs)),
            Err(err) => self.recover(path, err, || synthetic::logs(query)),
        }
    }

    /// GET /api/v1/logs/{id}
    pub async fn fetch_log_detail(&self, log_id: &str) -> Result<Fetched<LogEntry>, FetchError> {
        let path = format!("/api/v1/logs/{}", log_id);
        match self.get_json(&path, &[]).await {
            Ok(entry) => Ok(Fetched::live(entry)),
            Err(err) => self.recover(&path, err, || synthetic::log_detail(log_id)),
        }
    }

    /// GET /api/v1/traces
    pub async fn fetch_traces(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Fetched<TracesResponse>, FetchError> {
        let path = "/api/v1/traces";
        let params = [
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
        ];
        match self.get_json(path, &params).await {
            Ok(traces) => Ok(Fetched::live(traces)),
            Err(err) => self.recover(path, err, || synthetic::traces(limit, offset)),
        }
    }

    /// GET /api/v1/traces/{id}
    pub async fn fetch_trace_detail(&self, trace_id: &str) -> Result<Fetched<Trace>, FetchError> {
        let path = format!("/api/v1/traces/{}", trace_id);
        match self.get_json(&path, &[]).await {
            Ok(trace) => Ok(Fetched::live(trace)),
            Err(err) => self.recover(&path, err, || synthetic::trace_detail(trace_id)),
        }
    }

    /// GET /api/v1/metrics/tokens
    pub async fn fetch_token_metrics(
        &self,
        period: Period,
    ) -> Result<Fetched<TokenMetricsResponse>, FetchError> {
        let path = "/api/v1/metrics/tokens";
        let params = [("period", period.as_str().to_string())];
        match self.get_json(path, &params).await {
            Ok(metrics) => Ok(Fetched::live(metrics)),
            Err(err) => self.recover(path, err, || synthetic::token_metrics(period)),
        }
    }

    /// GET /api/v1/metrics/costs
    pub async fn fetch_cost_metrics(
        &self,
        period: Period,
    ) -> Result<Fetched<CostMetricsResponse>, FetchError> {
        let path = "/api/v1/metrics/costs";
        let params = [("period", period.as_str().to_string())];
        match self.get_json(path, &params).await {
            Ok(metrics) => Ok(Fetched::live(metrics)),
            Err(err) => self.recover(path, err, || synthetic::cost_metrics(period)),
        }
    }

    /// GET /api/v1/metrics/latency
    pub async fn fetch_latency_metrics(
        &self,
        period: Period,
    ) -> Result<Fetched<LatencyMetricsResponse>, FetchError> {
        let path = "/api/v1/metrics/latency";
        let params = [("period", period.as_str().to_string())];
        match self.get_json(path, &params).await {
            Ok(metrics) => Ok(Fetched::live(metrics)),
            Err(err) => self.recover(path, err, || synthetic::latency_metrics(period)),
        }
    }

    /// GET /api/v1/orchestrator/status
    pub async fn fetch_orchestrator_status(
        &self,
    ) -> Result<Fetched<OrchestratorStatus>, FetchError> {
        let path = "/api/v1/orchestrator/status";
        match self.get_json(path, &[]).await {
            Ok(status) => Ok(Fetched::live(status)),
            Err(err) => self.recover(path, err, synthetic::orchestrator_status),
        }
    }

    /// GET /api/v1/health
    ///
    /// The fallback reports unhealthy rather than fabricating a healthy state.
    pub async fn fetch_health(&self) -> Result<Fetched<HealthReport>, FetchError> {
        let path = "/api/v1/health";
        match self.get_json(path, &[]).await {
            Ok(report) => Ok(Fetched::live(report)),
            Err(err) => self.recover(path, err, synthetic::health),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn test_fetch_agents_live() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/agents")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("status".into(), "active".into()),
                mockito::Matcher::UrlEncoded("search".into(), "Research".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{"agents":[{"id":"agent-001","name":"Research Agent","type":"researcher",
                    "status":"active","model":"gpt-4","lastActive":"2024-01-15T10:30:00Z",
                    "totalRequests":1250,"successRate":99.2,"avgLatency":320,
                    "totalTokens":450000,"totalCost":12.5,"isConnectedToOrchestrator":true}],
                    "total":1,"active":1}"#,
            )
            .create_async()
            .await;

        let client = ApiClient::with_base_url(server.url());
        let fetched = client
            .fetch_agents(StatusFilter::Active, "Research")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(fetched.origin, DataOrigin::Live);
        assert_eq!(fetched.data.agents.len(), 1);
        assert_eq!(fetched.data.agents[0].name, "Research Agent");
    }

    #[tokio::test]
    async fn test_fetch_agents_server_error_falls_back() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/agents")
            .match_query(mockito::Matcher::Any)
            .with_status(503)
            .with_body("Service unavailable")
            .create_async()
            .await;

        let client = ApiClient::with_base_url(server.url());
        let fetched = client.fetch_agents(StatusFilter::All, "").await.unwrap();

        mock.assert_async().await;
        assert!(fetched.is_synthetic());
        assert_eq!(fetched.data.agents.len(), 3);
    }

    #[tokio::test]
    async fn test_fetch_agents_malformed_body_falls_back() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/agents")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body("not json at all")
            .create_async()
            .await;

        let client = ApiClient::with_base_url(server.url());
        let fetched = client.fetch_agents(StatusFilter::All, "").await.unwrap();

        mock.assert_async().await;
        match &fetched.origin {
            DataOrigin::Synthetic { reason } => assert!(reason.contains("Invalid response")),
            DataOrigin::Live => panic!("expected synthetic origin"),
        }
    }

    #[tokio::test]
    async fn test_fetch_without_fallback_propagates_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v1/agents")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = ApiClient::with_base_url(server.url()).without_fallback();
        let result = client.fetch_agents(StatusFilter::All, "").await;

        assert!(matches!(
            result,
            Err(FetchError::Status { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_logs_sends_clamped_limit() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/logs")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("limit".into(), "200".into()),
                mockito::Matcher::UrlEncoded("offset".into(), "0".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"logs":[],"total":0,"hasMore":false}"#)
            .create_async()
            .await;

        let client = ApiClient::with_base_url(server.url());
        let query = LogQuery {
            limit: 5000,
            ..Default::default()
        };
        let fetched = client.fetch_logs(&query).await.unwrap();

        mock.assert_async().await;
        assert_eq!(fetched.origin, DataOrigin::Live);
        assert!(fetched.data.logs.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_logs_empty_result_is_not_an_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v1/logs")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"logs":[],"total":0,"hasMore":false}"#)
            .create_async()
            .await;

        let client = ApiClient::with_base_url(server.url());
        let fetched = client.fetch_logs(&LogQuery::default()).await.unwrap();

        assert_eq!(fetched.origin, DataOrigin::Live);
        assert_eq!(fetched.data.total, 0);
        assert!(!fetched.data.has_more);
    }

    #[tokio::test]
    async fn test_fetch_traces_unreachable_backend_falls_back() {
        // Port 9 (discard) refuses connections immediately.
        let client = ApiClient::with_base_url("http://127.0.0.1:9");
        let fetched = client.fetch_traces(20, 0).await.unwrap();

        assert!(fetched.is_synthetic());
        assert_eq!(fetched.data.traces.len(), 20);
        assert_eq!(fetched.data.total, 500);
        assert!(fetched.data.has_more);
    }

    #[tokio::test]
    async fn test_fetch_health_fallback_reports_unhealthy() {
        let client = ApiClient::with_base_url("http://127.0.0.1:9");
        let fetched = client.fetch_health().await.unwrap();

        assert!(fetched.is_synthetic());
        assert_eq!(fetched.data.status, HealthState::Unhealthy);
    }

    #[tokio::test]
    async fn test_fetch_token_metrics_live_passthrough() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/metrics/tokens")
            .match_query(mockito::Matcher::UrlEncoded("period".into(), "7d".into()))
            .with_status(200)
            .with_body(
                r#"{"data":[{"time":"00:00","inputTokens":10,"outputTokens":20,"totalTokens":30}],
                    "totals":{"inputTokens":10,"outputTokens":20,"totalTokens":30}}"#,
            )
            .create_async()
            .await;

        let client = ApiClient::with_base_url(server.url());
        let fetched = client.fetch_token_metrics(Period::Week).await.unwrap();

        mock.assert_async().await;
        assert_eq!(fetched.data.totals.unwrap().total_tokens, 30);
    }

    #[tokio::test]
    async fn test_fetch_orchestrator_status_live() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/orchestrator/status")
            .with_status(200)
            .with_body(
                r#"{"status":"active","uptime":86400000,
                    "connectedAgents":["agent-001"],"pendingTasks":3,
                    "activeTasks":2,"completedTasks":1547,"queueLength":5}"#,
            )
            .create_async()
            .await;

        let client = ApiClient::with_base_url(server.url());
        let fetched = client.fetch_orchestrator_status().await.unwrap();

        mock.assert_async().await;
        assert_eq!(fetched.data.status, OrchestratorState::Active);
        assert_eq!(fetched.data.queue_length, 5);
    }

    #[tokio::test]
    async fn test_base_url_trailing_slash_normalized() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/health")
            .with_status(200)
            .with_body(r#"{"status":"healthy","version":"1.0.0"}"#)
            .create_async()
            .await;

        let client = ApiClient::with_base_url(format!("{}/", server.url()));
        let fetched = client.fetch_health().await.unwrap();

        mock.assert_async().await;
        assert_eq!(fetched.data.status, HealthState::Healthy);
    }
}
