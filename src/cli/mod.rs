//! CLI module for Agentmon
//!
//! Command-line interface definitions and handlers for the multi-agent
//! monitoring dashboard.
//!
//! # Commands
//!
//! - `overview` - Headline stats, activity, and recent entries
//! - `agents` - List agents or show one agent's detail
//! - `logs` - List execution logs or show one entry
//! - `traces` - List traces or show one trace
//! - `metrics` - Token, cost, or latency series with summaries
//! - `status` - Orchestrator and backend health snapshot
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Show the overview against the default backend
//! agentmon overview
//!
//! # List active agents matching a name
//! agentmon agents list --status active --search research
//!
//! # Last 100 error logs as JSON
//! agentmon logs list --limit 100 --level error --json
//! ```

pub mod agents;
pub mod completions;
pub mod config;
pub mod logs;
pub mod metrics;
pub mod output;
pub mod overview;
pub mod status;
pub mod traces;

pub use completions::handle_completions;
pub use config::handle_config_init;

use crate::client::query::{LevelFilter, MetricKind, OutcomeFilter, Period, StatusFilter, TraceFilter};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Agentmon - Multi-Agent Monitoring Dashboard
#[derive(Parser, Debug)]
#[command(
    name = "agentmon",
    version,
    about = "Monitoring dashboard client for multi-agent AI systems"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show headline stats and recent activity
    Overview(OverviewArgs),
    /// Inspect agents
    #[command(subcommand)]
    Agents(AgentsCommands),
    /// Inspect execution logs
    #[command(subcommand)]
    Logs(LogsCommands),
    /// Inspect traces
    #[command(subcommand)]
    Traces(TracesCommands),
    /// Show metric series and summaries
    Metrics(MetricsArgs),
    /// Show orchestrator status and backend health
    Status(StatusArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Options shared by every data-fetching command.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "agentmon.toml")]
    pub config: PathBuf,

    /// Override backend base URL
    #[arg(long, env = "AGENTMON_API_URL")]
    pub api_url: Option<String>,

    /// Disable the synthetic-data fallback (errors propagate)
    #[arg(long)]
    pub no_fallback: bool,

    /// Output as JSON (includes the data origin tag)
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct OverviewArgs {
    /// Activity window (1h, 6h, 24h, 7d, 30d)
    #[arg(short, long, default_value = "24h")]
    pub period: Period,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Subcommand, Debug)]
pub enum AgentsCommands {
    /// List agents with status and telemetry
    List(AgentsListArgs),
    /// Show one agent's detail and recent activity
    Show(AgentsShowArgs),
}

#[derive(Args, Debug)]
pub struct AgentsListArgs {
    /// Filter by status (all, active, idle, error)
    #[arg(short, long, default_value = "all")]
    pub status: StatusFilter,

    /// Case-insensitive name search
    #[arg(long, default_value = "")]
    pub search: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug)]
pub struct AgentsShowArgs {
    /// Agent id
    pub id: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Subcommand, Debug)]
pub enum LogsCommands {
    /// List execution logs
    List(LogsListArgs),
    /// Show one log entry with payload previews
    Show(LogsShowArgs),
}

#[derive(Args, Debug)]
pub struct LogsListArgs {
    /// Page size (clamped to [10, 200])
    #[arg(short, long, default_value = "50")]
    pub limit: u32,

    /// Page offset
    #[arg(short, long, default_value = "0")]
    pub offset: u32,

    /// Filter by level (all, info, warning, error, debug)
    #[arg(long, default_value = "all")]
    pub level: LevelFilter,

    /// Filter by outcome (all, success, error, pending)
    #[arg(long, default_value = "all")]
    pub status: OutcomeFilter,

    /// Filter by agent id
    #[arg(long)]
    pub agent: Option<String>,

    /// Free-text message search
    #[arg(long, default_value = "")]
    pub search: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug)]
pub struct LogsShowArgs {
    /// Log entry id
    pub id: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Subcommand, Debug)]
pub enum TracesCommands {
    /// List traces
    List(TracesListArgs),
    /// Show one trace
    Show(TracesShowArgs),
}

#[derive(Args, Debug)]
pub struct TracesListArgs {
    /// Page size
    #[arg(short, long, default_value = "20")]
    pub limit: u32,

    /// Page offset
    #[arg(short, long, default_value = "0")]
    pub offset: u32,

    /// Filter by status, applied locally to the fetched page
    /// (all, completed, error, active)
    #[arg(long, default_value = "all")]
    pub status: TraceFilter,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug)]
pub struct TracesShowArgs {
    /// Trace id
    pub id: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug)]
pub struct MetricsArgs {
    /// Metric kind (tokens, costs, latency)
    pub kind: MetricKind,

    /// Aggregation window (1h, 6h, 24h, 7d, 30d)
    #[arg(short, long, default_value = "24h")]
    pub period: Period,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "agentmon.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

impl CommonArgs {
    /// Resolve the effective configuration for this invocation.
    ///
    /// File -> environment -> CLI flag, lowest to highest priority.
    pub fn resolve_config(&self) -> crate::config::MonitorConfig {
        let mut config =
            crate::config::MonitorConfig::load_or_default(&self.config).with_env_overrides();
        if let Some(url) = &self.api_url {
            config.api.base_url = url.clone();
        }
        if self.no_fallback {
            config.fallback.enabled = false;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_parse_overview_defaults() {
        let cli = Cli::try_parse_from(["agentmon", "overview"]).unwrap();
        match cli.command {
            Commands::Overview(args) => {
                assert_eq!(args.period, Period::Day);
                assert_eq!(args.common.config, PathBuf::from("agentmon.toml"));
                assert!(!args.common.json);
            }
            _ => panic!("Expected Overview command"),
        }
    }

    #[test]
    fn test_cli_parse_agents_list_with_filters() {
        let cli = Cli::try_parse_from([
            "agentmon", "agents", "list", "--status", "active", "--search", "research",
        ])
        .unwrap();
        match cli.command {
            Commands::Agents(AgentsCommands::List(args)) => {
                assert_eq!(args.status, StatusFilter::Active);
                assert_eq!(args.search, "research");
            }
            _ => panic!("Expected Agents List command"),
        }
    }

    #[test]
    fn test_cli_parse_agents_list_invalid_status() {
        let result = Cli::try_parse_from(["agentmon", "agents", "list", "--status", "busy"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_agents_show() {
        let cli = Cli::try_parse_from(["agentmon", "agents", "show", "agent-001"]).unwrap();
        match cli.command {
            Commands::Agents(AgentsCommands::Show(args)) => assert_eq!(args.id, "agent-001"),
            _ => panic!("Expected Agents Show command"),
        }
    }

    #[test]
    fn test_cli_parse_logs_list_pagination() {
        let cli = Cli::try_parse_from([
            "agentmon", "logs", "list", "--limit", "100", "--offset", "200", "--level", "error",
        ])
        .unwrap();
        match cli.command {
            Commands::Logs(LogsCommands::List(args)) => {
                assert_eq!(args.limit, 100);
                assert_eq!(args.offset, 200);
                assert_eq!(args.level, LevelFilter::Error);
            }
            _ => panic!("Expected Logs List command"),
        }
    }

    #[test]
    fn test_cli_parse_metrics_kind_and_period() {
        let cli =
            Cli::try_parse_from(["agentmon", "metrics", "latency", "--period", "7d"]).unwrap();
        match cli.command {
            Commands::Metrics(args) => {
                assert_eq!(args.kind, MetricKind::Latency);
                assert_eq!(args.period, Period::Week);
            }
            _ => panic!("Expected Metrics command"),
        }
    }

    #[test]
    fn test_cli_parse_traces_list_local_status() {
        let cli =
            Cli::try_parse_from(["agentmon", "traces", "list", "--status", "completed"]).unwrap();
        match cli.command {
            Commands::Traces(TracesCommands::List(args)) => {
                assert_eq!(args.status, TraceFilter::Completed);
                assert_eq!(args.limit, 20);
            }
            _ => panic!("Expected Traces List command"),
        }
    }

    #[test]
    fn test_cli_parse_status_json() {
        let cli = Cli::try_parse_from(["agentmon", "status", "--json"]).unwrap();
        match cli.command {
            Commands::Status(args) => assert!(args.common.json),
            _ => panic!("Expected Status command"),
        }
    }

    #[test]
    fn test_cli_parse_no_fallback_flag() {
        let cli = Cli::try_parse_from(["agentmon", "overview", "--no-fallback"]).unwrap();
        match cli.command {
            Commands::Overview(args) => assert!(args.common.no_fallback),
            _ => panic!("Expected Overview command"),
        }
    }

    #[test]
    fn test_resolve_config_cli_overrides() {
        let common = CommonArgs {
            config: PathBuf::from("/nonexistent/agentmon.toml"),
            api_url: Some("http://flagged:9999".to_string()),
            no_fallback: true,
            json: false,
        };
        let config = common.resolve_config();
        assert_eq!(config.api.base_url, "http://flagged:9999");
        assert!(!config.fallback.enabled);
    }
}
