use agentmon::cli::{
    agents, handle_completions, handle_config_init, logs, metrics, overview, status, traces,
    AgentsCommands, Cli, Commands, ConfigCommands, LogsCommands, TracesCommands,
};
use agentmon::client::ApiClient;
use agentmon::config::MonitorConfig;
use agentmon::logging::init_logging;
use clap::Parser;

fn setup(config: &MonitorConfig) -> anyhow::Result<ApiClient> {
    config.validate()?;
    init_logging(&config.logging);
    Ok(ApiClient::new(config))
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result: anyhow::Result<()> = match cli.command {
        Commands::Overview(args) => {
            let config = args.common.resolve_config();
            match setup(&config) {
                Ok(client) => overview::handle_overview(&args, &client)
                    .await
                    .map(|out| println!("{}", out)),
                Err(e) => Err(e),
            }
        }
        Commands::Agents(cmd) => match cmd {
            AgentsCommands::List(args) => {
                let config = args.common.resolve_config();
                match setup(&config) {
                    Ok(client) => agents::handle_agents_list(&args, &client)
                        .await
                        .map(|out| println!("{}", out)),
                    Err(e) => Err(e),
                }
            }
            AgentsCommands::Show(args) => {
                let config = args.common.resolve_config();
                match setup(&config) {
                    Ok(client) => agents::handle_agents_show(&args, &client)
                        .await
                        .map(|out| println!("{}", out)),
                    Err(e) => Err(e),
                }
            }
        },
        Commands::Logs(cmd) => match cmd {
            LogsCommands::List(args) => {
                let config = args.common.resolve_config();
                match setup(&config) {
                    Ok(client) => logs::handle_logs_list(&args, &client)
                        .await
                        .map(|out| println!("{}", out)),
                    Err(e) => Err(e),
                }
            }
            LogsCommands::Show(args) => {
                let config = args.common.resolve_config();
                match setup(&config) {
                    Ok(client) => logs::handle_logs_show(&args, &client)
                        .await
                        .map(|out| println!("{}", out)),
                    Err(e) => Err(e),
                }
            }
        },
        Commands::Traces(cmd) => match cmd {
            TracesCommands::List(args) => {
                let config = args.common.resolve_config();
                match setup(&config) {
                    Ok(client) => traces::handle_traces_list(&args, &client)
                        .await
                        .map(|out| println!("{}", out)),
                    Err(e) => Err(e),
                }
            }
            TracesCommands::Show(args) => {
                let config = args.common.resolve_config();
                match setup(&config) {
                    Ok(client) => traces::handle_traces_show(&args, &client)
                        .await
                        .map(|out| println!("{}", out)),
                    Err(e) => Err(e),
                }
            }
        },
        Commands::Metrics(args) => {
            let config = args.common.resolve_config();
            match setup(&config) {
                Ok(client) => metrics::handle_metrics(&args, &client)
                    .await
                    .map(|out| println!("{}", out)),
                Err(e) => Err(e),
            }
        }
        Commands::Status(args) => {
            let config = args.common.resolve_config();
            match setup(&config) {
                Ok(client) => status::handle_status(&args, &client)
                    .await
                    .map(|out| println!("{}", out)),
                Err(e) => Err(e),
            }
        }
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Init(args) => handle_config_init(&args),
        },
        Commands::Completions(args) => {
            handle_completions(&args);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
