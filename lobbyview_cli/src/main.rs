mod commands;
mod output;
mod validation;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lobbyview_api::{Client, ClientConfig, ConnectionCheckPolicy};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "lobbyview")]
#[command(about = "Query federal lobbying data from the LobbyView REST API")]
struct Cli {
    /// Output format: text, json, table or csv
    #[arg(long, default_value = "text", global = true)]
    output: String,

    /// Override the API base URL (default: LOBBYVIEW_BASE_URL or the public API)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Skip the connectivity check on startup
    #[arg(long, global = true)]
    no_check: bool,

    /// Abort if the connectivity check fails instead of warning
    #[arg(long, global = true, conflicts_with = "no_check")]
    strict_check: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search legislators
    Legislators(commands::legislators::LegislatorsArgs),
    /// Search bills
    Bills(commands::bills::BillsArgs),
    /// Search lobbying clients
    Clients(commands::clients::ClientsArgs),
    /// Search lobbying reports
    Reports(Box<commands::reports::ReportsArgs>),
    /// Search report issues
    Issues(commands::issues::IssuesArgs),
    /// Search yearly client-legislator networks
    Networks(commands::networks::NetworksArgs),
    /// Search issue texts
    Texts(commands::issues::TextsArgs),
    /// Search quarterly client-legislator networks
    QuarterNetworks(commands::networks::QuarterNetworksArgs),
    /// Search bill-client networks
    BillClientNetworks(commands::bill_client_networks::BillClientNetworksArgs),
    /// Run one query per resource against the live API
    Check,
}

fn build_client(cli: &Cli) -> Result<Client> {
    let mut config = ClientConfig::from_env()?;
    if let Some(ref base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    if cli.no_check {
        config = config.with_check_connection(false);
    }
    let policy = if cli.strict_check {
        ConnectionCheckPolicy::Strict
    } else {
        ConnectionCheckPolicy::Warn
    };
    Ok(Client::new(config.with_connection_check_policy(policy))?)
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lobbyview=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);
    let client = build_client(&cli)?;

    match &cli.command {
        Commands::Legislators(args) => commands::legislators::run(args, &client, format)?,
        Commands::Bills(args) => commands::bills::run(args, &client, format)?,
        Commands::Clients(args) => commands::clients::run(args, &client, format)?,
        Commands::Reports(args) => commands::reports::run(args.as_ref(), &client, format)?,
        Commands::Issues(args) => commands::issues::run_issues(args, &client, format)?,
        Commands::Networks(args) => commands::networks::run_networks(args, &client, format)?,
        Commands::Texts(args) => commands::issues::run_texts(args, &client, format)?,
        Commands::QuarterNetworks(args) => {
            commands::networks::run_quarter_networks(args, &client, format)?
        }
        Commands::BillClientNetworks(args) => {
            commands::bill_client_networks::run(args, &client, format)?
        }
        Commands::Check => commands::check::run(&client)?,
    }

    Ok(())
}
