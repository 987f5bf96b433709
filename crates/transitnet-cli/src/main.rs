mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use transitnet_cli::output::OutputFormat;

use commands::connect::{handle_connect_command, ConnectArgs};
use commands::menu::handle_menu_command;
use commands::route::{handle_route_command, RouteArgs};
use commands::stations::handle_stations_command;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Shortest paths and connectors over a weighted transit network"
)]
struct Cli {
    /// CSV edge list (`from,to,distance,travel_time,cost`) to use instead of
    /// the built-in Delhi Metro network.
    #[arg(long, global = true, env = "TRANSITNET_EDGES", value_name = "CSV")]
    edges: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List station numbers and names.
    Stations,
    /// Shortest path between two stations.
    Route(RouteArgs),
    /// Connector edges grown from one station until another is reached.
    Connect(ConnectArgs),
    /// Interactive numbered menu.
    Menu,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let graph = commands::load_network(cli.edges.as_deref())?;

    match &cli.command {
        Command::Stations => handle_stations_command(&graph, cli.format),
        Command::Route(args) => handle_route_command(&graph, args, cli.format),
        Command::Connect(args) => handle_connect_command(&graph, args, cli.format),
        Command::Menu => handle_menu_command(&graph, cli.edges.as_deref()),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
