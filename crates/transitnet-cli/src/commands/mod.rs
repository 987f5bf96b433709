// Handlers for the CLI subcommands. main.rs parses arguments and dispatches here.

pub mod connect;
pub mod menu;
pub mod route;
pub mod stations;

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use transitnet_cli::failure::query_failure;
use transitnet_cli::output::OutputFormat;
use transitnet_lib::{builtin_graph, load_graph, run_query, Graph, QueryRequest, QuerySummary};

/// Load the network from `edges`, or the built-in network when no file is given.
pub fn load_network(edges: Option<&Path>) -> Result<Graph> {
    let graph = match edges {
        Some(path) => load_graph(path)
            .with_context(|| format!("failed to load edge list from {}", path.display()))?,
        None => builtin_graph().context("failed to build the built-in network")?,
    };
    info!(
        stations = graph.station_count(),
        edges = graph.edge_count(),
        "network loaded"
    );
    Ok(graph)
}

/// Run `request` against `graph` and print the result to stdout.
pub fn execute_query(graph: &Graph, request: &QueryRequest, format: OutputFormat) -> Result<()> {
    let plan = run_query(graph, request).map_err(|err| query_failure(graph, err))?;
    let summary = QuerySummary::from_plan(graph, &plan).context("failed to summarise query")?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    format.write_summary(&mut handle, &summary)?;
    handle.flush()?;
    Ok(())
}
