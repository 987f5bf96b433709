//! `route`: shortest path between two stations.

use std::str::FromStr;

use anyhow::Result;
use clap::{Args, ValueEnum};

use transitnet_cli::output::OutputFormat;
use transitnet_lib::{Graph, QueryAlgorithm, QueryRequest, StationRef};

/// Path algorithm selected with `--algorithm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PathAlgorithm {
    /// Fewest hops.
    Bfs,
    /// Shortest track distance.
    Dijkstra,
}

impl From<PathAlgorithm> for QueryAlgorithm {
    fn from(value: PathAlgorithm) -> Self {
        match value {
            PathAlgorithm::Bfs => QueryAlgorithm::Bfs,
            PathAlgorithm::Dijkstra => QueryAlgorithm::Dijkstra,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct RouteArgs {
    /// Starting station (number or name).
    #[arg(long = "from", value_parser = StationRef::from_str)]
    pub from: StationRef,
    /// Destination station (number or name).
    #[arg(long = "to", value_parser = StationRef::from_str)]
    pub to: StationRef,
    /// Algorithm used to find the path.
    #[arg(long, value_enum, default_value_t = PathAlgorithm::Dijkstra)]
    pub algorithm: PathAlgorithm,
}

pub fn handle_route_command(graph: &Graph, args: &RouteArgs, format: OutputFormat) -> Result<()> {
    let request = QueryRequest::new(args.algorithm.into(), args.from.clone(), args.to.clone());
    super::execute_query(graph, &request, format)
}
