//! `connect`: connector edges between two stations, by travel time or fare.

use std::str::FromStr;

use anyhow::Result;
use clap::{Args, ValueEnum};

use transitnet_cli::output::OutputFormat;
use transitnet_lib::{Graph, QueryAlgorithm, QueryRequest, StationRef};

/// Edge weight the connector is grown by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConnectBy {
    /// Travel time, Prim-style growth from the start station.
    Time,
    /// Fare, Kruskal-style merging of cheapest edges.
    Cost,
}

impl From<ConnectBy> for QueryAlgorithm {
    fn from(value: ConnectBy) -> Self {
        match value {
            ConnectBy::Time => QueryAlgorithm::Prim,
            ConnectBy::Cost => QueryAlgorithm::Kruskal,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ConnectArgs {
    /// Starting station (number or name).
    #[arg(long = "from", value_parser = StationRef::from_str)]
    pub from: StationRef,
    /// Destination station (number or name).
    #[arg(long = "to", value_parser = StationRef::from_str)]
    pub to: StationRef,
    /// Weight to minimise.
    #[arg(long, value_enum, default_value_t = ConnectBy::Time)]
    pub by: ConnectBy,
}

pub fn handle_connect_command(
    graph: &Graph,
    args: &ConnectArgs,
    format: OutputFormat,
) -> Result<()> {
    let request = QueryRequest::new(args.by.into(), args.from.clone(), args.to.clone());
    super::execute_query(graph, &request, format)
}
