//! transitnet library entry points.
//!
//! This crate builds an immutable weighted transit graph from a list of
//! labelled edges and answers four queries over it: fewest-hop paths,
//! shortest-distance paths, and two bounded greedy connectors (by travel
//! time and by fare). Higher-level consumers (the CLI) should only depend on
//! the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod connector;
pub mod dataset;
pub mod disjoint_set;
pub mod error;
pub mod graph;
pub mod output;
pub mod path;
pub mod query;
pub mod registry;

pub use connector::{connect_by_cost, connect_by_time, Connector, ConnectorEdge, ConnectorWeight};
pub use dataset::{builtin_edges, builtin_graph, load_edge_list, load_graph, EdgeRecord};
pub use disjoint_set::DisjointSet;
pub use error::{Error, Result};
pub use graph::{build, Edge, EdgeWeights, Graph, GraphBuilder};
pub use output::{QueryRenderMode, QuerySummary};
pub use path::{find_route_bfs, find_route_dijkstra};
pub use query::{
    connecting_forest_by_cost, connecting_walk_by_time, run_query, shortest_path_unweighted,
    shortest_path_weighted, QueryAlgorithm, QueryOutcome, QueryPlan, QueryRequest, StationRef,
};
pub use registry::{StationId, StationRegistry, FIRST_STATION_ID};
