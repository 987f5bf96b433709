//! Query orchestration over a built [`Graph`].
//!
//! This module provides:
//! - [`QueryAlgorithm`] - the four supported queries
//! - [`StationRef`] - a station named by identifier or label
//! - [`QueryRequest`] / [`QueryPlan`] - request and result of [`run_query`]
//! - the validated entry points [`shortest_path_unweighted`],
//!   [`shortest_path_weighted`], [`connecting_walk_by_time`] and
//!   [`connecting_forest_by_cost`]
//!
//! # Strategy Pattern
//!
//! Each algorithm is wrapped in a [`QueryPlanner`] implementation and
//! [`select_planner`] picks the one matching a request, so [`run_query`] only
//! resolves stations and dispatches.
//!
//! # Example
//!
//! ```ignore
//! use transitnet_lib::{builtin_graph, run_query, QueryRequest};
//!
//! let graph = builtin_graph()?;
//! let request = QueryRequest::dijkstra("Rajiv Chowk~BY", "IGI Airport~O");
//! let plan = run_query(&graph, &request)?;
//! println!("{} hops", plan.hop_count());
//! ```

mod planner;

pub use planner::{
    select_planner, BfsPlanner, CostConnectorPlanner, DijkstraPlanner, QueryPlanner,
    TimeConnectorPlanner,
};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::connector::{connect_by_cost, connect_by_time, Connector};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::path::{find_route_bfs, find_route_dijkstra};
use crate::registry::StationId;

/// Supported queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QueryAlgorithm {
    /// Breadth-first search, fewest hops.
    Bfs,
    /// Dijkstra's algorithm over track distance.
    #[default]
    Dijkstra,
    /// Prim-style connector ordered by travel time.
    Prim,
    /// Kruskal-style connector ordered by fare.
    Kruskal,
}

impl QueryAlgorithm {
    /// Whether the query yields a station path rather than a connector edge set.
    pub fn yields_path(self) -> bool {
        matches!(self, QueryAlgorithm::Bfs | QueryAlgorithm::Dijkstra)
    }
}

impl fmt::Display for QueryAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            QueryAlgorithm::Bfs => "bfs",
            QueryAlgorithm::Dijkstra => "dijkstra",
            QueryAlgorithm::Prim => "prim",
            QueryAlgorithm::Kruskal => "kruskal",
        };
        f.write_str(value)
    }
}

/// A station given either by identifier or by label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StationRef {
    Id(StationId),
    Label(String),
}

impl StationRef {
    /// Resolve to an identifier that is known to the graph.
    ///
    /// An identifier the graph never assigned is retried as a label, so a
    /// station named `"5"` stays addressable. Assigned identifiers win.
    pub fn resolve(&self, graph: &Graph) -> Result<StationId> {
        match self {
            StationRef::Id(id) if graph.contains(*id) => Ok(*id),
            StationRef::Id(id) => graph
                .station_id(&id.to_string())
                .ok_or(Error::InvalidStation { id: *id }),
            StationRef::Label(label) => graph.require_station(label),
        }
    }
}

impl FromStr for StationRef {
    type Err = std::convert::Infallible;

    /// Numeric input is treated as an identifier, anything else as a label.
    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = value.trim();
        Ok(match trimmed.parse::<StationId>() {
            Ok(id) => StationRef::Id(id),
            Err(_) => StationRef::Label(trimmed.to_string()),
        })
    }
}

impl From<StationId> for StationRef {
    fn from(id: StationId) -> Self {
        StationRef::Id(id)
    }
}

impl From<&str> for StationRef {
    fn from(label: &str) -> Self {
        StationRef::Label(label.to_string())
    }
}

impl From<String> for StationRef {
    fn from(label: String) -> Self {
        StationRef::Label(label)
    }
}

impl fmt::Display for StationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StationRef::Id(id) => write!(f, "{id}"),
            StationRef::Label(label) => f.write_str(label),
        }
    }
}

/// High-level query request.
#[derive(Debug, Clone)]
pub struct QueryRequest {
    pub start: StationRef,
    pub goal: StationRef,
    pub algorithm: QueryAlgorithm,
}

impl QueryRequest {
    pub fn new(
        algorithm: QueryAlgorithm,
        start: impl Into<StationRef>,
        goal: impl Into<StationRef>,
    ) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm,
        }
    }

    /// Convenience constructor for breadth-first queries.
    pub fn bfs(start: impl Into<StationRef>, goal: impl Into<StationRef>) -> Self {
        Self::new(QueryAlgorithm::Bfs, start, goal)
    }

    /// Convenience constructor for Dijkstra queries.
    pub fn dijkstra(start: impl Into<StationRef>, goal: impl Into<StationRef>) -> Self {
        Self::new(QueryAlgorithm::Dijkstra, start, goal)
    }
}

/// Result of a single query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QueryOutcome {
    /// Ordered stations from start to goal. `total_distance` is only set by Dijkstra.
    Path {
        steps: Vec<StationId>,
        #[serde(skip_serializing_if = "Option::is_none")]
        total_distance: Option<f64>,
    },
    /// Edges chosen by a bounded connector.
    Connector(Connector),
}

/// Planned query returned by [`run_query`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryPlan {
    pub algorithm: QueryAlgorithm,
    pub start: StationId,
    pub goal: StationId,
    pub outcome: QueryOutcome,
}

impl QueryPlan {
    /// Stations along the path, empty for connector queries.
    pub fn steps(&self) -> &[StationId] {
        match &self.outcome {
            QueryOutcome::Path { steps, .. } => steps,
            QueryOutcome::Connector(_) => &[],
        }
    }

    /// Number of hops in a path, or of edges in a connector.
    pub fn hop_count(&self) -> usize {
        match &self.outcome {
            QueryOutcome::Path { steps, .. } => steps.len().saturating_sub(1),
            QueryOutcome::Connector(connector) => connector.len(),
        }
    }

    /// Total distance for Dijkstra, summed selection weight for connectors.
    pub fn total(&self) -> Option<f64> {
        match &self.outcome {
            QueryOutcome::Path { total_distance, .. } => *total_distance,
            QueryOutcome::Connector(connector) => Some(connector.total_weight()),
        }
    }
}

/// Resolve the request's stations and run the selected query.
pub fn run_query(graph: &Graph, request: &QueryRequest) -> Result<QueryPlan> {
    let start = request.start.resolve(graph)?;
    let goal = request.goal.resolve(graph)?;

    let planner = select_planner(request.algorithm);
    debug!(algorithm = %planner.algorithm(), start, goal, "running query");
    let outcome = planner.plan(graph, start, goal)?;

    Ok(QueryPlan {
        algorithm: planner.algorithm(),
        start,
        goal,
        outcome,
    })
}

/// Fewest-hop path between two stations.
pub fn shortest_path_unweighted(
    graph: &Graph,
    start: StationId,
    goal: StationId,
) -> Result<Vec<StationId>> {
    ensure_endpoints(graph, start, goal)?;
    find_route_bfs(graph, start, goal).ok_or(Error::RouteNotFound { start, goal })
}

/// Shortest path by distance, with its total distance.
pub fn shortest_path_weighted(
    graph: &Graph,
    start: StationId,
    goal: StationId,
) -> Result<(Vec<StationId>, f64)> {
    ensure_endpoints(graph, start, goal)?;
    find_route_dijkstra(graph, start, goal).ok_or(Error::Unreachable { start, goal })
}

/// Travel-time connector from `start` bounded by `goal`. Never fails on disconnection.
pub fn connecting_walk_by_time(
    graph: &Graph,
    start: StationId,
    goal: StationId,
) -> Result<Connector> {
    ensure_endpoints(graph, start, goal)?;
    Ok(connect_by_time(graph, start, goal))
}

/// Fare connector joining `start` and `goal`. Never fails on disconnection.
pub fn connecting_forest_by_cost(
    graph: &Graph,
    start: StationId,
    goal: StationId,
) -> Result<Connector> {
    ensure_endpoints(graph, start, goal)?;
    Ok(connect_by_cost(graph, start, goal))
}

fn ensure_endpoints(graph: &Graph, start: StationId, goal: StationId) -> Result<()> {
    ensure_station(graph, start)?;
    ensure_station(graph, goal)
}

fn ensure_station(graph: &Graph, id: StationId) -> Result<()> {
    if graph.contains(id) {
        Ok(())
    } else {
        Err(Error::InvalidStation { id })
    }
}
