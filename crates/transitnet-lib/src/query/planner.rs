//! Query strategies implementing the Strategy pattern.
//!
//! Each [`QueryPlanner`] wraps one algorithm and turns its raw result into a
//! [`QueryOutcome`], so new queries can be added without touching
//! [`run_query`](super::run_query).

use crate::error::Result;
use crate::graph::Graph;
use crate::registry::StationId;

use super::{
    connecting_forest_by_cost, connecting_walk_by_time, shortest_path_unweighted,
    shortest_path_weighted, QueryAlgorithm, QueryOutcome,
};

/// Trait for query strategies.
pub trait QueryPlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> QueryAlgorithm;

    /// Execute the query between two stations known to `graph`.
    fn plan(&self, graph: &Graph, start: StationId, goal: StationId) -> Result<QueryOutcome>;
}

/// Breadth-first search planner; finds the path with the fewest hops.
#[derive(Debug, Clone, Default)]
pub struct BfsPlanner;

impl QueryPlanner for BfsPlanner {
    fn algorithm(&self) -> QueryAlgorithm {
        QueryAlgorithm::Bfs
    }

    fn plan(&self, graph: &Graph, start: StationId, goal: StationId) -> Result<QueryOutcome> {
        let steps = shortest_path_unweighted(graph, start, goal)?;
        Ok(QueryOutcome::Path {
            steps,
            total_distance: None,
        })
    }
}

/// Dijkstra planner; minimises summed track distance.
#[derive(Debug, Clone, Default)]
pub struct DijkstraPlanner;

impl QueryPlanner for DijkstraPlanner {
    fn algorithm(&self) -> QueryAlgorithm {
        QueryAlgorithm::Dijkstra
    }

    fn plan(&self, graph: &Graph, start: StationId, goal: StationId) -> Result<QueryOutcome> {
        let (steps, distance) = shortest_path_weighted(graph, start, goal)?;
        Ok(QueryOutcome::Path {
            steps,
            total_distance: Some(distance),
        })
    }
}

/// Prim-style connector planner keyed by travel time.
#[derive(Debug, Clone, Default)]
pub struct TimeConnectorPlanner;

impl QueryPlanner for TimeConnectorPlanner {
    fn algorithm(&self) -> QueryAlgorithm {
        QueryAlgorithm::Prim
    }

    fn plan(&self, graph: &Graph, start: StationId, goal: StationId) -> Result<QueryOutcome> {
        connecting_walk_by_time(graph, start, goal).map(QueryOutcome::Connector)
    }
}

/// Kruskal-style connector planner keyed by fare.
#[derive(Debug, Clone, Default)]
pub struct CostConnectorPlanner;

impl QueryPlanner for CostConnectorPlanner {
    fn algorithm(&self) -> QueryAlgorithm {
        QueryAlgorithm::Kruskal
    }

    fn plan(&self, graph: &Graph, start: StationId, goal: StationId) -> Result<QueryOutcome> {
        connecting_forest_by_cost(graph, start, goal).map(QueryOutcome::Connector)
    }
}

/// Select the planner for an algorithm.
pub fn select_planner(algorithm: QueryAlgorithm) -> Box<dyn QueryPlanner> {
    match algorithm {
        QueryAlgorithm::Bfs => Box::new(BfsPlanner),
        QueryAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
        QueryAlgorithm::Prim => Box::new(TimeConnectorPlanner),
        QueryAlgorithm::Kruskal => Box::new(CostConnectorPlanner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_planner_chooses_correct_type() {
        for algorithm in [
            QueryAlgorithm::Bfs,
            QueryAlgorithm::Dijkstra,
            QueryAlgorithm::Prim,
            QueryAlgorithm::Kruskal,
        ] {
            assert_eq!(select_planner(algorithm).algorithm(), algorithm);
        }
    }

    #[test]
    fn path_planners_yield_paths() {
        assert!(QueryAlgorithm::Bfs.yields_path());
        assert!(QueryAlgorithm::Dijkstra.yields_path());
        assert!(!QueryAlgorithm::Prim.yields_path());
        assert!(!QueryAlgorithm::Kruskal.yields_path());
    }
}
