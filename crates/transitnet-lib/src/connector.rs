//! Bounded greedy connectors.
//!
//! Both traversals grow a set of edges until `start` and `goal` are joined and
//! then stop. The result is the part of a spanning tree around `start` needed
//! to connect the two stations, not a minimum spanning tree of the network.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::disjoint_set::DisjointSet;
use crate::graph::{EdgeWeights, Graph};
use crate::path::FloatOrd;
use crate::registry::StationId;

/// Edge attribute a connector selects by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorWeight {
    TravelTime,
    Cost,
}

impl ConnectorWeight {
    fn of(self, weights: &EdgeWeights) -> f64 {
        match self {
            ConnectorWeight::TravelTime => weights.travel_time,
            ConnectorWeight::Cost => weights.cost,
        }
    }
}

impl fmt::Display for ConnectorWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            ConnectorWeight::TravelTime => "travel_time",
            ConnectorWeight::Cost => "cost",
        };
        f.write_str(value)
    }
}

/// Edge chosen by a connector, carrying the weight it was selected by.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConnectorEdge {
    pub from: StationId,
    pub to: StationId,
    pub weight: f64,
}

impl ConnectorEdge {
    fn touches(&self, station: StationId) -> bool {
        self.from == station || self.to == station
    }
}

/// Edges selected by a bounded connector, in selection order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connector {
    pub weight: ConnectorWeight,
    pub edges: Vec<ConnectorEdge>,
}

impl Connector {
    fn empty(weight: ConnectorWeight) -> Self {
        Self {
            weight,
            edges: Vec::new(),
        }
    }

    /// Sum of the selection weights of all chosen edges.
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|edge| edge.weight).sum()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn contains_station(&self, station: StationId) -> bool {
        self.edges.iter().any(|edge| edge.touches(station))
    }

    /// Edges reachable from `station` through other chosen edges.
    pub fn component_of(&self, station: StationId) -> Vec<ConnectorEdge> {
        let mut reached: HashSet<StationId> = HashSet::from([station]);
        let mut taken = vec![false; self.edges.len()];
        let mut grew = true;
        while grew {
            grew = false;
            for (index, edge) in self.edges.iter().enumerate() {
                if taken[index] {
                    continue;
                }
                if reached.contains(&edge.from) || reached.contains(&edge.to) {
                    reached.insert(edge.from);
                    reached.insert(edge.to);
                    taken[index] = true;
                    grew = true;
                }
            }
        }

        self.edges
            .iter()
            .zip(taken)
            .filter_map(|(edge, keep)| keep.then_some(*edge))
            .collect()
    }
}

/// Grow a tree from `start` by cheapest travel time until `goal` is reached.
///
/// Candidate edges are kept in a min-heap keyed by `travel_time`. When `goal`
/// is not reachable the tree spanning `start`'s component is returned.
pub fn connect_by_time(graph: &Graph, start: StationId, goal: StationId) -> Connector {
    let weight = ConnectorWeight::TravelTime;
    let mut connector = Connector::empty(weight);
    if start == goal {
        return connector;
    }

    let mut visited = HashSet::from([start]);
    let mut frontier = BinaryHeap::new();
    push_candidates(graph, weight, &visited, &mut frontier, start);

    while let Some(candidate) = frontier.pop() {
        if !visited.insert(candidate.to) {
            continue;
        }

        connector.edges.push(ConnectorEdge {
            from: candidate.from,
            to: candidate.to,
            weight: candidate.weight.0,
        });

        if candidate.to == goal {
            break;
        }
        push_candidates(graph, weight, &visited, &mut frontier, candidate.to);
    }

    debug!(
        start,
        goal,
        edges = connector.len(),
        reached = visited.contains(&goal),
        "time connector finished"
    );
    connector
}

/// Join components by cheapest fare until `start` and `goal` share one.
///
/// Every undirected edge is considered once, in ascending cost order. Edges
/// merged elsewhere in the network are dropped from the result, so only the
/// tree grown around `start` is returned. When the two stations never unify,
/// that tree spans the whole component of `start`.
pub fn connect_by_cost(graph: &Graph, start: StationId, goal: StationId) -> Connector {
    let weight = ConnectorWeight::Cost;
    let mut connector = Connector::empty(weight);
    if start == goal {
        return connector;
    }

    let mut edges = graph.edges();
    edges.sort_by(|x, y| {
        x.weights
            .cost
            .total_cmp(&y.weights.cost)
            .then_with(|| (x.a, x.b).cmp(&(y.a, y.b)))
    });

    let mut components = DisjointSet::new();
    let mut joined = false;
    for edge in edges {
        if !components.union(edge.a, edge.b) {
            continue;
        }

        connector.edges.push(ConnectorEdge {
            from: edge.a,
            to: edge.b,
            weight: weight.of(&edge.weights),
        });

        if components.same_set(start, goal) {
            joined = true;
            break;
        }
    }

    let merged = connector.len();
    connector.edges = connector.component_of(start);

    debug!(
        start,
        goal,
        merged,
        edges = connector.len(),
        joined,
        "cost connector finished"
    );
    connector
}

fn push_candidates(
    graph: &Graph,
    weight: ConnectorWeight,
    visited: &HashSet<StationId>,
    frontier: &mut BinaryHeap<Candidate>,
    from: StationId,
) {
    for (&to, weights) in graph.neighbours(from) {
        if !visited.contains(&to) {
            frontier.push(Candidate {
                weight: FloatOrd(weight.of(weights)),
                from,
                to,
            });
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Candidate {
    weight: FloatOrd,
    from: StationId,
    to: StationId,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap pops the lightest candidate first.
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.to.cmp(&self.to))
            .then_with(|| other.from.cmp(&self.from))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
