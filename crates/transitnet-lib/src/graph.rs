use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::dataset::EdgeRecord;
use crate::error::{Error, Result};
use crate::registry::{StationId, StationRegistry};

/// The three independent weights carried by every edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeWeights {
    /// Track length in kilometres.
    pub distance: f64,
    /// Travel time in minutes.
    pub travel_time: f64,
    /// Fare in rupees.
    pub cost: f64,
}

impl EdgeWeights {
    pub fn new(distance: f64, travel_time: f64, cost: f64) -> Self {
        Self {
            distance,
            travel_time,
            cost,
        }
    }

    fn invalid_field(&self) -> Option<(&'static str, f64)> {
        [
            ("distance", self.distance),
            ("travel_time", self.travel_time),
            ("cost", self.cost),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite() || *value <= 0.0)
    }
}

/// Undirected edge reported once per station pair, with `a < b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub a: StationId,
    pub b: StationId,
    pub weights: EdgeWeights,
}

/// Neighbour map of a single station, ordered by neighbour identifier.
pub type Neighbours = BTreeMap<StationId, EdgeWeights>;

static NO_NEIGHBOURS: Neighbours = BTreeMap::new();

/// Immutable weighted graph used by the path and connector queries.
///
/// Cloning is cheap; the adjacency and registry are shared.
#[derive(Debug, Clone)]
pub struct Graph {
    registry: Arc<StationRegistry>,
    adjacency: Arc<HashMap<StationId, Neighbours>>,
}

impl Graph {
    /// Return the neighbours for a given station identifier.
    ///
    /// Unknown or isolated stations yield an empty map.
    pub fn neighbours(&self, station: StationId) -> &Neighbours {
        self.adjacency.get(&station).unwrap_or(&NO_NEIGHBOURS)
    }

    /// Weights of the edge between `a` and `b`, if one exists.
    pub fn edge(&self, a: StationId, b: StationId) -> Option<EdgeWeights> {
        self.neighbours(a).get(&b).copied()
    }

    /// Every undirected edge exactly once, ordered by endpoint identifiers.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self
            .adjacency
            .iter()
            .flat_map(|(&a, neighbours)| {
                neighbours
                    .iter()
                    .filter(move |(b, _)| a < **b)
                    .map(move |(&b, &weights)| Edge { a, b, weights })
            })
            .collect();
        edges.sort_by_key(|edge| (edge.a, edge.b));
        edges
    }

    pub fn station_count(&self) -> usize {
        self.registry.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum::<usize>() / 2
    }

    /// Whether `station` was registered while building the graph.
    pub fn contains(&self, station: StationId) -> bool {
        self.registry.contains(station)
    }

    pub fn registry(&self) -> &StationRegistry {
        &self.registry
    }

    /// Lookup the label of a station.
    pub fn label_of(&self, station: StationId) -> Result<&str> {
        self.registry.resolve(station)
    }

    /// Lookup a station identifier by its case-sensitive label.
    pub fn station_id(&self, label: &str) -> Option<StationId> {
        self.registry.id_of(label)
    }

    /// Resolve a label, attaching fuzzy suggestions when it is unknown.
    pub fn require_station(&self, label: &str) -> Result<StationId> {
        self.station_id(label).ok_or_else(|| Error::UnknownStation {
            label: label.to_string(),
            suggestions: self.registry.fuzzy_matches(label, 3),
        })
    }
}

/// Accumulates edges and station labels before freezing them into a [`Graph`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    registry: StationRegistry,
    adjacency: HashMap<StationId, Neighbours>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an undirected edge between two labelled stations.
    ///
    /// Both labels are registered on first sight. An existing edge between the
    /// same pair is replaced in both directions.
    pub fn insert_edge(&mut self, from: &str, to: &str, weights: EdgeWeights) -> Result<()> {
        if from == to {
            return Err(Error::InvalidEdge {
                from: from.to_string(),
                to: to.to_string(),
                reason: "self-loops are not allowed".to_string(),
            });
        }
        if let Some((field, value)) = weights.invalid_field() {
            return Err(Error::InvalidEdge {
                from: from.to_string(),
                to: to.to_string(),
                reason: format!("{field} must be a positive finite number, got {value}"),
            });
        }

        let a = self.registry.assign(from);
        let b = self.registry.assign(to);

        let previous = self.adjacency.entry(a).or_default().insert(b, weights);
        self.adjacency.entry(b).or_default().insert(a, weights);

        if previous.is_some() {
            warn!(from, to, "duplicate edge replaced earlier weights");
        }
        Ok(())
    }

    /// Register a station that may have no edges.
    pub fn insert_station(&mut self, label: &str) -> StationId {
        self.registry.assign(label)
    }

    pub fn build(self) -> Graph {
        let graph = Graph {
            registry: Arc::new(self.registry),
            adjacency: Arc::new(self.adjacency),
        };
        debug!(
            stations = graph.station_count(),
            edges = graph.edge_count(),
            "built transit graph"
        );
        graph
    }
}

/// Build a graph from a list of edge records.
pub fn build(edges: &[EdgeRecord]) -> Result<Graph> {
    let mut builder = GraphBuilder::new();
    for record in edges {
        builder.insert_edge(&record.from, &record.to, record.weights())?;
    }
    Ok(builder.build())
}
