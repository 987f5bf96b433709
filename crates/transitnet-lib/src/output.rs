use std::fmt::Write;

use serde::Serialize;

use crate::connector::ConnectorWeight;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::query::{QueryAlgorithm, QueryOutcome, QueryPlan};
use crate::registry::StationId;

/// Presentation style for turning a [`QuerySummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryRenderMode {
    /// Sentence-style output naming the algorithm and totals.
    PlainText,
    /// One station (or edge) per line with `+`/`|`/`-` markers.
    Basic,
}

/// Station referenced by a summary.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct QueryEndpoint {
    pub id: StationId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl QueryEndpoint {
    fn resolve(graph: &Graph, id: StationId) -> Self {
        Self {
            id,
            name: graph.label_of(id).ok().map(str::to_string),
        }
    }

    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Station visited along a path.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct QueryStep {
    pub index: usize,
    pub id: StationId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl QueryStep {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Edge chosen by a connector, with resolved station names.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConnectorStep {
    pub from: QueryEndpoint,
    pub to: QueryEndpoint,
    pub weight: f64,
}

/// Structured representation of a query result that callers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QuerySummary {
    pub algorithm: QueryAlgorithm,
    pub hops: usize,
    pub start: QueryEndpoint,
    pub goal: QueryEndpoint,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<QueryStep>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<ConnectorStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_travel_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    /// Whether the result actually connects `start` to `goal`.
    pub goal_reached: bool,
}

impl QuerySummary {
    /// Convert a [`QueryPlan`] into a summary with resolved station names.
    pub fn from_plan(graph: &Graph, plan: &QueryPlan) -> Result<Self> {
        let mut summary = Self {
            algorithm: plan.algorithm,
            hops: plan.hop_count(),
            start: QueryEndpoint::resolve(graph, plan.start),
            goal: QueryEndpoint::resolve(graph, plan.goal),
            steps: Vec::new(),
            edges: Vec::new(),
            total_distance: None,
            total_travel_time: None,
            total_cost: None,
            goal_reached: false,
        };

        match &plan.outcome {
            QueryOutcome::Path {
                steps,
                total_distance,
            } => {
                if steps.is_empty() {
                    return Err(Error::EmptyQueryPlan);
                }
                summary.steps = steps
                    .iter()
                    .enumerate()
                    .map(|(index, &id)| QueryStep {
                        index,
                        id,
                        name: graph.label_of(id).ok().map(str::to_string),
                    })
                    .collect();
                summary.total_distance = *total_distance;
                summary.goal_reached = steps.last() == Some(&plan.goal);
            }
            QueryOutcome::Connector(connector) => {
                summary.edges = connector
                    .edges
                    .iter()
                    .map(|edge| ConnectorStep {
                        from: QueryEndpoint::resolve(graph, edge.from),
                        to: QueryEndpoint::resolve(graph, edge.to),
                        weight: edge.weight,
                    })
                    .collect();
                let total = Some(connector.total_weight());
                match connector.weight {
                    ConnectorWeight::TravelTime => summary.total_travel_time = total,
                    ConnectorWeight::Cost => summary.total_cost = total,
                }
                summary.goal_reached = plan.start == plan.goal
                    || connector
                        .component_of(plan.start)
                        .iter()
                        .any(|edge| edge.from == plan.goal || edge.to == plan.goal);
            }
        }

        Ok(summary)
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: QueryRenderMode) -> String {
        match mode {
            QueryRenderMode::PlainText => self.render_plain(),
            QueryRenderMode::Basic => self.render_basic(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let start = self.start.display_name();
        let goal = self.goal.display_name();

        match self.algorithm {
            QueryAlgorithm::Bfs | QueryAlgorithm::Dijkstra => {
                let joined = self
                    .steps
                    .iter()
                    .map(QueryStep::display_name)
                    .collect::<Vec<_>>()
                    .join(" -> ");
                let _ = writeln!(
                    buffer,
                    "Shortest path using {}: {joined}",
                    algorithm_title(self.algorithm)
                );
                let _ = writeln!(buffer, "Stations: {} ({} hops)", self.steps.len(), self.hops);
                if let Some(distance) = self.total_distance {
                    let _ = writeln!(buffer, "Total distance: {} km", format_number(distance));
                }
            }
            QueryAlgorithm::Prim | QueryAlgorithm::Kruskal => {
                let _ = writeln!(
                    buffer,
                    "Connector using {} from {start} to {goal} ({} edges):",
                    algorithm_title(self.algorithm),
                    self.edges.len()
                );
                for edge in &self.edges {
                    let _ = writeln!(
                        buffer,
                        " - {} -> {} ({})",
                        edge.from.display_name(),
                        edge.to.display_name(),
                        format_number(edge.weight)
                    );
                }
                if let Some(time) = self.total_travel_time {
                    let _ = writeln!(buffer, "Total travel time: {} minutes", format_number(time));
                }
                if let Some(cost) = self.total_cost {
                    let _ = writeln!(buffer, "Total cost: ₹{}", format_number(cost));
                }
                if !self.goal_reached {
                    let _ = writeln!(buffer, "Warning: {goal} is not connected to {start}");
                }
            }
        }

        buffer
    }

    fn render_basic(&self) -> String {
        let mut buffer = String::new();
        if self.algorithm.yields_path() {
            let len = self.steps.len();
            for (i, step) in self.steps.iter().enumerate() {
                let prefix = if i == 0 {
                    '+'
                } else if i + 1 == len {
                    '-'
                } else {
                    '|'
                };
                let _ = writeln!(buffer, "{} {}", prefix, step.display_name());
            }
        } else {
            for edge in &self.edges {
                let _ = writeln!(
                    buffer,
                    "{} {} {}",
                    edge.from.display_name(),
                    edge.to.display_name(),
                    format_number(edge.weight)
                );
            }
        }
        buffer
    }
}

fn algorithm_title(algorithm: QueryAlgorithm) -> &'static str {
    match algorithm {
        QueryAlgorithm::Bfs => "BFS",
        QueryAlgorithm::Dijkstra => "Dijkstra's algorithm",
        QueryAlgorithm::Prim => "Prim's algorithm (shortest time)",
        QueryAlgorithm::Kruskal => "Kruskal's algorithm (minimum cost)",
    }
}

/// Print whole numbers without a fractional part.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}
