use std::path::PathBuf;

use thiserror::Error;

use crate::registry::StationId;

/// Convenient result alias for the transitnet library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a station label could not be found in the registry.
    #[error("unknown station name: {label}{}", format_suggestions(.suggestions))]
    UnknownStation {
        label: String,
        suggestions: Vec<String>,
    },

    /// Raised when resolving an identifier that was never assigned.
    #[error("no station has identifier {id}")]
    UnknownStationId { id: StationId },

    /// Raised when a query names a start or end station outside the registry.
    #[error("station identifier {id} is not part of the network")]
    InvalidStation { id: StationId },

    /// Raised when an edge cannot be inserted into the graph.
    #[error("invalid edge {from} -> {to}: {reason}")]
    InvalidEdge {
        from: String,
        to: String,
        reason: String,
    },

    /// Raised when breadth-first search exhausts the network without reaching the goal.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: StationId, goal: StationId },

    /// Raised when the goal never receives a finite distance during weighted search.
    #[error("station {goal} is unreachable from station {start}")]
    Unreachable { start: StationId, goal: StationId },

    /// Raised when an edge list row cannot be interpreted.
    #[error("failed to parse edge list {path} at line {line}: {message}")]
    EdgeListParse {
        path: PathBuf,
        line: u64,
        message: String,
    },

    /// Raised when a query summary is built from a plan with no stations.
    #[error("query plan was empty")]
    EmptyQueryPlan,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
