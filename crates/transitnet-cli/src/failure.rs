//! Friendly messages for library errors surfaced at the command line.

use transitnet_lib::{Error as QueryError, Graph, StationId};

/// Convert a query error into a user-facing [`anyhow::Error`].
///
/// Station lookups and unreachable goals get reworded with labels and hints;
/// everything else is passed through with its original message.
pub fn query_failure(graph: &Graph, err: QueryError) -> anyhow::Error {
    match err {
        QueryError::UnknownStation { label, suggestions } => {
            anyhow::anyhow!(format_unknown_station_message(&label, &suggestions))
        }
        QueryError::InvalidStation { id } | QueryError::UnknownStationId { id } => {
            anyhow::anyhow!(format_invalid_station_message(id))
        }
        QueryError::RouteNotFound { start, goal } | QueryError::Unreachable { start, goal } => {
            anyhow::anyhow!(format_no_route_message(graph, start, goal))
        }
        other => anyhow::Error::new(other),
    }
}

pub fn format_unknown_station_message(label: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown station '{label}'.");
    match suggestions {
        [] => {}
        [only] => {
            message.push_str(&format!(" Did you mean '{only}'?"));
        }
        many => {
            let joined = many
                .iter()
                .map(|s| format!("'{s}'"))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!(" Did you mean one of: {joined}?"));
        }
    }
    message
}

fn format_invalid_station_message(id: StationId) -> String {
    format!("Station number {id} is not part of the network. Run `transitnet stations` to list valid numbers.")
}

fn format_no_route_message(graph: &Graph, start: StationId, goal: StationId) -> String {
    let name = |id: StationId| {
        graph
            .label_of(id)
            .map(str::to_string)
            .unwrap_or_else(|_| id.to_string())
    };
    format!("No route found between {} and {}.", name(start), name(goal))
}
