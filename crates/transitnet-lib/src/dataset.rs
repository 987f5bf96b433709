//! Edge list sources: the built-in Delhi Metro network and CSV files.

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{build, EdgeWeights, Graph};

/// One row of an edge list: two station labels and the edge weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub distance: f64,
    pub travel_time: f64,
    pub cost: f64,
}

impl EdgeRecord {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        distance: f64,
        travel_time: f64,
        cost: f64,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
            travel_time,
            cost,
        }
    }

    pub fn weights(&self) -> EdgeWeights {
        EdgeWeights::new(self.distance, self.travel_time, self.cost)
    }
}

/// Station pairs of the built-in network with distance (km), travel time
/// (minutes) and fare (rupees). The `~` suffix lists the lines serving a station.
const DELHI_METRO: &[(&str, &str, f64, f64, f64)] = &[
    ("Noida Sector 62~B", "Botanical Garden~B", 8.0, 15.0, 50.0),
    ("Botanical Garden~B", "Yamuna Bank~B", 10.0, 20.0, 60.0),
    ("Yamuna Bank~B", "Vaishali~B", 8.0, 18.0, 55.0),
    ("Yamuna Bank~B", "Rajiv Chowk~BY", 6.0, 12.0, 45.0),
    ("Rajiv Chowk~BY", "Moti Nagar~B", 9.0, 22.0, 70.0),
    ("Moti Nagar~B", "Janak Puri West~BO", 7.0, 16.0, 52.0),
    ("Janak Puri West~BO", "Dwarka Sector 21~B", 6.0, 14.0, 48.0),
    ("Huda City Center~Y", "Saket~Y", 15.0, 30.0, 90.0),
    ("Saket~Y", "AIIMS~Y", 6.0, 13.0, 42.0),
    ("AIIMS~Y", "Rajiv Chowk~BY", 7.0, 15.0, 47.0),
    ("Rajiv Chowk~BY", "New Delhi~YO", 1.0, 5.0, 20.0),
    ("New Delhi~YO", "Chandni Chowk~Y", 2.0, 7.0, 25.0),
    ("Chandni Chowk~Y", "Vishwavidyalaya~Y", 5.0, 10.0, 35.0),
    ("New Delhi~YO", "Shivaji Stadium~O", 2.0, 6.0, 22.0),
    ("Shivaji Stadium~O", "DDS Campus~O", 7.0, 17.0, 55.0),
    ("DDS Campus~O", "IGI Airport~O", 8.0, 20.0, 65.0),
    ("Moti Nagar~B", "Rajouri Garden~BP", 2.0, 8.0, 30.0),
    ("Punjabi Bagh West~P", "Rajouri Garden~BP", 2.0, 8.0, 30.0),
    ("Punjabi Bagh West~P", "Netaji Subhash Place~PR", 3.0, 9.0, 32.0),
];

/// Edge list of the built-in Delhi Metro network.
pub fn builtin_edges() -> Vec<EdgeRecord> {
    DELHI_METRO
        .iter()
        .map(|&(from, to, distance, travel_time, cost)| {
            EdgeRecord::new(from, to, distance, travel_time, cost)
        })
        .collect()
}

/// Build the graph of the built-in network.
pub fn builtin_graph() -> Result<Graph> {
    build(&builtin_edges())
}

/// Read an edge list from a CSV file.
///
/// The file must start with a `from,to,distance,travel_time,cost` header.
/// Lines beginning with `#` are ignored and fields are trimmed.
pub fn load_edge_list(path: &Path) -> Result<Vec<EdgeRecord>> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut records = Vec::new();
    for row in reader.deserialize::<EdgeRecord>() {
        let record = row.map_err(|err| parse_error(path, &err))?;
        records.push(record);
    }

    debug!(path = %path.display(), edges = records.len(), "loaded edge list");
    Ok(records)
}

/// Read a CSV edge list and build its graph.
pub fn load_graph(path: &Path) -> Result<Graph> {
    build(&load_edge_list(path)?)
}

fn parse_error(path: &Path, err: &csv::Error) -> Error {
    Error::EdgeListParse {
        path: path.to_path_buf(),
        line: err.position().map(|pos| pos.line()).unwrap_or(0),
        message: match err.kind() {
            csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
            _ => err.to_string(),
        },
    }
}
