//! Common test utilities and fixture graphs shared by the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use transitnet_lib::{build, EdgeRecord, Graph, StationId};

/// Two edges from the worked example: A-B (8 km, 15 min, 50) and B-C (10 km, 20 min, 60).
pub fn line_graph() -> Graph {
    build(&[
        EdgeRecord::new("A", "B", 8.0, 15.0, 50.0),
        EdgeRecord::new("B", "C", 10.0, 20.0, 60.0),
    ])
    .expect("line fixture builds")
}

/// Five stations with a short-but-slow branch (A-B-E) and a long-but-fast,
/// cheap branch (A-C-D-E), plus an expensive shortcut A-D.
///
/// Identifiers in insertion order: A=10, B=11, E=12, C=13, D=14.
pub fn loop_edges() -> Vec<EdgeRecord> {
    vec![
        EdgeRecord::new("A", "B", 1.0, 10.0, 9.0),
        EdgeRecord::new("B", "E", 1.0, 10.0, 9.0),
        EdgeRecord::new("A", "C", 4.0, 2.0, 1.0),
        EdgeRecord::new("C", "D", 4.0, 2.0, 1.0),
        EdgeRecord::new("D", "E", 4.0, 2.0, 1.0),
        EdgeRecord::new("A", "D", 10.0, 30.0, 50.0),
    ]
}

pub fn loop_graph() -> Graph {
    build(&loop_edges()).expect("loop fixture builds")
}

/// The loop fixture plus an isolated pair F-G (F=15, G=16).
pub fn split_graph() -> Graph {
    let mut edges = loop_edges();
    edges.push(EdgeRecord::new("F", "G", 1.0, 1.0, 1.0));
    build(&edges).expect("split fixture builds")
}

/// Lookup an identifier the fixture is known to contain.
pub fn id(graph: &Graph, label: &str) -> StationId {
    graph
        .station_id(label)
        .unwrap_or_else(|| panic!("fixture station {label} exists"))
}

/// Write `contents` to a CSV file inside a fresh temporary directory.
pub fn write_edge_csv(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("create temp dir");
    let path = temp_dir.path().join("edges.csv");
    fs::write(&path, contents).expect("write edge csv");
    (temp_dir, path)
}

/// All-pairs shortest distances by Floyd-Warshall, used as a reference oracle.
///
/// With `unit` set every edge counts as one hop.
pub fn all_pairs(graph: &Graph, unit: bool) -> Vec<(StationId, StationId, f64)> {
    let ids: Vec<StationId> = graph.registry().iter().map(|(id, _)| id).collect();
    let n = ids.len();
    let mut dist = vec![vec![f64::INFINITY; n]; n];
    for (i, &a) in ids.iter().enumerate() {
        dist[i][i] = 0.0;
        for (j, &b) in ids.iter().enumerate() {
            if let Some(weights) = graph.edge(a, b) {
                dist[i][j] = if unit { 1.0 } else { weights.distance };
            }
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let through = dist[i][k] + dist[k][j];
                if through < dist[i][j] {
                    dist[i][j] = through;
                }
            }
        }
    }

    let mut pairs = Vec::new();
    for (i, &a) in ids.iter().enumerate() {
        for (j, &b) in ids.iter().enumerate() {
            pairs.push((a, b, dist[i][j]));
        }
    }
    pairs
}
