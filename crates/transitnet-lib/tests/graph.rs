mod common;

use transitnet_lib::{
    build, builtin_graph, EdgeRecord, EdgeWeights, Error, GraphBuilder, FIRST_STATION_ID,
};

use common::{id, line_graph, loop_graph};

#[test]
fn identifiers_follow_first_seen_order() {
    let graph = loop_graph();
    let labels: Vec<_> = graph
        .registry()
        .iter()
        .map(|(id, label)| (id, label.to_string()))
        .collect();

    assert_eq!(
        labels,
        vec![
            (10, "A".to_string()),
            (11, "B".to_string()),
            (12, "E".to_string()),
            (13, "C".to_string()),
            (14, "D".to_string()),
        ]
    );
    assert_eq!(graph.station_count(), 5);
    assert_eq!(graph.edge_count(), 6);
}

#[test]
fn edges_are_symmetric() {
    let graph = line_graph();
    let a = id(&graph, "A");
    let b = id(&graph, "B");

    let forward = graph.edge(a, b).expect("A-B present");
    let backward = graph.edge(b, a).expect("B-A present");
    assert_eq!(forward, backward);
    assert_eq!(forward, EdgeWeights::new(8.0, 15.0, 50.0));
}

#[test]
fn reinserting_a_pair_overwrites_both_directions() {
    let mut builder = GraphBuilder::new();
    builder
        .insert_edge("A", "B", EdgeWeights::new(1.0, 1.0, 1.0))
        .unwrap();
    builder
        .insert_edge("B", "A", EdgeWeights::new(2.0, 3.0, 4.0))
        .unwrap();
    let graph = builder.build();

    let a = id(&graph, "A");
    let b = id(&graph, "B");
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge(a, b), Some(EdgeWeights::new(2.0, 3.0, 4.0)));
    assert_eq!(graph.edge(b, a), Some(EdgeWeights::new(2.0, 3.0, 4.0)));
}

#[test]
fn edges_lists_each_pair_once() {
    let graph = loop_graph();
    let edges = graph.edges();

    assert_eq!(edges.len(), 6);
    assert!(edges.iter().all(|edge| edge.a < edge.b));
    let mut pairs: Vec<_> = edges.iter().map(|edge| (edge.a, edge.b)).collect();
    pairs.dedup();
    assert_eq!(pairs.len(), 6);
}

#[test]
fn neighbours_of_unknown_station_is_empty() {
    let graph = line_graph();
    assert!(graph.neighbours(9999).is_empty());

    let mut builder = GraphBuilder::new();
    let lonely = builder.insert_station("Lonely");
    let graph = builder.build();
    assert!(graph.contains(lonely));
    assert!(graph.neighbours(lonely).is_empty());
}

#[test]
fn label_of_unknown_identifier_is_not_found() {
    let graph = line_graph();
    assert_eq!(graph.label_of(FIRST_STATION_ID).unwrap(), "A");

    let err = graph.label_of(9999).expect_err("unknown id");
    assert!(matches!(err, Error::UnknownStationId { id: 9999 }));
}

#[test]
fn non_positive_weights_are_rejected() {
    let err = build(&[EdgeRecord::new("A", "B", 0.0, 1.0, 1.0)]).expect_err("zero distance");
    assert!(format!("{err}").contains("distance must be a positive finite number"));

    let err = build(&[EdgeRecord::new("A", "B", 1.0, f64::NAN, 1.0)]).expect_err("nan time");
    assert!(format!("{err}").contains("travel_time"));

    let err = build(&[EdgeRecord::new("A", "B", 1.0, 1.0, -5.0)]).expect_err("negative cost");
    assert!(matches!(err, Error::InvalidEdge { .. }));
}

#[test]
fn self_loops_are_rejected() {
    let err = build(&[EdgeRecord::new("A", "A", 1.0, 1.0, 1.0)]).expect_err("self loop");
    assert!(format!("{err}").contains("self-loops are not allowed"));
}

#[test]
fn require_station_suggests_close_labels() {
    let graph = builtin_graph().expect("builtin network builds");
    let err = graph.require_station("Rajiv Chowk").expect_err("suffix missing");
    let message = format!("{err}");

    assert!(message.contains("unknown station name: Rajiv Chowk"));
    assert!(message.contains("Did you mean"));
    assert!(message.contains("Rajiv Chowk~BY"));
}

#[test]
fn graph_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<transitnet_lib::Graph>();
}
