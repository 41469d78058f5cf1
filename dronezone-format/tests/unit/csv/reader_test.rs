use super::*;
use crate::helpers::{SAMPLE_GRAPH_CSV_PATH, SAMPLE_GRAPH_JSON_PATH};
use crate::json::load_graph_from_json;

#[test]
fn can_read_sample_graph_same_as_json() {
    let graph = load_graph_from_csv(SAMPLE_GRAPH_CSV_PATH).unwrap();
    let json_graph = load_graph_from_json(SAMPLE_GRAPH_JSON_PATH).unwrap();

    assert!(!graph.is_directed());
    assert_eq!(graph.nodes().collect::<Vec<_>>(), vec!["Base", "A", "B", "C"]);
    assert_eq!(graph.edge_count(), 6);
    assert_eq!(graph.edges().map(|edge| edge.weight).collect::<Vec<_>>(), vec![10., 15., 20., 35., 25., 30.]);
    assert_eq!(json_graph.edges().collect::<Vec<_>>(), graph.edges().collect::<Vec<_>>());
}

parameterized_test! {can_default_weight, (csv, expected), {
    let graph = csv.to_string().read_csv_graph().unwrap();

    assert_eq!(graph.edge_weight("B", "A"), Some(expected));
}}

can_default_weight! {
    case01_no_column: ("source,target\nA,B\n", 1.),
    case02_empty_value: ("source,target,weight\nA,B,\n", 1.),
    case03_with_spaces: ("source, target, weight\nA, B, 2.5\n", 2.5),
}

parameterized_test! {can_reject_malformed_input, (csv, expected_part), {
    match csv.to_string().read_csv_graph() {
        Err(RoutingError::MalformedInput(message)) => assert!(message.contains(expected_part), "unexpected message: {message}"),
        other => unreachable!("unexpected result: {other:?}"),
    }
}}

can_reject_malformed_input! {
    case01_missing_source: ("source,target,weight\n,B,1\n", "row 1: missing source"),
    case02_missing_target: ("source,target,weight\nA,B,1\nA,,2\n", "row 2: missing target"),
    case03_bad_weight: ("source,target,weight\nA,B,heavy\n", "row 1"),
    case04_no_target_column: ("source\nA\n", "row 1: missing target"),
    case05_self_loop: ("source,target,weight\nA,B,1\nA,A,1\n", "row 2: invalid edge 'A' -> 'A'"),
    case06_nan_weight: ("source,target,weight\nA,B,nan\n", "row 1: invalid edge 'A' -> 'B': weight is not finite"),
}

#[test]
fn can_create_nodes_in_order_of_appearance() {
    let graph = "source,target\nC,A\nB,C\n".to_string().read_csv_graph().unwrap();

    assert_eq!(graph.nodes().collect::<Vec<_>>(), vec!["C", "A", "B"]);
}
