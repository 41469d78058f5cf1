use super::*;
use crate::helpers::models::{create_graph, create_sample_graph};

#[test]
fn can_find_direct_shortest_path() {
    let graph = create_sample_graph();

    let route = shortest_path(&graph, "A", "C").unwrap();

    assert_eq!(route.nodes, vec!["A", "C"]);
    assert_eq!(route.cost, 25.);
}

#[test]
fn can_find_shortest_path_through_intermediate_node() {
    let graph = create_sample_graph();

    let route = shortest_path(&graph, "A", "B").unwrap();

    assert_eq!(route.nodes, vec!["A", "Base", "B"]);
    assert_eq!(route.cost, 25.);
}

#[test]
fn can_return_single_node_path_when_source_equals_target() {
    let graph = create_sample_graph();

    let route = shortest_path(&graph, "B", "B").unwrap();

    assert_eq!(route.nodes, vec!["B"]);
    assert_eq!(route.cost, 0.);
}

#[test]
fn can_respect_edge_direction() {
    let graph = create_graph(true, &["A", "B", "C"], &[("A", "B", 1.), ("B", "C", 1.), ("C", "A", 1.)]);

    assert_eq!(shortest_path(&graph, "A", "C").unwrap().nodes, vec!["A", "B", "C"]);
    assert_eq!(shortest_path(&graph, "C", "B").unwrap().nodes, vec!["C", "A", "B"]);
    assert_eq!(shortest_path(&graph, "C", "B").unwrap().cost, 2.);
}

#[test]
fn can_fail_for_disconnected_nodes() {
    let graph = create_graph(false, &["A", "B", "C", "D"], &[("A", "B", 1.), ("C", "D", 1.)]);

    let result = shortest_path(&graph, "A", "D");

    assert_eq!(result, Err(RoutingError::NoPathExists { source: "A".to_string(), target: "D".to_string() }));
}

#[test]
fn can_fail_for_unknown_nodes() {
    let graph = create_sample_graph();

    assert_eq!(shortest_path(&graph, "X", "A"), Err(RoutingError::UnknownNode("X".to_string())));
    assert_eq!(shortest_path(&graph, "A", "Y"), Err(RoutingError::UnknownNode("Y".to_string())));
}

#[test]
fn can_fail_on_negative_weight() {
    let graph = create_graph(false, &["A", "B", "C"], &[("A", "B", 1.), ("B", "C", -2.)]);

    let result = shortest_path(&graph, "A", "C");

    assert!(matches!(result, Err(RoutingError::NegativeWeight { .. })));
}

#[test]
fn can_keep_first_settled_predecessor_on_ties() {
    let graph = create_graph(false, &["S", "X", "Y", "T"], &[("S", "X", 1.), ("S", "Y", 1.), ("X", "T", 1.), ("Y", "T", 1.)]);

    let route = shortest_path(&graph, "S", "T").unwrap();

    assert_eq!(route.nodes, vec!["S", "X", "T"]);
    assert_eq!(route.cost, 2.);
}

#[test]
fn can_build_shortest_path_tree() {
    let graph = create_graph(false, &["A", "B", "C", "D"], &[("A", "B", 4.), ("A", "C", 1.), ("C", "B", 2.)]);

    let tree = shortest_paths_from(&graph, "A").unwrap();

    assert_eq!(tree.distance_to(&graph, "B").unwrap(), Some(3.));
    assert_eq!(tree.path_to(&graph, "B").unwrap(), Some(vec!["A".to_string(), "C".to_string(), "B".to_string()]));
    assert_eq!(tree.distance_to(&graph, "D").unwrap(), None);
    assert_eq!(tree.path_to(&graph, "D").unwrap(), None);
    assert!(tree.distance_to(&graph, "Z").is_err());
}
