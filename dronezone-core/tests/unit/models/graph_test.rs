use super::*;
use crate::helpers::models::{create_graph, create_sample_graph};

fn attributes(entries: &[(&str, AttributeValue)]) -> Attributes {
    entries.iter().map(|(key, value)| (key.to_string(), value.clone())).collect()
}

#[test]
fn can_count_nodes_and_edges_of_sample_graph() {
    let graph = create_sample_graph();

    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 6);
    assert_eq!(graph.nodes().collect::<Vec<_>>(), vec!["Base", "A", "B", "C"]);
}

#[test]
fn can_use_default_weight_when_omitted() {
    let mut graph = create_graph(false, &["A", "B"], &[]);

    graph.add_edge("A", "B", None).unwrap();

    assert_eq!(graph.edge_weight("A", "B"), Some(DEFAULT_WEIGHT));
    assert_eq!(graph.edge_weight("B", "A"), Some(1.));
}

parameterized_test! {can_reject_invalid_edge, (source, target, weight), {
    can_reject_invalid_edge_impl(source, target, weight);
}}

can_reject_invalid_edge! {
    case01_unknown_source: ("X", "A", Some(1.)),
    case02_unknown_target: ("A", "X", Some(1.)),
    case03_self_loop: ("A", "A", Some(1.)),
    case04_nan_weight: ("A", "B", Some(f64::NAN)),
    case05_infinite_weight: ("A", "B", Some(f64::INFINITY)),
}

fn can_reject_invalid_edge_impl(source: &str, target: &str, weight: Option<Weight>) {
    let mut graph = create_graph(false, &["A", "B"], &[]);

    let result = graph.add_edge(source, target, weight);

    assert!(matches!(result, Err(RoutingError::InvalidEdge { .. })));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn can_replace_weight_of_existing_undirected_edge() {
    let mut graph = create_graph(false, &["A", "B"], &[("A", "B", 5.)]);

    graph.add_edge("B", "A", Some(7.)).unwrap();

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge_weight("A", "B"), Some(7.));
    assert_eq!(graph.edge_weight("B", "A"), Some(7.));
}

#[test]
fn can_keep_direction_in_directed_graph() {
    let mut graph = create_graph(true, &["A", "B"], &[("A", "B", 5.)]);

    assert!(graph.has_edge("A", "B"));
    assert!(!graph.has_edge("B", "A"));
    assert_eq!(graph.edge_count(), 1);

    graph.add_edge("B", "A", Some(3.)).unwrap();

    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.edge_weight("A", "B"), Some(5.));
    assert_eq!(graph.edge_weight("B", "A"), Some(3.));
}

#[test]
fn can_return_neighbours_ordered_by_id() {
    let graph = create_graph(false, &["Base", "C", "A", "B"], &[("Base", "C", 1.), ("Base", "A", 2.), ("B", "Base", 3.)]);

    let neighbours = graph.neighbours("Base").unwrap();

    assert_eq!(neighbours, vec![("A", 2.), ("B", 3.), ("C", 1.)]);
}

#[test]
fn can_fail_neighbours_of_unknown_node() {
    let graph = create_sample_graph();

    assert_eq!(graph.neighbours("X"), Err(RoutingError::UnknownNode("X".to_string())));
}

#[test]
fn can_merge_attributes_of_existing_node() {
    let mut graph = Graph::undirected();

    graph.add_node("A", attributes(&[("zone", AttributeValue::Text("flat".into())), ("priority", AttributeValue::Bool(true))]));
    graph.add_node("A", attributes(&[("zone", AttributeValue::Text("urban".into()))]));

    assert_eq!(graph.node_count(), 1);
    let attrs = graph.attributes("A").unwrap();
    assert_eq!(attrs.get("zone"), Some(&AttributeValue::Text("urban".into())));
    assert_eq!(attrs.get("priority"), Some(&AttributeValue::Bool(true)));
}

#[test]
fn can_compare_graphs_structurally() {
    let original = create_sample_graph();
    let reordered = create_graph(
        false,
        &["C", "B", "A", "Base"],
        &[("C", "B", 30.), ("C", "A", 25.), ("B", "A", 35.), ("C", "Base", 20.), ("B", "Base", 15.), ("A", "Base", 10.)],
    );
    let mut changed = create_sample_graph();
    changed.add_edge("A", "C", Some(26.)).unwrap();

    assert_eq!(original, create_sample_graph());
    assert_eq!(original, reordered);
    assert_ne!(original, changed);
    assert_ne!(create_graph(false, &["A", "B"], &[("A", "B", 1.)]), create_graph(true, &["A", "B"], &[("A", "B", 1.)]));
}

#[test]
fn can_get_graph_info() {
    let graph = create_graph(true, &["A", "B", "C"], &[("A", "B", 2.), ("B", "C", 3.)]);

    let info = graph.info();

    assert!(info.directed);
    assert_eq!(info.num_nodes, 3);
    assert_eq!(info.num_edges, 2);
    assert_eq!(info.nodes.iter().map(|(id, _)| id.as_str()).collect::<Vec<_>>(), vec!["A", "B", "C"]);
    assert_eq!(info.edges, vec![("A".to_string(), "B".to_string(), 2.), ("B".to_string(), "C".to_string(), 3.)]);
}
