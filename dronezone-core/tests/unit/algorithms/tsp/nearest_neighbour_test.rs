use super::*;
use crate::helpers::models::{create_graph, create_sample_graph};

#[test]
fn can_build_closed_tour_from_base() {
    let graph = create_sample_graph();

    let route = solve_nearest_neighbour(&graph, Some("Base")).unwrap();

    assert_eq!(route.nodes, vec!["Base", "A", "C", "B", "Base"]);
    assert_eq!(route.cost, 80.);
    assert!(route.is_closed());
    assert!(route.covers(&graph));
}

#[test]
fn can_use_first_node_when_start_is_omitted() {
    let graph = create_sample_graph();

    let route = solve_nearest_neighbour(&graph, None).unwrap();

    assert_eq!(route.nodes.first().map(String::as_str), Some("Base"));
    assert_eq!(route, solve_nearest_neighbour(&graph, Some("Base")).unwrap());
}

#[test]
fn can_handle_single_node_graph() {
    let graph = create_graph(false, &["Base"], &[]);

    let route = solve_nearest_neighbour(&graph, Some("Base")).unwrap();

    assert_eq!(route.nodes, vec!["Base"]);
    assert_eq!(route.cost, 0.);
}

#[test]
fn can_return_single_node_when_start_is_isolated() {
    let graph = create_graph(false, &["X", "A", "B"], &[("A", "B", 3.)]);

    let route = solve_nearest_neighbour(&graph, Some("X")).unwrap();

    assert_eq!(route.nodes, vec!["X"]);
    assert_eq!(route.cost, 0.);
    assert!(!route.is_closed());
}

#[test]
fn can_stop_early_when_no_unvisited_neighbours_left() {
    let graph = create_graph(false, &["A", "B", "C", "D"], &[("A", "B", 1.), ("B", "C", 1.), ("A", "D", 5.)]);

    let route = solve_nearest_neighbour(&graph, Some("A")).unwrap();

    assert_eq!(route.nodes, vec!["A", "B", "C"]);
    assert_eq!(route.cost, 2.);
    assert!(!route.covers(&graph));
}

#[test]
fn can_leave_route_open_without_return_edge() {
    let graph = create_graph(false, &["A", "B", "C"], &[("A", "B", 1.), ("B", "C", 1.)]);

    let route = solve_nearest_neighbour(&graph, Some("A")).unwrap();

    assert_eq!(route.nodes, vec!["A", "B", "C"]);
    assert_eq!(route.cost, 2.);
    assert!(!route.is_closed());
}

#[test]
fn can_break_ties_by_smallest_id() {
    let graph = create_graph(false, &["S", "Z", "M"], &[("S", "Z", 1.), ("S", "M", 1.), ("Z", "M", 1.)]);

    let route = solve_nearest_neighbour(&graph, Some("S")).unwrap();

    assert_eq!(route.nodes, vec!["S", "M", "Z", "S"]);
    assert_eq!(route.cost, 3.);
}

#[test]
fn can_follow_outgoing_edges_in_directed_graph() {
    let graph = create_graph(true, &["A", "B", "C"], &[("A", "B", 5.), ("A", "C", 1.), ("C", "B", 1.), ("B", "A", 2.)]);

    let route = solve_nearest_neighbour(&graph, Some("A")).unwrap();

    assert_eq!(route.nodes, vec!["A", "C", "B", "A"]);
    assert_eq!(route.cost, 4.);
}

#[test]
fn can_fail_on_unknown_start_or_empty_graph() {
    let graph = create_sample_graph();

    assert_eq!(solve_nearest_neighbour(&graph, Some("X")), Err(RoutingError::UnknownNode("X".to_string())));
    assert_eq!(solve_nearest_neighbour(&Graph::undirected(), None), Err(RoutingError::EmptyGraph));
}
