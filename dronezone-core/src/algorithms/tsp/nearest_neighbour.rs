#[cfg(test)]
#[path = "../../../tests/unit/algorithms/tsp/nearest_neighbour_test.rs"]
mod nearest_neighbour_test;

use crate::models::{Graph, GraphResult, Route, RoutingError};
use crate::utils::compare_floats;

/// Builds a tour greedily, always stepping to the closest unvisited neighbour.
///
/// When `start` is omitted, the first node in insertion order is used. Among equally close
/// neighbours the one with the lexicographically smallest id is chosen.
///
/// The traversal stops early when the current node has no unvisited neighbours, and the
/// returned route is partial then. When every node is visited, the tour is closed only if there
/// is an edge back to the start node, otherwise the route is left open. Neither case is an error.
pub fn solve_nearest_neighbour(graph: &Graph, start: Option<&str>) -> GraphResult<Route> {
    let start = match start {
        Some(id) => graph.index_of(id)?,
        None if graph.node_count() > 0 => 0,
        None => return Err(RoutingError::EmptyGraph),
    };

    let size = graph.node_count();
    let mut visited = vec![false; size];
    let mut path = vec![start];
    let mut cost = 0.;
    let mut current = start;

    visited[start] = true;

    while path.len() < size {
        let closest = graph
            .adjacent(current)
            .iter()
            .filter(|(node, _)| !visited[*node])
            .min_by(|(a, a_weight), (b, b_weight)| {
                compare_floats(*a_weight, *b_weight).then_with(|| graph.id_of(*a).cmp(graph.id_of(*b)))
            })
            .copied();

        let Some((next, weight)) = closest else {
            break;
        };

        visited[next] = true;
        path.push(next);
        cost += weight;
        current = next;
    }

    if path.len() == size {
        if let Some(weight) = graph.weight_between(current, start) {
            cost += weight;
            path.push(start);
        }
    }

    Ok(Route::new(path.into_iter().map(|idx| graph.id_of(idx).to_string()).collect(), cost))
}
