#[cfg(test)]
#[path = "../../../tests/unit/algorithms/tsp/approximation_test.rs"]
mod approximation_test;

use super::*;
use crate::algorithms::paths::MetricClosure;
use crate::models::{Graph, GraphResult, Route, RoutingError, route_cost};
use crate::utils::compare_floats;
use std::iter::once;

/// Specifies how the approximation heuristic behaves.
#[derive(Clone, Debug)]
pub struct ApproximationSettings {
    /// Whether the constructed tour is refined by 2-opt local search (undirected graphs only).
    pub refine: bool,
}

impl Default for ApproximationSettings {
    fn default() -> Self {
        Self { refine: true }
    }
}

/// Builds a closed tour which visits every node using an approximation algorithm.
///
/// The tour is constructed on the metric closure of the graph: a double-tree 2-approximation
/// for undirected graphs and greedy nearest neighbour construction for directed ones. Each
/// closure hop is then expanded into the underlying shortest path, so a node can appear more
/// than once when the graph is not complete. The route starts and ends at the first node.
///
/// The cost is always recomputed from the returned path and the graph's edge weights.
pub fn solve_approximation(graph: &Graph, settings: &ApproximationSettings) -> GraphResult<Route> {
    match graph.node_count() {
        0 => return Err(RoutingError::EmptyGraph),
        1 => return Ok(Route::new(vec![graph.id_of(0).to_string()], 0.)),
        _ => {}
    }

    let closure = MetricClosure::new(graph)?;

    let tour = if graph.is_directed() {
        greedy_tour(graph, &closure)
    } else {
        let tour = double_tree_tour(graph, &closure);
        if settings.refine { TwoOpt::new(&closure).optimize(tour) } else { tour }
    };

    let path = tour.iter().zip(tour.iter().skip(1).chain(once(&tour[0]))).fold(vec![tour[0]], |mut path, (&from, &to)| {
        path.extend(closure.expand(from, to).into_iter().skip(1));
        path
    });

    let nodes = path.into_iter().map(|idx| graph.id_of(idx).to_string()).collect::<Vec<_>>();
    let cost = route_cost(graph, &nodes)?;

    Ok(Route::new(nodes, cost))
}

/// Builds a minimum spanning tree of the closure with Prim's algorithm rooted at the first node
/// and returns its preorder walk, children are visited in order of their ids.
fn double_tree_tour(graph: &Graph, closure: &MetricClosure) -> Path {
    let size = closure.size();
    let mut in_tree = vec![false; size];
    let mut keys = vec![Cost::INFINITY; size];
    let mut parents: Vec<Option<Node>> = vec![None; size];
    let mut children: Vec<Vec<Node>> = vec![vec![]; size];

    keys[0] = 0.;

    for _ in 0..size {
        let Some(node) = (0..size)
            .filter(|&node| !in_tree[node])
            .min_by(|&a, &b| compare_floats(keys[a], keys[b]).then_with(|| a.cmp(&b)))
        else {
            break;
        };

        in_tree[node] = true;
        if let Some(parent) = parents[node] {
            children[parent].push(node);
        }

        for other in (0..size).filter(|&other| !in_tree[other]) {
            let cost = closure.cost(&(node, other));
            if cost < keys[other] {
                keys[other] = cost;
                parents[other] = Some(node);
            }
        }
    }

    children.iter_mut().for_each(|nodes| nodes.sort_by(|&a, &b| graph.id_of(a).cmp(graph.id_of(b))));

    let mut tour = Vec::with_capacity(size);
    let mut stack = vec![0];
    while let Some(node) = stack.pop() {
        tour.push(node);
        stack.extend(children[node].iter().rev());
    }

    tour
}

/// Builds a tour on the closure greedily stepping to the closest unvisited node.
fn greedy_tour(graph: &Graph, closure: &MetricClosure) -> Path {
    let size = closure.size();
    let mut visited = vec![false; size];
    let mut tour = vec![0];
    visited[0] = true;

    while tour.len() < size {
        let current = tour[tour.len() - 1];
        let Some(next) = (0..size).filter(|&node| !visited[node]).min_by(|&a, &b| {
            compare_floats(closure.cost(&(current, a)), closure.cost(&(current, b)))
                .then_with(|| graph.id_of(a).cmp(graph.id_of(b)))
        }) else {
            break;
        };

        visited[next] = true;
        tour.push(next);
    }

    tour
}
