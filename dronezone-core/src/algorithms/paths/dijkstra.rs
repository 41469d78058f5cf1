#[cfg(test)]
#[path = "../../../tests/unit/algorithms/paths/dijkstra_test.rs"]
mod dijkstra_test;

use crate::models::{Cost, Graph, GraphResult, Route, RoutingError};
use crate::utils::compare_floats;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Keeps distances and predecessors discovered by a single source search.
#[derive(Clone, Debug)]
pub struct ShortestPathTree {
    source: usize,
    distances: Vec<Option<Cost>>,
    predecessors: Vec<Option<usize>>,
}

impl ShortestPathTree {
    /// Returns a minimal distance from the source to the given node if it is reachable.
    pub fn distance_to(&self, graph: &Graph, target: &str) -> GraphResult<Option<Cost>> {
        graph.index_of(target).map(|target| self.distance(target))
    }

    /// Returns node ids of the minimal path from the source to the given node if it is reachable.
    pub fn path_to(&self, graph: &Graph, target: &str) -> GraphResult<Option<Vec<String>>> {
        let target = graph.index_of(target)?;

        Ok(self.path(target).map(|path| path.into_iter().map(|idx| graph.id_of(idx).to_string()).collect()))
    }

    pub(crate) fn distance(&self, target: usize) -> Option<Cost> {
        self.distances[target]
    }

    pub(crate) fn path(&self, target: usize) -> Option<Vec<usize>> {
        self.distances[target]?;

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessors[current]?;
            path.push(current);
        }
        path.reverse();

        Some(path)
    }
}

/// Finds a minimum-weight path between two nodes using Dijkstra's algorithm.
///
/// Among several minimal paths, the one whose predecessors were settled first is returned.
pub fn shortest_path(graph: &Graph, source: &str, target: &str) -> GraphResult<Route> {
    let source_idx = graph.index_of(source)?;
    let target_idx = graph.index_of(target)?;

    let tree = dijkstra(graph, source_idx)?;

    match (tree.path(target_idx), tree.distance(target_idx)) {
        (Some(path), Some(cost)) => {
            Ok(Route::new(path.into_iter().map(|idx| graph.id_of(idx).to_string()).collect(), cost))
        }
        _ => Err(RoutingError::no_path(source, target)),
    }
}

/// Runs Dijkstra's algorithm from the source node to every reachable node.
pub fn shortest_paths_from(graph: &Graph, source: &str) -> GraphResult<ShortestPathTree> {
    graph.index_of(source).and_then(|source| dijkstra(graph, source))
}

pub(crate) fn dijkstra(graph: &Graph, source: usize) -> GraphResult<ShortestPathTree> {
    let size = graph.node_count();
    let mut distances: Vec<Option<Cost>> = vec![None; size];
    let mut predecessors = vec![None; size];
    let mut settled = vec![false; size];
    let mut heap = BinaryHeap::new();

    distances[source] = Some(0.);
    heap.push(HeapEntry { cost: 0., node: source });

    while let Some(HeapEntry { cost, node }) = heap.pop() {
        if settled[node] {
            continue;
        }
        settled[node] = true;

        for &(next, weight) in graph.adjacent(node) {
            if weight < 0. {
                return Err(RoutingError::NegativeWeight {
                    source: graph.id_of(node).to_string(),
                    target: graph.id_of(next).to_string(),
                });
            }

            if settled[next] {
                continue;
            }

            let candidate = cost + weight;
            let is_better = distances[next].is_none_or(|known| compare_floats(candidate, known) == Ordering::Less);

            if is_better {
                distances[next] = Some(candidate);
                predecessors[next] = Some(node);
                heap.push(HeapEntry { cost: candidate, node: next });
            }
        }
    }

    Ok(ShortestPathTree { source, distances, predecessors })
}

/// A min-heap entry: the lowest cost first, then the lowest node index.
struct HeapEntry {
    cost: Cost,
    node: usize,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_floats(other.cost, self.cost).then_with(|| other.node.cmp(&self.node))
    }
}
