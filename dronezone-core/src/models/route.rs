#[cfg(test)]
#[path = "../../tests/unit/models/route_test.rs"]
mod route_test;

use super::{Cost, Graph, GraphResult, RoutingError};

/// An ordered sequence of node ids paired with its total accumulated weight.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    /// Visited nodes in visiting order.
    pub nodes: Vec<String>,
    /// Total cost of the route.
    pub cost: Cost,
}

impl Route {
    /// Creates a new route.
    pub fn new(nodes: Vec<String>, cost: Cost) -> Self {
        Self { nodes, cost }
    }

    /// Returns true if the route leaves its first node and ends where it starts. A route made of
    /// a single node is not closed.
    pub fn is_closed(&self) -> bool {
        match self.nodes.as_slice() {
            [first, .., last] => first == last,
            _ => false,
        }
    }

    /// Returns true if every graph node is present in the route.
    pub fn covers(&self, graph: &Graph) -> bool {
        graph.nodes().all(|id| self.nodes.iter().any(|node| node == id))
    }
}

/// Calculates a cost of the path by summing weights of edges between consecutive nodes.
pub fn route_cost<S: AsRef<str>>(graph: &Graph, nodes: &[S]) -> GraphResult<Cost> {
    nodes.windows(2).try_fold(0., |acc, pair| {
        let (source, target) = (pair[0].as_ref(), pair[1].as_ref());

        graph
            .edge_weight(source, target)
            .map(|weight| acc + weight)
            .ok_or_else(|| RoutingError::invalid_edge(source, target, "edge does not exist"))
    })
}
