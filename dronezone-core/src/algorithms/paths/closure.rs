use super::{ShortestPathTree, dijkstra};
use crate::algorithms::tsp::{AdjacencySpec, Edge, Node};
use crate::models::{Cost, Graph, GraphResult, RoutingError};

/// A complete graph over all nodes where a cost between two nodes is the length of
/// the shortest path between them in the underlying graph.
pub(crate) struct MetricClosure {
    trees: Vec<ShortestPathTree>,
}

impl MetricClosure {
    /// Builds the closure, fails if some node is not reachable from another one.
    pub fn new(graph: &Graph) -> GraphResult<Self> {
        let size = graph.node_count();

        let trees = (0..size).map(|source| dijkstra(graph, source)).collect::<GraphResult<Vec<_>>>()?;

        for (source, tree) in trees.iter().enumerate() {
            if let Some(target) = (0..size).find(|&target| tree.distance(target).is_none()) {
                return Err(RoutingError::no_path(graph.id_of(source), graph.id_of(target)));
            }
        }

        Ok(Self { trees })
    }

    /// Returns the underlying shortest path between two nodes, both ends included.
    pub fn expand(&self, from: Node, to: Node) -> Vec<Node> {
        self.trees[from].path(to).unwrap_or_else(|| vec![from, to])
    }
}

impl AdjacencySpec for MetricClosure {
    fn cost(&self, edge: &Edge) -> Cost {
        let &(from, to) = edge;
        self.trees[from].distance(to).unwrap_or(Cost::INFINITY)
    }

    fn size(&self) -> usize {
        self.trees.len()
    }
}
