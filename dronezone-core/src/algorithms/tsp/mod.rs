//! Heuristics for the Traveling Salesman Problem over a weighted graph.

use crate::models::Cost;

/// A node is an index of a graph node.
pub(crate) type Node = usize;

/// An edge is a pair of nodes.
pub(crate) type Edge = (Node, Node);

/// A path is a sequence of nodes.
pub(crate) type Path = Vec<Node>;

/// Represents a complete structure with weighted transitions between any pair of nodes.
pub(crate) trait AdjacencySpec {
    /// Returns transition cost for the given edge.
    fn cost(&self, edge: &Edge) -> Cost;

    /// Returns total amount of nodes.
    fn size(&self) -> usize;
}

mod approximation;
pub use self::approximation::*;

mod nearest_neighbour;
pub use self::nearest_neighbour::*;

mod two_opt;
pub(crate) use self::two_opt::TwoOpt;
