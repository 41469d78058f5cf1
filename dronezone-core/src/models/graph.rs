#[cfg(test)]
#[path = "../../tests/unit/models/graph_test.rs"]
mod graph_test;

use super::{GraphResult, RoutingError};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Represents a weight of an edge.
pub type Weight = f64;

/// Represents an accumulated cost of a route.
pub type Cost = f64;

/// A default edge weight used when it is not specified.
pub const DEFAULT_WEIGHT: Weight = 1.;

/// A value of a node attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    /// A boolean flag.
    Bool(bool),
    /// A numeric value.
    Number(f64),
    /// A text value.
    Text(String),
}

/// An ordered mapping of node attributes.
pub type Attributes = BTreeMap<String, AttributeValue>;

#[derive(Clone, Debug)]
struct Node {
    id: String,
    attributes: Attributes,
}

/// A reference to a graph edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeRef<'a> {
    /// Source node id.
    pub source: &'a str,
    /// Target node id.
    pub target: &'a str,
    /// Edge weight.
    pub weight: Weight,
}

/// Basic information about the graph.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphInfo {
    /// Whether the graph is directed.
    pub directed: bool,
    /// Amount of nodes.
    pub num_nodes: usize,
    /// Amount of edges.
    pub num_edges: usize,
    /// Nodes with their attributes in insertion order.
    pub nodes: Vec<(String, Attributes)>,
    /// Edges as (source, target, weight) in insertion order.
    pub edges: Vec<(String, String, Weight)>,
}

/// An in-memory weighted graph of flight zones.
///
/// The mode (directed or undirected) is fixed at construction. Nodes keep their insertion
/// order, which is the iteration order used by all algorithms.
#[derive(Clone, Debug)]
pub struct Graph {
    directed: bool,
    nodes: Vec<Node>,
    index: FxHashMap<String, usize>,
    adjacency: Vec<Vec<(usize, Weight)>>,
    edges: Vec<(usize, usize)>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new(directed: bool) -> Self {
        Self { directed, nodes: vec![], index: FxHashMap::default(), adjacency: vec![], edges: vec![] }
    }

    /// Creates an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Creates an empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Returns true if edges are usable in source to target direction only.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Adds a node. Attributes of an already existing node are merged with the given ones.
    pub fn add_node(&mut self, id: &str, attributes: Attributes) {
        match self.index.get(id) {
            Some(&idx) => self.nodes[idx].attributes.extend(attributes),
            None => {
                self.index.insert(id.to_string(), self.nodes.len());
                self.nodes.push(Node { id: id.to_string(), attributes });
                self.adjacency.push(vec![]);
            }
        }
    }

    /// Adds an edge between two existing nodes, the weight defaults to [`DEFAULT_WEIGHT`].
    /// Adding an edge which already exists replaces its weight.
    pub fn add_edge(&mut self, source: &str, target: &str, weight: Option<Weight>) -> GraphResult<()> {
        let weight = weight.unwrap_or(DEFAULT_WEIGHT);

        let (from, to) = match (self.index.get(source), self.index.get(target)) {
            (Some(&from), Some(&to)) => (from, to),
            (None, _) => return Err(RoutingError::invalid_edge(source, target, format!("unknown node '{source}'"))),
            (_, None) => return Err(RoutingError::invalid_edge(source, target, format!("unknown node '{target}'"))),
        };

        if from == to {
            return Err(RoutingError::invalid_edge(source, target, "edge must connect two distinct nodes"));
        }

        if !weight.is_finite() {
            return Err(RoutingError::invalid_edge(source, target, format!("weight is not finite: {weight}")));
        }

        let is_new = self.upsert_adjacent(from, to, weight);
        if !self.directed {
            self.upsert_adjacent(to, from, weight);
        }

        if is_new {
            self.edges.push((from, to));
        }

        Ok(())
    }

    /// Returns neighbours reachable from the node with weights of connecting edges,
    /// ordered by neighbour id.
    pub fn neighbours(&self, id: &str) -> GraphResult<Vec<(&str, Weight)>> {
        let idx = self.index_of(id)?;

        let mut neighbours =
            self.adjacency[idx].iter().map(|&(other, weight)| (self.nodes[other].id.as_str(), weight)).collect::<Vec<_>>();
        neighbours.sort_by(|(a, _), (b, _)| a.cmp(b));

        Ok(neighbours)
    }

    /// Checks whether an edge is usable from source to target.
    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        self.edge_weight(source, target).is_some()
    }

    /// Returns a weight of an edge usable from source to target.
    pub fn edge_weight(&self, source: &str, target: &str) -> Option<Weight> {
        let (from, to) = (*self.index.get(source)?, *self.index.get(target)?);

        self.weight_between(from, to)
    }

    /// Checks whether a node with the given id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Returns node attributes.
    pub fn attributes(&self, id: &str) -> Option<&Attributes> {
        self.index.get(id).map(|&idx| &self.nodes[idx].attributes)
    }

    /// Returns amount of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns amount of edges, each undirected edge is counted once.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns node ids in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(|node| node.id.as_str())
    }

    /// Returns edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'_>> + '_ {
        self.edges.iter().map(move |&(from, to)| EdgeRef {
            source: self.nodes[from].id.as_str(),
            target: self.nodes[to].id.as_str(),
            weight: self.weight_between(from, to).unwrap_or(DEFAULT_WEIGHT),
        })
    }

    /// Returns basic information about the graph.
    pub fn info(&self) -> GraphInfo {
        GraphInfo {
            directed: self.directed,
            num_nodes: self.node_count(),
            num_edges: self.edge_count(),
            nodes: self.nodes.iter().map(|node| (node.id.clone(), node.attributes.clone())).collect(),
            edges: self.edges().map(|edge| (edge.source.to_string(), edge.target.to_string(), edge.weight)).collect(),
        }
    }

    pub(crate) fn index_of(&self, id: &str) -> GraphResult<usize> {
        self.index.get(id).copied().ok_or_else(|| RoutingError::UnknownNode(id.to_string()))
    }

    pub(crate) fn id_of(&self, idx: usize) -> &str {
        self.nodes[idx].id.as_str()
    }

    pub(crate) fn adjacent(&self, idx: usize) -> &[(usize, Weight)] {
        self.adjacency[idx].as_slice()
    }

    pub(crate) fn weight_between(&self, from: usize, to: usize) -> Option<Weight> {
        self.adjacency[from].iter().find(|(other, _)| *other == to).map(|(_, weight)| *weight)
    }

    fn upsert_adjacent(&mut self, from: usize, to: usize, weight: Weight) -> bool {
        match self.adjacency[from].iter_mut().find(|(other, _)| *other == to) {
            Some(entry) => {
                entry.1 = weight;
                false
            }
            None => {
                self.adjacency[from].push((to, weight));
                true
            }
        }
    }

    fn edge_key<'a>(&self, source: &'a str, target: &'a str) -> (&'a str, &'a str) {
        if self.directed || source <= target { (source, target) } else { (target, source) }
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        let nodes = |graph: &Graph| {
            graph.nodes.iter().map(|node| (node.id.clone(), node.attributes.clone())).collect::<BTreeMap<_, _>>()
        };
        let edges = |graph: &Graph| {
            graph
                .edges()
                .map(|edge| {
                    let (source, target) = graph.edge_key(edge.source, edge.target);
                    ((source.to_string(), target.to_string()), edge.weight)
                })
                .collect::<BTreeMap<_, _>>()
        };

        self.directed == other.directed && nodes(self) == nodes(other) && edges(self) == edges(other)
    }
}
