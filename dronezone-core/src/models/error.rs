use std::fmt::{Display, Formatter};

/// Specifies errors which can be raised while building a graph or querying routes over it.
#[derive(Clone, Debug, PartialEq)]
pub enum RoutingError {
    /// Bad or missing fields in a graph description.
    MalformedInput(String),

    /// An edge which cannot be added to the graph.
    InvalidEdge {
        /// Source node id.
        source: String,
        /// Target node id.
        target: String,
        /// Why the edge is rejected.
        reason: String,
    },

    /// A node which is not present in the graph.
    UnknownNode(String),

    /// Source and target are not connected.
    NoPathExists {
        /// Source node id.
        source: String,
        /// Target node id.
        target: String,
    },

    /// The graph has no nodes at all.
    EmptyGraph,

    /// A negative edge weight was met by an algorithm which requires non-negative weights.
    NegativeWeight {
        /// Source node id.
        source: String,
        /// Target node id.
        target: String,
    },
}

/// A type alias for result type with `RoutingError`.
pub type GraphResult<T> = Result<T, RoutingError>;

impl RoutingError {
    /// Creates `MalformedInput` error from any message.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput(message.into())
    }

    pub(crate) fn invalid_edge(source: &str, target: &str, reason: impl Into<String>) -> Self {
        Self::InvalidEdge { source: source.to_string(), target: target.to_string(), reason: reason.into() }
    }

    pub(crate) fn no_path(source: &str, target: &str) -> Self {
        Self::NoPathExists { source: source.to_string(), target: target.to_string() }
    }
}

impl Display for RoutingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedInput(message) => write!(f, "malformed input: {message}"),
            Self::InvalidEdge { source, target, reason } => {
                write!(f, "invalid edge '{source}' -> '{target}': {reason}")
            }
            Self::UnknownNode(id) => write!(f, "unknown node: '{id}'"),
            Self::NoPathExists { source, target } => write!(f, "no path exists from '{source}' to '{target}'"),
            Self::EmptyGraph => write!(f, "graph has no nodes"),
            Self::NegativeWeight { source, target } => {
                write!(f, "negative weight on edge '{source}' -> '{target}'")
            }
        }
    }
}

impl std::error::Error for RoutingError {}
