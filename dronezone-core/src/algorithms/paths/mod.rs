//! Shortest path queries over a weighted graph.

mod dijkstra;
pub use self::dijkstra::*;

mod closure;
pub(crate) use self::closure::MetricClosure;
