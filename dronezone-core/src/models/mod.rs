//! A collection of models to represent flight zone graphs and routes over them.

mod error;
pub use self::error::*;

mod graph;
pub use self::graph::*;

mod route;
pub use self::route::*;
