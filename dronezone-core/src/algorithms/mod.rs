//! A collection of algorithms which work on top of the graph model.

pub mod energy;
pub mod math;
pub mod paths;
pub mod tsp;
