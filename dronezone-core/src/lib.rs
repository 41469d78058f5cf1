//! Core crate contains building blocks to plan drone flights over a weighted graph of flight zones.
//!
//! # Overview
//!
//! - [`models`]: an in-memory weighted graph (undirected or directed), routes and errors
//! - [`algorithms`]: shortest paths, traveling salesman heuristics and energy optimization
//! - [`solver`]: a thin facade which runs algorithms with logging through [`utils::Environment`]
//!
//! # Example
//!
//! ```
//! use dronezone_core::prelude::*;
//!
//! let mut graph = Graph::undirected();
//! for id in ["Base", "A", "B"] {
//!     graph.add_node(id, Attributes::default());
//! }
//! graph.add_edge("Base", "A", Some(10.)).unwrap();
//! graph.add_edge("A", "B", Some(20.)).unwrap();
//! graph.add_edge("B", "Base", Some(15.)).unwrap();
//!
//! let route = solve_nearest_neighbour(&graph, Some("Base")).unwrap();
//!
//! assert_eq!(route.nodes, vec!["Base", "A", "B", "Base"]);
//! assert_eq!(route.cost, 45.);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
