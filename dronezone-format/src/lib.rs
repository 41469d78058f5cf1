//! Format crate contains logic to read flight zone graphs and to write routing results.
//!
//! # Supported formats
//!
//! - **json**: a graph document with `directed` flag, `nodes` and `edges` lists
//! - **csv**: an undirected edge list with `source,target[,weight]` header
//!
//! Results can be written as json reports or rendered as Graphviz DOT documents.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

pub use dronezone_core as core;

pub mod csv;
pub mod json;
pub mod output;
