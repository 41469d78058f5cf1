//! A crate which provides helper functionality for the drone flight zone routing command line interface.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub use dronezone_core as core;
pub use dronezone_format as format;

pub mod extensions;
