//! Small numeric routines used by optimization algorithms.

mod linear;
pub use self::linear::*;
