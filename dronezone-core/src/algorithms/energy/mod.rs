//! Energy consumption optimization of a drone flight split between several zones.
//!
//! The objective is linear: every kilometre flown over a zone costs a fixed amount of energy.
//! Constraints are linear too, so the problem can be analyzed either with Lagrange multipliers
//! (treating all constraints as active) or solved exactly as a small linear program.

mod problem;
pub use self::problem::*;

mod lagrange;
pub use self::lagrange::*;

mod linear_program;
pub use self::linear_program::*;

mod verification;
pub use self::verification::*;
