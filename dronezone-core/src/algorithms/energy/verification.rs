#[cfg(test)]
#[path = "../../../tests/unit/algorithms/energy/verification_test.rs"]
mod verification_test;

use super::{ConstraintKind, EnergyProblem};

/// A default tolerance used to verify a solution.
pub const DEFAULT_TOLERANCE: f64 = 1E-3;

/// A result of checking a single constraint.
#[derive(Clone, Debug)]
pub struct ConstraintCheck {
    /// Constraint name.
    pub name: String,
    /// Left hand side value at the point.
    pub lhs: f64,
    /// Right hand side.
    pub rhs: f64,
    /// Violation amount: `|lhs - rhs|` for equalities, `max(0, lhs - rhs)` for upper bounds.
    pub violation: f64,
    /// Whether violation is within tolerance.
    pub satisfied: bool,
}

/// A result of checking a point against the problem.
#[derive(Clone, Debug)]
pub struct Verification {
    /// Objective value.
    pub objective: f64,
    /// Per constraint checks.
    pub checks: Vec<ConstraintCheck>,
    /// Whether all variables are non-negative within tolerance.
    pub non_negative: bool,
}

impl Verification {
    /// Returns true if all constraints and bounds are satisfied.
    pub fn is_feasible(&self) -> bool {
        self.non_negative && self.checks.iter().all(|check| check.satisfied)
    }
}

/// Checks whether the point satisfies constraints of the problem.
pub fn verify(problem: &EnergyProblem, point: &[f64], tolerance: f64) -> Verification {
    let checks = problem
        .constraints()
        .iter()
        .map(|constraint| {
            let lhs = constraint.evaluate(point);
            let violation = match constraint.kind {
                ConstraintKind::Equal => (lhs - constraint.rhs).abs(),
                ConstraintKind::LessOrEqual => (lhs - constraint.rhs).max(0.),
            };

            ConstraintCheck {
                name: constraint.name.clone(),
                lhs,
                rhs: constraint.rhs,
                violation,
                satisfied: violation <= tolerance,
            }
        })
        .collect();

    Verification {
        objective: problem.objective(point),
        checks,
        non_negative: point.iter().all(|&value| value >= -tolerance),
    }
}
