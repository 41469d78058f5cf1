#[cfg(test)]
#[path = "../../../tests/unit/algorithms/energy/problem_test.rs"]
mod problem_test;

use crate::utils::{GenericError, GenericResult};

/// Specifies a kind of linear constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConstraintKind {
    /// `a·x = b`
    Equal,
    /// `a·x <= b`
    LessOrEqual,
}

/// A linear constraint `a·x (= | <=) b`.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearConstraint {
    /// A human readable name.
    pub name: String,
    /// Coefficients, one per variable.
    pub coefficients: Vec<f64>,
    /// Constraint kind.
    pub kind: ConstraintKind,
    /// Right hand side.
    pub rhs: f64,
}

impl LinearConstraint {
    /// Creates an equality constraint.
    pub fn equal(name: &str, coefficients: Vec<f64>, rhs: f64) -> Self {
        Self { name: name.to_string(), coefficients, kind: ConstraintKind::Equal, rhs }
    }

    /// Creates an upper bound constraint.
    pub fn less_or_equal(name: &str, coefficients: Vec<f64>, rhs: f64) -> Self {
        Self { name: name.to_string(), coefficients, kind: ConstraintKind::LessOrEqual, rhs }
    }

    /// Evaluates left hand side at the given point.
    pub fn evaluate(&self, point: &[f64]) -> f64 {
        self.coefficients.iter().zip(point.iter()).map(|(a, x)| a * x).sum()
    }
}

/// Minimizes `c·x` subject to linear constraints and `x >= 0`.
///
/// Dimensions are checked once on construction, so solvers can index costs and coefficients by
/// variable position.
#[derive(Clone, Debug, PartialEq)]
pub struct EnergyProblem {
    variables: Vec<String>,
    costs: Vec<f64>,
    constraints: Vec<LinearConstraint>,
}

impl EnergyProblem {
    /// Creates a new problem, checking that dimensions are consistent.
    pub fn new(variables: Vec<String>, costs: Vec<f64>, constraints: Vec<LinearConstraint>) -> GenericResult<Self> {
        let size = variables.len();

        if size == 0 {
            return Err("energy problem has no variables".into());
        }

        if costs.len() != size {
            return Err(GenericError::from(format!("expected {size} costs, got {}", costs.len())));
        }

        if let Some(constraint) = constraints.iter().find(|constraint| constraint.coefficients.len() != size) {
            return Err(GenericError::from(format!(
                "constraint '{}' has {} coefficients, expected {size}",
                constraint.name,
                constraint.coefficients.len()
            )));
        }

        if costs.iter().chain(constraints.iter().flat_map(|c| c.coefficients.iter().chain(Some(&c.rhs)))).any(|v| !v.is_finite())
        {
            return Err("energy problem contains non-finite values".into());
        }

        Ok(Self { variables, costs, constraints })
    }

    /// Creates the drone flight problem over three zones: `s` (zone A, flat terrain), `w` (zone B,
    /// urban terrain) and `j` (zone C, mountains), measured in kilometres.
    pub fn drone_zones() -> Self {
        Self {
            variables: vec!["s".to_string(), "w".to_string(), "j".to_string()],
            costs: vec![1.2, 0.9, 1.5],
            constraints: vec![
                LinearConstraint::less_or_equal("autonomy", vec![1., 1., 1.], 15.),
                LinearConstraint::equal("priority coverage", vec![1., 0., -2.], 0.),
                LinearConstraint::equal("energy balance", vec![-1.2, 0.9, 0.], 0.),
            ],
        }
    }

    /// Returns variable names.
    pub fn variables(&self) -> &[String] {
        self.variables.as_slice()
    }

    /// Returns energy consumption per unit of each variable.
    pub fn costs(&self) -> &[f64] {
        self.costs.as_slice()
    }

    /// Returns linear constraints.
    pub fn constraints(&self) -> &[LinearConstraint] {
        self.constraints.as_slice()
    }

    /// Returns the objective value at the given point.
    pub fn objective(&self, point: &[f64]) -> f64 {
        self.costs.iter().zip(point.iter()).map(|(c, x)| c * x).sum()
    }

    /// Returns amount of variables.
    pub fn size(&self) -> usize {
        self.variables.len()
    }
}
