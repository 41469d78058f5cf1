#[cfg(test)]
#[path = "../../../tests/unit/algorithms/energy/lagrange_test.rs"]
mod lagrange_test;

use super::EnergyProblem;
use crate::algorithms::math::solve_linear_system;
use crate::utils::{GenericError, GenericResult};

/// A stationary point of the Lagrangian.
#[derive(Clone, Debug)]
pub struct LagrangeSolution {
    /// Variable values.
    pub point: Vec<f64>,
    /// Lagrange multipliers, one per constraint.
    pub multipliers: Vec<f64>,
    /// Objective value at the point.
    pub objective: f64,
    /// Max absolute component of `∇f - Σ λᵢ∇gᵢ` at the point.
    pub stationarity_residual: f64,
}

/// Finds a stationary point of `L(x, λ) = f(x) - Σ λᵢ (aᵢ·x - bᵢ)` treating every constraint as
/// active, which means solving `Aᵀλ = c` together with `Ax = b`.
///
/// Fails when the system is singular, e.g. when there are fewer independent constraints than
/// variables: a linear objective has no isolated stationary point then.
pub fn solve_lagrange(problem: &EnergyProblem) -> GenericResult<LagrangeSolution> {
    let size = problem.size();
    let constraints = problem.constraints().len();
    let dimension = size + constraints;

    let mut matrix = vec![vec![0.; dimension]; dimension];
    let mut rhs = vec![0.; dimension];

    // ∂L/∂xₖ = cₖ - Σ λᵢ aᵢₖ = 0
    for (k, &cost) in problem.costs().iter().enumerate() {
        for (i, constraint) in problem.constraints().iter().enumerate() {
            matrix[k][size + i] = constraint.coefficients[k];
        }
        rhs[k] = cost;
    }

    // ∂L/∂λᵢ = 0
    for (i, constraint) in problem.constraints().iter().enumerate() {
        matrix[size + i][..size].copy_from_slice(constraint.coefficients.as_slice());
        rhs[size + i] = constraint.rhs;
    }

    let solution = solve_linear_system(matrix, rhs)
        .map_err(|err| GenericError::from(format!("cannot find stationary point of the lagrangian: {err}")))?;

    let (point, multipliers) = solution.split_at(size);

    let stationarity_residual = (0..size)
        .map(|k| {
            let combination = problem
                .constraints()
                .iter()
                .zip(multipliers.iter())
                .map(|(constraint, lambda)| lambda * constraint.coefficients[k])
                .sum::<f64>();

            (problem.costs()[k] - combination).abs()
        })
        .fold(0., f64::max);

    Ok(LagrangeSolution {
        point: point.to_vec(),
        multipliers: multipliers.to_vec(),
        objective: problem.objective(point),
        stationarity_residual,
    })
}
