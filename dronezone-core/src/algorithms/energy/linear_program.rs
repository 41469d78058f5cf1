#[cfg(test)]
#[path = "../../../tests/unit/algorithms/energy/linear_program_test.rs"]
mod linear_program_test;

use super::{ConstraintKind, EnergyProblem};
use crate::algorithms::math::solve_linear_system;
use crate::utils::{GenericError, GenericResult, compare_floats};
use std::cmp::Ordering;

/// A tolerance used to check feasibility of a candidate vertex.
const FEASIBILITY_TOLERANCE: f64 = 1E-9;

/// An optimal point of the linear program.
#[derive(Clone, Debug)]
pub struct LinearProgramSolution {
    /// Variable values.
    pub point: Vec<f64>,
    /// Objective value at the point.
    pub objective: f64,
    /// Names of constraints which are tight at the point, bounds are named `<variable> >= 0`.
    pub active: Vec<String>,
}

/// A row of the constraint matrix: `coefficients·x (= | <=) rhs`.
struct Row {
    name: String,
    coefficients: Vec<f64>,
    rhs: f64,
}

/// Solves the problem exactly by enumerating vertices of the feasible polyhedron.
///
/// Every vertex is an intersection of all equality constraints and some inequalities (including
/// `x >= 0` bounds) taken as equalities. The feasible vertex with the minimal objective is
/// returned, ties are resolved in favour of the first enumerated one. The optimum is assumed to be
/// bounded which holds for non-negative costs.
pub fn solve_linear_program(problem: &EnergyProblem) -> GenericResult<LinearProgramSolution> {
    let size = problem.size();

    let (equalities, mut inequalities): (Vec<_>, Vec<_>) = problem
        .constraints()
        .iter()
        .map(|constraint| {
            let row = Row {
                name: constraint.name.clone(),
                coefficients: constraint.coefficients.clone(),
                rhs: constraint.rhs,
            };
            (constraint.kind, row)
        })
        .partition(|(kind, _)| *kind == ConstraintKind::Equal);

    inequalities.extend(problem.variables().iter().enumerate().map(|(idx, variable)| {
        let mut coefficients = vec![0.; size];
        coefficients[idx] = -1.;
        (ConstraintKind::LessOrEqual, Row { name: format!("{variable} >= 0"), coefficients, rhs: 0. })
    }));

    let equalities = equalities.into_iter().map(|(_, row)| row).collect::<Vec<_>>();
    let inequalities = inequalities.into_iter().map(|(_, row)| row).collect::<Vec<_>>();

    if equalities.len() > size {
        return Err(GenericError::from(format!(
            "{} equality constraints over {size} variables are not supported",
            equalities.len()
        )));
    }

    let is_feasible = |point: &[f64]| {
        let lhs = |row: &Row| row.coefficients.iter().zip(point.iter()).map(|(a, x)| a * x).sum::<f64>();

        equalities.iter().all(|row| (lhs(row) - row.rhs).abs() <= FEASIBILITY_TOLERANCE * (1. + row.rhs.abs()))
            && inequalities.iter().all(|row| lhs(row) - row.rhs <= FEASIBILITY_TOLERANCE * (1. + row.rhs.abs()))
    };

    let mut best: Option<(Vec<f64>, f64, Vec<usize>)> = None;

    for selection in combinations(inequalities.len(), size - equalities.len()) {
        let rows = equalities.iter().chain(selection.iter().map(|&idx| &inequalities[idx]));
        let (matrix, rhs): (Vec<_>, Vec<_>) = rows.map(|row| (row.coefficients.clone(), row.rhs)).unzip();

        let Ok(point) = solve_linear_system(matrix, rhs) else {
            continue;
        };

        if !is_feasible(&point) {
            continue;
        }

        let objective = problem.objective(&point);
        let is_better = best.as_ref().is_none_or(|(_, known, _)| compare_floats(objective, *known) == Ordering::Less);

        if is_better {
            best = Some((point, objective, selection));
        }
    }

    let (point, objective, selection) = best.ok_or_else(|| GenericError::from("energy problem is infeasible"))?;

    let active = equalities
        .iter()
        .map(|row| row.name.clone())
        .chain(selection.into_iter().map(|idx| inequalities[idx].name.clone()))
        .collect();

    Ok(LinearProgramSolution { point, objective, active })
}

/// Returns all combinations of `k` indices out of `n` in lexicographic order.
fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    if k > n {
        return vec![];
    }

    let mut result = vec![];
    let mut current: Vec<usize> = (0..k).collect();

    loop {
        result.push(current.clone());

        let Some(position) = (0..k).rev().find(|&i| current[i] != i + n - k) else {
            break;
        };

        current[position] += 1;
        for i in (position + 1)..k {
            current[i] = current[i - 1] + 1;
        }
    }

    result
}
