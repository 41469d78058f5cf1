#[cfg(test)]
#[path = "../../../tests/unit/algorithms/math/linear_test.rs"]
mod linear_test;

use crate::utils::{GenericError, GenericResult, compare_floats};

/// A pivot magnitude below which a matrix is considered singular.
const SINGULARITY_THRESHOLD: f64 = 1E-12;

/// Solves a square system of linear equations `Ax = b` using Gaussian elimination
/// with partial pivoting.
pub fn solve_linear_system(mut matrix: Vec<Vec<f64>>, mut rhs: Vec<f64>) -> GenericResult<Vec<f64>> {
    let size = rhs.len();

    if matrix.len() != size || matrix.iter().any(|row| row.len() != size) {
        return Err(GenericError::from(format!("expected square system of size {size}")));
    }

    for column in 0..size {
        let pivot = (column..size)
            .max_by(|&a, &b| compare_floats(matrix[a][column].abs(), matrix[b][column].abs()))
            .unwrap_or(column);

        if matrix[pivot][column].abs() < SINGULARITY_THRESHOLD {
            return Err("system of linear equations is singular".into());
        }

        matrix.swap(column, pivot);
        rhs.swap(column, pivot);

        for row in (column + 1)..size {
            let factor = matrix[row][column] / matrix[column][column];
            if factor == 0. {
                continue;
            }

            for k in column..size {
                matrix[row][k] -= factor * matrix[column][k];
            }
            rhs[row] -= factor * rhs[column];
        }
    }

    let mut solution = vec![0.; size];
    for row in (0..size).rev() {
        let tail = ((row + 1)..size).map(|k| matrix[row][k] * solution[k]).sum::<f64>();
        solution[row] = (rhs[row] - tail) / matrix[row][row];
    }

    Ok(solution)
}
