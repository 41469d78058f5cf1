use super::*;

#[test]
fn can_solve_system_which_requires_pivoting() {
    let matrix = vec![vec![0., 2., 1.], vec![1., 1., 0.], vec![3., 0., 1.]];
    let rhs = vec![5., 3., 5.];

    let solution = solve_linear_system(matrix, rhs).unwrap();

    assert_close!(solution[0], 1.);
    assert_close!(solution[1], 2.);
    assert_close!(solution[2], 1.);
}

#[test]
fn can_detect_singular_system() {
    let matrix = vec![vec![1., 2.], vec![2., 4.]];

    let result = solve_linear_system(matrix, vec![1., 2.]);

    assert_eq!(result, Err(GenericError::from("system of linear equations is singular")));
}

#[test]
fn can_detect_non_square_system() {
    let result = solve_linear_system(vec![vec![1., 2.]], vec![1.]);

    assert!(result.is_err());
}
