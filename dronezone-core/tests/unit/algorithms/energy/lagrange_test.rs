use super::*;
use crate::algorithms::energy::LinearConstraint;

#[test]
fn can_find_stationary_point_for_drone_zones() {
    let problem = EnergyProblem::drone_zones();

    let solution = solve_lagrange(&problem).unwrap();

    assert_close!(solution.point[0], 90. / 17.);
    assert_close!(solution.point[1], 120. / 17.);
    assert_close!(solution.point[2], 45. / 17.);
    assert_close!(solution.objective, 283.5 / 17.);
    assert_close!(solution.multipliers[0], 18.9 / 17.);
    assert!(solution.stationarity_residual < 1E-9);
}

#[test]
fn can_fail_when_constraints_do_not_fix_the_point() {
    let problem = EnergyProblem::new(
        vec!["x".to_string(), "y".to_string()],
        vec![1., 2.],
        vec![LinearConstraint::equal("sum", vec![1., 1.], 10.)],
    )
    .unwrap();

    let result = solve_lagrange(&problem);

    assert!(result.is_err());
}
