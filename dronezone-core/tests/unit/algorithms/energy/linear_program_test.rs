use super::*;
use crate::algorithms::energy::LinearConstraint;

#[test]
fn can_find_numerical_minimum_for_drone_zones() {
    let problem = EnergyProblem::drone_zones();

    let solution = solve_linear_program(&problem).unwrap();

    solution.point.iter().for_each(|&value| assert_close!(value, 0.));
    assert_close!(solution.objective, 0.);
    assert!(solution.active.contains(&"priority coverage".to_string()));
    assert!(solution.active.contains(&"energy balance".to_string()));
}

#[test]
fn can_hit_autonomy_limit_when_distance_is_required() {
    let zones = EnergyProblem::drone_zones();
    let mut constraints = zones.constraints().to_vec();
    constraints[0] = LinearConstraint::equal("autonomy", vec![1., 1., 1.], 15.);
    let problem = EnergyProblem::new(zones.variables().to_vec(), zones.costs().to_vec(), constraints).unwrap();

    let solution = solve_linear_program(&problem).unwrap();

    assert_close!(solution.point[0], 90. / 17.);
    assert_close!(solution.point[1], 120. / 17.);
    assert_close!(solution.point[2], 45. / 17.);
    assert_close!(solution.objective, 283.5 / 17.);
}

#[test]
fn can_choose_cheapest_vertex() {
    // minimize x + 2y subject to x + y >= 4 (as -x - y <= -4), x <= 3
    let problem = EnergyProblem::new(
        vec!["x".to_string(), "y".to_string()],
        vec![1., 2.],
        vec![
            LinearConstraint::less_or_equal("demand", vec![-1., -1.], -4.),
            LinearConstraint::less_or_equal("capacity", vec![1., 0.], 3.),
        ],
    )
    .unwrap();

    let solution = solve_linear_program(&problem).unwrap();

    assert_close!(solution.point[0], 3.);
    assert_close!(solution.point[1], 1.);
    assert_close!(solution.objective, 5.);
    assert_eq!(solution.active, vec!["demand".to_string(), "capacity".to_string()]);
}

#[test]
fn can_detect_infeasible_problem() {
    let problem = EnergyProblem::new(
        vec!["x".to_string()],
        vec![1.],
        vec![LinearConstraint::less_or_equal("negative", vec![1.], -1.)],
    )
    .unwrap();

    let result = solve_linear_program(&problem);

    assert_eq!(result.err(), Some(GenericError::from("energy problem is infeasible")));
}

#[test]
fn can_enumerate_combinations() {
    assert_eq!(combinations(4, 2), vec![vec![0, 1], vec![0, 2], vec![0, 3], vec![1, 2], vec![1, 3], vec![2, 3]]);
    assert_eq!(combinations(3, 0), vec![Vec::<usize>::new()]);
    assert!(combinations(2, 3).is_empty());
}
