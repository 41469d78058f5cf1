#[cfg(test)]
#[path = "../../tests/unit/commands/energy_test.rs"]
mod energy_test;

use super::*;
use clap::Command;
use dronezone_cli::core::algorithms::energy::*;
use serde::Serialize;

const TOLERANCE_ARG_NAME: &str = "tolerance";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EnergyReport {
    variables: Vec<String>,
    linear_program: LinearProgramReport,
    lagrange: LagrangeReport,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LinearProgramReport {
    point: Vec<f64>,
    objective: f64,
    active: Vec<String>,
    verification: VerificationReport,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LagrangeReport {
    point: Vec<f64>,
    multipliers: Vec<f64>,
    objective: f64,
    stationarity_residual: f64,
    verification: VerificationReport,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VerificationReport {
    feasible: bool,
    non_negative: bool,
    checks: Vec<CheckReport>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckReport {
    name: String,
    lhs: f64,
    rhs: f64,
    violation: f64,
    satisfied: bool,
}

impl From<Verification> for VerificationReport {
    fn from(verification: Verification) -> Self {
        Self {
            feasible: verification.is_feasible(),
            non_negative: verification.non_negative,
            checks: verification
                .checks
                .into_iter()
                .map(|check| CheckReport {
                    name: check.name,
                    lhs: check.lhs,
                    rhs: check.rhs,
                    violation: check.violation,
                    satisfied: check.satisfied,
                })
                .collect(),
        }
    }
}

pub fn get_energy_app() -> Command {
    Command::new("energy")
        .about("Optimizes energy consumption of a drone flight split between flat, urban and mountain zones")
        .arg(
            Arg::new(TOLERANCE_ARG_NAME)
                .help("Specifies tolerance used to verify solutions")
                .short('t')
                .long(TOLERANCE_ARG_NAME)
                .required(false),
        )
        .arg(out_result_arg())
}

pub fn run_energy(matches: &ArgMatches) -> GenericResult<()> {
    let tolerance = parse_float_value::<f64>(matches, TOLERANCE_ARG_NAME, "tolerance")?.unwrap_or(DEFAULT_TOLERANCE);
    let problem = EnergyProblem::drone_zones();

    let linear_program = solve_linear_program(&problem)?;
    let lagrange = solve_lagrange(&problem)?;

    let report = EnergyReport {
        variables: problem.variables().to_vec(),
        linear_program: LinearProgramReport {
            verification: verify(&problem, &linear_program.point, tolerance).into(),
            point: linear_program.point,
            objective: linear_program.objective,
            active: linear_program.active,
        },
        lagrange: LagrangeReport {
            verification: verify(&problem, &lagrange.point, tolerance).into(),
            point: lagrange.point,
            multipliers: lagrange.multipliers,
            objective: lagrange.objective,
            stationarity_residual: lagrange.stationarity_residual,
        },
    };

    serde_json::to_writer_pretty(create_out_buffer(matches)?, &report).map_err(|err| err.to_string().into())
}
