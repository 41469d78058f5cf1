#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use clap::Command;
use dronezone_cli::core::solver::Solver;
use dronezone_cli::core::utils::compare_floats;
use dronezone_cli::extensions::config::{TspMethodType, create_environment, create_tsp_methods, get_render_style};
use dronezone_cli::format::output::{RouteReport, write_dot, write_reports};

const METHOD_ARG_NAME: &str = "method";
const START_ARG_NAME: &str = "start";
const NO_REFINE_ARG_NAME: &str = "no-refine";
const DOT_ARG_NAME: &str = "dot";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Solves traveling salesman problem over flight zones graph")
        .arg(graph_format_arg())
        .arg(graph_path_arg())
        .arg(
            Arg::new(METHOD_ARG_NAME)
                .help("Specifies heuristic to use, both are run side by side by default")
                .short('m')
                .long(METHOD_ARG_NAME)
                .required(false)
                .value_parser(["nearest-neighbour", "approximation", "both"]),
        )
        .arg(
            Arg::new(START_ARG_NAME)
                .help("Specifies start node for nearest neighbour heuristic")
                .short('s')
                .long(START_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(NO_REFINE_ARG_NAME)
                .help("Disables 2-opt refinement of approximation tour")
                .long(NO_REFINE_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
        .arg(
            Arg::new(DOT_ARG_NAME)
                .help("Specifies path to the file where the cheapest route is rendered in DOT format")
                .long(DOT_ARG_NAME)
                .required(false),
        )
        .arg(out_result_arg())
        .arg(config_arg())
        .arg(quiet_arg())
}

pub fn run_solve(matches: &ArgMatches) -> GenericResult<()> {
    let config = read_config_from_args(matches)?;
    let graph = read_graph(matches)?;

    let method = matches
        .get_one::<String>(METHOD_ARG_NAME)
        .map(|method| TspMethodType::try_from(method.as_str()))
        .transpose()?;
    let start = matches.get_one::<String>(START_ARG_NAME).cloned();
    let methods = create_tsp_methods(&config, method, start, matches.get_flag(NO_REFINE_ARG_NAME));

    let solver = Solver::new(create_environment(&config, matches.get_flag(QUIET_ARG_NAME)));

    let routes = methods
        .iter()
        .map(|method| solver.solve_tsp(&graph, method).map(|route| (method.to_string(), route)))
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(dot_path) = matches.get_one::<String>(DOT_ARG_NAME) {
        let cheapest = routes.iter().map(|(_, route)| route).min_by(|a, b| compare_floats(a.cost, b.cost));
        let writer = create_write_buffer(Some(create_file(dot_path, "dot")?));

        write_dot(&graph, cheapest, "Flight zones", &get_render_style(&config), writer)?;
    }

    let reports = routes.iter().map(|(method, route)| RouteReport::new(method, route)).collect::<Vec<_>>();

    write_reports(reports.as_slice(), create_out_buffer(matches)?)
}
