#[cfg(test)]
#[path = "../../tests/unit/commands/path_test.rs"]
mod path_test;

use super::*;
use clap::Command;
use dronezone_cli::core::solver::Solver;
use dronezone_cli::extensions::config::create_environment;
use dronezone_cli::format::output::RouteReport;

const SOURCE_ARG_NAME: &str = "SOURCE";
const TARGET_ARG_NAME: &str = "TARGET";

pub fn get_path_app() -> Command {
    Command::new("path")
        .about("Finds a minimal weight path between two flight zones")
        .arg(graph_format_arg())
        .arg(graph_path_arg())
        .arg(Arg::new(SOURCE_ARG_NAME).help("Sets source node id").required(true).index(3))
        .arg(Arg::new(TARGET_ARG_NAME).help("Sets target node id").required(true).index(4))
        .arg(out_result_arg())
        .arg(config_arg())
        .arg(quiet_arg())
}

pub fn run_path(matches: &ArgMatches) -> GenericResult<()> {
    let config = read_config_from_args(matches)?;
    let graph = read_graph(matches)?;

    let get_node = |name: &str| {
        matches.get_one::<String>(name).ok_or_else(|| GenericError::from(format!("{name} is not set")))
    };
    let (source, target) = (get_node(SOURCE_ARG_NAME)?, get_node(TARGET_ARG_NAME)?);

    let solver = Solver::new(create_environment(&config, matches.get_flag(QUIET_ARG_NAME)));
    let route = solver.shortest_path(&graph, source, target)?;

    RouteReport::new("shortest-path", &route).write_report(create_out_buffer(matches)?)
}
