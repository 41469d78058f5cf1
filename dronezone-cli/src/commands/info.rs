#[cfg(test)]
#[path = "../../tests/unit/commands/info_test.rs"]
mod info_test;

use super::*;
use clap::Command;
use dronezone_cli::format::output::write_graph_info;

pub fn get_info_app() -> Command {
    Command::new("info")
        .about("Prints nodes, edges and their attributes of flight zones graph")
        .arg(graph_format_arg())
        .arg(graph_path_arg())
        .arg(out_result_arg())
}

pub fn run_info(matches: &ArgMatches) -> GenericResult<()> {
    let graph = read_graph(matches)?;

    write_graph_info(&graph.info(), create_out_buffer(matches)?)
}
