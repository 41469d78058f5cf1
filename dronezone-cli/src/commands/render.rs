#[cfg(test)]
#[path = "../../tests/unit/commands/render_test.rs"]
mod render_test;

use super::*;
use clap::Command;
use dronezone_cli::core::models::{Route, route_cost};
use dronezone_cli::extensions::config::get_render_style;
use dronezone_cli::format::output::write_dot;

const TITLE_ARG_NAME: &str = "title";
const ROUTE_ARG_NAME: &str = "route";

pub fn get_render_app() -> Command {
    Command::new("render")
        .about("Renders flight zones graph with an optional route in Graphviz DOT format")
        .arg(graph_format_arg())
        .arg(graph_path_arg())
        .arg(
            Arg::new(TITLE_ARG_NAME)
                .help("Specifies a title of the rendered graph")
                .short('t')
                .long(TITLE_ARG_NAME)
                .default_value("Flight zones"),
        )
        .arg(
            Arg::new(ROUTE_ARG_NAME)
                .help("Specifies comma separated node ids of the route to highlight")
                .short('r')
                .long(ROUTE_ARG_NAME)
                .required(false),
        )
        .arg(out_result_arg())
        .arg(config_arg())
}

pub fn run_render(matches: &ArgMatches) -> GenericResult<()> {
    let config = read_config_from_args(matches)?;
    let graph = read_graph(matches)?;
    let title = matches.get_one::<String>(TITLE_ARG_NAME).map(String::as_str).unwrap_or_default();

    let route = matches
        .get_one::<String>(ROUTE_ARG_NAME)
        .map(|route| {
            let nodes = route.split(',').map(|id| id.trim().to_string()).collect::<Vec<_>>();
            route_cost(&graph, nodes.as_slice()).map(|cost| Route::new(nodes, cost))
        })
        .transpose()?;

    write_dot(&graph, route.as_ref(), title, &get_render_style(&config), create_out_buffer(matches)?)
}
