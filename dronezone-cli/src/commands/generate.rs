#[cfg(test)]
#[path = "../../tests/unit/commands/generate_test.rs"]
mod generate_test;

use super::*;
use clap::Command;
use dronezone_cli::extensions::generate::generate_graph;
use dronezone_cli::format::json::write_json_graph;

const NODES_ARG_NAME: &str = "nodes";
const SEED_ARG_NAME: &str = "seed";
const DENSITY_ARG_NAME: &str = "density";

pub fn get_generate_app() -> Command {
    Command::new("generate")
        .about("Generates a random graph of flight zones in json format")
        .arg(
            Arg::new(NODES_ARG_NAME)
                .help("Amount of nodes in generated graph")
                .short('n')
                .long(NODES_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies random seed to get reproducible graph")
                .short('s')
                .long(SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(DENSITY_ARG_NAME)
                .help("Probability of an extra edge between any pair of zones")
                .short('d')
                .long(DENSITY_ARG_NAME)
                .default_value("0.3"),
        )
        .arg(out_result_arg())
}

pub fn run_generate(matches: &ArgMatches) -> GenericResult<()> {
    let nodes = parse_int_value::<usize>(matches, NODES_ARG_NAME, "nodes")?
        .ok_or_else(|| GenericError::from("amount of nodes is not set"))?;
    let seed = parse_int_value::<u64>(matches, SEED_ARG_NAME, "seed")?;
    let density = parse_float_value::<f64>(matches, DENSITY_ARG_NAME, "density")?.unwrap_or(0.3);

    let graph = generate_graph(nodes, density, seed).map_err(|err| format!("cannot generate graph: '{err}'"))?;

    write_json_graph(&graph, create_out_buffer(matches)?)
}
