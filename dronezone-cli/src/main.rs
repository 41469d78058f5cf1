//! A command line interface to plan drone flights over a graph of flight zones.
//!

#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/unit/main_test.rs"]
mod main_test;

mod commands;

mod cli {
    use crate::commands::energy::{get_energy_app, run_energy};
    use crate::commands::generate::{get_generate_app, run_generate};
    use crate::commands::info::{get_info_app, run_info};
    use crate::commands::path::{get_path_app, run_path};
    use crate::commands::render::{get_render_app, run_render};
    use crate::commands::solve::{get_solve_app, run_solve};
    use clap::{ArgMatches, Command};
    use std::process;

    pub fn get_app() -> Command {
        Command::new("Drone Flight Zone Router")
            .version(env!("CARGO_PKG_VERSION"))
            .about("A command line interface to plan drone flights over a weighted graph of flight zones")
            .subcommand(get_solve_app())
            .subcommand(get_path_app())
            .subcommand(get_info_app())
            .subcommand(get_energy_app())
            .subcommand(get_render_app())
            .subcommand(get_generate_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) {
        if let Err(err) = match arg_matches.subcommand() {
            Some(("solve", solve_matches)) => run_solve(solve_matches),
            Some(("path", path_matches)) => run_path(path_matches),
            Some(("info", info_matches)) => run_info(info_matches),
            Some(("energy", energy_matches)) => run_energy(energy_matches),
            Some(("render", render_matches)) => run_render(render_matches),
            Some(("generate", generate_matches)) => run_generate(generate_matches),
            _ => Err("no argument with sub command was used: use -h to print help information".into()),
        } {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}

fn main() {
    cli::run_subcommand(cli::get_app().get_matches());
}
