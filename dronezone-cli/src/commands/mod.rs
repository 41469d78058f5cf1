use clap::{Arg, ArgAction, ArgMatches};

pub mod energy;
pub mod generate;
pub mod info;
pub mod path;
pub mod render;
pub mod solve;

use dronezone_cli::core::models::Graph;
use dronezone_cli::core::utils::{GenericError, GenericResult};
use dronezone_cli::extensions::config::{Config, read_config};
use dronezone_cli::format::csv::load_graph_from_csv;
use dronezone_cli::format::json::load_graph_from_json;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write, stdout};
use std::str::FromStr;

pub(crate) const FORMAT_ARG_NAME: &str = "FORMAT";
pub(crate) const GRAPH_ARG_NAME: &str = "GRAPH";
pub(crate) const OUT_RESULT_ARG_NAME: &str = "out-result";
pub(crate) const CONFIG_ARG_NAME: &str = "config";
pub(crate) const QUIET_ARG_NAME: &str = "quiet";

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> GenericResult<File> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'").into())
}

fn create_file(path: &str, description: &str) -> GenericResult<File> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'").into())
}

/// Creates a write buffer for the file specified by `out-result` argument or stdout.
pub(crate) fn create_out_buffer(matches: &ArgMatches) -> GenericResult<BufWriter<Box<dyn Write>>> {
    let out_file =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    Ok(create_write_buffer(out_file))
}

pub(crate) fn graph_format_arg() -> Arg {
    Arg::new(FORMAT_ARG_NAME).help("Specifies graph format").required(true).value_parser(["json", "csv"]).index(1)
}

pub(crate) fn graph_path_arg() -> Arg {
    Arg::new(GRAPH_ARG_NAME).help("Sets the graph file to use").required(true).index(2)
}

pub(crate) fn out_result_arg() -> Arg {
    Arg::new(OUT_RESULT_ARG_NAME)
        .help("Specifies path to the file for result output")
        .short('o')
        .long(OUT_RESULT_ARG_NAME)
        .required(false)
}

pub(crate) fn config_arg() -> Arg {
    Arg::new(CONFIG_ARG_NAME)
        .help("Specifies path to the configuration file")
        .short('c')
        .long(CONFIG_ARG_NAME)
        .required(false)
}

pub(crate) fn quiet_arg() -> Arg {
    Arg::new(QUIET_ARG_NAME)
        .help("Disables logging")
        .short('q')
        .long(QUIET_ARG_NAME)
        .action(ArgAction::SetTrue)
        .required(false)
}

/// Reads the graph specified by format and graph path arguments.
pub(crate) fn read_graph(matches: &ArgMatches) -> GenericResult<Graph> {
    let format = matches.get_one::<String>(FORMAT_ARG_NAME).map(String::as_str).unwrap_or("json");
    let path = matches.get_one::<String>(GRAPH_ARG_NAME).ok_or_else(|| GenericError::from("graph path is not set"))?;

    match format {
        "json" => load_graph_from_json(path),
        "csv" => load_graph_from_csv(path),
        _ => return Err(format!("unknown graph format: '{format}'").into()),
    }
    .map_err(|err| format!("cannot read graph: {err}").into())
}

/// Reads configuration if its path is specified, otherwise returns default one.
pub(crate) fn read_config_from_args(matches: &ArgMatches) -> GenericResult<Config> {
    matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| open_file(path, "config").and_then(|file| read_config(BufReader::new(file))))
        .unwrap_or_else(|| Ok(Config::default()))
}

fn parse_float_value<T: FromStr<Err = std::num::ParseFloatError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> GenericResult<Option<T>> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>()
                .map_err(|err| format!("cannot get float value, error: '{err}': '{arg_desc}'").into())
                .map(Some)
        })
        .unwrap_or(Ok(None))
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> GenericResult<Option<T>> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>()
                .map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'").into())
                .map(Some)
        })
        .unwrap_or(Ok(None))
}
