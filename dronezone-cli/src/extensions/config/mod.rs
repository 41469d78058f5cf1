//! Contains configuration which can be used to tweak commands behavior.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/config/config_test.rs"]
mod config_test;

use dronezone_core::algorithms::tsp::ApproximationSettings;
use dronezone_core::solver::TspMethod;
use dronezone_core::utils::{Environment, GenericResult};
use dronezone_format::output::RenderStyle;
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// A configuration of command line interface.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
    /// Specifies traveling salesman problem configuration.
    pub tsp: Option<TspConfig>,
    /// Specifies render style.
    pub render: Option<RenderStyle>,
}

/// A logging configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled. Default is true.
    pub enabled: bool,
}

/// A traveling salesman problem configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TspConfig {
    /// A method to use. Default is both.
    pub method: Option<TspMethodType>,
    /// A start node of nearest neighbour heuristic. Default is the first node of the graph.
    pub start: Option<String>,
    /// Specifies whether approximation tour is refined by 2-opt. Default is true.
    pub refine: Option<bool>,
}

/// Specifies which traveling salesman heuristic is used.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TspMethodType {
    /// Nearest neighbour heuristic.
    NearestNeighbour,
    /// Approximation heuristic.
    Approximation,
    /// Both heuristics, their results are reported side by side.
    Both,
}

impl TryFrom<&str> for TspMethodType {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "nearest-neighbour" => Ok(Self::NearestNeighbour),
            "approximation" => Ok(Self::Approximation),
            "both" => Ok(Self::Both),
            _ => Err(format!("unknown tsp method: '{value}'")),
        }
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Checks whether logging is enabled: it is on by default and can be disabled by config or `quiet` flag.
pub fn is_logging_enabled(config: &Config, quiet: bool) -> bool {
    !quiet && config.logging.as_ref().is_none_or(|logging| logging.enabled)
}

/// Creates an environment which logs to stderr when logging is enabled, stdout is left to results.
pub fn create_environment(config: &Config, quiet: bool) -> Environment {
    if is_logging_enabled(config, quiet) {
        Environment::new(Arc::new(|msg: &str| eprintln!("{msg}")))
    } else {
        Environment::silent()
    }
}

/// Creates tsp methods to run, explicit arguments take precedence over config values.
pub fn create_tsp_methods(
    config: &Config,
    method: Option<TspMethodType>,
    start: Option<String>,
    no_refine: bool,
) -> Vec<TspMethod> {
    let tsp = config.tsp.clone().unwrap_or_default();

    let method = method.or(tsp.method).unwrap_or(TspMethodType::Both);
    let start = start.or(tsp.start);
    let refine = !no_refine && tsp.refine.unwrap_or(true);

    let nearest_neighbour = TspMethod::NearestNeighbour { start };
    let approximation = TspMethod::Approximation(ApproximationSettings { refine });

    match method {
        TspMethodType::NearestNeighbour => vec![nearest_neighbour],
        TspMethodType::Approximation => vec![approximation],
        TspMethodType::Both => vec![nearest_neighbour, approximation],
    }
}

/// Returns render style from config or default one.
pub fn get_render_style(config: &Config) -> RenderStyle {
    config.render.clone().unwrap_or_default()
}
