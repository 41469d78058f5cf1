#[cfg(test)]
#[path = "../../tests/unit/output/report_test.rs"]
mod report_test;

use dronezone_core::models::{Cost, Route};
use dronezone_core::utils::GenericResult;
use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Write};

/// A result of a single routing algorithm run.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteReport {
    /// A name of the method which produced the route.
    pub method: String,
    /// Visited nodes in visiting order.
    pub nodes: Vec<String>,
    /// Total cost of the route.
    pub cost: Cost,
    /// Whether the route ends where it starts.
    pub closed: bool,
}

impl RouteReport {
    /// Creates a new report from the route.
    pub fn new(method: &str, route: &Route) -> Self {
        Self { method: method.to_string(), nodes: route.nodes.clone(), cost: route.cost, closed: route.is_closed() }
    }

    /// Writes the report in pretty json format.
    pub fn write_report<W: Write>(&self, writer: BufWriter<W>) -> GenericResult<()> {
        serde_json::to_writer_pretty(writer, self).map_err(|err| err.to_string().into())
    }
}

/// Writes many reports as a json array.
pub fn write_reports<W: Write>(reports: &[RouteReport], writer: BufWriter<W>) -> GenericResult<()> {
    serde_json::to_writer_pretty(writer, reports).map_err(|err| err.to_string().into())
}
