//! Contains logic to read undirected graphs from a simple csv edge list.

#[cfg(test)]
#[path = "../../tests/unit/csv/reader_test.rs"]
mod reader_test;

use dronezone_core::models::{Attributes, Graph, GraphResult, RoutingError, Weight};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CsvEdge {
    source: Option<String>,
    target: Option<String>,
    #[serde(default)]
    weight: Option<Weight>,
}

/// A trait to read an undirected graph from csv format with `source,target[,weight]` header.
pub trait CsvGraph {
    /// Reads a graph from csv.
    fn read_csv_graph(self) -> GraphResult<Graph>;
}

impl<R: Read> CsvGraph for BufReader<R> {
    fn read_csv_graph(self) -> GraphResult<Graph> {
        let mut reader = ::csv::ReaderBuilder::new().trim(::csv::Trim::All).from_reader(self);
        let mut graph = Graph::undirected();

        for (row, entry) in reader.deserialize::<CsvEdge>().enumerate() {
            let row = row + 1;
            let entry = entry.map_err(|err| RoutingError::malformed(format!("row {row}: {err}")))?;

            let source = required_field(entry.source, "source", row)?;
            let target = required_field(entry.target, "target", row)?;

            graph.add_node(&source, Attributes::default());
            graph.add_node(&target, Attributes::default());
            graph
                .add_edge(&source, &target, entry.weight)
                .map_err(|err| RoutingError::malformed(format!("row {row}: {err}")))?;
        }

        Ok(graph)
    }
}

impl CsvGraph for String {
    fn read_csv_graph(self) -> GraphResult<Graph> {
        BufReader::new(self.as_bytes()).read_csv_graph()
    }
}

/// Loads an undirected graph from csv file.
pub fn load_graph_from_csv<P: AsRef<Path>>(path: P) -> GraphResult<Graph> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|err| RoutingError::malformed(format!("cannot open graph file '{}': {err}", path.display())))?;

    BufReader::new(file).read_csv_graph()
}

fn required_field(value: Option<String>, name: &str, row: usize) -> GraphResult<String> {
    value.filter(|value| !value.is_empty()).ok_or_else(|| RoutingError::malformed(format!("row {row}: missing {name}")))
}
