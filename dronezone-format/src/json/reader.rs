#[cfg(test)]
#[path = "../../tests/unit/json/reader_test.rs"]
mod reader_test;

use super::*;
use dronezone_core::models::{Graph, GraphResult, RoutingError};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A trait to read a graph from json format.
pub trait JsonGraph {
    /// Reads a graph from json.
    fn read_json_graph(self) -> GraphResult<Graph>;
}

impl<R: Read> JsonGraph for BufReader<R> {
    fn read_json_graph(self) -> GraphResult<Graph> {
        let api_graph: ApiGraph = serde_json::from_reader(self).map_err(|err| RoutingError::malformed(err.to_string()))?;

        create_graph(api_graph)
    }
}

impl JsonGraph for String {
    fn read_json_graph(self) -> GraphResult<Graph> {
        BufReader::new(self.as_bytes()).read_json_graph()
    }
}

/// Loads a graph from json file.
pub fn load_graph_from_json<P: AsRef<Path>>(path: P) -> GraphResult<Graph> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|err| RoutingError::malformed(format!("cannot open graph file '{}': {err}", path.display())))?;

    BufReader::new(file).read_json_graph()
}

fn create_graph(api_graph: ApiGraph) -> GraphResult<Graph> {
    let mut graph = Graph::new(api_graph.directed);

    api_graph.nodes.into_iter().for_each(|node| {
        graph.add_node(&node.id.to_string(), node.attributes.map(to_attributes).unwrap_or_default());
    });

    api_graph.edges.into_iter().try_for_each(|edge| {
        let (source, target) = (edge.source.to_string(), edge.target.to_string());

        if let Some(unknown) = [&source, &target].into_iter().find(|id| !graph.contains(id)) {
            return Err(RoutingError::malformed(format!(
                "edge '{source}' -> '{target}' references unknown node '{unknown}'"
            )));
        }

        graph.add_edge(&source, &target, edge.weight).map_err(|err| RoutingError::malformed(err.to_string()))
    })?;

    Ok(graph)
}
