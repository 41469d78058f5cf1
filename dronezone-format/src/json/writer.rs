#[cfg(test)]
#[path = "../../tests/unit/json/writer_test.rs"]
mod writer_test;

use super::*;
use dronezone_core::models::Graph;
use dronezone_core::utils::GenericResult;
use std::io::{BufWriter, Write};

/// Creates a json document from the graph.
pub fn create_api_graph(graph: &Graph) -> ApiGraph {
    let info = graph.info();

    ApiGraph {
        directed: info.directed,
        nodes: info
            .nodes
            .iter()
            .map(|(id, attributes)| ApiNode {
                id: ApiId::Text(id.clone()),
                attributes: if attributes.is_empty() { None } else { Some(from_attributes(attributes)) },
            })
            .collect(),
        edges: info
            .edges
            .into_iter()
            .map(|(source, target, weight)| ApiEdge {
                source: ApiId::Text(source),
                target: ApiId::Text(target),
                weight: Some(weight),
            })
            .collect(),
    }
}

/// Writes the graph in json format.
pub fn write_json_graph<W: Write>(graph: &Graph, writer: BufWriter<W>) -> GenericResult<()> {
    serde_json::to_writer_pretty(writer, &create_api_graph(graph)).map_err(|err| err.to_string().into())
}
