use crate::json::{ApiEdge, ApiId, ApiNode};
use dronezone_core::models::GraphInfo;
use dronezone_core::utils::GenericResult;
use serde::Serialize;
use std::io::{BufWriter, Write};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiGraphInfo {
    directed: bool,
    num_nodes: usize,
    num_edges: usize,
    nodes: Vec<ApiNode>,
    edges: Vec<ApiEdge>,
}

/// Writes basic information about the graph in pretty json format.
pub fn write_graph_info<W: Write>(info: &GraphInfo, writer: BufWriter<W>) -> GenericResult<()> {
    let info = ApiGraphInfo {
        directed: info.directed,
        num_nodes: info.num_nodes,
        num_edges: info.num_edges,
        nodes: info
            .nodes
            .iter()
            .map(|(id, attributes)| ApiNode {
                id: ApiId::Text(id.clone()),
                attributes: Some(crate::json::from_attributes(attributes)),
            })
            .collect(),
        edges: info
            .edges
            .iter()
            .map(|(source, target, weight)| ApiEdge {
                source: ApiId::Text(source.clone()),
                target: ApiId::Text(target.clone()),
                weight: Some(*weight),
            })
            .collect(),
    };

    serde_json::to_writer_pretty(writer, &info).map_err(|err| err.to_string().into())
}
