#[cfg(test)]
#[path = "../../tests/unit/output/dot_test.rs"]
mod dot_test;

use dronezone_core::models::{Graph, Route};
use dronezone_core::utils::GenericResult;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::{BufWriter, Write};

/// Specifies how the graph and the route are rendered.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderStyle {
    /// A fill color of nodes which are not part of the route.
    pub node_color: String,
    /// A fill color of route nodes.
    pub route_node_color: String,
    /// A color of route edges.
    pub route_edge_color: String,
    /// A color of edge weight labels.
    pub edge_label_color: String,
    /// A pen width of route edges.
    pub route_edge_width: f64,
    /// A font size of all labels.
    pub font_size: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            node_color: "lightgray".to_string(),
            route_node_color: "orange".to_string(),
            route_edge_color: "blue".to_string(),
            edge_label_color: "red".to_string(),
            route_edge_width: 3.,
            font_size: 12.,
        }
    }
}

/// Renders the graph with an optional highlighted route as a Graphviz DOT document.
pub fn write_dot<W: Write>(
    graph: &Graph,
    route: Option<&Route>,
    title: &str,
    style: &RenderStyle,
    writer: BufWriter<W>,
) -> GenericResult<()> {
    let mut writer = writer;
    let directed = graph.is_directed();
    let edge_key = |source: &str, target: &str| {
        if directed || source <= target { (source.to_string(), target.to_string()) } else { (target.to_string(), source.to_string()) }
    };

    let route_nodes = route.map_or_else(HashSet::new, |route| route.nodes.iter().cloned().collect::<HashSet<_>>());
    let route_edges = route.map_or_else(HashSet::new, |route| {
        route.nodes.windows(2).map(|pair| edge_key(&pair[0], &pair[1])).collect::<HashSet<_>>()
    });

    let (kind, connector) = if directed { ("digraph", "->") } else { ("graph", "--") };

    writeln!(writer, "{kind} \"{}\" {{", escape(title))?;
    writeln!(writer, "  label=\"{}\";", escape(title))?;
    writeln!(writer, "  fontsize={};", style.font_size)?;
    writeln!(
        writer,
        "  node [shape=circle, style=filled, fillcolor=\"{}\", fontsize={}];",
        escape(&style.node_color),
        style.font_size
    )?;
    writeln!(writer, "  edge [fontcolor=\"{}\", fontsize={}];", escape(&style.edge_label_color), style.font_size)?;

    for id in graph.nodes() {
        if route_nodes.contains(id) {
            writeln!(writer, "  \"{}\" [fillcolor=\"{}\"];", escape(id), escape(&style.route_node_color))?;
        } else {
            writeln!(writer, "  \"{}\";", escape(id))?;
        }
    }

    for edge in graph.edges() {
        let highlight = if route_edges.contains(&edge_key(edge.source, edge.target)) {
            format!(", color=\"{}\", penwidth={}", escape(&style.route_edge_color), style.route_edge_width)
        } else {
            String::new()
        };

        writeln!(
            writer,
            "  \"{}\" {connector} \"{}\" [label=\"{}\"{highlight}];",
            escape(edge.source),
            escape(edge.target),
            edge.weight
        )?;
    }

    writeln!(writer, "}}")?;
    writer.flush()?;

    Ok(())
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
