use super::*;
use crate::helpers::{create_graph, write_to_string};

fn render(graph: &Graph, route: Option<&Route>, style: &RenderStyle) -> String {
    write_to_string(|writer| write_dot(graph, route, "Zones", style, writer).unwrap())
}

#[test]
fn can_render_undirected_graph_with_route() {
    let graph = create_graph(false, &["Base", "A", "B"], &[("Base", "A", 10.), ("A", "B", 20.), ("B", "Base", 15.)]);
    let route = Route::new(vec!["Base".into(), "A".into(), "Base".into()], 20.);

    let dot = render(&graph, Some(&route), &RenderStyle::default());

    assert!(dot.starts_with("graph \"Zones\" {"));
    assert!(dot.contains("  \"Base\" [fillcolor=\"orange\"];"));
    assert!(dot.contains("  \"B\";"));
    assert!(dot.contains("  \"Base\" -- \"A\" [label=\"10\", color=\"blue\", penwidth=3];"));
    assert!(dot.contains("  \"A\" -- \"B\" [label=\"20\"];"));
    assert!(dot.contains("  \"B\" -- \"Base\" [label=\"15\"];"));
    assert!(dot.trim_end().ends_with('}'));
}

#[test]
fn can_render_directed_graph_respecting_direction() {
    let graph = create_graph(true, &["A", "B"], &[("A", "B", 1.), ("B", "A", 2.)]);
    let route = Route::new(vec!["A".into(), "B".into()], 1.);

    let dot = render(&graph, Some(&route), &RenderStyle::default());

    assert!(dot.starts_with("digraph"));
    assert!(dot.contains("\"A\" -> \"B\" [label=\"1\", color=\"blue\""));
    assert!(dot.contains("\"B\" -> \"A\" [label=\"2\"];"));
}

#[test]
fn can_apply_custom_style() {
    let graph = create_graph(false, &["A \"x\"", "B"], &[("A \"x\"", "B", 1.)]);
    let style: RenderStyle = serde_json::from_str(r#"{ "nodeColor": "white", "fontSize": 8 }"#).unwrap();

    let dot = render(&graph, None, &style);

    assert_eq!(style.route_node_color, RenderStyle::default().route_node_color);
    assert!(dot.contains("fillcolor=\"white\", fontsize=8"));
    assert!(dot.contains("\"A \\\"x\\\"\" -- \"B\""));
    assert!(!dot.contains("penwidth"));
}
