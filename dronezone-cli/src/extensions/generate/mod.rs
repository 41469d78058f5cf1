//! Generate command helpers.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/generate/generate_test.rs"]
mod generate_test;

use dronezone_core::models::{AttributeValue, Attributes, Graph};
use dronezone_core::utils::GenericResult;
use rand::prelude::*;
use rand::rngs::SmallRng;

/// A side of the square area where zones are placed.
const AREA_SIZE: f64 = 100.;

/// Generates a random undirected graph of flight zones: a `Base` node and `Z1..` zones placed in
/// a square area with edge weights equal to euclidean distances between zones.
///
/// Zones are chained by a spanning path, so the graph is always connected. Any other pair of zones
/// is connected with the given probability (`density`).
pub fn generate_graph(size: usize, density: f64, seed: Option<u64>) -> GenericResult<Graph> {
    if size == 0 {
        return Err("amount of nodes should be greater than zero".into());
    }

    if !(0. ..=1.).contains(&density) {
        return Err(format!("density should be in [0, 1] range, got: {density}").into());
    }

    let mut random = seed.map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);

    let zones = (0..size)
        .map(|idx| {
            let id = if idx == 0 { "Base".to_string() } else { format!("Z{idx}") };
            let (x, y) = (round(random.gen_range(0. ..AREA_SIZE)), round(random.gen_range(0. ..AREA_SIZE)));

            (id, x, y)
        })
        .collect::<Vec<_>>();

    let mut graph = Graph::undirected();
    zones.iter().for_each(|(id, x, y)| {
        let attributes = Attributes::from([
            ("x".to_string(), AttributeValue::Number(*x)),
            ("y".to_string(), AttributeValue::Number(*y)),
        ]);
        graph.add_node(id, attributes);
    });

    let distance = |from: usize, to: usize| {
        let ((_, x1, y1), (_, x2, y2)) = (&zones[from], &zones[to]);
        // keep weights positive for zones which share coordinates
        round((x1 - x2).hypot(y1 - y2)).max(0.01)
    };

    for from in 0..size {
        for to in (from + 1)..size {
            if to == from + 1 || random.gen_bool(density) {
                graph.add_edge(&zones[from].0, &zones[to].0, Some(distance(from, to)))?;
            }
        }
    }

    Ok(graph)
}

fn round(value: f64) -> f64 {
    (value * 100.).round() / 100.
}
