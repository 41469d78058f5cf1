//! A solver facade which runs routing algorithms and reports progress through the environment.

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

use crate::algorithms::paths::shortest_path;
use crate::algorithms::tsp::{ApproximationSettings, solve_approximation, solve_nearest_neighbour};
use crate::models::{Graph, GraphResult, Route};
use crate::utils::{Environment, Timer};
use std::fmt::{Display, Formatter};

/// Specifies a method used to solve the traveling salesman problem.
#[derive(Clone, Debug)]
pub enum TspMethod {
    /// Greedy nearest neighbour heuristic.
    NearestNeighbour {
        /// A start node, the first node is used when omitted.
        start: Option<String>,
    },
    /// Approximation algorithm on the metric closure.
    Approximation(ApproximationSettings),
}

impl Display for TspMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NearestNeighbour { .. } => write!(f, "nearest-neighbour"),
            Self::Approximation(_) => write!(f, "approximation"),
        }
    }
}

/// Runs algorithms over a graph and logs their outcome.
pub struct Solver {
    environment: Environment,
}

impl Solver {
    /// Creates a new instance of `Solver`.
    pub fn new(environment: Environment) -> Self {
        Self { environment }
    }

    /// Solves the traveling salesman problem with the given method.
    pub fn solve_tsp(&self, graph: &Graph, method: &TspMethod) -> GraphResult<Route> {
        self.log(&format!(
            "solving tsp using {method} on graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        ));

        let (result, duration) = Timer::measure_duration(|| match method {
            TspMethod::NearestNeighbour { start } => solve_nearest_neighbour(graph, start.as_deref()),
            TspMethod::Approximation(settings) => solve_approximation(graph, settings),
        });

        match &result {
            Ok(route) => {
                if !route.covers(graph) {
                    self.log(&format!("{method} stopped early: {} of {} nodes visited", route.nodes.len(), graph.node_count()));
                } else if !route.is_closed() && graph.node_count() > 1 {
                    self.log(&format!("{method} cannot return to the start node, route is open"));
                }
                self.log(&format!("{method} found route with cost {} in {}ms", route.cost, duration.as_millis()));
            }
            Err(err) => self.log(&format!("{method} failed: {err}")),
        }

        result
    }

    /// Finds a minimal path between two nodes.
    pub fn shortest_path(&self, graph: &Graph, source: &str, target: &str) -> GraphResult<Route> {
        Timer::measure_duration_with_callback(
            || shortest_path(graph, source, target),
            |duration| self.log(&format!("shortest path '{source}' -> '{target}' computed in {}ms", duration.as_millis())),
        )
    }

    fn log(&self, message: &str) {
        (self.environment.logger)(message)
    }
}
