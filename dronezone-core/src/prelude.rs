//! This module reimports commonly used types.

pub use crate::models::{AttributeValue, Attributes, Cost, Graph, GraphResult, Route, RoutingError, Weight};

pub use crate::algorithms::paths::shortest_path;
pub use crate::algorithms::tsp::{ApproximationSettings, solve_approximation, solve_nearest_neighbour};

pub use crate::solver::{Solver, TspMethod};

pub use crate::utils::{Environment, GenericError, GenericResult, InfoLogger};
