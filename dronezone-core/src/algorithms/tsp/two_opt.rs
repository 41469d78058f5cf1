#[cfg(test)]
#[path = "../../../tests/unit/algorithms/tsp/two_opt_test.rs"]
mod two_opt_test;

use super::*;

/// Minimal gain which is considered as an improvement.
const IMPROVEMENT_THRESHOLD: Cost = 1E-9;

/// Implements the 2-opt move operation for tour improvement on symmetric costs.
///
/// A move removes two edges from a tour and reconnects the resulting paths by reversing the
/// segment between them. The first node of the tour is never moved.
pub(crate) struct TwoOpt<'a, T> {
    adjacency: &'a T,
}

impl<'a, T> TwoOpt<'a, T>
where
    T: AdjacencySpec,
{
    /// Creates a new instance of [TwoOpt].
    pub fn new(adjacency: &'a T) -> Self {
        Self { adjacency }
    }

    /// Applies first improving moves until no move shortens the tour.
    /// The tour is given without the closing node.
    pub fn optimize(&self, mut tour: Path) -> Path {
        let size = tour.len();
        if size < 4 {
            return tour;
        }

        let mut improved = true;
        while improved {
            improved = false;

            for i in 0..size - 2 {
                for j in (i + 2)..size {
                    if i == 0 && j == size - 1 {
                        continue;
                    }

                    if self.gain(&tour, i, j) > IMPROVEMENT_THRESHOLD {
                        tour[i + 1..=j].reverse();
                        improved = true;
                    }
                }
            }
        }

        tour
    }

    /// Returns the cost decrease of replacing edges (i, i + 1) and (j, j + 1)
    /// with (i, j) and (i + 1, j + 1).
    fn gain(&self, tour: &[Node], i: usize, j: usize) -> Cost {
        let (a, b) = (tour[i], tour[i + 1]);
        let (c, d) = (tour[j], tour[(j + 1) % tour.len()]);

        self.adjacency.cost(&(a, b)) + self.adjacency.cost(&(c, d))
            - self.adjacency.cost(&(a, c))
            - self.adjacency.cost(&(b, d))
    }
}

