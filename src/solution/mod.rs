//! Boolean-vector solutions.
//!
//! A solution is a fixed-length `Vec<bool>` tied to a borrowed problem
//! instance, with an objective value that is computed on demand and cached
//! until the vector changes.
//!
//! # Core Traits
//!
//! - [`BinaryProblem`]: Problem definition (size, objective, direction, checks)
//! - [`Objective`]: Comparable, copyable objective values
//!
//! # Key Types
//!
//! - [`BoolVectorSolution`]: The solution vector with its objective cache
//! - [`Direction`]: Maximization or minimization

mod types;
mod vector;

pub use types::{BinaryProblem, Direction, Objective};
pub use vector::BoolVectorSolution;

#[cfg(test)]
pub(crate) mod fixtures {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::{BinaryProblem, Direction};
    use crate::error::{Result, SolutionError};

    /// Counts set bits.
    pub struct OneMax {
        n: usize,
        direction: Direction,
        max_ones: Option<usize>,
    }

    impl OneMax {
        pub fn new(n: usize) -> Self {
            Self {
                n,
                direction: Direction::Maximize,
                max_ones: None,
            }
        }

        pub fn minimizing(n: usize) -> Self {
            Self {
                direction: Direction::Minimize,
                ..Self::new(n)
            }
        }

        pub fn with_max_ones(mut self, max_ones: usize) -> Self {
            self.max_ones = Some(max_ones);
            self
        }
    }

    impl BinaryProblem for OneMax {
        type Objective = usize;

        fn size(&self) -> usize {
            self.n
        }

        fn calc_objective(&self, x: &[bool]) -> usize {
            x.iter().filter(|&&b| b).count()
        }

        fn direction(&self) -> Direction {
            self.direction
        }

        fn check_solution(&self, x: &[bool]) -> Result<()> {
            match self.max_ones {
                Some(max) if self.calc_objective(x) > max => Err(SolutionError::InvalidState(
                    format!("more than {max} positions set"),
                )),
                _ => Ok(()),
            }
        }
    }

    /// OneMax that records how often the objective was computed.
    pub struct CountingOneMax {
        n: usize,
        calls: AtomicUsize,
    }

    impl CountingOneMax {
        pub fn new(n: usize) -> Self {
            Self {
                n,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::Relaxed)
        }
    }

    impl BinaryProblem for CountingOneMax {
        type Objective = usize;

        fn size(&self) -> usize {
            self.n
        }

        fn calc_objective(&self, x: &[bool]) -> usize {
            self.calls.fetch_add(1, Ordering::Relaxed);
            x.iter().filter(|&&b| b).count()
        }
    }

    /// Weighted sum of set bits; negative weights reward clearing a bit.
    pub struct Weighted {
        pub weights: Vec<f64>,
        pub direction: Direction,
    }

    impl Weighted {
        pub fn new(weights: Vec<f64>) -> Self {
            Self {
                weights,
                direction: Direction::Maximize,
            }
        }
    }

    impl BinaryProblem for Weighted {
        type Objective = f64;

        fn size(&self) -> usize {
            self.weights.len()
        }

        fn calc_objective(&self, x: &[bool]) -> f64 {
            x.iter()
                .zip(&self.weights)
                .filter(|(&b, _)| b)
                .map(|(_, &w)| w)
                .sum()
        }

        fn direction(&self) -> Direction {
            self.direction
        }
    }
}
