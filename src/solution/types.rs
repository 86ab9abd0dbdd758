//! Core trait definitions for boolean-vector problems.
//!
//! [`BinaryProblem`] is the contract between the generic neighborhood
//! engine and a concrete problem instance: it supplies the expected vector
//! length, the objective function, and the optimization [`Direction`].

use crate::error::Result;

/// Marker trait for objective values.
///
/// Objectives must support comparison and be cheaply copyable. Built-in
/// implementations exist for the primitive float and integer types.
pub trait Objective: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Converts the objective to `f64` for logging and statistics.
    fn to_f64(self) -> f64;
}

macro_rules! impl_objective {
    ($($t:ty),*) => {
        $(
            impl Objective for $t {
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_objective!(f64, f32, i32, i64, u32, u64, usize);

/// Whether larger or smaller objective values are better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Larger objective values are better.
    #[default]
    Maximize,
    /// Smaller objective values are better.
    Minimize,
}

impl Direction {
    /// Returns `true` if `a` is strictly better than `b`.
    ///
    /// Equal values are never better. Incomparable values (NaN) are
    /// neither better nor worse.
    pub fn is_better_obj<O: Objective>(self, a: O, b: O) -> bool {
        match self {
            Direction::Maximize => a > b,
            Direction::Minimize => a < b,
        }
    }

    /// Returns `true` if `a` is strictly worse than `b`.
    pub fn is_worse_obj<O: Objective>(self, a: O, b: O) -> bool {
        match self {
            Direction::Maximize => a < b,
            Direction::Minimize => a > b,
        }
    }
}

/// A binary decision problem whose candidate solutions are boolean vectors.
///
/// The problem instance is borrowed read-only by every
/// [`BoolVectorSolution`](super::BoolVectorSolution) created for it.
///
/// # Implementing
///
/// ```
/// use u_boolvec::solution::BinaryProblem;
///
/// /// Maximize the number of set bits.
/// struct OneMax {
///     n: usize,
/// }
///
/// impl BinaryProblem for OneMax {
///     type Objective = usize;
///
///     fn size(&self) -> usize {
///         self.n
///     }
///
///     fn calc_objective(&self, x: &[bool]) -> usize {
///         x.iter().filter(|&&b| b).count()
///     }
/// }
/// ```
///
/// # Thread Safety
///
/// `BinaryProblem` must be `Send + Sync` because neighbor batches may be
/// evaluated in parallel using rayon.
pub trait BinaryProblem: Send + Sync {
    /// The objective value type.
    type Objective: Objective;

    /// Expected length of solution vectors for this instance.
    fn size(&self) -> usize;

    /// Computes the objective of the given vector.
    ///
    /// This is typically the most expensive operation; solutions cache its
    /// result until they are mutated.
    fn calc_objective(&self, x: &[bool]) -> Self::Objective;

    /// Optimization direction. Defaults to maximization.
    fn direction(&self) -> Direction {
        Direction::Maximize
    }

    /// Problem-specific feasibility check.
    ///
    /// Runs after the structural length check in
    /// [`BoolVectorSolution::check`](super::BoolVectorSolution::check).
    /// The default accepts every vector.
    fn check_solution(&self, _x: &[bool]) -> Result<()> {
        Ok(())
    }
}
