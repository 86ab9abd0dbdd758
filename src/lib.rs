//! Boolean-vector solutions and k-flip neighborhoods for binary
//! optimization problems (MAXSAT, subset selection, knapsack-like models).
//!
//! Provides the neighborhood machinery shared by heuristics over `{0,1}^n`:
//!
//! - **Solutions**: [`BoolVectorSolution`](solution::BoolVectorSolution), a
//!   fixed-length boolean vector with a lazily computed, cached objective.
//!   Problems plug in through the [`BinaryProblem`](solution::BinaryProblem)
//!   trait.
//! - **k-flip neighborhoods**: random k-flip moves, full enumeration of
//!   all C(n, k) neighbors, and first- or best-improvement local search
//!   driven by a backtracking combination cursor.
//! - **Crossover**: one-point, multi-point and uniform recombination of two
//!   solutions in place.
//! - **Descent**: repeated k-flip local search to a local optimum.
//!
//! # Architecture
//!
//! This crate sits at Layer 2 (Algorithms) in the U-Engine ecosystem. It
//! contains no problem-specific concepts: instances, objectives and any
//! construction or scheduling logic are supplied by consumers.
//!
//! # Features
//!
//! - `parallel`: evaluate neighbor batches on the rayon thread pool
//! - `serde`: `Serialize`/`Deserialize` for configuration types

pub mod crossover;
pub mod descent;
pub mod error;
pub mod neighborhood;
pub mod solution;

pub use error::{Result, SolutionError};
