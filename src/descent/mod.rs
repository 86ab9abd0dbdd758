//! Repeated k-flip local search (steepest or first-improvement descent).
//!
//! Runs k-flip local-search passes on a single solution until no neighbor
//! in the k-flip neighborhood improves it, which makes the result a k-flip
//! local optimum.
//!
//! # References
//!
//! - Papadimitriou, C. & Steiglitz, K. (1982). *Combinatorial Optimization:
//!   Algorithms and Complexity*, ch. 19 (local search).
//! - Hansen, P. & Jaumard, B. (1990). "Algorithms for the maximum
//!   satisfiability problem", *Computing* 44, 279-303.

mod config;
mod runner;

pub use config::DescentConfig;
pub use runner::{DescentResult, KFlipDescent};
