//! k-flip neighborhoods of boolean-vector solutions.
//!
//! The k-flip neighborhood of a solution is the set of all vectors that
//! differ from it in exactly `k` positions; it has C(n, k) members.
//!
//! # Operations
//!
//! All operations are inherent methods on
//! [`BoolVectorSolution`](crate::solution::BoolVectorSolution):
//!
//! - `kflip` / `kflip_with`: move to one uniformly random neighbor
//! - `kflip_all` / `kflip_all_with`: materialize the whole neighborhood
//! - `k_flip_local_search`: first- or best-improvement pass in place
//!
//! Every operation requires `0 < k <= n` and panics otherwise.
//!
//! # Free Functions
//!
//! - [`evaluate_all`]: evaluate a batch of neighbors (rayon with `parallel`)
//! - [`best_of`]: pick the best of a batch
//! - [`combination_count`]: neighborhood size

mod cursor;
mod kflip;
mod search;

pub use cursor::{combination_count, CombinationCursor};
pub use kflip::{best_of, evaluate_all};
