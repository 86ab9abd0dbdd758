//! Positional crossover operators for boolean-vector solutions.
//!
//! Both parents are recombined in place: segments are exchanged between
//! the two vectors, and both objective caches are invalidated.
//!
//! # Operators
//!
//! - [`one_point_crossover`]: swap the tails after one breakpoint
//! - [`multi_point_crossover`]: alternate keep/swap at every breakpoint
//! - [`uniform_crossover`]: swap each position with probability 1/2
//!
//! The `random_*` variants draw their breakpoints uniformly.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - De Jong & Spears (1992), "A formal analysis of the role of multi-point
//!   crossover in genetic algorithms"

use rand::Rng;

use crate::solution::{BinaryProblem, BoolVectorSolution};

// ============================================================================
// Crossover operators
// ============================================================================

/// One-point crossover: exchanges positions `pos..n` between `a` and `b`.
///
/// Applying it twice with the same `pos` restores both parents.
///
/// # Examples
///
/// ```
/// use u_boolvec::crossover::one_point_crossover;
/// use u_boolvec::solution::{BinaryProblem, BoolVectorSolution};
///
/// struct Zero(usize);
/// impl BinaryProblem for Zero {
///     type Objective = f64;
///     fn size(&self) -> usize { self.0 }
///     fn calc_objective(&self, _x: &[bool]) -> f64 { 0.0 }
/// }
///
/// let p = Zero(5);
/// let mut a = BoolVectorSolution::from_vec(&p, vec![true; 5]).unwrap();
/// let mut b = BoolVectorSolution::from_vec(&p, vec![false; 5]).unwrap();
/// one_point_crossover(&mut a, &mut b, 2);
/// assert_eq!(a.to_string(), "11000");
/// assert_eq!(b.to_string(), "00111");
/// ```
///
/// # Panics
/// Panics if the parents have different lengths or `pos` is not in `1..n`.
pub fn one_point_crossover<P: BinaryProblem>(
    a: &mut BoolVectorSolution<'_, P>,
    b: &mut BoolVectorSolution<'_, P>,
    pos: usize,
) {
    let n = a.len();
    assert_eq!(n, b.len(), "parents must have equal length");
    assert!(
        pos > 0 && pos < n,
        "crossover point {pos} must lie strictly inside 0..{n}"
    );

    a.x_mut()[pos..].swap_with_slice(&mut b.x_mut()[pos..]);
}

/// Multi-point crossover: segments between consecutive breakpoints are
/// alternately kept and swapped, starting with a kept `0..breakpoints[0]`.
///
/// A single breakpoint is equivalent to [`one_point_crossover`].
///
/// # Panics
/// Panics if the parents have different lengths, `breakpoints` is empty,
/// or the breakpoints are not strictly increasing within `1..n`.
pub fn multi_point_crossover<P: BinaryProblem>(
    a: &mut BoolVectorSolution<'_, P>,
    b: &mut BoolVectorSolution<'_, P>,
    breakpoints: &[usize],
) {
    let n = a.len();
    assert_eq!(n, b.len(), "parents must have equal length");
    assert!(!breakpoints.is_empty(), "at least one breakpoint is required");
    assert!(
        breakpoints[0] > 0 && breakpoints[breakpoints.len() - 1] < n,
        "breakpoints must lie strictly inside 0..{n}"
    );
    assert!(
        breakpoints.windows(2).all(|w| w[0] < w[1]),
        "breakpoints must be strictly increasing"
    );

    let ax = a.x_mut();
    let bx = b.x_mut();

    // odd-numbered segments are swapped
    let mut swap = false;
    let mut start = 0;
    for end in breakpoints.iter().copied().chain(std::iter::once(n)) {
        if swap {
            ax[start..end].swap_with_slice(&mut bx[start..end]);
        }
        swap = !swap;
        start = end;
    }
}

/// Uniform crossover: each position is exchanged with probability 1/2.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn uniform_crossover<P: BinaryProblem, R: Rng>(
    a: &mut BoolVectorSolution<'_, P>,
    b: &mut BoolVectorSolution<'_, P>,
    rng: &mut R,
) {
    assert_eq!(a.len(), b.len(), "parents must have equal length");

    let ax = a.x_mut();
    let bx = b.x_mut();
    for (x, y) in ax.iter_mut().zip(bx.iter_mut()) {
        if rng.random_bool(0.5) {
            std::mem::swap(x, y);
        }
    }
}

/// One-point crossover at a uniformly random point in `1..n`.
///
/// Returns the chosen point.
///
/// # Panics
/// Panics if the parents have different lengths or fewer than 2 positions.
pub fn random_one_point_crossover<P: BinaryProblem, R: Rng>(
    a: &mut BoolVectorSolution<'_, P>,
    b: &mut BoolVectorSolution<'_, P>,
    rng: &mut R,
) -> usize {
    let n = a.len();
    assert!(n >= 2, "one-point crossover needs at least 2 positions");
    let pos = rng.random_range(1..n);
    one_point_crossover(a, b, pos);
    pos
}

/// Multi-point crossover at `points` distinct random breakpoints.
///
/// Returns the sorted breakpoints that were used.
///
/// # Panics
/// Panics if the parents have different lengths or `points` is not in `1..n`.
pub fn random_multi_point_crossover<P: BinaryProblem, R: Rng>(
    a: &mut BoolVectorSolution<'_, P>,
    b: &mut BoolVectorSolution<'_, P>,
    points: usize,
    rng: &mut R,
) -> Vec<usize> {
    let breakpoints = random_breakpoints(a.len(), points, rng);
    multi_point_crossover(a, b, &breakpoints);
    breakpoints
}

// ============================================================================
// Helpers
// ============================================================================

/// Draws `points` distinct sorted breakpoints from `1..n`.
fn random_breakpoints<R: Rng>(n: usize, points: usize, rng: &mut R) -> Vec<usize> {
    assert!(
        points > 0 && points < n,
        "number of breakpoints ({points}) must lie in 1..{n}"
    );
    let mut breakpoints: Vec<usize> = rand::seq::index::sample(rng, n - 1, points)
        .into_iter()
        .map(|i| i + 1)
        .collect();
    breakpoints.sort_unstable();
    breakpoints
}

// ============================================================================
// Tests
// ============================================================================
