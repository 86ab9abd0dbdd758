//! Backtracking enumeration of k-subsets.
//!
//! [`CombinationCursor`] walks every strictly increasing k-tuple of indices
//! from `0..n` in lexicographic order. Instead of materializing tuples it
//! reports each slot change to a caller-supplied toggle, so a single
//! mutable solution can be moved from one combination to the next by
//! flipping only the positions that differ.
//!
//! # Algorithm
//!
//! Slots `p[0..k]` start unset and a cursor `i` starts at slot 0. At slot `i`:
//!
//! 1. Unset: commit `p[i-1] + 1` (or 0), toggle it, move to `i + 1`
//! 2. Set with room left (`p[i] < n - (k - i)`): toggle the old index off,
//!    increment, toggle the new index on, move to `i + 1`
//! 3. Exhausted: toggle `p[i]` off, unset the slot, backtrack to `i - 1`
//!
//! Reaching `i == k` yields one combination. The walk ends when slot 0 is
//! exhausted, at which point every toggle has been undone.

/// Marks a slot with no committed index.
const UNSET: usize = usize::MAX;

/// Lexicographic k-subset cursor over `0..n`.
///
/// # Examples
///
/// ```
/// use u_boolvec::neighborhood::CombinationCursor;
///
/// let mut cursor = CombinationCursor::new(4, 2);
/// let mut seen = Vec::new();
/// while let Some(p) = cursor.advance(|_| {}) {
///     seen.push(p.to_vec());
/// }
/// assert_eq!(seen.len(), 6);
/// assert_eq!(seen[0], vec![0, 1]);
/// assert_eq!(seen[5], vec![2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct CombinationCursor {
    n: usize,
    k: usize,
    p: Vec<usize>,
    depth: usize,
    done: bool,
}

impl CombinationCursor {
    /// Creates a cursor positioned before the first combination.
    ///
    /// # Panics
    /// Panics unless `0 < k <= n`.
    pub fn new(n: usize, k: usize) -> Self {
        assert!(k > 0, "k must be at least 1");
        assert!(k <= n, "k ({k}) must not exceed n ({n})");
        Self {
            n,
            k,
            p: vec![UNSET; k],
            depth: 0,
            done: false,
        }
    }

    /// Number of indices to choose from.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Tuple size.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Whether the enumeration has finished.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Moves to the next combination.
    ///
    /// `toggle` is called once for every index entering or leaving the
    /// tuple. Returns the current tuple, or `None` once all C(n, k)
    /// combinations have been produced. After `None`, every index toggled
    /// on has been toggled off again.
    pub fn advance<F: FnMut(usize)>(&mut self, mut toggle: F) -> Option<&[usize]> {
        if self.done {
            return None;
        }
        if self.depth == self.k {
            // resume below the last completed tuple
            self.depth -= 1;
        }

        loop {
            let i = self.depth;
            let slot = self.p[i];

            if slot == UNSET {
                let pos = if i > 0 { self.p[i - 1] + 1 } else { 0 };
                self.p[i] = pos;
                toggle(pos);
                self.depth += 1;
            } else if slot < self.n - (self.k - i) {
                toggle(slot);
                self.p[i] = slot + 1;
                toggle(slot + 1);
                self.depth += 1;
            } else {
                toggle(slot);
                self.p[i] = UNSET;
                if i == 0 {
                    self.done = true;
                    return None;
                }
                self.depth -= 1;
                continue;
            }

            if self.depth == self.k {
                return Some(&self.p);
            }
        }
    }
}

/// Binomial coefficient C(n, k): the size of a k-flip neighborhood.
///
/// Returns 0 when `k > n`.
pub fn combination_count(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    if k == 0 || k == n {
        return 1;
    }

    let k = k.min(n - k);
    let mut result = 1;
    for i in 0..k {
        result = result * (n - i) / (i + 1);
    }
    result
}
