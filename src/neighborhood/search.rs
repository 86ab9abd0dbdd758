//! Local search over the k-flip neighborhood.
//!
//! The search moves a single solution through the neighborhood in place,
//! driven by [`CombinationCursor`] toggles, so no neighbor is ever copied.

use tracing::{debug, trace};

use super::cursor::CombinationCursor;
use super::kflip::assert_flip_count;
use crate::solution::{BinaryProblem, BoolVectorSolution, Objective};

impl<P: BinaryProblem> BoolVectorSolution<'_, P> {
    /// Performs one pass of k-flip local search.
    ///
    /// Only strictly improving neighbors are accepted.
    ///
    /// - `best_improvement == true`: every neighbor is evaluated and the
    ///   best improving one (earliest in lexicographic order among equals)
    ///   is adopted. Without an improving neighbor the vector is unchanged.
    /// - `best_improvement == false`: the search stops on the first
    ///   improving neighbor in lexicographic order and leaves the solution
    ///   there.
    ///
    /// Returns whether the solution was moved to an improving neighbor.
    ///
    /// # Panics
    /// Panics unless `0 < k <= len()`.
    pub fn k_flip_local_search(&mut self, k: usize, best_improvement: bool) -> bool {
        let n = self.len();
        assert_flip_count(k, n);

        let direction = self.direction();
        let start_obj = self.obj();
        let mut best_obj = start_obj;
        let mut best_subset: Option<Vec<usize>> = None;
        let mut evaluated = 0usize;

        let mut cursor = CombinationCursor::new(n, k);
        while let Some(subset) = cursor.advance(|i| self.flip(i)) {
            evaluated += 1;
            let obj = self.obj();
            if !direction.is_better_obj(obj, best_obj) {
                continue;
            }

            if !best_improvement {
                debug!(
                    k,
                    evaluated,
                    from = start_obj.to_f64(),
                    to = obj.to_f64(),
                    "first improving k-flip neighbor accepted"
                );
                return true;
            }

            trace!(?subset, obj = obj.to_f64(), "new best k-flip neighbor");
            best_obj = obj;
            match best_subset.as_mut() {
                Some(best) => best.copy_from_slice(subset),
                None => best_subset = Some(subset.to_vec()),
            }
        }

        // the exhausted cursor has undone every flip
        match best_subset {
            Some(subset) => {
                for &i in &subset {
                    self.flip(i);
                }
                self.store_obj(best_obj);
                debug!(
                    k,
                    evaluated,
                    from = start_obj.to_f64(),
                    to = best_obj.to_f64(),
                    "best improving k-flip neighbor adopted"
                );
                true
            }
            None => {
                self.store_obj(start_obj);
                debug!(k, evaluated, obj = start_obj.to_f64(), "no improving k-flip neighbor");
                false
            }
        }
    }
}
