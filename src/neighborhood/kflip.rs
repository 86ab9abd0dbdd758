//! Random and exhaustive k-flip moves.

use rand::Rng;

use super::cursor::{combination_count, CombinationCursor};
use crate::solution::{BinaryProblem, BoolVectorSolution};

/// Panics unless `0 < k <= n`.
pub(crate) fn assert_flip_count(k: usize, n: usize) {
    assert!(k > 0, "k must be at least 1");
    assert!(k <= n, "k ({k}) must not exceed the solution length ({n})");
}

impl<P: BinaryProblem> BoolVectorSolution<'_, P> {
    /// Flips `k` distinct positions chosen uniformly at random.
    ///
    /// # Panics
    /// Panics unless `0 < k <= len()`.
    pub fn kflip<R: Rng>(&mut self, k: usize, rng: &mut R) {
        self.kflip_with(k, rng, |sol, positions| {
            for &i in positions {
                sol.flip(i);
            }
        });
    }

    /// Chooses `k` distinct positions uniformly at random and hands them to
    /// `func`, which performs the actual mutation.
    ///
    /// The solution is invalidated after `func` returns.
    ///
    /// # Panics
    /// Panics unless `0 < k <= len()`.
    pub fn kflip_with<R, F>(&mut self, k: usize, rng: &mut R, func: F)
    where
        R: Rng,
        F: FnOnce(&mut Self, &[usize]),
    {
        let n = self.len();
        assert_flip_count(k, n);

        let positions = rand::seq::index::sample(rng, n, k).into_vec();
        func(self, &positions);
        self.invalidate();
    }

    /// Returns every solution at Hamming distance exactly `k`.
    ///
    /// The C(n, k) copies come in lexicographic order of their flipped
    /// position sets, each with its objective not yet computed.
    ///
    /// # Panics
    /// Panics unless `0 < k <= len()`.
    pub fn kflip_all(&self, k: usize) -> Vec<Self> {
        let n = self.len();
        assert_flip_count(k, n);

        let mut work = self.clone();
        let mut cursor = CombinationCursor::new(n, k);
        let mut neighbors = Vec::with_capacity(combination_count(n, k));
        while cursor.advance(|i| work.flip(i)).is_some() {
            neighbors.push(work.clone());
        }
        neighbors
    }

    /// Like [`kflip_all`](Self::kflip_all), but each copy is produced by
    /// calling `func` with the copy and its k-subset.
    pub fn kflip_all_with<F>(&self, k: usize, mut func: F) -> Vec<Self>
    where
        F: FnMut(&mut Self, &[usize]),
    {
        let n = self.len();
        assert_flip_count(k, n);

        let mut cursor = CombinationCursor::new(n, k);
        let mut neighbors = Vec::with_capacity(combination_count(n, k));
        while let Some(subset) = cursor.advance(|_| {}) {
            let mut neighbor = self.clone();
            func(&mut neighbor, subset);
            neighbor.invalidate();
            neighbors.push(neighbor);
        }
        neighbors
    }
}

/// Computes the objective of every solution that has a stale cache.
///
/// With the `parallel` feature the evaluations run on the rayon pool.
pub fn evaluate_all<P: BinaryProblem>(solutions: &mut [BoolVectorSolution<'_, P>]) {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        solutions.par_iter_mut().for_each(|s| {
            s.obj();
        });
    }

    #[cfg(not(feature = "parallel"))]
    for s in solutions.iter() {
        s.obj();
    }
}

/// Index of the best solution, the first one among ties.
///
/// Returns `None` for an empty slice.
pub fn best_of<P: BinaryProblem>(solutions: &[BoolVectorSolution<'_, P>]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, s) in solutions.iter().enumerate() {
        match best {
            Some(b) if !s.is_better(&solutions[b]) => {}
            _ => best = Some(i),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solution::fixtures::{OneMax, Weighted};
    use proptest::prelude::*;
    use std::collections::HashSet;
    use u_numflow::random::create_rng;

    #[test]
    #[should_panic(expected = "at least 1")]
    fn test_kflip_too_small() {
        let p = OneMax::new(5);
        let mut rng = create_rng(42);
        let mut sol = BoolVectorSolution::for_instance(&p).unwrap();
        sol.kflip(0, &mut rng);
    }

    #[test]
    #[should_panic(expected = "must not exceed")]
    fn test_kflip_too_big() {
        let p = OneMax::new(5);
        let mut rng = create_rng(42);
        let mut sol = BoolVectorSolution::for_instance(&p).unwrap();
        sol.kflip(6, &mut rng);
    }

    #[test]
    #[should_panic(expected = "at least 1")]
    fn test_kflip_with_too_small() {
        let p = OneMax::new(5);
        let mut rng = create_rng(42);
        let mut sol = BoolVectorSolution::for_instance(&p).unwrap();
        sol.kflip_with(0, &mut rng, |_, _| {});
    }

    #[test]
    fn test_kflip_sets_exactly_k() {
        let p = OneMax::new(5);
        let mut rng = create_rng(42);
        let sol = BoolVectorSolution::for_instance(&p).unwrap();

        for _ in 0..10 {
            let mut tmp = sol.clone();
            tmp.kflip(3, &mut rng);
            assert_eq!(tmp.obj(), 3);
        }
    }

    #[test]
    fn test_kflip_invalidates_cached_objective() {
        let p = OneMax::new(8);
        let mut rng = create_rng(7);
        let mut sol = BoolVectorSolution::for_instance(&p).unwrap();
        assert_eq!(sol.obj(), 0);
        sol.kflip(2, &mut rng);
        assert!(!sol.is_valid());
        assert_eq!(sol.obj(), 2);
    }

    #[test]
    fn test_kflip_with_custom_mutation() {
        let p = OneMax::new(5);
        let mut rng = create_rng(42);
        let mut sol = BoolVectorSolution::for_instance(&p).unwrap();
        assert_eq!(sol.obj(), 0);

        let mut chosen = Vec::new();
        sol.kflip_with(3, &mut rng, |s, sub| {
            chosen = sub.to_vec();
            for &i in sub {
                s.x_mut()[i] = true;
            }
        });

        let distinct: HashSet<usize> = chosen.iter().copied().collect();
        assert_eq!(distinct.len(), 3);
        assert_eq!(sol.obj(), 3);
    }

    #[test]
    fn test_kflip_covers_all_positions() {
        let p = OneMax::new(6);
        let mut rng = create_rng(123);
        let sol = BoolVectorSolution::for_instance(&p).unwrap();
        let mut hit = [false; 6];
        for _ in 0..200 {
            let mut tmp = sol.clone();
            tmp.kflip(1, &mut rng);
            for (i, &b) in tmp.x().iter().enumerate() {
                hit[i] |= b;
            }
        }
        assert!(hit.iter().all(|&h| h), "uniform draw should reach every index");
    }

    #[test]
    fn test_kflip_all_count_and_objective() {
        let p = OneMax::new(5);
        let sol = BoolVectorSolution::for_instance(&p).unwrap();
        let all = sol.kflip_all(3);

        assert_eq!(all.len(), 10);
        for tmp in &all {
            assert!(!tmp.is_valid());
            assert_eq!(tmp.obj(), 3);
        }
        assert_eq!(all[0].x(), &[true, true, true, false, false]);
        assert_eq!(all[9].x(), &[false, false, true, true, true]);
    }

    #[test]
    fn test_kflip_all_leaves_original_untouched() {
        let p = OneMax::new(4);
        let sol = BoolVectorSolution::from_vec(&p, vec![true, false, true, false]).unwrap();
        assert_eq!(sol.obj(), 2);

        let all = sol.kflip_all(2);
        assert_eq!(all.len(), 6);
        assert_eq!(sol.x(), &[true, false, true, false]);
        assert!(sol.is_valid());
        for n in &all {
            assert_eq!(n.hamming_distance(&sol), 2);
        }
    }

    #[test]
    fn test_kflip_all_with_custom_mutation() {
        let p = OneMax::new(5);
        let sol = BoolVectorSolution::for_instance(&p).unwrap();
        let all = sol.kflip_all_with(3, |s, sub| {
            for &i in sub {
                s.flip(i);
            }
        });

        assert_eq!(all.len(), 10);
        for tmp in &all {
            assert_eq!(tmp.obj(), 3);
        }
    }

    #[test]
    #[should_panic(expected = "must not exceed")]
    fn test_kflip_all_too_big() {
        let p = OneMax::new(3);
        let sol = BoolVectorSolution::for_instance(&p).unwrap();
        sol.kflip_all(4);
    }

    #[test]
    fn test_evaluate_all_and_best_of() {
        let p = Weighted::new(vec![1.0, -2.0, 4.0, 0.5]);
        let sol = BoolVectorSolution::for_instance(&p).unwrap();
        let mut all = sol.kflip_all(1);

        evaluate_all(&mut all);
        assert!(all.iter().all(|s| s.is_valid()));
        assert_eq!(best_of(&all), Some(2));
    }

    #[test]
    fn test_best_of_prefers_first_among_ties() {
        let p = OneMax::new(3);
        let sol = BoolVectorSolution::for_instance(&p).unwrap();
        let all = sol.kflip_all(1);
        assert_eq!(best_of(&all), Some(0));

        let empty: Vec<BoolVectorSolution<'_, OneMax>> = Vec::new();
        assert_eq!(best_of(&empty), None);
    }

    proptest! {
        #[test]
        fn prop_kflip_all_distinct_with_k_ones(n in 1usize..9, k_seed in 0usize..9) {
            let k = k_seed % n + 1;
            let p = OneMax::new(n);
            let sol = BoolVectorSolution::for_instance(&p).unwrap();
            let all = sol.kflip_all(k);

            prop_assert_eq!(all.len(), combination_count(n, k));
            let distinct: HashSet<Vec<bool>> = all.iter().map(|s| s.x().to_vec()).collect();
            prop_assert_eq!(distinct.len(), all.len());
            for s in &all {
                prop_assert_eq!(s.obj(), k);
            }
        }

        #[test]
        fn prop_kflip_flips_exactly_k(n in 1usize..40, k_seed in 0usize..40, seed in 0u64..1000) {
            let k = k_seed % n + 1;
            let p = OneMax::new(n);
            let mut rng = create_rng(seed);
            let mut sol = BoolVectorSolution::for_instance(&p).unwrap();
            sol.kflip(k, &mut rng);
            prop_assert_eq!(sol.obj(), k);
        }
    }
}
