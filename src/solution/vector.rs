//! The boolean-vector solution type.

use std::cell::Cell;
use std::fmt;

use rand::Rng;

use super::types::{BinaryProblem, Direction};
use crate::error::{Result, SolutionError};

/// A fixed-length boolean vector with a lazily computed, cached objective.
///
/// The vector can only be mutated through methods that invalidate the
/// cache ([`flip`](Self::flip), [`set`](Self::set), [`fill`](Self::fill),
/// [`x_mut`](Self::x_mut)), so [`obj`](Self::obj) never returns a value
/// computed for an older vector.
///
/// Cloning duplicates the vector and the cached objective; the problem
/// instance is shared by reference.
///
/// # Examples
///
/// ```
/// use u_boolvec::solution::{BinaryProblem, BoolVectorSolution};
///
/// struct OneMax(usize);
///
/// impl BinaryProblem for OneMax {
///     type Objective = usize;
///     fn size(&self) -> usize { self.0 }
///     fn calc_objective(&self, x: &[bool]) -> usize {
///         x.iter().filter(|&&b| b).count()
///     }
/// }
///
/// let problem = OneMax(4);
/// let mut sol = BoolVectorSolution::for_instance(&problem).unwrap();
/// assert_eq!(sol.obj(), 0);
/// sol.flip(2);
/// assert_eq!(sol.obj(), 1);
/// ```
pub struct BoolVectorSolution<'a, P: BinaryProblem> {
    x: Vec<bool>,
    inst: &'a P,
    obj_val: Cell<Option<P::Objective>>,
    obj_val_valid: Cell<bool>,
}

impl<'a, P: BinaryProblem> BoolVectorSolution<'a, P> {
    /// Creates an all-false solution of length `n`.
    ///
    /// # Errors
    /// [`SolutionError::InvalidLength`] if `n == 0`.
    pub fn new(inst: &'a P, n: usize) -> Result<Self> {
        Self::from_vec(inst, vec![false; n])
    }

    /// Creates an all-false solution sized by [`BinaryProblem::size`].
    pub fn for_instance(inst: &'a P) -> Result<Self> {
        Self::new(inst, inst.size())
    }

    /// Wraps an existing vector. The objective starts uncomputed.
    pub fn from_vec(inst: &'a P, x: Vec<bool>) -> Result<Self> {
        if x.is_empty() {
            return Err(SolutionError::InvalidLength);
        }
        Ok(Self {
            x,
            inst,
            obj_val: Cell::new(None),
            obj_val_valid: Cell::new(false),
        })
    }

    /// The problem instance this solution belongs to.
    pub fn instance(&self) -> &'a P {
        self.inst
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always `false`; empty solutions cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Read-only view of the vector.
    pub fn x(&self) -> &[bool] {
        &self.x
    }

    /// Mutable view of the vector.
    ///
    /// The cached objective is invalidated before the slice is handed out;
    /// the borrow prevents any objective read while the slice is alive.
    pub fn x_mut(&mut self) -> &mut [bool] {
        self.invalidate();
        &mut self.x
    }

    /// Value at position `i`.
    pub fn get(&self, i: usize) -> bool {
        self.x[i]
    }

    /// Sets position `i` and invalidates.
    pub fn set(&mut self, i: usize, value: bool) {
        self.x[i] = value;
        self.invalidate();
    }

    /// Negates position `i` and invalidates.
    pub fn flip(&mut self, i: usize) {
        self.x[i] = !self.x[i];
        self.invalidate();
    }

    /// Sets every position to `value` and invalidates.
    pub fn fill(&mut self, value: bool) {
        self.x.fill(value);
        self.invalidate();
    }

    /// Number of positions set to `true`.
    pub fn count_ones(&self) -> usize {
        self.x.iter().filter(|&&b| b).count()
    }

    /// Marks the cached objective as stale.
    pub fn invalidate(&self) {
        self.obj_val_valid.set(false);
    }

    /// Whether the cached objective reflects the current vector.
    pub fn is_valid(&self) -> bool {
        self.obj_val_valid.get()
    }

    /// Returns the objective value, recomputing it if the cache is stale.
    pub fn obj(&self) -> P::Objective {
        if let (true, Some(v)) = (self.obj_val_valid.get(), self.obj_val.get()) {
            return v;
        }
        let v = self.inst.calc_objective(&self.x);
        self.store_obj(v);
        v
    }

    /// Stores an objective known to be correct for the current vector.
    pub(crate) fn store_obj(&self, value: P::Objective) {
        self.obj_val.set(Some(value));
        self.obj_val_valid.set(true);
    }

    /// Optimization direction of the underlying problem.
    pub fn direction(&self) -> Direction {
        self.inst.direction()
    }

    /// Returns `true` if this solution is strictly better than `other`.
    pub fn is_better(&self, other: &Self) -> bool {
        self.direction().is_better_obj(self.obj(), other.obj())
    }

    /// Returns `true` if this solution is strictly worse than `other`.
    pub fn is_worse(&self, other: &Self) -> bool {
        self.direction().is_worse_obj(self.obj(), other.obj())
    }

    /// Overwrites this solution's vector and cached objective with `other`'s.
    ///
    /// # Errors
    /// [`SolutionError::LengthMismatch`] if the lengths differ.
    pub fn copy_from(&mut self, other: &Self) -> Result<()> {
        if self.x.len() != other.x.len() {
            return Err(SolutionError::LengthMismatch {
                expected: self.x.len(),
                actual: other.x.len(),
            });
        }
        self.x.copy_from_slice(&other.x);
        self.obj_val.set(other.obj_val.get());
        self.obj_val_valid.set(other.obj_val_valid.get());
        Ok(())
    }

    /// Validates the solution.
    ///
    /// The structural length check always runs first, followed by
    /// [`BinaryProblem::check_solution`].
    ///
    /// # Errors
    /// [`SolutionError::InvalidState`] if the vector length differs from
    /// the instance size, or whatever the problem hook reports.
    pub fn check(&self) -> Result<()> {
        let expected = self.inst.size();
        if self.x.len() != expected {
            return Err(SolutionError::InvalidState(format!(
                "vector length {} does not match instance size {expected}",
                self.x.len()
            )));
        }
        self.inst.check_solution(&self.x)
    }

    /// Sets every position uniformly at random and invalidates.
    pub fn initialize_random<R: Rng>(&mut self, rng: &mut R) {
        for bit in self.x.iter_mut() {
            *bit = rng.random_bool(0.5);
        }
        self.invalidate();
    }

    /// Number of positions in which the two solutions differ.
    ///
    /// # Panics
    /// Panics if the lengths differ.
    pub fn hamming_distance(&self, other: &Self) -> usize {
        assert_eq!(
            self.x.len(),
            other.x.len(),
            "solutions must have equal length"
        );
        self.x.iter().zip(&other.x).filter(|(a, b)| a != b).count()
    }
}

impl<P: BinaryProblem> Clone for BoolVectorSolution<'_, P> {
    fn clone(&self) -> Self {
        Self {
            x: self.x.clone(),
            inst: self.inst,
            obj_val: self.obj_val.clone(),
            obj_val_valid: self.obj_val_valid.clone(),
        }
    }
}

impl<P: BinaryProblem> PartialEq for BoolVectorSolution<'_, P> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.obj() == other.obj()
    }
}

impl<P: BinaryProblem> fmt::Debug for BoolVectorSolution<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoolVectorSolution")
            .field("x", &self.to_string())
            .field("obj_val", &self.obj_val.get())
            .field("obj_val_valid", &self.obj_val_valid.get())
            .finish()
    }
}

impl<P: BinaryProblem> fmt::Display for BoolVectorSolution<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.x {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
