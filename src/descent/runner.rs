//! k-flip descent execution engine.
//!
//! # Algorithm
//!
//! 1. Evaluate the starting solution
//! 2. Run one k-flip local-search pass
//! 3. If the pass moved the solution, record the new objective and repeat
//! 4. Stop at a local optimum (a pass without improvement) or after
//!    `max_passes` passes

use tracing::{debug, info};

use super::config::DescentConfig;
use crate::error::{Result, SolutionError};
use crate::solution::{BinaryProblem, BoolVectorSolution, Objective};

/// Result of a descent run. The solution itself is improved in place.
#[derive(Debug, Clone)]
pub struct DescentResult<O: Objective> {
    /// Objective before the first pass.
    pub initial_objective: O,
    /// Objective after the last pass.
    pub final_objective: O,
    /// Local-search passes executed, including the final unsuccessful one.
    pub passes: usize,
    /// Passes that moved the solution.
    pub improvements: usize,
    /// Whether the run ended on a k-flip local optimum rather than the
    /// pass limit.
    pub local_optimum: bool,
    /// Objective after each improving pass, starting with the initial one.
    pub objective_history: Vec<O>,
}

/// Repeated k-flip local search.
pub struct KFlipDescent;

impl KFlipDescent {
    /// Improves `solution` in place until no k-flip neighbor is better.
    ///
    /// # Errors
    /// [`SolutionError::InvalidConfig`] if the configuration is invalid or
    /// `config.k` exceeds the solution length.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_boolvec::descent::{DescentConfig, KFlipDescent};
    /// use u_boolvec::solution::{BinaryProblem, BoolVectorSolution};
    ///
    /// struct OneMax(usize);
    /// impl BinaryProblem for OneMax {
    ///     type Objective = usize;
    ///     fn size(&self) -> usize { self.0 }
    ///     fn calc_objective(&self, x: &[bool]) -> usize {
    ///         x.iter().filter(|&&b| b).count()
    ///     }
    /// }
    ///
    /// let problem = OneMax(6);
    /// let mut sol = BoolVectorSolution::for_instance(&problem).unwrap();
    /// let result = KFlipDescent::run(&mut sol, &DescentConfig::default()).unwrap();
    /// assert_eq!(result.final_objective, 6);
    /// assert!(result.local_optimum);
    /// ```
    pub fn run<P: BinaryProblem>(
        solution: &mut BoolVectorSolution<'_, P>,
        config: &DescentConfig,
    ) -> Result<DescentResult<P::Objective>> {
        config.validate().map_err(SolutionError::InvalidConfig)?;
        if config.k > solution.len() {
            return Err(SolutionError::InvalidConfig(format!(
                "k ({}) exceeds solution length ({})",
                config.k,
                solution.len()
            )));
        }

        let initial_objective = solution.obj();
        let mut objective_history = vec![initial_objective];
        let mut passes = 0;
        let mut local_optimum = false;

        info!(
            event = "descent_start",
            n = solution.len(),
            k = config.k,
            best_improvement = config.best_improvement,
            obj = initial_objective.to_f64(),
        );

        loop {
            if config.max_passes.is_some_and(|max| passes >= max) {
                break;
            }
            passes += 1;

            if !solution.k_flip_local_search(config.k, config.best_improvement) {
                local_optimum = true;
                break;
            }

            let obj = solution.obj();
            debug!(pass = passes, obj = obj.to_f64(), "descent improved");
            objective_history.push(obj);
        }

        let final_objective = solution.obj();
        info!(
            event = "descent_end",
            passes,
            improvements = objective_history.len() - 1,
            local_optimum,
            obj = final_objective.to_f64(),
        );

        Ok(DescentResult {
            initial_objective,
            final_objective,
            passes,
            improvements: objective_history.len() - 1,
            local_optimum,
            objective_history,
        })
    }
}
