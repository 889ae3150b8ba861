//!
//! Solver of the assignment problem
//!
use super::assignment::Assignment;
use super::config::{Objective, SolverConfig};
use super::cost::CostLike;
use super::engine::{Engine, Stats};
use super::error::Result;
use super::matrix::{CostMatrix, Matrix};
use super::reduce::reduce;
use log::debug;

///
/// Hungarian algorithm on one cost matrix.
///
/// The matrix is reduced once in the constructor.
/// Every `solve()` call owns its working matrix and matching, so a `Solver` can be
/// shared and solved from several threads at once.
///
/// The returned assignment maps each row to its column, `assignment[row] == column`.
///
#[derive(Debug, Clone)]
pub struct Solver<C> {
    cost: CostMatrix<C>,
    reduced: Matrix<C>,
    config: SolverConfig,
}

impl<C: CostLike> Solver<C> {
    pub fn new(cost: CostMatrix<C>) -> Result<Solver<C>> {
        Solver::with_config(cost, SolverConfig::default())
    }

    ///
    /// Fails with `HungarianError::Overflow` if the negation (for `Objective::Maximize`)
    /// or the reduction does not fit in the cost type.
    ///
    pub fn with_config(cost: CostMatrix<C>, config: SolverConfig) -> Result<Solver<C>> {
        let reduced = match config.objective {
            Objective::Minimize => reduce(cost.matrix())?,
            Objective::Maximize => reduce(cost.negated()?.matrix())?,
        };
        Ok(Solver {
            cost,
            reduced,
            config,
        })
    }

    ///
    /// Validate the rows and create the solver with default config.
    ///
    pub fn from_rows(rows: Vec<Vec<C>>) -> Result<Solver<C>> {
        Solver::new(CostMatrix::new(rows)?)
    }

    ///
    /// Find the optimal assignment (row -> column).
    ///
    /// It fails with `HungarianError::Overflow` if a dual adjustment leaves the range
    /// of the cost type, and otherwise only with `HungarianError::InvariantViolation`,
    /// which never happens for a valid matrix unless the solver has a bug.
    ///
    pub fn solve(&self) -> Result<Assignment> {
        self.solve_with_stats().map(|(assignment, _)| assignment)
    }

    ///
    /// `solve()` with the counters of the search
    ///
    pub fn solve_with_stats(&self) -> Result<(Assignment, Stats)> {
        let n = self.cost.size();
        debug!("solving {}x{} assignment ({:?})", n, n, self.config.objective);

        let mut engine = Engine::new(n, self.config.iteration_limit(n));
        let assignment = engine.run(&self.reduced)?;
        let stats = engine.stats();

        debug!(
            "solved with {} initial stars, {} iterations and {} dual adjustments",
            stats.initial_stars, stats.iterations, stats.adjustments
        );
        Ok((assignment, stats))
    }

    ///
    /// Total cost of the assignment in the original (not negated) matrix
    ///
    pub fn total_cost(&self, assignment: &Assignment) -> Result<C> {
        self.cost.total_cost(assignment)
    }

    ///
    /// The matrix after row and column reduction.
    /// For `Objective::Maximize` it is the reduction of the negated matrix.
    ///
    pub fn reduced_matrix(&self) -> &Matrix<C> {
        &self.reduced
    }

    pub fn cost_matrix(&self) -> &CostMatrix<C> {
        &self.cost
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }
}
