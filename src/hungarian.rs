pub mod assignment;
pub mod brute_force;
pub mod config;
pub mod cost;
pub mod engine;
pub mod error;
pub mod matching;
pub mod matrix;
pub mod mocks;
pub mod reduce;
pub mod residue;
pub mod solver;

pub use assignment::Assignment;
pub use config::{Objective, SolverConfig};
pub use cost::CostLike;
pub use error::{HungarianError, Result};
pub use matrix::{CostMatrix, Matrix};
pub use solver::Solver;

//
// public functions
//

///
/// Find the minimum cost assignment of the square cost matrix given as rows.
///
/// Returns the assignment (row -> column) and its total cost.
///
pub fn min_cost_assignment<C: CostLike>(rows: Vec<Vec<C>>) -> Result<(Assignment, C)> {
    solve_with(rows, SolverConfig::default())
}

///
/// Find the maximum cost assignment of the square cost matrix given as rows.
///
/// The matrix is negated internally; the returned cost is the sum of the original entries.
///
pub fn max_cost_assignment<C: CostLike>(rows: Vec<Vec<C>>) -> Result<(Assignment, C)> {
    solve_with(
        rows,
        SolverConfig::default().with_objective(Objective::Maximize),
    )
}

//
// internal functions
//

fn solve_with<C: CostLike>(rows: Vec<Vec<C>>, config: SolverConfig) -> Result<(Assignment, C)> {
    let solver = Solver::with_config(CostMatrix::new(rows)?, config)?;
    let assignment = solver.solve()?;
    let cost = solver.total_cost(&assignment)?;
    Ok((assignment, cost))
}
