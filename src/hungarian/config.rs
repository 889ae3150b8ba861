//!
//! Solver configuration
//!

/// Direction of the optimization
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Objective {
    /// find the assignment of the minimum total cost
    #[default]
    Minimize,
    /// find the assignment of the maximum total cost, by negating the matrix
    Maximize,
}

///
/// Options of `Solver`
///
/// * `objective`: minimize (default) or maximize
/// * `max_iterations`: cap of augmentations in one `solve()`.
///   `None` means `max(n * n, 1)` for the n x n matrix.
///
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct SolverConfig {
    pub objective: Objective,
    pub max_iterations: Option<usize>,
}

impl SolverConfig {
    pub fn with_objective(mut self, objective: Objective) -> SolverConfig {
        self.objective = objective;
        self
    }
    pub fn with_max_iterations(mut self, max_iterations: usize) -> SolverConfig {
        self.max_iterations = Some(max_iterations);
        self
    }
    /// iteration cap for the n x n matrix
    pub fn iteration_limit(&self, n: usize) -> usize {
        self.max_iterations
            .unwrap_or_else(|| n.saturating_mul(n).max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let c = SolverConfig::default();
        assert_eq!(c.objective, Objective::Minimize);
        assert_eq!(c.iteration_limit(0), 1);
        assert_eq!(c.iteration_limit(5), 25);

        let c = c.with_objective(Objective::Maximize).with_max_iterations(3);
        assert_eq!(c.objective, Objective::Maximize);
        assert_eq!(c.iteration_limit(5), 3);
    }
}
