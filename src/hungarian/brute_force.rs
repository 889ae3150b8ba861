//!
//! Exhaustive search over all n! assignments, for small matrices.
//!
use super::assignment::Assignment;
use super::cost::CostLike;
use super::matrix::CostMatrix;
use itertools::Itertools; // for permutations

///
/// Find the minimum cost assignment by enumerating every permutation.
///
/// Among assignments of equal cost the lexicographically first one is returned.
/// It takes O(n! n) time, so use it only to check the solver on small matrices
/// whose totals fit in the cost type.
///
pub fn min_cost_assignment_exhaustive<C: CostLike>(cost: &CostMatrix<C>) -> (Assignment, C) {
    let n = cost.size();
    let mut best: Option<(Vec<usize>, C)> = None;
    for columns in (0..n).permutations(n) {
        let total: C = columns
            .iter()
            .enumerate()
            .map(|(row, &column)| cost[(row, column)])
            .sum();
        match best {
            Some((_, best_total)) if best_total <= total => {}
            _ => best = Some((columns, total)),
        }
    }
    match best {
        Some((columns, total)) => (Assignment::from(columns), total),
        None => (Assignment::from(Vec::new()), C::zero()),
    }
}
