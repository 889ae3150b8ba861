//! Augmenting path search
//! - Phase: states of the search
//! - Engine: owns the working matrix and the matching of one `solve()` call
//! - Slack: dual shifts of the current iteration and the minimum of each uncovered row
//!
//! One outer iteration goes
//! `AdjustDuals -> FindZero -> (AdjustDuals | Augment) -> ClearPrimes -> CheckComplete`
//! and grows the matching by exactly one star.
//!
//! Within an iteration the working matrix is not touched. Dual adjustments are kept
//! as per-row and per-column shifts, so each `AdjustDuals` and `FindZero` step is O(n),
//! and the shifts are folded into the matrix once in `ClearPrimes`.
//! A search is O(n^3) in total.
use super::assignment::Assignment;
use super::cost::CostLike;
use super::error::{HungarianError, Result};
use super::matching::MatchingState;
use super::matrix::Matrix;
use log::trace;

/// States of the search
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    /// load the reduced matrix and star its zeros greedily
    Reduce,
    /// stop if the matching is perfect, otherwise start a new outer iteration
    CheckComplete,
    /// shift the matrix by the minimum uncovered value
    AdjustDuals,
    /// prime an uncovered zero
    FindZero,
    /// flip the alternating chain starting at the primed zero
    Augment { row: usize, column: usize },
    /// discard the primes of this iteration
    ClearPrimes,
    /// the matching is perfect
    Done,
}

/// Counters of one search
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Stats {
    /// stars of the greedy initial matching
    pub initial_stars: usize,
    /// outer iterations, i.e. augmentations
    pub iterations: usize,
    /// dual adjustments which actually changed the matrix
    pub adjustments: usize,
}

///
/// Search state owned by one `solve()` call.
///
#[derive(Debug, Clone)]
pub struct Engine<C> {
    working: Matrix<C>,
    matching: MatchingState,
    slack: Slack<C>,
    iteration_limit: usize,
    stats: Stats,
}

impl<C: CostLike> Engine<C> {
    ///
    /// Engine before `Phase::Reduce`. The reduced matrix is copied when the phase is run.
    ///
    pub fn new(size: usize, iteration_limit: usize) -> Engine<C> {
        Engine {
            working: Matrix::from_fn(size, |_, _| C::zero()),
            matching: MatchingState::empty(size),
            slack: Slack::zero(size),
            iteration_limit,
            stats: Stats::default(),
        }
    }

    ///
    /// Run the phases from `Phase::Reduce` until `Phase::Done`,
    /// and return the perfect matching as an assignment.
    ///
    pub fn run(&mut self, reduced: &Matrix<C>) -> Result<Assignment> {
        let mut phase = Phase::Reduce;
        while phase != Phase::Done {
            phase = self.next(phase, reduced)?;
        }
        self.matching.to_assignment().ok_or_else(|| {
            HungarianError::InvariantViolation("perfect matching is not a bijection".to_string())
        })
    }

    ///
    /// Execute a phase and return the next one.
    ///
    pub fn next(&mut self, phase: Phase, reduced: &Matrix<C>) -> Result<Phase> {
        trace!("phase={:?}", phase);
        let next = match phase {
            Phase::Reduce => {
                self.working = reduced.clone();
                self.matching = MatchingState::star_zeros(&self.working);
                self.slack = Slack::zero(self.working.size());
                self.stats.initial_stars = self.matching.n_stars();
                Phase::CheckComplete
            }
            Phase::CheckComplete => {
                if self.matching.is_perfect() {
                    Phase::Done
                } else if self.stats.iterations >= self.iteration_limit {
                    return Err(HungarianError::InvariantViolation(format!(
                        "no perfect matching after {} iterations ({} of {} rows matched)",
                        self.stats.iterations,
                        self.matching.n_stars(),
                        self.matching.size()
                    )));
                } else {
                    self.stats.iterations += 1;
                    self.slack = Slack::new(&self.working, &self.matching);
                    Phase::AdjustDuals
                }
            }
            Phase::AdjustDuals => {
                let min = adjust_duals(&mut self.slack, &self.matching)?;
                if !min.is_zero() {
                    self.stats.adjustments += 1;
                }
                Phase::FindZero
            }
            Phase::FindZero => {
                let (row, column) =
                    find_uncovered_zero(&self.slack, &self.matching).ok_or_else(|| {
                        HungarianError::InvariantViolation(
                            "no uncovered zero after dual adjustment".to_string(),
                        )
                    })?;
                self.matching.prime(row, column);
                trace!("prime ({}, {})", row, column);
                if let Some(star_column) = self.matching.star_in_row(row) {
                    // the row is covered now, and the column of its star is released
                    self.slack
                        .uncover_column(&self.working, &self.matching, star_column)?;
                    Phase::AdjustDuals
                } else {
                    Phase::Augment { row, column }
                }
            }
            Phase::Augment { row, column } => {
                let length = augment(&mut self.matching, row, column)?;
                trace!("augmented along a chain of {} primes", length);
                debug_assert!(self.matching.is_valid_matching());
                Phase::ClearPrimes
            }
            Phase::ClearPrimes => {
                self.slack.fold_into(&mut self.working)?;
                self.matching.clear_primes();
                Phase::CheckComplete
            }
            Phase::Done => Phase::Done,
        };
        Ok(next)
    }

    /// working matrix as of the end of the last completed iteration
    pub fn working(&self) -> &Matrix<C> {
        &self.working
    }
    pub fn matching(&self) -> &MatchingState {
        &self.matching
    }
    pub fn stats(&self) -> Stats {
        self.stats
    }
}

///
/// Pending dual adjustments of one outer iteration.
///
/// The current value of a cell is `working[(row, column)] + row_shift[row] + column_shift[column]`.
/// For each uncovered row, `row_min` holds the smallest current value in an uncovered column
/// together with that column (the smallest column among ties).
///
#[derive(Debug, Clone)]
pub struct Slack<C> {
    row_shift: Vec<C>,
    column_shift: Vec<C>,
    row_min: Vec<Option<(C, usize)>>,
}

impl<C: CostLike> Slack<C> {
    /// no shifts and no minimums
    pub fn zero(size: usize) -> Slack<C> {
        Slack {
            row_shift: vec![C::zero(); size],
            column_shift: vec![C::zero(); size],
            row_min: vec![None; size],
        }
    }
    ///
    /// No shifts, and the row minimums of the uncovered part of `working`. O(n^2).
    ///
    pub fn new(working: &Matrix<C>, matching: &MatchingState) -> Slack<C> {
        let n = working.size();
        let mut slack = Slack::zero(n);
        for row in (0..n).filter(|&row| !matching.is_row_covered(row)) {
            slack.row_min[row] = (0..n)
                .filter(|&column| !matching.is_column_covered(column))
                .map(|column| (working[(row, column)], column))
                .fold(None, |min, (x, column)| match min {
                    Some((m, _)) if m <= x => min,
                    _ => Some((x, column)),
                });
        }
        slack
    }
    pub fn size(&self) -> usize {
        self.row_shift.len()
    }
    /// current value of the cell
    pub fn value(&self, working: &Matrix<C>, row: usize, column: usize) -> Result<C> {
        // entries of `working` are nonnegative and row shifts are nonpositive,
        // so only the column shift can overflow
        working[(row, column)]
            .checked_add(self.row_shift[row])
            .and_then(|x| x.checked_add(self.column_shift[column]))
            .ok_or(HungarianError::Overflow("adjusting duals"))
    }
    ///
    /// Take a column released by a prime into the minimums of the uncovered rows. O(n).
    ///
    pub fn uncover_column(
        &mut self,
        working: &Matrix<C>,
        matching: &MatchingState,
        column: usize,
    ) -> Result<()> {
        for row in 0..self.size() {
            if matching.is_row_covered(row) {
                continue;
            }
            let x = self.value(working, row, column)?;
            self.row_min[row] = match self.row_min[row] {
                Some((m, c)) if m < x || (m == x && c < column) => Some((m, c)),
                _ => Some((x, column)),
            };
        }
        Ok(())
    }
    ///
    /// Smallest value in an uncovered row and an uncovered column, as `(value, row, column)`.
    /// The first row wins among ties. None if every such cell is covered.
    ///
    pub fn min_uncovered(&self, matching: &MatchingState) -> Option<(C, usize, usize)> {
        (0..self.size())
            .filter(|&row| !matching.is_row_covered(row))
            .filter_map(|row| self.row_min[row].map(|(x, column)| (x, row, column)))
            .fold(None, |min, cell| match min {
                Some((m, _, _)) if m <= cell.0 => min,
                _ => Some(cell),
            })
    }
    ///
    /// Subtract `delta` from every uncovered row and add it to every covered column. O(n).
    ///
    /// Cells in an uncovered row and an uncovered column decrease by `delta`,
    /// cells in a covered row and a covered column increase by `delta`,
    /// and the others are unchanged.
    ///
    pub fn adjust(&mut self, matching: &MatchingState, delta: C) -> Result<()> {
        let overflow = HungarianError::Overflow("adjusting duals");
        for row in 0..self.size() {
            if matching.is_row_covered(row) {
                continue;
            }
            self.row_shift[row] = self.row_shift[row]
                .checked_sub(delta)
                .ok_or_else(|| overflow.clone())?;
            if let Some((x, column)) = self.row_min[row] {
                let x = x.checked_sub(delta).ok_or_else(|| overflow.clone())?;
                self.row_min[row] = Some((x, column));
            }
        }
        for column in 0..self.size() {
            if matching.is_column_covered(column) {
                self.column_shift[column] = self.column_shift[column]
                    .checked_add(delta)
                    .ok_or_else(|| overflow.clone())?;
            }
        }
        Ok(())
    }
    ///
    /// Apply the shifts to `working` and reset them. O(n^2).
    ///
    pub fn fold_into(&mut self, working: &mut Matrix<C>) -> Result<()> {
        for row in 0..working.size() {
            for column in 0..working.size() {
                let x = self.value(working, row, column)?;
                working[(row, column)] = x;
            }
        }
        self.row_shift.iter_mut().for_each(|x| *x = C::zero());
        self.column_shift.iter_mut().for_each(|x| *x = C::zero());
        Ok(())
    }
}

//
// phase functions
//

///
/// Minimum of the cells in an uncovered row and an uncovered column is
/// * added to every cell in a covered row and a covered column
/// * subtracted from every cell in an uncovered row and an uncovered column
///
/// and the other cells are unchanged. Returns the minimum; zero means no change.
///
pub fn adjust_duals<C: CostLike>(slack: &mut Slack<C>, matching: &MatchingState) -> Result<C> {
    let (min, _, _) = slack.min_uncovered(matching).ok_or_else(|| {
        HungarianError::InvariantViolation(format!(
            "every line is covered but only {} of {} rows are matched",
            matching.n_stars(),
            matching.size()
        ))
    })?;
    if min.is_zero() {
        return Ok(min);
    }
    trace!("adjust duals by {}", min);
    slack.adjust(matching, min)?;
    Ok(min)
}

///
/// First zero in an uncovered row and an uncovered column, scanning rows then columns.
///
pub fn find_uncovered_zero<C: CostLike>(
    slack: &Slack<C>,
    matching: &MatchingState,
) -> Option<(usize, usize)> {
    (0..slack.size())
        .filter(|&row| !matching.is_row_covered(row))
        .find_map(|row| match slack.row_min[row] {
            Some((x, column)) if x.is_zero() => Some((row, column)),
            _ => None,
        })
}

///
/// Flip the alternating chain starting at the primed zero `(row, column)`.
///
/// ```text
/// prime (r, c) -> star (r0, c) in the same column -> prime (r0, c0) in the same row -> ...
/// ```
///
/// Each prime on the chain becomes a star, replacing the star of its column,
/// until a column without star is reached. Returns the number of primes on the chain.
///
pub fn augment(matching: &mut MatchingState, row: usize, column: usize) -> Result<usize> {
    let n = matching.size();
    let (mut row, mut column) = (row, column);
    let mut length = 1;
    loop {
        let star_row = matching.star_in_column(column);
        matching.star(row, column);
        match star_row {
            None => return Ok(length),
            Some(star_row) => {
                let prime_column = matching.prime_in_row(star_row).ok_or_else(|| {
                    HungarianError::InvariantViolation(format!(
                        "star ({}, {}) on the augmenting chain has no prime in its row",
                        star_row, column
                    ))
                })?;
                row = star_row;
                column = prime_column;
                length += 1;
                if length > n {
                    return Err(HungarianError::InvariantViolation(format!(
                        "augmenting chain is longer than {}",
                        n
                    )));
                }
            }
        }
    }
}

//
// tests
//
#[cfg(test)]
mod tests {
    use super::super::mocks;
    use super::super::reduce::reduce;
    use super::*;

    fn matrix(rows: &[&[i32]]) -> Matrix<i32> {
        Matrix::from_fn(rows.len(), |r, c| rows[r][c])
    }

    #[test]
    fn adjust_duals_shifts_by_uncovered_minimum() {
        let mut m = matrix(&[&[0, 1, 2], &[0, 3, 4], &[0, 5, 6]]);
        let mut s = MatchingState::star_zeros(&m);
        // only column 0 is covered
        assert_eq!(s.n_covered(), 1);
        let mut slack = Slack::new(&m, &s);
        let min = adjust_duals(&mut slack, &s).unwrap();
        assert_eq!(min, 1);
        assert_eq!(slack.value(&m, 0, 1), Ok(0));
        assert_eq!(slack.value(&m, 2, 0), Ok(0));
        assert_eq!(find_uncovered_zero(&slack, &s), Some((0, 1)));

        // prime (0, 1): row 0 is covered, column 0 is released
        s.prime(0, 1);
        slack.uncover_column(&m, &s, 0).unwrap();
        let min = adjust_duals(&mut slack, &s).unwrap();
        assert_eq!(min, 0);
        assert_eq!(find_uncovered_zero(&slack, &s), Some((1, 0)));

        slack.fold_into(&mut m).unwrap();
        assert_eq!(m, matrix(&[&[0, 0, 1], &[0, 2, 3], &[0, 4, 5]]));
        // shifts are consumed by the fold
        assert_eq!(slack.value(&m, 1, 1), Ok(2));
    }

    #[test]
    fn adjust_duals_adds_to_doubly_covered() {
        let mut m = matrix(&[&[0, 2, 0], &[1, 0, 4], &[0, 3, 5]]);
        let mut s = MatchingState::empty(3);
        s.star(0, 2);
        s.star(1, 1);
        s.star(2, 0);
        s.prime(0, 0);
        // covered: row 0, columns 0 and 1. uncovered cells: (1,2)=4 (2,2)=5
        let mut slack = Slack::new(&m, &s);
        assert_eq!(slack.min_uncovered(&s), Some((4, 1, 2)));
        let min = adjust_duals(&mut slack, &s).unwrap();
        assert_eq!(min, 4);
        slack.fold_into(&mut m).unwrap();
        assert_eq!(m, matrix(&[&[4, 6, 0], &[1, 0, 0], &[0, 3, 1]]));
    }

    #[test]
    fn adjust_duals_overflow_of_doubly_covered() {
        let mut m = matrix(&[&[0, i32::MAX - 1, 0], &[1, 0, 4], &[0, 3, 5]]);
        let mut s = MatchingState::empty(3);
        s.star(0, 2);
        s.star(1, 1);
        s.star(2, 0);
        s.prime(0, 0);
        // (0, 1) is in a covered row and a covered column, and grows past i32::MAX
        let mut slack = Slack::new(&m, &s);
        assert_eq!(adjust_duals(&mut slack, &s), Ok(4));
        assert_eq!(
            slack.value(&m, 0, 1),
            Err(HungarianError::Overflow("adjusting duals"))
        );
        assert_eq!(
            slack.fold_into(&mut m),
            Err(HungarianError::Overflow("adjusting duals"))
        );
    }

    #[test]
    fn adjust_duals_fails_when_everything_is_covered() {
        let m = matrix(&[&[0, 1], &[1, 0]]);
        let s = MatchingState::star_zeros(&m);
        let mut slack = Slack::new(&m, &s);
        assert!(matches!(
            adjust_duals(&mut slack, &s),
            Err(HungarianError::InvariantViolation(_))
        ));
    }

    #[test]
    fn find_uncovered_zero_row_major() {
        let m = matrix(&[&[0, 1, 0], &[0, 0, 1], &[1, 0, 1]]);
        let mut s = MatchingState::empty(3);
        assert_eq!(find_uncovered_zero(&Slack::new(&m, &s), &s), Some((0, 0)));
        s.star(0, 0);
        assert_eq!(find_uncovered_zero(&Slack::new(&m, &s), &s), Some((0, 2)));
        s.prime(0, 2);
        assert_eq!(find_uncovered_zero(&Slack::new(&m, &s), &s), Some((1, 0)));
    }

    #[test]
    fn uncover_column_keeps_smallest_column_on_ties() {
        let m = matrix(&[&[3, 2, 2], &[0, 6, 5], &[2, 0, 2]]);
        let mut s = MatchingState::empty(3);
        s.star(1, 0);
        s.star(2, 1);
        // columns 0 and 1 are covered
        let mut slack = Slack::new(&m, &s);
        assert_eq!(slack.min_uncovered(&s), Some((2, 0, 2)));
        s.prime(2, 2);
        slack.uncover_column(&m, &s, 1).unwrap();
        // row 0 ties at 2 between columns 1 and 2
        assert_eq!(slack.min_uncovered(&s), Some((2, 0, 1)));
    }

    #[test]
    fn augment_flips_chain() {
        // stars (0,0) (1,1); primes (2,0) (0,1) (1,2)
        let mut s = MatchingState::empty(3);
        s.star(0, 0);
        s.star(1, 1);
        s.prime(0, 1);
        s.prime(1, 2);
        s.prime(2, 0);
        let length = augment(&mut s, 2, 0).unwrap();
        assert_eq!(length, 3);
        assert_eq!(s.to_assignment(), Some(Assignment::from(vec![1, 2, 0])));
        assert!(s.is_valid_matching());
    }

    #[test]
    fn augment_without_prime_is_violation() {
        let mut s = MatchingState::empty(2);
        s.star(0, 0);
        assert!(matches!(
            augment(&mut s, 1, 0),
            Err(HungarianError::InvariantViolation(_))
        ));
    }

    #[test]
    fn engine_phases() {
        let reduced = reduce(&matrix(&[&[4, 1, 3], &[2, 0, 5], &[3, 2, 2]])).unwrap();
        let mut e = Engine::new(3, 9);
        let phase = e.next(Phase::Reduce, &reduced).unwrap();
        assert_eq!(phase, Phase::CheckComplete);
        assert_eq!(e.working(), &reduced);
        // greedy stars: column 0 -> row 1, column 1 -> row 0, column 2 -> row 2
        assert!(e.matching().is_perfect());
        assert_eq!(e.next(phase, &reduced).unwrap(), Phase::Done);
        assert_eq!(e.next(Phase::Done, &reduced).unwrap(), Phase::Done);
    }

    #[test]
    fn engine_run_mocks() {
        for (cost, optimum) in mocks::all_mocks() {
            let reduced = reduce(cost.matrix()).unwrap();
            let n = cost.size();
            let mut e = Engine::new(n, n * n);
            let a = e.run(&reduced).unwrap();
            assert_eq!(cost.total_cost(&a).unwrap(), optimum);
            let stats = e.stats();
            assert_eq!(stats.initial_stars + stats.iterations, n);
        }
    }

    #[test]
    fn engine_iteration_limit() {
        let reduced = reduce(mocks::mock_matrix3().0.matrix()).unwrap();
        let mut e = Engine::new(10, 0);
        assert!(matches!(
            e.run(&reduced),
            Err(HungarianError::InvariantViolation(_))
        ));
    }
}
