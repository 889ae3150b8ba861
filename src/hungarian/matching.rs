//! Partial matching on the zeros of the reduced matrix
//! - stars: committed pairs, column -> row
//! - primes: tentative pairs of the current search, row -> column
//!
//! Coverage of rows and columns is never stored. It is derived from the stars and primes:
//! * a column is covered iff it has a star whose row is not primed
//! * a row is covered iff it is primed
use super::assignment::Assignment;
use super::cost::CostLike;
use super::matrix::Matrix;

///
/// State of the matching owned by one `solve()` call.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchingState {
    /// `stars[column] = Some(row)` if (row, column) is starred
    stars: Vec<Option<usize>>,
    /// `primes[row] = Some(column)` if (row, column) is primed
    primes: Vec<Option<usize>>,
}

impl MatchingState {
    /// no stars and no primes
    pub fn empty(size: usize) -> MatchingState {
        MatchingState {
            stars: vec![None; size],
            primes: vec![None; size],
        }
    }

    ///
    /// Greedy initial matching on zeros.
    ///
    /// Columns are scanned in index order, and each column stars the first (smallest index)
    /// row holding a zero in it that is not starred by an earlier column.
    ///
    pub fn star_zeros<C: CostLike>(matrix: &Matrix<C>) -> MatchingState {
        let n = matrix.size();
        let mut state = MatchingState::empty(n);
        let mut row_is_starred = vec![false; n];
        for column in 0..n {
            let row = matrix
                .column(column)
                .enumerate()
                .find(|&(row, x)| x.is_zero() && !row_is_starred[row])
                .map(|(row, _)| row);
            if let Some(row) = row {
                state.star(row, column);
                row_is_starred[row] = true;
            }
        }
        state
    }

    pub fn size(&self) -> usize {
        self.stars.len()
    }

    //
    // stars
    //

    /// number of stars
    pub fn n_stars(&self) -> usize {
        self.stars.iter().filter(|s| s.is_some()).count()
    }
    pub fn is_perfect(&self) -> bool {
        self.stars.iter().all(|s| s.is_some())
    }
    /// row of the star in the column
    pub fn star_in_column(&self, column: usize) -> Option<usize> {
        self.stars[column]
    }
    /// column of the star in the row
    pub fn star_in_row(&self, row: usize) -> Option<usize> {
        self.stars.iter().position(|&s| s == Some(row))
    }
    ///
    /// Star (row, column). An existing star in the column is replaced.
    ///
    pub fn star(&mut self, row: usize, column: usize) {
        self.stars[column] = Some(row);
    }

    //
    // primes
    //

    pub fn prime(&mut self, row: usize, column: usize) {
        self.primes[row] = Some(column);
    }
    /// column of the prime in the row
    pub fn prime_in_row(&self, row: usize) -> Option<usize> {
        self.primes[row]
    }
    pub fn clear_primes(&mut self) {
        self.primes.iter_mut().for_each(|p| *p = None);
    }

    //
    // coverage
    //

    pub fn is_row_covered(&self, row: usize) -> bool {
        self.primes[row].is_some()
    }
    pub fn is_column_covered(&self, column: usize) -> bool {
        match self.stars[column] {
            Some(row) => !self.is_row_covered(row),
            None => false,
        }
    }
    /// the cell is in an uncovered row and an uncovered column
    pub fn is_uncovered(&self, row: usize, column: usize) -> bool {
        !self.is_row_covered(row) && !self.is_column_covered(column)
    }
    /// number of covering lines (rows and columns)
    pub fn n_covered(&self) -> usize {
        let rows = (0..self.size()).filter(|&r| self.is_row_covered(r)).count();
        let columns = (0..self.size())
            .filter(|&c| self.is_column_covered(c))
            .count();
        rows + columns
    }

    ///
    /// Check if each row appears in at most one star.
    /// Each column has at most one star by construction.
    ///
    pub fn is_valid_matching(&self) -> bool {
        let mut seen = vec![false; self.size()];
        self.stars.iter().flatten().all(|&row| {
            if row >= seen.len() || seen[row] {
                false
            } else {
                seen[row] = true;
                true
            }
        })
    }

    ///
    /// Convert the perfect matching into row -> column assignment.
    /// Returns None if some row is not starred.
    ///
    pub fn to_assignment(&self) -> Option<Assignment> {
        let mut columns = vec![None; self.size()];
        for (column, row) in self.stars.iter().enumerate() {
            columns[(*row)?] = Some(column);
        }
        columns
            .into_iter()
            .collect::<Option<Vec<usize>>>()
            .map(Assignment::from)
    }
}
