//!
//! Reduction of the cost matrix
//!
//! Subtracting a constant from a whole row or column does not change
//! which assignments are optimal, so the matrix is shifted until
//! every row and every column has a zero and no entry is negative.
//!
use super::cost::{min_of, CostLike};
use super::error::{HungarianError, Result};
use super::matrix::Matrix;

///
/// Minimum value in each row
///
pub fn row_minimums<C: CostLike>(matrix: &Matrix<C>) -> Vec<C> {
    matrix
        .rows()
        .map(|row| min_of(row.iter().copied()).unwrap_or_else(C::zero))
        .collect()
}

///
/// Minimum value in each column, i.e. `row_minimums` of the transposed matrix
///
pub fn column_minimums<C: CostLike>(matrix: &Matrix<C>) -> Vec<C> {
    row_minimums(&matrix.transpose())
}

///
/// Reduce the matrix in two phases:
/// (1) subtract the column minimum from each column
/// (2) subtract the row minimum of the result from each row
///
/// After this every row and every column contains at least one zero
/// and all entries are nonnegative.
///
/// Fails with `HungarianError::Overflow` if an entry minus its column minimum
/// does not fit in the cost type.
///
pub fn reduce<C: CostLike>(matrix: &Matrix<C>) -> Result<Matrix<C>> {
    let mut reduced = matrix.clone();

    let column_mins = column_minimums(matrix);
    subtract_lines(&mut reduced, |_, column| column_mins[column], "reducing columns")?;

    let row_mins = row_minimums(&reduced);
    subtract_lines(&mut reduced, |row, _| row_mins[row], "reducing rows")?;
    Ok(reduced)
}

fn subtract_lines<C: CostLike, F: Fn(usize, usize) -> C>(
    matrix: &mut Matrix<C>,
    min: F,
    operation: &'static str,
) -> Result<()> {
    for row in 0..matrix.size() {
        for column in 0..matrix.size() {
            matrix[(row, column)] = matrix[(row, column)]
                .checked_sub(min(row, column))
                .ok_or(HungarianError::Overflow(operation))?;
        }
    }
    Ok(())
}
