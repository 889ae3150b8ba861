//! Matrix definitions
//! - Matrix: dense n x n grid, used as the working (reduced) matrix
//! - CostMatrix: validated and immutable input of the problem
use super::assignment::Assignment;
use super::cost::CostLike;
use super::error::{HungarianError, Result};
use itertools::Itertools; // for join
use std::ops::{Index, IndexMut};

/// Square matrix, stored row-major in a flat vec.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<C> {
    size: usize,
    cells: Vec<C>,
}

impl<C: CostLike> Matrix<C> {
    /// n x n matrix whose cells are `f(row, column)`
    pub fn from_fn<F: FnMut(usize, usize) -> C>(size: usize, mut f: F) -> Matrix<C> {
        let cells = (0..size)
            .flat_map(|row| (0..size).map(move |column| (row, column)))
            .map(|(row, column)| f(row, column))
            .collect();
        Matrix { size, cells }
    }
    /// number of rows (= number of columns)
    pub fn size(&self) -> usize {
        self.size
    }
    pub fn row(&self, row: usize) -> &[C] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }
    pub fn column(&self, column: usize) -> impl Iterator<Item = C> + '_ {
        self.cells.iter().skip(column).step_by(self.size.max(1)).copied()
    }
    pub fn rows(&self) -> impl Iterator<Item = &[C]> + '_ {
        (0..self.size).map(move |row| self.row(row))
    }
    pub fn transpose(&self) -> Matrix<C> {
        Matrix::from_fn(self.size, |row, column| self[(column, row)])
    }
    /// `map` with a fallible function, None if `f` fails on any cell
    pub fn try_map<F: FnMut(C) -> Option<C>>(&self, f: F) -> Option<Matrix<C>> {
        let cells = self.cells.iter().copied().map(f).collect::<Option<Vec<C>>>()?;
        Some(Matrix {
            size: self.size,
            cells,
        })
    }
}

impl<C> Index<(usize, usize)> for Matrix<C> {
    type Output = C;
    fn index(&self, (row, column): (usize, usize)) -> &C {
        &self.cells[row * self.size + column]
    }
}

impl<C> IndexMut<(usize, usize)> for Matrix<C> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut C {
        &mut self.cells[row * self.size + column]
    }
}

impl<C: CostLike> std::fmt::Display for Matrix<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            writeln!(f, "[{}]", row.iter().join(", "))?;
        }
        Ok(())
    }
}

///
/// Cost matrix of the assignment problem.
///
/// It is square, every entry is finite, and it is never modified after construction.
///
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix<C>(Matrix<C>);

impl<C: CostLike> CostMatrix<C> {
    ///
    /// Validate and store the rows.
    ///
    /// Fails with `HungarianError::Shape` if any row length differs from the number of rows,
    /// and with `HungarianError::NonFinite` if any entry is NaN or infinite.
    ///
    pub fn new(rows: Vec<Vec<C>>) -> Result<CostMatrix<C>> {
        let size = rows.len();
        if let Some((row, r)) = rows.iter().find_position(|r| r.len() != size) {
            return Err(HungarianError::Shape {
                rows: size,
                row,
                columns: r.len(),
            });
        }
        for (row, r) in rows.iter().enumerate() {
            if let Some((column, _)) = r.iter().find_position(|x| !x.is_finite()) {
                return Err(HungarianError::NonFinite { row, column });
            }
        }
        let cells = rows.into_iter().flatten().collect();
        Ok(CostMatrix(Matrix { size, cells }))
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    pub fn matrix(&self) -> &Matrix<C> {
        &self.0
    }
    /// the matrix whose entries are all negated, used to maximize
    pub fn negated(&self) -> Result<CostMatrix<C>> {
        self.0
            .try_map(|x| x.checked_neg())
            .map(CostMatrix)
            .ok_or(HungarianError::Overflow("negating the matrix"))
    }
    ///
    /// Sum of `cost[(row, assignment[row])]` over all rows.
    ///
    /// The assignment must be a permutation of `0..n`.
    ///
    pub fn total_cost(&self, assignment: &Assignment) -> Result<C> {
        if assignment.len() != self.size() {
            return Err(HungarianError::InvalidAssignment(format!(
                "assignment has {} rows but the matrix has {}",
                assignment.len(),
                self.size()
            )));
        }
        if !assignment.is_permutation() {
            return Err(HungarianError::InvalidAssignment(format!(
                "{} is not a permutation",
                assignment
            )));
        }
        assignment
            .iter()
            .try_fold(C::zero(), |total, (row, column)| {
                total.checked_add(self.0[(row, column)])
            })
            .ok_or(HungarianError::Overflow("summing the assignment cost"))
    }
}

impl<C: CostLike> TryFrom<Vec<Vec<C>>> for CostMatrix<C> {
    type Error = HungarianError;
    fn try_from(rows: Vec<Vec<C>>) -> Result<CostMatrix<C>> {
        CostMatrix::new(rows)
    }
}

impl<C> Index<(usize, usize)> for CostMatrix<C> {
    type Output = C;
    fn index(&self, index: (usize, usize)) -> &C {
        &self.0[index]
    }
}

//
// tests
//
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_access() {
        let m = Matrix::from_fn(3, |r, c| (r * 10 + c) as i32);
        assert_eq!(m.size(), 3);
        assert_eq!(m[(1, 2)], 12);
        assert_eq!(m.row(2), &[20, 21, 22]);
        assert_eq!(m.column(1).collect::<Vec<_>>(), vec![1, 11, 21]);
        assert_eq!(m.transpose()[(1, 2)], 21);
        assert_eq!(m.try_map(|x| x.checked_neg()).unwrap()[(2, 0)], -20);
        assert_eq!(m.try_map(|x| if x > 20 { None } else { Some(x) }), None);
        assert_eq!(m.rows().count(), 3);
        assert_eq!(m.to_string(), "[0, 1, 2]\n[10, 11, 12]\n[20, 21, 22]\n");
    }

    #[test]
    fn cost_matrix_shape() {
        // square
        assert!(CostMatrix::new(vec![vec![1, 2], vec![3, 4]]).is_ok());
        // empty is also square
        assert_eq!(CostMatrix::<i32>::new(vec![]).unwrap().size(), 0);

        // wide
        assert_eq!(
            CostMatrix::new(vec![vec![1, 2, 3], vec![4, 5, 6]]),
            Err(HungarianError::Shape {
                rows: 2,
                row: 0,
                columns: 3
            })
        );
        // tall
        assert_eq!(
            CostMatrix::new(vec![vec![1], vec![2]]),
            Err(HungarianError::Shape {
                rows: 2,
                row: 0,
                columns: 1
            })
        );
        // ragged
        assert_eq!(
            CostMatrix::new(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8]]),
            Err(HungarianError::Shape {
                rows: 3,
                row: 2,
                columns: 2
            })
        );
    }

    #[test]
    fn cost_matrix_non_finite() {
        assert_eq!(
            CostMatrix::new(vec![vec![1.0, 2.0], vec![f64::INFINITY, 4.0]]),
            Err(HungarianError::NonFinite { row: 1, column: 0 })
        );
        assert!(CostMatrix::try_from(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).is_ok());
    }

    #[test]
    fn cost_matrix_overflow() {
        let m = CostMatrix::new(vec![vec![i32::MIN, 0], vec![0, 0]]).unwrap();
        assert_eq!(
            m.negated(),
            Err(HungarianError::Overflow("negating the matrix"))
        );

        let m = CostMatrix::new(vec![vec![i32::MAX, 0], vec![0, i32::MAX]]).unwrap();
        assert_eq!(
            m.total_cost(&Assignment::from(vec![0, 1])),
            Err(HungarianError::Overflow("summing the assignment cost"))
        );
        assert_eq!(m.total_cost(&Assignment::from(vec![1, 0])), Ok(0));
        assert_eq!(m.negated().unwrap()[(0, 0)], -i32::MAX);
    }

    #[test]
    fn cost_matrix_total_cost() {
        let m = CostMatrix::new(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
        assert_eq!(m.total_cost(&Assignment::from(vec![0, 1, 2])), Ok(15));
        assert_eq!(m.total_cost(&Assignment::from(vec![2, 0, 1])), Ok(3 + 4 + 8));
        assert_eq!(m.negated().unwrap()[(1, 1)], -5);
        assert!(matches!(
            m.total_cost(&Assignment::from(vec![0, 1])),
            Err(HungarianError::InvalidAssignment(_))
        ));
        assert!(matches!(
            m.total_cost(&Assignment::from(vec![0, 0, 1])),
            Err(HungarianError::InvalidAssignment(_))
        ));
    }
}
